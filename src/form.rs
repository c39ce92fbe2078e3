//! Pure contact-form logic: field validation, delivery routing and the
//! mailto / WhatsApp link builders. Everything here is DOM-free so it can be
//! unit-tested on the host; the component layer in
//! `components/contact.rs` stays a thin shell over this module.

use serde::Serialize;

use crate::config;

/// The three required contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Current values of the contact-form inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    /// Copy of the values with surrounding whitespace removed, the form the
    /// submission pipeline works on.
    pub fn trimmed(&self) -> FieldValues {
        FieldValues {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Required fields that are empty after trimming, in form order.
    pub fn missing(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(Field::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(Field::Email);
        }
        if self.message.trim().is_empty() {
            missing.push(Field::Message);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// JSON body of the remote submission request.
#[derive(Serialize)]
pub struct ContactPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

impl<'a> ContactPayload<'a> {
    pub fn from_fields(fields: &'a FieldValues) -> Self {
        Self {
            name: &fields.name,
            email: &fields.email,
            message: &fields.message,
        }
    }
}

/// Where a valid submission goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryRoute<'a> {
    /// POST to the configured endpoint, mailto only on failure.
    Remote(&'a str),
    /// No endpoint configured; open the visitor's email client directly.
    EmailClient,
}

pub fn delivery_route(endpoint: &str) -> DeliveryRoute<'_> {
    if endpoint.trim().is_empty() {
        DeliveryRoute::EmailClient
    } else {
        DeliveryRoute::Remote(endpoint)
    }
}

/// Pre-filled `mailto:` link for the fallback path.
pub fn mailto_url(fields: &FieldValues) -> String {
    let subject = format!("Website inquiry from {} ({})", fields.name, fields.email);
    let body = format!(
        "{}\n\n--\nName: {}\nEmail: {}",
        fields.message, fields.name, fields.email
    );
    format!(
        "mailto:{}?subject={}&body={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Message template written into the form when a pricing plan is selected.
pub fn plan_message(plan: &str) -> String {
    format!("I am interested in: {plan}\n\nPlease provide a quote and next steps.")
}

/// WhatsApp deep link for the "chat instead" quick action.
pub fn chat_link(plan: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(&format!("Hi, I am interested in: {plan}"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FieldValues {
        FieldValues {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn trimmed_strips_surrounding_whitespace() {
        let fields = FieldValues {
            name: "  Ada  ".to_string(),
            email: "\tada@example.com\n".to_string(),
            message: " Hello ".to_string(),
        };
        assert_eq!(fields.trimmed(), filled());
    }

    #[test]
    fn complete_fields_have_nothing_missing() {
        assert!(filled().missing().is_empty());
        assert!(filled().is_complete());
    }

    #[test]
    fn blank_fields_are_reported_in_form_order() {
        let fields = FieldValues::default();
        assert_eq!(
            fields.missing(),
            vec![Field::Name, Field::Email, Field::Message]
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut fields = filled();
        fields.message = "   \n\t".to_string();
        assert_eq!(fields.missing(), vec![Field::Message]);
        assert!(!fields.is_complete());
    }

    #[test]
    fn payload_carries_exactly_the_three_fields() {
        let fields = filled();
        let json = serde_json::to_string(&ContactPayload::from_fields(&fields)).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#
        );
    }

    #[test]
    fn empty_endpoint_routes_to_email_client() {
        assert_eq!(delivery_route(""), DeliveryRoute::EmailClient);
        assert_eq!(delivery_route("   "), DeliveryRoute::EmailClient);
    }

    #[test]
    fn configured_endpoint_routes_to_remote() {
        assert_eq!(
            delivery_route("https://formspree.io/f/abc"),
            DeliveryRoute::Remote("https://formspree.io/f/abc")
        );
    }

    #[test]
    fn mailto_url_encodes_recipient_subject_and_body() {
        assert_eq!(
            mailto_url(&filled()),
            "mailto:shumbacreations@outlook.com\
             ?subject=Website%20inquiry%20from%20Ada%20%28ada%40example.com%29\
             &body=Hello%0A%0A--%0AName%3A%20Ada%0AEmail%3A%20ada%40example.com"
        );
    }

    #[test]
    fn plan_message_uses_the_quote_template() {
        assert_eq!(
            plan_message("Pro Plan"),
            "I am interested in: Pro Plan\n\nPlease provide a quote and next steps."
        );
    }

    #[test]
    fn chat_link_encodes_the_plan_label() {
        assert_eq!(
            chat_link("Pro Plan"),
            "https://wa.me/8613779964069?text=Hi%2C%20I%20am%20interested%20in%3A%20Pro%20Plan"
        );
    }
}
