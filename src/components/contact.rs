//! Contact form: validation, remote submission with mailto fallback, and the
//! plan-prefill quick actions. One submission attempt per submit; outcomes
//! are surfaced only through the alert panel (and, on fallback, a browser
//! navigation).

use gloo_console::error;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::alert::{ActionKind, AlertPanel, AlertState, Severity};
use crate::config;
use crate::dom;
use crate::form::{self, ContactPayload, DeliveryRoute, FieldValues};

/// A pricing-plan selection handed down from the pricing section. The
/// sequence number makes re-selecting the same plan observable as a new
/// prefill.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanChoice {
    pub label: String,
    pub seq: u32,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub selected_plan: Option<PlanChoice>,
}

/// Where the current submit interaction stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Validating,
    Invalid,
    Sending,
    Succeeded,
    FailedRemote,
    FallbackMailto,
}

pub enum Msg {
    NameInput(String),
    EmailInput(String),
    MessageInput(String),
    Submit,
    Delivered,
    DeliveryFailed(String),
    FallbackDue(u32),
    FocusName,
    SendNow,
    EditDetails,
    OpenChat,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

pub struct ContactForm {
    fields: FieldValues,
    plan: String,
    phase: Phase,
    alert: Option<AlertState>,
    name_invalid: bool,
    email_invalid: bool,
    /// Submit-interaction counter; fallback timers carry the value they were
    /// scheduled under so a superseded attempt's timer is ignored.
    attempt: u32,
    /// Trimmed values of the in-flight attempt, kept aside so the fallback
    /// mailto reflects what was submitted even if the user keeps editing.
    pending: Option<FieldValues>,
    fallback_timer: Option<Timeout>,
    focus_timer: Option<Timeout>,
    name_ref: NodeRef,
    email_ref: NodeRef,
}

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            fields: FieldValues::default(),
            plan: String::new(),
            phase: Phase::Idle,
            alert: None,
            name_invalid: false,
            email_invalid: false,
            attempt: 0,
            pending: None,
            fallback_timer: None,
            focus_timer: None,
            name_ref: NodeRef::default(),
            email_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::NameInput(value) => {
                self.fields.name = value;
                self.name_invalid = false;
                true
            }
            Msg::EmailInput(value) => {
                self.fields.email = value;
                self.email_invalid = false;
                true
            }
            Msg::MessageInput(value) => {
                self.fields.message = value;
                true
            }
            Msg::Submit => self.submit(ctx),
            Msg::Delivered => {
                self.phase = Phase::Succeeded;
                self.pending = None;
                self.alert = Some(AlertState::show(
                    "Thanks! Your message has been sent.",
                    Severity::Success,
                ));
                self.fields = FieldValues::default();
                self.plan.clear();
                true
            }
            Msg::DeliveryFailed(detail) => {
                // Diagnostic only; the visitor sees the curated alert text.
                error!("Contact form send failed:", detail);
                self.phase = Phase::FailedRemote;
                self.alert = Some(AlertState::show(
                    "Send failed. Opening your email client as a fallback.",
                    Severity::Error,
                ));
                let attempt = self.attempt;
                let link = ctx.link().clone();
                self.fallback_timer = Some(Timeout::new(
                    config::MAILTO_FALLBACK_DELAY_MS,
                    move || link.send_message(Msg::FallbackDue(attempt)),
                ));
                true
            }
            Msg::FallbackDue(attempt) => {
                if attempt != self.attempt || self.phase != Phase::FailedRemote {
                    // A newer submit superseded this timer.
                    return false;
                }
                self.fallback_timer.take();
                self.phase = Phase::FallbackMailto;
                if let Some(fields) = self.pending.take() {
                    dom::navigate_to(&form::mailto_url(&fields));
                }
                true
            }
            Msg::FocusName => {
                self.focus_timer.take();
                if let Some(input) = self.name_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
                false
            }
            Msg::SendNow => self.send_now(ctx),
            Msg::EditDetails => {
                self.alert = Some(AlertState::show(
                    "You can edit the form now, then press Send.",
                    Severity::Info,
                ));
                true
            }
            Msg::OpenChat => {
                dom::open_external(&form::chat_link(&self.plan));
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let selection = ctx.props().selected_plan.clone();
        if selection != old_props.selected_plan {
            if let Some(choice) = selection {
                self.prefill(ctx, &choice.label);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput_name = link.callback(|event: InputEvent| {
            Msg::NameInput(event.target_unchecked_into::<HtmlInputElement>().value())
        });
        let oninput_email = link.callback(|event: InputEvent| {
            Msg::EmailInput(event.target_unchecked_into::<HtmlInputElement>().value())
        });
        let oninput_message = link.callback(|event: InputEvent| {
            Msg::MessageInput(event.target_unchecked_into::<HtmlTextAreaElement>().value())
        });
        let onsubmit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });

        html! {
            <form class="contact-form" {onsubmit}>
                {
                    if let Some(state) = &self.alert {
                        html! { <AlertPanel state={state.clone()} /> }
                    } else {
                        html! {}
                    }
                }
                <div class="form-field">
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        name="name"
                        type="text"
                        placeholder="Your name"
                        ref={self.name_ref.clone()}
                        class={classes!(self.name_invalid.then_some("input-error"))}
                        value={self.fields.name.clone()}
                        oninput={oninput_name}
                    />
                </div>
                <div class="form-field">
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        name="email"
                        type="email"
                        placeholder="you@example.com"
                        ref={self.email_ref.clone()}
                        class={classes!(self.email_invalid.then_some("input-error"))}
                        value={self.fields.email.clone()}
                        oninput={oninput_email}
                    />
                </div>
                <div class="form-field">
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        name="message"
                        rows="6"
                        placeholder="Tell us about your project"
                        value={self.fields.message.clone()}
                        oninput={oninput_message}
                    />
                </div>
                <input type="hidden" name="plan" value={self.plan.clone()} />
                <button type="submit" class="btn btn-primary">{"Send message"}</button>
                <style>
                    {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        max-width: 560px;
                    }
                    .contact-form .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.35rem;
                    }
                    .contact-form label {
                        font-weight: 600;
                        font-size: 0.9rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        padding: 0.7rem 0.9rem;
                        border: 1px solid #d1d5db;
                        border-radius: 8px;
                        font: inherit;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: 2px solid #2563eb;
                        outline-offset: 1px;
                    }
                    .contact-form .input-error {
                        border-color: #dc2626;
                        outline-color: #dc2626;
                    }
                    "#}
                </style>
            </form>
        }
    }
}

impl ContactForm {
    /// The submit path shared by the form's submit button and "Send now".
    fn submit(&mut self, ctx: &Context<Self>) -> bool {
        self.phase = Phase::Validating;
        if !self.fields.is_complete() {
            self.phase = Phase::Invalid;
            self.alert = Some(AlertState::show(
                "Please complete all required fields.",
                Severity::Error,
            ));
            return true;
        }

        self.phase = Phase::Sending;
        self.attempt += 1;
        self.fallback_timer = None;
        let fields = self.fields.trimmed();
        self.pending = Some(fields.clone());
        self.alert = Some(AlertState::show(
            "Sending message — please wait...",
            Severity::Info,
        ));

        match form::delivery_route(config::get_form_endpoint()) {
            DeliveryRoute::EmailClient => {
                // Nothing configured: hand off to the email client directly.
                self.phase = Phase::FallbackMailto;
                self.pending = None;
                dom::navigate_to(&form::mailto_url(&fields));
            }
            DeliveryRoute::Remote(endpoint) => {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    link.send_message(deliver(endpoint, fields).await);
                });
            }
        }
        true
    }

    /// "Send now" from the plan-prefill alert: name and email must be
    /// present (the message was just prefilled), otherwise mark and focus
    /// the first missing field.
    fn send_now(&mut self, ctx: &Context<Self>) -> bool {
        self.name_invalid = self.fields.name.trim().is_empty();
        self.email_invalid = self.fields.email.trim().is_empty();
        if self.name_invalid || self.email_invalid {
            let first_missing = if self.name_invalid {
                &self.name_ref
            } else {
                &self.email_ref
            };
            if let Some(input) = first_missing.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            self.alert = Some(AlertState::show(
                "Please provide your name and email before sending.",
                Severity::Error,
            ));
            return true;
        }
        ctx.link().send_message(Msg::Submit);
        false
    }

    fn prefill(&mut self, ctx: &Context<Self>, plan: &str) {
        self.plan = plan.to_string();
        self.fields.message = form::plan_message(plan);

        dom::scroll_to_section("contact");
        let link = ctx.link().clone();
        self.focus_timer = Some(Timeout::new(config::FOCUS_DELAY_MS, move || {
            link.send_message(Msg::FocusName)
        }));

        let mut alert = AlertState::show(
            format!("Prefilled the contact form for: {plan}"),
            Severity::Info,
        );
        let link = ctx.link();
        alert.push_action(
            "Send now",
            ActionKind::Primary,
            link.callback(|_: MouseEvent| Msg::SendNow),
        );
        alert.push_action(
            "Edit details",
            ActionKind::Outline,
            link.callback(|_: MouseEvent| Msg::EditDetails),
        );
        alert.push_action(
            "Chat on WhatsApp",
            ActionKind::Outline,
            link.callback(|_: MouseEvent| Msg::OpenChat),
        );
        self.alert = Some(alert);
    }
}

/// One POST to the configured endpoint; exactly one attempt, no retries.
async fn deliver(endpoint: &str, fields: FieldValues) -> Msg {
    let request = match Request::post(endpoint)
        .header("Accept", "application/json")
        .json(&ContactPayload::from_fields(&fields))
    {
        Ok(request) => request,
        Err(err) => return Msg::DeliveryFailed(err.to_string()),
    };

    match request.send().await {
        Ok(response) if response.ok() => Msg::Delivered,
        Ok(response) => {
            let detail = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => format!("send failed with status {}", response.status()),
            };
            Msg::DeliveryFailed(detail)
        }
        Err(err) => Msg::DeliveryFailed(err.to_string()),
    }
}
