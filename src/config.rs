/// Remote submission endpoint for the contact form.
///
/// Leave empty to route submissions straight to the visitor's email client.
/// Set it to a form provider endpoint (e.g. a Formspree form URL like
/// `https://formspree.io/f/your-form-id`) to deliver over HTTP first; the
/// mailto path then only serves as the failure fallback.
pub fn get_form_endpoint() -> &'static str {
    ""
}

/// Recipient of the mailto fallback.
pub const CONTACT_EMAIL: &str = "shumbacreations@outlook.com";

/// Number behind the "Chat on WhatsApp" quick action.
pub const WHATSAPP_NUMBER: &str = "8613779964069";

/// How long the failure alert stays on screen before the mailto fallback
/// navigates away.
pub const MAILTO_FALLBACK_DELAY_MS: u32 = 700;

/// Delay between scrolling the contact section into view and focusing the
/// name field, so the scroll animation can settle first.
pub const FOCUS_DELAY_MS: u32 = 600;
