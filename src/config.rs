pub const STUDIO_NAME: &str = "Designs with Joy";
pub const STUDIO_EMAIL: &str = "hello@designswithjoy.com";
pub const STUDIO_PHONE: &str = "+1 267-291-4457";
pub const STUDIO_ADDRESS: &str = "1862 Tollgate Rd, Palm, PA 18070";

// Digits only, country code first. Used for wa.me links.
pub const WHATSAPP_NUMBER: &str = "12672914457";

pub const RELAY_SERVICE_ID: &str = "service_dwj";
pub const RELAY_BOOKING_TEMPLATE: &str = "template_dwj_booking";
pub const RELAY_CONTACT_TEMPLATE: &str = "template_dwj_contact";
pub const RELAY_PUBLIC_KEY: &str = "x8QzGmWJHnD9TPkLf";

#[cfg(debug_assertions)]
pub fn get_relay_url() -> Option<&'static str> {
    None // Local builds mock the relay and echo the payload to the console
}

#[cfg(not(debug_assertions))]
pub fn get_relay_url() -> Option<&'static str> {
    Some("https://api.emailjs.com/api/v1.0/email/send")
}
