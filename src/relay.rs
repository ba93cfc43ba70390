use std::fmt;

use gloo_net::http::Request;
use serde::Serialize;

use crate::booking::rules::BookingForm;
use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub enum RelayError {
    Http(u16),
    Network(String),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Http(status) => write!(f, "relay rejected the request: {}", status),
            RelayError::Network(reason) => write!(f, "network error: {}", reason),
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct RelayPayload {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub user_id: &'static str,
    pub template_params: TemplateParams,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub reply_to: String,
    pub phone: String,
    pub requested_date: String,
    pub requested_time: String,
    pub message: String,
}

pub fn booking_payload(form: &BookingForm) -> RelayPayload {
    RelayPayload {
        service_id: config::RELAY_SERVICE_ID,
        template_id: config::RELAY_BOOKING_TEMPLATE,
        user_id: config::RELAY_PUBLIC_KEY,
        template_params: TemplateParams {
            from_name: form.name.clone(),
            reply_to: form.email.clone(),
            phone: form.phone.clone(),
            requested_date: form.date.clone(),
            requested_time: form.time.clone(),
            message: form.message.clone(),
        },
    }
}

pub fn contact_payload(name: &str, email: &str, phone: &str, message: &str) -> RelayPayload {
    RelayPayload {
        service_id: config::RELAY_SERVICE_ID,
        template_id: config::RELAY_CONTACT_TEMPLATE,
        user_id: config::RELAY_PUBLIC_KEY,
        template_params: TemplateParams {
            from_name: name.to_string(),
            reply_to: email.to_string(),
            phone: phone.to_string(),
            requested_date: String::new(),
            requested_time: String::new(),
            message: message.to_string(),
        },
    }
}

pub async fn send_booking_notification(form: &BookingForm) -> Result<(), RelayError> {
    send(booking_payload(form)).await
}

pub async fn send_contact_message(
    name: &str,
    email: &str,
    phone: &str,
    message: &str,
) -> Result<(), RelayError> {
    send(contact_payload(name, email, phone, message)).await
}

async fn send(payload: RelayPayload) -> Result<(), RelayError> {
    match config::get_relay_url() {
        None => {
            // Debug builds: echo the payload instead of mailing anyone.
            gloo_console::log!(
                "mock relay send:",
                serde_json::to_string(&payload).unwrap_or_default()
            );
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            Ok(())
        }
        Some(url) => {
            let request = Request::post(url)
                .header("Content-Type", "application/json")
                .json(&payload)
                .map_err(|e| RelayError::Network(e.to_string()))?;

            match request.send().await {
                Ok(response) if response.ok() => Ok(()),
                Ok(response) => Err(RelayError::Http(response.status())),
                Err(e) => Err(RelayError::Network(e.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> BookingForm {
        BookingForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "+1 555 123 4567".into(),
            date: "2024-01-08".into(),
            time: "10:00".into(),
            message: "Living room refresh".into(),
        }
    }

    #[test]
    fn booking_payload_matches_the_relay_contract() {
        let value = serde_json::to_value(booking_payload(&sample_form())).unwrap();
        assert_eq!(value["service_id"], config::RELAY_SERVICE_ID);
        assert_eq!(value["template_id"], config::RELAY_BOOKING_TEMPLATE);
        assert_eq!(value["user_id"], config::RELAY_PUBLIC_KEY);
        assert_eq!(value["template_params"]["reply_to"], "jane@example.com");
        assert_eq!(value["template_params"]["requested_time"], "10:00");
    }

    #[test]
    fn contact_payload_uses_the_contact_template() {
        let payload = contact_payload("Jane", "jane@example.com", "", "Hello there");
        assert_eq!(payload.template_id, config::RELAY_CONTACT_TEMPLATE);
        assert!(payload.template_params.requested_date.is_empty());
        assert_eq!(payload.template_params.message, "Hello there");
    }

    #[test]
    fn relay_errors_render_for_toasts() {
        assert_eq!(
            RelayError::Http(502).to_string(),
            "relay rejected the request: 502"
        );
        assert!(RelayError::Network("timed out".into())
            .to_string()
            .contains("timed out"));
    }
}
