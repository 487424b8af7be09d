use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use log::{debug, info};
use serde::Serialize;

use crate::config::{self, EmailJsConfig};
use crate::contact::validation::ContactForm;
use crate::error::SiteError;

/// Template parameters handed to the email provider.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub inquiry_type: String,
    pub message: String,
}

impl EmailPayload {
    /// Trimmed copy of an already validated form.
    pub fn from_form(form: &ContactForm) -> Self {
        let inquiry_type = form
            .inquiry_kind()
            .map(|kind| kind.label().to_string())
            .unwrap_or_else(|| form.inquiry.trim().to_string());
        Self {
            from_name: form.name.trim().to_string(),
            from_email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            inquiry_type,
            message: form.message.trim().to_string(),
        }
    }
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

pub trait Mailer {
    fn send(&self, payload: EmailPayload) -> LocalBoxFuture<'static, Result<(), SiteError>>;
}

/// Sends through the EmailJS REST endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJs {
    config: Option<EmailJsConfig>,
}

impl EmailJs {
    pub fn new(config: Option<EmailJsConfig>) -> Self {
        Self { config }
    }

    pub fn from_build_config() -> Self {
        Self::new(config::emailjs_config())
    }
}

impl Mailer for EmailJs {
    fn send(&self, payload: EmailPayload) -> LocalBoxFuture<'static, Result<(), SiteError>> {
        let config = self.config.clone();
        Box::pin(async move {
            let config = config.ok_or(SiteError::NotConfigured)?;
            let body = EmailJsRequest {
                service_id: &config.service_id,
                template_id: &config.template_id,
                user_id: &config.public_key,
                template_params: &payload,
            };
            debug!("Posting contact message to {}", config.endpoint);

            let response = Request::post(&config.endpoint).json(&body)?.send().await?;
            if !response.ok() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(SiteError::Rejected { status, body });
            }
            info!("Contact message accepted ({})", response.status());
            Ok(())
        })
    }
}

/// Validates `form` and only then hands it to `mailer`.
pub async fn submit_contact<M>(form: &ContactForm, mailer: &M) -> Result<(), SiteError>
where
    M: Mailer + ?Sized,
{
    let validation = form.validate();
    if !validation.is_valid() {
        return Err(SiteError::Invalid(validation));
    }
    mailer.send(EmailPayload::from_form(form)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::Field;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingMailer {
        sent: RefCell<Vec<EmailPayload>>,
        fail_with: Option<u16>,
    }

    impl Mailer for RecordingMailer {
        fn send(&self, payload: EmailPayload) -> LocalBoxFuture<'static, Result<(), SiteError>> {
            self.sent.borrow_mut().push(payload);
            let result = match self.fail_with {
                Some(status) => Err(SiteError::Rejected { status, body: "nope".to_string() }),
                None => Ok(()),
            };
            Box::pin(async move { result })
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "  Grace Hopper ".to_string(),
            email: "grace@navy.mil".to_string(),
            phone: "555 123 4567".to_string(),
            inquiry: "support".to_string(),
            message: "Found a bug.".to_string(),
        }
    }

    #[test]
    fn empty_required_field_never_sends() {
        for field in [Field::Name, Field::Email, Field::Inquiry, Field::Message] {
            let mailer = RecordingMailer::default();
            let mut f = form();
            f.set(field, String::new());
            let result = block_on(submit_contact(&f, &mailer));
            match result {
                Err(SiteError::Invalid(v)) => assert!(v.is_invalid(field)),
                other => panic!("expected validation error, got {:?}", other),
            }
            assert!(mailer.sent.borrow().is_empty());
        }
    }

    #[test]
    fn valid_form_sends_trimmed_payload() {
        let mailer = RecordingMailer::default();
        block_on(submit_contact(&form(), &mailer)).unwrap();
        let sent = mailer.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from_name, "Grace Hopper");
        assert_eq!(sent[0].inquiry_type, "Existing client support");
    }

    #[test]
    fn provider_failure_is_surfaced() {
        let mailer = RecordingMailer { fail_with: Some(400), ..Default::default() };
        let result = block_on(submit_contact(&form(), &mailer));
        assert!(matches!(result, Err(SiteError::Rejected { status: 400, .. })));
    }

    #[test]
    fn unconfigured_emailjs_fails_without_request() {
        let result = block_on(EmailJs::new(None).send(EmailPayload::from_form(&form())));
        assert!(matches!(result, Err(SiteError::NotConfigured)));
    }

    #[test]
    fn request_body_matches_provider_shape() {
        let payload = EmailPayload::from_form(&form());
        let body = EmailJsRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "key",
            template_params: &payload,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["from_email"], "grace@navy.mil");
        assert_eq!(json["template_params"]["phone"], "555 123 4567");
    }
}
