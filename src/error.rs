use thiserror::Error;

use crate::contact::validation::Validation;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser facility unavailable: {0}")]
    Unavailable(String),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("invalid counter target {0:?}")]
    InvalidTarget(String),

    #[error("email service is not configured")]
    NotConfigured,

    #[error("email request failed: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("{} field(s) failed validation", .0.invalid_fields().len())]
    Invalid(Validation),
}

impl SiteError {
    /// Wraps a `JsValue` error coming back from a web-sys call.
    pub fn unavailable(what: &str, err: wasm_bindgen::JsValue) -> Self {
        SiteError::Unavailable(format!("{}: {:?}", what, err))
    }
}
