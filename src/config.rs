use log::Level;

/// Quiet period before scroll-driven UI (nav, back-to-top, scroll-spy) recomputes.
pub const SCROLL_DEBOUNCE_MS: u32 = 100;
/// How long a stat counter takes to reach its target.
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const FRAME_MS: u32 = 16;
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;
pub const SWIPE_THRESHOLD_PX: i32 = 50;
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
/// Height of the fixed nav, used when deciding which section is "current".
pub const SCROLL_SPY_OFFSET_PX: f64 = 90.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_emailjs_endpoint() -> &'static str {
    // Override lets a local mock stand in for the provider during development
    option_env!("EMAILJS_ENDPOINT").unwrap_or("https://api.emailjs.com/api/v1.0/email/send")
}

#[cfg(not(debug_assertions))]
pub fn get_emailjs_endpoint() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Credentials are baked in at build time; a build without them still renders
/// the form but every send fails with `NotConfigured`.
pub fn emailjs_config() -> Option<EmailJsConfig> {
    let service_id = option_env!("EMAILJS_SERVICE_ID")?;
    let template_id = option_env!("EMAILJS_TEMPLATE_ID")?;
    let public_key = option_env!("EMAILJS_PUBLIC_KEY")?;
    Some(EmailJsConfig {
        endpoint: get_emailjs_endpoint().to_string(),
        service_id: service_id.to_string(),
        template_id: template_id.to_string(),
        public_key: public_key.to_string(),
    })
}

pub fn counter_frames() -> u32 {
    (COUNTER_DURATION_MS / FRAME_MS).max(1)
}
