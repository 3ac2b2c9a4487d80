//! App-wide constants shared by client and server

pub const APP_NAME: &str = "UniMind";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// localStorage key for the signed-in session
pub const SESSION_KEY: &str = "unimind-session";
/// localStorage key for personalisation of anonymous users
pub const ANON_PERSONALISATION_KEY: &str = "anonymousPersonalisation";

pub const TOAST_DURATION_SECS: u64 = 4;
/// How often the client checks whether its access token needs a refresh
pub const SESSION_CHECK_SECS: u64 = 60;

pub const THERAPY_START_PATH: &str = "/api/therapy/start";
pub const THERAPY_CONTINUE_PATH: &str = "/api/therapy/continue";
pub const THERAPY_STATS_PATH: &str = "/api/therapy/stats";

pub const EMERGENCY_NUMBER: &str = "999";
pub const SAFEZONE_URL: &str = "https://safezoneapp.com";
pub const SAMARITANS_URL: &str = "https://www.samaritans.org";
pub const NHS_MENTAL_HEALTH_URL: &str = "https://www.nhs.uk/mental-health/";
