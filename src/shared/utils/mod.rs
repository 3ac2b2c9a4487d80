// Utility functions shared by client and server

pub mod oauth;
pub mod time;

pub use oauth::{jwt_expiry, parse_oauth_fragment, OAuthTokens};
pub use time::{now_unix, sleep};
