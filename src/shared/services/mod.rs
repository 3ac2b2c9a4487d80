// Browser-side services: localStorage, the therapy proxy, hCaptcha.
// Each has a no-op or error fallback off the browser so SSR compiles.

pub mod captcha;
pub mod local_personalisation;
pub mod storage;
pub mod therapy_api;
