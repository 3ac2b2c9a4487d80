// Custom Dioxus hooks

pub mod use_session;
pub mod use_store;
pub mod use_theme;
pub mod use_toasts;

pub use use_session::{
    end_session, forget_session, fresh_access_token, store_session, use_session,
    use_session_provider,
};
pub use use_store::{use_store, use_store_loaded, use_store_provider};
pub use use_theme::{system_prefers_dark, use_theme};
pub use use_toasts::{use_toasts, use_toasts_provider, ToastHandle};
