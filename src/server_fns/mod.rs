//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client.
//! Data calls take the caller's access token; the server verifies it and
//! forwards it to Supabase so row-level security applies.

pub mod auth;
pub mod journal;
pub mod mood;
pub mod profile;

#[cfg(not(target_arch = "wasm32"))]
pub mod context;

pub use auth::{
    get_current_user, get_oauth_url, get_public_config, refresh_session, sign_in,
    sign_in_anonymous, sign_out, sign_up, update_account,
};
pub use journal::{delete_journal_entry, list_journal_entries, save_journal_entry};
pub use mood::{add_mood_entry, list_mood_entries, reset_mood_entries};
pub use profile::{get_profile, save_profile};
