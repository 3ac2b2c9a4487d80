use dioxus::prelude::*;
use std::time::Duration;

use crate::domain::models::AuthSession;
use crate::server_fns::{get_current_user, refresh_session, sign_out};
use crate::shared::constants::{SESSION_CHECK_SECS, SESSION_KEY};
use crate::shared::services::storage;
use crate::shared::state::session::{restore_action, SessionAction, SessionState};
use crate::shared::utils::{now_unix, parse_oauth_fragment, sleep};

/// Current session context, provided by `use_session_provider`
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provide the session context and restore it from storage or an OAuth redirect
pub fn use_session_provider() -> Signal<SessionState> {
    let mut state = use_context_provider(|| Signal::new(SessionState::default()));

    use_effect(move || {
        spawn(async move {
            let restored = match take_oauth_session().await {
                Some(session) => Some(session),
                None => restore_stored().await,
            };
            match restored {
                Some(session) => store_session(state, session),
                None => state.set(SessionState::signed_out()),
            }

            // Keep the access token fresh while the app is open
            loop {
                sleep(Duration::from_secs(SESSION_CHECK_SECS)).await;
                if let Some(session) = state.peek().session.clone() {
                    if session.is_expired(now_unix()) {
                        match refresh_session(session.refresh_token.clone()).await {
                            Ok(fresh) => store_session(state, fresh),
                            Err(e) => {
                                tracing::warn!(error = %e, "Session refresh failed");
                                forget_session(state);
                            }
                        }
                    }
                }
            }
        });
    });

    state
}

async fn restore_stored() -> Option<AuthSession> {
    let stored: Option<AuthSession> = storage::load_json(SESSION_KEY);
    match restore_action(stored, now_unix()) {
        SessionAction::Keep(session) => Some(session),
        SessionAction::Refresh(refresh_token) => match refresh_session(refresh_token).await {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "Stored session could not be refreshed");
                storage::remove(SESSION_KEY);
                None
            }
        },
        SessionAction::SignedOut => None,
    }
}

/// Turn `#access_token=...` left by an OAuth redirect into a session
async fn take_oauth_session() -> Option<AuthSession> {
    let fragment = current_fragment()?;
    let tokens = parse_oauth_fragment(&fragment, now_unix())?;
    clear_fragment();

    match get_current_user(tokens.access_token.clone()).await {
        Ok(user) => Some(AuthSession {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_at: tokens.expires_at,
            user,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "OAuth sign-in could not be verified");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    (hash.len() > 1).then_some(hash)
}

#[cfg(not(target_arch = "wasm32"))]
fn current_fragment() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn clear_fragment() {
    if let Some(window) = web_sys::window() {
        let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clear_fragment() {}

/// Persist and publish a new session
pub fn store_session(mut state: Signal<SessionState>, session: AuthSession) {
    storage::save_json(SESSION_KEY, &session);
    state.set(SessionState::signed_in(session));
}

pub fn forget_session(mut state: Signal<SessionState>) {
    storage::remove(SESSION_KEY);
    state.set(SessionState::signed_out());
}

/// Access token for a server call, refreshed first when it is about to expire
pub async fn fresh_access_token(state: Signal<SessionState>) -> Result<String, String> {
    let session = state
        .peek()
        .session
        .clone()
        .ok_or_else(|| "Please sign in again".to_string())?;
    if !session.is_expired(now_unix()) {
        return Ok(session.access_token);
    }
    match refresh_session(session.refresh_token).await {
        Ok(fresh) => {
            let token = fresh.access_token.clone();
            store_session(state, fresh);
            Ok(token)
        }
        Err(_) => {
            forget_session(state);
            Err("Session expired, please sign in again".to_string())
        }
    }
}

/// Revoke the session on the server and forget it locally
pub async fn end_session(state: Signal<SessionState>) {
    if let Some(token) = state.peek().access_token() {
        if let Err(e) = sign_out(token).await {
            tracing::warn!(error = %e, "Sign-out request failed");
        }
    }
    forget_session(state);
}
