//! Browser calls to the server's `/api/therapy/*` proxy

use crate::domain::models::{TherapyReply, TherapyStats};

#[cfg(target_arch = "wasm32")]
use crate::domain::models::{ContinueConversationRequest, StartConversationRequest};
#[cfg(target_arch = "wasm32")]
use crate::shared::constants::{THERAPY_CONTINUE_PATH, THERAPY_START_PATH, THERAPY_STATS_PATH};
#[cfg(target_arch = "wasm32")]
use gloo_net::http::{Request, Response};

#[cfg(target_arch = "wasm32")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Error body from the proxy, or a generic message
#[cfg(target_arch = "wasm32")]
async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        return response.json::<T>().await.map_err(|e| e.to_string());
    }
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("HTTP error! status: {}", status)),
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn start_conversation(user_input: &str) -> Result<TherapyReply, String> {
    let body = StartConversationRequest {
        user_input: user_input.to_string(),
    };
    let response = Request::post(THERAPY_START_PATH)
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

#[cfg(target_arch = "wasm32")]
pub async fn continue_conversation(session_id: &str, user_input: &str) -> Result<TherapyReply, String> {
    let body = ContinueConversationRequest {
        session_id: session_id.to_string(),
        user_input: user_input.to_string(),
    };
    let response = Request::post(THERAPY_CONTINUE_PATH)
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

#[cfg(target_arch = "wasm32")]
pub async fn get_stats(session_id: &str) -> Result<TherapyStats, String> {
    let url = format!("{}/{}", THERAPY_STATS_PATH, urlencoding::encode(session_id));
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    read_json(response).await
}

#[cfg(not(target_arch = "wasm32"))]
const BROWSER_ONLY: &str = "The therapy service is only reachable from the browser";

#[cfg(not(target_arch = "wasm32"))]
pub async fn start_conversation(_user_input: &str) -> Result<TherapyReply, String> {
    Err(BROWSER_ONLY.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn continue_conversation(_session_id: &str, _user_input: &str) -> Result<TherapyReply, String> {
    Err(BROWSER_ONLY.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_stats(_session_id: &str) -> Result<TherapyStats, String> {
    Err(BROWSER_ONLY.to_string())
}

/// Start a new conversation or continue `session_id`, depending on whether
/// there is one to continue
pub async fn send_turn(session_id: Option<&str>, user_input: &str) -> Result<TherapyReply, String> {
    match session_id.filter(|id| !id.is_empty()) {
        Some(id) => continue_conversation(id, user_input).await,
        None => start_conversation(user_input).await,
    }
}
