use std::time::Duration;

pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Async sleep that works in the browser and on the server
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
