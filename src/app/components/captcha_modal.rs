use dioxus::prelude::*;

use crate::server_fns::get_public_config;
use crate::shared::services::captcha::{next_event, render_widget, CaptchaEvent};

const CAPTCHA_CONTAINER_ID: &str = "hcaptcha-container";

/// hCaptcha challenge in a dialog. Every solved challenge is reported
/// through `on_token`; the parent decides when to close.
#[component]
pub fn CaptchaModal(
    title: String,
    description: String,
    #[props(default)] busy: bool,
    #[props(default)] error: Option<String>,
    on_token: EventHandler<String>,
    on_error: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let config = use_resource(get_public_config);
    let mut rendered = use_signal(|| false);

    use_effect(move || {
        let site_key = match &*config.read() {
            Some(Ok(config)) => config.hcaptcha_site_key.clone(),
            Some(Err(e)) => {
                tracing::error!(error = %e, "Could not load CAPTCHA configuration");
                return;
            }
            None => return,
        };
        if *rendered.peek() {
            return;
        }
        rendered.set(true);

        spawn(async move {
            let mut eval = render_widget(CAPTCHA_CONTAINER_ID, &site_key, true);
            while let Some(event) = next_event(&mut eval).await {
                match event {
                    CaptchaEvent::Token(token) => on_token.call(token),
                    CaptchaEvent::Expired => {
                        on_error.call("CAPTCHA challenge expired. Please try again.".to_string())
                    }
                    CaptchaEvent::Error(e) => {
                        on_error.call(format!("CAPTCHA error: {}. Please try again.", e))
                    }
                }
            }
        });
    });

    let config_error = matches!(&*config.read(), Some(Err(_)));

    rsx! {
        div { class: "c-modal__backdrop c-modal__backdrop--dark",
            div { class: "c-modal c-captcha", role: "dialog", "aria-modal": "true",
                button {
                    class: "c-modal__close c-captcha__close",
                    "aria-label": "Close CAPTCHA modal",
                    disabled: busy,
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                h2 { class: "c-captcha__title", "{title}" }
                p { class: "c-captcha__description", "{description}" }
                div { id: CAPTCHA_CONTAINER_ID, class: "c-captcha__widget" }
                if busy {
                    div { class: "c-captcha__status",
                        span { class: "c-loading__spinner c-loading__spinner--small" }
                        span { "Verifying..." }
                    }
                }
                if config_error {
                    p { class: "c-captcha__error", "CAPTCHA is unavailable right now. Please try again later." }
                }
                if let Some(message) = error {
                    p { class: "c-captcha__error", "{message}" }
                }
            }
        }
    }
}
