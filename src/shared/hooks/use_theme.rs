use dioxus::prelude::*;

use crate::domain::models::ThemePreference;
use crate::shared::hooks::use_store;

/// Apply the stored theme preference to `<html>` whenever it changes
pub fn use_theme() -> ThemePreference {
    let store = use_store();
    let preference = store.read().settings.theme;

    use_effect(move || {
        let preference = store.read().settings.theme;
        spawn(async move {
            let prefers_dark = match preference {
                ThemePreference::System => system_prefers_dark().await,
                _ => true,
            };
            apply_theme_css(preference.resolve(prefers_dark)).await;
        });
    });

    preference
}

/// Ask the browser for `prefers-color-scheme`
pub async fn system_prefers_dark() -> bool {
    let mut eval = document::eval(
        "dioxus.send(window.matchMedia('(prefers-color-scheme: dark)').matches);",
    );
    eval.recv::<bool>().await.unwrap_or(true)
}

/// Apply theme CSS class to document element
#[cfg(target_arch = "wasm32")]
async fn apply_theme_css(class: &'static str) {
    let script = format!(
        r#"
        (function() {{
            const root = document.documentElement;
            root.classList.remove('dark', 'light');
            root.classList.add('{}');
        }})()
    "#,
        class
    );

    let _ = document::eval(&script).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn apply_theme_css(_class: &'static str) {
    // No-op on server
}
