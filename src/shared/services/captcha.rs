//! hCaptcha widget glue, driven through `document::eval`

use dioxus::prelude::*;

const HCAPTCHA_SCRIPT: &str = "https://js.hcaptcha.com/1/api.js?render=explicit";

/// Outcome reported by the widget
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CaptchaEvent {
    Token(String),
    Expired,
    Error(String),
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Load the hCaptcha script if needed and render a widget into `container_id`.
/// Returns a stream of widget events; the caller keeps receiving until it
/// gets a token.
pub fn render_widget(container_id: &str, site_key: &str, dark: bool) -> document::Eval {
    let js = format!(
        r#"(function() {{
            var render = function() {{
                var el = document.getElementById({container});
                if (!el) {{ dioxus.send({{kind: 'error', value: 'CAPTCHA container missing'}}); return; }}
                el.innerHTML = '';
                hcaptcha.render(el, {{
                    sitekey: {site_key},
                    theme: {theme},
                    callback: function(token) {{ dioxus.send({{kind: 'token', value: token}}); }},
                    'expired-callback': function() {{ dioxus.send({{kind: 'expired'}}); }},
                    'error-callback': function(err) {{ dioxus.send({{kind: 'error', value: String(err)}}); }}
                }});
            }};
            if (window.hcaptcha) {{ render(); return; }}
            var existing = document.getElementById('hcaptcha-script');
            if (existing) {{ existing.addEventListener('load', render); return; }}
            var script = document.createElement('script');
            script.id = 'hcaptcha-script';
            script.src = {script_src};
            script.async = true;
            script.onload = render;
            script.onerror = function() {{ dioxus.send({{kind: 'error', value: 'Could not load CAPTCHA'}}); }};
            document.head.appendChild(script);
        }})();"#,
        container = js_string(container_id),
        site_key = js_string(site_key),
        theme = js_string(if dark { "dark" } else { "light" }),
        script_src = js_string(HCAPTCHA_SCRIPT),
    );
    document::eval(&js)
}

/// Wait for the next widget event
pub async fn next_event(eval: &mut document::Eval) -> Option<CaptchaEvent> {
    eval.recv::<CaptchaEvent>().await.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_decoding() {
        let token: CaptchaEvent = serde_json::from_str(r#"{"kind":"token","value":"abc"}"#).unwrap();
        assert_eq!(token, CaptchaEvent::Token("abc".into()));
        let expired: CaptchaEvent = serde_json::from_str(r#"{"kind":"expired"}"#).unwrap();
        assert_eq!(expired, CaptchaEvent::Expired);
    }

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string("a'b\"c"), r#""a'b\"c""#);
    }
}
