use dioxus::prelude::*;

use crate::app::components::CaptchaModal;
use crate::app::pages::routes::Route;
use crate::domain::models::SignUpOutcome;
use crate::server_fns::{get_oauth_url, sign_in, sign_in_anonymous, sign_up};
use crate::shared::errors::server_error_message;
use crate::shared::hooks::{store_session, use_session, use_store, use_toasts};

/// Why the CAPTCHA dialog is open
#[derive(Debug, Clone, Copy, PartialEq)]
enum CaptchaPurpose {
    SignUp,
    Anonymous,
}

impl CaptchaPurpose {
    fn title(&self) -> &'static str {
        match self {
            CaptchaPurpose::SignUp => "Verify Signup",
            CaptchaPurpose::Anonymous => "Quick Security Check",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            CaptchaPurpose::SignUp => "Please complete the challenge below to finish signing up.",
            CaptchaPurpose::Anonymous => "Please complete the challenge below to continue.",
        }
    }
}

/// Full-page redirect, used to hand over to the OAuth provider
fn redirect_to(url: &str) {
    let target = serde_json::to_string(url).unwrap_or_default();
    let _ = document::eval(&format!("window.location.href = {};", target));
}

#[component]
pub fn AuthPage() -> Element {
    let session = use_session();
    let store = use_store();
    let toasts = use_toasts();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut is_sign_up = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);
    let mut captcha = use_signal(|| None::<CaptchaPurpose>);

    // Already signed in: skip the form
    use_effect(move || {
        if session.read().is_signed_in() && captcha.read().is_none() {
            if store.peek().disclaimer_accepted {
                navigator().replace(Route::ChatPage {});
            } else {
                navigator().replace(Route::TermsPage {});
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if is_loading() {
            return;
        }
        error.set(None);

        if is_sign_up() {
            captcha.set(Some(CaptchaPurpose::SignUp));
            return;
        }

        is_loading.set(true);
        spawn(async move {
            match sign_in(email(), password()).await {
                Ok(auth) => {
                    store_session(session, auth);
                    navigator().push(Route::TermsPage {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Sign-in failed");
                    error.set(Some(server_error_message(&e)));
                }
            }
            is_loading.set(false);
        });
    };

    let handle_google = move |_| {
        if is_loading() {
            return;
        }
        error.set(None);
        is_loading.set(true);
        spawn(async move {
            match get_oauth_url("google".to_string(), "/terms".to_string()).await {
                Ok(url) => redirect_to(&url),
                Err(e) => {
                    tracing::error!(error = %e, "Google sign-in could not start");
                    error.set(Some("Could not sign in with Google. Please try again.".to_string()));
                    is_loading.set(false);
                }
            }
        });
    };

    let handle_token = move |token: String| {
        let Some(purpose) = captcha() else {
            return;
        };
        is_loading.set(true);
        error.set(None);
        spawn(async move {
            match purpose {
                CaptchaPurpose::SignUp => {
                    match sign_up(email(), password(), name(), token).await {
                        Ok(SignUpOutcome::ConfirmationSent) => {
                            toasts.success("Signup successful! Please check your email for verification.");
                            email.set(String::new());
                            password.set(String::new());
                            name.set(String::new());
                            captcha.set(None);
                        }
                        Ok(SignUpOutcome::SignedIn(auth)) => {
                            captcha.set(None);
                            store_session(session, auth);
                            navigator().push(Route::TermsPage {});
                        }
                        Err(e) => error.set(Some(server_error_message(&e))),
                    }
                }
                CaptchaPurpose::Anonymous => match sign_in_anonymous(token).await {
                    Ok(auth) => {
                        captcha.set(None);
                        store_session(session, auth);
                        navigator().push(Route::TermsPage {});
                    }
                    Err(e) => error.set(Some(server_error_message(&e))),
                },
            }
            is_loading.set(false);
        });
    };

    let busy = is_loading();
    let submit_label = if is_sign_up() { "Sign Up" } else { "Sign In" };
    let toggle_label = if is_sign_up() {
        "Already have an account? Sign In"
    } else {
        "Don't have an account? Sign Up"
    };

    rsx! {
        div { class: "c-auth",
            div { class: "c-auth__container",
                div { class: "c-auth__intro",
                    h1 { class: "c-auth__title", "Welcome to UniMind" }
                    p { class: "c-auth__subtitle", "Your mental wellness companion" }
                }
                div { class: "c-auth__card",
                    if captcha().is_none() {
                        if let Some(message) = error() {
                            div { class: "c-auth__error", role: "alert", p { "{message}" } }
                        }
                    }

                    button {
                        class: "c-auth__provider",
                        "aria-label": "Sign in with Google",
                        disabled: busy,
                        onclick: handle_google,
                        span { class: "c-auth__provider-icon", "G" }
                        "Continue with Google"
                    }

                    div { class: "c-auth__divider", span { "Or continue with email" } }

                    form { class: "c-form", onsubmit: handle_submit,
                        if is_sign_up() {
                            label { class: "c-form__label", r#for: "name",
                                "Full Name"
                                input {
                                    id: "name",
                                    class: "c-form__input",
                                    r#type: "text",
                                    placeholder: "Enter your full name",
                                    required: true,
                                    value: "{name}",
                                    oninput: move |evt| name.set(evt.value()),
                                }
                            }
                        }
                        label { class: "c-form__label", r#for: "email",
                            "Email address"
                            input {
                                id: "email",
                                class: "c-form__input",
                                r#type: "email",
                                placeholder: "Enter your email",
                                required: true,
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                        label { class: "c-form__label", r#for: "password",
                            "Password"
                            input {
                                id: "password",
                                class: "c-form__input",
                                r#type: "password",
                                placeholder: "Enter your password",
                                required: true,
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }
                        button {
                            class: "c-button c-button--primary c-auth__submit",
                            r#type: "submit",
                            disabled: busy,
                            if busy {
                                span { class: "c-loading__spinner c-loading__spinner--small" }
                                "Please wait..."
                            } else {
                                "{submit_label}"
                            }
                        }
                        button {
                            class: "c-auth__toggle",
                            r#type: "button",
                            onclick: move |_| is_sign_up.toggle(),
                            "{toggle_label}"
                        }
                    }

                    div { class: "c-auth__divider", span { "Or" } }

                    button {
                        class: "c-button c-button--secondary c-auth__anonymous",
                        disabled: busy,
                        onclick: move |_| {
                            error.set(None);
                            captcha.set(Some(CaptchaPurpose::Anonymous));
                        },
                        "Continue without Sign Up"
                    }
                    p { class: "c-auth__note", "Note: Your data won't be saved without an account" }
                }
                p { class: "c-auth__legal",
                    "By signing up, you agree to our "
                    Link { to: Route::TermsPage {}, "Terms of Service" }
                    "."
                }
            }

            if let Some(purpose) = captcha() {
                CaptchaModal {
                    key: "{purpose.title()}",
                    title: purpose.title().to_string(),
                    description: purpose.description().to_string(),
                    busy,
                    error: error(),
                    on_token: handle_token,
                    on_error: move |message: String| {
                        error.set(Some(message));
                        is_loading.set(false);
                    },
                    on_close: move |_| {
                        captcha.set(None);
                        error.set(None);
                    },
                }
            }
        }
    }
}
