use dioxus::prelude::*;

use crate::app::components::{CaptchaModal, ConfirmModal, LoadingText, ThemeSelector};
use crate::app::pages::routes::Route;
use crate::domain::models::{AccountUpdate, AuthSession, Personalisation, SettingsPatch};
use crate::domain::services::validation::is_valid_phone;
use crate::server_fns::{get_profile, save_profile, update_account};
use crate::shared::errors::server_error_message;
use crate::shared::hooks::{
    end_session, fresh_access_token, store_session, use_session, use_store, use_toasts,
};
use crate::shared::services::local_personalisation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SettingsSection {
    #[default]
    Appearance,
    Account,
    Personalisation,
}

impl SettingsSection {
    const ALL: [SettingsSection; 3] = [Self::Appearance, Self::Account, Self::Personalisation];

    fn label(self) -> &'static str {
        match self {
            Self::Appearance => "Appearance",
            Self::Account => "Account",
            Self::Personalisation => "Personalisation",
        }
    }
}

/// Email/password changes the form would send, `None` fields unchanged
fn credential_changes(current_email: Option<&str>, email: &str, password: &str) -> AccountUpdate {
    let email = email.trim();
    AccountUpdate {
        email: (!email.is_empty() && Some(email) != current_email).then(|| email.to_string()),
        password: (!password.is_empty()).then(|| password.to_string()),
        phone: None,
    }
}

fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Number to send through CAPTCHA verification, or the message to show instead.
/// GoTrue stores phones without the leading `+`, so the comparison is on digits.
fn phone_to_verify(current_phone: Option<&str>, entered: &str) -> Result<String, &'static str> {
    let entered = entered.trim();
    if !is_valid_phone(entered) {
        return Err("Please enter a valid number with country code.");
    }
    let unchanged = current_phone
        .filter(|p| !p.is_empty())
        .is_some_and(|p| phone_digits(p) == phone_digits(entered));
    if unchanged {
        return Err("Please enter a valid, new phone number to verify.");
    }
    Ok(entered.to_string())
}

#[component]
pub fn SettingsPage() -> Element {
    let mut active = use_signal(SettingsSection::default);

    rsx! {
        div { class: "c-page c-settings",
            h1 { class: "c-page__title", "Settings" }
            div { class: "c-settings__layout",
                nav { class: "c-settings__nav",
                    for section in SettingsSection::ALL {
                        button {
                            key: "{section.label()}",
                            class: "c-settings__nav-item",
                            class: if active() == section { "is-active" },
                            onclick: move |_| active.set(section),
                            "{section.label()}"
                        }
                    }
                }
                div { class: "c-settings__content",
                    {match active() {
                        SettingsSection::Appearance => rsx! {
                            section { class: "c-card c-settings__section",
                                h2 { class: "c-settings__heading", "Appearance" }
                                ThemeSelector {}
                            }
                        },
                        SettingsSection::Account => rsx! { AccountSection {} },
                        SettingsSection::Personalisation => rsx! { PersonalisationSection {} },
                    }}
                }
            }
        }
    }
}

#[component]
fn AccountSection() -> Element {
    let session = use_session();
    let mut store = use_store();
    let toasts = use_toasts();
    let navigator = use_navigator();

    let current_user = session.read().user().cloned();
    let mut email = use_signal(|| current_user.as_ref().and_then(|u| u.email.clone()).unwrap_or_default());
    let mut phone = use_signal(|| {
        current_user
            .as_ref()
            .and_then(|u| u.phone_number().map(str::to_string))
            .unwrap_or_default()
    });
    let mut password = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut saving_phone = use_signal(|| false);
    let mut success = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);
    let mut phone_error = use_signal(|| None::<String>);
    let mut phone_success = use_signal(|| None::<String>);
    let mut show_captcha = use_signal(|| false);
    let mut captcha_error = use_signal(|| None::<String>);
    let mut confirm_logout = use_signal(|| false);
    let mut confirm_clear = use_signal(|| false);

    // Swap the returned user into the live session
    let apply_user = move |user| {
        let current = session.peek().session.clone();
        if let Some(existing) = current {
            store_session(session, AuthSession { user, ..existing });
        }
    };

    let save_credentials = move |_| {
        let current_email = session.peek().user().and_then(|u| u.email.clone());
        let update = credential_changes(current_email.as_deref(), &email(), &password());
        success.set(None);
        error.set(None);
        if update.is_empty() {
            success.set(Some("No Email/Password changes detected.".to_string()));
            return;
        }
        saving.set(true);
        spawn(async move {
            let message = update.success_message();
            let result = match fresh_access_token(session).await {
                Ok(token) => update_account(token, update, None)
                    .await
                    .map_err(|e| server_error_message(&e)),
                Err(e) => Err(e),
            };
            match result {
                Ok(user) => {
                    apply_user(user);
                    password.set(String::new());
                    success.set(Some(message.to_string()));
                    toasts.success(message);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Account update failed");
                    error.set(Some(e));
                }
            }
            saving.set(false);
        });
    };

    let start_phone_save = move |_| {
        phone_error.set(None);
        phone_success.set(None);
        let current_phone = session.peek().user().and_then(|u| u.phone.clone());
        if let Err(message) = phone_to_verify(current_phone.as_deref(), &phone()) {
            phone_error.set(Some(message.to_string()));
            return;
        }
        captcha_error.set(None);
        show_captcha.set(true);
    };

    let save_phone = move |captcha: String| {
        if *saving_phone.peek() {
            return;
        }
        saving_phone.set(true);
        let update = AccountUpdate {
            phone: Some(phone().trim().to_string()),
            ..Default::default()
        };
        spawn(async move {
            let result = match fresh_access_token(session).await {
                Ok(token) => update_account(token, update, Some(captcha))
                    .await
                    .map_err(|e| server_error_message(&e)),
                Err(e) => Err(e),
            };
            match result {
                Ok(user) => {
                    apply_user(user);
                    show_captcha.set(false);
                    phone_success.set(Some("Phone number saved".to_string()));
                }
                Err(e) => {
                    tracing::error!(error = %e, "Phone update failed");
                    captcha_error.set(Some(e.clone()));
                    phone_error.set(Some(e));
                }
            }
            saving_phone.set(false);
        });
    };

    let logout = move |_| {
        confirm_logout.set(false);
        spawn(async move {
            end_session(session).await;
            local_personalisation::clear();
            store.write().update_settings(SettingsPatch {
                memory_enabled: Some(true),
                ..Default::default()
            });
            navigator.replace(Route::AuthPage {});
            toasts.success("Logged out successfully.");
        });
    };

    let clear_data = move |_| {
        store.write().clear_all();
        confirm_clear.set(false);
        toasts.success("All data cleared successfully.");
    };

    let state = session.read();
    if !state.is_signed_in() || state.is_anonymous() {
        return rsx! {
            section { class: "c-card c-settings__section",
                h2 { class: "c-settings__heading", "Account Settings" }
                p { class: "c-settings__note", "You need to be signed in to manage your account." }
                Link { to: Route::AuthPage {}, class: "c-button c-button--primary", "Sign In / Sign Up" }
                DataActions {
                    signed_in: false,
                    on_logout: move |_| {},
                    on_clear: move |_| confirm_clear.set(true),
                }
                if confirm_clear() {
                    ConfirmModal {
                        title: "Confirm Clear Data".to_string(),
                        message: "Are you sure you want to clear all chat data? This cannot be undone.".to_string(),
                        confirm_label: "Clear Data".to_string(),
                        on_confirm: clear_data,
                        on_cancel: move |_| confirm_clear.set(false),
                    }
                }
            }
        };
    }
    drop(state);

    let busy = saving();
    let phone_busy = saving_phone();

    rsx! {
        section { class: "c-card c-settings__section",
            h2 { class: "c-settings__heading", "Account Settings" }
            if let Some(message) = success() {
                p { class: "c-settings__success", "{message}" }
            }
            if let Some(message) = error() {
                p { class: "c-settings__error", "{message}" }
            }
            div { class: "c-form",
                label { class: "c-form__label",
                    "Email"
                    input {
                        class: "c-form__input",
                        r#type: "email",
                        value: "{email}",
                        readonly: true,
                        disabled: busy,
                        oninput: move |evt| email.set(evt.value()),
                    }
                    span { class: "c-form__hint",
                        "Email changes require verification via link sent to the new address."
                    }
                }

                label { class: "c-form__label",
                    "Phone Number (Optional)"
                    div { class: "c-form__row",
                        input {
                            class: "c-form__input",
                            r#type: "tel",
                            placeholder: "Enter phone number (e.g., +44...)",
                            value: "{phone}",
                            disabled: phone_busy,
                            oninput: move |evt| {
                                phone.set(evt.value());
                                phone_error.set(None);
                                phone_success.set(None);
                            },
                        }
                        button {
                            class: "c-button c-button--secondary",
                            disabled: phone_busy || phone().trim().is_empty(),
                            onclick: start_phone_save,
                            if phone_busy { "Saving..." } else { "Verify & Save Number" }
                        }
                    }
                    if let Some(message) = phone_error() {
                        span { class: "c-form__error", "{message}" }
                    }
                    if let Some(message) = phone_success() {
                        span { class: "c-form__success", "{message}" }
                    }
                }

                label { class: "c-form__label",
                    "New Password (Optional)"
                    input {
                        class: "c-form__input",
                        r#type: "password",
                        placeholder: "Enter new password to change",
                        value: "{password}",
                        disabled: busy,
                        oninput: move |evt| password.set(evt.value()),
                    }
                    span { class: "c-form__hint", "Leave blank to keep current password." }
                }

                button {
                    class: "c-button c-button--primary",
                    disabled: busy,
                    onclick: save_credentials,
                    if busy { "Saving Email/Password..." } else { "Save Email/Password Changes" }
                }
            }

            DataActions {
                signed_in: true,
                on_logout: move |_| confirm_logout.set(true),
                on_clear: move |_| confirm_clear.set(true),
            }
        }

        if show_captcha() {
            CaptchaModal {
                title: "Verify Phone Number".to_string(),
                description: format!(
                    "Please complete the challenge below to verify your number: {}",
                    phone(),
                ),
                busy: phone_busy,
                error: captcha_error(),
                on_token: save_phone,
                on_error: move |e| captcha_error.set(Some(e)),
                on_close: move |_| {
                    if !*saving_phone.peek() {
                        show_captcha.set(false);
                    }
                },
            }
        }

        if confirm_logout() {
            ConfirmModal {
                title: "Confirm Logout".to_string(),
                message: "Are you sure you want to log out?".to_string(),
                confirm_label: "Log Out".to_string(),
                on_confirm: logout,
                on_cancel: move |_| confirm_logout.set(false),
            }
        }

        if confirm_clear() {
            ConfirmModal {
                title: "Confirm Clear Data".to_string(),
                message: "Are you sure you want to clear all chat data? This cannot be undone.".to_string(),
                confirm_label: "Clear Data".to_string(),
                on_confirm: clear_data,
                on_cancel: move |_| confirm_clear.set(false),
            }
        }
    }
}

#[component]
fn DataActions(signed_in: bool, on_logout: EventHandler<()>, on_clear: EventHandler<()>) -> Element {
    rsx! {
        div { class: "c-settings__actions",
            if signed_in {
                button {
                    class: "c-button c-button--secondary",
                    onclick: move |_| on_logout.call(()),
                    "Log Out"
                }
            }
            button {
                class: "c-button c-button--danger",
                onclick: move |_| on_clear.call(()),
                "Clear All Data"
            }
        }
    }
}

#[component]
fn PersonalisationSection() -> Element {
    let session = use_session();
    let mut store = use_store();
    let toasts = use_toasts();

    let mut form = use_signal(Personalisation::default);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let anonymous = session.read().is_anonymous();

    use_effect(move || {
        if session.peek().is_anonymous() {
            form.set(local_personalisation::load());
            loading.set(false);
            return;
        }
        spawn(async move {
            let result = match fresh_access_token(session).await {
                Ok(token) => get_profile(token).await.map_err(|e| server_error_message(&e)),
                Err(e) => Err(e),
            };
            match result {
                Ok(profile) => form.set(profile),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load profile");
                    toasts.error(format!("Could not load profile data: {}", e));
                }
            }
            loading.set(false);
        });
    });

    let mut sync_memory = move |enabled: bool| {
        store.write().update_settings(SettingsPatch {
            memory_enabled: Some(enabled),
            ..Default::default()
        });
    };

    let save = move |_| {
        let current = form.read().clone();
        if session.peek().is_anonymous() {
            local_personalisation::save(&current);
            sync_memory(current.enable_memory);
            toasts.success("Personalisation saved locally.");
            return;
        }
        saving.set(true);
        spawn(async move {
            let result = match fresh_access_token(session).await {
                Ok(token) => save_profile(token, current)
                    .await
                    .map_err(|e| server_error_message(&e)),
                Err(e) => Err(e),
            };
            match result {
                Ok(saved) => {
                    sync_memory(saved.enable_memory);
                    form.set(saved);
                    toasts.success("Personalisation saved successfully!");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to save personalisation");
                    toasts.error(format!("Failed to save personalisation: {}", e));
                }
            }
            saving.set(false);
        });
    };

    if loading() {
        return rsx! {
            section { class: "c-card c-settings__section",
                LoadingText { message: "Loading personalisation..." }
            }
        };
    }

    let busy = saving();
    let memory = form.read().enable_memory;

    rsx! {
        section { class: "c-card c-settings__section",
            h2 { class: "c-settings__heading", "Personalisation" }
            if anonymous {
                p { class: "c-settings__note",
                    "You are using a guest account. Personalisation is stored in this browser only."
                }
            }
            div { class: "c-form",
                label { class: "c-settings__switch",
                    input {
                        r#type: "checkbox",
                        role: "switch",
                        checked: memory,
                        disabled: busy,
                        onchange: move |evt| form.write().enable_memory = evt.checked(),
                    }
                    span { class: "c-settings__switch-track" }
                    "Enable Conversation Memory"
                }
                label { class: "c-form__label",
                    "What should the assistant call you?"
                    input {
                        class: "c-form__input",
                        r#type: "text",
                        placeholder: "Your nickname (optional)",
                        disabled: busy,
                        value: "{form.read().nickname}",
                        oninput: move |evt| form.write().nickname = evt.value(),
                    }
                }
                label { class: "c-form__label",
                    "What do you do?"
                    input {
                        class: "c-form__input",
                        r#type: "text",
                        placeholder: "E.g., Software Engineer, Student, Artist... (optional)",
                        disabled: busy,
                        value: "{form.read().user_role}",
                        oninput: move |evt| form.write().user_role = evt.value(),
                    }
                }
                label { class: "c-form__label",
                    "What traits should the assistant have?"
                    input {
                        class: "c-form__input",
                        r#type: "text",
                        placeholder: "E.g., Friendly, Formal, Sarcastic, Concise... (optional)",
                        disabled: busy,
                        value: "{form.read().bot_traits}",
                        oninput: move |evt| form.write().bot_traits = evt.value(),
                    }
                }
                label { class: "c-form__label",
                    "Anything else the assistant should know?"
                    textarea {
                        class: "c-form__textarea",
                        rows: "4",
                        placeholder: "E.g., Specific interests, topics to avoid, preferred language style... (optional)",
                        disabled: busy,
                        value: "{form.read().additional_info}",
                        oninput: move |evt| form.write().additional_info = evt.value(),
                    }
                }
                button {
                    class: "c-button c-button--primary",
                    disabled: busy,
                    onclick: save,
                    if busy { "Saving..." } else { "Save Personalisation" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_credentials_are_empty() {
        let update = credential_changes(Some("a@example.com"), " a@example.com ", "");
        assert!(update.is_empty());
    }

    #[test]
    fn test_new_password_only() {
        let update = credential_changes(Some("a@example.com"), "a@example.com", "hunter22");
        assert_eq!(update.email, None);
        assert_eq!(update.password.as_deref(), Some("hunter22"));
        assert_eq!(update.success_message(), "Password updated successfully.");
    }

    #[test]
    fn test_changed_email_is_sent() {
        let update = credential_changes(Some("a@example.com"), "b@example.com", "");
        assert_eq!(update.email.as_deref(), Some("b@example.com"));
        assert!(update.password.is_none());
    }

    #[test]
    fn test_current_phone_is_not_verified_again() {
        // Stored without the leading plus
        let result = phone_to_verify(Some("447700900123"), "+44 7700 900123");
        assert_eq!(result, Err("Please enter a valid, new phone number to verify."));
    }

    #[test]
    fn test_new_phone_goes_to_verification() {
        assert_eq!(
            phone_to_verify(Some("447700900123"), " +447700900999 "),
            Ok("+447700900999".to_string())
        );
        assert_eq!(phone_to_verify(None, "+14155552671"), Ok("+14155552671".to_string()));
        assert_eq!(
            phone_to_verify(Some(""), "07700900123"),
            Err("Please enter a valid number with country code.")
        );
    }
}
