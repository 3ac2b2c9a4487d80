//! Sign-in, sign-up and account server functions

use dioxus::prelude::*;

use crate::config::PublicConfig;
use crate::domain::models::{AccountUpdate, AuthSession, AuthUser, SignUpOutcome};

/// Browser-safe configuration (hCaptcha site key, OAuth base)
#[server]
pub async fn get_public_config() -> Result<PublicConfig, ServerFnError> {
    use super::context::context;

    Ok(context()?.config.public())
}

#[server]
pub async fn sign_in(email: String, password: String) -> Result<AuthSession, ServerFnError> {
    use super::context::{context, validation_error};
    use crate::domain::services::validation::validate_email;
    use crate::shared::logging::{log_auth_attempt, log_auth_failure, log_auth_success};

    log_auth_attempt("password");
    let email = validate_email(&email).map_err(validation_error)?;
    if password.is_empty() {
        return Err(ServerFnError::new("Password is required"));
    }

    match context()?.supabase.sign_in_with_password(&email, &password).await {
        Ok(session) => {
            log_auth_success("password", &session.user.id);
            Ok(session)
        }
        Err(e) => {
            log_auth_failure("password", &e.to_string());
            Err(ServerFnError::new(e.sign_in_message()))
        }
    }
}

#[server]
pub async fn sign_up(
    email: String,
    password: String,
    full_name: String,
    captcha_token: String,
) -> Result<SignUpOutcome, ServerFnError> {
    use super::context::{context, validation_error};
    use crate::domain::services::validation::{validate_email, validate_password};
    use crate::shared::logging::{log_auth_attempt, log_auth_failure};

    log_auth_attempt("sign_up");
    let email = validate_email(&email).map_err(validation_error)?;
    validate_password(&password).map_err(validation_error)?;
    if captcha_token.is_empty() {
        return Err(ServerFnError::new("CAPTCHA verification failed. Please try again."));
    }

    context()?
        .supabase
        .sign_up(&email, &password, full_name.trim(), Some(&captcha_token))
        .await
        .map_err(|e| {
            log_auth_failure("sign_up", &e.to_string());
            ServerFnError::new(e.sign_up_message())
        })
}

#[server]
pub async fn sign_in_anonymous(captcha_token: String) -> Result<AuthSession, ServerFnError> {
    use super::context::{backend_error, context};
    use crate::shared::logging::{log_auth_attempt, log_auth_success, LogOperation};

    log_auth_attempt("anonymous");
    if captcha_token.is_empty() {
        return Err(ServerFnError::new("CAPTCHA verification failed. Please try again."));
    }

    let session = context()?
        .supabase
        .sign_in_anonymously(Some(&captcha_token))
        .await
        .map_err(|e| backend_error(LogOperation::Auth, "sign_in_anonymous", e))?;
    log_auth_success("anonymous", &session.user.id);
    Ok(session)
}

#[server]
pub async fn refresh_session(refresh_token: String) -> Result<AuthSession, ServerFnError> {
    use super::context::{backend_error, context};
    use crate::shared::logging::LogOperation;

    context()?
        .supabase
        .refresh_session(&refresh_token)
        .await
        .map_err(|e| backend_error(LogOperation::Auth, "refresh_session", e))
}

#[server]
pub async fn get_current_user(access_token: String) -> Result<AuthUser, ServerFnError> {
    use super::context::authenticate;

    authenticate(&access_token).await
}

/// Revoke the session server-side; the client forgets it regardless
#[server]
pub async fn sign_out(access_token: String) -> Result<(), ServerFnError> {
    use super::context::{backend_error, context};
    use crate::infrastructure::supabase::token_cache;
    use crate::shared::logging::LogOperation;

    token_cache::invalidate(&access_token);
    context()?
        .supabase
        .sign_out(&access_token)
        .await
        .map_err(|e| backend_error(LogOperation::Auth, "sign_out", e))
}

/// Change email, password or phone. Phone changes need a captcha token.
#[server]
pub async fn update_account(
    access_token: String,
    update: AccountUpdate,
    captcha_token: Option<String>,
) -> Result<AuthUser, ServerFnError> {
    use super::context::{authenticate, backend_error, context, validation_error};
    use crate::domain::services::validation::{validate_email, validate_password, validate_phone};
    use crate::infrastructure::supabase::token_cache;
    use crate::shared::logging::LogOperation;

    if update.is_empty() {
        return Err(ServerFnError::new("Nothing to update"));
    }

    let mut update = update;
    if let Some(email) = &update.email {
        update.email = Some(validate_email(email).map_err(validation_error)?);
    }
    if let Some(password) = &update.password {
        validate_password(password).map_err(validation_error)?;
    }
    if let Some(phone) = &update.phone {
        if !phone.trim().is_empty() {
            update.phone = Some(validate_phone(phone).map_err(validation_error)?);
        }
    }

    authenticate(&access_token).await?;
    let user = context()?
        .supabase
        .update_user(&access_token, &update, captcha_token.as_deref())
        .await
        .map_err(|e| backend_error(LogOperation::Auth, "update_user", e))?;
    token_cache::set_cached(&access_token, user.clone());
    Ok(user)
}

/// URL that starts an OAuth sign-in, returning to `redirect_path`
#[server]
pub async fn get_oauth_url(provider: String, redirect_path: String) -> Result<String, ServerFnError> {
    use super::context::context;

    if provider != "google" {
        return Err(ServerFnError::new(format!("Unknown provider: {}", provider)));
    }
    let ctx = context()?;
    let redirect_to = format!(
        "{}/{}",
        ctx.config.public_site_url,
        redirect_path.trim_start_matches('/')
    );
    Ok(ctx.supabase.oauth_url(&provider, &redirect_to))
}
