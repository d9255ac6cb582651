use super::open_db;
use crate::libs::auth::{AuthService, LocalProfileProvider};
use crate::libs::config::Config;
use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;

fn provider() -> Result<LocalProfileProvider> {
    Ok(LocalProfileProvider::new(Config::read()?.profile))
}

pub async fn login() -> Result<()> {
    let db = open_db()?;
    let auth = AuthService::new(&db, provider()?);

    match auth.sign_in().await {
        Ok(user) => msg_success!(Message::SignedIn(user.display_name)),
        Err(AppError::UpstreamUnavailable(reason)) => msg_error!(Message::SignInFailed(reason)),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub async fn logout() -> Result<()> {
    let db = open_db()?;
    let auth = AuthService::new(&db, provider()?);

    if auth.current_user()?.is_none() {
        msg_info!(Message::NotSignedIn);
        return Ok(());
    }
    auth.sign_out().await?;
    msg_success!(Message::SignedOut);
    Ok(())
}

pub fn whoami() -> Result<()> {
    let db = open_db()?;
    let auth = AuthService::new(&db, provider()?);

    match auth.current_user()? {
        Some(user) => msg_info!(Message::CurrentUser(user.display_name, user.uid)),
        None => msg_info!(Message::NotSignedIn),
    }
    Ok(())
}
