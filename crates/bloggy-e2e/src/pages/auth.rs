use super::{ACTION_TIMEOUT, BlogAppPage, STATE_PROBE_TIMEOUT, VERIFY_TIMEOUT};
use crate::config::Login;
use crate::error::{Error, Result};
use crate::locators::LoginPageLocators;
use crate::verify::{self, expect};
use tracing::{debug, info};

impl BlogAppPage<'_> {
    /// Logs in and verifies the session became authenticated.
    pub async fn login(&self, login: &Login) -> Result<()> {
        info!(username = %login.username, "logging in");
        self.submit_login(login).await?;
        self.verify_logged_in()
            .await
            .map_err(|e| e.context(format!("login as '{}'", login.username)))
    }

    /// Submits credentials the application must reject.
    ///
    /// Fails unless the "Invalid credentials" message renders within the
    /// bound and the session is still logged out afterwards.
    pub async fn login_expecting_failure(&self, login: &Login) -> Result<()> {
        info!(username = %login.username, "logging in with invalid credentials");
        self.submit_login(login).await?;

        let message = self
            .element(&LoginPageLocators::INVALID_CREDENTIALS_MESSAGE)
            .await;
        expect(&message)
            .with_timeout(VERIFY_TIMEOUT)
            .to_be_visible()
            .await
            .map_err(|e| e.context("invalid credentials message"))?;

        if self.logout_button.is_visible().await? {
            return Err(Error::assertion(
                "session to stay logged out after a rejected login",
                "logout control visible",
            ));
        }
        Ok(())
    }

    async fn submit_login(&self, login: &Login) -> Result<()> {
        if self.logout_button.is_visible().await? {
            return Err(Error::Precondition(
                "login requires a logged-out session".to_string(),
            ));
        }

        expect(&self.admin_button)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_visible()
            .await?;
        self.admin_button.click().await?;

        self.fill_when_visible(&LoginPageLocators::USERNAME_FIELD, &login.username)
            .await?;
        self.fill_when_visible(&LoginPageLocators::PASSWORD_FIELD, &login.password)
            .await?;
        self.click_when_visible(&LoginPageLocators::SUBMIT_BUTTON)
            .await?;
        self.settle().await
    }

    pub async fn verify_logged_in(&self) -> Result<()> {
        expect(&self.logout_button)
            .with_timeout(VERIFY_TIMEOUT)
            .to_be_visible()
            .await
    }

    /// True when the logout control shows up within a short bound.
    pub async fn is_logged_in(&self) -> Result<bool> {
        verify::is_present_within(&self.logout_button, STATE_PROBE_TIMEOUT).await
    }

    /// Logs out; already being logged out is the target state, not an error.
    pub async fn logout(&self) -> Result<()> {
        if !self.is_logged_in().await? {
            debug!("already logged out");
            return Ok(());
        }

        info!("logging out");
        self.logout_button.click().await?;
        expect(&self.admin_button)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_visible()
            .await
            .map_err(|e| e.context("logout"))
    }
}
