use super::{ACTION_TIMEOUT, BlogAppPage, NAVIGATION_TIMEOUT, STATE_PROBE_TIMEOUT};
use crate::error::Result;
use crate::locators::AdminPageLocators;
use crate::verify::{self, expect};
use playwright_rs::{GotoOptions, WaitUntil};
use std::time::Duration;
use tracing::{debug, info};

fn navigation_options() -> GotoOptions {
    GotoOptions::new()
        .wait_until(WaitUntil::NetworkIdle)
        .timeout(NAVIGATION_TIMEOUT)
}

impl BlogAppPage<'_> {
    /// Loads the application root and waits for it to settle.
    pub async fn navigate_home(&self) -> Result<()> {
        info!(url = %self.base_url, "navigating home");
        self.page
            .goto(&format!("{}/", self.base_url), Some(navigation_options()))
            .await?;
        self.settle().await
    }

    /// Reloads the current page; client-side state such as the theme survives.
    pub async fn reload(&self) -> Result<()> {
        debug!(url = %self.page.url(), "reloading");
        self.page.reload(Some(navigation_options())).await?;
        self.settle().await
    }

    /// Opens the admin dashboard through the header link.
    ///
    /// Already being on the dashboard, or having no dashboard link (logged
    /// out), leaves the page as it is.
    pub async fn navigate_to_dashboard(&self) -> Result<()> {
        let heading = self.element(&AdminPageLocators::DASHBOARD_HEADING).await;
        if verify::is_present_within(&heading, Duration::ZERO).await? {
            debug!("already on dashboard");
            return Ok(());
        }
        if !verify::is_present_within(&self.dashboard_link, STATE_PROBE_TIMEOUT).await? {
            debug!("no dashboard link, staying put");
            return Ok(());
        }

        self.dashboard_link.click().await?;
        expect(&heading)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_visible()
            .await?;
        self.settle().await
    }
}
