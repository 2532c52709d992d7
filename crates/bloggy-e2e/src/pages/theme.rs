use super::{ACTION_TIMEOUT, BlogAppPage, STATE_PROBE_TIMEOUT, VERIFY_TIMEOUT};
use crate::error::Result;
use crate::locators::BlogPageLocators;
use crate::verify::{self, expect};
use tracing::{debug, info};

// The header toggle is titled after the mode it switches *to*, so a dark
// theme shows "Switch to light mode".

impl BlogAppPage<'_> {
    pub async fn toggle_dark_mode(&self) -> Result<()> {
        info!("toggling theme");
        expect(&self.theme_toggle)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_visible()
            .await?;
        self.theme_toggle.click().await?;
        self.settle().await
    }

    pub async fn is_dark_mode(&self) -> Result<bool> {
        let active = self.element(&BlogPageLocators::DARK_MODE_ACTIVE).await;
        verify::is_present_within(&active, STATE_PROBE_TIMEOUT).await
    }

    pub async fn verify_dark_mode_active(&self) -> Result<()> {
        expect(&self.theme_toggle)
            .with_timeout(VERIFY_TIMEOUT)
            .to_have_attribute_containing("title", "light")
            .await
            .map_err(|e| e.context("dark mode"))
    }

    pub async fn verify_light_mode_active(&self) -> Result<()> {
        let active = self.element(&BlogPageLocators::LIGHT_MODE_ACTIVE).await;
        expect(&active)
            .with_timeout(VERIFY_TIMEOUT)
            .to_be_visible()
            .await
            .map_err(|e| e.context("light mode"))
    }

    /// Leaves the application in light mode whatever its current theme.
    pub async fn switch_to_light_mode(&self) -> Result<()> {
        if self.is_dark_mode().await? {
            self.toggle_dark_mode().await?;
        } else {
            debug!("already in light mode");
        }
        self.verify_light_mode_active().await
    }
}
