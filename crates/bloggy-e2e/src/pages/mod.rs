// Page object for the blog application
//
// `BlogAppPage` wraps the session's page handle and exposes the operations a
// scenario talks in: log in, publish a blog, search, toggle the theme. Each
// operation resolves its elements from the locator catalogs, waits for them
// to become actionable, interacts, and verifies the post-condition.
//
// The operations are grouped by area across the submodules; they all extend
// the one façade type.

mod auth;
mod authoring;
mod browse;
mod navigation;
mod theme;

use crate::error::{Error, Result};
use crate::locators::{BlogPageLocators, LoginPageLocators, Selector};
use crate::verify::{self, Element};
use playwright_rs::Page;
use std::time::Duration;

/// Bound for an element to become actionable before interacting
pub const ACTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Bound for post-condition checks (dashboard rows, search results)
pub const VERIFY_TIMEOUT: Duration = Duration::from_secs(15);

/// Bound for the page to settle after navigation or an in-page update
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(15);

/// Bound for navigation requests
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Short bound used by state queries ("is the logout control there?")
pub const STATE_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Façade over the blog application's UI.
pub struct BlogAppPage<'a> {
    page: &'a Page,
    base_url: String,
    admin_button: Element,
    logout_button: Element,
    dashboard_link: Element,
    theme_toggle: Element,
}

impl<'a> BlogAppPage<'a> {
    /// Wraps `page`, resolving the header controls every area shares.
    pub async fn new(page: &'a Page, base_url: impl Into<String>) -> Self {
        Self {
            page,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            admin_button: Element::resolve(page, &LoginPageLocators::ADMIN_BUTTON).await,
            logout_button: Element::resolve(page, &LoginPageLocators::LOGOUT).await,
            dashboard_link: Element::resolve(page, &LoginPageLocators::DASHBOARD_LINK).await,
            theme_toggle: Element::resolve(page, &BlogPageLocators::THEME_TOGGLE).await,
        }
    }

    pub fn page(&self) -> &Page {
        self.page
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn element(&self, selector: &Selector) -> Element {
        Element::resolve(self.page, selector).await
    }

    async fn element_with_text(&self, selector: &Selector, text: &str) -> Element {
        Element::resolve_with_text(self.page, selector, text).await
    }

    /// Resolves `selector`, waits for it to be visible, then clicks it.
    async fn click_when_visible(&self, selector: &Selector) -> Result<Element> {
        let element = self.element(selector).await;
        verify::expect(&element)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_visible()
            .await?;
        element.click().await?;
        Ok(element)
    }

    /// Resolves `selector`, waits for it to be visible, then fills it.
    async fn fill_when_visible(&self, selector: &Selector, value: &str) -> Result<()> {
        let element = self.element(selector).await;
        verify::expect(&element)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_visible()
            .await?;
        element.fill(value).await
    }

    pub async fn settle(&self) -> Result<()> {
        verify::settle(self.page, SETTLE_TIMEOUT).await
    }

    async fn require_logged_in(&self, action: &str) -> Result<()> {
        if self.is_logged_in().await? {
            Ok(())
        } else {
            Err(Error::Precondition(format!(
                "{action} requires an authenticated session"
            )))
        }
    }

    /// Visible text of every match of `selector`, narrowed to `child` when given.
    async fn texts(&self, selector: &Selector, child: Option<&Selector>) -> Result<Vec<String>> {
        let all = self.element(selector).await;
        let mut texts = Vec::new();
        for index in 0..all.count().await? {
            let item = all.nth(index);
            let item = match child {
                Some(child) => item.within(child),
                None => item,
            };
            texts.push(item.inner_text().await?.trim().to_string());
        }
        Ok(texts)
    }
}
