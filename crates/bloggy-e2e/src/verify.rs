// Verification - bounded waits and assertions over catalog elements
//
// Provides an expect()-style API with auto-retry. Every wait is bounded; when
// the bound expires the failure is classified: a selector that never matched
// anything is `LocatorUnresolved`, an element that exists but never reached
// the condition is `WaitTimeout`, and a text/attribute mismatch is
// `AssertionFailed` carrying the last observed value.

use crate::error::{Error, Result};
use crate::locators::{BlogPageLocators, Selector};
use playwright_rs::{Locator, Page};
use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};

/// Default bound for element conditions
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default polling interval (100ms, matching Playwright's expect())
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How long the page must stay idle before it counts as settled
const SETTLE_QUIET_WINDOW: Duration = Duration::from_millis(500);

/// A catalog entry resolved against the live page.
///
/// Interactions and state queries go through the first match; `count()`
/// sees every match.
#[derive(Clone)]
pub struct Element {
    name: String,
    locator: Locator,
}

impl Element {
    pub async fn resolve(page: &Page, selector: &Selector) -> Self {
        Self {
            name: selector.name().to_string(),
            locator: page.locator(selector.expr()).await,
        }
    }

    /// Resolves `selector` narrowed to elements whose whole text is `text`.
    pub async fn resolve_with_text(page: &Page, selector: &Selector, text: &str) -> Self {
        Self {
            name: format!("{}[{}]", selector.name(), text),
            locator: page.locator(&selector.with_text(text)).await,
        }
    }

    /// Resolves `selector` narrowed to elements whose `child` reads exactly `text`.
    pub async fn resolve_having(
        page: &Page,
        selector: &Selector,
        child: &Selector,
        text: &str,
    ) -> Self {
        Self {
            name: format!("{}[{}={}]", selector.name(), child.name(), text),
            locator: page.locator(&selector.having(child, text)).await,
        }
    }

    /// Scopes a catalog selector to this element's subtree.
    pub fn within(&self, child: &Selector) -> Self {
        Self {
            name: format!("{} > {}", self.name, child.name()),
            locator: self.target().locator(child.expr()),
        }
    }

    pub fn nth(&self, index: usize) -> Self {
        Self {
            name: format!("{}#{}", self.name, index),
            locator: self.locator.nth(index as i32),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selector(&self) -> &str {
        self.locator.selector()
    }

    /// The first match, which every interaction targets.
    pub fn target(&self) -> Locator {
        self.locator.first()
    }

    pub async fn count(&self) -> Result<usize> {
        Ok(self.locator.count().await?)
    }

    pub async fn is_visible(&self) -> Result<bool> {
        Ok(self.target().is_visible().await?)
    }

    pub async fn click(&self) -> Result<()> {
        tracing::debug!(element = %self.name, "click");
        Ok(self.target().click(None).await?)
    }

    pub async fn fill(&self, value: &str) -> Result<()> {
        tracing::debug!(element = %self.name, chars = value.len(), "fill");
        Ok(self.target().fill(value, None).await?)
    }

    pub async fn press(&self, key: &str) -> Result<()> {
        tracing::debug!(element = %self.name, key, "press");
        Ok(self.target().press(key, None).await?)
    }

    pub async fn inner_text(&self) -> Result<String> {
        Ok(self.target().inner_text().await?)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("selector", &self.selector())
            .finish()
    }
}

/// Creates an expectation for an element with auto-retry behavior.
pub fn expect(element: &Element) -> Expectation {
    Expectation {
        element: element.clone(),
        timeout: DEFAULT_TIMEOUT,
        poll_interval: DEFAULT_POLL_INTERVAL,
        negate: false,
    }
}

/// Expectation wraps an element and provides bounded assertions.
pub struct Expectation {
    element: Element,
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

// to_* methods consume self, matching the expect() chaining style
#[allow(clippy::wrong_self_convention)]
impl Expectation {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Negates the assertion.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    pub async fn to_be_visible(self) -> Result<()> {
        let target = self.element.target();
        let condition = if self.negate { "hidden" } else { "visible" };
        self.poll_state(condition, false, || target.is_visible()).await
    }

    pub async fn to_be_hidden(self) -> Result<()> {
        self.not().to_be_visible().await
    }

    pub async fn to_be_enabled(self) -> Result<()> {
        let target = self.element.target();
        let condition = if self.negate { "disabled" } else { "enabled" };
        self.poll_state(condition, true, || target.is_enabled()).await
    }

    pub async fn to_be_disabled(self) -> Result<()> {
        self.not().to_be_enabled().await
    }

    /// Asserts the element's rendered text contains `expected`, ignoring case.
    pub async fn to_contain_text(self, expected: &str) -> Result<()> {
        let needle = expected.to_lowercase();
        let description = format!("'{}' to contain \"{}\"", self.element.name, expected);
        self.poll_value(description, |text| text.to_lowercase().contains(&needle), |target| {
            async move { target.inner_text().await }
        })
        .await
    }

    /// Asserts attribute `name` contains `token` (or, negated, does not).
    pub async fn to_have_attribute_containing(self, name: &str, token: &str) -> Result<()> {
        let verb = if self.negate { "exclude" } else { "contain" };
        let description = format!(
            "'{}' attribute {} to {} \"{}\"",
            self.element.name, name, verb, token
        );
        let attribute = name.to_string();
        self.poll_value(
            description,
            |value| value.split_whitespace().any(|part| part == token),
            move |target| {
                let attribute = attribute.clone();
                async move {
                    target
                        .get_attribute(&attribute)
                        .await
                        .map(|value| value.unwrap_or_default())
                }
            },
        )
        .await
    }

    /// Polls a boolean state of the first match.
    ///
    /// With `needs_element`, the query is only issued while something
    /// matches: the driver waits up to its own 30s default for a missing
    /// element before answering.
    async fn poll_state<F, Fut>(
        &self,
        condition: &str,
        needs_element: bool,
        mut query: F,
    ) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = playwright_rs::Result<bool>>,
    {
        let start = Instant::now();

        loop {
            if !needs_element || self.element.count().await? > 0 {
                let state = query().await?;
                if state != self.negate {
                    return Ok(());
                }
            }

            if start.elapsed() >= self.timeout {
                return Err(self.classify_timeout(condition).await);
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn poll_value<P, F, Fut>(
        &self,
        description: String,
        predicate: P,
        mut read: F,
    ) -> Result<()>
    where
        P: Fn(&str) -> bool,
        F: FnMut(Locator) -> Fut,
        Fut: Future<Output = playwright_rs::Result<String>>,
    {
        let start = Instant::now();
        let mut last_seen: Option<String> = None;

        loop {
            if self.element.count().await? > 0 {
                let value = read(self.element.target()).await?;
                let matches = predicate(&value);
                if matches != self.negate {
                    return Ok(());
                }
                last_seen = Some(value);
            }

            if start.elapsed() >= self.timeout {
                return Err(match last_seen {
                    Some(actual) => Error::assertion(description, format!("{actual:?}")),
                    None => self.unresolved(),
                });
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn classify_timeout(&self, condition: &str) -> Error {
        // A negated wait (hidden/disabled) is never satisfied by absence
        // failing, so only positive conditions can be unresolved.
        if !self.negate && matches!(self.element.count().await, Ok(0)) {
            return self.unresolved();
        }
        Error::WaitTimeout {
            condition: format!("'{}' to be {}", self.element.name, condition),
            timeout: self.timeout,
        }
    }

    fn unresolved(&self) -> Error {
        Error::LocatorUnresolved {
            name: self.element.name.clone(),
            selector: self.element.selector().to_string(),
            timeout: self.timeout,
        }
    }
}

/// Explicit state query used by operations whose target state may already hold.
///
/// Returns `Ok(false)` only when the element never became visible within
/// the bound; driver faults propagate instead of reading as "absent".
pub async fn is_present_within(element: &Element, timeout: Duration) -> Result<bool> {
    let start = Instant::now();
    loop {
        if element.is_visible().await? {
            return Ok(true);
        }
        if start.elapsed() >= timeout {
            return Ok(false);
        }
        tokio::time::sleep(DEFAULT_POLL_INTERVAL).await;
    }
}

/// Counterpart of [`is_present_within`]: `Ok(true)` once the element is hidden or gone.
pub async fn is_absent_within(element: &Element, timeout: Duration) -> Result<bool> {
    let start = Instant::now();
    loop {
        if !element.is_visible().await? {
            return Ok(true);
        }
        if start.elapsed() >= timeout {
            return Ok(false);
        }
        tokio::time::sleep(DEFAULT_POLL_INTERVAL).await;
    }
}

/// Waits until the document is complete and no loading indicator is shown.
///
/// In-page updates (search filtering, list refetches) do not navigate, so
/// network idle is observed through the application's own progress
/// indicator. The state must hold for a short quiet window.
pub async fn settle(page: &Page, timeout: Duration) -> Result<()> {
    let start = Instant::now();
    let indicator = Element::resolve(page, &BlogPageLocators::LOADING_INDICATOR).await;
    let mut quiet_since: Option<Instant> = None;

    loop {
        let ready = page.evaluate_value("document.readyState").await? == "complete";
        let busy = indicator.is_visible().await?;

        if ready && !busy {
            let since = *quiet_since.get_or_insert_with(Instant::now);
            if since.elapsed() >= SETTLE_QUIET_WINDOW {
                return Ok(());
            }
        } else {
            quiet_since = None;
        }

        if start.elapsed() >= timeout {
            return Err(Error::WaitTimeout {
                condition: "page to settle (document complete, no loading indicator)".to_string(),
                timeout,
            });
        }

        tokio::time::sleep(DEFAULT_POLL_INTERVAL).await;
    }
}

/// True when `text` reads as an explicit "no results" message: it mentions
/// "no" together with "blog" or "result", in any case and any order.
pub fn is_no_results_message(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("no") && (lower.contains("blog") || lower.contains("result"))
}
