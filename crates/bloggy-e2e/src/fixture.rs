// Session fixture - one browser and one page for the whole run
//
// Lifecycle: Uninitialized -> BrowserLaunched -> PageReady -> TornDown.
// `with_session` is the scoped form: the browser is released whether the
// body returns Ok, Err or panics.

use crate::error::Result;
use crate::harness::Baseline;
use crate::options::{BrowserKind, SuiteOptions};
use crate::pages::BlogAppPage;
use crate::{config, pages};
use async_trait::async_trait;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use playwright_rs::protocol::{BrowserContextOptions, Viewport};
use playwright_rs::{Browser, BrowserType, GotoOptions, Page, Playwright, WaitUntil};
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    BrowserLaunched,
    PageReady,
    TornDown,
}

/// The single browser/page shared by every scenario of a run.
pub struct Session {
    playwright: Playwright,
    browser: Browser,
    page: Page,
    base_url: String,
    state: SessionState,
}

impl Session {
    /// Launches the selected engine, opens a page and loads the application.
    ///
    /// When a later step fails, whatever was already started is released
    /// before the error is returned.
    pub async fn start(options: &SuiteOptions, base_url: &str) -> Result<Self> {
        let base_url = config::parse_target_url(base_url)?;
        let mut state = SessionState::Uninitialized;
        debug!(?state, "starting session");

        let playwright = Playwright::launch().await?;
        let browser = match browser_type(&playwright, options.browser)
            .launch_with_options(options.launch_options())
            .await
        {
            Ok(browser) => browser,
            Err(err) => {
                shutdown_driver(&playwright).await;
                return Err(err.into());
            }
        };
        state = SessionState::BrowserLaunched;
        info!(browser = %options.browser, headless = options.headless, ?state, "browser launched");

        let page = match open_page(&browser, options, &base_url).await {
            Ok(page) => page,
            Err(err) => {
                close_browser(&browser).await;
                shutdown_driver(&playwright).await;
                return Err(err);
            }
        };
        state = SessionState::PageReady;
        info!(url = %base_url, ?state, "session ready");

        Ok(Self {
            playwright,
            browser,
            page,
            base_url,
            state,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A page object over the session's page.
    pub async fn app(&self) -> BlogAppPage<'_> {
        BlogAppPage::new(&self.page, self.base_url.as_str()).await
    }

    /// Closes the browser and stops the driver. Calling it again is a no-op.
    pub async fn teardown(&mut self) {
        if self.state == SessionState::TornDown {
            return;
        }
        close_browser(&self.browser).await;
        shutdown_driver(&self.playwright).await;
        self.state = SessionState::TornDown;
        info!(state = ?self.state, "session torn down");
    }

    /// Saves a screenshot of the current page to `path`.
    pub async fn screenshot(&self, path: &Path) -> Result<()> {
        self.page.screenshot_to_file(path, None).await?;
        Ok(())
    }
}

/// Runs `body` against a fresh session, tearing it down afterwards.
///
/// A panic inside `body` is re-raised once the browser has been released.
pub async fn with_session<T, F>(options: &SuiteOptions, base_url: &str, body: F) -> Result<T>
where
    F: for<'a> FnOnce(&'a Session) -> BoxFuture<'a, Result<T>>,
{
    let mut session = Session::start(options, base_url).await?;
    let outcome = AssertUnwindSafe(body(&session)).catch_unwind().await;
    session.teardown().await;

    match outcome {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

#[async_trait]
impl Baseline for Session {
    /// Home page, logged out, light theme, no search filter.
    ///
    /// Navigating home drops any search term, since the filter only lives in
    /// the page's state.
    async fn establish(&self) -> Result<()> {
        let app = self.app().await;
        app.navigate_home().await?;
        app.logout().await?;
        app.switch_to_light_mode().await
    }

    /// Logs out and reverts the theme, attempting both even if one fails.
    async fn restore(&self) -> Result<()> {
        let app = self.app().await;
        let logout = app.logout().await;
        let theme = app.switch_to_light_mode().await;
        logout.and(theme)
    }

    async fn capture_failure(&self, scenario: &str, dir: &Path) -> Result<Option<PathBuf>> {
        let path = dir.join(format!("{scenario}.png"));
        self.screenshot(&path).await?;
        Ok(Some(path))
    }
}

fn browser_type(playwright: &Playwright, kind: BrowserKind) -> &BrowserType {
    match kind {
        BrowserKind::Chromium => playwright.chromium(),
        BrowserKind::Firefox => playwright.firefox(),
        BrowserKind::Webkit => playwright.webkit(),
    }
}

async fn open_page(browser: &Browser, options: &SuiteOptions, base_url: &str) -> Result<Page> {
    // Headed runs use the real (maximised) window; headless ones have no
    // window to size, so they get the same dimensions emulated.
    let context_options = if options.headless {
        BrowserContextOptions::builder()
            .viewport(Viewport {
                width: 1920,
                height: 1080,
            })
            .build()
    } else {
        BrowserContextOptions::builder().no_viewport(true).build()
    };

    let context = browser.new_context_with_options(context_options).await?;
    let page = context.new_page().await?;
    page.goto(
        &format!("{base_url}/"),
        Some(
            GotoOptions::new()
                .wait_until(WaitUntil::NetworkIdle)
                .timeout(pages::NAVIGATION_TIMEOUT),
        ),
    )
    .await?;
    crate::verify::settle(&page, pages::SETTLE_TIMEOUT).await?;
    Ok(page)
}

async fn close_browser(browser: &Browser) {
    if let Err(err) = browser.close().await {
        warn!(error = %err, "failed to close browser");
    }
}

async fn shutdown_driver(playwright: &Playwright) {
    if let Err(err) = playwright.shutdown().await {
        warn!(error = %err, "failed to shut down playwright driver");
    }
}
