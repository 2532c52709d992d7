use super::{ACTION_TIMEOUT, BlogAppPage, VERIFY_TIMEOUT};
use crate::draft::{BlogDraft, BlogStatus, PublishIntent};
use crate::error::{Error, Result};
use crate::locators::{AdminPageLocators, Selector};
use crate::verify::{self, Element, expect};
use playwright_rs::ClickOptions;
use playwright_rs::protocol::Position;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long a single-select picker gets to close by itself after a choice
const PICKER_CLOSE_TIMEOUT: Duration = Duration::from_secs(1);

impl BlogAppPage<'_> {
    /// Opens the blog composer from the admin dashboard.
    pub async fn open_composer(&self) -> Result<()> {
        self.require_logged_in("opening the blog composer").await?;
        self.navigate_to_dashboard().await?;
        self.click_when_visible(&AdminPageLocators::CREATE_BLOG_BUTTON)
            .await?;

        let title = self.element(&AdminPageLocators::TITLE_INPUT).await;
        expect(&title).with_timeout(ACTION_TIMEOUT).to_be_visible().await
    }

    /// Fills the composer with `draft` and publishes, saves or cancels it.
    ///
    /// Without a title the application keeps the submit controls disabled;
    /// that state is asserted and the composer is cancelled, so no entry is
    /// created.
    pub async fn create_blog(&self, draft: &BlogDraft, intent: PublishIntent) -> Result<()> {
        info!(title = %draft.title, ?intent, "creating blog");
        self.open_composer().await?;

        self.fill_when_visible(&AdminPageLocators::TITLE_INPUT, &draft.title)
            .await?;
        self.fill_when_visible(&AdminPageLocators::EXCERPT_INPUT, &draft.excerpt)
            .await?;
        self.fill_when_visible(&AdminPageLocators::CONTENT_EDITOR, &draft.content)
            .await?;
        self.pick_options(
            &AdminPageLocators::CATEGORY_SELECT,
            std::slice::from_ref(&draft.category),
        )
        .await?;
        self.pick_options(&AdminPageLocators::TAGS_SELECT, &draft.tags)
            .await?;

        let submit = match intent {
            PublishIntent::PublishNow => &AdminPageLocators::PUBLISH_NOW_BUTTON,
            PublishIntent::SaveAsDraft => &AdminPageLocators::SAVE_BUTTON,
            PublishIntent::Cancel => return self.cancel_composer().await,
        };

        if !draft.has_title() {
            self.verify_submit_disabled(submit).await?;
            return self.cancel_composer().await;
        }

        let button = self.element(submit).await;
        expect(&button)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_enabled()
            .await?;
        button.click().await?;
        self.wait_for_dashboard().await
    }

    /// Asserts "Publish Now" is rendered but disabled.
    pub async fn verify_publish_disabled(&self) -> Result<()> {
        self.verify_submit_disabled(&AdminPageLocators::PUBLISH_NOW_BUTTON)
            .await
    }

    async fn verify_submit_disabled(&self, submit: &Selector) -> Result<()> {
        let button = self.element(submit).await;
        expect(&button)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_visible()
            .await?;
        expect(&button)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_disabled()
            .await
    }

    async fn cancel_composer(&self) -> Result<()> {
        debug!("leaving composer without saving");
        self.click_when_visible(&AdminPageLocators::CANCEL_EDIT_BUTTON)
            .await?;
        self.wait_for_dashboard().await
    }

    /// Opens a listbox picker, selects each choice, then clicks outside it.
    async fn pick_options(&self, picker: &Selector, choices: &[String]) -> Result<()> {
        self.click_when_visible(picker).await?;

        for choice in choices {
            let option = self
                .element_with_text(&AdminPageLocators::PICKER_OPTION, choice)
                .await;
            expect(&option)
                .with_timeout(ACTION_TIMEOUT)
                .to_be_visible()
                .await?;
            option.click().await?;
        }

        // Single-select pickers close on their own; multi-select ones stay
        // open until the backdrop is clicked.
        let options = self.element(&AdminPageLocators::PICKER_OPTION).await;
        if verify::is_absent_within(&options, PICKER_CLOSE_TIMEOUT).await? {
            return Ok(());
        }

        let backdrop = self.element(&AdminPageLocators::PICKER_BACKDROP).await;
        let outside = ClickOptions::builder()
            .position(Position { x: 5.0, y: 5.0 })
            .build();
        backdrop.target().click(Some(outside)).await?;
        expect(&options)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_hidden()
            .await
    }

    async fn wait_for_dashboard(&self) -> Result<()> {
        let heading = self.element(&AdminPageLocators::DASHBOARD_HEADING).await;
        expect(&heading)
            .with_timeout(VERIFY_TIMEOUT)
            .to_be_visible()
            .await?;
        self.settle().await
    }

    /// Titles listed on the admin dashboard, newest first.
    pub async fn dashboard_titles(&self) -> Result<Vec<String>> {
        self.texts(
            &AdminPageLocators::BLOG_ROW,
            Some(&AdminPageLocators::TITLE_CELL_IN_ROW),
        )
        .await
    }

    /// Dashboard rows whose title cell reads exactly `title`, newest first.
    async fn rows_titled(&self, title: &str) -> Element {
        Element::resolve_having(
            self.page,
            &AdminPageLocators::BLOG_ROW,
            &AdminPageLocators::TITLE_CELL_IN_ROW,
            title,
        )
        .await
    }

    /// Asserts a dashboard row titled exactly `title` becomes visible.
    pub async fn verify_blog_present(&self, title: &str) -> Result<()> {
        self.wait_for_dashboard().await?;
        let row = self.rows_titled(title).await;

        match expect(&row).with_timeout(VERIFY_TIMEOUT).to_be_visible().await {
            Ok(()) => Ok(()),
            Err(err) if is_wait_failure(&err) => {
                let observed = self.dashboard_titles().await?;
                Err(Error::assertion(
                    format!("blog '{title}' listed on the dashboard"),
                    format!("{observed:?}"),
                ))
            }
            Err(err) => Err(err),
        }
    }

    /// Asserts no dashboard row is titled exactly `title`.
    ///
    /// Titles that merely contain `title` ("Draft Test Title" for "Test
    /// Title") do not count.
    pub async fn verify_blog_absent(&self, title: &str) -> Result<()> {
        self.wait_for_dashboard().await?;
        let row = self.rows_titled(title).await;

        match expect(&row).with_timeout(VERIFY_TIMEOUT).to_be_hidden().await {
            Ok(()) => Ok(()),
            Err(err) if is_wait_failure(&err) => {
                let observed = self.dashboard_titles().await?;
                Err(Error::assertion(
                    format!("blog '{title}' gone from the dashboard"),
                    format!("{observed:?}"),
                ))
            }
            Err(err) => Err(err),
        }
    }

    /// Asserts the status chip of the newest row titled `title`.
    pub async fn verify_status(&self, title: &str, status: BlogStatus) -> Result<()> {
        self.wait_for_dashboard().await?;
        let chip = self
            .rows_titled(title)
            .await
            .within(&AdminPageLocators::STATUS_CHIP_IN_ROW);
        expect(&chip)
            .with_timeout(VERIFY_TIMEOUT)
            .to_contain_text(status.label())
            .await
    }

    /// Opens the delete confirmation for the newest row titled `title`.
    ///
    /// The dashboard lists newest first, so with duplicate titles the most
    /// recently created entry is the one targeted.
    pub async fn open_delete_dialog(&self, title: &str) -> Result<()> {
        self.require_logged_in("deleting a blog").await?;
        self.navigate_to_dashboard().await?;
        self.verify_blog_present(title).await?;

        let delete = self
            .rows_titled(title)
            .await
            .within(&AdminPageLocators::DELETE_BUTTON_IN_ROW);
        expect(&delete)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_visible()
            .await?;
        delete.click().await?;

        let dialog = self.element(&AdminPageLocators::DELETE_DIALOG).await;
        expect(&dialog)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_visible()
            .await
    }

    pub async fn confirm_delete(&self) -> Result<()> {
        self.click_when_visible(&AdminPageLocators::CONFIRM_DELETE_BUTTON)
            .await?;
        self.wait_for_dialog_closed().await?;
        self.settle().await
    }

    pub async fn cancel_delete(&self) -> Result<()> {
        self.click_when_visible(&AdminPageLocators::CANCEL_DELETE_BUTTON)
            .await?;
        self.wait_for_dialog_closed().await
    }

    /// Deletes the newest dashboard entry titled `title`.
    ///
    /// Completes once the dashboard lists one fewer row with that exact
    /// title than before; older duplicates stay listed.
    pub async fn delete_blog(&self, title: &str) -> Result<()> {
        info!(title, "deleting blog");
        self.open_delete_dialog(title).await?;
        let rows = self.rows_titled(title).await;
        let before = rows.count().await?;
        self.confirm_delete().await?;
        self.wait_for_row_count(&rows, before.saturating_sub(1))
            .await
            .map_err(|e| e.context(format!("delete '{title}'")))
    }

    async fn wait_for_row_count(&self, rows: &Element, expected: usize) -> Result<()> {
        let start = Instant::now();
        loop {
            let count = rows.count().await?;
            if count == expected {
                return Ok(());
            }
            if start.elapsed() >= VERIFY_TIMEOUT {
                return Err(Error::assertion(
                    format!("{expected} row(s) matching {}", rows.name()),
                    format!("{count} row(s)"),
                ));
            }
            tokio::time::sleep(verify::DEFAULT_POLL_INTERVAL).await;
        }
    }

    async fn wait_for_dialog_closed(&self) -> Result<()> {
        let dialog = self.element(&AdminPageLocators::DELETE_DIALOG).await;
        expect(&dialog)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_hidden()
            .await
    }
}

fn is_wait_failure(err: &Error) -> bool {
    matches!(
        err.root(),
        Error::LocatorUnresolved { .. } | Error::WaitTimeout { .. }
    )
}
