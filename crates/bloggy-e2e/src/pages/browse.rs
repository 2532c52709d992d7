use super::{ACTION_TIMEOUT, BlogAppPage, VERIFY_TIMEOUT};
use crate::error::{Error, Result};
use crate::locators::BlogPageLocators;
use crate::verify::{self, expect};
use tracing::info;

impl BlogAppPage<'_> {
    /// Types `term` into the home page search box and waits for the list to update.
    pub async fn search(&self, term: &str) -> Result<()> {
        info!(term, "searching blogs");
        self.fill_when_visible(&BlogPageLocators::SEARCH_INPUT, term)
            .await?;
        let input = self.element(&BlogPageLocators::SEARCH_INPUT).await;
        input.press("Enter").await?;
        self.settle().await
    }

    pub async fn clear_search(&self) -> Result<()> {
        self.search("").await
    }

    /// Titles of the result cards currently listed.
    pub async fn result_titles(&self) -> Result<Vec<String>> {
        self.texts(
            &BlogPageLocators::BLOG_CARD,
            Some(&BlogPageLocators::BLOG_CARD_TITLE),
        )
        .await
    }

    /// Asserts at least one visible result card mentions `term`, ignoring case.
    pub async fn verify_results_found(&self, term: &str) -> Result<()> {
        let cards = self.element(&BlogPageLocators::BLOG_CARD).await;
        expect(&cards)
            .with_timeout(VERIFY_TIMEOUT)
            .to_be_visible()
            .await
            .map_err(|e| e.context(format!("search results for '{term}'")))?;

        let needle = term.to_lowercase();
        for index in 0..cards.count().await? {
            let card = cards.nth(index);
            if card.is_visible().await? && card.inner_text().await?.to_lowercase().contains(&needle)
            {
                return Ok(());
            }
        }

        Err(Error::assertion(
            format!("a result card mentioning '{term}'"),
            format!("{:?}", self.result_titles().await?),
        ))
    }

    /// Asserts the explicit empty-result message is shown and no card is listed.
    pub async fn verify_no_results_found(&self) -> Result<()> {
        let message = self.element(&BlogPageLocators::NO_RESULTS_MESSAGE).await;
        expect(&message)
            .with_timeout(VERIFY_TIMEOUT)
            .to_be_visible()
            .await?;

        let text = message.inner_text().await?;
        if !verify::is_no_results_message(&text) {
            return Err(Error::assertion("a 'no results' message", text));
        }

        let cards = self.element(&BlogPageLocators::BLOG_CARD).await;
        expect(&cards)
            .with_timeout(ACTION_TIMEOUT)
            .to_be_hidden()
            .await
    }

    /// Opens the first listed result through its "Read More" control.
    pub async fn read_more_first(&self) -> Result<String> {
        let card = self.element(&BlogPageLocators::BLOG_CARD).await;
        expect(&card)
            .with_timeout(VERIFY_TIMEOUT)
            .to_be_visible()
            .await?;

        let title = card
            .within(&BlogPageLocators::BLOG_CARD_TITLE)
            .inner_text()
            .await?
            .trim()
            .to_string();
        info!(title = %title, "opening blog");

        card.within(&BlogPageLocators::READ_MORE_BUTTON).click().await?;
        self.settle().await?;
        Ok(title)
    }

    /// Asserts the detail view shows the blog titled `title`.
    pub async fn verify_blog_detail(&self, title: &str) -> Result<()> {
        let heading = self.element(&BlogPageLocators::BLOG_DETAIL_TITLE).await;
        expect(&heading)
            .with_timeout(VERIFY_TIMEOUT)
            .to_contain_text(title)
            .await
    }
}
