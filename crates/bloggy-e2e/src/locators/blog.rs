use super::Selector;

/// Public home page, search, theme toggle and blog detail view.
pub struct BlogPageLocators;

impl BlogPageLocators {
    pub const SEARCH_INPUT: Selector = Selector::new(
        "SEARCH_INPUT",
        "input[placeholder*='Search'], input[type='search']",
    );
    pub const BLOG_CARD: Selector =
        Selector::new("BLOG_CARD", "div.MuiCard-root, [data-testid='blog-card']");
    pub const BLOG_CARD_TITLE: Selector = Selector::new("BLOG_CARD_TITLE", "h2");
    pub const NO_RESULTS_MESSAGE: Selector =
        Selector::new("NO_RESULTS_MESSAGE", "h6:has-text('No ')");
    pub const READ_MORE_BUTTON: Selector =
        Selector::new("READ_MORE_BUTTON", "button:has-text('Read More')");
    pub const BLOG_DETAIL_TITLE: Selector = Selector::new("BLOG_DETAIL_TITLE", "h1");
    pub const LOADING_INDICATOR: Selector =
        Selector::new("LOADING_INDICATOR", "[role='progressbar']");

    // Theme: the toggle's title names the mode it switches *to*
    pub const THEME_TOGGLE: Selector =
        Selector::new("THEME_TOGGLE", "header button[title$=' mode']");
    pub const DARK_MODE_ACTIVE: Selector = Selector::new(
        "DARK_MODE_ACTIVE",
        "header button[title='Switch to light mode']",
    );
    pub const LIGHT_MODE_ACTIVE: Selector = Selector::new(
        "LIGHT_MODE_ACTIVE",
        "header button[title='Switch to dark mode']",
    );

    pub const ALL: &'static [Selector] = &[
        Self::SEARCH_INPUT,
        Self::BLOG_CARD,
        Self::BLOG_CARD_TITLE,
        Self::NO_RESULTS_MESSAGE,
        Self::READ_MORE_BUTTON,
        Self::BLOG_DETAIL_TITLE,
        Self::LOADING_INDICATOR,
        Self::THEME_TOGGLE,
        Self::DARK_MODE_ACTIVE,
        Self::LIGHT_MODE_ACTIVE,
    ];
}
