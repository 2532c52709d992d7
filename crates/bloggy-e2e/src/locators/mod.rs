// Locator catalogs - named selector tables for the blog application
//
// Each catalog groups the selectors of one page area. Selectors are CSS
// (with Playwright's `:has-text()`/`:text-is()` extensions) or XPath, and
// are contracts against the rendered DOM: they change in lockstep with the UI.

mod admin;
mod blog;
mod login;

pub use admin::AdminPageLocators;
pub use blog::BlogPageLocators;
pub use login::LoginPageLocators;

use std::fmt;

/// A symbolic name bound to a selector expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector {
    name: &'static str,
    expr: &'static str,
}

impl Selector {
    pub const fn new(name: &'static str, expr: &'static str) -> Self {
        Self { name, expr }
    }

    /// Catalog name, used in failure messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw selector expression handed to Playwright.
    pub fn expr(&self) -> &'static str {
        self.expr
    }

    pub fn is_xpath(&self) -> bool {
        self.expr.starts_with('/') || self.expr.starts_with("xpath=")
    }

    /// Narrows the selector to elements whose whole text is `text`.
    ///
    /// Matching is exact and case-sensitive after whitespace is normalized,
    /// so "Test Title" does not match "Draft Test Title". CSS selector lists
    /// get the filter on every alternative; catalog expressions never carry
    /// commas inside attribute values.
    pub fn with_text(&self, text: &str) -> String {
        if self.is_xpath() {
            format!("{}[normalize-space(.)={}]", self.expr, xpath_literal(text))
        } else {
            let quoted = css_string(text);
            self.alternatives()
                .map(|alternative| format!("{alternative}:text-is({quoted})"))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Narrows the selector to elements holding a `child` whose whole text is `text`.
    ///
    /// An XPath selector matches on any descendant with that text.
    pub fn having(&self, child: &Selector, text: &str) -> String {
        if self.is_xpath() {
            format!(
                "{}[.//*[normalize-space(.)={}]]",
                self.expr,
                xpath_literal(text)
            )
        } else {
            let inner = child.with_text(text);
            self.alternatives()
                .map(|alternative| format!("{alternative}:has({inner})"))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    fn alternatives(&self) -> impl Iterator<Item = &'static str> {
        self.expr.split(',').map(str::trim)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.expr)
    }
}

fn css_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
}

// XPath 1.0 has no escape sequences; a string holding both quote kinds
// has to be assembled with concat().
fn xpath_literal(text: &str) -> String {
    if !text.contains('\'') {
        format!("'{text}'")
    } else if !text.contains('"') {
        format!("\"{text}\"")
    } else {
        let parts: Vec<String> = text.split('\'').map(|part| format!("'{part}'")).collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}
