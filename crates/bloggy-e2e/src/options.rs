// Run-time options - the suite's command-line surface
//
// `--headless` and `--browser` select how the session fixture launches its
// browser. Everything else about the run comes from configuration.

use clap::{Parser, ValueEnum};
use playwright_rs::api::LaunchOptions;
use std::fmt;

/// Browser engines the suite can drive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "blog_suite")]
#[command(about = "UI scenarios for the Bloggy blog application")]
pub struct SuiteOptions {
    /// Run browser in headless mode (default: headed)
    #[arg(long)]
    pub headless: bool,

    /// Browser to use
    #[arg(long, value_enum, default_value_t = BrowserKind::Chromium)]
    pub browser: BrowserKind,

    /// Only run scenarios whose name contains this text
    pub filter: Option<String>,

    /// Accepted for `cargo test -- --nocapture` compatibility; output is never captured
    #[arg(long, hide = true)]
    pub nocapture: bool,

    /// Accepted for `cargo test -- --quiet` compatibility
    #[arg(long, short = 'q', hide = true)]
    pub quiet: bool,
}

impl SuiteOptions {
    /// Launch options for the selected engine.
    ///
    /// Headed chromium opens maximised at 1920x1080; the other engines do
    /// not understand those switches.
    pub fn launch_options(&self) -> LaunchOptions {
        let options = LaunchOptions::new().headless(self.headless);
        match self.browser {
            BrowserKind::Chromium => options.args(vec![
                "--start-maximized".to_string(),
                "--window-size=1920,1080".to_string(),
            ]),
            BrowserKind::Firefox | BrowserKind::Webkit => options,
        }
    }

    pub fn selects(&self, scenario: &str) -> bool {
        self.filter
            .as_deref()
            .is_none_or(|filter| scenario.contains(filter))
    }
}
