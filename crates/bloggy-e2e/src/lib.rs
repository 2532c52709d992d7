//! bloggy-e2e: End-to-end UI suite for the Bloggy blog application
//!
//! Scenarios drive the application through a page object, [`BlogAppPage`],
//! whose operations resolve elements from named locator catalogs, wait for
//! them within a bound, and verify their post-conditions.
//!
//! # Examples
//!
//! ```ignore
//! use bloggy_e2e::{SuiteConfig, SuiteOptions, with_session};
//!
//! #[tokio::main]
//! async fn main() -> bloggy_e2e::Result<()> {
//!     let config = SuiteConfig::load_default()?;
//!     let url = bloggy_e2e::config::target_url()?;
//!
//!     with_session(&SuiteOptions::default(), &url, |session| {
//!         Box::pin(async move {
//!             let app = session.app().await;
//!             app.login(&config.credentials.valid()).await?;
//!             app.search("typescript").await?;
//!             app.verify_results_found("typescript").await?;
//!             app.logout().await
//!         })
//!     })
//!     .await
//! }
//! ```
//!
//! Every scenario of a run shares one [`Session`]; the [`harness`] resets it
//! to a known baseline (home page, logged out, light theme) before each
//! scenario and restores it afterwards.

pub mod config;
pub mod draft;
mod error;
pub mod fixture;
pub mod harness;
pub mod locators;
pub mod options;
pub mod pages;
pub mod reports;
pub mod verify;

// Re-export error types
pub use error::{Error, Result};

// Re-export the session fixture and page object
pub use fixture::{Session, SessionState, with_session};
pub use pages::BlogAppPage;

// Re-export scenario inputs
pub use config::{Credentials, Login, SuiteConfig};
pub use draft::{BlogDraft, BlogStatus, PublishIntent};
pub use options::{BrowserKind, SuiteOptions};

// Re-export the runner
pub use harness::{Baseline, Outcome, Scenario, ScenarioResult, Suite, SuiteReport};
