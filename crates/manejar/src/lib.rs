//! Manejar: Page-Object Abstraction Over Browser-Automation Drivers
//!
//! Manejar (Spanish: "to drive") lets test authors express page
//! interactions such as clicking a button or checking for text without
//! embedding raw locator strings or automation-library calls in test code.
//! The actual browser-automation engine sits behind the [`Engine`]
//! capability trait and is injected into the [`Driver`]; this crate is the
//! abstraction and dispatch contract above it, not an engine itself.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     MANEJAR Architecture                         │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────────┐  │
//! │  │ Test     │   │ Page /   │   │ Control  │   │ Engine       │  │
//! │  │ Code     │──►│ Driver   │──►│ +Locator │──►│ (injected)   │  │
//! │  └──────────┘   └──────────┘   └──────────┘   └──────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use manejar::mock::RecordingEngine;
//! use manejar::{Driver, ManejarResult, Page};
//! use std::sync::Arc;
//!
//! struct LoginPage {
//!     driver: Driver,
//! }
//!
//! impl Page for LoginPage {
//!     fn driver(&self) -> &Driver {
//!         &self.driver
//!     }
//!
//!     fn url(&self) -> &str {
//!         "login"
//!     }
//! }
//!
//! impl LoginPage {
//!     fn log_in(&self, user: &str, password: &str) -> ManejarResult<()> {
//!         self.text_field("username")?.set_value(user)?;
//!         self.text_field("password")?.set_value(password)?;
//!         self.button("log-in")?.click_and_wait()
//!     }
//! }
//!
//! let engine = Arc::new(RecordingEngine::new());
//! let driver = Driver::new(Arc::clone(&engine) as Arc<dyn manejar::Engine>);
//! let page = LoginPage { driver };
//!
//! page.open().unwrap();
//! page.log_in("ada", "s3cret").unwrap();
//! assert_eq!(engine.command_count(), 5);
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod control;
mod driver;
mod engine;
mod factory;
mod locator;
mod page;
mod result;

/// Recording fake engine for testing page objects without a browser.
///
/// Spy implementation of [`Engine`] with scripted responses; downstream
/// crates use it to unit-test their own pages.
pub mod mock;

pub use control::{Button, Control, TextField};
pub use driver::{Driver, DriverConfig, DEFAULT_PAGE_LOAD_TIMEOUT_MS};
pub use engine::Engine;
pub use factory::{ControlFactory, FromLocator};
pub use locator::{Locator, Strategy};
pub use page::Page;
pub use result::{ManejarError, ManejarResult};
