//! Driver facade over the automation engine.
//!
//! One [`Driver`] models one browser session. It is the sole integration
//! point with the [`Engine`]: every control and page operation bottoms out in
//! a driver call, and the driver is what turns [`Locator`] values into the
//! engine's canonical strings. The engine is injected explicitly at
//! construction; there is no ambient or global session state.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::control::{Button, TextField};
use crate::engine::Engine;
use crate::factory::{ControlFactory, FromLocator};
use crate::result::ManejarResult;

/// Default page-load timeout (30 seconds)
pub const DEFAULT_PAGE_LOAD_TIMEOUT_MS: u64 = 30_000;

/// Configuration for a driver session
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Timeout for page-load waits issued by `click_and_wait`
    pub page_load_timeout: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            page_load_timeout: Duration::from_millis(DEFAULT_PAGE_LOAD_TIMEOUT_MS),
        }
    }
}

impl DriverConfig {
    /// Create new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page-load timeout
    #[must_use]
    pub const fn with_page_load_timeout(mut self, timeout: Duration) -> Self {
        self.page_load_timeout = timeout;
        self
    }

    /// Page-load timeout as the milliseconds-as-string value the engine's
    /// wait command expects
    #[must_use]
    pub fn page_load_timeout_ms(&self) -> String {
        u64::try_from(self.page_load_timeout.as_millis())
            .unwrap_or(u64::MAX)
            .to_string()
    }
}

/// Facade over the underlying browser-automation engine.
///
/// Cheap to clone: clones share the same engine session, so a driver can be
/// handed to any number of controls and pages. The driver keeps no registry
/// of what it creates; every control is an independent, stateless value.
#[derive(Clone)]
pub struct Driver {
    engine: Arc<dyn Engine>,
    config: DriverConfig,
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Driver {
    /// Create a driver over an engine session with default configuration
    #[must_use]
    pub fn new(engine: Arc<dyn Engine>) -> Self {
        Self::with_config(engine, DriverConfig::default())
    }

    /// Create a driver over an engine session with explicit configuration
    #[must_use]
    pub fn with_config(engine: Arc<dyn Engine>, config: DriverConfig) -> Self {
        Self { engine, config }
    }

    /// Get the driver configuration
    #[must_use]
    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub(crate) fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    /// Create a factory for buttons bound to this driver
    #[must_use]
    pub fn create_button(&self) -> ControlFactory<Button> {
        self.create()
    }

    /// Create a factory for text fields bound to this driver
    #[must_use]
    pub fn create_text_field(&self) -> ControlFactory<TextField> {
        self.create()
    }

    /// Create a factory for any control type bound to this driver
    #[must_use]
    pub fn create<T: FromLocator>(&self) -> ControlFactory<T> {
        ControlFactory::new(self.clone())
    }

    /// Direct-ID shorthand for `create_button().from_id(id)`
    pub fn button(&self, id: &str) -> ManejarResult<Button> {
        self.create_button().from_id(id)
    }

    /// Direct-ID shorthand for `create_text_field().from_id(id)`
    pub fn text_field(&self, id: &str) -> ManejarResult<TextField> {
        self.create_text_field().from_id(id)
    }

    /// Navigate the browser to `url`
    ///
    /// Blocks until the navigation command is issued, not until the page
    /// finishes loading; waiting for a load is
    /// [`Button::click_and_wait`]'s job for link-triggered navigation.
    pub fn open(&self, url: &str) -> ManejarResult<()> {
        tracing::debug!(url, "opening page");
        self.engine.open(url)
    }

    /// Path portion of the current browser location.
    ///
    /// The scheme, host, and any leading `/` are stripped, leaving the form
    /// pages compare their [`url()`](crate::page::Page::url) against.
    pub fn current_relative_url(&self) -> ManejarResult<String> {
        let location = self.engine.location()?;
        Ok(relative_portion(&location).to_string())
    }

    /// Whether `text` appears anywhere on the current page
    ///
    /// Case-sensitive per engine semantics; absence is `Ok(false)`.
    pub fn is_text_present(&self, text: &str) -> ManejarResult<bool> {
        self.engine.is_text_present(text)
    }
}

/// Strip scheme, host, and leading slashes from an absolute location.
fn relative_portion(location: &str) -> &str {
    match location.split_once("://") {
        Some((_, rest)) => rest
            .find('/')
            .map_or("", |slash| &rest[slash..])
            .trim_start_matches('/'),
        None => location.trim_start_matches('/'),
    }
}
