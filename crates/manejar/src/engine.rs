//! Engine capability trait: the boundary with the automation engine.
//!
//! The engine itself (DOM traversal, wire protocol) lives outside this
//! crate. Every layer above it talks only to this trait, so a test session
//! can swap the real engine for the
//! [recording fake](crate::mock::RecordingEngine) without touching page code.

use crate::result::ManejarResult;

/// Capability set required of the underlying browser-automation engine.
///
/// Locator-qualified methods receive the canonical locator encoding
/// (`id=<value>`, `name=<value>`, `xpath=<value>`, or a raw XPath string
/// beginning with `/`). The engine never sees a [`Locator`] value itself.
///
/// One implementation models one browser session. Implementations must be
/// `Send + Sync` so a session can move between test threads, but callers are
/// responsible for serializing access; concurrent dispatch to the same
/// session has undefined ordering.
///
/// [`Locator`]: crate::locator::Locator
pub trait Engine: Send + Sync {
    /// Navigate the browser to `url`
    fn open(&self, url: &str) -> ManejarResult<()>;

    /// Click the element at `locator`
    ///
    /// Fails with [`ElementNotInteractable`] when the element cannot receive
    /// the click (not present, not visible, disabled).
    ///
    /// [`ElementNotInteractable`]: crate::result::ManejarError::ElementNotInteractable
    fn click(&self, locator: &str) -> ManejarResult<()>;

    /// Replace the value of the element at `locator` with `text`
    ///
    /// An empty `text` clears the field.
    fn set_value(&self, locator: &str, text: &str) -> ManejarResult<()>;

    /// Block until the current page load completes
    ///
    /// `timeout_ms` is a milliseconds value rendered as a string, e.g.
    /// `"30000"`; the signature quirk is inherited from the engine's wire
    /// convention. Fails with [`Timeout`] when exceeded.
    ///
    /// [`Timeout`]: crate::result::ManejarError::Timeout
    fn wait_for_page_to_load(&self, timeout_ms: &str) -> ManejarResult<()>;

    /// Absolute URL of the current browser location
    fn location(&self) -> ManejarResult<String>;

    /// Whether `text` appears anywhere on the current page
    ///
    /// Case-sensitive per engine semantics; absence is `Ok(false)`, never an
    /// error.
    fn is_text_present(&self, text: &str) -> ManejarResult<bool>;

    /// Whether an element exists at `locator`
    ///
    /// Absence is `Ok(false)`, never an error.
    fn is_element_present(&self, locator: &str) -> ManejarResult<bool>;

    /// Whether the element at `locator` is visible
    ///
    /// Absence or invisibility is `Ok(false)`, never an error.
    fn is_visible(&self, locator: &str) -> ManejarResult<bool>;
}
