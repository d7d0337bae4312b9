//! Page trait: a user-defined composition of controls for one web page.
//!
//! For each page in the system under test, implement [`Page`] on a type
//! holding that page's controls as named fields, constructed from the driver
//! at page construction. The trait supplies navigation and content queries;
//! page types only provide their driver handle and relative URL.
//!
//! A page is a stateless facade: every query re-evaluates against the
//! driver, and "current page" is never cached.

use crate::control::{Button, TextField};
use crate::driver::Driver;
use crate::result::ManejarResult;

/// A navigable page composed of controls.
///
/// `url()` is the page's relative URL and must be a pure function of page
/// identity: stable for the page's lifetime, with no driver interaction.
pub trait Page {
    /// The driver this page dispatches through
    fn driver(&self) -> &Driver;

    /// Relative URL where the page lives
    fn url(&self) -> &str;

    /// Open the page in the browser controlled by this page's driver
    fn open(&self) -> ManejarResult<()> {
        self.driver().open(self.url())
    }

    /// Whether this page is the currently open page in the browser.
    ///
    /// Case-insensitive comparison of the driver's current relative URL
    /// against [`url()`](Page::url); a leading `/` on either side is
    /// ignored.
    fn is_current(&self) -> ManejarResult<bool> {
        let current = self.driver().current_relative_url()?;
        Ok(current
            .trim_start_matches('/')
            .eq_ignore_ascii_case(self.url().trim_start_matches('/')))
    }

    /// Whether `text` appears anywhere on the page
    fn contains_text(&self, text: &str) -> ManejarResult<bool> {
        self.driver().is_text_present(text)
    }

    /// Create a text field on this page by its `id` attribute.
    ///
    /// Convenience delegate for page types composing their own field
    /// properties.
    fn text_field(&self, id: &str) -> ManejarResult<TextField> {
        self.driver().text_field(id)
    }

    /// Create a button on this page by its `id` attribute
    fn button(&self, id: &str) -> ManejarResult<Button> {
        self.driver().button(id)
    }
}
