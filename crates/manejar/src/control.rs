//! Controls: typed abstractions over interactive page elements.
//!
//! Every control wraps one [`Locator`] and a [`Driver`] handle. The
//! [`Control`] trait carries the presence/visibility queries common to all
//! controls; [`Button`] and [`TextField`] add the type-specific operations.
//! Controls are stateless values with no lifecycle of their own; a page
//! (or a test) creates them and throws them away freely.

use crate::driver::Driver;
use crate::factory::FromLocator;
use crate::locator::Locator;
use crate::result::ManejarResult;

/// Queries common to all controls.
///
/// Both queries are read-only: they never raise for a "not found" condition
/// (that is a valid `Ok(false)`), and they fail with
/// [`DriverUnavailable`] when the session itself cannot be reached. "Not
/// found" and "cannot ask" are distinct conditions.
///
/// [`DriverUnavailable`]: crate::result::ManejarError::DriverUnavailable
pub trait Control {
    /// The locator this control is bound to
    fn locator(&self) -> &Locator;

    /// The driver this control dispatches through
    fn driver(&self) -> &Driver;

    /// Whether an element exists at this control's locator
    fn is_present(&self) -> ManejarResult<bool> {
        self.driver()
            .engine()
            .is_element_present(&self.locator().encode())
    }

    /// Whether the element at this control's locator is visible
    fn is_visible(&self) -> ManejarResult<bool> {
        self.driver().engine().is_visible(&self.locator().encode())
    }
}

/// A clickable element on a page
#[derive(Debug, Clone)]
pub struct Button {
    driver: Driver,
    locator: Locator,
}

impl FromLocator for Button {
    fn from_locator(driver: Driver, locator: Locator) -> Self {
        Self { driver, locator }
    }
}

impl Control for Button {
    fn locator(&self) -> &Locator {
        &self.locator
    }

    fn driver(&self) -> &Driver {
        &self.driver
    }
}

impl Button {
    /// Click the button.
    ///
    /// Issues exactly one click command and does not wait for any resulting
    /// navigation. Fails with [`ElementNotInteractable`] when the engine
    /// reports the element cannot be clicked; the error propagates
    /// unmodified.
    ///
    /// [`ElementNotInteractable`]: crate::result::ManejarError::ElementNotInteractable
    pub fn click(&self) -> ManejarResult<()> {
        let locator = self.locator.encode();
        tracing::debug!(%locator, "click");
        self.driver.engine().click(&locator)
    }

    /// Click the button, then block until the resulting page load completes.
    ///
    /// Click and wait are two independent engine commands issued in that
    /// order; a failing click propagates immediately and the wait is never
    /// issued. The wait uses the driver-configured page-load timeout and
    /// fails with [`Timeout`] when exceeded.
    ///
    /// [`Timeout`]: crate::result::ManejarError::Timeout
    pub fn click_and_wait(&self) -> ManejarResult<()> {
        self.click()?;
        let timeout_ms = self.driver.config().page_load_timeout_ms();
        tracing::debug!(%timeout_ms, "waiting for page load");
        self.driver.engine().wait_for_page_to_load(&timeout_ms)
    }
}

/// A single-line text input on a page form
#[derive(Debug, Clone)]
pub struct TextField {
    driver: Driver,
    locator: Locator,
}

impl FromLocator for TextField {
    fn from_locator(driver: Driver, locator: Locator) -> Self {
        Self { driver, locator }
    }
}

impl Control for TextField {
    fn locator(&self) -> &Locator {
        &self.locator
    }

    fn driver(&self) -> &Driver {
        &self.driver
    }
}

impl TextField {
    /// Replace the field's value with `text`.
    ///
    /// The empty string is valid and clears the field.
    pub fn set_value(&self, text: &str) -> ManejarResult<()> {
        let locator = self.locator.encode();
        tracing::debug!(%locator, "set value");
        self.driver.engine().set_value(&locator, text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::mock::{Command, RecordingEngine};
    use crate::result::ManejarError;
    use std::sync::Arc;

    fn fixture() -> (Arc<RecordingEngine>, Driver) {
        let engine = Arc::new(RecordingEngine::new());
        let driver = Driver::new(Arc::clone(&engine) as Arc<dyn Engine>);
        (engine, driver)
    }

    mod button_tests {
        use super::*;

        #[test]
        fn test_click_issues_exactly_one_click_and_no_wait() {
            let (engine, driver) = fixture();
            driver.button("submit").unwrap().click().unwrap();
            assert_eq!(
                engine.commands(),
                vec![Command::Click {
                    locator: "id=submit".to_string()
                }]
            );
        }

        #[test]
        fn test_click_and_wait_issues_click_then_wait_in_order() {
            let (engine, driver) = fixture();
            driver.button("submit").unwrap().click_and_wait().unwrap();
            assert_eq!(
                engine.commands(),
                vec![
                    Command::Click {
                        locator: "id=submit".to_string()
                    },
                    Command::WaitForPageToLoad {
                        timeout_ms: "30000".to_string()
                    },
                ]
            );
        }

        #[test]
        fn test_failed_click_suppresses_the_wait() {
            let (engine, driver) = fixture();
            engine.mark_not_interactable("id=submit");

            let err = driver.button("submit").unwrap().click_and_wait().unwrap_err();

            assert!(matches!(err, ManejarError::ElementNotInteractable { .. }));
            assert_eq!(
                engine.commands(),
                vec![Command::Click {
                    locator: "id=submit".to_string()
                }]
            );
        }

        #[test]
        fn test_not_interactable_propagates_from_click() {
            let (engine, driver) = fixture();
            engine.mark_not_interactable("id=submit");

            let err = driver.button("submit").unwrap().click().unwrap_err();
            match err {
                ManejarError::ElementNotInteractable { locator, .. } => {
                    assert_eq!(locator, "id=submit");
                }
                other => panic!("expected ElementNotInteractable, got {other}"),
            }
        }

        #[test]
        fn test_wait_timeout_propagates() {
            let (engine, driver) = fixture();
            engine.time_out_page_loads(30_000);

            let err = driver.button("go").unwrap().click_and_wait().unwrap_err();
            assert!(matches!(err, ManejarError::Timeout { ms: 30_000 }));
        }
    }

    mod text_field_tests {
        use super::*;

        #[test]
        fn test_set_value_dispatches_text() {
            let (engine, driver) = fixture();
            driver.text_field("q").unwrap().set_value("rust").unwrap();
            assert_eq!(
                engine.commands(),
                vec![Command::SetValue {
                    locator: "id=q".to_string(),
                    text: "rust".to_string()
                }]
            );
        }

        #[test]
        fn test_empty_string_clears_the_field() {
            let (engine, driver) = fixture();
            driver.text_field("q").unwrap().set_value("").unwrap();
            assert_eq!(
                engine.commands(),
                vec![Command::SetValue {
                    locator: "id=q".to_string(),
                    text: String::new()
                }]
            );
        }
    }

    mod query_tests {
        use super::*;

        #[test]
        fn test_absent_element_is_false_not_error() {
            let (_, driver) = fixture();
            let button = driver.button("missing").unwrap();
            assert!(!button.is_present().unwrap());
            assert!(!button.is_visible().unwrap());
        }

        #[test]
        fn test_present_element_is_reported() {
            let (engine, driver) = fixture();
            engine.add_element("id=submit");
            let button = driver.button("submit").unwrap();
            assert!(button.is_present().unwrap());
            assert!(!button.is_visible().unwrap());
        }

        #[test]
        fn test_visible_element_is_reported() {
            let (engine, driver) = fixture();
            engine.add_element("id=submit");
            engine.mark_visible("id=submit");
            let button = driver.button("submit").unwrap();
            assert!(button.is_visible().unwrap());
        }

        #[test]
        fn test_dead_session_is_driver_unavailable_not_false() {
            let (engine, driver) = fixture();
            let button = driver.button("submit").unwrap();
            engine.kill_session();

            let err = button.is_present().unwrap_err();
            assert!(matches!(err, ManejarError::DriverUnavailable { .. }));
        }
    }
}
