//! Recording fake engine for testing page objects without a browser.
//!
//! [`RecordingEngine`] implements [`Engine`] as a spy: every dispatched
//! command is recorded for assertion, and the responses (current location,
//! present elements, page text, failures) are scripted by the test. No
//! mocking framework is involved; tests assert on the recorded message
//! sequence directly.
//!
//! # Example
//!
//! ```
//! use manejar::mock::{Command, RecordingEngine};
//! use manejar::Driver;
//! use std::sync::Arc;
//!
//! let engine = Arc::new(RecordingEngine::new());
//! let driver = Driver::new(Arc::clone(&engine) as Arc<dyn manejar::Engine>);
//!
//! driver.button("submit").unwrap().click().unwrap();
//!
//! assert_eq!(
//!     engine.commands(),
//!     vec![Command::Click { locator: "id=submit".to_string() }]
//! );
//! ```

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use crate::engine::Engine;
use crate::result::{ManejarError, ManejarResult};

/// One command dispatched to the engine, as recorded by [`RecordingEngine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigation to a URL
    Open {
        /// Requested URL
        url: String,
    },
    /// Click at a locator
    Click {
        /// Canonical locator string
        locator: String,
    },
    /// Value replacement at a locator
    SetValue {
        /// Canonical locator string
        locator: String,
        /// New value
        text: String,
    },
    /// Page-load wait
    WaitForPageToLoad {
        /// Timeout as milliseconds-as-string
        timeout_ms: String,
    },
    /// Current-location query
    Location,
    /// Page text search
    IsTextPresent {
        /// Text searched for
        text: String,
    },
    /// Element existence query
    IsElementPresent {
        /// Canonical locator string
        locator: String,
    },
    /// Element visibility query
    IsVisible {
        /// Canonical locator string
        locator: String,
    },
}

#[derive(Debug, Default)]
struct EngineState {
    commands: Vec<Command>,
    location: String,
    page_texts: Vec<String>,
    present: HashSet<String>,
    visible: HashSet<String>,
    not_interactable: HashSet<String>,
    page_load_timeout: Option<u64>,
    session_dead: bool,
}

/// Spy implementation of [`Engine`] with scripted responses.
///
/// A dead session (after [`kill_session`](RecordingEngine::kill_session))
/// rejects every call with `DriverUnavailable` and records nothing; an
/// unreachable engine receives no commands.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    state: Mutex<EngineState>,
}

impl RecordingEngine {
    /// Create a fresh engine with an empty command log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().expect("engine state lock poisoned")
    }

    /// Ensure the session is reachable, then record `command`.
    fn dispatch(&self, command: Command) -> ManejarResult<MutexGuard<'_, EngineState>> {
        let mut state = self.state();
        if state.session_dead {
            return Err(ManejarError::driver_unavailable(
                "browser session is not established",
            ));
        }
        state.commands.push(command);
        Ok(state)
    }

    // --- scripting -----------------------------------------------------

    /// Script the absolute URL reported by location queries
    pub fn set_location(&self, location: impl Into<String>) {
        self.state().location = location.into();
    }

    /// Script a run of text as present on the current page
    pub fn add_page_text(&self, text: impl Into<String>) {
        self.state().page_texts.push(text.into());
    }

    /// Script an element as present at the given canonical locator
    pub fn add_element(&self, locator: impl Into<String>) {
        self.state().present.insert(locator.into());
    }

    /// Script the element at the given canonical locator as visible
    pub fn mark_visible(&self, locator: impl Into<String>) {
        self.state().visible.insert(locator.into());
    }

    /// Script clicks at the given canonical locator to fail as not
    /// interactable
    pub fn mark_not_interactable(&self, locator: impl Into<String>) {
        self.state().not_interactable.insert(locator.into());
    }

    /// Script every page-load wait to time out after `ms` milliseconds
    pub fn time_out_page_loads(&self, ms: u64) {
        self.state().page_load_timeout = Some(ms);
    }

    /// Script the session as dead: all further calls fail with
    /// `DriverUnavailable` and record nothing
    pub fn kill_session(&self) {
        self.state().session_dead = true;
    }

    // --- assertions ----------------------------------------------------

    /// All commands recorded so far, in dispatch order
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        self.state().commands.clone()
    }

    /// Number of commands recorded so far
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.state().commands.len()
    }

    /// Locator strings of all recorded click commands, in dispatch order
    #[must_use]
    pub fn clicked_locators(&self) -> Vec<String> {
        self.state()
            .commands
            .iter()
            .filter_map(|command| match command {
                Command::Click { locator } => Some(locator.clone()),
                _ => None,
            })
            .collect()
    }

    /// Clear the command log, keeping the scripted responses
    pub fn reset_commands(&self) {
        self.state().commands.clear();
    }
}

impl Engine for RecordingEngine {
    fn open(&self, url: &str) -> ManejarResult<()> {
        let _state = self.dispatch(Command::Open {
            url: url.to_string(),
        })?;
        Ok(())
    }

    fn click(&self, locator: &str) -> ManejarResult<()> {
        let state = self.dispatch(Command::Click {
            locator: locator.to_string(),
        })?;
        if state.not_interactable.contains(locator) {
            return Err(ManejarError::not_interactable(
                locator,
                "engine reports element cannot be clicked",
            ));
        }
        Ok(())
    }

    fn set_value(&self, locator: &str, text: &str) -> ManejarResult<()> {
        let _state = self.dispatch(Command::SetValue {
            locator: locator.to_string(),
            text: text.to_string(),
        })?;
        Ok(())
    }

    fn wait_for_page_to_load(&self, timeout_ms: &str) -> ManejarResult<()> {
        let state = self.dispatch(Command::WaitForPageToLoad {
            timeout_ms: timeout_ms.to_string(),
        })?;
        if let Some(ms) = state.page_load_timeout {
            return Err(ManejarError::Timeout { ms });
        }
        Ok(())
    }

    fn location(&self) -> ManejarResult<String> {
        let state = self.dispatch(Command::Location)?;
        Ok(state.location.clone())
    }

    fn is_text_present(&self, text: &str) -> ManejarResult<bool> {
        let state = self.dispatch(Command::IsTextPresent {
            text: text.to_string(),
        })?;
        Ok(state.page_texts.iter().any(|run| run.contains(text)))
    }

    fn is_element_present(&self, locator: &str) -> ManejarResult<bool> {
        let state = self.dispatch(Command::IsElementPresent {
            locator: locator.to_string(),
        })?;
        Ok(state.present.contains(locator))
    }

    fn is_visible(&self, locator: &str) -> ManejarResult<bool> {
        let state = self.dispatch(Command::IsVisible {
            locator: locator.to_string(),
        })?;
        Ok(state.visible.contains(locator))
    }
}
