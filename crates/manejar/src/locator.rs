//! Locator abstraction for element identification.
//!
//! A [`Locator`] is a normalized (strategy, value) pair with one canonical
//! string encoding consumed by the engine. Two locators built from the same
//! strategy and value always encode to byte-identical strings, which is what
//! makes command dispatch deterministic enough for test assertions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::result::{ManejarError, ManejarResult};

/// Strategy used to identify an element on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Match by the element's `id` attribute
    Id,
    /// Match by the element's `name` attribute
    Name,
    /// Match by an XPath expression
    XPath,
}

impl Strategy {
    /// Engine-side prefix for this strategy
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::XPath => "xpath",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A strategy + value pair identifying one page element.
///
/// Immutable once constructed; the constructors validate the value and fail
/// with [`ManejarError::InvalidArgument`] before any engine call can happen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    strategy: Strategy,
    value: String,
}

impl Locator {
    /// Create a locator matching an element by ID
    pub fn id(value: impl Into<String>) -> ManejarResult<Self> {
        Self::new(Strategy::Id, value)
    }

    /// Create a locator matching an element by name attribute
    pub fn name(value: impl Into<String>) -> ManejarResult<Self> {
        Self::new(Strategy::Name, value)
    }

    /// Create a locator matching an element by XPath expression
    pub fn xpath(value: impl Into<String>) -> ManejarResult<Self> {
        Self::new(Strategy::XPath, value)
    }

    /// Create a locator from an explicit strategy and value
    pub fn new(strategy: Strategy, value: impl Into<String>) -> ManejarResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ManejarError::invalid_argument(format!(
                "{strategy} locator value must not be empty"
            )));
        }
        Ok(Self { strategy, value })
    }

    /// Get the strategy
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Get the raw value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Canonical engine encoding: `id=foo`, `name=foo`, `xpath=foo`.
    ///
    /// XPath values that already begin with `//` or `/` are passed through
    /// raw per engine convention.
    #[must_use]
    pub fn encode(&self) -> String {
        match self.strategy {
            Strategy::XPath if self.value.starts_with('/') => self.value.clone(),
            strategy => format!("{}={}", strategy.prefix(), self.value),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod encoding_tests {
        use super::*;

        #[test]
        fn test_id_encoding() {
            let locator = Locator::id("submit").unwrap();
            assert_eq!(locator.encode(), "id=submit");
        }

        #[test]
        fn test_name_encoding() {
            let locator = Locator::name("q").unwrap();
            assert_eq!(locator.encode(), "name=q");
        }

        #[test]
        fn test_xpath_encoding_gets_prefix() {
            let locator = Locator::xpath("descendant::a[1]").unwrap();
            assert_eq!(locator.encode(), "xpath=descendant::a[1]");
        }

        #[test]
        fn test_absolute_xpath_bypasses_prefix() {
            let locator = Locator::xpath("/html/body/div").unwrap();
            assert_eq!(locator.encode(), "/html/body/div");
        }

        #[test]
        fn test_anywhere_xpath_bypasses_prefix() {
            let locator = Locator::xpath("//button[@id='go']").unwrap();
            assert_eq!(locator.encode(), "//button[@id='go']");
        }

        #[test]
        fn test_display_matches_encode() {
            let locator = Locator::id("submit").unwrap();
            assert_eq!(locator.to_string(), locator.encode());
        }
    }

    mod validation_tests {
        use super::*;

        #[test]
        fn test_empty_id_rejected() {
            let err = Locator::id("").unwrap_err();
            assert!(matches!(err, ManejarError::InvalidArgument { .. }));
        }

        #[test]
        fn test_whitespace_name_rejected() {
            let err = Locator::name("   ").unwrap_err();
            assert!(matches!(err, ManejarError::InvalidArgument { .. }));
        }

        #[test]
        fn test_empty_xpath_rejected() {
            assert!(Locator::xpath("").is_err());
        }

        #[test]
        fn test_error_names_the_strategy() {
            let err = Locator::name("").unwrap_err();
            assert!(err.to_string().contains("name"));
        }
    }

    mod determinism_tests {
        use super::*;

        #[test]
        fn test_same_inputs_encode_identically() {
            let a = Locator::id("checkout").unwrap();
            let b = Locator::id("checkout").unwrap();
            assert_eq!(a, b);
            assert_eq!(a.encode(), b.encode());
        }

        #[test]
        fn test_strategies_are_distinguished() {
            let by_id = Locator::id("x").unwrap();
            let by_name = Locator::name("x").unwrap();
            assert_ne!(by_id, by_name);
            assert_ne!(by_id.encode(), by_name.encode());
        }
    }

    mod encoding_property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_id_encoding_is_prefix_plus_value(value in "[a-zA-Z][a-zA-Z0-9_-]{0,31}") {
                let locator = Locator::id(value.clone()).unwrap();
                prop_assert_eq!(locator.encode(), format!("id={value}"));
            }

            #[test]
            fn prop_name_encoding_is_prefix_plus_value(value in "[a-zA-Z][a-zA-Z0-9_-]{0,31}") {
                let locator = Locator::name(value.clone()).unwrap();
                prop_assert_eq!(locator.encode(), format!("name={value}"));
            }

            #[test]
            fn prop_encoding_is_deterministic(value in "[a-zA-Z][a-zA-Z0-9_-]{0,31}") {
                let a = Locator::name(value.clone()).unwrap();
                let b = Locator::name(value).unwrap();
                prop_assert_eq!(a.encode(), b.encode());
            }

            #[test]
            fn prop_relative_xpath_gets_prefix(value in "[a-z]{1,8}(\\[[0-9]\\])?") {
                let locator = Locator::xpath(value.clone()).unwrap();
                prop_assert_eq!(locator.encode(), format!("xpath={value}"));
            }
        }
    }
}
