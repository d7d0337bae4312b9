//! Control factories: strategy-selecting builders for typed controls.
//!
//! A [`ControlFactory`] is what [`Driver::create_button`] and friends hand
//! back: a builder bound to one driver, with one constructor per locator
//! strategy. Any control type can participate by implementing
//! [`FromLocator`], which keeps the creation contract open to user-defined
//! controls.
//!
//! [`Driver::create_button`]: crate::driver::Driver::create_button

use std::fmt;
use std::marker::PhantomData;

use crate::driver::Driver;
use crate::locator::Locator;
use crate::result::ManejarResult;

/// Binding constructor for control types.
///
/// Implementors receive the driver handle and an already-validated locator;
/// construction itself cannot fail.
pub trait FromLocator {
    /// Bind a control to a driver at the given locator
    fn from_locator(driver: Driver, locator: Locator) -> Self;
}

/// Builder producing a control from a chosen locator strategy.
///
/// Each `from_*` method validates its argument and returns a fully
/// constructed, ready-to-use control. Validation failures surface as
/// [`InvalidArgument`] before any engine interaction.
///
/// [`InvalidArgument`]: crate::result::ManejarError::InvalidArgument
pub struct ControlFactory<T> {
    driver: Driver,
    _control: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for ControlFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlFactory")
            .field("control", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: FromLocator> ControlFactory<T> {
    pub(crate) fn new(driver: Driver) -> Self {
        Self {
            driver,
            _control: PhantomData,
        }
    }

    /// Create a control for the element with the given `id` attribute
    pub fn from_id(&self, id: &str) -> ManejarResult<T> {
        Ok(T::from_locator(self.driver.clone(), Locator::id(id)?))
    }

    /// Create a control for the element with the given `name` attribute
    pub fn from_name(&self, name: &str) -> ManejarResult<T> {
        Ok(T::from_locator(self.driver.clone(), Locator::name(name)?))
    }

    /// Create a control for the element matched by the given XPath
    pub fn from_xpath(&self, xpath: &str) -> ManejarResult<T> {
        Ok(T::from_locator(self.driver.clone(), Locator::xpath(xpath)?))
    }
}
