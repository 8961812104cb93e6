//! Brightness control for LIFX lights.

use serde::{Deserialize, Serialize};

/// Brightness level from 0.0 to 1.0.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(transparent)]
pub struct Brightness {
    pub(crate) value: f64,
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}

impl Brightness {
    const MIN: f64 = 0.0;
    const MAX: f64 = 1.0;

    /// Create a new Brightness at full level.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_cloud_rs::Brightness;
    ///
    /// assert_eq!(Brightness::new().value(), 1.0);
    /// ```
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns None if value is outside valid range (0.0-1.0) or not a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_cloud_rs::Brightness;
    ///
    /// assert!(Brightness::create(-0.1).is_none());
    /// assert!(Brightness::create(0.0).is_some());
    /// assert!(Brightness::create(0.5).is_some());
    /// assert!(Brightness::create(1.0).is_some());
    /// assert!(Brightness::create(1.01).is_none());
    /// assert!(Brightness::create(f64::NAN).is_none());
    /// ```
    pub fn create(value: f64) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Clamps the value into range; NaN becomes full brightness.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_cloud_rs::Brightness;
    ///
    /// assert_eq!(Brightness::clamped(1.7).value(), 1.0);
    /// assert_eq!(Brightness::clamped(-3.0).value(), 0.0);
    /// assert_eq!(Brightness::clamped(0.25).value(), 0.25);
    /// ```
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::new();
        }
        Brightness {
            value: value.clamp(Self::MIN, Self::MAX),
        }
    }

    fn is_valid(value: f64) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}
