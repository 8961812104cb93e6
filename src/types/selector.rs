//! Light selectors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A LIFX selector identifying which light(s) an operation targets.
///
/// The value is opaque to the client and is written into the request path
/// exactly as given. The helper constructors only prepend the LIFX prefix.
///
/// # Examples
///
/// ```
/// use lifx_cloud_rs::Selector;
///
/// assert_eq!(Selector::all().as_str(), "all");
/// assert_eq!(Selector::label("Lamp").as_str(), "label:Lamp");
/// assert_eq!(Selector::from("group:Kitchen").as_str(), "group:Kitchen");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    pub fn new(raw: impl Into<String>) -> Self {
        Selector(raw.into())
    }

    /// Every light on the account.
    pub fn all() -> Self {
        Selector("all".into())
    }

    pub fn id(id: &str) -> Self {
        Self::prefixed("id", id)
    }

    pub fn label(label: &str) -> Self {
        Self::prefixed("label", label)
    }

    pub fn group(label: &str) -> Self {
        Self::prefixed("group", label)
    }

    pub fn group_id(id: &str) -> Self {
        Self::prefixed("group_id", id)
    }

    pub fn location(label: &str) -> Self {
        Self::prefixed("location", label)
    }

    pub fn location_id(id: &str) -> Self {
        Self::prefixed("location_id", id)
    }

    pub fn scene_id(id: &str) -> Self {
        Self::prefixed("scene_id", id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn prefixed(prefix: &str, value: &str) -> Self {
        Selector(format!("{prefix}:{value}"))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        Selector(raw.to_string())
    }
}

impl From<String> for Selector {
    fn from(raw: String) -> Self {
        Selector(raw)
    }
}

impl From<&Selector> for Selector {
    fn from(selector: &Selector) -> Self {
        selector.clone()
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
