//! Typed view of the lights owned by an account.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Error, MissingKey};
use crate::types::{Brightness, Selector};

/// A light as reported by `GET all`.
///
/// Unknown fields are ignored so that additions to the API do not break
/// decoding.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Light {
    pub id: String,
    #[serde(default)]
    pub uuid: Option<String>,
    pub label: String,
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub color: Option<LightColor>,
    #[serde(default)]
    pub brightness: Option<Brightness>,
    #[serde(default)]
    pub group: Option<Group>,
    #[serde(default)]
    pub location: Option<Group>,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub last_seen: Option<String>,
    #[serde(default)]
    pub seconds_since_seen: Option<f64>,
}

impl Light {
    /// Check if the light reports its power as on.
    pub fn is_on(&self) -> bool {
        self.power.as_deref() == Some("on")
    }

    /// A selector targeting exactly this light.
    pub fn selector(&self) -> Selector {
        Selector::id(&self.id)
    }

    /// Decode the body returned by [`Client::list_lights`](crate::Client::list_lights).
    ///
    /// An error object in place of the list is reported with its message.
    pub(crate) fn from_list(body: Value) -> Result<Vec<Light>, Error> {
        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(Error::UnexpectedResponse {
                message: message.to_string(),
                source: MissingKey::new("lights"),
            });
        }
        serde_json::from_value(body).map_err(Error::JsonLoad)
    }
}

/// HSBK color of a light, minus the brightness.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LightColor {
    pub hue: f64,
    pub saturation: f64,
    pub kelvin: u16,
}

/// A group or location a light belongs to.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Group {
    pub id: String,
    pub name: String,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub capabilities: Option<Value>,
}
