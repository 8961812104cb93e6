//! Request bodies sent to the LIFX API.

use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::types::{Brightness, Direction};

/// Whole seconds go on the wire as integers, anything else as a float.
pub(crate) fn seconds(duration: Duration) -> Value {
    if duration.subsec_nanos() == 0 {
        Value::from(duration.as_secs())
    } else {
        Value::from(duration.as_secs_f64())
    }
}

fn as_seconds<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    seconds(*duration).serialize(serializer)
}

/// Body of `POST {selector}/toggle`.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Toggle {
    #[serde(serialize_with = "as_seconds")]
    pub duration: Duration,
}

/// Body of `POST {selector}/effects/move`.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct MoveEffect {
    pub direction: Direction,
    #[serde(serialize_with = "as_seconds")]
    pub period: Duration,
    pub power_on: bool,
}

/// Body of `POST {selector}/effects/off`.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct EffectsOff {
    pub power_off: bool,
}

/// Body of `PUT {selector}/state` when only the brightness changes.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct SetBrightness {
    pub brightness: Brightness,
}

/// An open set of LIFX state keys for `PUT {selector}/state`.
///
/// Every key set here is sent exactly as given: the client never adds,
/// renames or drops keys. The typed setters are shorthands for the keys the
/// API documents; [`State::insert`] covers anything else.
///
/// # Creating States
///
/// 1. **From an existing map** using the [`From`] trait:
///    ```
///    use serde_json::{Map, json};
///    use lifx_cloud_rs::State;
///
///    let mut map = Map::new();
///    map.insert("color".into(), json!("blue"));
///    let state = State::from(map);
///    assert_eq!(state.get("color"), Some(&json!("blue")));
///    ```
///
/// 2. **Builder pattern** for combining multiple keys:
///    ```
///    use lifx_cloud_rs::{Brightness, State};
///
///    let mut state = State::new();
///    state
///        .power(true)
///        .color("yellow")
///        .brightness(&Brightness::create(0.5).unwrap());
///    assert_eq!(state.len(), 3);
///    ```
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct State(Map<String, Value>);

impl State {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `power` to `"on"` or `"off"`.
    pub fn power(&mut self, on: bool) -> &mut Self {
        self.insert("power", if on { "on" } else { "off" })
    }

    /// Set `color` to any LIFX color string (`"blue"`, `"#ff0000"`,
    /// `"hue:120 saturation:1.0"`, `"kelvin:3500"`, ...).
    pub fn color(&mut self, color: &str) -> &mut Self {
        self.insert("color", color)
    }

    pub fn brightness(&mut self, brightness: &Brightness) -> &mut Self {
        self.insert("brightness", brightness.value())
    }

    /// Transition time, in seconds.
    pub fn duration(&mut self, duration: Duration) -> &mut Self {
        self.insert("duration", seconds(duration))
    }

    /// Infrared channel level (0.0-1.0) on lights that support it.
    pub fn infrared(&mut self, level: f64) -> &mut Self {
        self.insert("infrared", level)
    }

    /// Skip the state check and return immediately.
    pub fn fast(&mut self, fast: bool) -> &mut Self {
        self.insert("fast", fast)
    }

    /// Set an arbitrary key.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for State {
    fn from(map: Map<String, Value>) -> Self {
        State(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for State {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        State(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<&Brightness> for State {
    fn from(brightness: &Brightness) -> Self {
        let mut s = State::new();
        s.brightness(brightness);
        s
    }
}
