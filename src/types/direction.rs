//! Direction of the move effect.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Direction in which a move effect travels along a multizone strip.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use lifx_cloud_rs::Direction;
///
/// assert_eq!(Direction::from_str("backward").unwrap(), Direction::Backward);
/// assert_eq!(Direction::Forward.to_string(), "forward");
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}
