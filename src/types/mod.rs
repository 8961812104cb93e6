//! Value types for light control parameters.

mod brightness;
mod direction;
mod selector;

pub use brightness::Brightness;
pub use direction::Direction;
pub use selector::Selector;
