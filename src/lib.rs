//! # lifx_cloud_rs
//!
//! A small blocking Rust client for the LIFX cloud HTTP API.
//!
//! Every [`Client`] method maps onto one LIFX REST endpoint under
//! `https://api.lifx.com/v1/lights/` and performs exactly one HTTP round trip
//! through an injected [`Transport`]. There is no retry logic, no caching and
//! no background work.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use lifx_cloud_rs::{Brightness, Client, ReqwestTransport, State};
//!
//! fn control_light(token: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let lifx = Client::new(ReqwestTransport::new(), token)?;
//!
//!     // Turn on the lamp over one second
//!     lifx.toggle_light("label:Lamp", false, Some(Duration::from_secs(1)))?;
//!
//!     // Half brightness, then blue
//!     lifx.set_brightness("label:Lamp", &Brightness::create(0.5).ok_or("bad level")?)?;
//!     let mut state = State::new();
//!     state.power(true).color("blue");
//!     lifx.set_color("label:Lamp", &state)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Power**: Toggle one, several or all lights with [`Client::toggle_light`]
//! - **State**: Set brightness or any state keys with [`Client::set_brightness`]
//!   and [`Client::set_color`]
//! - **Effects**: Start and stop the move effect with [`Client::move_effect`]
//!   and [`Client::effects_off`]
//! - **Inventory**: List lights as raw JSON or as typed [`Light`]s
//! - **Selectors**: Build LIFX selectors with [`Selector`]
//! - **Bring your own HTTP**: Implement [`Transport`] for any HTTP stack
//!
//! ## Errors
//!
//! A request the API rejects (HTTP 422) surfaces as [`Error::Rejected`] with
//! the server's message. Responses without the expected `results`/`status`
//! keys surface as [`Error::UnexpectedResponse`] or [`Error::MissingKey`].
//! Transport and JSON failures are passed through unchanged.
//!
//! ## Feature Flags
//!
//! - `transport-reqwest` (default): Ship [`ReqwestTransport`], a transport
//!   backed by `reqwest`'s blocking client

mod client;
mod errors;
mod light;
mod payload;
mod response;
pub mod transport;
mod types;

// Re-export public API
pub use client::{Client, LIFX_URL};
pub use errors::{Error, MissingKey};
pub use light::{Group, Light, LightColor, Product};
pub use payload::{EffectsOff, MoveEffect, SetBrightness, State, Toggle};
pub use response::{LightResult, StatusResponse};
#[cfg(feature = "transport-reqwest")]
pub use transport::{ReqwestResponse, ReqwestTransport};
pub use transport::{Headers, HttpResponse, Transport};
pub use types::{Brightness, Direction, Selector};

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
