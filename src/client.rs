//! LIFX cloud API client.

use std::time::Duration;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::errors::Error;
use crate::light::Light;
use crate::payload::{EffectsOff, MoveEffect, SetBrightness, State, Toggle};
use crate::response::{StatusResponse, parse_resp};
use crate::transport::{HttpResponse, Scoped, Transport};
use crate::types::{Brightness, Direction, Selector};

type Result<T> = std::result::Result<T, Error>;

/// Base URL of the LIFX lights API.
pub const LIFX_URL: &str = "https://api.lifx.com/v1/lights/";

/// Client for the LIFX cloud HTTP API.
///
/// Every operation performs exactly one round trip through the injected
/// [`Transport`]. The client keeps no state besides the transport, the
/// authorization header and the base URL.
///
/// # Example
///
/// ```no_run
/// use lifx_cloud_rs::{Brightness, Client, ReqwestTransport, State};
///
/// # fn main() -> Result<(), lifx_cloud_rs::Error> {
/// let lifx = Client::new(ReqwestTransport::new(), "c87c73a896b554367fac61f71dd3656af8d93a525a4e87df5952c6078a89d192")?;
///
/// lifx.toggle_light("label:Lamp", false, None)?;
/// lifx.set_brightness("label:Lamp", &Brightness::create(0.5).unwrap())?;
///
/// let mut state = State::new();
/// state.power(true).color("blue");
/// lifx.set_color("label:Lamp", &state)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T: Transport> {
    transport: T,
    headers: Vec<(String, String)>,
    base_url: String,
}

impl<T: Transport> Client<T> {
    /// Create a client from a transport and a LIFX personal access token.
    ///
    /// Fails with [`Error::Config`] when the token cannot be sent as an
    /// HTTP header value.
    pub fn new(transport: T, token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::config::<T>("LIFX token is empty"));
        }
        if token.chars().any(|c| c.is_control() || !c.is_ascii()) {
            return Err(Error::config::<T>(
                "LIFX token contains characters not allowed in a header",
            ));
        }
        Ok(Client {
            transport,
            headers: vec![("Authorization".to_string(), format!("Bearer {token}"))],
            base_url: LIFX_URL.to_string(),
        })
    }

    /// Point the client at another API root.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        if !self.base_url.ends_with('/') {
            self.base_url.push('/');
        }
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Toggles the current power state of the selected light(s).
    ///
    /// With `all_lights` set the selector is ignored and every light on the
    /// account is toggled. `duration` defaults to zero.
    pub fn toggle_light(
        &self,
        selector: impl Into<Selector>,
        all_lights: bool,
        duration: Option<Duration>,
    ) -> Result<String> {
        let selector = if all_lights {
            Selector::all()
        } else {
            selector.into()
        };
        let body = Toggle {
            duration: duration.unwrap_or_default(),
        };
        self.post(&format!("{selector}/toggle"), &body)?
            .into_first_status()
    }

    /// Performs a linear move effect on the selected light(s).
    ///
    /// `period` is the time per effect cycle; `power_on` turns the light on
    /// before the effect starts.
    pub fn move_effect(
        &self,
        selector: impl Into<Selector>,
        direction: Direction,
        period: Duration,
        power_on: bool,
    ) -> Result<String> {
        let body = MoveEffect {
            direction,
            period,
            power_on,
        };
        self.post(&format!("{}/effects/move", selector.into()), &body)?
            .into_first_status()
    }

    /// Stops any running effect. With `power_off` the lights are turned off too.
    pub fn effects_off(
        &self,
        selector: impl Into<Selector>,
        power_off: Option<bool>,
    ) -> Result<String> {
        let body = EffectsOff {
            power_off: power_off.unwrap_or(false),
        };
        self.post(&format!("{}/effects/off", selector.into()), &body)?
            .into_first_status()
    }

    pub fn set_brightness(
        &self,
        selector: impl Into<Selector>,
        brightness: &Brightness,
    ) -> Result<String> {
        let body = SetBrightness {
            brightness: *brightness,
        };
        self.put(&format!("{}/state", selector.into()), &body)?
            .into_first_status()
    }

    /// Sets any state keys (color, power, brightness, duration, ...).
    ///
    /// The state is sent unmodified.
    /// See <https://api.developer.lifx.com/docs/set-state> for valid keys.
    pub fn set_color(&self, selector: impl Into<Selector>, state: &State) -> Result<String> {
        self.put(&format!("{}/state", selector.into()), state)?
            .into_first_status()
    }

    /// Enumerates all the lights associated with the account.
    ///
    /// Returns the decoded body unchanged.
    pub fn list_lights(&self) -> Result<Value> {
        self.get(Selector::all().as_str(), None)
    }

    /// Like [`Client::list_lights`], decoded into [`Light`]s.
    pub fn lights(&self) -> Result<Vec<Light>> {
        Light::from_list(self.list_lights()?)
    }

    /// POST `body` to `{base}{path}` and return every per-light result.
    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<StatusResponse> {
        let url = self.url(path);
        let body = serde_json::to_value(body).map_err(Error::JsonDump)?;
        debug!("POST {} {}", url, body);
        let mut response = Scoped::new(self.transport.post(&url, &body, &self.headers)?);
        parse_resp(&mut *response)
    }

    /// PUT `body` to `{base}{path}` and return every per-light result.
    pub fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<StatusResponse> {
        let url = self.url(path);
        let body = serde_json::to_value(body).map_err(Error::JsonDump)?;
        debug!("PUT {} {}", url, body);
        let mut response = Scoped::new(self.transport.put(&url, &body, &self.headers)?);
        parse_resp(&mut *response)
    }

    fn get(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = self.url(path);
        debug!("GET {}", url);
        let mut response = Scoped::new(self.transport.get(&url, body, &self.headers)?);
        response.json()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
