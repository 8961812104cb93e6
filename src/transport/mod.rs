//! Transport abstractions.
//!
//! The [`Client`](crate::Client) never performs HTTP itself. It delegates every
//! exchange to a [`Transport`], which lets the library run on top of any HTTP
//! stack (a desktop TLS client, an embedded Wi-Fi co-processor, a test stub).
//!
//! # Feature Flags
//!
//! - `transport-reqwest` (default) - Ship [`ReqwestTransport`], backed by
//!   `reqwest`'s blocking client
//!
//! # Example
//!
//! ```toml
//! [dependencies]
//! # Bring your own transport
//! lifx-cloud-rs = { version = "0.1", default-features = false }
//! ```

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::errors::Error;

#[cfg(feature = "transport-reqwest")]
mod reqwest_impl;

#[cfg(feature = "transport-reqwest")]
pub use reqwest_impl::*;

type Result<T> = std::result::Result<T, Error>;

/// Request headers as ordered `(name, value)` pairs.
pub type Headers = [(String, String)];

/// A response handed back by a [`Transport`].
pub trait HttpResponse {
    /// The HTTP status code.
    fn status_code(&self) -> u16;

    /// Read and decode the body as JSON.
    fn json(&mut self) -> Result<Value>;

    /// Release the resources held by the response.
    fn close(&mut self);
}

/// Trait for blocking HTTP operations.
///
/// Implementors perform exactly one exchange per call and report failures as
/// [`Error::Transport`]. Timeouts, TLS and connection reuse are entirely the
/// implementor's concern.
///
/// All three verbs are required; a type that cannot `put` is not a transport:
///
/// ```compile_fail
/// use serde_json::Value;
/// use lifx_cloud_rs::{Client, Error, Headers, HttpResponse, Transport};
///
/// struct Resp;
/// impl HttpResponse for Resp {
///     fn status_code(&self) -> u16 { 200 }
///     fn json(&mut self) -> Result<Value, Error> { Ok(Value::Null) }
///     fn close(&mut self) {}
/// }
///
/// struct NoPut;
/// impl Transport for NoPut {
///     type Response = Resp;
///     fn get(&self, _: &str, _: Option<&Value>, _: &Headers) -> Result<Resp, Error> { Ok(Resp) }
///     fn post(&self, _: &str, _: &Value, _: &Headers) -> Result<Resp, Error> { Ok(Resp) }
/// }
///
/// let _ = Client::new(NoPut, "token");
/// ```
pub trait Transport {
    /// The response type produced by this transport.
    type Response: HttpResponse;

    /// Issue a GET request, optionally carrying a JSON body.
    fn get(&self, url: &str, json: Option<&Value>, headers: &Headers)
    -> Result<Self::Response>;

    /// Issue a POST request with a JSON body.
    fn post(&self, url: &str, json: &Value, headers: &Headers) -> Result<Self::Response>;

    /// Issue a PUT request with a JSON body.
    fn put(&self, url: &str, json: &Value, headers: &Headers) -> Result<Self::Response>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Response = T::Response;

    fn get(
        &self,
        url: &str,
        json: Option<&Value>,
        headers: &Headers,
    ) -> Result<Self::Response> {
        (**self).get(url, json, headers)
    }

    fn post(&self, url: &str, json: &Value, headers: &Headers) -> Result<Self::Response> {
        (**self).post(url, json, headers)
    }

    fn put(&self, url: &str, json: &Value, headers: &Headers) -> Result<Self::Response> {
        (**self).put(url, json, headers)
    }
}

/// Owns a response and closes it exactly once when dropped.
pub(crate) struct Scoped<R: HttpResponse>(R);

impl<R: HttpResponse> Scoped<R> {
    pub(crate) fn new(response: R) -> Self {
        Scoped(response)
    }
}

impl<R: HttpResponse> Deref for Scoped<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.0
    }
}

impl<R: HttpResponse> DerefMut for Scoped<R> {
    fn deref_mut(&mut self) -> &mut R {
        &mut self.0
    }
}

impl<R: HttpResponse> Drop for Scoped<R> {
    fn drop(&mut self) {
        self.0.close();
    }
}

#[cfg(test)]
pub(crate) mod stub {
    //! Recording transport used by the unit tests.

    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    use serde_json::Value;

    use super::{Headers, HttpResponse, Transport};
    use crate::errors::Error;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Call {
        pub method: &'static str,
        pub url: String,
        pub json: Option<Value>,
        pub headers: Vec<(String, String)>,
    }

    pub struct StubResponse {
        status: u16,
        body: Option<Value>,
        closed: Rc<Cell<usize>>,
        decoded: Rc<Cell<usize>>,
    }

    impl HttpResponse for StubResponse {
        fn status_code(&self) -> u16 {
            self.status
        }

        fn json(&mut self) -> Result<Value, Error> {
            self.decoded.set(self.decoded.get() + 1);
            match &self.body {
                Some(body) => Ok(body.clone()),
                None => serde_json::from_str::<Value>("not json").map_err(Error::JsonLoad),
            }
        }

        fn close(&mut self) {
            self.closed.set(self.closed.get() + 1);
        }
    }

    /// Replies with queued canned responses and records every call.
    #[derive(Debug, Default)]
    pub struct StubTransport {
        replies: RefCell<VecDeque<(u16, Option<Value>)>>,
        pub calls: RefCell<Vec<Call>>,
        pub closed: Rc<Cell<usize>>,
        pub decoded: Rc<Cell<usize>>,
        pub fail_with: RefCell<Option<String>>,
    }

    impl StubTransport {
        pub fn replying(status: u16, body: Value) -> Self {
            let stub = StubTransport::default();
            stub.push(status, Some(body));
            stub
        }

        /// Queue a reply whose body is not valid JSON.
        pub fn replying_garbage(status: u16) -> Self {
            let stub = StubTransport::default();
            stub.push(status, None);
            stub
        }

        pub fn failing(message: &str) -> Self {
            let stub = StubTransport::default();
            *stub.fail_with.borrow_mut() = Some(message.to_string());
            stub
        }

        pub fn push(&self, status: u16, body: Option<Value>) {
            self.replies.borrow_mut().push_back((status, body));
        }

        pub fn last_call(&self) -> Call {
            self.calls.borrow().last().cloned().expect("no calls recorded")
        }

        fn respond(
            &self,
            method: &'static str,
            url: &str,
            json: Option<&Value>,
            headers: &Headers,
        ) -> Result<StubResponse, Error> {
            self.calls.borrow_mut().push(Call {
                method,
                url: url.to_string(),
                json: json.cloned(),
                headers: headers.to_vec(),
            });
            if let Some(message) = self.fail_with.borrow().as_deref() {
                return Err(Error::transport(
                    "connect",
                    std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message),
                ));
            }
            let (status, body) = self
                .replies
                .borrow_mut()
                .pop_front()
                .expect("no canned reply queued");
            Ok(StubResponse {
                status,
                body,
                closed: Rc::clone(&self.closed),
                decoded: Rc::clone(&self.decoded),
            })
        }
    }

    impl Transport for StubTransport {
        type Response = StubResponse;

        fn get(
            &self,
            url: &str,
            json: Option<&Value>,
            headers: &Headers,
        ) -> Result<StubResponse, Error> {
            self.respond("GET", url, json, headers)
        }

        fn post(&self, url: &str, json: &Value, headers: &Headers) -> Result<StubResponse, Error> {
            self.respond("POST", url, Some(json), headers)
        }

        fn put(&self, url: &str, json: &Value, headers: &Headers) -> Result<StubResponse, Error> {
            self.respond("PUT", url, Some(json), headers)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stub::StubTransport;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scoped_closes_once_on_drop() {
        let stub = StubTransport::replying(200, json!({}));
        {
            let response = stub.post("u", &json!({}), &[]).unwrap();
            let mut scoped = Scoped::new(response);
            assert_eq!(scoped.status_code(), 200);
            scoped.json().unwrap();
        }
        assert_eq!(stub.closed.get(), 1);
    }

    #[test]
    fn test_reference_is_a_transport() {
        let stub = StubTransport::replying(200, json!({"a": 1}));
        let by_ref = &stub;
        let mut response = by_ref.get("u", None, &[]).unwrap();
        assert_eq!(response.json().unwrap(), json!({"a": 1}));
        assert_eq!(stub.calls.borrow().len(), 1);
    }
}
