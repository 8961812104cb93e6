/// All error types that can occur when talking to the LIFX cloud API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client could not be built from the supplied token and transport.
    #[error("configuration error: {0}")]
    Config(String),

    /// The API rejected the request (HTTP 422).
    #[error("request rejected by the LIFX API: {0}")]
    Rejected(String),

    /// The response lacked the expected keys but carried an API error message.
    #[error("unexpected response: {message}")]
    UnexpectedResponse {
        message: String,
        #[source]
        source: MissingKey,
    },

    /// The response lacked the expected keys and carried no error message.
    #[error(transparent)]
    MissingKey(#[from] MissingKey),

    /// The transport failed to perform the exchange.
    #[error("transport {action} error: {err}")]
    Transport {
        action: String,
        err: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to serialize a request body.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize a response body.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),
}

impl Error {
    /// Create a new transport error
    pub fn transport<E>(action: &str, err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Transport {
            action: action.to_string(),
            err: err.into(),
        }
    }

    /// Create a new configuration error naming the transport type.
    pub(crate) fn config<T: ?Sized>(reason: &str) -> Self {
        Error::Config(format!(
            "{reason} (transport: {})",
            std::any::type_name::<T>()
        ))
    }
}

/// A key the response was expected to contain but did not.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("response is missing key `{key}`")]
pub struct MissingKey {
    pub key: String,
}

impl MissingKey {
    pub(crate) fn new(key: &str) -> Self {
        MissingKey {
            key: key.to_string(),
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
