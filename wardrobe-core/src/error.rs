use thiserror::Error;

/// Classified failure of a single weather fetch.
///
/// Every variant is terminal for the attempt that produced it; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The location could not be encoded into a request URL. No request was sent.
    #[error("invalid location query")]
    InvalidQuery,

    /// DNS, connect, timeout or body read failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success status without a recognizable provider error body.
    #[error("no weather data returned")]
    NoData,

    /// Non-success status carrying the provider's own explanation.
    #[error("provider error: {0}")]
    ProviderMessage(String),

    /// Success status, but the body did not match the weather schema.
    #[error("failed to decode weather payload")]
    DecodingError,

    #[error("{0}")]
    Unknown(String),
}

impl FetchError {
    /// User-facing text for this error. See [`describe`].
    pub fn describe(&self) -> String {
        describe(self)
    }
}

/// Map a fetch failure to the message shown to the user.
pub fn describe(error: &FetchError) -> String {
    match error {
        FetchError::InvalidQuery => "Invalid location format".to_string(),
        FetchError::NoData => "No weather data found".to_string(),
        FetchError::DecodingError => "Failed to parse weather data".to_string(),
        FetchError::ProviderMessage(info) => info.clone(),
        FetchError::Transport(msg) | FetchError::Unknown(msg) => {
            format!("Unknown error occurred: {msg}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_messages() {
        assert_eq!(describe(&FetchError::InvalidQuery), "Invalid location format");
        assert_eq!(describe(&FetchError::NoData), "No weather data found");
        assert_eq!(describe(&FetchError::DecodingError), "Failed to parse weather data");
    }

    #[test]
    fn provider_message_is_passed_through() {
        let err = FetchError::ProviderMessage("location not found".into());
        assert_eq!(describe(&err), "location not found");
    }

    #[test]
    fn provider_message_is_not_trimmed_or_altered() {
        let err = FetchError::ProviderMessage("  You have exceeded your quota. ".into());
        assert_eq!(err.describe(), "  You have exceeded your quota. ");
    }

    #[test]
    fn unclassified_errors_carry_underlying_message() {
        let transport = FetchError::Transport("connection reset".into());
        assert_eq!(describe(&transport), "Unknown error occurred: connection reset");

        let unknown = FetchError::Unknown("client init failed".into());
        assert_eq!(describe(&unknown), "Unknown error occurred: client init failed");
    }
}
