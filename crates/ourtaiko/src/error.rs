use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid chart key: {0}")]
    InvalidChartKey(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("Request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else if e.is_decode() {
            format!("Malformed response body: {}", e)
        } else if let Some(status) = e.status() {
            format!("HTTP {} error: {}", status.as_u16(), e)
        } else {
            format!("HTTP error: {}", e)
        };
        Error::Http(message)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_error_maps_to_config_parse_error() {
        let err = toml::from_str::<toml::Value>("songs_url = ").unwrap_err();
        assert!(matches!(Error::from(err), Error::ConfigParseError(_)));
    }
}
