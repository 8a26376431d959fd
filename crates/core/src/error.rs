use thiserror::Error;

pub type DispatchResult<T> = Result<T, DispatchError>;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Malformed deeplink '{deeplink}': {source}")]
    MalformedDeeplink {
        deeplink: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
