use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// An element the page layout is expected to carry was not found.
    /// A structural change upstream is unrecoverable for every downstream
    /// stage, so this is fatal rather than retried.
    #[error("expected markup element missing ({what}) on {url}")]
    MissingElement { what: &'static str, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid places endpoint \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
