use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("server returned status {0}")]
    Status(u16),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("no recognized fields in document")]
    NothingRecognized,
}
