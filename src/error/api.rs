use thiserror::Error;

/// Errors reported by the OneBusAway REST API layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API answered with an envelope whose `code` is not 200.
    #[error("OneBusAway API returned code {code}: {text}")]
    UnexpectedCode { code: u16, text: String },
    /// The envelope reported success but carried no `data` object.
    #[error("OneBusAway API response for {0} is missing its data object")]
    MissingData(String),
    /// No API client is available, typically because no region is selected yet.
    #[error("No API Service")]
    NoApiService,
}
