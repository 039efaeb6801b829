use thiserror::Error;

use ghcal_ingest::IngestError;
use ghcal_map::MappingError;
use ghcal_output::OutputError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Output(#[from] OutputError),

    /// A mapping was confirmed before any CSV was parsed.
    #[error("Parse CSV first")]
    NotParsed,

    #[error("unknown month '{month}'")]
    UnknownMonth { month: String },

    #[error("unknown day '{day}' in {month}")]
    UnknownDay { month: String, day: String },
}

pub type Result<T> = std::result::Result<T, SessionError>;
