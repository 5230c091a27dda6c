use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cannot extract archive \"{}\": {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Invalid epoch timestamp \"{0}\"")]
    InvalidEpoch(String),

    #[error("Given export path (\"{}\") doesn't exist", .0.display())]
    InvalidExportPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
