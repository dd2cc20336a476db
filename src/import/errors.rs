use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Error opening CSV at path: {path} | {source}")]
    Open {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Invalid balance [{value}] for holder [{holder_name}]")]
    InvalidBalance {
        holder_name: String,
        value: String
    }
}
