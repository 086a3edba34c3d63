use crate::error::fs::{EnsureParentDirExistsError, ReadFileError, WriteFileError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonFileError {
    #[error(transparent)]
    Read(#[from] ReadFileError),

    #[error("{path} does not contain valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    CreateParentDir(#[from] EnsureParentDirExistsError),

    #[error(transparent)]
    Write(#[from] WriteFileError),
}
