//! Reading and writing the portal's JSON files.
use crate::error::fs::WriteFileError;
use crate::error::json_file::JsonFileError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, JsonFileError> {
    let content = crate::fs::read(path)?;
    serde_json::from_slice(&content).map_err(|source| JsonFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `value` pretty-printed, creating missing parent directories.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), JsonFileError> {
    crate::fs::ensure_parent_dir_exists(path)?;
    let mut writer = BufWriter::new(crate::fs::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(std::io::Error::from)
        .and_then(|()| writer.write_all(b"\n"))
        .and_then(|()| writer.flush())
        .map_err(|source| WriteFileError {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}
