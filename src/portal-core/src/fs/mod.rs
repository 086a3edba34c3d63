use crate::error::fs::{
    CreateDirAllError, EnsureParentDirExistsError, NoParentPathError, ReadFileError,
    WriteFileError,
};
use std::path::{Path, PathBuf};

pub fn create_dir_all(path: &Path) -> Result<(), CreateDirAllError> {
    std::fs::create_dir_all(path).map_err(|source| CreateDirAllError {
        path: path.to_path_buf(),
        source,
    })
}

pub fn ensure_parent_dir_exists(path: &Path) -> Result<(), EnsureParentDirExistsError> {
    let parent = parent(path)?;
    create_dir_all(&parent)?;
    Ok(())
}

pub fn parent(path: &Path) -> Result<PathBuf, NoParentPathError> {
    match path.parent() {
        None => Err(NoParentPathError(path.to_path_buf())),
        Some(parent) => Ok(parent.to_path_buf()),
    }
}

pub fn read(path: &Path) -> Result<Vec<u8>, ReadFileError> {
    std::fs::read(path).map_err(|source| ReadFileError {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates or truncates the file at `path` for writing.
pub fn create(path: &Path) -> Result<std::fs::File, WriteFileError> {
    std::fs::File::create(path).map_err(|source| WriteFileError {
        path: path.to_path_buf(),
        source,
    })
}
