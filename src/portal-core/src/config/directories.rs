use crate::error::config::ConfigError;
use crate::error::config::ConfigError::DetermineConfigDirectoryFailed;
use crate::error::foundation::FoundationError;
use crate::error::foundation::FoundationError::NoHomeInEnvironment;

use directories_next::ProjectDirs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "portal.json";

pub fn project_dirs() -> Result<&'static ProjectDirs, FoundationError> {
    lazy_static::lazy_static! {
        static ref DIRS: Option<ProjectDirs> = ProjectDirs::from("com", "casino", "portal");
    }
    DIRS.as_ref().ok_or(NoHomeInEnvironment())
}

pub fn get_user_config_path() -> Result<PathBuf, ConfigError> {
    let project_dirs = project_dirs().map_err(DetermineConfigDirectoryFailed)?;
    Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
}
