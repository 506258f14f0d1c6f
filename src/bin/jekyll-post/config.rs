use std::env;
use std::path::{Path, PathBuf};

use jekyll_post::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn find_config_path(cur_dir: &Path) -> Option<PathBuf> {
    if cur_dir.join(CFG_FILE_NAME).exists() {
        return Some(cur_dir.join(CFG_FILE_NAME));
    }

    if let Some(cfg_dir) = dirs::config_dir() {
        if cfg_dir.join(CFG_FILE_NAME).exists() {
            return Some(cfg_dir.join(CFG_FILE_NAME));
        }
    }

    None
}

/// An explicit path must be readable. Without one, the current dir and the
/// user config dir are searched and defaults apply when nothing is found.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<(Config, Option<PathBuf>), String> {
    let config_path = match cfg_path {
        Some(path) => Some(path),
        None => {
            let cur_dir = env::current_dir().map_err(|e| format!("Could not read current directory: {}", e))?;
            find_config_path(&cur_dir)
        }
    };

    let Some(config_path) = config_path else {
        return Ok((Config::default(), None));
    };

    match read_config(&config_path) {
        Ok(config) => Ok((config, Some(config_path))),
        Err(e) => Err(e.to_string()),
    }
}
