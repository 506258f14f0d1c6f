use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;

use crate::post_writer::DEFAULT_POSTS_DIR;

#[derive(Deserialize, Debug)]
pub struct Paths {
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,
}

#[derive(Deserialize, Debug)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: Paths,
    pub log: Option<Log>,
}

impl Default for Paths {
    fn default() -> Self {
        Paths { posts_dir: default_posts_dir() }
    }
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: default_log_level(),
            log_to_console: true,
            location: None,
        }
    }
}

fn default_posts_dir() -> String {
    DEFAULT_POSTS_DIR.to_string()
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_true() -> bool {
    true
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => Ok(cfg),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    }
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.paths.posts_dir, "_posts");
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_full_config() {
        let toml_str = r##"
[paths]
posts_dir = "content/_posts"

[log]
level = "Debug"
log_to_console = false
location = "/tmp/jekyll-post.log"
"##;
        let cfg = parse_config(toml_str).unwrap();
        assert_eq!(cfg.paths.posts_dir, "content/_posts");
        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(!log.log_to_console);
        assert_eq!(log.location, Some(PathBuf::from("/tmp/jekyll-post.log")));
    }

    #[test]
    fn test_log_defaults() {
        let cfg = parse_config("[log]\n").unwrap();
        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Warn);
        assert!(log.log_to_console);
        assert!(log.location.is_none());
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config("[log]\nlevel = \"Loud\"\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_read_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_config(&temp_dir.path().join("jekyll-post.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().starts_with("Error opening configuration file"));
    }
}
