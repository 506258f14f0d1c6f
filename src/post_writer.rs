use std::fs::OpenOptions;
use std::io;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use spdlog::debug;

pub const DEFAULT_POSTS_DIR: &str = "_posts";

/// A post ready to be written. Built once per run and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPost {
    pub file_name: String,
    pub front_matter: String,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    AlreadyExists,
}

/// Returns `<cwd>/<posts_dir>` when it is an existing directory, `cwd` otherwise.
/// The posts directory is never created.
pub fn resolve_destination_dir(cwd: &Path, posts_dir: &str) -> PathBuf {
    let posts_path = cwd.join(posts_dir);
    if posts_path.is_dir() {
        debug!("Using posts directory {}", posts_path.display());
        posts_path
    } else {
        debug!("No {} directory, writing to {}", posts_dir, cwd.display());
        cwd.to_path_buf()
    }
}

/// Writes `content` plus a trailing newline to `path` unless something is already there.
///
/// The existence check and the creation are two separate steps. Two runs
/// racing on the same path can both pass the check; `create_new` makes the
/// loser report `AlreadyExists` instead of overwriting the winner.
pub fn write_if_absent(path: &Path, content: &str) -> io::Result<WriteOutcome> {
    if path.exists() {
        return Ok(WriteOutcome::AlreadyExists);
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(WriteOutcome::AlreadyExists),
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error creating post file {}: {}", path.display(), e))),
    };

    if let Err(e) = writeln!(file, "{}", content) {
        return Err(io::Error::new(e.kind(), format!("Error writing post file {}: {}", path.display(), e)));
    }

    Ok(WriteOutcome::Created)
}
