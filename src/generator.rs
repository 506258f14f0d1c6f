use std::io;
use std::path::Path;

use chrono::NaiveDateTime;
use spdlog::info;

use crate::front_matter::build_front_matter;
use crate::post_request::PostRequest;
use crate::post_writer::{resolve_destination_dir, write_if_absent, RenderedPost, WriteOutcome};
use crate::text_utils::{build_filename, slugify};

/// Builds the file name and header for `request` at the instant `now`.
/// The destination is resolved against `cwd`, nothing is written.
pub fn render_post(request: &PostRequest, cwd: &Path, posts_dir: &str, now: &NaiveDateTime) -> RenderedPost {
    let slug = slugify(&request.title);
    let file_name = build_filename(&now.date(), &slug);
    let front_matter = build_front_matter(&request.title, now, &request.categories_str());
    let destination = resolve_destination_dir(cwd, posts_dir).join(&file_name);

    RenderedPost {
        file_name,
        front_matter,
        destination,
    }
}

pub fn generate_post(request: &PostRequest, cwd: &Path, posts_dir: &str, now: &NaiveDateTime) -> io::Result<(RenderedPost, WriteOutcome)> {
    let post = render_post(request, cwd, posts_dir, now);
    let outcome = write_if_absent(&post.destination, &post.front_matter)?;
    info!("{:?}: {}", outcome, post.destination.display());

    Ok((post, outcome))
}
