use std::env;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use spdlog::{debug, warn};

use jekyll_post::generator::{generate_post, render_post};
use jekyll_post::logger::configure_logger;
use jekyll_post::post_request::PostRequest;
use jekyll_post::post_writer::WriteOutcome;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "jekyll-post.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Post title followed by its categories. Title defaults to "New Post".
    /// Everything from the title onward is taken verbatim, so options go before it
    #[arg(value_name = "TITLE [CATEGORIES]", allow_hyphen_values = true, trailing_var_arg = true)]
    words: Vec<String>,

    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Where the new post goes
    #[arg(short, long, default_value_t = PostOutput::File)]
    output: PostOutput,

    /// Enables debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Debug, ValueEnum)]
enum PostOutput {
    /// Writes the post to <date>-<slug>.md, in _posts if present
    File,
    /// Writes the front matter to the stdout
    Stdout,
}

impl Display for PostOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PostOutput::File => write!(f, "file"),
            PostOutput::Stdout => write!(f, "stdout"),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let (config, used_path) = open_config(config_path).map_err(|e| anyhow!(e))?;

    if let Err(err) = configure_logger(&config.log.unwrap_or_default(), args.verbose) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match used_path {
        Some(path) => debug!("Configuration read from {}", path.display()),
        None => debug!("No configuration file found, using defaults"),
    }

    let cwd = env::current_dir().context("Could not read current directory")?;
    let request = PostRequest::from_args(&args.words);
    let now = Local::now().naive_local();

    match args.output {
        PostOutput::Stdout => {
            let post = render_post(&request, &cwd, &config.paths.posts_dir, &now);
            println!("{}", post.front_matter);
        }
        PostOutput::File => {
            let (post, outcome) = generate_post(&request, &cwd, &config.paths.posts_dir, &now)
                .context("Could not create the post")?;
            match outcome {
                WriteOutcome::Created => println!("Post created! {}", post.file_name),
                WriteOutcome::AlreadyExists => println!("Looks like this post already exists: {}", post.destination.display()),
            }
        }
    }

    Ok(())
}
