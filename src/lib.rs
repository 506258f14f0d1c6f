pub mod config;
pub mod logger;
pub mod post_request;
pub mod text_utils;
pub mod front_matter;
pub mod post_writer;
pub mod generator;
mod test_data;
