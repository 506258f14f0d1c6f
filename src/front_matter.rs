use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::text_utils::format_date_time;

/// Renders the Jekyll header. Title and categories are inserted verbatim,
/// no quoting or escaping is done.
pub fn build_front_matter(title: &str, date: &NaiveDateTime, categories: &str) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "layout: post");
    let _ = writeln!(&mut buf, "title: {}", title);
    let _ = writeln!(&mut buf, "date: {}", format_date_time(date));
    let _ = writeln!(&mut buf, "categories: {}", categories);
    let _ = writeln!(&mut buf, "---");
    buf
}
