use chrono::{NaiveDate, NaiveDateTime};

/// Lower-cases the title and turns every space into a hyphen.
/// Anything else (tabs, punctuation, underscores) is kept as is, so filenames
/// of posts created before stay stable.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// `YYYY-MM-DD-<slug>.md`
pub fn build_filename(date: &NaiveDate, slug: &str) -> String {
    format!("{}-{}.md", date.format("%Y-%m-%d"), slug)
}

pub fn format_date_time(date_time: &NaiveDateTime) -> String {
    date_time.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Title"), "my-title");
        assert_eq!(slugify("A_B C"), "a_b-c");
        assert_eq!(slugify("New Post"), "new-post");
    }

    #[test]
    fn test_slugify_only_spaces() {
        // Tabs, punctuation and double spaces pass through untouched
        assert_eq!(slugify("Hello,\tWorld!"), "hello,\tworld!");
        assert_eq!(slugify("two  spaces"), "two--spaces");
        assert_eq!(slugify("Ação Rápida"), "ação-rápida");
    }

    #[test]
    fn test_build_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 03, 05).unwrap();
        let file_name = build_filename(&date, "hello-world");
        assert_eq!(file_name, "2024-03-05-hello-world.md");
        assert_eq!(build_filename(&date, "hello-world"), file_name);
    }

    #[test]
    fn test_format_date_time() {
        let date_time = NaiveDate::from_ymd_opt(2017, 09, 10).unwrap()
            .and_hms_opt(10, 42, 3).unwrap();
        assert_eq!(format_date_time(&date_time), "2017-09-10 10:42:03");
    }
}
