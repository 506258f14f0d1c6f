pub const DEFAULT_TITLE: &str = "New Post";

/// Title and categories taken from the positional arguments.
/// The first argument is the title, the remaining ones are categories.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRequest {
    pub title: String,
    pub categories: Vec<String>,
}

impl PostRequest {
    pub fn from_args(args: &[String]) -> PostRequest {
        let categories = match args.get(1..) {
            Some(rest) => rest.to_vec(),
            None => vec![],
        };

        PostRequest {
            title: resolve_title(args),
            categories,
        }
    }

    pub fn categories_str(&self) -> String {
        self.categories.join(" ")
    }
}

pub fn resolve_title(args: &[String]) -> String {
    match args.first() {
        Some(title) => title.clone(),
        None => DEFAULT_TITLE.to_string(),
    }
}

pub fn resolve_categories(args: &[String]) -> String {
    match args.get(1..) {
        Some(rest) => rest.join(" "),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::text_utils::slugify;

    use super::*;

    fn to_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_title() {
        assert_eq!(resolve_title(&[]), "New Post");
        assert_eq!(slugify(&resolve_title(&[])), "new-post");
    }

    #[test]
    fn test_title_verbatim() {
        let args = to_args(&["  Spaced: Title  "]);
        assert_eq!(resolve_title(&args), "  Spaced: Title  ");
    }

    #[test]
    fn test_resolve_categories() {
        assert_eq!(resolve_categories(&to_args(&["t", "a", "b", "c"])), "a b c");
        assert_eq!(resolve_categories(&to_args(&["t"])), "");
        assert_eq!(resolve_categories(&[]), "");
    }

    #[test]
    fn test_from_args() {
        let req = PostRequest::from_args(&to_args(&["Hello World", "go", "rust"]));
        assert_eq!(req.title, "Hello World");
        assert_eq!(req.categories, ["go", "rust"]);
        assert_eq!(req.categories_str(), "go rust");

        let req = PostRequest::from_args(&[]);
        assert_eq!(req, PostRequest { title: "New Post".to_string(), categories: vec![] });
    }
}
