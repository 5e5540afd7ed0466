mod markup;

pub use markup::strip_tags;

/// Characters kept when an excerpt is derived from a post body.
pub const EXCERPT_LEN: usize = 54;

/// Plain-text lead of `body`: markup tags removed, cut to [`EXCERPT_LEN`]
/// characters.
pub fn excerpt(body: &str) -> String {
    strip_tags(body).chars().take(EXCERPT_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_strips_and_truncates() {
        let body = format!("<p>{}</p>", "x".repeat(100));
        let e = excerpt(&body);
        assert_eq!(e.chars().count(), EXCERPT_LEN);
        assert!(e.chars().all(|c| c == 'x'));
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        let body = "博客".repeat(40);
        let e = excerpt(&body);
        assert_eq!(e.chars().count(), EXCERPT_LEN);
        assert!(body.starts_with(&e));
    }

    #[test]
    fn test_excerpt_short_body() {
        assert_eq!(excerpt("<h1>Hi</h1> there"), "Hi there");
        assert_eq!(excerpt(""), "");
    }
}
