/// Upper bound on accepted blog content, in bytes.
pub const MAX_CONTENT_BYTES: usize = 64 * 1024;

/// Checks blog content against the acceptance rules: present, not
/// whitespace-only, and within the size bound. Pure, no side effects.
pub fn validate_content(content: &str) -> bool {
    !content.trim().is_empty() && content.len() <= MAX_CONTENT_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_content() {
        assert!(validate_content("Hello world"));
    }

    #[test]
    fn rejects_empty_content() {
        assert!(!validate_content(""));
    }

    #[test]
    fn rejects_whitespace_only_content() {
        assert!(!validate_content("   \n\t  "));
    }

    #[test]
    fn accepts_content_at_the_size_bound() {
        assert!(validate_content(&"x".repeat(MAX_CONTENT_BYTES)));
    }

    #[test]
    fn rejects_content_over_the_size_bound() {
        assert!(!validate_content(&"x".repeat(MAX_CONTENT_BYTES + 1)));
    }
}
