//! Slug derivation

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new("[^a-z0-9]+").unwrap();
}

/// Derive a URL-safe slug from a title.
///
/// The title is lowercased, every run of characters outside `[a-z0-9]`
/// collapses to a single hyphen, and leading/trailing hyphens are
/// stripped. Deterministic; collisions between titles are not detected.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_ALNUM
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn test_collapses_runs() {
        assert_eq!(slugify("a  --  b"), "a-b");
        assert_eq!(slugify("one...two...three"), "one-two-three");
    }

    #[test]
    fn test_strips_edges() {
        assert_eq!(slugify("  !!Leading and trailing??  "), "leading-and-trailing");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = slugify("A Quiet Morning, Again");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_output_alphabet() {
        for title in ["Café au lait", "2024 in review", "東京 trip", "100% done"] {
            let slug = slugify(title);
            assert!(!slug.starts_with('-'));
            assert!(!slug.ends_with('-'));
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }
}
