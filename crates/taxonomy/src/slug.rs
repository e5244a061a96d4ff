//! URL slugs for taxonomy names.
//!
//! Matches the slugger the content layer uses for its own links: the name is
//! lowercased, every literal space becomes `-`, and anything that is not a
//! letter, combining mark, digit, connector, `-` or space is dropped.
//! Non-Latin scripts are kept as-is, so `台北 美食` becomes `台北-美食`.

use regex::Regex;
use std::sync::LazyLock;

static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{M}\p{N}\p{Pc} -]").expect("BUG: invalid NON_SLUG_CHARS regex literal")
});

/// Converts a category or tag name into its URL slug.
pub fn slugify(name: &str) -> String {
    NON_SLUG_CHARS
        .replace_all(&name.to_lowercase(), "")
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_replaces_spaces() {
        assert_eq!(slugify("Taipei City"), "taipei-city");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(slugify("C++ & Rust!"), "c--rust");
        assert_eq!(slugify("what's new?"), "whats-new");
    }

    #[test]
    fn test_keeps_cjk_letters() {
        assert_eq!(slugify("台北 美食"), "台北-美食");
    }

    #[test]
    fn test_keeps_combining_marks() {
        assert_eq!(slugify("हिन्दी"), "हिन्दी");
        assert_eq!(slugify("Cafe\u{301} Culture"), "cafe\u{301}-culture");
    }

    #[test]
    fn test_keeps_dash_and_underscore() {
        assert_eq!(slugify("snake_case-name"), "snake_case-name");
    }

    #[test]
    fn test_drops_tabs_and_newlines() {
        assert_eq!(slugify("a\tb\nc"), "abc");
    }

    #[test]
    fn test_idempotent() {
        for name in ["Taipei City", "台北 美食", "C++ & Rust!", "Ünïcödé Name"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
    }
}
