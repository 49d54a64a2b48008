//! Review text cleaning applied before vectorization.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("valid regex"));
static NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid regex"));

/// Strip tag-like spans, then everything but ASCII letters and whitespace,
/// then lowercase.
///
/// Tags are removed first so that the letters inside `<br/>` and friends do
/// not leak into the output. `.` does not cross newlines, so a `<` left open
/// on one line is dropped by the second pass rather than swallowing text.
pub fn normalize(text: &str) -> String {
    let without_tags = TAG.replace_all(text, "");
    let letters = NON_ALPHA.replace_all(&without_tags, "");
    letters.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn strips_tags_and_punctuation() {
        assert_eq!(normalize("<b>Great</b> drug!!"), "great drug");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn html_entities_lose_their_symbols() {
        assert_eq!(
            normalize("&#039;It works&#039; <br />&quot;10/10&quot;"),
            "it works quotquot"
        );
    }

    #[test]
    fn unterminated_tag_is_not_greedy_across_lines() {
        assert_eq!(normalize("a < b\nStill <i>here</i>"), "a  b\nstill here");
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        assert_eq!(normalize("Café Zoloft™ ok"), "caf zoloft ok");
    }
}
