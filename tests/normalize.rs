use drug_insight::nlp::normalize::normalize;
use proptest::prelude::*;

#[test]
fn tagged_review_is_cleaned() {
    assert_eq!(normalize("<b>Great</b> drug!!"), "great drug");
    assert_eq!(normalize(""), "");
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in any::<String>()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn output_is_lowercase_letters_and_whitespace(text in r"(<[a-z/ ]{0,6}>|[A-Za-z0-9 !?.,'&;\n]){0,40}") {
        let cleaned = normalize(&text);
        prop_assert!(cleaned.chars().all(|c| c.is_ascii_lowercase() || c.is_whitespace()));
    }
}
