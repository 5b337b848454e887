use crate::slug::{random_token, title_to_slug};

#[test]
fn test_title_to_slug_is_deterministic() {
    assert_eq!(title_to_slug("Hello World!"), "hello-world");
    assert_eq!(title_to_slug("Hello World!"), "hello-world");
    assert_eq!(title_to_slug("My First Page"), "my-first-page");
}

#[test]
fn test_title_to_slug_empty_and_disallowed_only() {
    assert_eq!(title_to_slug(""), "");
    // a title of only disallowed characters yields an empty slug, accepted
    assert_eq!(title_to_slug("!!!???"), "");
}

// every space becomes a hyphen before stripping, so runs of spaces leave runs
// of hyphens
#[test]
fn test_title_to_slug_spaces_become_hyphens() {
    assert_eq!(title_to_slug("a  b"), "a--b");
    assert_eq!(title_to_slug("Already-Hyphenated Title"), "already-hyphenated-title");
}

#[test]
fn test_title_to_slug_drops_non_ascii() {
    assert_eq!(title_to_slug("Café ☕"), "caf-");
    assert_eq!(title_to_slug("Числа 123"), "-123");
}

#[test]
fn test_random_token_shape() {
    let token = random_token();
    assert_eq!(token.len(), 8);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
}

// 62^8 possibilities; two draws colliding would point at a broken source
#[test]
fn test_random_tokens_differ() {
    assert_ne!(random_token(), random_token());
}
