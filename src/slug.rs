use rand::distr::Alphanumeric;
use rand::Rng;

// derives the URL-safe public identifier for a page from its display title:
// lower-case, spaces to hyphens, everything outside [a-z0-9-] dropped.
// pure and total; a title of only disallowed characters yields an empty slug
pub fn title_to_slug(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

// 8 characters drawn independently and uniformly from [a-zA-Z0-9].
// rand::rng() is a CSPRNG reseeded from the OS, so tokens are safe to use as
// non-guessable identifiers. not on the page-creation path; kept for
// identifiers that must not derive from user-controlled text
#[allow(dead_code)]
pub fn random_token() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}
