use crate::store::{CachedPageStore, PageStore};
use crate::tests::unit_store_cache::{draft, mock_store};

// two pages with distinct titles, bodies and authors to search across
async fn seeded_store() -> CachedPageStore {
    let (_repo, store) = mock_store();
    store.init().await;

    store
        .create_page(draft("my-first-page", "My First Page", "# Hi", "Ann"))
        .await
        .unwrap();
    store
        .create_page(draft(
            "rust-notes",
            "Rust Notes",
            "Borrow checker tips",
            "Ben",
        ))
        .await
        .unwrap();

    store
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let store = seeded_store().await;

    let upper = store.search_pages("RUST").await;
    let lower = store.search_pages("rust").await;

    let upper_hashes: Vec<&str> = upper.iter().map(|p| p.hash.as_str()).collect();
    let lower_hashes: Vec<&str> = lower.iter().map(|p| p.hash.as_str()).collect();

    assert_eq!(upper_hashes, lower_hashes);
    assert_eq!(lower_hashes, vec!["rust-notes"]);
}

// every field participates in the flattened form, author included
#[tokio::test]
async fn test_search_matches_any_field() {
    let store = seeded_store().await;

    let by_author = store.search_pages("ann").await;
    assert!(by_author.iter().any(|p| p.hash == "my-first-page"));

    let by_content = store.search_pages("borrow checker").await;
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].hash, "rust-notes");

    // the stored date is part of the flattened form too
    let by_year = store.search_pages("2024").await;
    assert_eq!(by_year.len(), 2);
}

#[tokio::test]
async fn test_empty_query_matches_every_page_in_cache_order() {
    let store = seeded_store().await;

    let all = store.search_pages("").await;
    assert_eq!(all, store.get_pages().await);
}

#[tokio::test]
async fn test_no_match_returns_empty() {
    let store = seeded_store().await;

    assert!(store.search_pages("zebra").await.is_empty());
}

// '-', ':' and '{' are stripped from the flattened page but not from the
// query, so hyphenated slugs only match with the hyphens removed
#[tokio::test]
async fn test_punctuation_is_stripped_from_pages_not_queries() {
    let store = seeded_store().await;

    let collapsed = store.search_pages("myfirstpage").await;
    assert_eq!(collapsed.len(), 1);
    assert_eq!(collapsed[0].hash, "my-first-page");

    assert!(store.search_pages("my-first-page").await.is_empty());

    // same story for the colons in timestamps
    assert!(store.search_pages("12:00").await.is_empty());
    assert_eq!(store.search_pages("1200").await.len(), 2);
}

// search reads the cache, so results track mutations immediately
#[tokio::test]
async fn test_search_reflects_deletes() {
    let store = seeded_store().await;

    store.delete_page("rust-notes").await.unwrap();

    assert!(store.search_pages("rust").await.is_empty());
}
