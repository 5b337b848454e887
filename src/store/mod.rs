use crate::database::PageRepository;
use crate::domain::{Page, PageDraft};
use crate::error::StoreError;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub mod cache;

use cache::PageCache;

// the capability set the HTTP layer programs against. CachedPageStore is the
// one real backing; the contract stays a trait so alternates are substitutable
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Performs the first cache hydration. Reads before this return empty
    /// results rather than failing.
    async fn init(&self);

    /// Re-reads the whole collection from storage and replaces the cache.
    /// Side effect only; a storage failure is logged and leaves the previous
    /// cache contents serving.
    async fn hydrate_cache(&self);

    /// First cached page whose hash matches. A miss is `StoreError::NotFound`,
    /// never an empty page.
    async fn get_page(&self, hash: &str) -> Result<Page, StoreError>;

    /// Snapshot of the cache in storage order.
    async fn get_pages(&self) -> Vec<Page>;

    async fn create_page(&self, draft: PageDraft) -> Result<(), StoreError>;

    /// Overwrites name, content, date and author of the first record matching
    /// the draft's hash. Updating a non-existent hash is a no-op success.
    async fn update_page(&self, draft: PageDraft) -> Result<(), StoreError>;

    /// Deleting a non-existent hash is a no-op success.
    async fn delete_page(&self, hash: &str) -> Result<(), StoreError>;

    /// Case-insensitive substring scan over the cached pages. An empty query
    /// matches everything; results keep cache order, no ranking.
    async fn search_pages(&self, query: &str) -> Vec<Page>;
}

// orchestrates storage writes and keeps the cache consistent by fully
// re-reading storage after every mutation. shared as a singleton between
// request tasks; the RwLock serializes cache replacement against readers
pub struct CachedPageStore {
    repo: Box<dyn PageRepository>,
    cache: RwLock<PageCache>,
}

impl CachedPageStore {
    pub fn new(repo: Box<dyn PageRepository>) -> Self {
        Self {
            repo,
            cache: RwLock::new(PageCache::new()),
        }
    }
}

// lower-cased form of a page used for substring matching. '-', ':' and '{'
// are dropped so structural formatting in slugs and timestamps doesn't cause
// false negatives
fn flatten_for_search(page: &Page) -> String {
    page.to_string().replace(['-', ':', '{'], "").to_lowercase()
}

#[async_trait]
impl PageStore for CachedPageStore {
    async fn init(&self) {
        self.hydrate_cache().await;
    }

    async fn hydrate_cache(&self) {
        let pages = match self.repo.get_all_pages().await {
            Ok(pages) => pages,
            Err(e) => {
                // keep serving the stale snapshot rather than going dark
                tracing::warn!("Failed to hydrate page cache, keeping previous contents: {e:#}");
                return;
            }
        };

        // the new snapshot is fully built before the write lock is taken, so
        // readers observe either the old cache or the new one, never a torn mix
        let mut cache = self.cache.write().await;
        cache.docs = pages;
    }

    async fn get_page(&self, hash: &str) -> Result<Page, StoreError> {
        let cache = self.cache.read().await;

        cache
            .docs
            .iter()
            .find(|p| p.hash == hash)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(hash.to_string()))
    }

    async fn get_pages(&self) -> Vec<Page> {
        self.cache.read().await.docs.clone()
    }

    async fn create_page(&self, draft: PageDraft) -> Result<(), StoreError> {
        self.repo.insert_page(&draft).await?;
        self.hydrate_cache().await;

        Ok(())
    }

    async fn update_page(&self, draft: PageDraft) -> Result<(), StoreError> {
        self.repo.update_page(&draft).await?;
        self.hydrate_cache().await;

        Ok(())
    }

    async fn delete_page(&self, hash: &str) -> Result<(), StoreError> {
        self.repo.delete_page(hash).await?;
        self.hydrate_cache().await;

        Ok(())
    }

    async fn search_pages(&self, query: &str) -> Vec<Page> {
        let query = query.to_lowercase();
        let cache = self.cache.read().await;

        cache
            .docs
            .iter()
            .filter(|p| flatten_for_search(p).contains(&query))
            .cloned()
            .collect()
    }
}
