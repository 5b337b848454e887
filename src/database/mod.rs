use crate::domain::{Page, PageDraft};
use anyhow::Result;
use async_trait::async_trait;

pub mod model;
pub mod sqlite;

// contract over the persistent `pages` collection. sqlx::Pool is thread safe,
// so the concrete repository can be shared between request tasks.
// sqlite today; a postgres or mysql backing would implement the same trait
#[async_trait]
pub trait PageRepository: Send + Sync {
    // connectivity check, run once at startup before the store is built
    async fn ping(&self) -> Result<()>;

    // full scan in insertion order; the store's cache mirrors this order
    async fn get_all_pages(&self) -> Result<Vec<Page>>;

    // write operations, keyed by hash. update and delete touch the first
    // matching row only, and a hash with no rows is a no-op success
    async fn insert_page(&self, draft: &PageDraft) -> Result<()>;
    async fn update_page(&self, draft: &PageDraft) -> Result<()>;
    async fn delete_page(&self, hash: &str) -> Result<()>;
}
