use crate::database::model::DbPage;
use crate::database::PageRepository;
use crate::domain::{Page, PageDraft};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageRepository for SqliteRepository {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database ping failed")?;

        Ok(())
    }

    async fn get_all_pages(&self) -> Result<Vec<Page>> {
        // id order keeps the cache (and everything reading it) in stable
        // insertion order
        let rows = sqlx::query_as::<_, DbPage>(
            "SELECT id, hash, name, content, date, author FROM pages ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        // translate to pure Page models, failing on malformed rows
        let mut pages = Vec::with_capacity(rows.len());
        for row in rows {
            let page: Page = row.try_into()?;
            pages.push(page);
        }

        Ok(pages)
    }

    async fn insert_page(&self, draft: &PageDraft) -> Result<()> {
        // no uniqueness constraint on hash; duplicate slugs are accepted
        sqlx::query("INSERT INTO pages (hash, name, content, date, author) VALUES (?, ?, ?, ?, ?)")
            .bind(&draft.hash)
            .bind(&draft.name)
            .bind(&draft.content)
            .bind(&draft.date)
            .bind(&draft.author)
            .execute(&self.pool)
            .await
            .context(format!("Failed to insert page {}", draft.hash))?;

        Ok(())
    }

    async fn update_page(&self, draft: &PageDraft) -> Result<()> {
        // first match only, so duplicate slugs behave like a document store's
        // update-one. zero matching rows is a no-op success
        sqlx::query(
            r#"
            UPDATE pages
            SET name = ?, content = ?, date = ?, author = ?
            WHERE id = (SELECT id FROM pages WHERE hash = ? ORDER BY id LIMIT 1)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.content)
        .bind(&draft.date)
        .bind(&draft.author)
        .bind(&draft.hash)
        .execute(&self.pool)
        .await
        .context(format!("Failed to update page {}", draft.hash))?;

        Ok(())
    }

    async fn delete_page(&self, hash: &str) -> Result<()> {
        sqlx::query(
            "DELETE FROM pages WHERE id = (SELECT id FROM pages WHERE hash = ? ORDER BY id LIMIT 1)",
        )
        .bind(hash)
        .execute(&self.pool)
        .await
        .context(format!("Failed to delete page {}", hash))?;

        Ok(())
    }
}
