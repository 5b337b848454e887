use crate::domain::Page;
use anyhow::anyhow;
use chrono::{DateTime, Utc};

// raw `pages` row. dates live as RFC3339 text in the database and only become
// structured timestamps on the way out
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct DbPage {
    pub id: i64,
    pub hash: String,
    pub name: String,
    pub content: String,
    pub date: String,
    pub author: String,
}

impl TryFrom<DbPage> for Page {
    type Error = anyhow::Error;

    fn try_from(row: DbPage) -> Result<Self, Self::Error> {
        let date = DateTime::parse_from_rfc3339(&row.date)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| anyhow!("Malformed date '{}' on page {}: {}", row.date, row.hash, e))?;

        Ok(Page {
            id: row.id,
            hash: row.hash,
            name: row.name,
            content: row.content,
            date,
            author: row.author,
        })
    }
}
