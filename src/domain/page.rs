use chrono::{DateTime, Utc};
use derive_more::derive::Display;

// a stored wiki page. `hash` is the URL-safe slug derived from the title at
// creation time and acts as the public identifier; `id` is the storage-assigned
// rowid and never leaves the database layer's control.
// the Display form concatenates every field and feeds the substring search.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{} {} {} {} {}", hash, name, content, date, author)]
pub struct Page {
    pub id: i64,
    pub hash: String,
    pub name: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub author: String,
}

// transient input for create/update. never persisted as-is; the repository
// binds these fields into a row. the date travels as an RFC3339 string and is
// only parsed back into a timestamp when rows are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDraft {
    pub hash: String,
    pub name: String,
    pub content: String,
    pub date: String,
    pub author: String,
}
