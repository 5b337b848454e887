use serde::{Deserialize, Serialize};

// wire shape for a page going out over the API. the raw markdown rides along
// with the rendered HTML so editors don't need a second request
#[derive(Serialize, Deserialize)]
pub struct JsonPage {
    pub id: i64,
    pub hash: String,
    pub name: String,
    pub content: String,
    pub html_content: String,
    pub date: String,
    pub author: String,
}

// body of create/update requests; the server derives the slug and the date
#[derive(Serialize, Deserialize)]
pub struct PageForm {
    pub name: String,
    pub content: String,
    pub author: String,
}

#[derive(Serialize, Deserialize)]
pub struct CreatedPage {
    pub hash: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
