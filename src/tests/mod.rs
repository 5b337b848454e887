pub mod unit_search_pages;
pub mod unit_slug;
