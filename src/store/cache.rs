use crate::domain::Page;

// full snapshot of the pages collection, in storage order. exists so routes
// never pay for a database query on the read path; replaced wholesale on every
// hydration and owned exclusively by the store
pub struct PageCache {
    pub docs: Vec<Page>,
}

impl PageCache {
    pub fn new() -> Self {
        Self { docs: Vec::new() }
    }
}
