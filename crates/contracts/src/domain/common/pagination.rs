use serde::{Deserialize, Serialize};

/// One page request as the backend expects it: 0-based page index, page
/// size, and sort strings of the form `"field,direction"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    pub sort: Vec<String>,
}

impl PageQuery {
    /// Flatten into query-string pairs; the `sort` key repeats per entry.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        for sort in &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}
