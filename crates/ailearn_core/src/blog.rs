//! Static blog posts. The listing has no store and no paging.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub author: String,
    /// Human-readable publication date, e.g. "March 1, 2024".
    pub date: String,
    /// Display label, e.g. "5 min read".
    pub read_time: String,
    pub image: String,
}
