use serde::{Deserialize, Serialize};

use crate::toc::TocEntry;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CellOutputStats {
    pub id: Option<String>,
    pub index: usize,
    pub output_size: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenamePlan {
    pub from: String,
    pub to: String,
    pub applied: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TitleMetadata {
    pub title: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TocReport {
    pub input: String,
    pub generated_at: String,
    pub anchor_base: String,
    pub anchors_inserted: usize,
    pub entry_count: usize,
    pub entries: Vec<TocEntry>,
}
