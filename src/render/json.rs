use anyhow::{Context, Result};
use serde::Serialize;

use super::WindowRenderer;
use crate::pagination::{PageChange, PageToken};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WindowDocument<'a> {
    page_change: &'a PageChange,
    tokens: &'a [PageToken],
}

/// `{"pageChange": {...}, "tokens": [1, "LEFT", ...]}`
pub struct JsonRenderer;

impl WindowRenderer for JsonRenderer {
    fn render(&self, tokens: &[PageToken], change: &PageChange) -> Result<String> {
        let document = WindowDocument {
            page_change: change,
            tokens,
        };
        serde_json::to_string(&document).context("Failed to serialize page window")
    }
}
