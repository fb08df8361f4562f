use anyhow::Result;
use colored::Colorize;

use super::WindowRenderer;
use crate::config::settings::RenderSettings;
use crate::pagination::{PageChange, PageToken};

/// Single-line terminal rendering, e.g. `1 « 4 [5] 6 » 10`
pub struct TextRenderer {
    left_label: String,
    right_label: String,
    highlight: bool,
}

impl TextRenderer {
    pub fn new(settings: &RenderSettings, highlight: bool) -> Self {
        Self {
            left_label: settings.left_label.to_string(),
            right_label: settings.right_label.to_string(),
            highlight,
        }
    }

    fn render_token(&self, token: &PageToken, current_page: u64) -> String {
        match token {
            PageToken::LeftEllipsis => self.left_label.clone(),
            PageToken::RightEllipsis => self.right_label.clone(),
            PageToken::Number(page) if *page == current_page => self.render_active(*page),
            PageToken::Number(page) => page.to_string(),
        }
    }

    fn render_active(&self, page: u64) -> String {
        let label = format!("[{}]", page);
        if self.highlight {
            label.green().bold().to_string()
        } else {
            label
        }
    }
}

impl WindowRenderer for TextRenderer {
    fn render(&self, tokens: &[PageToken], change: &PageChange) -> Result<String> {
        let parts: Vec<String> = tokens
            .iter()
            .map(|token| self.render_token(token, change.current_page))
            .collect();
        Ok(parts.join(" "))
    }
}
