//! Rendering collaborators that draw a computed page window.

mod html;
mod json;
mod text;

use anyhow::Result;
use clap::ValueEnum;

use crate::config::settings::RenderSettings;
use crate::pagination::{PageChange, PageToken};

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

/// Draws a page window, marking `change.current_page` as the active page.
pub trait WindowRenderer {
    fn render(&self, tokens: &[PageToken], change: &PageChange) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Text,
    Html,
    Json,
}

pub fn renderer_for(format: RenderFormat, settings: &RenderSettings) -> Box<dyn WindowRenderer> {
    match format {
        RenderFormat::Text => Box::new(TextRenderer::new(settings, true)),
        RenderFormat::Html => Box::new(HtmlRenderer::new(settings)),
        RenderFormat::Json => Box::new(JsonRenderer),
    }
}
