use std::fmt::Write as _;

use anyhow::Result;

use super::WindowRenderer;
use crate::config::settings::RenderSettings;
use crate::pagination::{PageChange, PageToken};

/// Bootstrap-style `<nav><ul class="pagination">` markup.
///
/// Numbered links carry `data-page`, spill links carry `data-action`
/// (`left`/`right`) so the host page can route clicks back to the navigator.
pub struct HtmlRenderer {
    aria_label: String,
}

impl HtmlRenderer {
    pub fn new(settings: &RenderSettings) -> Self {
        Self {
            aria_label: escape(settings.aria_label),
        }
    }

    fn write_token(&self, out: &mut String, token: &PageToken, current_page: u64) -> std::fmt::Result {
        match token {
            PageToken::LeftEllipsis => write_spill(out, "left", "&laquo;", "Previous"),
            PageToken::RightEllipsis => write_spill(out, "right", "&raquo;", "Next"),
            PageToken::Number(page) => write_page(out, *page, *page == current_page),
        }
    }
}

impl WindowRenderer for HtmlRenderer {
    fn render(&self, tokens: &[PageToken], change: &PageChange) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "<nav aria-label=\"{}\">", self.aria_label)?;
        writeln!(out, "  <ul class=\"pagination\">")?;
        for token in tokens {
            self.write_token(&mut out, token, change.current_page)?;
        }
        writeln!(out, "  </ul>")?;
        write!(out, "</nav>")?;
        Ok(out)
    }
}

fn write_spill(out: &mut String, action: &str, symbol: &str, label: &str) -> std::fmt::Result {
    writeln!(
        out,
        "    <li class=\"page-item\"><a class=\"page-link\" href=\"#\" data-action=\"{action}\" aria-label=\"{label}\"><span aria-hidden=\"true\">{symbol}</span><span class=\"sr-only\">{label}</span></a></li>"
    )
}

fn write_page(out: &mut String, page: u64, active: bool) -> std::fmt::Result {
    let class = if active { "page-item active" } else { "page-item" };
    writeln!(
        out,
        "    <li class=\"{class}\"><a class=\"page-link\" href=\"#\" data-page=\"{page}\">{page}</a></li>"
    )
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::compute_window;

    #[test]
    fn test_html_marks_active_page_and_spills() {
        let renderer = HtmlRenderer::new(&RenderSettings::default());
        let change = PageChange {
            current_page: 5,
            total_pages: 10,
            page_limit: 10,
            total_records: 100,
        };

        let html = renderer.render(&compute_window(10, 5, 1), &change).unwrap();

        assert!(html.starts_with("<nav aria-label=\"Pagination\">"));
        assert!(html.ends_with("</nav>"));
        assert!(html.contains("<li class=\"page-item active\"><a class=\"page-link\" href=\"#\" data-page=\"5\">5</a></li>"));
        assert!(html.contains("data-action=\"left\""));
        assert!(html.contains("data-action=\"right\""));
        assert_eq!(html.matches("<li ").count(), 7);
        assert_eq!(html.matches("page-item active").count(), 1);
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape("A & \"B\""), "A &amp; &quot;B&quot;");
    }
}
