use log::{debug, info};
use serde::Serialize;

use super::config::PaginationConfig;
use super::token::PageToken;
use super::window::compute_window;

/// Payload delivered to the page-change listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageChange {
    pub current_page: u64,
    pub total_pages: u64,
    pub page_limit: u64,
    pub total_records: u64,
}

type PageChangeListener = Box<dyn FnMut(&PageChange)>;

/// Holds the selected page of a paginated list and reports every change
pub struct PageNavigator {
    config: PaginationConfig,
    current_page: u64,
    on_page_changed: PageChangeListener,
}

impl PageNavigator {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            config,
            current_page: 1,
            on_page_changed: Box::new(|_: &PageChange| {}),
        }
    }

    pub fn on_page_changed<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&PageChange) + 'static,
    {
        self.on_page_changed = Box::new(listener);
        self
    }

    /// Selects the first page and notifies the listener once.
    pub fn init(&mut self) {
        info!(
            "Initializing navigator: {} records, {} per page, {} pages",
            self.config.total_records(),
            self.config.page_limit(),
            self.config.total_pages()
        );
        self.goto_page(1);
    }

    /// Clamps `page` into `[1, total_pages]`, stores it and notifies the listener.
    pub fn goto_page(&mut self, page: u64) {
        self.current_page = self.clamp(page);
        debug!("Requested page {}, now on page {}", page, self.current_page);

        let change = self.page_change();
        (self.on_page_changed)(&change);
    }

    pub fn move_left(&mut self) {
        let target = self.current_page.saturating_sub(self.config.jump_size());
        self.goto_page(target);
    }

    pub fn move_right(&mut self) {
        let target = self.current_page.saturating_add(self.config.jump_size());
        self.goto_page(target);
    }

    /// Reacts to a clicked token the same way the rendered control does.
    pub fn select(&mut self, token: PageToken) {
        match token {
            PageToken::Number(page) => self.goto_page(page),
            PageToken::LeftEllipsis => self.move_left(),
            PageToken::RightEllipsis => self.move_right(),
        }
    }

    /// Current page window, or `None` when no control should be displayed.
    pub fn window(&self) -> Option<Vec<PageToken>> {
        if !self.config.is_renderable() {
            return None;
        }

        Some(compute_window(
            self.config.total_pages(),
            self.current_page,
            self.config.page_neighbours(),
        ))
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn page_change(&self) -> PageChange {
        PageChange {
            current_page: self.current_page,
            total_pages: self.config.total_pages(),
            page_limit: self.config.page_limit(),
            total_records: self.config.total_records(),
        }
    }

    fn clamp(&self, page: u64) -> u64 {
        page.clamp(1, self.config.total_pages().max(1))
    }
}
