use anyhow::Result;
use log::{info, warn};

use super::actions::NavigationAction;
use crate::pagination::{PageNavigator, PaginationConfig};
use crate::render::WindowRenderer;

const NOTHING_TO_RENDER: &str = "(nothing to render)";

/// Drives a navigator through a scripted session and renders each step
pub struct NavigationService {
    navigator: PageNavigator,
    renderer: Box<dyn WindowRenderer>,
}

impl NavigationService {
    pub fn new(config: PaginationConfig, renderer: Box<dyn WindowRenderer>) -> Self {
        let navigator = PageNavigator::new(config).on_page_changed(|change| {
            info!(
                "Page changed: {}/{} ({} per page, {} records)",
                change.current_page, change.total_pages, change.page_limit, change.total_records
            );
        });

        Self { navigator, renderer }
    }

    /// Renders the window around a single page.
    pub fn show(&mut self, page: u64) -> Result<String> {
        self.navigator.init();
        if page != 1 {
            self.navigator.goto_page(page);
        }
        self.render_current()
    }

    /// Initializes the navigator, then applies every action in order.
    ///
    /// Returns one rendered frame for the initial page plus one per action.
    pub fn run(&mut self, actions: &[NavigationAction]) -> Result<Vec<String>> {
        info!("=== Starting Navigation Session ===");

        self.navigator.init();
        let mut frames = vec![self.render_current()?];

        for (step, action) in actions.iter().enumerate() {
            info!("Step {}: {:?}", step + 1, action);
            action.apply(&mut self.navigator);
            frames.push(self.render_current()?);
        }

        info!("=== Navigation Complete (page {}) ===", self.navigator.current_page());
        Ok(frames)
    }

    pub fn current_page(&self) -> u64 {
        self.navigator.current_page()
    }

    fn render_current(&self) -> Result<String> {
        match self.navigator.window() {
            Some(tokens) => self.renderer.render(&tokens, &self.navigator.page_change()),
            None => {
                warn!("Pagination has a single page or no records; no control to render");
                Ok(NOTHING_TO_RENDER.to_string())
            }
        }
    }
}
