mod config;
mod navigator;
mod token;
mod window;

pub use config::PaginationConfig;
pub use navigator::{PageChange, PageNavigator};
pub use token::PageToken;
pub use window::compute_window;
