pub mod settings;

pub use settings::{AppConfig, PaginationSettings, RenderSettings};
