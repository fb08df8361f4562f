pub mod actions;
pub mod navigation;

pub use actions::NavigationAction;
pub use navigation::NavigationService;
