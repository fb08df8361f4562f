use std::str::FromStr;

use crate::errors::PaginationError;
use crate::pagination::PageNavigator;

/// One scripted step of a navigation session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Left,
    Right,
    First,
    Last,
    Goto(u64),
}

impl NavigationAction {
    pub fn apply(&self, navigator: &mut PageNavigator) {
        match self {
            NavigationAction::Left => navigator.move_left(),
            NavigationAction::Right => navigator.move_right(),
            NavigationAction::First => navigator.goto_page(1),
            NavigationAction::Last => {
                let last = navigator.config().total_pages();
                navigator.goto_page(last)
            }
            NavigationAction::Goto(page) => navigator.goto_page(*page),
        }
    }
}

impl FromStr for NavigationAction {
    type Err = PaginationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let action = raw.trim().to_ascii_lowercase();
        match action.as_str() {
            "left" | "<" => Ok(NavigationAction::Left),
            "right" | ">" => Ok(NavigationAction::Right),
            "first" => Ok(NavigationAction::First),
            "last" => Ok(NavigationAction::Last),
            other => parse_goto(other).ok_or_else(|| PaginationError::InvalidAction(raw.to_string())),
        }
    }
}

fn parse_goto(action: &str) -> Option<NavigationAction> {
    let page = action.strip_prefix("goto:").unwrap_or(action);
    page.parse::<u64>().ok().map(NavigationAction::Goto)
}
