use std::cell::RefCell;
use std::rc::Rc;

use page_window::errors::PaginationError;
use page_window::pagination::{PageChange, PageNavigator, PageToken, PaginationConfig};
use page_window::parse_actions;
use page_window::render::{JsonRenderer, WindowRenderer};

#[test]
fn test_navigator_end_to_end() {
    let changes = Rc::new(RefCell::new(Vec::<PageChange>::new()));
    let sink = Rc::clone(&changes);

    let config = PaginationConfig::new(250, Some(10), 1).unwrap();
    let mut navigator =
        PageNavigator::new(config).on_page_changed(move |change| sink.borrow_mut().push(*change));

    navigator.init();
    navigator.goto_page(12);
    navigator.move_right();
    navigator.select(PageToken::Number(25));
    navigator.move_right();

    let pages: Vec<u64> = changes.borrow().iter().map(|c| c.current_page).collect();
    assert_eq!(pages, vec![1, 12, 15, 25, 25]);

    let window = navigator.window().unwrap();
    assert_eq!(
        window,
        vec![
            PageToken::Number(1),
            PageToken::LeftEllipsis,
            PageToken::Number(21),
            PageToken::Number(22),
            PageToken::Number(23),
            PageToken::Number(24),
            PageToken::Number(25),
        ]
    );

    let json = JsonRenderer.render(&window, &navigator.page_change()).unwrap();
    assert!(json.contains(r#""tokens":[1,"LEFT",21,22,23,24,25]"#));
}

#[test]
fn test_zero_records_render_nothing() {
    let config = PaginationConfig::new(0, None, 2).unwrap();
    let mut navigator = PageNavigator::new(config);
    navigator.init();

    assert_eq!(navigator.window(), None);
    assert_eq!(navigator.current_page(), 1);
}

#[test]
fn test_invalid_page_limit_is_rejected() {
    assert_eq!(
        PaginationConfig::new(100, Some(0), 1).unwrap_err(),
        PaginationError::InvalidPageLimit(0)
    );
}

#[test]
fn test_parse_action_script() {
    let raw: Vec<String> = ["first", "right", "goto:4", "last"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(parse_actions(&raw).unwrap().len(), 4);

    let bad = vec!["up".to_string()];
    let err = parse_actions(&bad).unwrap_err();
    assert!(err.to_string().contains("Failed to parse navigation action: up"));
}
