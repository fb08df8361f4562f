use log::debug;

use super::token::PageToken;

/// Computes the page window shown for `current_page`.
///
/// The first and last page are always present. Pages beyond the neighbour
/// block collapse into `LeftEllipsis` / `RightEllipsis`, and when only one
/// side spills the other side is padded so the control keeps a constant width.
/// `current_page` is clamped into `[1, total_pages]` first.
pub fn compute_window(total_pages: u64, current_page: u64, page_neighbours: u64) -> Vec<PageToken> {
    let total_numbers = page_neighbours * 2 + 3;
    let total_blocks = total_numbers + 2;

    if total_pages <= total_blocks {
        return numbers(1, total_pages);
    }

    let current_page = current_page.clamp(1, total_pages);
    let start_page = 2.max(current_page.saturating_sub(page_neighbours));
    let end_page = (total_pages - 1).min(current_page + page_neighbours);
    let window = numbers(start_page, end_page);

    let has_left_spill = start_page > 2;
    let has_right_spill = total_pages - end_page > 1;
    let spill_offset = total_numbers - (window.len() as u64 + 1);

    debug!(
        "Window {}..={} of {} pages (left spill: {}, right spill: {}, offset: {})",
        start_page, end_page, total_pages, has_left_spill, has_right_spill, spill_offset
    );

    let middle = match (has_left_spill, has_right_spill) {
        (true, false) => spill_left(window, start_page, spill_offset),
        (false, true) => spill_right(window, end_page, spill_offset),
        _ => spill_both(window),
    };

    wrap_with_boundaries(middle, total_pages)
}

fn numbers(from: u64, to: u64) -> Vec<PageToken> {
    (from..=to).map(PageToken::Number).collect()
}

fn spill_left(window: Vec<PageToken>, start_page: u64, spill_offset: u64) -> Vec<PageToken> {
    let mut tokens = vec![PageToken::LeftEllipsis];
    tokens.extend(numbers(start_page - spill_offset, start_page - 1));
    tokens.extend(window);
    tokens
}

fn spill_right(mut window: Vec<PageToken>, end_page: u64, spill_offset: u64) -> Vec<PageToken> {
    window.extend(numbers(end_page + 1, end_page + spill_offset));
    window.push(PageToken::RightEllipsis);
    window
}

fn spill_both(window: Vec<PageToken>) -> Vec<PageToken> {
    let mut tokens = Vec::with_capacity(window.len() + 2);
    tokens.push(PageToken::LeftEllipsis);
    tokens.extend(window);
    tokens.push(PageToken::RightEllipsis);
    tokens
}

fn wrap_with_boundaries(middle: Vec<PageToken>, total_pages: u64) -> Vec<PageToken> {
    let mut tokens = Vec::with_capacity(middle.len() + 2);
    tokens.push(PageToken::Number(1));
    tokens.extend(middle);
    tokens.push(PageToken::Number(total_pages));
    tokens
}
