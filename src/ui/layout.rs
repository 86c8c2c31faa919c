use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub nav_bar: Rect,
    pub refresh_indicator: Rect,
    pub page: Rect,
    pub status_bar: Rect,
}

/// Split the screen. `indicator_rows` is the height of the pull-to-refresh
/// strip, zero when it is hidden.
pub fn compute_layout(area: Rect, indicator_rows: u16) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Navigation tabs
            Constraint::Length(indicator_rows), // Pull indicator
            Constraint::Min(5),                 // Page
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    AppLayout {
        nav_bar: chunks[0],
        refresh_indicator: chunks[1],
        page: chunks[2],
        status_bar: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_pushes_page_down() {
        let area = Rect::new(0, 0, 80, 24);
        let hidden = compute_layout(area, 0);
        assert_eq!(hidden.refresh_indicator.height, 0);
        assert_eq!(hidden.page.y, 1);
        assert_eq!(hidden.status_bar.y, 23);

        let shown = compute_layout(area, 3);
        assert_eq!(shown.refresh_indicator.height, 3);
        assert_eq!(shown.page.y, 4);
        assert_eq!(shown.page.height, 19);
    }
}
