mod alerts_page;
mod layout;
mod nav_bar;
mod pages;
mod refresh_indicator;
mod status_bar;
mod theme;

use crate::app::route::Route;
use crate::app::state::AppState;
use ratatui::prelude::*;

/// Lines the current page can scroll through. The alerts page moves its
/// selection instead, so it has none.
pub fn scrollable_lines(state: &AppState) -> u16 {
    match state.route {
        Route::Alerts => 0,
        _ => pages::line_count(state),
    }
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, refresh_indicator::rows(state));

    nav_bar::render(frame, app_layout.nav_bar, state);
    refresh_indicator::render(frame, app_layout.refresh_indicator, state);
    match state.route {
        Route::Alerts => alerts_page::render(frame, app_layout.page, state),
        _ => pages::render(frame, app_layout.page, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
