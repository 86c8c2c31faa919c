use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Height of the indicator strip. Mirrors the pull distance while
/// dragging and stays at the threshold while refreshing.
pub fn rows(state: &AppState) -> u16 {
    let pull = &state.pull;
    if !pull.indicator_visible() {
        return 0;
    }
    let distance = if pull.is_refreshing() {
        pull.config().threshold
    } else {
        pull.pull_distance()
    };
    let cell_height = state.config.gestures.cell_height.max(1.0);
    (distance / cell_height).ceil().clamp(1.0, f64::from(u8::MAX)) as u16
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }
    let pull = &state.pull;

    let (text, style) = if pull.is_refreshing() {
        let spin = SPINNER[(state.tick_count as usize) % SPINNER.len()];
        (format!("{} Refreshing", spin), Theme::tab_active())
    } else if pull.progress() >= 1.0 {
        ("↑ Release to refresh".to_string(), Theme::tab_active())
    } else {
        ("↓ Pull to refresh".to_string(), Theme::label())
    };

    let label_area = Rect { height: 1, ..area };
    frame.render_widget(Paragraph::new(Span::styled(text, style)).centered(), label_area);

    if area.height > 1 && !pull.is_refreshing() {
        let gauge_area = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Theme::ACCENT_GREEN))
            .ratio(pull.progress().clamp(0.0, 1.0))
            .label("");
        frame.render_widget(gauge, gauge_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_rows_follow_pull_state() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(rows(&state), 0);

        state.pull.on_gesture_start(0.0, 0.0);
        state.pull.on_gesture_move(100.0, 0.0);
        // 50 units over 16-unit rows
        assert_eq!(rows(&state), 4);

        state.pull.on_gesture_move(1000.0, 0.0);
        assert_eq!(rows(&state), 8);

        state.pull.release();
        // Pinned to the 80-unit threshold
        assert_eq!(rows(&state), 5);

        state.pull.complete();
        assert_eq!(rows(&state), 0);
    }
}
