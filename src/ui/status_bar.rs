use crate::app::route::Route;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.route.path()),
        Style::default().fg(Theme::ACCENT_GREEN).bg(Theme::BG_ELEVATED),
    ));

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = if state.route == Route::Alerts {
        " ↑↓ select  ⏎ read  m all read  a push  esc back  q quit "
    } else {
        " drag ↓ refresh  drag ←→ / ←→ pages  b alerts  q quit "
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        hints,
        Style::default().fg(Theme::TEXT_MUTED).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
