use crate::app::route::Route;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);
    let mut spans: Vec<Span> = vec![Span::styled(
        " EcoDash ",
        Theme::tab_active().bg(Theme::BG_ELEVATED),
    )];

    for route in Route::ALL {
        let style = if route == state.route {
            Theme::tab_active().add_modifier(Modifier::UNDERLINED)
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(" │ ", Style::default().fg(Theme::BORDER_DIM)));
        spans.push(Span::styled(route.title(), style));

        if route == Route::Alerts {
            let unread = state.unread_count();
            if unread > 0 {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(format!(" {} ", unread), Theme::badge()));
            }
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg), area);
}
