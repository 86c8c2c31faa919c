use crate::alerts::AlertKind;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use chrono::Utc;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    render_summary(frame, chunks[0], state);
    render_list(frame, chunks[1], state);
}

fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let unread = state.unread_count();
    let headline = if unread > 0 {
        Span::styled(format!(" {} unread notifications", unread), Theme::value())
    } else {
        Span::styled(" All caught up!", Theme::tab_active())
    };

    let mut chips = vec![Span::styled(
        format!(" All ({}) ", state.alerts.len()),
        Theme::tab_active(),
    )];
    for kind in AlertKind::ALL {
        let count = state.alerts.iter().filter(|a| a.kind == kind).count();
        chips.push(Span::styled(
            format!(" {} ({}) ", kind.label(), count),
            Theme::alert_kind(kind),
        ));
    }

    let text = vec![Line::from(headline), Line::from(chips)];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let now = Utc::now();
    let items: Vec<ListItem> = state
        .alerts
        .iter()
        .map(|alert| {
            let marker = if alert.read { "  " } else { "● " };
            let title_style = if alert.read {
                Theme::label()
            } else {
                Theme::value()
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, Theme::alert_kind(alert.kind)),
                    Span::styled(
                        format!("[{}] ", alert.kind.label()),
                        Theme::alert_kind(alert.kind),
                    ),
                    Span::styled(alert.title.clone(), title_style),
                    Span::styled(format!("  {}", alert.age_label(now)), Theme::muted()),
                ]),
                Line::from(Span::styled(format!("    {}", alert.message), Theme::muted())),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Alerts ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled(" No alerts yet", Theme::muted())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::selected());
    let mut list_state = ListState::default().with_selected(Some(state.selected_alert));
    frame.render_stateful_widget(list, area, &mut list_state);
}
