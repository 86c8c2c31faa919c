use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::route::Route;
use crate::app::state::*;
use crate::gesture::{Direction, PullRelease};
use crate::ui;
use chrono::Local;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::AlertsChanged(alerts) => {
            state.set_alerts(alerts);
            vec![]
        }
        AppEvent::RefreshFinished { outcome } => {
            state.pull.complete();
            match outcome {
                Ok(()) => {
                    state.refresh_count += 1;
                    state.last_refreshed = Some(Local::now());
                    state.status_message = Some("Data refreshed!".to_string());
                }
                Err(e) => {
                    state.status_message = Some(format!("Refresh failed: {}", e));
                }
            }
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Keep the spinner moving while a refresh is in flight
            if state.pull.is_refreshing() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Left => step(state, Direction::Previous),
        KeyCode::Right => step(state, Direction::Next),
        KeyCode::Char('b') => vec![Action::Navigate(Route::Alerts)],
        KeyCode::Esc if state.route == Route::Alerts => {
            vec![Action::Navigate(state.config.navigation.start)]
        }
        KeyCode::Char('a') => {
            let sample = state.samples.next_sample();
            vec![Action::SendAlert {
                kind: sample.kind,
                title: sample.title.to_string(),
                message: sample.message.to_string(),
            }]
        }
        KeyCode::Char('m') => vec![Action::MarkAllRead],
        KeyCode::Enter if state.route == Route::Alerts => match state.selected_alert() {
            Some(alert) => vec![Action::MarkRead {
                id: alert.id.clone(),
            }],
            None => vec![],
        },
        KeyCode::Up if state.route == Route::Alerts => {
            state.select_prev_alert();
            vec![]
        }
        KeyCode::Down if state.route == Route::Alerts => {
            state.select_next_alert();
            vec![]
        }
        KeyCode::Up | KeyCode::PageUp => {
            state.scroll_up();
            vec![]
        }
        KeyCode::Down | KeyCode::PageDown => {
            state.scroll_down(ui::scrollable_lines(state));
            vec![]
        }
        _ => vec![],
    }
}

fn step(state: &AppState, direction: Direction) -> Vec<Action> {
    match state.swipe.step(&state.route, direction) {
        Some(route) => vec![Action::Navigate(route)],
        None => vec![],
    }
}

/// Left-button press/drag/release drive both gesture trackers, the same
/// way a touch sequence would.
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    let (x, y) = state.to_units(mouse.column, mouse.row);
    let scroll_offset = f64::from(state.scroll_offset());

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.pull.on_gesture_start(y, scroll_offset);
            state.swipe.on_gesture_start(x, y);
            vec![]
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            state.pull.on_gesture_move(y, scroll_offset);
            state.dirty = true;
            vec![]
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let mut actions = Vec::new();
            match state.pull.release() {
                PullRelease::Refresh => {
                    tracing::debug!("pull crossed threshold, refreshing");
                    actions.push(Action::Refresh);
                }
                PullRelease::Cancelled => tracing::trace!("pull cancelled"),
                PullRelease::Ignored => {}
            }
            let current = state.route;
            if let Some(route) = state.swipe.on_gesture_end(x, y, &current) {
                tracing::debug!(from = ?current, to = ?route, "swipe navigation");
                actions.push(Action::Navigate(route));
            }
            state.dirty = true;
            actions
        }
        MouseEventKind::ScrollUp => {
            state.scroll_up();
            vec![]
        }
        MouseEventKind::ScrollDown => {
            state.scroll_down(ui::scrollable_lines(state));
            vec![]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{Alert, AlertKind};
    use crate::config::AppConfig;
    use chrono::Utc;
    use crossterm::event::KeyEventState;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn drag(state: &mut AppState, from: (u16, u16), to: (u16, u16)) -> Vec<Action> {
        let left = MouseButton::Left;
        let mut actions = handle_event(state, mouse(MouseEventKind::Down(left), from.0, from.1));
        actions.extend(handle_event(state, mouse(MouseEventKind::Drag(left), to.0, to.1)));
        actions.extend(handle_event(state, mouse(MouseEventKind::Up(left), to.0, to.1)));
        actions
    }

    #[test]
    fn test_long_pull_requests_refresh_once() {
        let mut state = AppState::new(AppConfig::default());
        // 12 rows * 16 units = 192 raw, damped to 96
        let actions = drag(&mut state, (20, 2), (20, 14));
        assert_eq!(actions, vec![Action::Refresh]);
        assert!(state.pull.is_refreshing());

        // A second pull while refreshing does nothing
        let actions = drag(&mut state, (20, 2), (20, 14));
        assert!(actions.is_empty());

        handle_event(&mut state, AppEvent::RefreshFinished { outcome: Ok(()) });
        assert!(!state.pull.is_refreshing());
        assert_eq!(state.pull.pull_distance(), 0.0);
        assert_eq!(state.refresh_count, 1);
    }

    #[test]
    fn test_short_pull_does_not_refresh() {
        let mut state = AppState::new(AppConfig::default());
        let actions = drag(&mut state, (20, 2), (20, 5));
        assert!(actions.is_empty());
        assert_eq!(state.pull.pull_distance(), 0.0);
    }

    #[test]
    fn test_pull_ignored_when_page_scrolled() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(&mut state, key(KeyCode::Down));
        let actions = drag(&mut state, (20, 2), (20, 20));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_pull_available_again_after_overscrolling() {
        let mut state = AppState::new(AppConfig::default());
        for _ in 0..200 {
            handle_event(&mut state, mouse(MouseEventKind::ScrollDown, 20, 10));
        }
        assert_eq!(state.scroll_offset(), ui::scrollable_lines(&state) - 1);

        let steps_back = ui::scrollable_lines(&state).div_ceil(3);
        for _ in 0..steps_back {
            handle_event(&mut state, key(KeyCode::Up));
        }
        assert_eq!(state.scroll_offset(), 0);
        assert_eq!(drag(&mut state, (20, 2), (20, 14)), vec![Action::Refresh]);
    }

    #[test]
    fn test_alerts_page_never_scrolls() {
        let mut state = AppState::new(AppConfig::default());
        state.navigate(Route::Alerts);
        handle_event(&mut state, mouse(MouseEventKind::ScrollDown, 20, 10));
        assert_eq!(state.scroll_offset(), 0);
        assert_eq!(drag(&mut state, (20, 2), (20, 14)), vec![Action::Refresh]);
    }

    #[test]
    fn test_failed_refresh_resets_and_reports() {
        let mut state = AppState::new(AppConfig::default());
        drag(&mut state, (20, 2), (20, 14));
        handle_event(
            &mut state,
            AppEvent::RefreshFinished {
                outcome: Err("timed out".into()),
            },
        );
        assert!(!state.pull.is_refreshing());
        assert_eq!(state.refresh_count, 0);
        assert_eq!(state.status_line(), "Refresh failed: timed out");
    }

    #[test]
    fn test_horizontal_drag_navigates() {
        let mut state = AppState::new(AppConfig::default());
        state.navigate(Route::Challenges);
        // 10 columns * 8 units = 80 > 50
        assert_eq!(
            drag(&mut state, (40, 10), (30, 10)),
            vec![Action::Navigate(Route::Impact)]
        );
        assert_eq!(
            drag(&mut state, (30, 10), (40, 10)),
            vec![Action::Navigate(Route::Dashboard)]
        );
    }

    #[test]
    fn test_swipe_outside_route_list_is_noop() {
        let mut state = AppState::new(AppConfig::default());
        state.navigate(Route::Alerts);
        assert!(drag(&mut state, (40, 10), (20, 10)).is_empty());
        assert!(handle_event(&mut state, key(KeyCode::Right)).is_empty());
    }

    #[test]
    fn test_arrow_keys_respect_boundaries() {
        let mut state = AppState::new(AppConfig::default());
        assert!(handle_event(&mut state, key(KeyCode::Left)).is_empty());
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Right)),
            vec![Action::Navigate(Route::Challenges)]
        );
        state.navigate(Route::Settings);
        assert!(handle_event(&mut state, key(KeyCode::Right)).is_empty());
    }

    #[test]
    fn test_alert_keys() {
        let mut state = AppState::new(AppConfig::default());
        state.navigate(Route::Alerts);
        state.set_alerts(
            vec![Alert {
                id: "42".into(),
                kind: AlertKind::Outage,
                title: "Power Outage Reported".into(),
                message: String::new(),
                created_at: Utc::now(),
                read: false,
            }]
            .into(),
        );

        assert_eq!(
            handle_event(&mut state, key(KeyCode::Enter)),
            vec![Action::MarkRead { id: "42".into() }]
        );
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Char('m'))),
            vec![Action::MarkAllRead]
        );
        assert!(matches!(
            handle_event(&mut state, key(KeyCode::Char('a'))).as_slice(),
            [Action::SendAlert { kind: AlertKind::Emergency, .. }]
        ));
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Esc)),
            vec![Action::Navigate(Route::Dashboard)]
        );
    }
}
