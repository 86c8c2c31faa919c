//! The static dashboard pages. Figures are fixed sample readings; only the
//! totals and shares are derived.

use crate::app::route::Route;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

struct Usage {
    name: &'static str,
    cost: u32,
}

const ELECTRICITY: [Usage; 5] = [
    Usage { name: "AC", cost: 1800 },
    Usage { name: "Water Heater", cost: 810 },
    Usage { name: "Fridge", cost: 540 },
    Usage { name: "Lights/Fans", cost: 675 },
    Usage { name: "TV/Other", cost: 675 },
];

/// (name, cost, litres)
const WATER: [(&str, u32, u32); 5] = [
    ("Shower/Bath", 700, 6300),
    ("Toilet", 600, 5400),
    ("Washing", 400, 3600),
    ("Kitchen", 200, 1800),
    ("Leaks", 100, 900),
];

const LEADERBOARD: [(&str, u32, bool); 4] = [
    ("Sharma Family", 156, false),
    ("Patel Family", 142, false),
    ("Gupta Family", 128, false),
    ("You (Demo)", 96, true),
];

const BADGES: [(&str, Option<u8>); 4] = [
    ("Energy Saver", None),
    ("Water Guardian", None),
    ("Eco Warrior", None),
    ("30-Day Streak", Some(87)),
];

const IMPACT: [(&str, &str, &str); 4] = [
    ("Energy Saved", "90 units", "0.18 tons CO2"),
    ("Water Saved", "3,600L", "20% reduction"),
    ("Trees Equivalent", "3 trees", "This month"),
    ("Money Saved", "₹1,300", "₹15.6K/year"),
];

/// Percentage of `total` that `part` represents, rounded to a whole number.
fn share(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((f64::from(part) / f64::from(total)) * 100.0).round() as u32
}

fn bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn lines(state: &AppState) -> Vec<Line<'static>> {
    match state.route {
        Route::Dashboard => dashboard(state),
        Route::Challenges => challenges(),
        Route::Impact => impact(),
        Route::Settings => settings(state),
        Route::Alerts => Vec::new(),
    }
}

/// Number of content lines on the current page, before wrapping.
pub fn line_count(state: &AppState) -> u16 {
    u16::try_from(lines(state).len()).unwrap_or(u16::MAX)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = lines(state);

    let block = Block::default()
        .title(format!(" {} ", state.route.title()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll_offset(), 0));
    frame.render_widget(paragraph, area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Theme::title()))
}

fn dashboard(state: &AppState) -> Vec<Line<'static>> {
    let power_total: u32 = ELECTRICITY.iter().map(|u| u.cost).sum();
    let water_cost: u32 = WATER.iter().map(|w| w.1).sum();
    let water_litres: u32 = WATER.iter().map(|w| w.2).sum();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Hi there! ", Theme::label()),
            Span::styled(
                format!("Refreshed {} time(s) this session", state.refresh_count),
                Theme::muted(),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Electricity  ", Style::default().fg(Theme::ENERGY)),
            Span::styled(format!("₹{}", power_total), Theme::value()),
            Span::styled("   Water  ", Style::default().fg(Theme::WATER)),
            Span::styled(format!("{}L / ₹{}", water_litres, water_cost), Theme::value()),
            Span::styled("   Total  ", Theme::label()),
            Span::styled(format!("₹{}", power_total + water_cost), Theme::value()),
        ]),
        Line::from(""),
        heading("Electricity breakdown"),
    ];

    for usage in &ELECTRICITY {
        let pct = share(usage.cost, power_total);
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", usage.name), Theme::label()),
            Span::styled(bar(pct, 20), Style::default().fg(Theme::ENERGY)),
            Span::styled(format!(" {:>3}%  ₹{}", pct, usage.cost), Theme::value()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Water breakdown"));
    for (name, cost, litres) in WATER {
        let pct = share(litres, water_litres);
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", name), Theme::label()),
            Span::styled(bar(pct, 20), Style::default().fg(Theme::WATER)),
            Span::styled(format!(" {:>3}%  {}L  ₹{}", pct, litres, cost), Theme::value()),
        ]));
    }
    lines
}

fn challenges() -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Save Water Challenge"),
        Line::from(vec![
            Span::styled(bar(81, 30), Style::default().fg(Theme::WATER)),
            Span::styled(" 81%", Theme::value()),
        ]),
        Line::from(""),
        heading("Leaderboard"),
    ];
    for (rank, (name, points, is_user)) in LEADERBOARD.iter().enumerate() {
        let style = if *is_user { Theme::tab_active() } else { Theme::label() };
        lines.push(Line::from(Span::styled(
            format!("  {}. {:<16} {} pts", rank + 1, name, points),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(heading("Badges"));
    for (name, progress) in BADGES {
        let text = match progress {
            None => format!("  ✓ {}", name),
            Some(p) => format!("  · {} ({}%)", name, p),
        };
        lines.push(Line::from(Span::styled(text, Theme::label())));
    }
    lines
}

fn impact() -> Vec<Line<'static>> {
    let mut lines = vec![heading("This month")];
    for (label, value, subtext) in IMPACT {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<18}", label), Theme::label()),
            Span::styled(format!("{:<10}", value), Theme::value()),
            Span::styled(subtext, Theme::muted()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(heading("Carbon footprint goal"));
    lines.push(Line::from(vec![
        Span::styled(bar(70, 30), Style::default().fg(Theme::ACCENT_GREEN)),
        Span::styled(" 70%", Theme::value()),
    ]));
    lines
}

fn settings(state: &AppState) -> Vec<Line<'static>> {
    let config = &state.config;
    let routes: Vec<&str> = config.navigation.routes.iter().map(|r| r.path()).collect();
    let entry = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {:<22}", label), Theme::label()),
            Span::styled(value, Theme::value()),
        ])
    };
    vec![
        heading("Gestures"),
        entry("Pull threshold", format!("{}", config.gestures.pull_threshold)),
        entry("Swipe threshold", format!("{}", config.gestures.swipe_threshold)),
        entry(
            "Cell size",
            format!("{}x{}", config.gestures.cell_width, config.gestures.cell_height),
        ),
        Line::from(""),
        heading("Navigation"),
        entry("Swipe order", routes.join(" → ")),
        Line::from(""),
        heading("Alerts"),
        entry("Data directory", config.alerts.data_dir.clone()),
        entry(
            "Demo push",
            match config.alerts.demo_push_secs {
                Some(secs) => format!("every {}s", secs),
                None => "off".to_string(),
            },
        ),
        Line::from(""),
        heading("Logging"),
        entry(
            "Log file",
            if config.logging.enabled {
                config.logging.log_dir.clone()
            } else {
                "disabled".to_string()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share() {
        assert_eq!(share(1800, 4500), 40);
        assert_eq!(share(900, 18000), 5);
        assert_eq!(share(1, 0), 0);
    }

    #[test]
    fn test_breakdown_shares_sum_to_whole() {
        let total: u32 = ELECTRICITY.iter().map(|u| u.cost).sum();
        let shares: u32 = ELECTRICITY.iter().map(|u| share(u.cost, total)).sum();
        assert_eq!(total, 4500);
        assert_eq!(shares, 100);
    }

    #[test]
    fn test_line_count_per_page() {
        use crate::config::AppConfig;

        let mut state = AppState::new(AppConfig::default());
        // greeting, blank, totals, blank, heading + 5, blank, heading + 5
        assert_eq!(line_count(&state), 17);
        state.navigate(Route::Alerts);
        assert_eq!(line_count(&state), 0);
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(50, 10).chars().count(), 10);
        assert_eq!(bar(150, 10), "█".repeat(10));
    }
}
