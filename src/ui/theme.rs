use crate::alerts::AlertKind;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_ELEVATED: Color = Color::Rgb(30, 36, 40);
    pub const BORDER_DIM: Color = Color::Rgb(70, 80, 86);
    pub const TEXT_PRIMARY: Color = Color::Rgb(230, 235, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(170, 180, 182);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 120, 124);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ENERGY: Color = Color::Rgb(245, 170, 60);
    pub const WATER: Color = Color::Rgb(80, 180, 235);
    pub const DANGER: Color = Color::Rgb(230, 90, 90);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn value() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn badge() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::DANGER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default().bg(Self::BG_ELEVATED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn alert_kind(kind: AlertKind) -> Style {
        let color = match kind {
            AlertKind::Emergency => Self::DANGER,
            AlertKind::Outage => Self::ENERGY,
            AlertKind::Conservation => Self::ACCENT_GREEN,
            AlertKind::Info => Self::TEXT_SECONDARY,
        };
        Style::default().fg(color)
    }
}
