use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Emergency,
    Outage,
    Conservation,
    Info,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Emergency,
        AlertKind::Outage,
        AlertKind::Conservation,
        AlertKind::Info,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Emergency => "Emergency",
            AlertKind::Outage => "Outage",
            AlertKind::Conservation => "Conservation",
            AlertKind::Info => "Info",
        }
    }
}

/// A notification published through the alert store.
///
/// Alerts are never deleted; the only field that changes after creation is
/// `read`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Alert {
    /// Relative age at minute granularity, e.g. `"5m ago"`.
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let minutes = (now - self.created_at).num_minutes();
        if minutes < 1 {
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 60 * 24 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / (60 * 24))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn alert_at(created_at: DateTime<Utc>) -> Alert {
        Alert {
            id: "1".into(),
            kind: AlertKind::Outage,
            title: "Power Outage Reported".into(),
            message: "Estimated restoration: 4 PM today.".into(),
            created_at,
            read: false,
        }
    }

    #[test]
    fn test_age_label() {
        let created = Utc.with_ymd_and_hms(2025, 12, 1, 10, 0, 0).unwrap();
        let alert = alert_at(created);
        assert_eq!(alert.age_label(created + Duration::seconds(59)), "just now");
        assert_eq!(alert.age_label(created + Duration::minutes(5)), "5m ago");
        assert_eq!(alert.age_label(created + Duration::minutes(125)), "2h ago");
        assert_eq!(alert.age_label(created + Duration::days(3)), "3d ago");
        // Clock skew never produces a negative age.
        assert_eq!(alert.age_label(created - Duration::minutes(5)), "just now");
    }

    #[test]
    fn test_serialized_layout() {
        let created = Utc.with_ymd_and_hms(2025, 12, 1, 10, 0, 0).unwrap();
        let json = serde_json::to_value(alert_at(created)).unwrap();
        assert_eq!(json["kind"], "outage");
        assert_eq!(json["createdAt"], "2025-12-01T10:00:00Z");
        assert_eq!(json["read"], false);
        assert!(json.get("created_at").is_none());
    }
}
