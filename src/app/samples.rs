//! Sample alerts used to seed an empty log and to simulate server pushes.

use crate::alerts::{AlertError, AlertKind, AlertStore};

pub struct SampleAlert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: &'static str,
}

pub static SAMPLE_ALERTS: [SampleAlert; 5] = [
    SampleAlert {
        kind: AlertKind::Emergency,
        title: "Water Supply Disruption",
        message: "Scheduled maintenance will affect water supply in your area from 10 AM to 2 PM tomorrow.",
    },
    SampleAlert {
        kind: AlertKind::Outage,
        title: "Power Outage Reported",
        message: "Outage reported in nearby areas. Estimated restoration: 4 PM today.",
    },
    SampleAlert {
        kind: AlertKind::Conservation,
        title: "Heat Wave Advisory",
        message: "High temperatures expected this week. Reduce AC usage during peak hours (2-6 PM) to prevent grid overload.",
    },
    SampleAlert {
        kind: AlertKind::Info,
        title: "Water Conservation Week",
        message: "Join the city-wide water conservation initiative. Reduce usage by 10% and earn bonus points!",
    },
    SampleAlert {
        kind: AlertKind::Conservation,
        title: "Peak Demand Alert",
        message: "High electricity demand expected between 6-9 PM. Consider shifting heavy appliance use to off-peak hours.",
    },
];

/// Fill an empty store with the samples, first sample newest. Returns how
/// many alerts were added.
pub fn seed_if_empty(store: &AlertStore) -> Result<usize, AlertError> {
    if !store.get_alerts().is_empty() {
        return Ok(0);
    }
    for sample in SAMPLE_ALERTS.iter().rev() {
        store.send_alert(sample.kind, sample.title, sample.message)?;
    }
    Ok(SAMPLE_ALERTS.len())
}

/// Round-robin over the samples.
#[derive(Debug, Default)]
pub struct SampleCycle {
    next: usize,
}

impl SampleCycle {
    pub fn next_sample(&mut self) -> &'static SampleAlert {
        let sample = &SAMPLE_ALERTS[self.next % SAMPLE_ALERTS.len()];
        self.next = self.next.wrapping_add(1);
        sample
    }
}
