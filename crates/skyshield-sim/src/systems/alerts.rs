//! Alert banner: derive alerts from this tick's events and age them out.

use skyshield_core::constants::{ALERT_LONG_TICKS, ALERT_SHORT_TICKS};
use skyshield_core::enums::AlertLevel;
use skyshield_core::events::{Alert, SimEvent};

/// Raise an alert for each event that warrants one.
pub fn raise(events: &[SimEvent], alerts: &mut Vec<Alert>, tick: u64) {
    for event in events {
        let (level, message, duration) = match event {
            SimEvent::MirvSplit { .. } => (AlertLevel::Warning, "MIRV SPLIT", ALERT_SHORT_TICKS),
            SimEvent::CityDestroyed { .. } => {
                (AlertLevel::Critical, "CITY DESTROYED", ALERT_LONG_TICKS)
            }
            SimEvent::BaseDestroyed { .. } => {
                (AlertLevel::Critical, "BASE DESTROYED", ALERT_LONG_TICKS)
            }
            SimEvent::BaseDisabled { .. } => (AlertLevel::Warning, "BASE EMP'D", ALERT_LONG_TICKS),
            _ => continue,
        };
        alerts.push(Alert {
            level,
            message: message.to_string(),
            tick,
            remaining_ticks: duration,
        });
    }
}

/// Count every alert down by one tick and drop the expired ones.
pub fn decay(alerts: &mut Vec<Alert>) {
    alerts.retain_mut(|a| {
        a.remaining_ticks = a.remaining_ticks.saturating_sub(1);
        a.remaining_ticks > 0
    });
}
