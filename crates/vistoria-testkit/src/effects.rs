//! Recording and fixed-value effect doubles.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use vistoria_core::{Alert, AlertEffects, ClockEffects, NavigationEffects, Route};
use vistoria_transport::Reachability;

// =============================================================================
// Alerts
// =============================================================================

/// Captures every alert raised.
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingAlerts {
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.alerts().into_iter().map(|a| a.message).collect()
    }

    pub fn last(&self) -> Option<Alert> {
        self.alerts.lock().unwrap().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.alerts.lock().unwrap().clear();
    }
}

impl AlertEffects for RecordingAlerts {
    fn alert(&self, alert: Alert) {
        self.alerts.lock().unwrap().push(alert);
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// One navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Navigate(Route),
    Back,
}

/// Captures navigation requests in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Routes pushed, ignoring back events.
    pub fn routes(&self) -> Vec<Route> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                NavEvent::Navigate(route) => Some(route),
                NavEvent::Back => None,
            })
            .collect()
    }

    pub fn back_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, NavEvent::Back))
            .count()
    }
}

impl NavigationEffects for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.events.lock().unwrap().push(NavEvent::Navigate(route));
    }

    fn go_back(&self) {
        self.events.lock().unwrap().push(NavEvent::Back);
    }
}

// =============================================================================
// Clock
// =============================================================================

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(at),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock().unwrap() = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for ManualClock {
    /// 2024-03-17T10:00:00Z
    fn default() -> Self {
        Self::new(Utc.with_ymd_and_hms(2024, 3, 17, 10, 0, 0).unwrap())
    }
}

impl ClockEffects for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// =============================================================================
// Reachability
// =============================================================================

/// Reachability answer fixed by the test.
#[derive(Debug)]
pub struct StaticReachability {
    connected: AtomicBool,
}

impl StaticReachability {
    pub fn online() -> Self {
        Self {
            connected: AtomicBool::new(true),
        }
    }

    pub fn offline() -> Self {
        Self {
            connected: AtomicBool::new(false),
        }
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }
}

impl Default for StaticReachability {
    fn default() -> Self {
        Self::online()
    }
}

#[async_trait]
impl Reachability for StaticReachability {
    async fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
