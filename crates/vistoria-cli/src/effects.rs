//! Terminal implementations of the platform effects.

use vistoria_core::{Alert, AlertEffects, AlertKind, NavigationEffects, Route};

/// Prints alerts to stderr, keeping stdout for command output.
pub struct ConsoleAlerts;

impl AlertEffects for ConsoleAlerts {
    fn alert(&self, alert: Alert) {
        let marker = match alert.kind {
            AlertKind::Error => "!",
            AlertKind::Warning => "~",
            AlertKind::Info | AlertKind::Success => "*",
        };
        eprintln!("{marker} {}: {}", alert.title, alert.message);
    }
}

/// There is no navigation stack in a terminal; requests are only logged.
pub struct LoggedNavigator;

impl NavigationEffects for LoggedNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = route.name(), "navigate");
    }

    fn go_back(&self) {
        tracing::debug!("navigate back");
    }
}
