//! # Platform Effects
//!
//! Capabilities a frontend hands to the headless core. Screen controllers
//! never talk to a UI toolkit directly: they raise alerts, push routes and read
//! the clock through these traits, which keeps them testable with recording
//! doubles.

use crate::route::Route;
use chrono::{DateTime, Utc};

/// Severity of a blocking alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A blocking alert dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl Alert {
    /// `"Erro"` alert.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            title: "Erro".to_string(),
            message: message.into(),
        }
    }

    /// `"Sucesso"` alert.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            title: "Sucesso".to_string(),
            message: message.into(),
        }
    }

    /// `"Aviso"` alert.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Warning,
            title: "Aviso".to_string(),
            message: message.into(),
        }
    }

    /// Alert with an explicit title.
    pub fn titled(kind: AlertKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Blocking alert presentation.
pub trait AlertEffects: Send + Sync {
    fn alert(&self, alert: Alert);
}

/// Navigation stack operations.
pub trait NavigationEffects: Send + Sync {
    /// Push `route` onto the stack.
    fn navigate(&self, route: Route);
    /// Pop the current screen.
    fn go_back(&self);
}

/// Wall-clock source.
pub trait ClockEffects: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockEffects for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
