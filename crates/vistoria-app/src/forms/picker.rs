//! # Dropdown Pickers
//!
//! Each dropdown is either [`PickerState::Closed`] or [`PickerState::Open`].
//! A [`PickerGroup`] tracks the dropdowns of one screen and keeps at most one
//! of them open.

use serde::{Deserialize, Serialize};

/// State of one dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickerState {
    #[default]
    Closed,
    Open,
}

/// Dropdowns on the inspection forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InspectionPicker {
    Tipo,
    Categoria,
    Anomalia,
}

/// Mutually exclusive set of dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerGroup<K> {
    open: Option<K>,
}

impl<K> Default for PickerGroup<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: Copy + Eq> PickerGroup<K> {
    /// Open `picker`, closing whichever was open.
    pub fn open(&mut self, picker: K) {
        self.open = Some(picker);
    }

    pub fn close(&mut self, picker: K) {
        if self.open == Some(picker) {
            self.open = None;
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn toggle(&mut self, picker: K) {
        match self.state(picker) {
            PickerState::Open => self.close(picker),
            PickerState::Closed => self.open(picker),
        }
    }

    #[must_use]
    pub fn state(&self, picker: K) -> PickerState {
        if self.open == Some(picker) {
            PickerState::Open
        } else {
            PickerState::Closed
        }
    }

    #[must_use]
    pub fn open_picker(&self) -> Option<K> {
        self.open
    }
}
