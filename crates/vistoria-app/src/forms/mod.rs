//! Form-level UI state shared by the screens.

pub mod banner;
pub mod fields;
pub mod picker;

pub use banner::SuccessBanner;
pub use fields::FieldErrors;
pub use picker::{InspectionPicker, PickerGroup, PickerState};
