//! # Screen Controllers
//!
//! One controller per navigation route. Controllers own the screen-local
//! state (form fields, tabs, pickers, modes), call workflows and the gateway,
//! and report through the injected alert and navigation effects. Rendering
//! is left to the frontend.

pub mod inspection_details;
pub mod login;
pub mod new_client;
pub mod new_inspection;
pub mod shared_list;

pub use inspection_details::{DetailMode, EditBuffer, InspectionDetailsScreen};
pub use login::{logout, LoginOutcome, LoginScreen};
pub use new_client::{ClientField, ClientSubmitOutcome, NewClientScreen};
pub use new_inspection::{InspectionField, InspectionForm, NewInspectionScreen, SubmissionState};
pub use shared_list::{ListTab, SharedListScreen, VistoriaRow};
