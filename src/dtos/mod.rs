pub mod contact;
pub mod diagnostics;

pub use contact::{ContactInquiry, ContactResponse};
pub use diagnostics::{DiagnosticsResponse, StoreProbe};
