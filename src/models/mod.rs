pub mod inquiry;

pub use inquiry::{Inquiry, INQUIRY_COLLECTION};
