pub mod contact;
pub mod diagnostics;
pub mod health;

pub use contact::submit_contact;
pub use diagnostics::test_database;
pub use health::{health_check, root};
