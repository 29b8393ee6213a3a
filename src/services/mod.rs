pub mod store;

pub use store::{DocumentStore, InMemoryStore, MongoStore};
