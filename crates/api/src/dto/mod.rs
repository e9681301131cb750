pub mod record;

pub use record::{UpdateParams, UpdateResponse};
