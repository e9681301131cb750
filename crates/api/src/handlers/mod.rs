pub mod health;
pub mod records;

pub use health::health_check;
pub use records::{list_domains, update_record};
