pub mod list_domains;
pub mod resolve_query;
pub mod update_address;

pub use list_domains::ListDomainsUseCase;
pub use resolve_query::{Resolution, ResolveQueryUseCase};
pub use update_address::UpdateAddressUseCase;
