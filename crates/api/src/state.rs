use roam_dns_application::use_cases::{ListDomainsUseCase, UpdateAddressUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub update_address: Arc<UpdateAddressUseCase>,
    pub list_domains: Arc<ListDomainsUseCase>,
}
