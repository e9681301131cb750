use roam_dns_application::ports::RecordRepository;
use roam_dns_application::use_cases::{
    ListDomainsUseCase, ResolveQueryUseCase, UpdateAddressUseCase,
};
use roam_dns_domain::Config;
use roam_dns_infrastructure::repositories::JsonFileRecordRepository;
use std::sync::Arc;

pub struct UseCases {
    pub resolve_query: Arc<ResolveQueryUseCase>,
    pub update_address: Arc<UpdateAddressUseCase>,
    pub list_domains: Arc<ListDomainsUseCase>,
}

impl UseCases {
    pub fn new(repository: Arc<JsonFileRecordRepository>, config: &Config) -> Self {
        let repository: Arc<dyn RecordRepository> = repository;

        Self {
            resolve_query: Arc::new(ResolveQueryUseCase::new(
                Arc::clone(&repository),
                config.dns.record_ttl,
            )),
            update_address: Arc::new(UpdateAddressUseCase::new(Arc::clone(&repository))),
            list_domains: Arc::new(ListDomainsUseCase::new(repository)),
        }
    }
}
