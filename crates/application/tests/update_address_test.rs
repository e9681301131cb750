mod helpers;

use helpers::MockRecordRepository;
use roam_dns_application::ports::RecordRepository;
use roam_dns_application::use_cases::UpdateAddressUseCase;
use roam_dns_domain::DomainError;
use std::sync::Arc;

fn make_use_case(repository: Arc<MockRecordRepository>) -> UpdateAddressUseCase {
    UpdateAddressUseCase::new(repository)
}

#[tokio::test]
async fn test_valid_update_is_applied_and_echoed_back() {
    let repository = Arc::new(MockRecordRepository::new());
    let use_case = make_use_case(repository.clone());

    let record = use_case
        .execute("home.example.com", "203.0.113.7")
        .await
        .unwrap();

    assert_eq!(record.domain.as_ref(), "home.example.com");
    assert_eq!(record.address.as_ref(), "203.0.113.7");
    assert_eq!(
        repository.get("home.example.com").await.as_deref(),
        Some("203.0.113.7")
    );
}

#[tokio::test]
async fn test_domain_is_normalized_on_update() {
    let repository = Arc::new(MockRecordRepository::new());
    let use_case = make_use_case(repository.clone());

    let record = use_case
        .execute("Home.Example.COM.", "203.0.113.7")
        .await
        .unwrap();

    assert_eq!(record.domain.as_ref(), "home.example.com");
    assert_eq!(
        repository.get("home.example.com").await.as_deref(),
        Some("203.0.113.7")
    );
}

#[tokio::test]
async fn test_empty_domain_is_rejected_before_the_repository() {
    let repository = Arc::new(MockRecordRepository::new());
    let use_case = make_use_case(repository.clone());

    let result = use_case.execute("", "203.0.113.7").await;

    assert!(matches!(result, Err(DomainError::InvalidDomainName(_))));
    assert_eq!(repository.len().await, 0);
}

#[tokio::test]
async fn test_empty_address_is_rejected_before_the_repository() {
    let repository = Arc::new(MockRecordRepository::new());
    let use_case = make_use_case(repository.clone());

    let result = use_case.execute("home.example.com", "").await;

    assert!(matches!(result, Err(DomainError::InvalidAddress(_))));
    assert_eq!(repository.len().await, 0);
}

#[tokio::test]
async fn test_repeating_an_update_is_idempotent() {
    let repository = Arc::new(MockRecordRepository::new());
    let use_case = make_use_case(repository.clone());

    use_case
        .execute("home.example.com", "203.0.113.7")
        .await
        .unwrap();
    use_case
        .execute("home.example.com", "203.0.113.7")
        .await
        .unwrap();

    assert_eq!(repository.len().await, 1);
    assert_eq!(
        repository.get("home.example.com").await.as_deref(),
        Some("203.0.113.7")
    );
}

#[tokio::test]
async fn test_last_write_wins() {
    let repository = Arc::new(MockRecordRepository::new());
    let use_case = make_use_case(repository.clone());

    use_case
        .execute("home.example.com", "203.0.113.7")
        .await
        .unwrap();
    use_case
        .execute("home.example.com", "198.51.100.4")
        .await
        .unwrap();

    assert_eq!(
        repository.get("home.example.com").await.as_deref(),
        Some("198.51.100.4")
    );
}

#[tokio::test]
async fn test_persistence_failure_surfaces_as_persistence_error() {
    let repository = Arc::new(MockRecordRepository::new());
    repository.fail_persistence();
    let use_case = make_use_case(repository.clone());

    let result = use_case.execute("home.example.com", "203.0.113.7").await;

    assert!(matches!(result, Err(DomainError::PersistenceError(_))));
    assert_eq!(repository.get("home.example.com").await, None);
}

#[tokio::test]
async fn test_listing_reflects_all_updates() {
    let repository = Arc::new(MockRecordRepository::new());
    let use_case = make_use_case(repository.clone());

    use_case
        .execute("beta.example.com", "10.0.0.2")
        .await
        .unwrap();
    use_case
        .execute("alpha.example.com", "10.0.0.1")
        .await
        .unwrap();

    let listing = repository.snapshot().await;
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].domain.as_ref(), "alpha.example.com");
    assert_eq!(listing[1].domain.as_ref(), "beta.example.com");
}
