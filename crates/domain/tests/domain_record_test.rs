use roam_dns_domain::DomainRecord;

#[test]
fn test_domain_record_creation() {
    let record = DomainRecord::new("home.example.com", "203.0.113.7");

    assert_eq!(record.domain.as_ref(), "home.example.com");
    assert_eq!(record.address.as_ref(), "203.0.113.7");
}

// ── normalize_domain ──────────────────────────────────────────────────────────

#[test]
fn test_normalize_lowercases() {
    assert_eq!(
        DomainRecord::normalize_domain("Example.COM"),
        "example.com"
    );
}

#[test]
fn test_normalize_strips_trailing_dot() {
    assert_eq!(
        DomainRecord::normalize_domain("example.com."),
        "example.com"
    );
}

#[test]
fn test_normalize_combined() {
    assert_eq!(
        DomainRecord::normalize_domain("Host.Example.Com."),
        "host.example.com"
    );
}

#[test]
fn test_normalize_already_normal() {
    assert_eq!(
        DomainRecord::normalize_domain("host.example.com"),
        "host.example.com"
    );
}

// ── validate_domain ───────────────────────────────────────────────────────────

#[test]
fn test_validate_domain_valid() {
    assert!(DomainRecord::validate_domain("example.com").is_ok());
    assert!(DomainRecord::validate_domain("a").is_ok());
    assert!(DomainRecord::validate_domain("sub.domain.example.com").is_ok());
}

#[test]
fn test_validate_domain_empty() {
    assert!(DomainRecord::validate_domain("").is_err());
}

#[test]
fn test_validate_domain_too_long() {
    let long = "a".repeat(254);
    assert!(DomainRecord::validate_domain(&long).is_err());
}

// ── validate_address ──────────────────────────────────────────────────────────

#[test]
fn test_validate_address_valid() {
    assert!(DomainRecord::validate_address("10.0.0.1").is_ok());
}

#[test]
fn test_validate_address_empty() {
    assert!(DomainRecord::validate_address("").is_err());
}

#[test]
fn test_validate_address_is_permissive() {
    // Address format is not enforced on registration.
    assert!(DomainRecord::validate_address("not-an-ip").is_ok());
}
