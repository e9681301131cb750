//! Mapping between `roam_dns_domain::RecordType` and `hickory_proto::rr::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use roam_dns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert hickory RecordType → domain RecordType (for incoming queries)
    ///
    /// Returns `None` for types outside the set this server knows by name.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::PTR => Some(RecordType::PTR),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::SOA => Some(RecordType::SOA),
            HickoryRecordType::SRV => Some(RecordType::SRV),
            HickoryRecordType::HTTPS => Some(RecordType::HTTPS),
            _ => None,
        }
    }

    /// Convert domain RecordType → hickory RecordType
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::HTTPS => HickoryRecordType::HTTPS,
        }
    }
}
