use crate::dns::record_type_map::RecordTypeMapper;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{Name, RData, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use roam_dns_application::use_cases::{Resolution, ResolveQueryUseCase};
use roam_dns_domain::DnsQuery;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error};

/// Bridges the hickory wire machinery to the resolution use case.
///
/// One instance serves every listener; it holds no state of its own beyond
/// the shared use case.
#[derive(Clone)]
pub struct DnsServerHandler {
    resolver: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolver }
    }

    fn normalize_domain(domain: &str) -> String {
        domain.trim_end_matches('.').to_string()
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let domain = Self::normalize_domain(&query.name().to_utf8());
        let hickory_record_type = query.query_type();
        let client_ip = request.src().ip();

        debug!(
            domain = %domain,
            record_type = ?hickory_record_type,
            client = %client_ip,
            "DNS query received"
        );

        // A type we cannot even name gets the same treatment as any other
        // non-address query: an empty NXDOMAIN reply, never a refusal.
        let record_type = match RecordTypeMapper::from_hickory(hickory_record_type) {
            Some(rt) => rt,
            None => {
                debug!(record_type = ?hickory_record_type, "Unmapped query type, answering NXDOMAIN");
                return send_error_response(
                    request,
                    &mut response_handle,
                    ResponseCode::NXDomain,
                )
                .await;
            }
        };

        let dns_query = DnsQuery::new(domain.clone(), record_type);

        match self.resolver.execute(&dns_query).await {
            Resolution::Answer(record) => {
                let name = Name::from_str(&record.domain).unwrap_or_else(|_| Name::root());
                let rdata = RData::A(hickory_proto::rr::rdata::A(record.address));
                let answers = vec![Record::from_rdata(name, record.ttl, rdata)];

                debug!(
                    domain = %record.domain,
                    address = %record.address,
                    ttl = record.ttl,
                    "Sending authoritative answer"
                );

                let builder = MessageResponseBuilder::from_message_request(request);
                let mut header = *request.header();
                header.set_authoritative(true);
                let response = builder.build(header, answers.iter(), &[], &[], &[]);

                match response_handle.send_response(response).await {
                    Ok(info) => info,
                    Err(e) => {
                        error!(error = %e, "Failed to send response");
                        ResponseInfo::from(*request.header())
                    }
                }
            }
            Resolution::NxDomain => {
                send_error_response(request, &mut response_handle, ResponseCode::NXDomain).await
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending response with no answers");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_authoritative(true);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
