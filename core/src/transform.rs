//! The two-stage response-transform pipeline.
//!
//! # Design
//! Stage one ([`normalize`]) collapses the three independently optional
//! transport signals into a [`StandardResponse`]: either a validated HTTP
//! response with an optional payload, or exactly one [`TransportError`].
//! Stage two ([`decode`]) is generic over the endpoint and maps a standard
//! response into the endpoint's typed result, consulting the endpoint's
//! status table for non-2xx codes and decoding the payload for 2xx ones.
//! [`resolve`] is their composition and the only path from raw signals to a
//! typed result. Per-endpoint code contributes policy (request shape, status
//! table, payload type) through the [`Endpoint`] trait, never flow.
//!
//! Both stages are pure functions over their inputs: feeding the same input
//! twice yields the same output, and neither stage panics.

use serde::de::DeserializeOwned;

use crate::error::{EndpointError, TransportError};
use crate::http::{wire_code, HttpRequest, HttpResponse, TransportFault, TransportOutcome};

/// One logical API operation: its parameters, request shape, payload type,
/// and failure taxonomy.
pub trait Endpoint {
    /// Decoded payload type of a successful call.
    type Value: DeserializeOwned;
    /// Endpoint-specific failure taxonomy.
    type Error: EndpointError;

    /// Describe the HTTP request for this call against `base_url`.
    ///
    /// The only fallible step is request-body encoding, which endpoints
    /// without a body never hit.
    fn request(&self, base_url: &str) -> Result<HttpRequest, Self::Error>;
}

/// The normalized result of one round-trip: either a validated HTTP response
/// (status interpretation deferred to the decoder) or one specific transport
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandardResponse {
    Success {
        response: HttpResponse,
        body: Option<Vec<u8>>,
    },
    Failure(TransportError),
}

/// Stage one: collapse the raw signals into a [`StandardResponse`].
///
/// Priority order, most specific signal first:
/// 1. An error signal wins over everything, even populated 2xx metadata.
/// 2. No response at all is [`TransportError::NoResponse`].
/// 3. A response without a status line is [`TransportError::NotHttp`].
/// 4. Otherwise success. The body may still be absent; only the endpoint's
///    decoder can judge whether that is acceptable.
pub fn normalize(outcome: TransportOutcome) -> StandardResponse {
    let TransportOutcome {
        body,
        response,
        error,
    } = outcome;

    if let Some(fault) = error {
        return StandardResponse::Failure(classify(fault));
    }
    let Some(raw) = response else {
        return StandardResponse::Failure(TransportError::NoResponse);
    };
    let Some(status) = raw.status else {
        return StandardResponse::Failure(TransportError::NotHttp);
    };

    StandardResponse::Success {
        response: HttpResponse {
            status,
            headers: raw.headers,
        },
        body,
    }
}

/// Map a raw fault onto the transport taxonomy. Total: unrecognized codes
/// keep their code and detail, host errors keep their detail.
fn classify(fault: TransportFault) -> TransportError {
    match fault {
        TransportFault::Wire { code, detail } => match code {
            wire_code::TIMED_OUT => TransportError::TimedOut,
            wire_code::CANNOT_CONNECT => TransportError::CannotConnect,
            wire_code::HOST_NOT_FOUND => TransportError::HostNotFound,
            wire_code::CANCELLED => TransportError::Cancelled,
            _ => TransportError::Wire { code, detail },
        },
        TransportFault::Host { detail } => TransportError::Other(detail),
    }
}

/// Stage two: map a standard response into the endpoint's typed result.
///
/// Transport failures are wrapped and returned untouched. For HTTP
/// responses, the status class decides alone; payload content never
/// influences which non-2xx variant is produced. Non-2xx statuses go through
/// the endpoint's status table with a catch-all for codes the contract never
/// documents; 2xx responses must carry a decodable body, and decode failures
/// keep the raw bytes.
pub fn decode<E: Endpoint>(response: StandardResponse) -> Result<E::Value, E::Error> {
    match response {
        StandardResponse::Failure(error) => Err(E::Error::transport(error)),
        StandardResponse::Success { response, body } => {
            if !response.is_success() {
                return Err(E::Error::classify_status(response.status)
                    .unwrap_or_else(|| E::Error::unexpected_status(response.status)));
            }
            let Some(bytes) = body else {
                return Err(E::Error::missing_body());
            };
            serde_json::from_slice(&bytes).map_err(|_| E::Error::malformed_body(bytes))
        }
    }
}

/// Both stages in sequence: the canonical path from the raw transport triple
/// to a typed endpoint result.
pub fn resolve<E: Endpoint>(outcome: TransportOutcome) -> Result<E::Value, E::Error> {
    decode::<E>(normalize(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FetchPost;
    use crate::error::FetchPostError;
    use crate::http::RawResponse;

    fn wire(code: i32, detail: &str) -> TransportFault {
        TransportFault::Wire {
            code,
            detail: detail.to_string(),
        }
    }

    fn fault_only(fault: TransportFault) -> TransportOutcome {
        TransportOutcome {
            body: None,
            response: None,
            error: Some(fault),
        }
    }

    fn http_ok(body: &[u8]) -> TransportOutcome {
        TransportOutcome {
            body: Some(body.to_vec()),
            response: Some(RawResponse {
                status: Some(200),
                headers: Vec::new(),
            }),
            error: None,
        }
    }

    #[test]
    fn error_signal_wins_over_success_metadata() {
        let mut outcome = http_ok(br#"{"Title":"A","Body":"B"}"#);
        outcome.error = Some(wire(wire_code::CANCELLED, "superseded"));

        let normalized = normalize(outcome);

        assert_eq!(
            normalized,
            StandardResponse::Failure(TransportError::Cancelled)
        );
    }

    #[test]
    fn no_signals_is_no_response() {
        let outcome = TransportOutcome {
            body: None,
            response: None,
            error: None,
        };

        assert_eq!(
            normalize(outcome),
            StandardResponse::Failure(TransportError::NoResponse)
        );
    }

    #[test]
    fn body_without_response_is_still_no_response() {
        let outcome = TransportOutcome {
            body: Some(b"stray".to_vec()),
            response: None,
            error: None,
        };

        assert_eq!(
            normalize(outcome),
            StandardResponse::Failure(TransportError::NoResponse)
        );
    }

    #[test]
    fn response_without_status_is_not_http() {
        let outcome = TransportOutcome {
            body: Some(b"data".to_vec()),
            response: Some(RawResponse {
                status: None,
                headers: vec![("x-proto".to_string(), "gopher".to_string())],
            }),
            error: None,
        };

        assert_eq!(
            normalize(outcome),
            StandardResponse::Failure(TransportError::NotHttp)
        );
    }

    #[test]
    fn well_known_wire_codes_get_dedicated_variants() {
        let cases = [
            (wire_code::TIMED_OUT, TransportError::TimedOut),
            (wire_code::CANNOT_CONNECT, TransportError::CannotConnect),
            (wire_code::HOST_NOT_FOUND, TransportError::HostNotFound),
            (wire_code::CANCELLED, TransportError::Cancelled),
        ];

        for (code, expected) in cases {
            let normalized = normalize(fault_only(wire(code, "ignored")));
            assert_eq!(normalized, StandardResponse::Failure(expected));
        }
    }

    #[test]
    fn unknown_wire_code_is_preserved() {
        let normalized = normalize(fault_only(wire(-1009, "offline")));

        assert_eq!(
            normalized,
            StandardResponse::Failure(TransportError::Wire {
                code: -1009,
                detail: "offline".to_string(),
            })
        );
    }

    #[test]
    fn host_fault_is_preserved_as_other() {
        let normalized = normalize(fault_only(TransportFault::Host {
            detail: "runtime gave up".to_string(),
        }));

        assert_eq!(
            normalized,
            StandardResponse::Failure(TransportError::Other(
                "runtime gave up".to_string()
            ))
        );
    }

    #[test]
    fn success_passes_status_headers_and_body_through() {
        let outcome = TransportOutcome {
            body: Some(b"payload".to_vec()),
            response: Some(RawResponse {
                status: Some(201),
                headers: vec![("content-type".to_string(), "application/json".to_string())],
            }),
            error: None,
        };

        let normalized = normalize(outcome);

        assert_eq!(
            normalized,
            StandardResponse::Success {
                response: HttpResponse {
                    status: 201,
                    headers: vec![(
                        "content-type".to_string(),
                        "application/json".to_string()
                    )],
                },
                body: Some(b"payload".to_vec()),
            }
        );
    }

    #[test]
    fn success_with_absent_body_stays_absent() {
        let outcome = TransportOutcome {
            body: None,
            response: Some(RawResponse {
                status: Some(200),
                headers: Vec::new(),
            }),
            error: None,
        };

        let normalized = normalize(outcome);

        assert!(matches!(
            normalized,
            StandardResponse::Success { body: None, .. }
        ));
    }

    #[test]
    fn normalize_is_deterministic() {
        let outcome = http_ok(br#"{"Title":"A","Body":"B"}"#);

        assert_eq!(normalize(outcome.clone()), normalize(outcome));
    }

    #[test]
    fn resolve_wraps_transport_failure_in_endpoint_error() {
        let outcome = fault_only(wire(wire_code::TIMED_OUT, ""));

        let result = resolve::<FetchPost>(outcome);

        assert_eq!(
            result,
            Err(FetchPostError::Transport(TransportError::TimedOut))
        );
    }

    #[test]
    fn resolve_is_deterministic() {
        let outcome = http_ok(br#"{"Title":"A","Body":"B"}"#);

        let first = resolve::<FetchPost>(outcome.clone());
        let second = resolve::<FetchPost>(outcome);

        assert_eq!(first, second);
        assert!(first.is_ok());
    }
}
