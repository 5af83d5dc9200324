//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and transport results as plain data.
//! The core crate builds `HttpRequest` values and consumes `TransportOutcome`
//! values without ever touching the network — the caller (host) is
//! responsible for executing the actual I/O. A real transport reports its
//! result as three independently optional signals (body bytes, response
//! metadata, error), and `TransportOutcome` preserves that shape verbatim so
//! the normalizer in [`crate::transform`] is the single place where the
//! combinations are interpreted.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed to
//! whatever executes them without lifetime concerns.

use std::time::Duration;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by [`Endpoint::request`](crate::transform::Endpoint::request). The
/// caller is responsible for executing this request against the network,
/// honoring `timeout` and `ignore_local_cache`, and assembling the
/// corresponding [`TransportOutcome`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    /// Deadline for the whole round-trip.
    pub timeout: Duration,
    /// Instructs the transport to bypass any local response cache.
    pub ignore_local_cache: bool,
}

/// Response metadata as delivered by the transport, unvalidated.
///
/// `status` is `None` when the transport produced a response that is not
/// HTTP-shaped (no status line). The normalizer rejects such responses as
/// [`TransportError::NotHttp`](crate::error::TransportError::NotHttp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: Option<u16>,
    pub headers: Vec<(String, String)>,
}

/// Validated HTTP response metadata.
///
/// Only constructed by the normalizer, and only when the transport produced
/// an HTTP-shaped response. Carries no body: the payload travels separately
/// and may be absent even on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx success class.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Well-known wire-level fault codes.
///
/// Hosts map their transport's native failures onto these codes before
/// handing the outcome to the core. The normalizer gives exactly this subset
/// dedicated [`TransportError`](crate::error::TransportError) variants; every
/// other code lands in the `Wire` catch-all with the code preserved.
pub mod wire_code {
    pub const CANCELLED: i32 = -999;
    pub const TIMED_OUT: i32 = -1001;
    pub const HOST_NOT_FOUND: i32 = -1003;
    pub const CANNOT_CONNECT: i32 = -1004;
}

/// Raw error signal from the transport, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFault {
    /// A failure reported by the transport itself, tagged with a wire-level
    /// code (see [`wire_code`] for the well-known subset).
    Wire { code: i32, detail: String },
    /// Any other error surfaced by the host, with no wire-level code.
    Host { detail: String },
}

/// The raw result of one transport round-trip.
///
/// All three fields are independently optional at this boundary; only the
/// normalizer decides which combination means what. Hosts fill in everything
/// they have: a body read that dies halfway may legitimately carry response
/// metadata *and* an error, and the error wins.
#[derive(Debug, Clone)]
pub struct TransportOutcome {
    pub body: Option<Vec<u8>>,
    pub response: Option<RawResponse>,
    pub error: Option<TransportFault>,
}
