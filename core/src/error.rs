//! Failure taxonomies for the blog API client.
//!
//! # Design
//! Failures live in two layers. [`TransportError`] is shared by every
//! endpoint and classifies everything that can go wrong before a usable HTTP
//! response exists. Each endpoint then has its own enum that embeds the
//! transport layer as one variant and adds only the cases its backend
//! contract can actually produce; the list endpoint, for example, has no
//! not-found case. Catch-all variants keep the original code, status, or
//! bytes so no information is dropped: every possible outcome of a call maps
//! to exactly one variant somewhere.

use thiserror::Error;

/// Transport-level failure, classified by the normalizer from the raw
/// signals of one round-trip.
///
/// The first four variants are the well-known wire faults callers react to
/// specifically. `Wire` and `Other` are the catch-alls for, respectively,
/// transport faults with an unrecognized code and host errors with no code
/// at all. `NoResponse` and `NotHttp` cover transports that reported neither
/// an error nor usable HTTP metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request exceeded its deadline.
    #[error("request timed out")]
    TimedOut,

    /// The server could not be reached.
    #[error("cannot connect to host")]
    CannotConnect,

    /// The host name did not resolve.
    #[error("host not found")]
    HostNotFound,

    /// The request was cancelled before completing, typically because a
    /// newer call superseded it.
    #[error("request was cancelled")]
    Cancelled,

    /// Transport fault with a code outside the well-known set.
    #[error("transport fault {code}: {detail}")]
    Wire { code: i32, detail: String },

    /// Host-level error that carries no wire code.
    #[error("{0}")]
    Other(String),

    /// The transport reported no error but also no response.
    #[error("no response from transport")]
    NoResponse,

    /// A response arrived but it is not HTTP-shaped.
    #[error("response is not HTTP")]
    NotHttp,
}

/// Failure taxonomy shared by every endpoint.
///
/// The decoding stage in [`crate::transform`] is generic over this trait:
/// the four constructors cover the outcomes every endpoint has, and
/// [`classify_status`](EndpointError::classify_status) is the per-endpoint
/// status table consulted for non-2xx responses before falling back to
/// [`unexpected_status`](EndpointError::unexpected_status).
pub trait EndpointError: Sized {
    /// The round-trip itself failed; wrap the transport classification.
    fn transport(error: TransportError) -> Self;

    /// 2xx response with no body.
    fn missing_body() -> Self;

    /// 2xx response whose body did not decode; keeps the raw bytes.
    fn malformed_body(body: Vec<u8>) -> Self;

    /// Non-2xx status outside the endpoint's status table.
    fn unexpected_status(status: u16) -> Self;

    /// Map a non-2xx status the endpoint's contract documents, or `None` to
    /// fall through to [`unexpected_status`](EndpointError::unexpected_status).
    fn classify_status(status: u16) -> Option<Self>;
}

/// Failures of the fetch-single-post endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchPostError {
    /// The round-trip failed; no usable HTTP response exists.
    #[error(transparent)]
    Transport(TransportError),

    /// 2xx response with no body. The server always sends one.
    #[error("response body is missing")]
    MissingBody,

    /// 2xx response whose body did not decode as a post.
    #[error("response body is malformed ({} bytes)", .0.len())]
    MalformedBody(Vec<u8>),

    /// 404 — the requested post does not exist.
    #[error("post not found")]
    PostNotFound,

    /// 500 — the server is in a bad state.
    #[error("internal server error")]
    ServerError,

    /// 400 — the server rejected the request shape.
    #[error("bad request")]
    BadRequest,

    /// Any other non-2xx status, preserved verbatim.
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
}

impl EndpointError for FetchPostError {
    fn transport(error: TransportError) -> Self {
        FetchPostError::Transport(error)
    }

    fn missing_body() -> Self {
        FetchPostError::MissingBody
    }

    fn malformed_body(body: Vec<u8>) -> Self {
        FetchPostError::MalformedBody(body)
    }

    fn unexpected_status(status: u16) -> Self {
        FetchPostError::UnexpectedStatus(status)
    }

    fn classify_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(FetchPostError::BadRequest),
            404 => Some(FetchPostError::PostNotFound),
            500 => Some(FetchPostError::ServerError),
            _ => None,
        }
    }
}

/// Failures of the fetch-post-list endpoint.
///
/// Narrower than the single-post taxonomy: the list route takes no
/// parameters, so the backend contract documents only 500 for it. A 404
/// here is *not* "post not found"; it lands in `UnexpectedStatus`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchPostListError {
    /// The round-trip failed; no usable HTTP response exists.
    #[error(transparent)]
    Transport(TransportError),

    /// 2xx response with no body.
    #[error("response body is missing")]
    MissingBody,

    /// 2xx response whose body did not decode as a post list.
    #[error("response body is malformed ({} bytes)", .0.len())]
    MalformedBody(Vec<u8>),

    /// 500 — the server is in a bad state.
    #[error("internal server error")]
    ServerError,

    /// Any other non-2xx status, preserved verbatim.
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
}

impl EndpointError for FetchPostListError {
    fn transport(error: TransportError) -> Self {
        FetchPostListError::Transport(error)
    }

    fn missing_body() -> Self {
        FetchPostListError::MissingBody
    }

    fn malformed_body(body: Vec<u8>) -> Self {
        FetchPostListError::MalformedBody(body)
    }

    fn unexpected_status(status: u16) -> Self {
        FetchPostListError::UnexpectedStatus(status)
    }

    fn classify_status(status: u16) -> Option<Self> {
        match status {
            500 => Some(FetchPostListError::ServerError),
            _ => None,
        }
    }
}

/// Failures of the add-post endpoint.
///
/// Same status table as the single-post fetch, plus `Encode` for the one
/// step unique to this endpoint: serializing the request body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddPostError {
    /// The round-trip failed; no usable HTTP response exists.
    #[error(transparent)]
    Transport(TransportError),

    /// The request payload could not be serialized to JSON.
    #[error("could not encode request body: {0}")]
    Encode(String),

    /// 2xx response with no body. The server echoes every accepted post.
    #[error("response body is missing")]
    MissingBody,

    /// 2xx response whose body did not decode as the echoed post.
    #[error("response body is malformed ({} bytes)", .0.len())]
    MalformedBody(Vec<u8>),

    /// 404 — the write route was not found.
    #[error("post not found")]
    PostNotFound,

    /// 500 — the server is in a bad state.
    #[error("internal server error")]
    ServerError,

    /// 400 — the server rejected the submitted post.
    #[error("bad request")]
    BadRequest,

    /// Any other non-2xx status, preserved verbatim.
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
}

impl EndpointError for AddPostError {
    fn transport(error: TransportError) -> Self {
        AddPostError::Transport(error)
    }

    fn missing_body() -> Self {
        AddPostError::MissingBody
    }

    fn malformed_body(body: Vec<u8>) -> Self {
        AddPostError::MalformedBody(body)
    }

    fn unexpected_status(status: u16) -> Self {
        AddPostError::UnexpectedStatus(status)
    }

    fn classify_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(AddPostError::BadRequest),
            404 => Some(AddPostError::PostNotFound),
            500 => Some(AddPostError::ServerError),
            _ => None,
        }
    }
}
