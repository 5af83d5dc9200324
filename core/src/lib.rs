//! Typed API client core for the blog service.
//!
//! # Overview
//! Builds `HttpRequest` values and transforms raw `TransportOutcome` values
//! into exhaustively-cased, per-endpoint results without touching the
//! network (host-does-IO pattern). The caller executes the actual HTTP
//! round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - Every possible outcome of a call maps to exactly one variant of the
//!   endpoint's result type; nothing is dropped and nothing falls through.
//! - The pipeline has two stages: [`transform::normalize`] collapses the
//!   three optional transport signals into a [`StandardResponse`], and
//!   [`transform::decode`] maps that into the endpoint's typed result.
//!   Endpoints contribute policy only (request shape, status table, payload
//!   type) through the [`Endpoint`] and [`EndpointError`] traits.
//! - `BlogClient` is stateless — it holds only `base_url`.
//! - Types use owned `String` / `Vec` fields; values are built per call and
//!   never mutated.

pub mod client;
pub mod error;
pub mod http;
pub mod transform;
pub mod types;

pub use client::{AddPost, BlogClient, FetchPost, FetchPostList, REQUEST_TIMEOUT};
pub use error::{
    AddPostError, EndpointError, FetchPostError, FetchPostListError, TransportError,
};
pub use http::{
    HttpMethod, HttpRequest, HttpResponse, RawResponse, TransportFault, TransportOutcome,
};
pub use transform::{decode, normalize, resolve, Endpoint, StandardResponse};
pub use types::Post;
