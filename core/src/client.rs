//! Stateless client and the three endpoints of the blog API.
//!
//! # Design
//! `BlogClient` holds only a `base_url` and carries no mutable state between
//! calls. Each API operation is a small struct implementing [`Endpoint`]:
//! it contributes the request description, the payload type, and (through
//! its error type) the status table, while the decoding flow lives once in
//! [`crate::transform`]. The caller executes the actual HTTP round-trip
//! between [`BlogClient::request`] and [`resolve`], keeping the core
//! deterministic and free of I/O dependencies.

use std::time::Duration;

use crate::error::{AddPostError, FetchPostError, FetchPostListError};
use crate::http::{HttpMethod, HttpRequest, TransportOutcome};
use crate::transform::{resolve, Endpoint};
use crate::types::Post;

/// Deadline declared by every built request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(4);

/// Synchronous, stateless client for the blog API.
///
/// Builds `HttpRequest` values and resolves `TransportOutcome` values
/// without touching the network. [`dispatch`](BlogClient::dispatch) runs one
/// full call given a transport capability supplied by the caller.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
}

impl BlogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Describe the HTTP request for one call of `endpoint`.
    pub fn request<E: Endpoint>(&self, endpoint: &E) -> Result<HttpRequest, E::Error> {
        endpoint.request(&self.base_url)
    }

    /// One full round-trip: build the request, let `invoke` execute it, and
    /// resolve the raw outcome into the endpoint's typed result.
    ///
    /// `invoke` is anything that can turn a request description into the raw
    /// signal triple: a blocking HTTP agent, or a canned closure in tests.
    pub fn dispatch<E, F>(&self, endpoint: &E, invoke: F) -> Result<E::Value, E::Error>
    where
        E: Endpoint,
        F: FnOnce(&HttpRequest) -> TransportOutcome,
    {
        let request = self.request(endpoint)?;
        resolve::<E>(invoke(&request))
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: Vec::new(),
        body: None,
        timeout: REQUEST_TIMEOUT,
        ignore_local_cache: true,
    }
}

/// Fetch one post by its index on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPost {
    pub id: u64,
}

impl Endpoint for FetchPost {
    type Value = Post;
    type Error = FetchPostError;

    fn request(&self, base_url: &str) -> Result<HttpRequest, Self::Error> {
        Ok(get(format!("{base_url}/api/read/{}", self.id)))
    }
}

/// Fetch the full post list, in server order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPostList;

impl Endpoint for FetchPostList {
    type Value = Vec<Post>;
    type Error = FetchPostListError;

    fn request(&self, base_url: &str) -> Result<HttpRequest, Self::Error> {
        Ok(get(format!("{base_url}/api/list")))
    }
}

/// Submit a new post. The server echoes the stored post back, possibly
/// amended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPost {
    pub post: Post,
}

impl Endpoint for AddPost {
    type Value = Post;
    type Error = AddPostError;

    fn request(&self, base_url: &str) -> Result<HttpRequest, Self::Error> {
        let body =
            serde_json::to_vec(&self.post).map_err(|e| AddPostError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            // The write route is registered with a trailing slash; dropping
            // it would 404.
            path: format!("{base_url}/api/write/"),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            timeout: REQUEST_TIMEOUT,
            ignore_local_cache: true,
        })
    }
}
