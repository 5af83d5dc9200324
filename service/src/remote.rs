//! Remote service: executes request descriptions with reqwest and resolves
//! the raw outcomes through the core pipeline.
//!
//! # Design
//! The executor never interprets HTTP itself; it only assembles the raw
//! signal triple and classification stays in the core. reqwest errors are
//! mapped onto [`TransportFault`] wire codes (timeout, refused connection)
//! or the host catch-all, with the original error text preserved as detail.
//!
//! Fetches are superseding: a new call aborts the previous in-flight task of
//! the same endpoint, and the superseded awaiter observes
//! `Transport(Cancelled)`. A stale result can therefore never overwrite a
//! newer one. Add is never superseded: a submitted post stays in flight
//! even when the user clicks again.

use async_trait::async_trait;
use blog_core::http::wire_code;
use blog_core::{
    resolve, AddPost, AddPostError, BlogClient, Endpoint, EndpointError, FetchPost,
    FetchPostError, FetchPostList, FetchPostListError, HttpMethod, HttpRequest, Post, RawResponse,
    TransportError, TransportFault, TransportOutcome,
};
use tokio::sync::Mutex;
use tokio::task::{AbortHandle, JoinHandle};

use crate::BlogService;

/// Blog service backed by a live server.
pub struct RemoteBlogService {
    client: BlogClient,
    http: reqwest::Client,
    fetch_post_inflight: Mutex<Option<AbortHandle>>,
    fetch_list_inflight: Mutex<Option<AbortHandle>>,
}

impl RemoteBlogService {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: BlogClient::new(base_url),
            http: reqwest::Client::new(),
            fetch_post_inflight: Mutex::new(None),
            fetch_list_inflight: Mutex::new(None),
        }
    }

    /// Run one round-trip as its own task so a later call can abort it.
    fn spawn_call<E>(
        &self,
        endpoint: &E,
    ) -> Result<JoinHandle<Result<E::Value, E::Error>>, E::Error>
    where
        E: Endpoint + 'static,
        E::Value: Send + 'static,
        E::Error: Send + 'static,
    {
        let request = self.client.request(endpoint)?;
        let http = self.http.clone();
        Ok(tokio::spawn(async move {
            let outcome = execute(&http, &request).await;
            resolve::<E>(outcome)
        }))
    }
}

/// Store `task` as the endpoint's in-flight call, aborting any prior one,
/// then await it. An abort by a superseding call surfaces as
/// `Transport(Cancelled)`.
async fn await_superseding<V, F>(
    slot: &Mutex<Option<AbortHandle>>,
    task: JoinHandle<Result<V, F>>,
) -> Result<V, F>
where
    F: EndpointError,
{
    if let Some(previous) = slot.lock().await.replace(task.abort_handle()) {
        previous.abort();
    }
    match task.await {
        Ok(result) => result,
        Err(join_error) if join_error.is_cancelled() => {
            Err(F::transport(TransportError::Cancelled))
        }
        Err(join_error) => Err(F::transport(TransportError::Other(join_error.to_string()))),
    }
}

#[async_trait]
impl BlogService for RemoteBlogService {
    async fn fetch_post(&self, id: u64) -> Result<Post, FetchPostError> {
        let task = self.spawn_call(&FetchPost { id })?;
        await_superseding(&self.fetch_post_inflight, task).await
    }

    async fn fetch_post_list(&self) -> Result<Vec<Post>, FetchPostListError> {
        let task = self.spawn_call(&FetchPostList)?;
        await_superseding(&self.fetch_list_inflight, task).await
    }

    async fn add_post(&self, post: Post) -> Result<Post, AddPostError> {
        let endpoint = AddPost { post };
        let request = self.client.request(&endpoint)?;
        let outcome = execute(&self.http, &request).await;
        resolve::<AddPost>(outcome)
    }
}

/// Execute one request description and assemble the raw signal triple.
///
/// Records what happened without interpreting it; the core's normalizer
/// decides what the triple means. An empty response body is reported as
/// absent. A body read that fails after the head arrived keeps the metadata
/// and sets the error slot, and the normalizer's priority rule takes over
/// from there.
pub async fn execute(http: &reqwest::Client, request: &HttpRequest) -> TransportOutcome {
    let mut builder = match request.method {
        HttpMethod::Get => http.get(&request.path),
        HttpMethod::Post => http.post(&request.path),
    };
    builder = builder.timeout(request.timeout);
    if request.ignore_local_cache {
        builder = builder.header("cache-control", "no-cache");
    }
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(body) = &request.body {
        builder = builder.body(body.clone());
    }

    tracing::debug!(path = %request.path, "executing request");
    let response = match builder.send().await {
        Ok(response) => response,
        Err(error) => {
            return TransportOutcome {
                body: None,
                response: None,
                error: Some(fault_from_reqwest(&error)),
            }
        }
    };

    let raw = RawResponse {
        status: Some(response.status().as_u16()),
        headers: response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect(),
    };

    match response.bytes().await {
        Ok(bytes) if bytes.is_empty() => TransportOutcome {
            body: None,
            response: Some(raw),
            error: None,
        },
        Ok(bytes) => TransportOutcome {
            body: Some(bytes.to_vec()),
            response: Some(raw),
            error: None,
        },
        Err(error) => TransportOutcome {
            body: None,
            response: Some(raw),
            error: Some(fault_from_reqwest(&error)),
        },
    }
}

/// Map a reqwest error onto the raw fault signal. Timeouts and refused
/// connections get their well-known wire codes; anything else is a host
/// error with the text preserved.
fn fault_from_reqwest(error: &reqwest::Error) -> TransportFault {
    if error.is_timeout() {
        TransportFault::Wire {
            code: wire_code::TIMED_OUT,
            detail: error.to_string(),
        }
    } else if error.is_connect() {
        TransportFault::Wire {
            code: wire_code::CANNOT_CONNECT,
            detail: error.to_string(),
        }
    } else {
        TransportFault::Host {
            detail: error.to_string(),
        }
    }
}
