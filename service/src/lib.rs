//! Caller-side services over the blog client core.
//!
//! # Design
//! The core is deterministic and never touches the network; this crate is
//! the host that does. It owns the reqwest transport, the per-endpoint
//! in-flight bookkeeping, and the swap between the real backend and canned
//! responses:
//! - [`RemoteBlogService`] executes request descriptions over HTTP and feeds
//!   the raw signals through the core's transform pipeline.
//! - [`MockBlogService`] produces typed results directly, no sockets and no
//!   serialization, which is all a front end needs to exercise every
//!   failure case.
//!
//! Both implement [`BlogService`], which is object-safe so callers can hold
//! a `Box<dyn BlogService>` and pick an implementation at runtime.

pub mod mock;
pub mod remote;

use async_trait::async_trait;
use blog_core::{AddPostError, FetchPostError, FetchPostListError, Post};

pub use mock::MockBlogService;
pub use remote::RemoteBlogService;

/// The three operations of the blog API, as an async capability.
///
/// Implementations may cancel a still-running fetch of the same endpoint
/// when a new call supersedes it; the superseded caller then observes
/// `Transport(Cancelled)`.
#[async_trait]
pub trait BlogService: Send + Sync {
    async fn fetch_post(&self, id: u64) -> Result<Post, FetchPostError>;
    async fn fetch_post_list(&self) -> Result<Vec<Post>, FetchPostListError>;
    async fn add_post(&self, post: Post) -> Result<Post, AddPostError>;
}
