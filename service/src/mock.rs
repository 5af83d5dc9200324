//! Canned blog service: the full failure taxonomy without a network.
//!
//! Each post id yields a fixed outcome, so a front end wired to this service
//! can demo every branch (slow success, timeout, server error, missing post,
//! refused connection, missing or malformed body, unresolvable host,
//! cancellation) with nothing listening on port 3000.

use std::time::Duration;

use async_trait::async_trait;
use blog_core::{AddPostError, FetchPostError, FetchPostListError, Post, TransportError};
use tokio::time;

use crate::BlogService;

/// Canned responses per post id:
///
/// | id  | outcome                      |
/// |-----|------------------------------|
/// | 0   | success                      |
/// | 1   | success after an extra delay |
/// | 2   | transport timeout            |
/// | 3   | server error (500)           |
/// | 4   | post not found (404)         |
/// | 5   | cannot connect               |
/// | 6   | missing response body        |
/// | 7   | malformed response body      |
/// | 8   | host not found               |
/// | 9   | request cancelled            |
///
/// Ids outside the table behave like the real backend: not found.
pub struct MockBlogService {
    /// Base artificial latency for single-post fetches and adds.
    pub response_delay: Duration,
    /// Artificial latency for list fetches.
    pub list_delay: Duration,
    /// Extra latency added to post 1, for exercising slow-success UI.
    pub slow_post_delay: Duration,
}

impl Default for MockBlogService {
    /// Demo-friendly latencies: 100ms per call, 2s for the list and for the
    /// deliberately slow post.
    fn default() -> Self {
        Self {
            response_delay: Duration::from_millis(100),
            list_delay: Duration::from_secs(2),
            slow_post_delay: Duration::from_secs(2),
        }
    }
}

impl MockBlogService {
    /// Mock with no artificial latency, for tests.
    pub fn instant() -> Self {
        Self {
            response_delay: Duration::ZERO,
            list_delay: Duration::ZERO,
            slow_post_delay: Duration::ZERO,
        }
    }

    fn posts() -> Vec<Post> {
        fn post(title: &str, body: &str) -> Post {
            Post {
                title: title.to_string(),
                body: body.to_string(),
            }
        }

        vec![
            post("Fake post 0 title", "Fake post 0 body"),
            post("Fake post 1 title: slow", "Fake post 1 body"),
            post("Fake post 2 title: timeout", "Fake post 2 body"),
            post("Fake post 3 title: server error", "This will never be read"),
            post("Fake post 4 title: missing post", "This will never be read"),
            post("Fake post 5 title: server down", "This will never be read"),
            post("Fake post 6 title: missing data", "This will never be read"),
            post("Fake post 7 title: bad data", "This will never be read"),
            post("Fake post 8 title: host not found", "This will never be read"),
            post("Fake post 9 title: cancelled", "This will never be read"),
        ]
    }

    fn canned_fetch(id: u64) -> Result<Post, FetchPostError> {
        let posts = Self::posts();
        match id {
            0 | 1 => Ok(posts[id as usize].clone()),
            2 => Err(FetchPostError::Transport(TransportError::TimedOut)),
            3 => Err(FetchPostError::ServerError),
            4 => Err(FetchPostError::PostNotFound),
            5 => Err(FetchPostError::Transport(TransportError::CannotConnect)),
            6 => Err(FetchPostError::MissingBody),
            7 => Err(FetchPostError::MalformedBody(b"bad data".to_vec())),
            8 => Err(FetchPostError::Transport(TransportError::HostNotFound)),
            9 => Err(FetchPostError::Transport(TransportError::Cancelled)),
            _ => Err(FetchPostError::PostNotFound),
        }
    }
}

#[async_trait]
impl BlogService for MockBlogService {
    async fn fetch_post(&self, id: u64) -> Result<Post, FetchPostError> {
        time::sleep(self.response_delay).await;
        if id == 1 {
            time::sleep(self.slow_post_delay).await;
        }
        Self::canned_fetch(id)
    }

    async fn fetch_post_list(&self) -> Result<Vec<Post>, FetchPostListError> {
        time::sleep(self.list_delay).await;
        Ok(Self::posts())
    }

    async fn add_post(&self, post: Post) -> Result<Post, AddPostError> {
        time::sleep(self.response_delay).await;
        Ok(Post {
            title: format!("{} (server)", post.title),
            body: format!("{} (server)", post.body),
        })
    }
}
