//! Domain DTOs for the blog API.
//!
//! # Design
//! The wire format uses capitalized JSON keys (`Title`, `Body`); the serde
//! renames here are the single source of that mapping, shared by request
//! encoding and response decoding so the two can never drift apart. The
//! server crate defines its own schema independently; integration tests
//! catch any drift between the two.

use serde::{Deserialize, Serialize};

/// A blog post as exchanged with the server, in both directions: the write
/// endpoint submits one and every endpoint's success payload contains them.
///
/// Unknown keys in incoming JSON are ignored; the list endpoint is known to
/// attach extra bookkeeping fields to each post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Body")]
    pub body: String,
}
