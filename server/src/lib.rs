use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock, time};

/// A post as stored by the server. `delay_secs` throttles reads of that
/// post, and leaks into the list payload as an extra `Delay` key that
/// clients must tolerate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredPost {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Body")]
    pub body: String,
    #[serde(rename = "Delay", default)]
    pub delay_secs: u64,
}

/// The post shape accepted on write and returned on read: wire keys only.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostBody {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Body")]
    pub body: String,
}

pub type Db = Arc<RwLock<Vec<StoredPost>>>;

/// The demo data set. Posts 1 and 2 respond slowly (post 2 slower than the
/// client's timeout); posts 3 and 4 fake a 500 and a 404 so every branch of
/// the client's failure taxonomy is reachable against a live server.
pub fn seed_posts() -> Vec<StoredPost> {
    fn stored(title: &str, body: &str, delay_secs: u64) -> StoredPost {
        StoredPost {
            title: title.to_string(),
            body: body.to_string(),
            delay_secs,
        }
    }

    vec![
        stored("Post 0", "Body of Post 0", 0),
        stored("Post 1", "Body of Post 1", 2),
        stored("Post 2", "Body of Post 2", 5),
        stored("Post 3: Will fake 500", "Body of Post 3", 0),
        stored("Post 4: Will fake 404", "Body of Post 4", 0),
    ]
}

/// Router with the demo seed data.
pub fn app() -> Router {
    app_with_posts(seed_posts())
}

/// Router over a caller-supplied post set. Tests use this to sidestep the
/// seeded delays.
pub fn app_with_posts(posts: Vec<StoredPost>) -> Router {
    let db: Db = Arc::new(RwLock::new(posts));
    Router::new()
        .route("/", get(root))
        .route("/api/list", get(list_posts))
        .route("/api/read/{id}", get(read_post))
        // Registered with the trailing slash; clients post to it verbatim.
        .route("/api/write/", post(write_post))
        .layer(middleware::from_fn(log_request))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

/// Serve a specific router; tests boot custom seeds through this.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        uri = %request.uri(),
        headers = ?request.headers(),
        "request"
    );
    next.run(request).await
}

async fn root() -> &'static str {
    "Make post requests at /api/read/{postId}"
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<StoredPost>> {
    let posts = db.read().await;
    Json(posts.clone())
}

async fn read_post(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<usize>() else {
        return (StatusCode::BAD_REQUEST, "400: Bad id specified\n").into_response();
    };

    let stored = {
        let posts = db.read().await;
        posts.get(id).cloned()
    };
    let Some(post) = stored else {
        return (StatusCode::NOT_FOUND, "404: Post not found\n").into_response();
    };

    if post.delay_secs > 0 {
        time::sleep(Duration::from_secs(post.delay_secs)).await;
    }

    // Posts 3 and 4 misbehave on purpose, after honoring their delay.
    match id {
        3 => (StatusCode::INTERNAL_SERVER_ERROR, "500: Internal server error\n").into_response(),
        4 => (StatusCode::NOT_FOUND, "404: Post not found\n").into_response(),
        _ => Json(PostBody {
            title: post.title,
            body: post.body,
        })
        .into_response(),
    }
}

async fn write_post(
    State(db): State<Db>,
    Json(input): Json<PostBody>,
) -> (StatusCode, Json<PostBody>) {
    // Amend both fields so callers can tell the server really handled it.
    let amended = PostBody {
        title: format!("{} (server)", input.title),
        body: format!("{} (server)", input.body),
    };
    db.write().await.push(StoredPost {
        title: amended.title.clone(),
        body: amended.body.clone(),
        delay_secs: 0,
    });
    (StatusCode::OK, Json(amended))
}
