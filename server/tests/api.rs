use axum::http::{self, Request, StatusCode};
use blog_server::{app, app_with_posts, StoredPost};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- root ---

#[tokio::test]
async fn root_serves_usage_hint() {
    let resp = app().oneshot(get_request("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let text = body_text(resp).await;
    assert_eq!(text, "Make post requests at /api/read/{postId}");
}

// --- list ---

#[tokio::test]
async fn list_returns_seeded_posts_in_order() {
    let resp = app().oneshot(get_request("/api/list")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<serde_json::Value> = body_json(resp).await;
    assert_eq!(posts.len(), 5);
    assert_eq!(posts[0]["Title"], "Post 0");
    assert_eq!(posts[3]["Title"], "Post 3: Will fake 500");
    // The store's bookkeeping leaks into the list payload.
    assert_eq!(posts[2]["Delay"], 5);
}

// --- read ---

#[tokio::test]
async fn read_post_returns_wire_keys_only() {
    let resp = app().oneshot(get_request("/api/read/0")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let post: serde_json::Value = body_json(resp).await;
    assert_eq!(post["Title"], "Post 0");
    assert_eq!(post["Body"], "Body of Post 0");
    assert!(post.get("Delay").is_none());
}

#[tokio::test]
async fn read_post_3_fakes_server_error() {
    let resp = app().oneshot(get_request("/api/read/3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(resp).await, "500: Internal server error\n");
}

#[tokio::test]
async fn read_post_4_fakes_not_found() {
    let resp = app().oneshot(get_request("/api/read/4")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "404: Post not found\n");
}

#[tokio::test]
async fn read_post_out_of_range_is_not_found() {
    let resp = app().oneshot(get_request("/api/read/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "404: Post not found\n");
}

#[tokio::test]
async fn read_post_non_numeric_id_is_bad_request() {
    let resp = app().oneshot(get_request("/api/read/abc")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, "400: Bad id specified\n");
}

// --- write ---

#[tokio::test]
async fn write_post_appends_server_marker() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/write/",
            r#"{"Title":"New","Body":"Hello"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let post: serde_json::Value = body_json(resp).await;
    assert_eq!(post["Title"], "New (server)");
    assert_eq!(post["Body"], "Hello (server)");
}

#[tokio::test]
async fn write_post_without_trailing_slash_misses_route() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/write",
            r#"{"Title":"New","Body":"Hello"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- write then read back ---

#[tokio::test]
async fn written_post_is_listed_and_readable() {
    use tower::Service;

    fn stored(title: &str, body: &str) -> StoredPost {
        StoredPost {
            title: title.to_string(),
            body: body.to_string(),
            delay_secs: 0,
        }
    }

    let mut app = app_with_posts(vec![stored("Post 0", "Body of Post 0")]).into_service();

    // write
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/write/",
            r#"{"Title":"Fresh","Body":"Ink"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // list — the amended post is appended
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/list"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<serde_json::Value> = body_json(resp).await;
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1]["Title"], "Fresh (server)");

    // read the new index
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/read/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let post: serde_json::Value = body_json(resp).await;
    assert_eq!(post["Title"], "Fresh (server)");
    assert_eq!(post["Body"], "Ink (server)");
}
