use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::LOCATION, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use warbler_gateway::{build_router, GatewayState};
use warbler_social::{
    Directory, Follow, Like, Message, MessageId, Snapshot, User, UserId, DEFAULT_HEADER_IMAGE_URL,
    DEFAULT_IMAGE_URL,
};

const TESTUSER: i64 = 1;
const OTHERUSER: i64 = 2;
const DIFFUSER: i64 = 3;

struct TestContext {
    router: Router,
    _static_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        let snapshot = Snapshot {
            users: vec![
                User::new(UserId(TESTUSER), "testuser", "test@test.com"),
                User::new(UserId(OTHERUSER), "otheruser", "other@test.com")
                    .with_bio("I am another user")
                    .with_location("San Francisco"),
                User::new(UserId(DIFFUSER), "diffuser", "diff@test.com").with_bio("Test user 1"),
            ],
            messages: vec![
                Message::new(
                    MessageId(10),
                    UserId(OTHERUSER),
                    Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap(),
                    "Hello from other",
                ),
                Message::new(
                    MessageId(11),
                    UserId(TESTUSER),
                    Utc.with_ymd_and_hms(2024, 3, 6, 9, 0, 0).unwrap(),
                    "Hello from self",
                ),
            ],
            follows: vec![Follow {
                follower: UserId(OTHERUSER),
                followee: UserId(TESTUSER),
            }],
            likes: vec![Like {
                user: UserId(TESTUSER),
                message: MessageId(10),
            }],
        };

        let directory = Directory::from_snapshot(snapshot).expect("fixture snapshot is valid");

        let static_dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(static_dir.path().join("stylesheets")).unwrap();
        fs::write(
            static_dir.path().join("stylesheets/style.css"),
            "body { color: black; }",
        )
        .unwrap();

        let state = GatewayState::new(Arc::new(directory)).with_static_dir(static_dir.path());
        Self {
            router: build_router(state),
            _static_dir: static_dir,
        }
    }

    async fn get(&self, uri: &str, session: Option<i64>) -> (StatusCode, Option<String>, String) {
        let mut request = Request::builder().uri(uri);
        if let Some(id) = session {
            request = request.header("x-session-user", id.to_string());
        }
        let request = request.body(Body::empty()).expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let body = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();

        (status, location, String::from_utf8(body.to_vec()).unwrap())
    }
}

#[tokio::test]
async fn user_listing_shows_everyone_with_follow_buttons_when_signed_in() {
    let ctx = TestContext::new();

    let (status, _, html) = ctx.get("/users", Some(TESTUSER)).await;

    assert_eq!(status, StatusCode::OK);
    for name in ["@testuser", "@otheruser", "@diffuser"] {
        assert!(html.contains(name), "missing {name}");
    }
    assert!(html.contains("Test user 1"));
    assert!(html.contains("Follow"));
}

#[tokio::test]
async fn user_listing_has_no_follow_buttons_when_anonymous() {
    let ctx = TestContext::new();

    let (status, _, html) = ctx.get("/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("@testuser"));
    assert!(!html.contains("Follow"));
}

#[tokio::test]
async fn user_search_filters_by_username() {
    let ctx = TestContext::new();

    let (_, _, html) = ctx.get("/users?q=diff", Some(TESTUSER)).await;
    assert!(html.contains("@diffuser"));
    assert!(!html.contains("@testuser"));
    assert!(!html.contains("@otheruser"));

    let (status, _, html) = ctx.get("/users?q=none", Some(TESTUSER)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Sorry, no users found"));
}

#[tokio::test]
async fn profile_is_public() {
    let ctx = TestContext::new();

    for session in [Some(TESTUSER), None] {
        let (status, _, html) = ctx.get("/users/2", session).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("@otheruser"));
        assert!(html.contains("I am another user"));
        assert!(html.contains("San Francisco"));
        assert!(html.contains("Hello from other"));
    }
}

#[tokio::test]
async fn following_page_requires_session() {
    let ctx = TestContext::new();

    let (status, _, html) = ctx.get("/users/2/following", Some(TESTUSER)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("@otheruser"));
    assert!(html.contains("@testuser"));

    let (status, location, _) = ctx.get("/users/2/following", None).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/"));
}

#[tokio::test]
async fn followers_and_likes_pages_require_session() {
    let ctx = TestContext::new();

    let (status, _, html) = ctx.get("/users/1/followers", Some(TESTUSER)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("@otheruser"));

    let (status, _, html) = ctx.get("/users/1/likes", Some(TESTUSER)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Hello from other"));
    assert!(html.contains(r#"action="/users/remove_like/10""#));

    for uri in ["/users/1/followers", "/users/1/likes"] {
        let (status, location, _) = ctx.get(uri, None).await;
        assert_eq!(status, StatusCode::FOUND, "{uri}");
        assert_eq!(location.as_deref(), Some("/"));
    }
}

#[tokio::test]
async fn message_page_depends_on_viewer() {
    let ctx = TestContext::new();

    let (status, _, html) = ctx.get("/messages/10", Some(TESTUSER)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("@otheruser"));
    assert!(html.contains("Hello from other"));
    assert!(html.contains("Follow"));

    let (status, _, html) = ctx.get("/messages/10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Hello from other"));
    assert!(!html.contains("Follow"));

    let (_, _, html) = ctx.get("/messages/11", Some(TESTUSER)).await;
    assert!(html.contains("Hello from self"));
    assert!(html.contains("Delete"));
}

#[tokio::test]
async fn unknown_entities_are_not_found() {
    let ctx = TestContext::new();

    let (status, _, html) = ctx.get("/users/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("User not found: 404"));

    let (status, _, _) = ctx.get("/messages/404", Some(TESTUSER)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn error_pages_keep_the_viewer_navigation() {
    let ctx = TestContext::new();

    let (status, _, html) = ctx.get("/users/404", Some(TESTUSER)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Log out"));
    assert!(html.contains(r#"href="/users/1""#));

    let (_, _, html) = ctx.get("/users/404", None).await;
    assert!(html.contains("Log in"));
    assert!(!html.contains("Log out"));
}

#[tokio::test]
async fn non_numeric_ids_render_not_found_page() {
    let ctx = TestContext::new();

    for uri in ["/users/abc", "/messages/abc"] {
        let (status, _, html) = ctx.get(uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(html.starts_with("<!DOCTYPE html>"), "{uri}");
        assert!(html.contains("<h1>404</h1>"), "{uri}");
    }

    let (status, _, html) = ctx.get("/users/abc/likes", Some(TESTUSER)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found: /users/abc"));
}

#[tokio::test]
async fn static_assets_are_served_from_static_dir() {
    let ctx = TestContext::new();

    let (status, _, body) = ctx.get("/static/stylesheets/style.css", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { color: black; }");

    let (status, _, _) = ctx.get("/static/images/missing.png", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_session_user_is_anonymous() {
    let ctx = TestContext::new();

    let (status, location, _) = ctx.get("/users/2/following", Some(999)).await;

    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(location.as_deref(), Some("/"));
}

#[tokio::test]
async fn shipped_static_dir_has_every_referenced_asset() {
    let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../static");
    let router = build_router(
        GatewayState::new(Arc::new(Directory::default())).with_static_dir(static_dir),
    );

    for uri in [
        DEFAULT_IMAGE_URL,
        DEFAULT_HEADER_IMAGE_URL,
        "/static/images/warbler-logo.svg",
        "/static/favicon.svg",
        "/static/stylesheets/style.css",
    ] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}
