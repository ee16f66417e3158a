//! Integration tests for the API server.

use article_store::InMemoryArticleStore;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;

fn setup() -> axum::Router {
    api::create_app(api::create_state(InMemoryArticleStore::new()))
}

fn setup_with_store() -> (axum::Router, InMemoryArticleStore) {
    let store = InMemoryArticleStore::new();
    let app = api::create_app(api::create_state(store.clone()));
    (app, store)
}

async fn post_json(app: &axum::Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, serde_json::to_string(&body).unwrap()).await
}

async fn post_raw(app: &axum::Router, uri: &str, body: impl Into<Body>) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get(app: &axum::Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn save_list(app: &axum::Router, title: &str, url: &str, keyword: &str) {
    let response = post_json(
        app,
        "/api/save_list",
        serde_json::json!({"title": title, "url": url, "match": keyword}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_save_list_returns_ok() {
    let app = setup();

    let response = post_json(
        &app,
        "/api/save_list",
        serde_json::json!({"title": "A", "url": "http://x", "match": "kw"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"ok": true}));
}

#[tokio::test]
async fn test_save_then_list() {
    let app = setup();
    save_list(&app, "A", "http://x", "kw").await;

    let response = get(&app, "/api/list?page=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!([{"title": "A", "url": "http://x", "match_keyword": "kw"}])
    );
}

#[tokio::test]
async fn test_list_without_page_is_first_page() {
    let app = setup();
    save_list(&app, "A", "http://x", "kw").await;

    let json = body_json(get(&app, "/api/list").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = setup();

    let response = get(&app, "/api/list").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_resave_same_url_keeps_latest_title() {
    let (app, store) = setup_with_store();
    save_list(&app, "old", "http://x", "kw").await;
    save_list(&app, "new", "http://x", "kw").await;

    assert_eq!(store.article_count().await, 1);

    let json = body_json(get(&app, "/api/list?page=1").await).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "new");
}

#[tokio::test]
async fn test_list_reverse_save_order() {
    let app = setup();
    save_list(&app, "one", "http://1", "kw").await;
    save_list(&app, "two", "http://2", "kw").await;
    save_list(&app, "three", "http://3", "kw").await;

    let json = body_json(get(&app, "/api/list?page=1").await).await;
    let urls: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["url"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(urls, ["http://3", "http://2", "http://1"]);
}

#[tokio::test]
async fn test_list_second_page_empty_under_21_articles() {
    let app = setup();
    for i in 0..20 {
        save_list(&app, "t", &format!("http://{i}"), "kw").await;
    }

    let first = body_json(get(&app, "/api/list?page=1").await).await;
    assert_eq!(first.as_array().unwrap().len(), 20);

    let second = body_json(get(&app, "/api/list?page=2").await).await;
    assert_eq!(second, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_second_page_holds_overflow() {
    let app = setup();
    for i in 0..21 {
        save_list(&app, "t", &format!("http://{i}"), "kw").await;
    }

    let second = body_json(get(&app, "/api/list?page=2").await).await;
    let rows = second.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["url"], "http://0");
}

#[tokio::test]
async fn test_list_invalid_page_is_first_page() {
    let app = setup();
    save_list(&app, "A", "http://x", "kw").await;

    for uri in [
        "/api/list?page=abc",
        "/api/list?page=0",
        "/api/list?page=-1",
        "/api/list?page=",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "uri {uri}");
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1, "uri {uri}");
    }
}

#[tokio::test]
async fn test_list_decimal_page_is_truncated() {
    let app = setup();
    for i in 0..21 {
        save_list(&app, "t", &format!("http://{i}"), "kw").await;
    }

    for uri in ["/api/list?page=2.0", "/api/list?page=2.5", "/api/list?page=0.2e1"] {
        let json = body_json(get(&app, uri).await).await;
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1, "uri {uri}");
        assert_eq!(rows[0]["url"], "http://0", "uri {uri}");
    }
}

#[tokio::test]
async fn test_list_omits_updated_at() {
    let app = setup();
    save_list(&app, "A", "http://x", "kw").await;

    let json = body_json(get(&app, "/api/list").await).await;
    let row = json[0].as_object().unwrap();
    assert_eq!(row.len(), 3);
    assert!(!row.contains_key("updated_at"));
}

#[tokio::test]
async fn test_list_filtered_by_tag() {
    let app = setup();
    save_list(&app, "a", "http://a", "red").await;
    save_list(&app, "b", "http://b", "blue").await;
    save_list(&app, "c", "http://c", "red").await;

    let json = body_json(get(&app, "/api/list?tag=red").await).await;
    let urls: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["url"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(urls, ["http://c", "http://a"]);
}

#[tokio::test]
async fn test_save_list_absent_fields_are_null() {
    let app = setup();
    let response = post_json(&app, "/api/save_list", serde_json::json!({"url": "http://x"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(&app, "/api/list").await).await;
    assert!(json[0]["title"].is_null());
    assert!(json[0]["match_keyword"].is_null());
}

#[tokio::test]
async fn test_save_list_without_url_fails() {
    let (app, store) = setup_with_store();
    let response = post_json(&app, "/api/save_list", serde_json::json!({"title": "A"})).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(response).await.is_empty());
    assert_eq!(store.article_count().await, 0);
}

#[tokio::test]
async fn test_malformed_json_fails() {
    let app = setup();
    let response = post_raw(&app, "/api/save_list", "{not json").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_array_body_fails_on_both_save_routes() {
    let (app, store) = setup_with_store();

    for uri in ["/api/save_list", "/api/save_content"] {
        let response = post_json(&app, uri, serde_json::json!(["A", "http://arr", "kw"])).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "uri {uri}");
        assert!(body_bytes(response).await.is_empty(), "uri {uri}");
    }

    assert_eq!(store.article_count().await, 0);
    let json = body_json(get(&app, "/api/content?url=http://arr").await).await;
    assert_eq!(json, serde_json::json!({}));
}

#[tokio::test]
async fn test_duplicate_keys_keep_last_value() {
    let (app, store) = setup_with_store();
    let response = post_raw(
        &app,
        "/api/save_list",
        r#"{"title":"A","url":"http://a","url":"http://b","match":"kw"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(store.article_count().await, 1);
    assert!(store.get_article("http://b").await.is_some());
}

#[tokio::test]
async fn test_scalar_fields_are_stored_as_text() {
    let app = setup();
    let response = post_json(
        &app,
        "/api/save_list",
        serde_json::json!({"title": 5, "url": "http://x", "match": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(&app, "/api/list").await).await;
    assert_eq!(json[0]["title"], "5");
    assert_eq!(json[0]["match_keyword"], "true");
}

#[tokio::test]
async fn test_save_content_malformed_json_fails() {
    let app = setup();
    let response = post_raw(&app, "/api/save_content", "{not json").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_save_content_without_url_fails() {
    let app = setup();
    let response = post_json(
        &app,
        "/api/save_content",
        serde_json::json!({"content": "orphan body"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_body_without_content_type_is_parsed() {
    let app = setup();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/save_list")
                .body(Body::from(r#"{"title":"A","url":"http://x","match":"kw"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(&app, "/api/list").await).await;
    assert_eq!(json[0]["url"], "http://x");
}

#[tokio::test]
async fn test_save_then_get_content() {
    let app = setup();
    let response = post_json(
        &app,
        "/api/save_content",
        serde_json::json!({"url": "http://x", "content": "<p>hello</p>"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"ok": true}));

    let response = get(&app, "/api/content?url=http%3A%2F%2Fx").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"content": "<p>hello</p>"})
    );
}

#[tokio::test]
async fn test_content_replaced_on_resave() {
    let app = setup();
    for body in ["first", "second"] {
        post_json(
            &app,
            "/api/save_content",
            serde_json::json!({"url": "http://x", "content": body}),
        )
        .await;
    }

    let json = body_json(get(&app, "/api/content?url=http://x").await).await;
    assert_eq!(json, serde_json::json!({"content": "second"}));
}

#[tokio::test]
async fn test_get_content_never_saved() {
    let app = setup();

    let response = get(&app, "/api/content?url=http://missing").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({}));
}

#[tokio::test]
async fn test_get_content_without_url() {
    let app = setup();

    let response = get(&app, "/api/content").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({}));
}

#[tokio::test]
async fn test_content_independent_of_articles() {
    let (app, store) = setup_with_store();
    post_json(
        &app,
        "/api/save_content",
        serde_json::json!({"url": "http://orphan", "content": "body"}),
    )
    .await;

    assert_eq!(store.article_count().await, 0);
    let json = body_json(get(&app, "/api/content?url=http://orphan").await).await;
    assert_eq!(json["content"], "body");
}

#[tokio::test]
async fn test_unknown_method_is_not_found() {
    let app = setup();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/list")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(response).await, b"Not Found");
}

#[tokio::test]
async fn test_get_on_save_route_is_not_found() {
    let app = setup();

    let response = get(&app, "/api/save_list").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(response).await, b"Not Found");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = setup();

    for uri in ["/", "/api", "/api/list/extra", "/health"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {uri}");
        let content_type = response.headers()["content-type"]
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_bytes(response).await, b"Not Found");
    }
}
