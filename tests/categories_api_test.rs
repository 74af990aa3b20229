mod common;

use axum::{body, http::Method, response::Response};
use serde_json::{json, Value};

use common::TestApp;

async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

#[tokio::test]
async fn categories_are_listed_in_display_order() {
    let app = TestApp::new().await;
    app.seed_category("Kalem", None).await;
    app.seed_category("Defter", None).await;
    app.seed_category("Boya", None).await;

    let body = response_json(app.request(Method::GET, "/api/v1/categories", None).await).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Kalem", "Defter", "Boya"]);
}

#[tokio::test]
async fn tree_nests_children_under_their_parent() {
    let app = TestApp::new().await;
    let parent = app.seed_category("Kirtasiye", None).await;
    app.seed_category("Kalem", Some(parent.id)).await;
    app.seed_category("Defter", Some(parent.id)).await;
    app.seed_category("Oyuncak", None).await;

    let body = response_json(
        app.request(Method::GET, "/api/v1/categories/tree", None)
            .await,
    )
    .await;
    let tree = body.as_array().unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0]["name"], "Kirtasiye");
    let children = tree[0]["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["name"], "Kalem");
    assert!(tree[1]["children"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn footer_lists_top_level_categories_only() {
    let app = TestApp::new().await;
    let parent = app.seed_category("Kirtasiye", None).await;
    app.seed_category("Kalem", Some(parent.id)).await;
    for i in 0..9 {
        app.seed_category(&format!("Raf {i}"), None).await;
    }

    let body = response_json(
        app.request(Method::GET, "/api/v1/categories/footer", None)
            .await,
    )
    .await;
    let footer = body.as_array().unwrap();
    // Capped at the configured footer limit, children excluded.
    assert_eq!(footer.len(), 8);
    assert!(footer.iter().all(|c| c["parent_id"].is_null()));
    assert_eq!(footer[0]["name"], "Kirtasiye");
}

#[tokio::test]
async fn duplicate_category_names_conflict() {
    let app = TestApp::new().await;
    app.seed_category("Kalem", None).await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/categories",
            Some(json!({"name": "Kalem"})),
        )
        .await;
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn nesting_is_limited_to_one_level() {
    let app = TestApp::new().await;
    let parent = app.seed_category("Kirtasiye", None).await;
    let child = app.seed_category("Kalem", Some(parent.id)).await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/categories",
            Some(json!({"name": "Tukenmez", "parent_id": child.id})),
        )
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn deleting_a_parent_cascades_to_its_children() {
    let app = TestApp::new().await;
    let parent = app.seed_category("Kirtasiye", None).await;
    app.seed_category("Kalem", Some(parent.id)).await;
    app.seed_category("Defter", Some(parent.id)).await;
    app.seed_category("Oyuncak", None).await;

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/v1/categories/{}", parent.id),
            None,
        )
        .await;
    assert_eq!(response.status(), 204);

    let body = response_json(app.request(Method::GET, "/api/v1/categories", None).await).await;
    let remaining = body.as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["name"], "Oyuncak");
}

#[tokio::test]
async fn reordering_persists_the_new_positions() {
    let app = TestApp::new().await;
    let a = app.seed_category("Kalem", None).await;
    let b = app.seed_category("Defter", None).await;
    let c = app.seed_category("Boya", None).await;

    let response = app
        .request(
            Method::PUT,
            "/api/v1/categories/reorder",
            Some(json!({"ids": [c.id, a.id, b.id]})),
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["updated"], 3);

    let body = response_json(app.request(Method::GET, "/api/v1/categories", None).await).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|cat| cat["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Boya", "Kalem", "Defter"]);
}

#[tokio::test]
async fn reordering_rejects_unknown_ids() {
    let app = TestApp::new().await;
    app.seed_category("Kalem", None).await;

    let response = app
        .request(
            Method::PUT,
            "/api/v1/categories/reorder",
            Some(json!({"ids": ["00000000-0000-0000-0000-000000000000"]})),
        )
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn deleting_a_missing_category_is_a_404() {
    let app = TestApp::new().await;
    let response = app
        .request(
            Method::DELETE,
            "/api/v1/categories/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
    assert_eq!(response.status(), 404);
}
