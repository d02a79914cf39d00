mod common;

use axum::http::{Method, StatusCode};
use common::{call, call_raw, test_app, SECRET};
use serde_json::{json, Value};

async fn submit(app: &axum::Router, body: Value) -> (StatusCode, Value) {
    call(app, Method::POST, "/api/reviews", Some(body)).await
}

async fn admin_list(app: &axum::Router, password: &str) -> (StatusCode, Value) {
    call(app, Method::POST, "/api/admin/reviews", Some(json!({ "password": password }))).await
}

async fn approved(app: &axum::Router) -> Vec<Value> {
    let (status, body) = call(app, Method::GET, "/api/reviews/approved", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    body["reviews"].as_array().cloned().unwrap_or_default()
}

/// 提交一条评价并通过管理列表找到它的ID
async fn submit_and_get_id(app: &axum::Router, name: &str) -> i64 {
    let (status, _) = submit(app, json!({ "name": name, "rating": 4, "text": "Nice", "email": "x@example.com" })).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = admin_list(app, SECRET).await;
    body["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["name"] == name)
        .and_then(|r| r["id"].as_i64())
        .unwrap()
}

#[tokio::test]
async fn alice_review_lifecycle() {
    let (app, mut notifications) = test_app();

    let (status, body) = submit(&app, json!({ "name": "Alice", "rating": 5, "text": "Great work" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["review"], json!({ "name": "Alice", "position": "", "rating": 5, "text": "Great work" }));
    assert!(body["review"].get("id").is_none());

    let notification = notifications.try_recv().unwrap();
    assert_eq!(notification.subject, "New Review Submitted - 5 Stars");

    let (status, body) = admin_list(&app, SECRET).await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["rating"], 5);
    assert_eq!(reviews[0]["approved"], false);
    let id = reviews[0]["id"].as_i64().unwrap();

    assert!(approved(&app).await.is_empty());

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/api/admin/reviews/{id}/approve"),
        Some(json!({ "password": SECRET, "approved": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["approved"], true);

    let public = approved(&app).await;
    assert_eq!(public.len(), 1);
    assert_eq!(public[0]["name"], "Alice");
    assert_eq!(public[0]["rating"], 5);
    assert!(public[0].get("email").is_none());

    let (status, body) = call(
        &app,
        Method::DELETE,
        &format!("/api/admin/reviews/{id}"),
        Some(json!({ "password": SECRET })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedReview"]["name"], "Alice");

    assert!(approved(&app).await.is_empty());
}

#[tokio::test]
async fn rating_boundaries_over_http() {
    let (app, _rx) = test_app();

    for rating in [0, 6] {
        let (status, body) = submit(&app, json!({ "name": "A", "rating": rating, "text": "t" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Rating must be between 1 and 5 stars");
    }

    for rating in [1, 5] {
        let (status, body) = submit(&app, json!({ "name": "A", "rating": rating, "text": "t" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["review"]["rating"], rating);
    }

    let (status, body) = submit(&app, json!({ "name": "A", "rating": 3.9, "text": "t" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["rating"], 3);
}

#[tokio::test]
async fn missing_name_or_text_is_rejected() {
    let (app, _rx) = test_app();

    for body in [
        json!({ "rating": 5, "text": "t", "email": "a@example.com" }),
        json!({ "name": "A", "rating": 5, "email": "a@example.com" }),
        json!({ "name": "", "rating": 5, "text": "t" }),
    ] {
        let (status, body) = submit(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Name, rating, and review text are required");
    }

    let (_, body) = admin_list(&app, SECRET).await;
    assert!(body["reviews"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let (app, _rx) = test_app();

    let (status, body) = submit(&app, json!({ "name": "A", "rating": 5, "text": "t", "email": "nope" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please provide a valid email address");
}

#[tokio::test]
async fn legacy_form_fields_are_accepted() {
    let (app, _rx) = test_app();

    let (status, body) = submit(
        &app,
        json!({
            "reviewerName": "Bob",
            "reviewerPosition": "Director",
            "reviewRating": "4",
            "reviewText": "Solid",
            "reviewerEmail": ""
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["position"], "Director");
    assert_eq!(body["review"]["rating"], 4);
}

#[tokio::test]
async fn malformed_body_uses_error_shape() {
    let (app, _rx) = test_app();

    let (status, body) = call_raw(&app, Method::POST, "/api/reviews", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn admin_list_masks_emails_but_single_fetch_does_not() {
    let (app, _rx) = test_app();
    let id = submit_and_get_id(&app, "Carol").await;

    let (_, body) = admin_list(&app, SECRET).await;
    assert_eq!(body["reviews"][0]["email"], "***@***");

    let (status, body) = call(
        &app,
        Method::POST,
        &format!("/api/admin/reviews/{id}"),
        Some(json!({ "password": SECRET })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["email"], "x@example.com");
}

#[tokio::test]
async fn wrong_password_is_401_and_changes_nothing() {
    let (app, _rx) = test_app();
    let id = submit_and_get_id(&app, "Dave").await;

    let (status, body) = admin_list(&app, "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let approve_uri = format!("/api/admin/reviews/{id}/approve");
    let (status, _) = call(&app, Method::PUT, &approve_uri, Some(json!({ "password": "wrong", "approved": true }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let review_uri = format!("/api/admin/reviews/{id}");
    let (status, _) = call(&app, Method::DELETE, &review_uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(&app, Method::POST, &review_uri, Some(json!({ "password": "wrong" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, body) = admin_list(&app, SECRET).await;
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["approved"], false);
    assert!(approved(&app).await.is_empty());
}

#[tokio::test]
async fn deleted_or_unknown_review_is_404() {
    let (app, _rx) = test_app();
    let id = submit_and_get_id(&app, "Erin").await;
    let uri = format!("/api/admin/reviews/{id}");

    let (status, _) = call(&app, Method::DELETE, &uri, Some(json!({ "password": SECRET }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, Method::POST, &uri, Some(json!({ "password": SECRET }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Review not found");

    let (status, _) = call(&app, Method::DELETE, &uri, Some(json!({ "password": SECRET }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(
        &app,
        Method::PUT,
        "/api/admin/reviews/not-a-number/approve",
        Some(json!({ "password": SECRET, "approved": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unapproving_hides_review_again() {
    let (app, _rx) = test_app();
    let id = submit_and_get_id(&app, "Frank").await;
    let uri = format!("/api/admin/reviews/{id}/approve");

    call(&app, Method::PUT, &uri, Some(json!({ "password": SECRET, "approved": true }))).await;
    assert_eq!(approved(&app).await.len(), 1);

    let (status, body) = call(&app, Method::PUT, &uri, Some(json!({ "password": SECRET, "approved": false }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["approved"], false);
    assert!(approved(&app).await.is_empty());
}

#[tokio::test]
async fn approved_listing_keeps_submission_order() {
    let (app, _rx) = test_app();
    let first = submit_and_get_id(&app, "First").await;
    let _hidden = submit_and_get_id(&app, "Hidden").await;
    let third = submit_and_get_id(&app, "Third").await;

    for id in [third, first] {
        let uri = format!("/api/admin/reviews/{id}/approve");
        call(&app, Method::PUT, &uri, Some(json!({ "password": SECRET, "approved": true }))).await;
    }

    let names: Vec<_> = approved(&app).await.iter().map(|r| r["name"].as_str().unwrap().to_string()).collect();
    assert_eq!(names, vec!["First".to_string(), "Third".to_string()]);
}

#[tokio::test]
async fn admin_request_without_body_is_401() {
    let (app, _rx) = test_app();
    let id = submit_and_get_id(&app, "Hana").await;
    let review_uri = format!("/api/admin/reviews/{id}");

    let (status, body) = call(&app, Method::DELETE, &review_uri, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "success": false, "message": "Unauthorized" }));

    let (status, _) = call(&app, Method::POST, "/api/admin/reviews", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(&app, Method::PUT, &format!("{review_uri}/approve"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // 请求体不合法时依然是400
    let (status, body) = call_raw(&app, Method::DELETE, &review_uri, "{oops").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, body) = admin_list(&app, SECRET).await;
    assert_eq!(body["reviews"].as_array().unwrap().len(), 1);
}
