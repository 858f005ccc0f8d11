use super::*;

/// Tests creating an exercise with a valid body.
///
/// Expected: 201 with the submitted fields and an assigned id
#[tokio::test]
async fn creates_exercise() -> Result<(), DbErr> {
    let (test, app) = setup().await;

    let (status, body) = send(&app, Method::POST, "/exercises", Some(curl_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["name"], "Curl");
    assert_eq!(body["reps"], 10);
    assert_eq!(body["weight"], 20);
    assert_eq!(body["unit"], "kgs");
    assert_eq!(body["date"], "01-02-23");
    assert_eq!(exercise_count(&test).await?, 1);

    Ok(())
}

/// Tests that negative reps are rejected without creating a record.
///
/// Expected: 400 with "Invalid request" and no exercise stored
#[tokio::test]
async fn rejects_negative_reps() -> Result<(), DbErr> {
    let (test, app) = setup().await;

    let mut payload = curl_body();
    payload["reps"] = json!(-1);

    let (status, body) = send(&app, Method::POST, "/exercises", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_request());
    assert_eq!(exercise_count(&test).await?, 0);

    Ok(())
}

/// Tests that each invalid field is rejected.
///
/// Expected: 400 with "Invalid request" for every case
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), DbErr> {
    let (test, app) = setup().await;

    let cases = [
        ("name", json!("  ")),
        ("reps", json!("10")),
        ("weight", json!(0)),
        ("unit", json!("stone")),
        ("date", json!("2023-01-02")),
    ];

    for (field, value) in cases {
        let mut payload = curl_body();
        payload[field] = value;

        let (status, body) = send(&app, Method::POST, "/exercises", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
        assert_eq!(body, invalid_request());
    }

    assert_eq!(exercise_count(&test).await?, 0);

    Ok(())
}

/// Tests that a missing field is rejected.
///
/// Expected: 400 with "Invalid request"
#[tokio::test]
async fn rejects_missing_field() -> Result<(), DbErr> {
    let (_test, app) = setup().await;

    let payload = json!({ "name": "Curl", "reps": 10, "weight": 20, "unit": "kgs" });

    let (status, body) = send(&app, Method::POST, "/exercises", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_request());

    Ok(())
}

/// Tests that a body which is not a JSON object is rejected with the fixed error body.
///
/// Expected: 400 with "Invalid request" for missing, malformed and non-object bodies
#[tokio::test]
async fn rejects_unparseable_body() -> Result<(), DbErr> {
    let (test, app) = setup().await;

    let (status, body) = send(&app, Method::POST, "/exercises", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_request());

    let (status, body) = send(&app, Method::POST, "/exercises", Some(json!([1, 2, 3]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_request());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/exercises")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(exercise_count(&test).await?, 0);

    Ok(())
}

/// Tests that unknown fields in the body are ignored.
///
/// Expected: 201 with only the five exercise fields stored
#[tokio::test]
async fn ignores_unknown_fields() -> Result<(), DbErr> {
    let (_test, app) = setup().await;

    let mut payload = curl_body();
    payload["notes"] = json!("felt heavy");

    let (status, body) = send(&app, Method::POST, "/exercises", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("notes").is_none());

    Ok(())
}

/// Tests that a JSON array holding valid values in field order is rejected.
///
/// Expected: 400 with "Invalid request" and no exercise stored
#[tokio::test]
async fn rejects_array_body() -> Result<(), DbErr> {
    let (test, app) = setup().await;

    let payload = json!(["Curl", 10, 20, "kgs", "01-02-23"]);

    let (status, body) = send(&app, Method::POST, "/exercises", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, invalid_request());
    assert_eq!(exercise_count(&test).await?, 0);

    Ok(())
}
