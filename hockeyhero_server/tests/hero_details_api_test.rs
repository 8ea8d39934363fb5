
use reqwest::StatusCode;
use serde_json::{Value, json};

use hockeyhero_types::errors::ApplicationError;

use crate::test_utils::tests::{TestApp, header, setup_web_app};

async fn create_details(app: &TestApp, body: Value) -> Value {
    let res = app
        .client
        .post(app.url("/api/hero-details"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

#[tokio::test]
async fn test_create_hero_details() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;

    let res = app
        .client
        .post(app.url("/api/hero-details"))
        .json(&json!({
            "phone": "1-655-323-4606",
            "dateOfBirth": "2001-09-21",
            "city": "Casperland",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let alert = header(&res, "x-hockeyheroapp-alert").map(str::to_string);
    let location = header(&res, "location").map(str::to_string);
    let body: Value = res.json().await.unwrap();
    let id = body["id"].as_i64().expect("created record should carry an id");

    assert_eq!(alert.as_deref(), Some("hockeyheroApp.heroDetails.created"));
    assert_eq!(location, Some(format!("/api/hero-details/{id}")));
    assert_eq!(body["dateOfBirth"], "2001-09-21");
    assert_eq!(body["city"], "Casperland");

    Ok(())
}

#[tokio::test]
async fn test_create_with_id_is_rejected() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;

    let res = app
        .client
        .post(app.url("/api/hero-details"))
        .json(&json!({ "id": 1, "city": "Casperland" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header(&res, "x-hockeyheroapp-error"), Some("error.idexists"));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["errorKey"], "idexists");
    assert_eq!(body["entityName"], "heroDetails");
    assert_eq!(body["status"], 400);

    let all: Vec<Value> = app
        .client
        .get(app.url("/api/hero-details"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(all.is_empty(), "Nothing should have been stored");

    Ok(())
}

#[tokio::test]
async fn test_update_hero_details() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let created = create_details(&app, json!({ "phone": "555-0199", "city": "Calgary" })).await;
    let id = created["id"].as_i64().unwrap();

    let res = app
        .client
        .put(app.url(&format!("/api/hero-details/{id}")))
        .json(&json!({ "id": id, "city": "Halifax" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        header(&res, "x-hockeyheroapp-alert"),
        Some("hockeyheroApp.heroDetails.updated")
    );
    assert_eq!(header(&res, "x-hockeyheroapp-params"), Some(id.to_string().as_str()));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["city"], "Halifax");
    assert_eq!(body["phone"], Value::Null);

    Ok(())
}

#[tokio::test]
async fn test_update_id_errors() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let created = create_details(&app, json!({ "city": "Calgary" })).await;
    let id = created["id"].as_i64().unwrap();

    let cases = [
        (id, json!({ "city": "Halifax" }), "idnull"),
        (id, json!({ "id": id + 1, "city": "Halifax" }), "idinvalid"),
        (9999, json!({ "id": 9999, "city": "Halifax" }), "idnotfound"),
    ];

    for (path_id, body, key) in cases {
        let res = app
            .client
            .put(app.url(&format!("/api/hero-details/{path_id}")))
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "case {key}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["errorKey"], key);
        assert_eq!(body["message"], format!("error.{key}"));
    }

    Ok(())
}

#[tokio::test]
async fn test_partial_update_merges_non_null_fields() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let created = create_details(
        &app,
        json!({ "phone": "555-0199", "city": "Calgary", "postalCode": "T2P 1J9" }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let res = app
        .client
        .patch(app.url(&format!("/api/hero-details/{id}")))
        .header("content-type", "application/merge-patch+json")
        .body(json!({ "id": id, "city": "Regina", "postalCode": null }).to_string())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["phone"], "555-0199");
    assert_eq!(body["city"], "Regina");
    assert_eq!(body["postalCode"], "T2P 1J9");

    let stored: Value = app
        .client
        .get(app.url(&format!("/api/hero-details/{id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stored, body);

    Ok(())
}

#[tokio::test]
async fn test_partial_update_missing_record_is_not_found() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;

    let res = app
        .client
        .patch(app.url("/api/hero-details/4242"))
        .json(&json!({ "id": 4242, "city": "Regina" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "error.http.404");

    Ok(())
}

#[tokio::test]
async fn test_get_and_delete_hero_details() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let created = create_details(&app, json!({ "city": "Calgary" })).await;
    let id = created["id"].as_i64().unwrap();
    let item_url = app.url(&format!("/api/hero-details/{id}"));

    let fetched: Value = app.client.get(&item_url).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched, created);

    for _ in 0..2 {
        let res = app.client.delete(&item_url).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            header(&res, "x-hockeyheroapp-alert"),
            Some("hockeyheroApp.heroDetails.deleted")
        );
    }

    let res = app.client.get(&item_url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_list_hero_details_without_keys() -> Result<(), ApplicationError> {
    let app = setup_web_app().await?;
    let linked = create_details(&app, json!({ "city": "Calgary" })).await;
    let lonely = create_details(&app, json!({ "city": "Regina" })).await;

    let res = app
        .client
        .post(app.url("/api/hero-keys"))
        .json(&json!({ "age": 24, "heroDetails": { "id": linked["id"] } }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let all: Vec<Value> = app
        .client
        .get(app.url("/api/hero-details"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let filtered: Vec<Value> = app
        .client
        .get(app.url("/api/hero-details?filter=herokeys-is-null"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(filtered, vec![lonely]);

    Ok(())
}
