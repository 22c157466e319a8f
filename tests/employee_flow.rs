use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::{client::TestClient, TestContext};

#[actix_web::test]
async fn test_employee_pair_is_unique_regardless_of_position() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let cookie = client.session_cookie().await;

    let restaurant = client.seed_restaurant("Russian wolf", None).await;
    let person = client.seed_person("Test", "Test").await;

    let req = test::TestRequest::post()
        .uri("/employees/")
        .cookie(cookie.clone())
        .set_json(json!({"restaurant": restaurant, "person": person, "position": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["restaurant"], restaurant);
    assert_eq!(body["position"], 1);

    let req = test::TestRequest::post()
        .uri("/employees/")
        .cookie(cookie)
        .set_json(json!({"restaurant": restaurant, "person": person, "position": 2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["non_field_errors"][0],
        "The fields restaurant, person must make a unique set."
    );
    assert_eq!(ctx.db.count_employees().await.unwrap(), 1);
}

#[actix_web::test]
async fn test_employee_field_errors() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let cookie = client.session_cookie().await;
    let restaurant = client.seed_restaurant("Russian wolf", None).await;

    let req = test::TestRequest::post()
        .uri("/employees/")
        .cookie(cookie)
        .set_json(json!({"restaurant": restaurant, "person": 42, "position": 7}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["person"][0], "Invalid pk \"42\" - object does not exist.");
    assert_eq!(body["position"][0], "\"7\" is not a valid choice.");
    assert!(body.get("restaurant").is_none());
    assert!(body.get("non_field_errors").is_none());
}

#[actix_web::test]
async fn test_employee_list_full_info_and_detail() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let cookie = client.session_cookie().await;

    let restaurant = client.seed_restaurant("Russian wolf", None).await;
    let cook = client.seed_person("Ivan", "Petrov").await;
    let waiter = client.seed_person("Olga", "Sidorova").await;

    let mut ids = Vec::new();
    for (person, position) in [(cook, 3), (waiter, 4)] {
        let req = test::TestRequest::post()
            .uri("/employees/")
            .cookie(cookie.clone())
            .set_json(json!({"restaurant": restaurant, "person": person, "position": position}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        ids.push(body["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::get().uri("/employees/").cookie(cookie.clone()).to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!([
            {"id": ids[0], "employee_name": "Petrov Ivan", "restaurant_name": "Russian wolf", "position_name": "Cook"},
            {"id": ids[1], "employee_name": "Sidorova Olga", "restaurant_name": "Russian wolf", "position_name": "Waiter"},
        ])
    );

    let req = test::TestRequest::get()
        .uri(&format!("/employees/{}/", ids[1]))
        .cookie(cookie)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"id": ids[1], "restaurant": restaurant, "person": waiter, "position": 4}));
}

#[actix_web::test]
async fn test_employee_patch_and_put() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let cookie = client.session_cookie().await;

    let restaurant = client.seed_restaurant("Russian wolf", None).await;
    let other = client.seed_restaurant("Great Time", None).await;
    let person = client.seed_person("Ivan", "Petrov").await;

    let req = test::TestRequest::post()
        .uri("/employees/")
        .cookie(cookie.clone())
        .set_json(json!({"restaurant": restaurant, "person": person, "position": 3}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let id = body["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/employees/{}/", id))
        .cookie(cookie.clone())
        .set_json(json!({"position": 2}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["position"], 2);
    assert_eq!(body["restaurant"], restaurant);

    let req = test::TestRequest::put()
        .uri(&format!("/employees/{}/", id))
        .cookie(cookie.clone())
        .set_json(json!({"restaurant": other}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["person"][0], "This field is required.");

    let req = test::TestRequest::put()
        .uri(&format!("/employees/{}/", id))
        .cookie(cookie)
        .set_json(json!({"restaurant": other, "person": person, "position": 1}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["restaurant"], other);
}

#[actix_web::test]
async fn test_person_delete_cascades_to_employees() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let cookie = client.session_cookie().await;

    let first = client.seed_restaurant("Russian wolf", None).await;
    let second = client.seed_restaurant("Great Time", None).await;
    let person = client.seed_person("Ivan", "Petrov").await;
    let keeper = client.seed_person("Olga", "Sidorova").await;

    for (restaurant, person) in [(first, person), (second, person), (first, keeper)] {
        let req = test::TestRequest::post()
            .uri("/employees/")
            .cookie(cookie.clone())
            .set_json(json!({"restaurant": restaurant, "person": person, "position": 4}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/persons/{}/", person))
        .cookie(cookie.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(ctx.db.count_employees().await.unwrap(), 1);
    assert_eq!(ctx.db.count_restaurants().await.unwrap(), 2);

    let req = test::TestRequest::delete()
        .uri("/employees/999/")
        .cookie(cookie)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_employee_mistyped_keys() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let cookie = client.session_cookie().await;
    let restaurant = client.seed_restaurant("Russian wolf", None).await;
    let person = client.seed_person("Ivan", "Petrov").await;

    let req = test::TestRequest::post()
        .uri("/employees/")
        .cookie(cookie.clone())
        .set_json(json!({"restaurant": "wolf", "person": null, "position": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "restaurant": ["A valid integer is required."],
            "person": ["This field may not be null."],
            "position": ["A valid integer is required."],
        })
    );

    let req = test::TestRequest::post()
        .uri("/employees/")
        .cookie(cookie)
        .set_json(json!({"restaurant": restaurant.to_string(), "person": person, "position": "2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["position"], 2);
}
