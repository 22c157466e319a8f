use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::{client::TestClient, test_data, TestContext};

#[actix_web::test]
async fn test_person_create_and_retrieve() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let cookie = client.session_cookie().await;

    let req = test::TestRequest::post()
        .uri("/persons/")
        .cookie(cookie.clone())
        .set_json(test_data::sample_person())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: serde_json::Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["firstname"], "Test");
    assert_eq!(created["date_of_birth"], "1990-05-17");

    let req = test::TestRequest::get()
        .uri(&format!("/persons/{}/", id))
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);

    let person = ctx.db.get_person(id as i32).await.unwrap();
    assert_eq!(person.person_name(), "Test Test");
}

#[actix_web::test]
async fn test_person_validation_errors() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let cookie = client.session_cookie().await;

    let req = test::TestRequest::post()
        .uri("/persons/")
        .cookie(cookie)
        .set_json(json!({
            "surname": "   ",
            "date_of_birth": "17.05.1990",
            "phone": "12-34",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["firstname"][0], "This field is required.");
    assert_eq!(body["surname"][0], "This field may not be blank.");
    assert_eq!(
        body["date_of_birth"][0],
        "Date has wrong format. Use one of these formats instead: YYYY-MM-DD."
    );
    assert!(body["phone"].is_array());
    assert_eq!(ctx.db.count_persons().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_person_null_required_field() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let cookie = client.session_cookie().await;

    let mut payload = test_data::sample_person();
    payload["firstname"] = json!(null);
    payload["patronymic"] = json!(null);

    let req = test::TestRequest::post()
        .uri("/persons/")
        .cookie(cookie)
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"firstname": ["This field may not be null."]}));
}

#[actix_web::test]
async fn test_person_put_and_patch() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let cookie = client.session_cookie().await;
    let id = client.seed_person("Ivan", "Petrov").await;

    // PUT needs every required field
    let req = test::TestRequest::put()
        .uri(&format!("/persons/{}/", id))
        .cookie(cookie.clone())
        .set_json(json!({"firstname": "Pyotr"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::patch()
        .uri(&format!("/persons/{}/", id))
        .cookie(cookie.clone())
        .set_json(json!({"phone": "+79990001122"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["firstname"], "Ivan");
    assert_eq!(body["phone"], "+79990001122");

    let req = test::TestRequest::put()
        .uri(&format!("/persons/{}/", id))
        .cookie(cookie)
        .set_json(json!({"firstname": " Pyotr ", "surname": "Petrov"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["firstname"], "Pyotr");
    assert!(body["phone"].is_null());
}

#[actix_web::test]
async fn test_person_list_ordering_and_delete() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    let cookie = client.session_cookie().await;

    let smirnov = client.seed_person("Anna", "Smirnova").await;
    client.seed_person("Boris", "Ivanov").await;
    client.seed_person("Anton", "Ivanov").await;

    let req = test::TestRequest::get().uri("/persons/").cookie(cookie.clone()).to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["firstname"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Anton", "Boris", "Anna"]);

    let req = test::TestRequest::delete()
        .uri(&format!("/persons/{}/", smirnov))
        .cookie(cookie.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    for method in [test::TestRequest::get(), test::TestRequest::delete()] {
        let req = method.uri(&format!("/persons/{}/", smirnov)).cookie(cookie.clone()).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
    assert_eq!(ctx.db.count_persons().await.unwrap(), 2);
}

#[actix_web::test]
async fn test_person_requires_session() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/persons/")
        .set_json(test_data::sample_person())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(ctx.db.count_persons().await.unwrap(), 0);
}
