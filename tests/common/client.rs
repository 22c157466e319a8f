use actix_web::{cookie::Cookie, web, App};
use restaurant_api::{
    db::database_service::DatabaseService,
    types::{
        address::RAddress, error::AppError, person::RPerson, restaurant::RRestaurant,
        user::DBUserCreate,
    },
    utils::{token::hash_password, webutils::SESSION_COOKIE},
};
use std::sync::Arc;

pub const TEST_PASSWORD: &str = "test_Pass";

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(restaurant_api::routes::configure_routes)
    }

    pub async fn create_test_user(&self, username: &str) -> Result<i32, AppError> {
        let password_hash = hash_password(TEST_PASSWORD).expect("Failed to hash password");
        self.db
            .create_user(DBUserCreate { username: username.to_string(), password_hash })
            .await
    }

    /// Session cookie of a freshly created user, skipping the login form.
    pub async fn session_cookie(&self) -> Cookie<'static> {
        let user_id = self.create_test_user("tester").await.expect("Failed to create user");
        let key = self.db.create_session(user_id, 3600).await.expect("Failed to open session");
        Cookie::new(SESSION_COOKIE, key)
    }

    pub async fn seed_person(&self, firstname: &str, surname: &str) -> i32 {
        let data = RPerson {
            firstname: firstname.into(),
            surname: surname.into(),
            ..Default::default()
        }
        .validated()
        .expect("Invalid person");
        self.db.create_person(data).await.expect("Failed to create person").id
    }

    pub async fn seed_address(&self, zip_code: Option<&str>) -> i32 {
        let data = RAddress {
            country: "RU".into(),
            province: "Tatarstan rep.".into(),
            city: "Kazan".into(),
            street: "Pushkina".into(),
            house: "10".into(),
            zip_code: zip_code.map(str::to_string).into(),
        }
        .validated()
        .expect("Invalid address");
        self.db.create_address(data).await.expect("Failed to create address").id
    }

    pub async fn seed_restaurant(&self, name: &str, address: Option<i32>) -> i32 {
        let payload = RRestaurant {
            name: name.into(),
            address: address.into(),
            rating: 50.into(),
            ..Default::default()
        };
        self.db
            .create_restaurant(payload)
            .await
            .expect("Failed to create restaurant")
            .restaurant
            .id
    }
}
