use restaurant_api::db::database_service::DatabaseService;
use std::sync::Arc;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    /// Fresh, migrated in-memory database per test.
    pub async fn new() -> TestContext {
        let db = Arc::new(
            DatabaseService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize DatabaseService"),
        );

        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_person() -> Value {
        json!({
            "firstname": "Test",
            "surname": "Test",
            "patronymic": "Testovich",
            "date_of_birth": "1990-05-17",
            "phone": "+79991234567",
        })
    }

    pub fn sample_address() -> Value {
        json!({
            "country": "RU",
            "province": "Tatarstan rep.",
            "city": "Kazan",
            "street": "Pushkina",
            "house": "10",
            "zip_code": "00000",
        })
    }

    pub fn sample_restaurant(name: &str) -> Value {
        json!({
            "name": name,
            "phone": "+78432000000",
            "cuisine": "Russian",
            "rating": 100,
        })
    }
}
