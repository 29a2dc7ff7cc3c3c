use calshare::db::service::DbService;

pub struct TestContext {
    pub db: DbService,
}

impl TestContext {
    /// Fresh in-memory database with all migrations applied.
    pub async fn new() -> TestContext {
        let db = DbService::new("sqlite::memory:")
            .await
            .expect("Failed to initialize DbService");
        TestContext { db }
    }
}

// Test data helpers
pub mod test_data {
    use calshare::types::user::NewUser;

    pub fn sample_user() -> NewUser {
        NewUser {
            name: "Test".to_string(),
            surname: "User".to_string(),
            username: "testuser".to_string(),
            password: "correct horse battery staple".to_string(),
        }
    }

    pub fn user_named(username: &str) -> NewUser {
        NewUser {
            name: "Some".to_string(),
            surname: "Body".to_string(),
            username: username.to_string(),
            password: format!("{username}-password"),
        }
    }
}
