use crate::db::{connect_db, Database};

pub async fn init_test_db() -> Database {
    connect_db("sqlite::memory:", 1)
        .await
        .expect("failed to create in-memory database")
}
