use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

async fn sqlite() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    Database::connect(options).await.unwrap()
}

async fn products_table_exists(db: &DatabaseConnection) -> bool {
    let stmt = Statement::from_string(
        db.get_database_backend(),
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'products'",
    );
    db.query_one_raw(stmt).await.unwrap().is_some()
}

#[tokio::test]
async fn test_up_creates_products_table() {
    let db = sqlite().await;

    Migrator::up(&db, None).await.unwrap();
    assert!(products_table_exists(&db).await);

    // A second run has nothing pending
    Migrator::up(&db, None).await.unwrap();
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_image_urls_defaults_to_empty_array() {
    let db = sqlite().await;
    Migrator::up(&db, None).await.unwrap();

    db.execute_unprepared(
        "INSERT INTO products (id, name, type, category, seller_id) \
         VALUES ('0192d3a0-0000-7000-8000-000000000001', 'Lamp', 'decor', 'home', \
                 '0192d3a0-0000-7000-8000-0000000000aa')",
    )
    .await
    .unwrap();

    let row = db
        .query_one_raw(Statement::from_string(
            db.get_database_backend(),
            "SELECT image_urls, version, quantity FROM products",
        ))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(row.try_get::<String>("", "image_urls").unwrap(), "[]");
    assert_eq!(row.try_get::<i32>("", "version").unwrap(), 0);
    assert_eq!(row.try_get::<i32>("", "quantity").unwrap(), 0);
}

#[tokio::test]
async fn test_down_drops_products_table() {
    let db = sqlite().await;

    Migrator::up(&db, None).await.unwrap();
    Migrator::down(&db, None).await.unwrap();

    assert!(!products_table_exists(&db).await);
}
