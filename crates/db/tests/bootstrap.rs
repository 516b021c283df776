use sentiment_db::models::account::CreateAccount;
use sentiment_db::repositories::AccountRepo;
use sqlx::PgPool;

/// Connect, migrate, verify every table exists.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    sentiment_db::health_check(&pool).await.unwrap();

    let tables = [
        "clients",
        "agents",
        "users",
        "events",
        "actions",
        "sentiment_analyses",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_account_lookup_by_username_and_id(pool: PgPool) {
    let input = CreateAccount {
        username: "operador".to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    };
    let created = AccountRepo::create(&pool, &input).await.unwrap();

    let by_name = AccountRepo::find_by_username(&pool, "operador")
        .await
        .unwrap()
        .expect("account should be found by username");
    assert_eq!(by_name.id, created.id);

    let by_id = AccountRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(by_id.map(|a| a.username), Some("operador".to_string()));

    assert!(AccountRepo::find_by_username(&pool, "ghost")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_username_violates_unique_constraint(pool: PgPool) {
    let input = CreateAccount {
        username: "dup".to_string(),
        password_hash: "hash".to_string(),
    };
    AccountRepo::create(&pool, &input).await.unwrap();

    let err = AccountRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_users_username"));
}
