use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use utilisateur_application::UserRepository;
use utilisateur_domain::{UserFilter, UserId, UserRecord};

use super::PostgresUserRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres user tests: {error}");
    }

    Some(pool)
}

fn unique_suffix() -> String {
    UserId::new().to_string().replace('-', "")
}

fn record(first_name: &str, last_name: &str) -> UserRecord {
    match UserRecord::create(first_name, last_name) {
        Ok(record) => record,
        Err(error) => panic!("test record must be valid: {error}"),
    }
}

#[tokio::test]
async fn create_find_update_delete_round_trip() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserRepository::new(pool);
    let mut created = record("Damien", &format!("Degendt{}", unique_suffix()));

    assert!(repository.create(&created).await.is_ok());
    let found = repository.find_by_id(created.id()).await;
    assert_eq!(found.ok().flatten(), Some(created.clone()));

    created.apply_patch(utilisateur_domain::UserPatch::new(
        Some("Val".to_owned()),
        None,
    ));
    assert!(matches!(repository.update(&created).await, Ok(true)));
    let found = repository.find_by_id(created.id()).await;
    assert_eq!(
        found.ok().flatten().map(|user| user.first_name().to_owned()),
        Some("Val".to_owned())
    );

    assert!(matches!(repository.delete(created.id()).await, Ok(true)));
    assert!(matches!(repository.find_by_id(created.id()).await, Ok(None)));
    assert!(matches!(repository.delete(created.id()).await, Ok(false)));
    assert!(matches!(repository.update(&created).await, Ok(false)));
}

#[tokio::test]
async fn list_filters_with_literal_substring_patterns() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserRepository::new(pool);
    let marker = unique_suffix();
    let valentin = record("Valentin", &format!("Dejean{marker}"));
    let guillaume = record("Guillaume", &format!("Pesetti{marker}"));
    let percent = record("100%", &format!("Literal{marker}"));

    for user in [&valentin, &guillaume, &percent] {
        assert!(repository.create(user).await.is_ok());
    }

    let by_first_name = repository
        .list(&UserFilter::new(Some("Val".to_owned()), Some(marker.clone())))
        .await;
    assert_eq!(by_first_name.ok(), Some(vec![valentin.clone()]));

    let lowercase = repository
        .list(&UserFilter::new(Some("val".to_owned()), Some(marker.clone())))
        .await;
    assert_eq!(lowercase.ok().map(|users| users.len()), Some(0));

    let wildcard = repository
        .list(&UserFilter::new(Some("%".to_owned()), Some(marker.clone())))
        .await;
    assert_eq!(wildcard.ok(), Some(vec![percent.clone()]));

    let by_marker = repository
        .list(&UserFilter::new(None, Some(marker.clone())))
        .await;
    assert_eq!(by_marker.ok().map(|users| users.len()), Some(3));

    for user in [&valentin, &guillaume, &percent] {
        assert!(repository.delete(user.id()).await.is_ok());
    }
}
