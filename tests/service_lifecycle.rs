mod common;

use linkvault::error::AppError;
use sqlx::PgPool;
use std::collections::HashSet;

#[sqlx::test]
async fn test_full_lifecycle(pool: PgPool) {
    let service = common::create_test_service(pool);

    let created = service
        .shorten("https://www.example.com/some/long/url".to_string())
        .await
        .unwrap();
    assert_eq!(created.access_count, 0);
    assert_eq!(created.created_at, created.updated_at);

    let code = created.short_code.clone();

    let resolved = service.resolve(&code).await.unwrap();
    assert_eq!(resolved.original_url, "https://www.example.com/some/long/url");
    assert_eq!(resolved.access_count, 1);
    assert_eq!(service.resolve(&code).await.unwrap().access_count, 2);

    let stats = service.stats(&code).await.unwrap();
    assert_eq!(stats.access_count, 2);
    assert_eq!(stats.created_at, created.created_at);

    let updated = service
        .update(&code, "https://www.example.com/new".to_string())
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.short_code, code);
    assert_eq!(updated.original_url, "https://www.example.com/new");
    assert_eq!(updated.access_count, 2);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
    assert!(updated.was_updated());

    service.delete(&code).await.unwrap();

    assert!(matches!(
        service.resolve(&code).await,
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        service.stats(&code).await,
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete(&code).await,
        Err(AppError::NotFound { .. })
    ));
}

#[sqlx::test]
async fn test_invalid_url_leaves_store_untouched(pool: PgPool) {
    let service = common::create_test_service(pool);

    let result = service.shorten("not a url".to_string()).await;

    assert!(matches!(result, Err(AppError::InvalidUrl { .. })));
    assert_eq!(service.summary().await.unwrap().total_urls, 0);
}

#[sqlx::test]
async fn test_concurrent_resolves_count_every_hit(pool: PgPool) {
    let service = common::create_test_service(pool);
    let created = service
        .shorten("https://example.com/hot".to_string())
        .await
        .unwrap();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let service = service.clone();
            let code = created.short_code.clone();
            tokio::spawn(async move { service.resolve(&code).await })
        })
        .collect();

    let mut counts = Vec::new();
    for handle in handles {
        counts.push(handle.await.unwrap().unwrap().access_count);
    }
    counts.sort_unstable();

    assert_eq!(counts, (1..=20).collect::<Vec<i64>>());
    assert_eq!(
        service.stats(&created.short_code).await.unwrap().access_count,
        20
    );
}

#[sqlx::test]
async fn test_concurrent_shortens_get_unique_codes(pool: PgPool) {
    let service = common::create_test_service(pool);

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move { service.shorten(format!("https://example.com/{i}")).await })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap().unwrap().short_code);
    }

    assert_eq!(codes.len(), 20);

    let summary = service.summary().await.unwrap();
    assert_eq!(summary.total_urls, 20);
    assert_eq!(summary.total_clicks, 0);
}

#[sqlx::test]
async fn test_list_returns_newest_first(pool: PgPool) {
    let service = common::create_test_service(pool);

    let first = service
        .shorten("https://example.com/1".to_string())
        .await
        .unwrap();
    let second = service
        .shorten("https://example.com/2".to_string())
        .await
        .unwrap();

    let listed = service.list(None).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);

    assert_eq!(service.list(Some(1)).await.unwrap().len(), 1);
}
