use alias_shortener::domain::error::StorageErrorKind;
use alias_shortener::domain::repositories::UrlRepository;
use alias_shortener::infrastructure::persistence::MemoryUrlRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_example_scenario() {
    let repo = MemoryUrlRepository::new();

    repo.save_url("https://example.com", "ex").await.unwrap();
    assert_eq!(repo.get_url("ex").await.unwrap(), "https://example.com");

    let err = repo.save_url("https://other.com", "ex").await.unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::AliasExists);

    let err = repo.get_url("missing").await.unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::UrlNotFound);
}

#[tokio::test]
async fn test_same_alias_twice_with_same_url() {
    let repo = MemoryUrlRepository::new();

    repo.save_url("https://example.com", "ex").await.unwrap();

    let err = repo.save_url("https://example.com", "ex").await.unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::AliasExists);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_same_url_under_second_alias() {
    let repo = MemoryUrlRepository::new();

    repo.save_url("https://example.com", "a1").await.unwrap();

    let err = repo.save_url("https://example.com", "a2").await.unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::UrlExists);

    assert_eq!(repo.len().await, 1);
    assert_eq!(
        repo.get_url("a2").await.unwrap_err().kind(),
        StorageErrorKind::UrlNotFound
    );
}

#[tokio::test]
async fn test_repeated_reads_are_stable() {
    let repo = MemoryUrlRepository::new();
    repo.save_url("https://example.com", "ex").await.unwrap();

    for _ in 0..5 {
        assert_eq!(repo.get_url("ex").await.unwrap(), "https://example.com");
    }
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_mappings_do_not_outlive_the_repository() {
    let repo = MemoryUrlRepository::new();
    repo.save_url("https://example.com", "ex").await.unwrap();
    drop(repo);

    // A fresh instance stands in for a process restart.
    let repo = MemoryUrlRepository::new();
    assert_eq!(
        repo.get_url("ex").await.unwrap_err().kind(),
        StorageErrorKind::UrlNotFound
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_on_same_alias() {
    const N: usize = 32;
    let repo = Arc::new(MemoryUrlRepository::new());

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.save_url(&format!("https://example.com/{}", i), "race")
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    let mut alias_conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => successes += 1,
            Err(e) if e.kind() == StorageErrorKind::AliasExists => alias_conflicts += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(alias_conflicts, N - 1);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_on_same_url() {
    const N: usize = 32;
    let repo = Arc::new(MemoryUrlRepository::new());

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.save_url("https://example.com", &format!("alias-{}", i))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => successes += 1,
            Err(e) => assert_eq!(e.kind(), StorageErrorKind::UrlExists),
        }
    }

    assert_eq!(successes, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_on_distinct_aliases() {
    const N: usize = 64;
    let repo = Arc::new(MemoryUrlRepository::new());

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.save_url(&format!("https://example.com/{}", i), &format!("a{}", i))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.len().await, N);
    for i in 0..N {
        assert_eq!(
            repo.get_url(&format!("a{}", i)).await.unwrap(),
            format!("https://example.com/{}", i)
        );
    }
}
