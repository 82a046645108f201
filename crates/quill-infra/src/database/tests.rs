use chrono::{Duration, Utc};
use quill_core::domain::NewPost;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: i32, title: &str, slug: &str, age_minutes: i64) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        content: "Content".to_owned(),
        slug: slug.to_owned(),
        created: (Utc::now() - Duration::minutes(age_minutes)).into(),
    }
}

fn new_post(slug: &str) -> NewPost {
    NewPost {
        title: "Hello World".to_owned(),
        content: "body".to_owned(),
        slug: slug.to_owned(),
    }
}

#[tokio::test]
async fn test_find_post_by_slug() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(7, "Test Post", "test-post", 0)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.find_by_slug("test-post").await.unwrap().unwrap();

    assert_eq!(post.id, 7);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.slug, "test-post");
}

#[tokio::test]
async fn test_find_missing_slug_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert!(repo.find_by_slug("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_preserves_datastore_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            model(2, "Newer", "newer", 1),
            model(1, "Older", "older", 10),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.list_newest_first().await.unwrap();

    let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["newer", "older"]);
}

#[tokio::test]
async fn test_insert_returns_assigned_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(42, "Hello World", "hello-world", 0)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.insert(new_post("hello-world")).await.unwrap();

    assert_eq!(post.id, 42);
    assert_eq!(post.slug, "hello-world");
}

#[tokio::test]
async fn test_insert_duplicate_slug_is_constraint_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Custom(
            "duplicate key value violates unique constraint \"posts_slug_key\"".to_owned(),
        )])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo.insert(new_post("hello-world")).await.unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn test_other_query_failure_is_query_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Custom("syntax error".to_owned())])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo.list_newest_first().await.unwrap_err();

    assert!(matches!(err, RepoError::Query(_)));
}

#[tokio::test]
async fn test_unique_wording_without_duplicate_key_is_query_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Custom(
            "could not create unique index \"posts_slug_key\"".to_owned(),
        )])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo.insert(new_post("hello-world")).await.unwrap_err();

    assert!(matches!(err, RepoError::Query(_)));
}

#[tokio::test]
async fn test_update_returns_rewritten_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(1, "Hello World 2", "hello-world-2", 5)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo
        .update_by_slug("hello-world", new_post("hello-world-2"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(post.id, 1);
    assert_eq!(post.slug, "hello-world-2");
}

#[tokio::test]
async fn test_update_missing_slug_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result = repo
        .update_by_slug("missing", new_post("whatever"))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_reports_rows_affected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert_eq!(repo.delete_by_slug("hello-world").await.unwrap(), 1);
    assert_eq!(repo.delete_by_slug("hello-world").await.unwrap(), 0);
}
