mod common;

use sqlx::PgPool;
use std::sync::Arc;
use trivia_api::domain::entities::NewQuestion;
use trivia_api::domain::repositories::QuestionRepository;
use trivia_api::error::RepositoryError;
use trivia_api::infrastructure::persistence::PgQuestionRepository;

fn repo(pool: PgPool) -> PgQuestionRepository {
    PgQuestionRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_list_all_ordered_by_id(pool: PgPool) {
    let questions = repo(pool).list_all().await.unwrap();

    assert_eq!(questions.len(), common::SEEDED_QUESTIONS);
    assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let repo = repo(pool);

    let found = repo.find_by_id(21).await.unwrap().unwrap();
    assert_eq!(found.answer, "Alexander Fleming");
    assert_eq!(found.category, 1);

    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_create_question(pool: PgPool) {
    let repo = repo(pool);

    let created = repo
        .create(NewQuestion {
            question: Some("What is the capital of Peru?".to_string()),
            answer: Some("Lima".to_string()),
            category: Some(3),
            difficulty: Some(2),
        })
        .await
        .unwrap();

    assert!(created.id > 23);
    assert_eq!(created.answer, "Lima");

    let fetched = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[sqlx::test]
async fn test_create_with_missing_field_is_constraint_violation(pool: PgPool) {
    let result = repo(pool)
        .create(NewQuestion {
            question: Some("Unanswerable?".to_string()),
            answer: None,
            category: Some(1),
            difficulty: Some(1),
        })
        .await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

#[sqlx::test]
async fn test_create_allows_unknown_category(pool: PgPool) {
    let created = repo(pool)
        .create(NewQuestion {
            question: Some("Orphan?".to_string()),
            answer: Some("Yes".to_string()),
            category: Some(1000),
            difficulty: Some(1),
        })
        .await
        .unwrap();

    assert_eq!(created.category, 1000);
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.delete(15).await.unwrap());
    assert!(repo.find_by_id(15).await.unwrap().is_none());
    assert!(!repo.delete(15).await.unwrap());
}

#[sqlx::test]
async fn test_search_is_case_insensitive(pool: PgPool) {
    let matches = repo(pool).search("WORLD cup").await.unwrap();

    let ids: Vec<i32> = matches.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![10, 11]);
}

#[sqlx::test]
async fn test_search_matches_substrings(pool: PgPool) {
    // "entitled" contains "title"
    let matches = repo(pool).search("title").await.unwrap();

    let ids: Vec<i32> = matches.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![5, 6]);
}

#[sqlx::test]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    let repo = repo(pool.clone());
    assert!(repo.search("%").await.unwrap().is_empty());
    assert!(repo.search("_").await.unwrap().is_empty());

    let id = common::insert_question(&pool, "Is 100% of a pie the whole pie?", "Yes", 1, 1).await;
    let matches = repo.search("100%").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, id);
}

#[sqlx::test]
async fn test_list_by_category(pool: PgPool) {
    let questions = repo(pool).list_by_category(2).await.unwrap();

    let ids: Vec<i32> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![16, 17, 18, 19]);
}

#[sqlx::test]
async fn test_list_by_empty_category(pool: PgPool) {
    assert!(repo(pool).list_by_category(8).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_quiz_candidates_any_category(pool: PgPool) {
    let candidates = repo(pool).list_quiz_candidates(&[], None).await.unwrap();
    assert_eq!(candidates.len(), common::SEEDED_QUESTIONS);
}

#[sqlx::test]
async fn test_quiz_candidates_exclude_and_filter(pool: PgPool) {
    let candidates = repo(pool)
        .list_quiz_candidates(&[20, 22], Some(1))
        .await
        .unwrap();

    let ids: Vec<i32> = candidates.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![21]);
}
