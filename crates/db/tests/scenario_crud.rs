//! Integration tests for the scenario, view and comment repositories.

use showcase_core::comment::CommentBody;
use showcase_db::models::comment::CreateComment;
use showcase_db::models::scenario::CreateScenario;
use showcase_db::repositories::{CommentRepo, ScenarioRepo, ScenarioViewRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_scenario(title: &str) -> CreateScenario {
    CreateScenario {
        title: title.to_string(),
        description: "desc".into(),
        business_problem: "problem".into(),
        solution: "solution".into(),
        technical_details: "rust + postgres".into(),
        impact: "impact".into(),
        category: "自动化".into(),
        image_url: "https://example.com/a.png".into(),
        team: "平台团队".into(),
        timeline: "2周".into(),
        metrics: vec!["a".into(), "b".into()],
        owner_name: "Owner".into(),
        owner_avatar_url: None,
        requirement_doc_url: Some("https://docs.example.com/req".into()),
        github_repo_url: None,
        demo_manual_url: None,
        install_guide_url: None,
    }
}

fn new_comment(scenario_id: &str, text: &str) -> CreateComment {
    CreateComment::for_scenario(
        scenario_id.to_string(),
        CommentBody {
            comment_text: text.to_string(),
            commenter_name: "Reader".into(),
        },
    )
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_scenario_round_trips_fields(pool: PgPool) {
    let input = new_scenario("Round Trip");
    let created = ScenarioRepo::create(&pool, &input).await.unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.title, input.title);
    assert_eq!(created.metrics, input.metrics);
    assert_eq!(created.requirement_doc_url, input.requirement_doc_url);
    assert_eq!(created.owner_avatar_url, None);

    let found = ScenarioRepo::find_by_id(&pool, &created.id)
        .await
        .unwrap()
        .expect("scenario should exist");
    assert_eq!(found, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_ids_are_unique(pool: PgPool) {
    let a = ScenarioRepo::create(&pool, &new_scenario("A")).await.unwrap();
    let b = ScenarioRepo::create(&pool, &new_scenario("B")).await.unwrap();
    assert_ne!(a.id, b.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_unknown_id_returns_none(pool: PgPool) {
    let found = ScenarioRepo::find_by_id(&pool, "no-such-id").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_insertion_order(pool: PgPool) {
    for title in ["First", "Second", "Third"] {
        ScenarioRepo::create(&pool, &new_scenario(title)).await.unwrap();
    }
    let titles: Vec<_> = ScenarioRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_more_than_five_metrics_violates_check(pool: PgPool) {
    let input = CreateScenario {
        metrics: (0..6).map(|i| format!("m{i}")).collect(),
        ..new_scenario("Too many metrics")
    };
    let err = ScenarioRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().expect("expected database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}

// ---------------------------------------------------------------------------
// Views and analytics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_analytics_ranks_by_view_count(pool: PgPool) {
    let a = ScenarioRepo::create(&pool, &new_scenario("A")).await.unwrap();
    let b = ScenarioRepo::create(&pool, &new_scenario("B")).await.unwrap();
    let unseen = ScenarioRepo::create(&pool, &new_scenario("Unseen")).await.unwrap();

    ScenarioViewRepo::record(&pool, &b.id).await.unwrap();
    for _ in 0..3 {
        ScenarioViewRepo::record(&pool, &a.id).await.unwrap();
    }

    let analytics = ScenarioViewRepo::analytics(&pool).await.unwrap();
    assert_eq!(analytics.len(), 2);

    assert_eq!(analytics[0].scenario_id, a.id);
    assert_eq!(analytics[0].view_count, 3);
    assert_eq!(analytics[0].scenario, a);

    assert_eq!(analytics[1].scenario_id, b.id);
    assert_eq!(analytics[1].view_count, 1);

    assert!(analytics.iter().all(|entry| entry.scenario_id != unseen.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_analytics_is_empty_without_views(pool: PgPool) {
    ScenarioRepo::create(&pool, &new_scenario("Quiet")).await.unwrap();
    let analytics = ScenarioViewRepo::analytics(&pool).await.unwrap();
    assert!(analytics.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_view_for_unknown_scenario_violates_fk(pool: PgPool) {
    let err = ScenarioViewRepo::record(&pool, "missing").await.unwrap_err();
    let db_err = err.as_database_error().expect("expected database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
    assert!(ScenarioViewRepo::analytics(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comments_list_newest_first(pool: PgPool) {
    let s = ScenarioRepo::create(&pool, &new_scenario("Discussed")).await.unwrap();
    let first = CommentRepo::create(&pool, &new_comment(&s.id, "first")).await.unwrap();
    let second = CommentRepo::create(&pool, &new_comment(&s.id, "second")).await.unwrap();

    let comments = CommentRepo::list_by_scenario(&pool, &s.id).await.unwrap();
    let ids: Vec<_> = comments.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(comments[0].created_at >= comments[1].created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comments_are_scoped_to_scenario(pool: PgPool) {
    let a = ScenarioRepo::create(&pool, &new_scenario("A")).await.unwrap();
    let b = ScenarioRepo::create(&pool, &new_scenario("B")).await.unwrap();
    CommentRepo::create(&pool, &new_comment(&a.id, "on a")).await.unwrap();

    assert_eq!(CommentRepo::list_by_scenario(&pool, &a.id).await.unwrap().len(), 1);
    assert!(CommentRepo::list_by_scenario(&pool, &b.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_on_unknown_scenario_violates_fk(pool: PgPool) {
    let err = CommentRepo::create(&pool, &new_comment("missing", "hello"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("expected database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}
