use std::sync::Arc;

use chrono::NaiveDate;
use rstest::rstest;
use taskboard_core::domain::{
    FieldMessages, NewTask, Task, TaskError, TaskFilter, TaskId, TaskPatch, TaskPriority,
    TaskStatus,
};
use taskboard_core::ports::{FixedClock, SequentialIdGenerator};
use taskboard_core::{InMemoryTaskRepository, RepositoryBuilder, TaskRepository};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn task(
    id: u128,
    title: &str,
    description: &str,
    status: TaskStatus,
    priority: TaskPriority,
) -> Task {
    Task {
        id: TaskId::from_u128(id),
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
        due_date: None,
        created_at: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    }
}

fn review_code() -> Task {
    task(
        1,
        "Review code",
        "Review the PR carefully",
        TaskStatus::Pending,
        TaskPriority::High,
    )
}

fn write_docs() -> Task {
    task(
        2,
        "Write docs",
        "Document the API endpoints",
        TaskStatus::Completed,
        TaskPriority::Low,
    )
}

fn repo_with(seed: Vec<Task>) -> InMemoryTaskRepository {
    RepositoryBuilder::new()
        .clock(FixedClock::on(today()))
        .id_generator(SequentialIdGenerator::starting_at(100))
        .seed(seed)
        .build()
        .unwrap()
}

fn seeded() -> InMemoryTaskRepository {
    repo_with(vec![review_code(), write_docs()])
}

fn ids(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(|t| t.id).collect()
}

#[tokio::test]
async fn create_prepends_exactly_one_task() {
    let repo = seeded();
    let before = repo.list().await;

    let created = repo
        .create(NewTask::new("Buy milk", "Get milk from the store").with_due_date("2024-06-01"))
        .await
        .unwrap();

    let after = repo.list().await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0], created);
    assert_eq!(&after[1..], &before[..]);
    assert_eq!(created.id, TaskId::from_u128(100));
    assert_eq!(created.created_at, today());
    assert_eq!(created.status, TaskStatus::Pending);
    assert_eq!(created.priority, TaskPriority::Medium);
    assert_eq!(created.due_date, Some(today()));
}

#[tokio::test]
async fn newest_created_comes_first() {
    let repo = repo_with(vec![]);

    let first = repo
        .create(NewTask::new("First task", "Created before the second"))
        .await
        .unwrap();
    let second = repo
        .create(NewTask::new("Second task", "Created after the first"))
        .await
        .unwrap();

    assert_eq!(ids(&repo.list().await), vec![second.id, first.id]);
}

#[tokio::test]
async fn short_title_and_description_are_both_reported() {
    let repo = seeded();

    let err = repo.create(NewTask::new("ab", "short")).await.unwrap_err();

    let errors = err.validation_errors().unwrap();
    assert_eq!(
        errors.messages(),
        vec![
            ("title", "Title must be at least 3 characters long"),
            ("description", "Description must be at least 10 characters long"),
        ]
    );
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn past_due_date_is_rejected() {
    let repo = seeded();

    let err = repo
        .create(NewTask::new("Buy milk", "Get milk from the store").with_due_date("2000-01-01"))
        .await
        .unwrap_err();

    let errors = err.validation_errors().unwrap();
    assert_eq!(
        errors.messages(),
        vec![("due_date", "Due date cannot be in the past")]
    );
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn empty_update_is_a_no_op() {
    let repo = seeded();

    for t in repo.list().await {
        let updated = repo.update(t.id, TaskPatch::default()).await.unwrap();
        assert_eq!(updated, t);
    }
    assert_eq!(repo.list().await, vec![review_code(), write_docs()]);
}

#[tokio::test]
async fn update_merges_given_fields() {
    let repo = seeded();
    let patch = TaskPatch {
        title: Some("Review code again".to_string()),
        priority: Some(TaskPriority::Medium),
        due_date: Some(Some("2024-07-01".to_string())),
        ..Default::default()
    };

    let updated = repo.update(TaskId::from_u128(1), patch).await.unwrap();

    let original = review_code();
    assert_eq!(updated.title, "Review code again");
    assert_eq!(updated.priority, TaskPriority::Medium);
    assert_eq!(updated.due_date, NaiveDate::from_ymd_opt(2024, 7, 1));
    assert_eq!(updated.description, original.description);
    assert_eq!(updated.status, original.status);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(repo.list().await[0], updated);
}

#[tokio::test]
async fn invalid_update_changes_nothing() {
    let repo = seeded();
    let before = repo.list().await;
    let patch = TaskPatch {
        title: Some("  ".to_string()),
        status: Some(TaskStatus::Completed),
        ..Default::default()
    };

    let err = repo.update(TaskId::from_u128(1), patch).await.unwrap_err();

    assert!(err.validation_errors().unwrap().has("title"));
    assert_eq!(repo.list().await, before);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let repo = seeded();
    let missing = TaskId::from_u128(404);

    assert_eq!(
        repo.update(missing, TaskPatch::default()).await,
        Err(TaskError::NotFound(missing))
    );
    assert_eq!(
        repo.toggle_status(missing).await,
        Err(TaskError::NotFound(missing))
    );
    assert_eq!(repo.get(missing).await, Err(TaskError::NotFound(missing)));
}

#[tokio::test]
async fn toggle_twice_restores_status() {
    let repo = seeded();
    let id = TaskId::from_u128(1);

    let once = repo.toggle_status(id).await.unwrap();
    let twice = repo.toggle_status(id).await.unwrap();

    assert_eq!(once.status, TaskStatus::Completed);
    assert_eq!(twice, review_code());
}

#[tokio::test]
async fn delete_removes_and_second_delete_fails() {
    let repo = seeded();
    let id = TaskId::from_u128(2);

    repo.delete(id).await.unwrap();

    assert!(repo.list().await.iter().all(|t| t.id != id));
    assert_eq!(repo.delete(id).await, Err(TaskError::NotFound(id)));
}

#[tokio::test]
async fn query_all_empty_equals_list() {
    let repo = seeded();
    repo.create(NewTask::new("Deploy application", "Ship the release to production"))
        .await
        .unwrap();

    assert_eq!(repo.query(TaskFilter::All, "").await, repo.list().await);
}

#[rstest]
#[case::pending("pending", "", vec![1])]
#[case::completed("completed", "", vec![2])]
#[case::high("high", "", vec![1])]
#[case::medium("medium", "", vec![])]
#[case::low("low", "", vec![2])]
#[case::search_description("all", "doc", vec![2])]
#[case::search_title_upper("all", "REVIEW", vec![1])]
#[case::search_and_filter("completed", "review", vec![])]
#[case::search_trimmed("all", "  api  ", vec![2])]
#[tokio::test]
async fn query_scenarios(#[case] filter: &str, #[case] search: &str, #[case] expected: Vec<u128>) {
    let repo = seeded();

    let result = repo.query(filter.parse().unwrap(), search).await;

    let expected: Vec<TaskId> = expected.into_iter().map(TaskId::from_u128).collect();
    assert_eq!(ids(&result), expected);
}

#[tokio::test]
async fn search_matches_title_regardless_of_case() {
    let repo = seeded();
    let deploy = repo
        .create(NewTask::new("Deploy application", "Ship the release to production"))
        .await
        .unwrap();

    assert_eq!(repo.query(TaskFilter::All, "DEPLOY").await, vec![deploy]);
}

#[tokio::test]
async fn filters_return_exact_subsets() {
    let repo = seeded();
    repo.create(
        NewTask::new("Fix login bug", "Users cannot sign in with SSO")
            .with_priority(TaskPriority::High)
            .with_status(TaskStatus::Completed),
    )
    .await
    .unwrap();
    let all = repo.list().await;

    for key in TaskFilter::KEYS {
        let expected: Vec<Task> = all.iter().filter(|t| key.matches(t)).cloned().collect();
        assert_eq!(repo.query(key, "").await, expected, "filter {key}");
    }
}

#[tokio::test]
async fn concurrent_creates_get_unique_ids() {
    let repo = Arc::new(repo_with(vec![]));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.create(NewTask::new(format!("Task {i:02}"), "Created from a spawned task"))
                    .await
                    .unwrap()
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let mut all = ids(&repo.list().await);
    assert_eq!(all.len(), 20);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 20);
}

#[tokio::test]
async fn generated_id_colliding_with_seed_is_skipped() {
    let repo = RepositoryBuilder::new()
        .clock(FixedClock::on(today()))
        .id_generator(SequentialIdGenerator::starting_at(2))
        .seed(vec![review_code(), write_docs()])
        .build()
        .unwrap();

    let created = repo
        .create(NewTask::new("Another task", "Should not reuse id two"))
        .await
        .unwrap();

    assert_eq!(created.id, TaskId::from_u128(3));
}
