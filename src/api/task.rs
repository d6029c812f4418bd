//! Task resource operations.
//!
//! Tasks carry an absolute UTC due instant; the list operation optionally
//! filters on the inclusive `[from, to]` interval (both bounds must be
//! supplied to activate filtering) and always orders ascending by due date.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{consts, models, models::task::TaskStatus, repo, rest::errors::ApiError, timestamp};

/// Wire shape of a task; `due_at` is always rendered with an explicit
/// `+00:00` offset.
#[derive(Debug, Serialize)]
pub struct TaskSchema {
    pub id: i64,
    pub pet_id: i64,
    pub title: String,
    pub category: String,
    pub due_at: String,
    pub status: TaskStatus,
    pub notes: String,
}

impl From<models::task::Task> for TaskSchema {
    fn from(val: models::task::Task) -> Self {
        TaskSchema {
            id: val.id,
            pet_id: val.pet_id,
            title: val.title,
            category: val.category,
            due_at: timestamp::format(val.due_at),
            status: val.status,
            notes: val.notes,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskPayload {
    pub pet_id: Option<i64>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub due_at: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskPayload {
    pub title: Option<String>,
    pub category: Option<String>,
    pub due_at: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TaskListQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusPayload {
    pub status: Option<String>,
}

pub async fn list_tasks(
    query: TaskListQuery,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<TaskSchema>, ApiError> {
    // filtering activates only when both bounds are present and non-empty
    let range = match (
        query.from.filter(|from| !from.is_empty()),
        query.to.filter(|to| !to.is_empty()),
    ) {
        (Some(from), Some(to)) => Some((
            timestamp::parse_iso8601(&from)
                .map_err(|e| ApiError::Validation(format!("invalid 'from' bound: {}", e)))?,
            timestamp::parse_iso8601(&to)
                .map_err(|e| ApiError::Validation(format!("invalid 'to' bound: {}", e)))?,
        )),
        _ => None,
    };

    Ok(repo
        .get_tasks_by_due_range(range)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn create_task(
    payload: CreateTaskPayload,
    repo: &repo::ImplAppRepo,
) -> Result<TaskSchema, ApiError> {
    let pet_id = payload
        .pet_id
        .ok_or_else(|| ApiError::Validation("pet_id is required".into()))?;

    let title = payload.title.unwrap_or_default();
    if title.trim().is_empty() {
        return Err(ApiError::Validation("title is required".into()));
    }

    let due_at_raw = payload
        .due_at
        .ok_or_else(|| ApiError::Validation("due_at is required".into()))?;
    let due_at = timestamp::parse_iso8601(&due_at_raw)
        .map_err(|e| ApiError::Validation(format!("invalid due_at: {}", e)))?;

    if repo.get_pet_by_id(pet_id).await?.is_none() {
        return Err(ApiError::Validation(format!(
            "pet_id {} does not reference an existing pet",
            pet_id
        )));
    }

    let now = Utc::now();
    let task = models::task::Task {
        id: 0,
        pet_id,
        title,
        category: payload
            .category
            .unwrap_or_else(|| consts::DEFAULT_TASK_CATEGORY.into()),
        due_at,
        status: TaskStatus::Pending,
        notes: payload.notes.unwrap_or_default(),
        created_at: now,
        updated_at: now,
    };

    Ok(repo.insert_task(task).await?.into())
}

pub async fn get_task(task_id: i64, repo: &repo::ImplAppRepo) -> Result<TaskSchema, ApiError> {
    repo.get_task_by_id(task_id)
        .await?
        .map(Into::into)
        .ok_or(ApiError::NotFound)
}

pub async fn update_task(
    task_id: i64,
    payload: UpdateTaskPayload,
    repo: &repo::ImplAppRepo,
) -> Result<TaskSchema, ApiError> {
    let mut task = repo
        .get_task_by_id(task_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if let Some(title) = payload.title {
        if title.trim().is_empty() {
            return Err(ApiError::Validation("title cannot be empty".into()));
        }
        task.title = title;
    }
    if let Some(category) = payload.category {
        task.category = category;
    }
    if let Some(due_at) = payload.due_at {
        task.due_at = timestamp::parse_iso8601(&due_at)
            .map_err(|e| ApiError::Validation(format!("invalid due_at: {}", e)))?;
    }
    if let Some(notes) = payload.notes {
        task.notes = notes;
    }
    task.updated_at = Utc::now();

    repo.update_task(task.clone()).await?;

    Ok(task.into())
}

pub async fn delete_task(task_id: i64, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    repo.get_task_by_id(task_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    repo.delete_task(task_id).await?;

    Ok(())
}

/// Sets the task status. Any value outside the three-value enumeration is
/// rejected and the stored status is left untouched.
pub async fn set_task_status(
    task_id: i64,
    payload: StatusPayload,
    repo: &repo::ImplAppRepo,
) -> Result<TaskSchema, ApiError> {
    let mut task = repo
        .get_task_by_id(task_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let raw = payload
        .status
        .ok_or_else(|| ApiError::Validation("status is required".into()))?;
    let status: TaskStatus = raw
        .parse()
        .map_err(|_| ApiError::Validation(format!("invalid status: {:?}", raw)))?;

    repo.set_task_status(task_id, status).await?;
    task.status = status;

    Ok(task.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::predicate::*;

    fn create_test_task(id: i64, pet_id: i64, due_at: DateTime<Utc>) -> models::task::Task {
        models::task::Task {
            id,
            pet_id,
            title: "evening walk".to_string(),
            category: "walk".to_string(),
            due_at,
            status: TaskStatus::Pending,
            notes: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_test_pet(id: i64) -> models::pet::Pet {
        models::pet::Pet {
            id,
            name: "Rex".to_string(),
            species: "dog".to_string(),
            notes: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[ntex::test]
    async fn test_create_task_parses_due_at_and_defaults() {
        let expected_due = Utc.with_ymd_and_hms(2025, 8, 18, 14, 30, 0).unwrap();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_pet_by_id()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(Some(create_test_pet(3))));
        mock_repo
            .expect_insert_task()
            .withf(move |task| {
                task.due_at == expected_due
                    && task.category == "other"
                    && task.status == TaskStatus::Pending
            })
            .times(1)
            .returning(|task| Ok(models::task::Task { id: 9, ..task }));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let payload = CreateTaskPayload {
            pet_id: Some(3),
            title: Some("give meds".into()),
            due_at: Some("2025-08-18T14:30:00Z".into()),
            ..Default::default()
        };
        let created = create_task(payload, &mock_repo).await.unwrap();

        assert_eq!(created.id, 9);
        assert_eq!(created.due_at, "2025-08-18T14:30:00+00:00");
    }

    #[ntex::test]
    async fn test_create_task_unknown_pet_is_rejected() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_pet_by_id()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(None));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let payload = CreateTaskPayload {
            pet_id: Some(42),
            title: Some("vet visit".into()),
            due_at: Some("2025-08-18T14:30:00Z".into()),
            ..Default::default()
        };
        let result = create_task(payload, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_create_task_missing_fields_are_rejected() {
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(MockAppRepo::new());

        let missing_pet = CreateTaskPayload {
            title: Some("walk".into()),
            due_at: Some("2025-08-18T14:30:00Z".into()),
            ..Default::default()
        };
        assert!(matches!(
            create_task(missing_pet, &mock_repo).await,
            Err(ApiError::Validation(_))
        ));

        let missing_due = CreateTaskPayload {
            pet_id: Some(1),
            title: Some("walk".into()),
            ..Default::default()
        };
        assert!(matches!(
            create_task(missing_due, &mock_repo).await,
            Err(ApiError::Validation(_))
        ));
    }

    #[ntex::test]
    async fn test_create_task_malformed_due_at_is_rejected() {
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(MockAppRepo::new());

        let payload = CreateTaskPayload {
            pet_id: Some(1),
            title: Some("walk".into()),
            due_at: Some("next tuesday".into()),
            ..Default::default()
        };
        let result = create_task(payload, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_list_tasks_passes_inclusive_bounds() {
        let from = Utc.with_ymd_and_hms(2025, 8, 18, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 8, 19, 0, 0, 0).unwrap();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_tasks_by_due_range()
            .with(eq(Some((from, to))))
            .times(1)
            .returning(move |_| Ok(vec![create_test_task(1, 3, from)]));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let query = TaskListQuery {
            from: Some("2025-08-18T00:00:00Z".into()),
            to: Some("2025-08-19T00:00:00Z".into()),
        };
        let tasks = list_tasks(query, &mock_repo).await.unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].due_at, "2025-08-18T00:00:00+00:00");
    }

    #[ntex::test]
    async fn test_list_tasks_single_bound_does_not_filter() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_tasks_by_due_range()
            .with(eq(None))
            .times(1)
            .returning(|_| Ok(vec![]));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let query = TaskListQuery {
            from: Some("2025-08-18T00:00:00Z".into()),
            to: None,
        };
        assert!(list_tasks(query, &mock_repo).await.unwrap().is_empty());
    }

    #[ntex::test]
    async fn test_list_tasks_empty_bound_does_not_filter() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_tasks_by_due_range()
            .with(eq(None))
            .times(1)
            .returning(|_| Ok(vec![]));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let query = TaskListQuery {
            from: Some(String::new()),
            to: Some("2025-08-19T00:00:00Z".into()),
        };
        assert!(list_tasks(query, &mock_repo).await.unwrap().is_empty());
    }

    #[ntex::test]
    async fn test_list_tasks_malformed_bound_is_rejected() {
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(MockAppRepo::new());

        let query = TaskListQuery {
            from: Some("not-a-date".into()),
            to: Some("2025-08-19T00:00:00Z".into()),
        };
        let result = list_tasks(query, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_update_task_reparses_due_at_and_merges() {
        let old_due = Utc.with_ymd_and_hms(2025, 8, 18, 14, 30, 0).unwrap();
        let new_due = Utc.with_ymd_and_hms(2025, 8, 20, 9, 0, 0).unwrap();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_task_by_id()
            .with(eq(5))
            .times(1)
            .returning(move |_| Ok(Some(create_test_task(5, 3, old_due))));
        mock_repo
            .expect_update_task()
            .withf(move |task| task.due_at == new_due && task.title == "evening walk")
            .times(1)
            .returning(|_| Ok(()));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let payload = UpdateTaskPayload {
            due_at: Some("2025-08-20T09:00:00+00:00".into()),
            ..Default::default()
        };
        let updated = update_task(5, payload, &mock_repo).await.unwrap();

        assert_eq!(updated.due_at, "2025-08-20T09:00:00+00:00");
        assert_eq!(updated.title, "evening walk");
    }

    #[ntex::test]
    async fn test_get_task_unknown_id_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_task_by_id()
            .with(eq(404))
            .times(1)
            .returning(|_| Ok(None));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        assert!(matches!(
            get_task(404, &mock_repo).await,
            Err(ApiError::NotFound)
        ));
    }

    #[ntex::test]
    async fn test_set_status_persists_allowed_value() {
        let due = Utc.with_ymd_and_hms(2025, 8, 18, 14, 30, 0).unwrap();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_task_by_id()
            .with(eq(5))
            .times(1)
            .returning(move |_| Ok(Some(create_test_task(5, 3, due))));
        mock_repo
            .expect_set_task_status()
            .with(eq(5), eq(TaskStatus::Done))
            .times(1)
            .returning(|_, _| Ok(()));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let payload = StatusPayload {
            status: Some("done".into()),
        };
        let updated = set_task_status(5, payload, &mock_repo).await.unwrap();

        assert_eq!(updated.status, TaskStatus::Done);
    }

    #[ntex::test]
    async fn test_set_status_rejects_value_outside_enumeration() {
        let due = Utc.with_ymd_and_hms(2025, 8, 18, 14, 30, 0).unwrap();

        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_task_by_id()
            .with(eq(5))
            .times(1)
            .returning(move |_| Ok(Some(create_test_task(5, 3, due))));
        // no expect_set_task_status: the stored status must stay untouched
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let payload = StatusPayload {
            status: Some("archived".into()),
        };
        let result = set_task_status(5, payload, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_set_status_unknown_task_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_task_by_id()
            .with(eq(404))
            .times(1)
            .returning(|_| Ok(None));
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);

        let payload = StatusPayload {
            status: Some("done".into()),
        };
        let result = set_task_status(404, payload, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[test]
    fn test_task_schema_serializes_status_lowercase() {
        let due = Utc.with_ymd_and_hms(2025, 8, 18, 14, 30, 0).unwrap();
        let schema: TaskSchema = create_test_task(1, 3, due).into();

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["status"], "pending");
        assert_eq!(value["due_at"], "2025-08-18T14:30:00+00:00");
    }
}
