pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppRepo {
    async fn get_all_pets(&self) -> anyhow::Result<Vec<models::pet::Pet>>;

    async fn get_pet_by_id(&self, pet_id: i64) -> anyhow::Result<Option<models::pet::Pet>>;

    async fn insert_pet(&self, pet: models::pet::Pet) -> anyhow::Result<models::pet::Pet>;

    async fn update_pet(&self, pet: models::pet::Pet) -> anyhow::Result<()>;

    /// Removes the pet together with every task referencing it.
    async fn delete_pet_with_tasks(&self, pet_id: i64) -> anyhow::Result<()>;

    /// Tasks ordered ascending by due date, optionally restricted to the
    /// inclusive `[from, to]` interval.
    async fn get_tasks_by_due_range(
        &self,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> anyhow::Result<Vec<models::task::Task>>;

    async fn get_task_by_id(&self, task_id: i64) -> anyhow::Result<Option<models::task::Task>>;

    async fn insert_task(&self, task: models::task::Task) -> anyhow::Result<models::task::Task>;

    async fn update_task(&self, task: models::task::Task) -> anyhow::Result<()>;

    async fn delete_task(&self, task_id: i64) -> anyhow::Result<()>;

    async fn set_task_status(
        &self,
        task_id: i64,
        status: models::task::TaskStatus,
    ) -> anyhow::Result<()>;
}

pub type ImplAppRepo = Box<dyn AppRepo>;
