use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Row, SqlitePool, sqlite::SqliteRow};

use super::{AppRepo, sqlite_queries};

#[derive(Clone)]
pub struct SqlxSqliteRepo {
    pub db_pool: SqlitePool,
}

impl SqlxSqliteRepo {
    /// Bootstraps the two tables on startup. Idempotent.
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_CREATE_PET_TABLE)
            .execute(&self.db_pool)
            .await?;
        sqlx::query(sqlite_queries::QUERY_CREATE_TASK_TABLE)
            .execute(&self.db_pool)
            .await?;

        Ok(())
    }
}

impl FromRow<'_, SqliteRow> for models::pet::Pet {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            species: row.try_get("species")?,
            notes: row.try_get("notes")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl FromRow<'_, SqliteRow> for models::task::Task {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            pet_id: row.try_get("pet_id")?,
            title: row.try_get("title")?,
            category: row.try_get("category")?,
            due_at: row.try_get("due_at")?,
            status: row
                .try_get::<String, &str>("status")?
                .parse()
                .unwrap_or_default(),
            notes: row.try_get("notes")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl AppRepo for SqlxSqliteRepo {
    async fn get_all_pets(&self) -> anyhow::Result<Vec<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_ALL_PETS)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_pet_by_id(&self, pet_id: i64) -> anyhow::Result<Option<models::pet::Pet>> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_GET_PET_BY_ID)
                .bind(pet_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_pet(&self, pet: models::pet::Pet) -> anyhow::Result<models::pet::Pet> {
        Ok(
            sqlx::query_as::<_, models::pet::Pet>(sqlite_queries::QUERY_INSERT_PET)
                .bind(&pet.name)
                .bind(&pet.species)
                .bind(&pet.notes)
                .bind(pet.created_at)
                .bind(pet.updated_at)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn update_pet(&self, pet: models::pet::Pet) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_PET)
            .bind(pet.id)
            .bind(&pet.name)
            .bind(&pet.species)
            .bind(&pet.notes)
            .bind(pet.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn delete_pet_with_tasks(&self, pet_id: i64) -> anyhow::Result<()> {
        let mut transaction = self.db_pool.begin().await?;

        sqlx::query(sqlite_queries::QUERY_DELETE_TASKS_OF_PET)
            .bind(pet_id)
            .execute(&mut *transaction)
            .await?;

        sqlx::query(sqlite_queries::QUERY_DELETE_PET)
            .bind(pet_id)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(())
    }

    async fn get_tasks_by_due_range(
        &self,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> anyhow::Result<Vec<models::task::Task>> {
        let query = match range {
            Some((from, to)) => {
                sqlx::query_as::<_, models::task::Task>(sqlite_queries::QUERY_GET_TASKS_IN_DUE_RANGE)
                    .bind(from)
                    .bind(to)
            }
            None => sqlx::query_as::<_, models::task::Task>(sqlite_queries::QUERY_GET_TASKS),
        };

        Ok(query.fetch_all(&self.db_pool).await?)
    }

    async fn get_task_by_id(&self, task_id: i64) -> anyhow::Result<Option<models::task::Task>> {
        Ok(
            sqlx::query_as::<_, models::task::Task>(sqlite_queries::QUERY_GET_TASK_BY_ID)
                .bind(task_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn insert_task(&self, task: models::task::Task) -> anyhow::Result<models::task::Task> {
        Ok(
            sqlx::query_as::<_, models::task::Task>(sqlite_queries::QUERY_INSERT_TASK)
                .bind(task.pet_id)
                .bind(&task.title)
                .bind(&task.category)
                .bind(task.due_at)
                .bind(task.status.to_string())
                .bind(&task.notes)
                .bind(task.created_at)
                .bind(task.updated_at)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn update_task(&self, task: models::task::Task) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_UPDATE_TASK)
            .bind(task.id)
            .bind(&task.title)
            .bind(&task.category)
            .bind(task.due_at)
            .bind(&task.notes)
            .bind(task.updated_at)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn delete_task(&self, task_id: i64) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_TASK)
            .bind(task_id)
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }

    async fn set_task_status(
        &self,
        task_id: i64,
        status: models::task::TaskStatus,
    ) -> anyhow::Result<()> {
        Ok(sqlx::query(sqlite_queries::QUERY_SET_TASK_STATUS)
            .bind(task_id)
            .bind(status.to_string())
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await
            .map(|_| ())?)
    }
}
