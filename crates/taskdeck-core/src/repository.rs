//! Data access layer for the task collection.
//!
//! The repository exclusively owns the `tasks` key in the persisted store;
//! every other component works on read-only snapshots obtained here.

use crate::error::CoreError;
use crate::models::{
    is_known_category, parse_estimate, parse_tags, AppSettings, NewTaskData, Task, TaskStatus,
    UpdateTaskData,
};
use crate::query::{sort_tasks, TaskQuery};
use crate::store::{Store, APP_SETTINGS_KEY, TASKS_KEY};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait Repository {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, CoreError>;
    async fn find_tasks_by_id_prefix(&self, prefix: &str) -> Result<Vec<Task>, CoreError>;
    async fn all_tasks(&self) -> Result<Vec<Task>, CoreError>;
    async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>, CoreError>;
    async fn update_task(&self, id: Uuid, data: UpdateTaskData) -> Result<Task, CoreError>;
    async fn set_status(&self, id: Uuid, status: TaskStatus) -> Result<Task, CoreError>;
    async fn set_progress(&self, id: Uuid, progress: u8) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError>;
    /// Atomic full replacement of the collection, used by import. Returns
    /// the new task count.
    async fn replace_all_tasks(&self, tasks: Vec<Task>) -> Result<usize, CoreError>;
}

/// Repository backed by the JSON key-value store.
pub struct JsonStoreRepository {
    store: Arc<Store>,
}

impl JsonStoreRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    async fn load(&self) -> Vec<Task> {
        self.store.read(TASKS_KEY, Vec::new()).await
    }

    async fn save(&self, tasks: &[Task]) -> Result<(), CoreError> {
        self.store.write(TASKS_KEY, &tasks).await
    }

    async fn mutate<F>(&self, id: Uuid, apply: F) -> Result<Task, CoreError>
    where
        F: FnOnce(&mut Task) + Send,
    {
        let mut tasks = self.load().await;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Err(CoreError::NotFound(format!(
                "Task with ID '{id}' not found"
            )));
        };
        apply(task);
        let updated = task.clone();
        self.save(&tasks).await?;
        Ok(updated)
    }
}

#[async_trait]
impl Repository for JsonStoreRepository {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError> {
        let title = data.title.trim().to_string();
        if title.is_empty() {
            return Err(CoreError::InvalidInput(
                "task title cannot be empty".to_string(),
            ));
        }
        if let Some(category) = &data.category {
            if !is_known_category(category) {
                return Err(CoreError::InvalidInput(format!(
                    "unknown category: '{category}'"
                )));
            }
        }

        let settings: AppSettings = self.store.read(APP_SETTINGS_KEY, AppSettings::default()).await;
        let task = Task {
            id: Uuid::now_v7(),
            title,
            description: data.description,
            priority: data.priority.unwrap_or(settings.default_priority),
            status: TaskStatus::Todo,
            category: data.category.unwrap_or(settings.default_category),
            due_date: data.due_date,
            created_at: Utc::now(),
            progress: 0,
            tags: parse_tags(&data.tags),
            estimated_hours: parse_estimate(&data.estimated_hours),
        };

        let mut tasks = self.load().await;
        tasks.push(task.clone());
        self.save(&tasks).await?;
        Ok(task)
    }

    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, CoreError> {
        Ok(self.load().await.into_iter().find(|t| t.id == id))
    }

    async fn find_tasks_by_id_prefix(&self, prefix: &str) -> Result<Vec<Task>, CoreError> {
        let prefix = prefix.to_lowercase();
        Ok(self
            .load()
            .await
            .into_iter()
            .filter(|t| t.id.to_string().starts_with(&prefix))
            .collect())
    }

    async fn all_tasks(&self) -> Result<Vec<Task>, CoreError> {
        Ok(self.load().await)
    }

    async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>, CoreError> {
        let mut tasks: Vec<Task> = self
            .load()
            .await
            .into_iter()
            .filter(|t| query.matches(t))
            .collect();
        sort_tasks(&mut tasks, query.sort);
        Ok(tasks)
    }

    async fn update_task(&self, id: Uuid, data: UpdateTaskData) -> Result<Task, CoreError> {
        if let Some(title) = &data.title {
            if title.trim().is_empty() {
                return Err(CoreError::InvalidInput(
                    "task title cannot be empty".to_string(),
                ));
            }
        }
        if let Some(category) = &data.category {
            if !is_known_category(category) {
                return Err(CoreError::InvalidInput(format!(
                    "unknown category: '{category}'"
                )));
            }
        }

        // A patch applies fields verbatim: no status/progress synchronization
        // happens here, only through set_status/set_progress.
        self.mutate(id, move |task| {
            if let Some(title) = data.title {
                task.title = title.trim().to_string();
            }
            if let Some(description) = data.description {
                task.description = description;
            }
            if let Some(priority) = data.priority {
                task.priority = priority;
            }
            if let Some(status) = data.status {
                task.status = status;
            }
            if let Some(category) = data.category {
                task.category = category;
            }
            if let Some(due_date) = data.due_date {
                task.due_date = due_date;
            }
            if let Some(progress) = data.progress {
                task.progress = progress.min(100);
            }
            if let Some(tags) = data.tags {
                task.tags = tags;
            }
            if let Some(estimated_hours) = data.estimated_hours {
                task.estimated_hours = estimated_hours.filter(|h| h.is_finite() && *h > 0.0);
            }
        })
        .await
    }

    async fn set_status(&self, id: Uuid, status: TaskStatus) -> Result<Task, CoreError> {
        self.mutate(id, move |task| {
            task.status = status;
            // Completing a task forces full progress; leaving the completed
            // state deliberately does not reset it.
            if status == TaskStatus::Completed {
                task.progress = 100;
            }
        })
        .await
    }

    async fn set_progress(&self, id: Uuid, progress: u8) -> Result<Task, CoreError> {
        let progress = progress.min(100);
        self.mutate(id, move |task| {
            task.progress = progress;
            task.status = match progress {
                100 => TaskStatus::Completed,
                1..=99 => TaskStatus::InProgress,
                _ => TaskStatus::Todo,
            };
        })
        .await
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError> {
        let mut tasks = self.load().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            // Deleting an id that is already gone is a no-op.
            return Ok(());
        }
        self.save(&tasks).await
    }

    async fn replace_all_tasks(&self, tasks: Vec<Task>) -> Result<usize, CoreError> {
        let count = tasks.len();
        self.save(&tasks).await?;
        Ok(count)
    }
}
