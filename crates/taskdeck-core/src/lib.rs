//! # Taskdeck Core Library
//!
//! A personal task-tracking library with a durable JSON key-value store,
//! derived analytics, date-based notifications, and rule-based suggestions.
//!
//! ## Features
//!
//! - **Durable JSON Store**: One pretty-printed document per key with an
//!   in-memory mirror and a change feed
//! - **Task Repository**: Validated CRUD with status/progress coupling and
//!   short-id prefix resolution
//! - **Derived Analytics**: Pure functions from the task collection to
//!   aggregate stats, trends, and productivity scores
//! - **Notifications**: Due-today, overdue, and reminder scans deduplicated
//!   per task, type, and calendar day
//! - **Smart Suggestions**: A fixed rule list evaluated on demand, ordered
//!   by severity
//! - **Export/Import**: CSV export plus a versioned JSON backup document
//!
//! ## Core Modules
//!
//! - [`store`]: Persisted key-value layer and change feed
//! - [`models`]: Core data structures and transfer objects
//! - [`repository`]: Data access layer with Repository pattern
//! - [`query`]: Filtering and sorting for task listings
//! - [`analytics`]: Aggregate statistics and productivity derivations
//! - [`notifications`]: Notification generation and the persisted log
//! - [`suggestions`]: Rule-based productivity suggestions
//! - [`export`]: CSV and JSON backup rendering and import parsing
//! - [`error`]: Error types with context
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskdeck_core::{
//!     models::NewTaskData,
//!     repository::{JsonStoreRepository, Repository},
//!     store::Store,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(Store::open("taskdeck-data")?);
//!     let repo = JsonStoreRepository::new(store);
//!
//!     let task = repo
//!         .add_task(NewTaskData {
//!             title: "Write quarterly report".to_string(),
//!             tags: "work, writing".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("Created task: {}", task.title);
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod error;
pub mod export;
pub mod models;
pub mod notifications;
pub mod query;
pub mod repository;
pub mod store;
pub mod suggestions;
