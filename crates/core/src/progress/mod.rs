//! Progress module - snapshot models and the reconciliation service.

mod progress_model;
mod progress_service;
mod progress_traits;

pub use progress_model::{Progress, WeeklyProgress};
pub use progress_service::ProgressService;
pub use progress_traits::ProgressServiceTrait;
