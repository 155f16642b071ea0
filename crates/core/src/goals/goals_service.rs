use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{Goal, NewGoal};
use crate::goals::goals_traits::GoalServiceTrait;
use crate::storage::StorageRepositoryTrait;

/// Service for goal CRUD and milestone toggling over the storage gateway.
///
/// The goal collection's canonical home is the goals bucket; every mutation
/// loads the collection, applies the change, and writes the collection back.
pub struct GoalService {
    storage: Arc<dyn StorageRepositoryTrait>,
}

impl GoalService {
    pub fn new(storage: Arc<dyn StorageRepositoryTrait>) -> Self {
        GoalService { storage }
    }

    fn validate_new_goal(new_goal: &NewGoal) -> Result<()> {
        if new_goal.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        if new_goal.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "description".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.storage.load_goals()
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        Self::validate_new_goal(&new_goal)?;

        let goal = Goal::from_new(new_goal);
        let mut goals = self.storage.load_goals()?;
        goals.push(goal.clone());
        self.storage.save_goals(&goals).await?;

        debug!("Created goal {} with {} milestones", goal.id, goal.milestones.len());
        Ok(goal)
    }

    async fn update_goal(&self, updated_goal_data: Goal) -> Result<Goal> {
        let mut goals = self.storage.load_goals()?;
        let slot = goals
            .iter_mut()
            .find(|g| g.id == updated_goal_data.id)
            .ok_or_else(|| Error::NotFound(format!("Goal '{}' not found", updated_goal_data.id)))?;

        let mut updated = updated_goal_data;
        updated.refresh_progress();
        updated.updated_at = Utc::now();
        *slot = updated.clone();

        self.storage.save_goals(&goals).await?;
        Ok(updated)
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        let mut goals = self.storage.load_goals()?;
        let before = goals.len();
        goals.retain(|g| g.id != goal_id_to_delete);
        let removed = before - goals.len();

        if removed > 0 {
            self.storage.save_goals(&goals).await?;
        }
        Ok(removed)
    }

    async fn toggle_milestone(&self, goal_id: &str, milestone_id: &str) -> Result<Goal> {
        let mut goals = self.storage.load_goals()?;
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| Error::NotFound(format!("Goal '{}' not found", goal_id)))?;

        goal.toggle_milestone(milestone_id)?;
        let toggled = goal.clone();

        self.storage.save_goals(&goals).await?;
        Ok(toggled)
    }
}
