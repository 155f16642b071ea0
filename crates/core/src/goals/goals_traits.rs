use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use async_trait::async_trait;

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, updated_goal_data: Goal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
    async fn toggle_milestone(&self, goal_id: &str, milestone_id: &str) -> Result<Goal>;
}
