//! Goals domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result};

/// Closed set of goal categories.
///
/// Unknown category strings deserialize to `Other`, which carries the
/// fallback display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Career,
    Health,
    Education,
    Relationships,
    Finance,
    PersonalDevelopment,
    Hobbies,
    Spirituality,
    Travel,
    #[serde(other)]
    Other,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 10] = [
        GoalCategory::Career,
        GoalCategory::Health,
        GoalCategory::Education,
        GoalCategory::Relationships,
        GoalCategory::Finance,
        GoalCategory::PersonalDevelopment,
        GoalCategory::Hobbies,
        GoalCategory::Spirituality,
        GoalCategory::Travel,
        GoalCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Career => "career",
            GoalCategory::Health => "health",
            GoalCategory::Education => "education",
            GoalCategory::Relationships => "relationships",
            GoalCategory::Finance => "finance",
            GoalCategory::PersonalDevelopment => "personal_development",
            GoalCategory::Hobbies => "hobbies",
            GoalCategory::Spirituality => "spirituality",
            GoalCategory::Travel => "travel",
            GoalCategory::Other => "other",
        }
    }

    /// Parse a category string, falling back to `Other` for anything
    /// unrecognized.
    pub fn parse(value: &str) -> GoalCategory {
        match value {
            "career" => GoalCategory::Career,
            "health" => GoalCategory::Health,
            "education" => GoalCategory::Education,
            "relationships" => GoalCategory::Relationships,
            "finance" => GoalCategory::Finance,
            "personal_development" => GoalCategory::PersonalDevelopment,
            "hobbies" => GoalCategory::Hobbies,
            "spirituality" => GoalCategory::Spirituality,
            "travel" => GoalCategory::Travel,
            _ => GoalCategory::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Career => "Career",
            GoalCategory::Health => "Health",
            GoalCategory::Education => "Education",
            GoalCategory::Relationships => "Relationships",
            GoalCategory::Finance => "Finance",
            GoalCategory::PersonalDevelopment => "Personal Development",
            GoalCategory::Hobbies => "Hobbies",
            GoalCategory::Spirituality => "Spirituality",
            GoalCategory::Travel => "Travel",
            GoalCategory::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GoalCategory::Career => "💼",
            GoalCategory::Health => "🏃‍♂️",
            GoalCategory::Education => "📚",
            GoalCategory::Relationships => "❤️",
            GoalCategory::Finance => "💰",
            GoalCategory::PersonalDevelopment => "🧠",
            GoalCategory::Hobbies => "🎨",
            GoalCategory::Spirituality => "🕉️",
            GoalCategory::Travel => "✈️",
            GoalCategory::Other => "📌",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            GoalCategory::Career => "#3B82F6",
            GoalCategory::Health => "#10B981",
            GoalCategory::Education => "#8B5CF6",
            GoalCategory::Relationships => "#EC4899",
            GoalCategory::Finance => "#F59E0B",
            GoalCategory::PersonalDevelopment => "#6366F1",
            GoalCategory::Hobbies => "#EF4444",
            GoalCategory::Spirituality => "#8B5CF6",
            GoalCategory::Travel => "#06B6D4",
            GoalCategory::Other => "#6B7280",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
    Paused,
}

impl Default for GoalStatus {
    fn default() -> Self {
        GoalStatus::NotStarted
    }
}

/// A sub-step of a goal. Owned exclusively by its parent goal.
///
/// Invariant: `completed_at` is present if and only if `is_completed` is true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub due_date: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Input model for creating a milestone under a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestone {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
}

/// Domain model representing a single trackable objective
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub priority: GoalPriority,
    pub status: GoalStatus,
    pub deadline: Option<NaiveDate>,
    pub milestones: Vec<Milestone>,
    /// Completion percentage in [0, 100], derived from the milestone list.
    /// Only `refresh_progress` writes this field.
    pub progress: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub priority: GoalPriority,
    pub deadline: Option<NaiveDate>,
    pub milestones: Vec<NewMilestone>,
}

impl Goal {
    /// Assemble a goal from user input: fresh ids, not-started status, and
    /// the derived initial progress.
    pub fn from_new(new_goal: NewGoal) -> Self {
        let now = Utc::now();
        let milestones = new_goal
            .milestones
            .into_iter()
            .map(|m| Milestone {
                id: Uuid::new_v4().to_string(),
                title: m.title,
                description: m.description,
                is_completed: false,
                due_date: m.due_date,
                completed_at: None,
            })
            .collect();

        let mut goal = Goal {
            id: Uuid::new_v4().to_string(),
            title: new_goal.title,
            description: new_goal.description,
            category: new_goal.category,
            priority: new_goal.priority,
            status: GoalStatus::default(),
            deadline: new_goal.deadline,
            milestones,
            progress: 0,
            created_at: now,
            updated_at: now,
        };
        goal.refresh_progress();
        goal
    }

    /// Completion percentage derived from the milestone list.
    ///
    /// Empty list derives 0; otherwise `round(100 * completed / total)` with
    /// half-up rounding.
    pub fn calculated_progress(&self) -> i32 {
        if self.milestones.is_empty() {
            return 0;
        }
        let completed = self.milestones.iter().filter(|m| m.is_completed).count();
        ((completed as f64 / self.milestones.len() as f64) * 100.0).round() as i32
    }

    /// Re-derive `progress` from the current milestone list.
    pub fn refresh_progress(&mut self) {
        self.progress = self.calculated_progress();
    }

    /// Flip a milestone's completion flag.
    ///
    /// Sets or clears `completed_at`, re-derives `progress`, and bumps
    /// `updated_at` in one transition. Returns `NotFound` when the id does
    /// not belong to this goal, leaving the goal untouched.
    pub fn toggle_milestone(&mut self, milestone_id: &str) -> Result<()> {
        let now = Utc::now();
        let milestone = self
            .milestones
            .iter_mut()
            .find(|m| m.id == milestone_id)
            .ok_or_else(|| Error::NotFound(format!("Milestone '{}' not found", milestone_id)))?;

        milestone.is_completed = !milestone.is_completed;
        milestone.completed_at = if milestone.is_completed {
            Some(now)
        } else {
            None
        };

        self.refresh_progress();
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn goal_with_milestones(completed_flags: &[bool]) -> Goal {
        let mut goal = Goal::from_new(NewGoal {
            title: "Run a marathon".to_string(),
            description: "Train up to 42 km".to_string(),
            category: GoalCategory::Health,
            priority: GoalPriority::High,
            deadline: None,
            milestones: completed_flags
                .iter()
                .enumerate()
                .map(|(i, _)| NewMilestone {
                    title: format!("Week {}", i + 1),
                    description: String::new(),
                    due_date: None,
                })
                .collect(),
        });
        for (milestone, &completed) in goal.milestones.iter_mut().zip(completed_flags) {
            milestone.is_completed = completed;
            milestone.completed_at = completed.then(Utc::now);
        }
        goal.refresh_progress();
        goal
    }

    #[test]
    fn progress_is_zero_without_milestones() {
        let goal = goal_with_milestones(&[]);
        assert_eq!(goal.progress, 0);
    }

    #[test]
    fn progress_follows_completion_ratio() {
        let goal = goal_with_milestones(&[true, false, false, false]);
        assert_eq!(goal.progress, 25);

        let goal = goal_with_milestones(&[true, true, false, false]);
        assert_eq!(goal.progress, 50);
    }

    #[test]
    fn progress_rounds_half_up() {
        // 1/3 -> 33, 2/3 -> 67, 1/8 -> 13
        assert_eq!(goal_with_milestones(&[true, false, false]).progress, 33);
        assert_eq!(goal_with_milestones(&[true, true, false]).progress, 67);
        assert_eq!(
            goal_with_milestones(&[true, false, false, false, false, false, false, false])
                .progress,
            13
        );
    }

    #[test]
    fn toggle_sets_completed_at_and_progress() {
        let mut goal = goal_with_milestones(&[true, false, false, false]);
        let id = goal.milestones[1].id.clone();

        goal.toggle_milestone(&id).unwrap();

        assert!(goal.milestones[1].is_completed);
        assert!(goal.milestones[1].completed_at.is_some());
        assert_eq!(goal.progress, 50);
    }

    #[test]
    fn toggle_twice_restores_previous_state() {
        let mut goal = goal_with_milestones(&[true, false, false, false]);
        let before = goal.progress;
        let id = goal.milestones[2].id.clone();

        goal.toggle_milestone(&id).unwrap();
        goal.toggle_milestone(&id).unwrap();

        assert!(!goal.milestones[2].is_completed);
        assert_eq!(goal.milestones[2].completed_at, None);
        assert_eq!(goal.progress, before);
    }

    #[test]
    fn toggle_unknown_milestone_is_not_found() {
        let mut goal = goal_with_milestones(&[false]);
        let result = goal.toggle_milestone("missing");
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(goal.progress, 0);
    }

    #[test]
    fn category_metadata_is_total() {
        for category in GoalCategory::ALL {
            assert!(!category.label().is_empty());
            assert!(!category.icon().is_empty());
            assert!(category.color().starts_with('#'));
        }
    }

    #[test]
    fn unknown_category_falls_back_to_other() {
        assert_eq!(GoalCategory::parse("mindfulness"), GoalCategory::Other);
        assert_eq!(GoalCategory::Other.label(), "Other");
        assert_eq!(GoalCategory::Other.icon(), "📌");
        assert_eq!(GoalCategory::Other.color(), "#6B7280");

        let goal: Goal = serde_json::from_str(
            &serde_json::to_string(&goal_with_milestones(&[]))
                .unwrap()
                .replace("\"health\"", "\"mindfulness\""),
        )
        .unwrap();
        assert_eq!(goal.category, GoalCategory::Other);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let goal = goal_with_milestones(&[true]);
        let json = serde_json::to_string(&goal).unwrap();

        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("\"isCompleted\""));
        assert!(json.contains("\"completedAt\""));
        assert!(json.contains("\"category\":\"health\""));
        assert!(json.contains("\"priority\":\"high\""));
        assert!(json.contains("\"status\":\"not_started\""));
    }

    proptest! {
        #[test]
        fn derived_progress_matches_ratio(flags in proptest::collection::vec(any::<bool>(), 1..24)) {
            let goal = goal_with_milestones(&flags);
            let completed = flags.iter().filter(|&&c| c).count();
            let expected = ((completed as f64 / flags.len() as f64) * 100.0).round() as i32;

            prop_assert!(goal.progress >= 0 && goal.progress <= 100);
            prop_assert_eq!(goal.progress, expected);
        }

        #[test]
        fn completed_at_tracks_flag_through_toggles(
            flags in proptest::collection::vec(any::<bool>(), 1..12),
            toggles in proptest::collection::vec(any::<prop::sample::Index>(), 0..24),
        ) {
            let mut goal = goal_with_milestones(&flags);
            for index in toggles {
                let id = goal.milestones[index.index(goal.milestones.len())].id.clone();
                goal.toggle_milestone(&id).unwrap();
            }
            for milestone in &goal.milestones {
                prop_assert_eq!(milestone.is_completed, milestone.completed_at.is_some());
            }
            prop_assert_eq!(goal.progress, goal.calculated_progress());
        }
    }
}
