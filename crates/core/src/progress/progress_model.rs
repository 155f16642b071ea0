//! Progress snapshot models.

use serde::{Deserialize, Serialize};

use crate::goals::{Goal, GoalStatus};

/// One week's worth of activity in the progress snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgress {
    pub week: String,
    pub goals_completed: i32,
    pub hours_spent: f64,
    /// Productivity score in [0, 100]
    pub productivity_score: i32,
}

impl WeeklyProgress {
    /// Build a weekly record, clamping the productivity score into [0, 100].
    pub fn new(week: impl Into<String>, goals_completed: i32, hours_spent: f64, productivity_score: i32) -> Self {
        WeeklyProgress {
            week: week.into(),
            goals_completed,
            hours_spent,
            productivity_score: productivity_score.clamp(0, 100),
        }
    }
}

/// Aggregate snapshot of a user's progress.
///
/// This is a cached aggregate, not a source of truth: the goal counters can
/// be refreshed from the goal collection with [`Progress::recalculate_from`],
/// but nothing recomputes them automatically on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub total_goals: i32,
    pub completed_goals: i32,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub total_hours_spent: f64,
    pub weekly_progress: Vec<WeeklyProgress>,
}

impl Progress {
    /// Refresh the goal counters from the canonical goal collection.
    ///
    /// Streaks, hours, and the weekly history are caller-maintained and left
    /// untouched.
    pub fn recalculate_from(&mut self, goals: &[Goal]) {
        self.total_goals = goals.len() as i32;
        self.completed_goals = goals
            .iter()
            .filter(|g| g.status == GoalStatus::Completed)
            .count() as i32;
    }

    /// Count one more consecutive day of activity.
    pub fn register_streak_day(&mut self) {
        self.current_streak += 1;
        if self.current_streak > self.longest_streak {
            self.longest_streak = self.current_streak;
        }
    }

    /// Reset the daily streak after a missed day.
    pub fn break_streak(&mut self) {
        self.current_streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::{GoalCategory, GoalPriority, NewGoal};

    fn completed_goal() -> Goal {
        let mut goal = Goal::from_new(NewGoal {
            title: "Read 12 books".to_string(),
            description: "One per month".to_string(),
            category: GoalCategory::Education,
            priority: GoalPriority::Medium,
            deadline: None,
            milestones: Vec::new(),
        });
        goal.status = GoalStatus::Completed;
        goal
    }

    fn open_goal() -> Goal {
        Goal::from_new(NewGoal {
            title: "Learn guitar".to_string(),
            description: "Practice weekly".to_string(),
            category: GoalCategory::Hobbies,
            priority: GoalPriority::Low,
            deadline: None,
            milestones: Vec::new(),
        })
    }

    #[test]
    fn default_snapshot_is_zeroed() {
        let progress = Progress::default();
        assert_eq!(progress.total_goals, 0);
        assert_eq!(progress.completed_goals, 0);
        assert_eq!(progress.current_streak, 0);
        assert_eq!(progress.longest_streak, 0);
        assert_eq!(progress.total_hours_spent, 0.0);
        assert!(progress.weekly_progress.is_empty());
    }

    #[test]
    fn recalculate_refreshes_goal_counters_only() {
        let mut progress = Progress {
            current_streak: 3,
            longest_streak: 9,
            total_hours_spent: 12.5,
            ..Progress::default()
        };

        progress.recalculate_from(&[completed_goal(), open_goal(), open_goal()]);

        assert_eq!(progress.total_goals, 3);
        assert_eq!(progress.completed_goals, 1);
        assert_eq!(progress.current_streak, 3);
        assert_eq!(progress.longest_streak, 9);
        assert_eq!(progress.total_hours_spent, 12.5);
    }

    #[test]
    fn streak_days_extend_the_longest_run() {
        let mut progress = Progress::default();
        for _ in 0..4 {
            progress.register_streak_day();
        }
        progress.break_streak();
        progress.register_streak_day();

        assert_eq!(progress.current_streak, 1);
        assert_eq!(progress.longest_streak, 4);
    }

    #[test]
    fn productivity_score_is_clamped() {
        assert_eq!(WeeklyProgress::new("2025-W28", 2, 6.0, 140).productivity_score, 100);
        assert_eq!(WeeklyProgress::new("2025-W28", 2, 6.0, -3).productivity_score, 0);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_string(&Progress::default()).unwrap();
        assert!(json.contains("\"totalGoals\""));
        assert!(json.contains("\"completedGoals\""));
        assert!(json.contains("\"currentStreak\""));
        assert!(json.contains("\"longestStreak\""));
        assert!(json.contains("\"totalHoursSpent\""));
        assert!(json.contains("\"weeklyProgress\""));
    }
}
