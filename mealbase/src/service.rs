use serde::Serialize;
use uuid::Uuid;

use crate::error::{MealError, QueueError};
use crate::exercise::{self, Exercise};
use crate::meal::{MAX_MEALS, Meal};
use crate::queue::CircularQueue;

pub type MealLog = CircularQueue<Meal, MAX_MEALS>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BurnOutcome {
    /// The exercise covered the oldest meal, which has been removed.
    Burned { meal: Meal, exercise: Exercise },
    /// The oldest meal stays in the log.
    Insufficient { meal: Meal, exercise: Exercise, deficit: u32 },
}

#[derive(Debug, Clone, Serialize)]
pub struct LogSnapshot {
    pub session_id: Uuid,
    pub capacity: usize,
    pub size: usize,
    pub calorie_limit: u32,
    pub total_logged: u32,
    pub remaining_calories: u32,
    pub meals: Vec<Meal>,
}

impl LogSnapshot {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// One trainee's meal log for the day.
///
/// The manager owns its queue outright; callers hold the manager and pass it
/// by reference into whatever drives the session.
#[derive(Debug)]
pub struct MealLogManager {
    session_id: Uuid,
    calorie_limit: u32,
    total_logged: u32,
    log: MealLog,
}

impl MealLogManager {
    pub fn new(calorie_limit: u32) -> Self {
        MealLogManager {
            session_id: Uuid::new_v4(),
            calorie_limit,
            total_logged: 0,
            log: MealLog::new(),
        }
    }

    /// Throws away the current log and opens a fresh day.
    pub fn start_day(&mut self) {
        self.log.clear();
        self.total_logged = 0;
        self.session_id = Uuid::new_v4();
    }

    pub fn log_meal(&mut self, food_name: &str, calories: u32) -> Result<&Meal, MealError> {
        let meal = Meal::new(food_name, calories)?;

        if self.log.is_full() {
            return Err(QueueError::Full.into());
        }

        let within_limit = self
            .total_logged
            .checked_add(meal.calories)
            .is_some_and(|total| total <= self.calorie_limit);
        if !within_limit {
            return Err(MealError::ExceedsDailyLimit {
                attempted: meal.calories,
                total: self.total_logged,
                limit: self.calorie_limit,
            });
        }

        let calories = meal.calories;
        self.log.enqueue(meal)?;
        self.total_logged += calories;

        self.log.back().ok_or(MealError::Queue(QueueError::Empty))
    }

    pub fn next_to_burn(&self) -> Result<&Meal, QueueError> {
        self.log.peek()
    }

    /// Tries to burn off the oldest meal with the exercise at menu position
    /// `choice` (1-based).
    pub fn burn_off(&mut self, choice: usize) -> Result<BurnOutcome, MealError> {
        let target = self.log.peek()?.clone();
        let exercise = *exercise::by_choice(choice).ok_or(MealError::InvalidExercise(choice))?;

        if exercise.calories_burned >= target.calories {
            let meal = self.log.dequeue()?;
            Ok(BurnOutcome::Burned { meal, exercise })
        } else {
            Ok(BurnOutcome::Insufficient {
                deficit: target.calories - exercise.calories_burned,
                meal: target,
                exercise,
            })
        }
    }

    pub fn meals(&self) -> impl ExactSizeIterator<Item = &Meal> {
        self.log.iter()
    }

    pub fn log(&self) -> &MealLog {
        &self.log
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn calorie_limit(&self) -> u32 {
        self.calorie_limit
    }

    /// Calories logged since the day started; burning meals off does not
    /// lower it.
    pub fn total_logged(&self) -> u32 {
        self.total_logged
    }

    pub fn remaining_calories(&self) -> u32 {
        self.log.iter().map(|meal| meal.calories).sum()
    }

    pub fn snapshot(&self) -> LogSnapshot {
        LogSnapshot {
            session_id: self.session_id,
            capacity: self.log.capacity(),
            size: self.log.len(),
            calorie_limit: self.calorie_limit,
            total_logged: self.total_logged,
            remaining_calories: self.remaining_calories(),
            meals: self.log.iter().cloned().collect(),
        }
    }
}

impl Default for MealLogManager {
    fn default() -> Self {
        Self::new(crate::meal::DAILY_CALORIE_LIMIT)
    }
}
