use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::MealError;

/// Number of meals one day's log can hold.
pub const MAX_MEALS: usize = 7;
pub const DAILY_CALORIE_LIMIT: u32 = 1500;
pub const ALLOWED_CALORIES: [u32; 5] = [100, 150, 200, 250, 300];
pub const MAX_FOOD_NAME_LEN: usize = 99;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub food_name: String,
    pub calories: u32,
    /// Unix timestamp (UTC seconds) of when the meal was logged.
    pub logged_at: i64,
}

impl Meal {
    pub fn new(food_name: &str, calories: u32) -> Result<Self, MealError> {
        let food_name = food_name.trim();
        if food_name.is_empty() {
            return Err(MealError::EmptyName);
        }

        let len = food_name.chars().count();
        if len > MAX_FOOD_NAME_LEN {
            return Err(MealError::NameTooLong(len));
        }

        if !is_allowed_calories(calories) {
            return Err(MealError::InvalidCalories(calories));
        }

        Ok(Meal {
            food_name: food_name.to_string(),
            calories,
            logged_at: Utc::now().timestamp(),
        })
    }
}

pub fn is_allowed_calories(calories: u32) -> bool {
    ALLOWED_CALORIES.contains(&calories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_meal() {
        let meal = Meal::new("  rice ", 300).expect("valid meal");
        assert_eq!(meal.food_name, "rice");
        assert_eq!(meal.calories, 300);
        assert!(meal.logged_at > 0);
    }

    #[test]
    fn test_rejects_blank_name() {
        assert_eq!(Meal::new("   ", 100), Err(MealError::EmptyName));
    }

    #[test]
    fn test_rejects_long_name() {
        let name = "a".repeat(MAX_FOOD_NAME_LEN + 1);
        assert_eq!(
            Meal::new(&name, 100),
            Err(MealError::NameTooLong(MAX_FOOD_NAME_LEN + 1))
        );
        assert!(Meal::new(&"a".repeat(MAX_FOOD_NAME_LEN), 100).is_ok());
    }

    #[test]
    fn test_calorie_set() {
        for kcal in ALLOWED_CALORIES {
            assert!(Meal::new("egg", kcal).is_ok());
        }
        for kcal in [0, 50, 120, 301, 1000] {
            assert_eq!(Meal::new("egg", kcal), Err(MealError::InvalidCalories(kcal)));
        }
    }
}
