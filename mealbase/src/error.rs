use std::error::Error;
use std::fmt;

/// Rejection reasons of the circular queue.
///
/// Both are recoverable: the queue is left untouched and stays usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    Full,
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Full => write!(f, "queue is full"),
            QueueError::Empty => write!(f, "queue is empty"),
        }
    }
}

impl Error for QueueError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealError {
    EmptyName,
    NameTooLong(usize),
    InvalidCalories(u32),
    ExceedsDailyLimit { attempted: u32, total: u32, limit: u32 },
    InvalidExercise(usize),
    Queue(QueueError),
}

impl fmt::Display for MealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealError::EmptyName => write!(f, "food name cannot be empty"),
            MealError::NameTooLong(len) => write!(f, "food name is too long ({} characters)", len),
            MealError::InvalidCalories(kcal) => write!(f, "invalid calorie amount: {}", kcal),
            MealError::ExceedsDailyLimit { attempted, total, limit } => write!(
                f,
                "{} kcal would bring the total to {} and exceed the daily limit of {} kcal",
                attempted,
                total.saturating_add(*attempted),
                limit
            ),
            MealError::InvalidExercise(choice) => write!(f, "invalid exercise choice: {}", choice),
            MealError::Queue(QueueError::Full) => write!(f, "the meal log is full"),
            MealError::Queue(QueueError::Empty) => write!(f, "the meal log is empty"),
        }
    }
}

impl Error for MealError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MealError::Queue(e) => Some(e),
            _ => None,
        }
    }
}

impl From<QueueError> for MealError {
    fn from(e: QueueError) -> Self {
        MealError::Queue(e)
    }
}
