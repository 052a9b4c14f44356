//! Core of the trainee meal log: a fixed-capacity circular queue and the
//! daily meal/calorie session built on top of it.

pub mod error;
pub mod exercise;
pub mod meal;
pub mod queue;
pub mod service;

pub use error::{MealError, QueueError};
pub use queue::CircularQueue;
