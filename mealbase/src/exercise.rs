use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub calories_burned: u32,
}

pub const EXERCISES: [Exercise; 7] = [
    Exercise { name: "30 minutes of fast walking or jogging", calories_burned: 200 },
    Exercise { name: "Full-body strength training", calories_burned: 250 },
    Exercise { name: "30 minutes of swimming or cycling", calories_burned: 300 },
    Exercise { name: "30 minutes of stretching and yoga", calories_burned: 150 },
    Exercise { name: "30 minutes of dance or aerobics", calories_burned: 250 },
    Exercise { name: "Tennis, badminton, or dance", calories_burned: 300 },
    Exercise { name: "Light walk", calories_burned: 100 },
];

/// Looks up an exercise by its 1-based menu number.
pub fn by_choice(choice: usize) -> Option<&'static Exercise> {
    choice.checked_sub(1).and_then(|index| EXERCISES.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_choice_bounds() {
        assert_eq!(by_choice(0), None);
        assert_eq!(by_choice(1).map(|e| e.calories_burned), Some(200));
        assert_eq!(by_choice(7).map(|e| e.name), Some("Light walk"));
        assert_eq!(by_choice(8), None);
    }
}
