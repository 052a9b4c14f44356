use serde::Deserialize;

/// One step of a replay script.
///
/// ```json
/// [
///   { "action": "log", "food": "rice", "calories": 300 },
///   { "action": "burn", "exercise": 3 },
///   { "action": "show" },
///   { "action": "new_day" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Log { food: String, calories: u32 },
    Burn { exercise: usize },
    Show,
    NewDay,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = r#"[
            {"action": "log", "food": "rice", "calories": 300},
            {"action": "burn", "exercise": 3},
            {"action": "show"},
            {"action": "new_day"}
        ]"#;
        let actions: Vec<Action> = serde_json::from_str(script).unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Log { food: "rice".to_string(), calories: 300 },
                Action::Burn { exercise: 3 },
                Action::Show,
                Action::NewDay,
            ]
        );
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result: Result<Vec<Action>, _> = serde_json::from_str(r#"[{"action": "eat"}]"#);
        assert!(result.is_err());
    }
}
