use std::io::{self, BufRead, Write};

use mealbase::exercise::EXERCISES;
use mealbase::service::MealLog;

/// Writes `message`, then reads one line from `input`.
///
/// Returns `None` once the input is exhausted. The trailing line break is
/// stripped.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Prints the live meals oldest first.
pub fn render_log<W: Write>(output: &mut W, log: &MealLog) -> io::Result<()> {
    writeln!(output, "\n--- Current Meal Log ({}/{}) ---", log.len(), log.capacity())?;
    if log.is_empty() {
        writeln!(output, "The meal log is empty.")?;
        return Ok(());
    }
    for (index, meal) in log.iter().enumerate() {
        writeln!(output, "  {}. {} ({} kcal)", index + 1, meal.food_name, meal.calories)?;
    }
    writeln!(output, "--------------------------------")
}

pub fn render_exercises<W: Write>(output: &mut W) -> io::Result<()> {
    for (index, exercise) in EXERCISES.iter().enumerate() {
        writeln!(output, "  {}. {} ({} kcal)", index + 1, exercise.name, exercise.calories_burned)?;
    }
    Ok(())
}

pub fn banner<W: Write>(output: &mut W, title: &str) -> io::Result<()> {
    writeln!(output, "========================================")?;
    writeln!(output, "{:^40}", title)?;
    writeln!(output, "========================================")
}
