use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};

use chrono::Local;
use mealbase::error::MealError;
use mealbase::exercise::EXERCISES;
use mealbase::meal::{self, MAX_MEALS};
use mealbase::service::{BurnOutcome, MealLogManager};
use tracing::{event, instrument, Level};

use super::command;
use super::dtos::{Action, ReplaySummary};
use super::utils::{banner, prompt, render_exercises, render_log};
use super::vars::EnvVar;

const MENU_ITEMS: [&str; 8] = [
    "A. Enter Physical Condition",
    "B. View Physical Condition",
    "C. Set Workout Routine",
    "D. View Workout Routine",
    "E. Set Diet Plan",
    "F. View Diet Plan",
    "G. Meal Log",
    "H. Calorie Management",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Placeholder(&'static str),
    MealLog,
    CalorieManagement,
    Back,
    Invalid,
}

impl MenuChoice {
    /// Only the first character of the line counts, case-insensitively.
    pub fn parse(line: &str) -> Self {
        match line.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => MenuChoice::Placeholder("Enter Physical Condition"),
            Some('B') => MenuChoice::Placeholder("View Physical Condition"),
            Some('C') => MenuChoice::Placeholder("Set Workout Routine"),
            Some('D') => MenuChoice::Placeholder("View Workout Routine"),
            Some('E') => MenuChoice::Placeholder("Set Diet Plan"),
            Some('F') => MenuChoice::Placeholder("View Diet Plan"),
            Some('G') => MenuChoice::MealLog,
            Some('H') => MenuChoice::CalorieManagement,
            Some('0') => MenuChoice::Back,
            _ => MenuChoice::Invalid,
        }
    }
}

fn calorie_limit(overridden: Option<u32>) -> u32 {
    overridden.unwrap_or_else(|| EnvVar::get_instance().calorie_limit)
}

/// Handle the menu command: run the interactive menu on stdin/stdout
///
/// # Arguments
/// * `args` - Command line arguments for the menu
///
/// # Returns
/// * `Result<(), Box<dyn Error>>` - Ok if successful, Err with error details
pub fn handle_menu(args: &command::MenuArgs) -> Result<(), Box<dyn Error>> {
    let mut manager = MealLogManager::new(calorie_limit(args.limit));
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    run_menu(&mut input, &mut output, &mut manager)
        .map_err(|e| format!("Menu session failed: {}", e))?;

    writeln!(output, "\nExiting Program.")?;
    Ok(())
}

#[instrument(skip_all)]
pub fn run_menu<R: BufRead, W: Write>(input: &mut R, output: &mut W, manager: &mut MealLogManager) -> io::Result<()> {
    event!(Level::INFO, session = %manager.session_id(), "Menu opened");

    loop {
        writeln!(output, "----------------------------------------")?;
        writeln!(output, "   Menu: 1. Physical Strength & Knowledge")?;
        writeln!(output, "----------------------------------------")?;
        for item in MENU_ITEMS {
            writeln!(output, "   {}", item)?;
        }
        writeln!(output, "   0. Back to Main Menu")?;
        writeln!(output, "----------------------------------------")?;

        let Some(line) = prompt(input, output, "Choice: ")? else {
            break;
        };

        match MenuChoice::parse(&line) {
            MenuChoice::Back => break,
            MenuChoice::Placeholder(name) => writeln!(output, "\n(Placeholder for {})", name)?,
            MenuChoice::MealLog => {
                set_daily_food(input, output, manager)?;
            }
            MenuChoice::CalorieManagement => manage_daily_calories(input, output, manager)?,
            MenuChoice::Invalid => writeln!(output, "\nInvalid choice. Please try again.")?,
        }
        writeln!(output)?;
    }

    event!(Level::INFO, session = %manager.session_id(), "Menu closed");
    Ok(())
}

/// Opens a fresh day and logs meals until the user types `done`, the log is
/// full, or a meal would break the daily calorie limit.
///
/// Returns the total calories logged for the day.
#[instrument(skip_all)]
pub fn set_daily_food<R: BufRead, W: Write>(input: &mut R, output: &mut W, manager: &mut MealLogManager) -> io::Result<u32> {
    manager.start_day();
    event!(Level::INFO, session = %manager.session_id(), "New meal log day started");

    banner(output, &format!("G. Daily Meal Log ({})", Local::now().format("%Y-%m-%d")))?;
    writeln!(
        output,
        "Log up to {} meals. Total must not exceed {} kcal.",
        MAX_MEALS,
        manager.calorie_limit()
    )?;

    'meals: while !manager.log().is_full() {
        let Some(food_name) = prompt(input, output, "\nEnter food name (or 'done' to finish): ")? else {
            break;
        };
        let food_name = food_name.trim().to_string();
        if food_name == "done" {
            break;
        }
        if food_name.is_empty() {
            writeln!(output, "Food name cannot be empty.")?;
            continue;
        }
        let name_len = food_name.chars().count();
        if name_len > meal::MAX_FOOD_NAME_LEN {
            writeln!(output, "Error: {}", MealError::NameTooLong(name_len))?;
            continue;
        }

        let calories = loop {
            let message = format!("Enter calories for {} (100, 150, 200, 250, 300): ", food_name);
            let Some(raw) = prompt(input, output, &message)? else {
                break 'meals;
            };
            match raw.trim().parse::<u32>() {
                Ok(kcal) if meal::is_allowed_calories(kcal) => break kcal,
                _ => writeln!(output, "Invalid calorie amount.")?,
            }
        };

        match manager.log_meal(&food_name, calories) {
            Ok(logged) => {
                writeln!(output, "-> Meal logged: {} ({} kcal)", logged.food_name, logged.calories)?;
                event!(Level::INFO, food = %food_name, calories, "Meal logged");
            }
            Err(MealError::ExceedsDailyLimit { limit, .. }) => {
                writeln!(output, "\nError: Exceeds daily limit of {} kcal.", limit)?;
                event!(Level::WARN, food = %food_name, calories, "Daily calorie limit reached");
                break;
            }
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
                event!(Level::WARN, food = %food_name, error = %e, "Meal rejected");
                continue;
            }
        }

        render_log(output, manager.log())?;
        writeln!(output, "Current Total: {} / {} kcal", manager.total_logged(), manager.calorie_limit())?;
    }

    if manager.log().is_full() {
        writeln!(output, "\n[SYSTEM] The meal log is full for today (max {} meals).", MAX_MEALS)?;
    }

    writeln!(output, "\n--- End of Day Summary ---")?;
    writeln!(output, "Final Total Calories Logged: {} kcal", manager.total_logged())?;
    Ok(manager.total_logged())
}

/// Lets the user burn off the oldest logged meal with one exercise.
#[instrument(skip_all)]
pub fn manage_daily_calories<R: BufRead, W: Write>(input: &mut R, output: &mut W, manager: &mut MealLogManager) -> io::Result<()> {
    banner(output, "H. Calorie Management")?;

    let target = match manager.next_to_burn() {
        Ok(meal) => meal.clone(),
        Err(_) => {
            writeln!(output, "Your meal log is empty. Nothing to burn off!")?;
            return Ok(());
        }
    };

    writeln!(output, "Next meal to burn off: {} ({} kcal)", target.food_name, target.calories)?;
    writeln!(output, "\nChoose an exercise you performed:")?;
    render_exercises(output)?;

    let Some(raw) = prompt(input, output, "Choice: ")? else {
        return Ok(());
    };
    // Anything that is not a number is treated like an out-of-range choice.
    let choice = raw.trim().parse::<usize>().unwrap_or(0);

    match manager.burn_off(choice) {
        Ok(outcome) => write_burn_outcome(output, &outcome)?,
        Err(MealError::InvalidExercise(_)) => {
            writeln!(output, "Invalid choice.")?;
            return Ok(());
        }
        Err(e) => {
            writeln!(output, "Error: {}", e)?;
            return Ok(());
        }
    }

    render_log(output, manager.log())
}

fn write_burn_outcome<W: Write>(output: &mut W, outcome: &BurnOutcome) -> io::Result<()> {
    match outcome {
        BurnOutcome::Burned { meal, exercise } => {
            event!(Level::INFO, food = %meal.food_name, exercise = exercise.name, "Meal burned off");
            writeln!(output, "\nYou performed: {}", exercise.name)?;
            writeln!(output, "Success! You burned enough calories to offset the meal.")?;
            writeln!(output, "Removed '{}' from your log.", meal.food_name)
        }
        BurnOutcome::Insufficient { exercise, deficit, .. } => {
            event!(Level::INFO, exercise = exercise.name, deficit, "Exercise did not cover the meal");
            writeln!(output, "\nYou performed: {}", exercise.name)?;
            writeln!(output, "Insufficient exercise. The meal was not burned off.")?;
            writeln!(output, "You need to burn {} more calories.", deficit)
        }
    }
}

/// Handle the replay command: apply a JSON script of actions to a fresh log
///
/// # Arguments
/// * `args` - Command line arguments for the replay operation
///
/// # Returns
/// * `Result<(), Box<dyn Error>>` - Ok if successful, Err with error details
#[instrument(skip_all, fields(script = %args.script))]
pub fn handle_replay(args: &command::ReplayArgs) -> Result<(), Box<dyn Error>> {
    let raw = fs::read_to_string(&args.script)
        .map_err(|e| format!("Failed to read script '{}': {}", args.script, e))?;
    let actions: Vec<Action> = serde_json::from_str(&raw)
        .map_err(|e| format!("Invalid script '{}': {}", args.script, e))?;

    let mut manager = MealLogManager::new(calorie_limit(args.limit));
    let summary = if args.json {
        run_replay(&actions, &mut manager, &mut io::sink())?
    } else {
        run_replay(&actions, &mut manager, &mut io::stdout().lock())?
    };
    event!(Level::INFO, applied = summary.applied, rejected = summary.rejected, "Replay finished");

    if args.json {
        let json = manager.snapshot().to_json_pretty()
            .map_err(|e| format!("Failed to serialize meal log: {}", e))?;
        println!("{}", json);
    } else {
        println!(
            "\n{} action(s) applied, {} rejected. Total logged: {} kcal, still to burn: {} kcal",
            summary.applied,
            summary.rejected,
            manager.total_logged(),
            manager.remaining_calories()
        );
    }
    Ok(())
}

/// Applies `actions` in order. A rejected action is reported and the replay
/// carries on with the next one.
pub fn run_replay<W: Write>(actions: &[Action], manager: &mut MealLogManager, output: &mut W) -> io::Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (step, action) in actions.iter().enumerate() {
        let step = step + 1;
        let result = match action {
            Action::Log { food, calories } => manager.log_meal(food, *calories).map(|logged| {
                format!("-> Meal logged: {} ({} kcal)", logged.food_name, logged.calories)
            }),
            Action::Burn { exercise } => manager.burn_off(*exercise).map(|outcome| match outcome {
                BurnOutcome::Burned { meal, exercise } => {
                    format!("Removed '{}' from your log ({}).", meal.food_name, exercise.name)
                }
                BurnOutcome::Insufficient { meal, deficit, .. } => {
                    format!("'{}' was not burned off, {} kcal short.", meal.food_name, deficit)
                }
            }),
            Action::Show => {
                render_log(output, manager.log())?;
                Ok(String::new())
            }
            Action::NewDay => {
                manager.start_day();
                Ok("Started a new day.".to_string())
            }
        };

        match result {
            Ok(message) => {
                summary.applied += 1;
                if !message.is_empty() {
                    writeln!(output, "[{}] {}", step, message)?;
                }
            }
            Err(e) => {
                summary.rejected += 1;
                event!(Level::WARN, step, error = %e, "Replay action rejected");
                writeln!(output, "[{}] Rejected: {}", step, e)?;
            }
        }
    }

    Ok(summary)
}

/// Handle the exercises command: print the exercise catalogue
pub fn handle_exercises(args: &command::ExercisesArgs) -> Result<(), Box<dyn Error>> {
    if args.json {
        let json = serde_json::to_string_pretty(&EXERCISES)
            .map_err(|e| format!("Failed to serialize exercises: {}", e))?;
        println!("{}", json);
    } else {
        render_exercises(&mut io::stdout().lock())?;
    }
    Ok(())
}
