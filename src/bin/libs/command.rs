use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Clone)]
pub struct MenuArgs {
    #[arg(short = 'l', long = "limit", value_name = "KCAL",
        help = "Daily calorie limit (overrides MEALOG_CALORIE_LIMIT)")]
    pub limit: Option<u32>,
}

#[derive(Parser, Clone)]
pub struct ReplayArgs {
    #[arg(short = 'l', long = "limit", value_name = "KCAL",
        help = "Daily calorie limit (overrides MEALOG_CALORIE_LIMIT)")]
    pub limit: Option<u32>,

    #[arg(short = 'j', long = "json", action = ArgAction::SetTrue,
        help = "Print the final meal log as JSON")]
    pub json: bool,

    #[arg(value_name = "SCRIPT")]
    pub script: String,
}

#[derive(Parser, Clone)]
pub struct ExercisesArgs {
    #[arg(short = 'j', long = "json", action = ArgAction::SetTrue,
        help = "Print the exercise catalogue as JSON")]
    pub json: bool,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    #[command(about = "Open the interactive physical strength menu")]
    Menu(MenuArgs),

    #[command(about = "Replay a JSON script of meal log actions")]
    Replay(ReplayArgs),

    #[command(about = "List the exercises available for burning off meals")]
    Exercises(ExercisesArgs),
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub commands: Option<Commands>,
}
