mod libs;
extern crate mealbase;

use clap::Parser;
use libs::{handler, command::{Cli, Commands}, vars::EnvVar};
use tracing::event;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

fn main() {
    let cli = Cli::parse();

    // Logging goes to a file so it never mixes with the menu on stdout
    let envars = EnvVar::get_instance();
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(envars.log_file.clone())
        .build(&envars.log_dir);
    let (non_blocking, guard) = match file_appender {
        Ok(appender) => tracing_appender::non_blocking(appender),
        Err(e) => {
            eprintln!("Warning: logging disabled, cannot open log directory '{}': {}", envars.log_dir, e);
            tracing_appender::non_blocking(std::io::sink())
        }
    };

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_ansi(false)
        .init();

    let result = match &cli.commands {
        Some(Commands::Menu(args)) => handler::handle_menu(args),
        Some(Commands::Replay(args)) => handler::handle_replay(args),
        Some(Commands::Exercises(args)) => handler::handle_exercises(args),
        None => {
            println!("No command provided");
            Ok(())
        }
    };

    if let Err(e) = result {
        event!(tracing::Level::ERROR, error = %e, "Command failed");
        eprintln!("Error: {}", e);
        drop(guard);
        std::process::exit(1);
    }
}
