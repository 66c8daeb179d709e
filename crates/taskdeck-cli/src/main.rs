use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod taskfile;

#[derive(Parser)]
#[command(name = "taskdeck", version, about = "Taskdeck CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print tasks in display order
    Order {
        /// Path to a JSON task file
        #[arg(long)]
        file: PathBuf,
        /// Emit the ordered list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compute the stored points for an importance/complexity pair
    Points {
        /// Importance, an integer in 0..=50
        #[arg(long)]
        importance: f64,
        /// Complexity, an integer in 1..=9
        #[arg(long)]
        complexity: f64,
    },
    /// Resolve a drag-and-drop move to the single position value to persist
    Reorder {
        /// Path to a JSON task file
        #[arg(long)]
        file: PathBuf,
        /// Display index of the task before the move
        #[arg(long)]
        from: usize,
        /// Display index of the task after the move
        #[arg(long)]
        to: usize,
        /// Reorder the subtasks of this parent instead of the root group
        #[arg(long)]
        parent: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Order { file, json } => commands::order::run(&file, json),
        Commands::Points {
            importance,
            complexity,
        } => commands::points::run(importance, complexity),
        Commands::Reorder {
            file,
            from,
            to,
            parent,
        } => commands::reorder::run(&file, from, to, parent.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
