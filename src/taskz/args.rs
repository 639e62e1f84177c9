use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskz")]
#[command(about = "Manage tasks from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the JSON store (defaults to the user data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new task
    #[command(alias = "add")]
    Create {
        /// Title of the task
        title: String,

        /// Longer description
        description: String,

        /// Due date (Y-m-d, today or later)
        due_date: String,
    },

    /// List tasks
    #[command(alias = "ls")]
    List,

    /// Update fields of an existing task
    Update {
        /// Task id (uuid, as printed on create)
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New due date (Y-m-d)
        #[arg(long)]
        due_date: Option<String>,

        /// Mark the task as completed
        #[arg(short, long)]
        completed: bool,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task id (uuid)
        id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., malformed-store)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
