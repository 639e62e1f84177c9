use chrono::Local;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use taskz::api::{TaskApi, TaskChanges};
use taskz::commands::{CmdMessage, MessageLevel};
use taskz::config::TaskzConfig;
use taskz::error::{Result, TaskzError};
use taskz::model::{Task, TaskStatus};
use taskz::store::fs::FileStore;
use taskz::store::MalformedStorePolicy;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(&cli)?;
    let config = TaskzConfig::load(&data_dir)?;

    let store = FileStore::new(data_dir.clone()).with_malformed_policy(config.malformed_store);
    let mut api = TaskApi::new(store);

    match cli.command {
        Commands::Create {
            title,
            description,
            due_date,
        } => {
            let result = api.create_task(&title, &description, &due_date)?;
            print_messages(&result.messages);
        }
        Commands::List => {
            let result = api.list_tasks()?;
            print_tasks(&result.listed_tasks);
            print_messages(&result.messages);
        }
        Commands::Update {
            id,
            title,
            description,
            due_date,
            completed,
        } => {
            let changes = TaskChanges {
                title,
                description,
                due_date,
                completed,
            };
            let result = api.update_task(&id, changes)?;
            print_messages(&result.messages);
        }
        Commands::Delete { id } => {
            let result = api.delete_task(&id)?;
            print_messages(&result.messages);
        }
        Commands::Config { key, value } => {
            handle_config(&data_dir, config, key, value)?;
        }
    }

    Ok(())
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var("TASKZ_DATA_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "taskz", "taskz")
        .ok_or_else(|| TaskzError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_config(
    data_dir: &Path,
    mut config: TaskzConfig,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("malformed-store"), None) => {
            println!("malformed-store = {}", policy_name(config.malformed_store));
        }
        (Some("malformed-store"), Some(v)) => {
            config.malformed_store = match v.as_str() {
                "treat-as-empty" => MalformedStorePolicy::TreatAsEmpty,
                "fail" => MalformedStorePolicy::Fail,
                other => {
                    println!("Unknown value for malformed-store: {}", other);
                    return Ok(());
                }
            };
            config.save(data_dir)?;
            println!("malformed-store = {}", policy_name(config.malformed_store));
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn policy_name(policy: MalformedStorePolicy) -> &'static str {
    match policy {
        MalformedStorePolicy::TreatAsEmpty => "treat-as-empty",
        MalformedStorePolicy::Fail => "fail",
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const DATE_WIDTH: usize = 12;
const DONE_MARKER: &str = "✔";

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let today = Local::now().date_naive();

    for task in tasks {
        let marker = match task.status {
            TaskStatus::Completed => format!("  {} ", DONE_MARKER).green(),
            TaskStatus::Pending => "    ".normal(),
        };
        let marker_width = 4;

        let available = LINE_WIDTH.saturating_sub(marker_width + DATE_WIDTH);
        let title_display = truncate_to_width(&task.title, available);
        let padding = available.saturating_sub(title_display.width());

        let due = format!("{:>width$}", task.due_date.to_string(), width = DATE_WIDTH);
        let due_colored = if task.due_date.date < today && task.status == TaskStatus::Pending {
            due.red()
        } else {
            due.dimmed()
        };

        println!(
            "{}{}{}{}",
            marker,
            title_display.bold(),
            " ".repeat(padding),
            due_colored
        );

        let id = task.id.map(|id| id.to_string()).unwrap_or_default();
        let desc_display = truncate_to_width(&task.description, available.saturating_sub(38));
        println!("    {}  {}", id.dimmed(), desc_display.dimmed());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
