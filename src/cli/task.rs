//! CLI commands for tasks

use clap::Subcommand;

use super::resolve_farm_arg;
use crate::analytics::temporal;
use crate::config::Settings;
use crate::display::{format_task_list, DisplayContext};
use crate::error::FarmdeskResult;
use crate::services::TaskService;
use crate::storage::Store;

/// Task subcommands
#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List tasks (open ones by default)
    #[command(alias = "ls")]
    List {
        /// Only tasks of this farm (name or ID)
        #[arg(short, long)]
        farm: Option<String>,

        /// Only overdue tasks and tasks due soon
        #[arg(short, long)]
        urgent: bool,

        /// Include completed tasks
        #[arg(short, long)]
        all: bool,
    },
}

/// Handle task commands
pub fn handle_task_command(
    store: &Store,
    settings: &Settings,
    cmd: TaskCommands,
) -> FarmdeskResult<()> {
    let service = TaskService::new(store);
    let today = temporal::today();
    let ctx = DisplayContext::from_settings(settings, today);

    match cmd {
        TaskCommands::List { farm, urgent, all } => {
            let farm_id = farm.map(|f| resolve_farm_arg(store, &f)).transpose()?;

            let tasks = if urgent {
                service.list_urgent_on(settings.due_soon_days, today)?
            } else {
                service.list()?
            };
            let tasks: Vec<_> = tasks
                .into_iter()
                .filter(|t| farm_id.map_or(true, |id| t.farm_id == id))
                .filter(|t| all || !t.completed)
                .collect();

            println!("{}", format_task_list(&tasks, &ctx));
        }
    }
    Ok(())
}
