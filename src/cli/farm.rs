//! CLI commands for farms

use clap::Subcommand;

use crate::display::format_farm_list;
use crate::error::FarmdeskResult;
use crate::services::FarmService;
use crate::storage::Store;

/// Farm subcommands
#[derive(Subcommand, Debug)]
pub enum FarmCommands {
    /// List all farms
    #[command(alias = "ls")]
    List,
}

/// Handle farm commands
pub fn handle_farm_command(store: &Store, cmd: FarmCommands) -> FarmdeskResult<()> {
    match cmd {
        FarmCommands::List => {
            let farms = FarmService::new(store).list()?;
            println!("{}", format_farm_list(&farms));
        }
    }
    Ok(())
}
