//! CLI commands for crops

use clap::Subcommand;

use super::resolve_farm_arg;
use crate::analytics::temporal;
use crate::config::Settings;
use crate::display::{format_crop_list, DisplayContext};
use crate::error::FarmdeskResult;
use crate::services::CropService;
use crate::storage::Store;

/// Crop subcommands
#[derive(Subcommand, Debug)]
pub enum CropCommands {
    /// List crops with their growth progress
    #[command(alias = "ls")]
    List {
        /// Only crops of this farm (name or ID)
        #[arg(short, long)]
        farm: Option<String>,
    },
}

/// Handle crop commands
pub fn handle_crop_command(
    store: &Store,
    settings: &Settings,
    cmd: CropCommands,
) -> FarmdeskResult<()> {
    let service = CropService::new(store);
    let ctx = DisplayContext::from_settings(settings, temporal::today());

    match cmd {
        CropCommands::List { farm } => {
            let crops = match farm {
                Some(farm) => service.list_by_farm(resolve_farm_arg(store, &farm)?)?,
                None => service.list()?,
            };
            println!("{}", format_crop_list(&crops, &ctx));
        }
    }
    Ok(())
}
