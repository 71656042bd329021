use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use farmdesk::analytics::temporal;
use farmdesk::cli::{
    handle_crop_command, handle_expense_command, handle_farm_command, handle_report_command,
    handle_task_command, load_store,
};
use farmdesk::config::{paths::FarmdeskPaths, settings::Settings};
use farmdesk::display::DisplayContext;
use farmdesk::reports::DashboardReport;
use farmdesk::storage::SeedData;

#[derive(Parser)]
#[command(
    name = "farmdesk",
    version,
    about = "Terminal dashboard for farms, crops, field tasks and expenses",
    long_about = "farmdesk keeps track of farms, their crops and field tasks, and the \
                  money spent running them. It flags overdue work, shows how far each \
                  crop has grown, and turns expenses into chart-ready summaries."
)]
struct Cli {
    /// Seed file to load instead of the configured one
    #[arg(long, global = true, env = "FARMDESK_SEED")]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard (default)
    Dashboard,

    /// Farm commands
    #[command(subcommand)]
    Farm(farmdesk::cli::FarmCommands),

    /// Crop commands
    #[command(subcommand)]
    Crop(farmdesk::cli::CropCommands),

    /// Task commands
    #[command(subcommand)]
    Task(farmdesk::cli::TaskCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(farmdesk::cli::ExpenseCommands),

    /// Expense statistics and charts
    #[command(subcommand)]
    Report(farmdesk::cli::ReportCommands),

    /// Write default settings and a sample seed file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    farmdesk::logging::init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FarmdeskPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let seed_path = cli
        .seed
        .clone()
        .unwrap_or_else(|| settings.resolve_seed_file(&paths));
    let today = temporal::today();
    debug!(seed = %seed_path.display(), %today, "starting");

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing farmdesk at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            if seed_path.exists() {
                println!("Seed file already present: {}", seed_path.display());
            } else {
                SeedData::sample(today).save(&seed_path)?;
                println!("Sample seed written to: {}", seed_path.display());
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'farmdesk' to see the dashboard.");
        }
        Some(Commands::Config) => {
            println!("farmdesk Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Seed file:        {}", seed_path.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Date format:            {}", settings.date_format);
            println!("  Due soon (days):        {}", settings.due_soon_days);
            println!("  Dashboard due soon:     {}", settings.dashboard_due_soon_days);
            println!("  Urgent task limit:      {}", settings.urgent_task_limit);
            println!("  Default chart:          {}", settings.default_chart_type);
            println!("  Default period:         {}", settings.default_chart_period);
        }
        command => {
            let store = load_store(&seed_path, today)?;
            match command {
                Some(Commands::Farm(cmd)) => handle_farm_command(&store, cmd)?,
                Some(Commands::Crop(cmd)) => handle_crop_command(&store, &settings, cmd)?,
                Some(Commands::Task(cmd)) => handle_task_command(&store, &settings, cmd)?,
                Some(Commands::Expense(cmd)) => handle_expense_command(&store, &settings, cmd)?,
                Some(Commands::Report(cmd)) => handle_report_command(&store, &settings, cmd)?,
                _ => {
                    let ctx = DisplayContext::from_settings(&settings, today);
                    let report = DashboardReport::generate(&store, &settings, today)?;
                    println!("{}", report.format_terminal(&ctx));
                }
            }
        }
    }

    Ok(())
}
