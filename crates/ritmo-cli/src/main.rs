use clap::{Parser, Subcommand};
use ritmo_core::Settings;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "ritmo", version, about = "Sales rhythm and energy tracker")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// First-run setup of goals and preferences
    Onboard(commands::onboard::OnboardArgs),
    /// Daily activity counters
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Morning check-in
    Checkin(commands::checkin::CheckinArgs),
    /// Evening check-out
    Checkout(commands::checkin::CheckoutArgs),
    /// Weekly rhythm status
    Status,
    /// Today's energy score
    Energy,
    /// Today's energy-adjusted targets
    Targets,
    /// Everything at once
    Dashboard,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Navigation state machine
    View(commands::view::ViewArgs),
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_env("RITMO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let settings = Settings::load_or_default();
    init_tracing(&settings);

    let json = cli.json;
    let result = match cli.command {
        Commands::Onboard(args) => commands::onboard::run(args, &settings, json),
        Commands::Log { action } => commands::log::run(action, &settings, json),
        Commands::Checkin(args) => commands::checkin::run_checkin(args, &settings, json),
        Commands::Checkout(args) => commands::checkin::run_checkout(args, &settings, json),
        Commands::Status => commands::report::status(&settings, json),
        Commands::Energy => commands::report::energy(&settings, json),
        Commands::Targets => commands::report::targets(&settings, json),
        Commands::Dashboard => commands::report::dashboard(&settings, json),
        Commands::Config { action } => commands::config::run(action, &settings, json),
        Commands::View(args) => commands::view::run(args, &settings, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
