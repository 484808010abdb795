mod cli;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fitmarket", version, about = "fitmarket — training program marketplace client")]
struct App {
    /// Path to the config file (defaults to ~/.config/fitmarket/config.toml).
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an invite token and show the program card
    Invite {
        /// Opaque invite token
        token: String,
        /// Join the program after resolving
        #[arg(long)]
        join: bool,
    },
    /// Show a program's discussion feed
    Feed {
        program_id: i64,
    },
    /// Post a message to a program's feed
    Post {
        program_id: i64,
        message: String,
    },
    /// Creator analytics dashboard
    Dashboard,
    /// List locally cached program copies
    Programs,
    /// Show effective configuration
    Config,
}

fn main() {
    fitmarket::tracing_init::init();

    let app = App::parse();
    let result = match app.command {
        Commands::Invite { token, join } => cli::invite::run(app.config.as_deref(), &token, join),
        Commands::Feed { program_id } => cli::feed::run(app.config.as_deref(), program_id),
        Commands::Post { program_id, message } => {
            cli::feed::post(app.config.as_deref(), program_id, &message)
        }
        Commands::Dashboard => cli::dashboard::run(app.config.as_deref()),
        Commands::Programs => cli::programs::run(app.config.as_deref()),
        Commands::Config => cli::config::run(app.config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
