use clap::{Parser, Subcommand};
use kogen_cli::commands::{config, routes, view};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kogen", version, about = "Scaffold views for Knockout projects")]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Log generation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a view and register its route
    View {
        /// View name (e.g. profile); prompted for when omitted
        name: Option<String>,
        /// Route (e.g. /profile); prompted for when omitted
        route: Option<String>,
        /// Only generate the index module and HTML template
        #[arg(long)]
        template_only: bool,
        /// Overwrite existing view files
        #[arg(long)]
        force: bool,
    },
    /// List the routes registered in routes.js
    Routes,
    /// Show the resolved generator settings
    Config,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::View {
            name,
            route,
            template_only,
            force,
        } => view::run(view::ViewArgs {
            name,
            route,
            template_only,
            force,
            dir: cli.dir,
        }),
        Commands::Routes => routes::run(&cli.dir),
        Commands::Config => config::run(&cli.dir),
    };

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
