//! gitlab-mr: triage open GitLab merge requests

mod cli;

use clap::{ArgGroup, Args, Parser, Subcommand};
use cli::ProjectsAction;
use gitlab_mr::config::default_config_path;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gitlab-mr")]
#[command(about = "Utils to ease review work on GitLab: see which merge requests need you")]
#[command(version)]
struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save GitLab host and access token
    Init {
        /// GitLab host, e.g. https://gitlab.example.com (prompted if omitted)
        #[arg(long)]
        host: Option<String>,

        /// Personal access token (prompted if omitted)
        #[arg(long)]
        token: Option<String>,
    },

    /// Test that everything is ok
    Test,

    /// List, add or remove projects
    Projects(ProjectsArgs),

    /// Edit configuration file
    Edit,

    /// View all active merge requests
    Overview,

    /// Quick actions: merge requests that need you now
    Actions {
        /// Print only the number of merge requests
        #[arg(short, long)]
        count: bool,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("mode").args(["list", "add", "remove"])))]
struct ProjectsArgs {
    /// List projects (default)
    #[arg(short, long)]
    list: bool,

    /// Add project
    #[arg(short, long, requires = "project")]
    add: bool,

    /// Remove project
    #[arg(short, long, requires = "project")]
    remove: bool,

    /// Project path, e.g. group/name
    project: Option<String>,
}

impl ProjectsArgs {
    fn into_action(self) -> ProjectsAction {
        match (self.add, self.remove, self.project) {
            (true, _, Some(project)) => ProjectsAction::Add(project),
            (_, true, Some(project)) => ProjectsAction::Remove(project),
            _ => ProjectsAction::List,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "gitlab_mr=debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };

    match cli.command {
        Commands::Init { host, token } => cli::run_init(&config_path, host, token)?,
        Commands::Test => cli::run_check(&config_path).await?,
        Commands::Projects(args) => cli::run_projects(&config_path, args.into_action()).await?,
        Commands::Edit => cli::run_edit(&config_path)?,
        Commands::Overview => cli::run_overview(&config_path).await?,
        Commands::Actions { count } => cli::run_actions(&config_path, count).await?,
    }

    Ok(())
}
