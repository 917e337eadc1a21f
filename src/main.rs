//! ost - content types for a git-backed CMS
//!
//! CLI binary that creates content types in a GitHub repository.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ost_admin::config::Overrides;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

#[derive(Parser)]
#[command(name = "ost")]
#[command(about = "Create content types in a git-backed CMS")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Default)]
struct RepoArgs {
    /// Repository as owner/name (defaults to the git remote 'origin')
    #[arg(long)]
    repo: Option<String>,

    /// Branch to commit to
    #[arg(long)]
    branch: Option<String>,

    /// Directory holding content types
    #[arg(long)]
    content_path: Option<String>,
}

impl From<RepoArgs> for Overrides {
    fn from(args: RepoArgs) -> Self {
        Self {
            repo: args.repo,
            branch: args.branch,
            content_path: args.content_path,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a content type
    Create {
        /// Content type name, e.g. "Posts"
        name: String,

        /// Dry run - show the commit without making it
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        repo: RepoArgs,
    },

    /// Create a content type interactively
    New {
        #[command(flatten)]
        repo: RepoArgs,
    },

    /// Show how a name would be stored, without contacting GitHub
    Preview {
        /// Content type name
        name: String,

        /// Existing content types to check against (comma separated)
        #[arg(long, value_delimiter = ',')]
        existing: Vec<String>,

        /// Directory holding content types
        #[arg(long)]
        content_path: Option<String>,
    },

    /// List existing content types
    List {
        #[command(flatten)]
        repo: RepoArgs,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup {
        /// GitHub Enterprise host to save in the config file
        #[arg(long)]
        host: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "ost_admin=warn,ost=warn",
        1 => "ost_admin=info,ost=info",
        _ => "ost_admin=debug,ost=debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Create {
            name,
            dry_run,
            repo,
        } => {
            cli::run_create(config, repo.into(), &name, dry_run).await?;
        }
        Commands::New { repo } => {
            cli::run_new(config, repo.into()).await?;
        }
        Commands::Preview {
            name,
            existing,
            content_path,
        } => {
            cli::run_preview(config, &name, &existing, content_path.as_deref())?;
        }
        Commands::List { repo } => {
            cli::run_list(config, repo.into()).await?;
        }
        Commands::Auth { action } => match action {
            AuthAction::Test => cli::run_auth_test(config).await?,
            AuthAction::Setup { host } => cli::run_auth_setup(config, host.as_deref())?,
        },
    }

    Ok(())
}
