//! CLI Adapter.

mod check;
mod plan;
mod platforms;
mod setup;

use std::env;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::app::commands::SetupRequest;
use crate::domain::{AppError, ConfigOverrides, ExitStatusPolicy, HostPlatform};

#[derive(Parser)]
#[command(name = "buildprep")]
#[command(version)]
#[command(
    about = "Provision build and dependency-cache directories, then run CMake",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Config file, relative to the root (defaults to buildprep.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

impl GlobalArgs {
    fn root(&self) -> Result<PathBuf, AppError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(env::current_dir()?),
        }
    }
}

/// Flags selecting which directories are reserved and provisioned.
#[derive(Args, Default)]
struct LayoutArgs {
    /// Build directory, relative to the root
    #[arg(long, value_name = "DIR")]
    build_dir: Option<PathBuf>,
    /// Provision the shared dependency cache
    #[arg(long, conflicts_with = "no_dependency_cache")]
    dependency_cache: bool,
    /// Skip the shared dependency cache
    #[arg(long)]
    no_dependency_cache: bool,
}

/// Flags shaping the configure command.
#[derive(Args, Default)]
struct ConfigureArgs {
    /// Target platform: windows (nt) or posix (unix); detected when omitted
    #[arg(long, value_name = "PLATFORM")]
    platform: Option<HostPlatform>,
    /// Exit status handling of the configure command: ignore or propagate
    #[arg(long, value_name = "POLICY")]
    exit_status: Option<ExitStatusPolicy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check reserved paths, provision directories and run the configure command
    #[clap(visible_alias = "s")]
    Setup {
        #[command(flatten)]
        layout: LayoutArgs,
        #[command(flatten)]
        configure: ConfigureArgs,
        /// Wait for enter before exiting
        #[arg(long, conflicts_with = "no_pause")]
        pause: bool,
        /// Exit without waiting for enter
        #[arg(long)]
        no_pause: bool,
    },
    /// Report reserved paths that are occupied by files
    #[clap(visible_alias = "c")]
    Check {
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Show what setup would do without changing anything
    #[clap(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        layout: LayoutArgs,
        #[command(flatten)]
        configure: ConfigureArgs,
    },
    /// Print the configure command for each platform
    Platforms,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init(cli.global.verbose);

    let global = &cli.global;
    let result: Result<i32, AppError> = match cli.command {
        Commands::Setup { layout, configure, pause, no_pause } => {
            let request = build_request(global, &layout, &configure, flag_pair(pause, no_pause));
            global.root().and_then(|root| setup::run_setup(&root, &request))
        }
        Commands::Check { layout } => {
            let request = build_request(global, &layout, &ConfigureArgs::default(), None);
            global.root().and_then(|root| check::run_check(&root, &request))
        }
        Commands::Plan { layout, configure } => {
            let request = build_request(global, &layout, &configure, None);
            global.root().and_then(|root| plan::run_plan(&root, &request).map(|_| 0))
        }
        Commands::Platforms => global
            .root()
            .and_then(|root| platforms::run_platforms(&root, global.config.as_deref()).map(|_| 0)),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }
}

/// Print an error the way the CLI reports it.
fn report_error(err: &AppError) {
    match err {
        AppError::PathConflict { paths } => {
            println!("ERROR: some reserved directory paths are occupied by files.");
            for path in paths {
                println!("{}", path.display());
            }
        }
        _ => eprintln!("Error: {}", err),
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn build_request(
    global: &GlobalArgs,
    layout: &LayoutArgs,
    configure: &ConfigureArgs,
    pause: Option<bool>,
) -> SetupRequest {
    SetupRequest {
        config_path: global.config.clone(),
        overrides: ConfigOverrides {
            build_dir: layout.build_dir.clone(),
            dependency_cache: flag_pair(layout.dependency_cache, layout.no_dependency_cache),
            exit_status: configure.exit_status,
            pause_before_exit: pause,
        },
        platform: configure.platform,
    }
}
