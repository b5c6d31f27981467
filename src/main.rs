use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use gitversion::cli::{run_gitversion_workflow, WorkflowArgs};
use gitversion::domain::SuffixPolicy;
use gitversion::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "gitversion",
    about = "Generate PEP 440 version numbers based on git history"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        short = 'V',
        long,
        help = "Write the generated local version to this file"
    )]
    version_file: Option<PathBuf>,

    #[arg(long, help = "Declared release version (default: read from the manifest)")]
    base_version: Option<String>,

    #[arg(long, help = "Manifest to read the declared version from [default: Cargo.toml]")]
    manifest_path: Option<PathBuf>,

    #[arg(long, help = "Suffix policy: 'nonzero' or 'always'")]
    policy: Option<SuffixPolicy>,

    #[arg(short = 'C', long, help = "Run git in this directory")]
    git_dir: Option<PathBuf>,

    #[arg(short = 'n', long, help = "Do not run git or write files")]
    dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("gitversion {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = init_logging(args.verbose) {
        ui::display_error(&format!("Failed to initialize logging: {}", e));
    }

    if let Err(e) = run(args) {
        ui::display_error(&ui::format_error_chain(&e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    let workflow_args = WorkflowArgs {
        config_path: args.config,
        version_file: args.version_file,
        base_version: args.base_version,
        manifest_path: args.manifest_path,
        policy: args.policy,
        git_dir: args.git_dir,
        dry_run: args.dry_run,
    };

    let result = run_gitversion_workflow(workflow_args, config)?;
    ui::display_version(&result);
    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let collector = tracing_subscriber::registry().with(console_layer).with(filter);
    tracing::subscriber::set_global_default(collector)?;
    Ok(())
}
