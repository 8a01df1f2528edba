use anyhow::Result;
use clap::Parser;
use std::io::BufWriter;
use std::path::PathBuf;
use topo_order::areas::repository::Repository;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "topo-order-commits",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Print local branch history in topological order",
    long_about = "Reads branch tips and loose commit objects straight from the enclosing \
    repository's .git directory and prints every reachable commit, newest first, \
    with branch names and markers wherever the output leaves a parent chain.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        short = 'C',
        value_name = "PATH",
        help = "Start the repository search from this directory instead of the current one"
    )]
    directory: Option<PathBuf>,
    #[arg(short, long, help = "Log traversal details to stderr")]
    verbose: bool,
    #[arg(short, long, conflicts_with = "verbose", help = "Only log errors")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(cli.log_level().into()))
        .init();

    let start = match &cli.directory {
        Some(directory) => directory.clone(),
        None => std::env::current_dir()?,
    };

    let repository = Repository::discover(&start, Box::new(BufWriter::new(std::io::stdout())))?;
    repository.topo_order()?;

    Ok(())
}
