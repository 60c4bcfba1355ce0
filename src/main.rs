//! Expand a JSON file of parameter ranges into one entry per combination.
//
//  Run:  `cargo run --bin sweep -- parameters.json --out-dir out/`

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sweep::output::{print_pairs, progress_bar, write_files, write_manifest};
use sweep::{input, CollisionPolicy, ExpandOptions};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "sweep", version, about = "Expand parameter ranges into labeled combinations")]
struct Cli {
    /// JSON file with an array of {name, min, max, increment}
    input: PathBuf,

    /// Write one file per combination into this directory instead of printing
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Also write a CSV manifest (label plus one column per range)
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Fail if two combinations format to the same label
    #[arg(long)]
    strict: bool,

    /// Expand the first axis in parallel
    #[arg(long)]
    parallel: bool,

    /// No progress bar
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn expand_options(&self) -> ExpandOptions {
        ExpandOptions {
            collisions: if self.strict { CollisionPolicy::Reject } else { CollisionPolicy::Overwrite },
            parallel:   self.parallel,
        }
    }
}

fn run(cli: &Cli) -> sweep::Result<()> {
    let ranges = input::load_ranges(&cli.input)?;
    let rs = sweep::sweep(&ranges, &cli.expand_options())?;
    info!("{} combinations", rs.len());

    match &cli.out_dir {
        Some(dir) => {
            let bar = progress_bar(rs.len(), cli.quiet);
            write_files(&rs, dir, &bar)?;
        }
        None => {
            print_pairs(&rs, io::stdout().lock())
                .map_err(|source| sweep::Error::Io { path: "<stdout>".into(), source })?;
        }
    }

    if let Some(path) = &cli.manifest {
        write_manifest(&rs, &ranges, path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sweep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
