use anyhow::Result;
use argo_core::{
    CoordRange, DEFAULT_DB_FILE, DEFAULT_LAT_RANGE, DEFAULT_LON_RANGE, DEFAULT_MAX_DEPTH_M,
    DEFAULT_PROFILE_LIMIT, ProfileFilter,
};
use argo_export::ExportFormat;
use argo_storage::Storage;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "argo")]
#[command(about = "ARGO float data browser: load, query, annotate and export ocean profiles", long_about = None)]
struct Cli {
    /// Path of the SQLite store
    #[arg(long, global = true, env = "ARGO_DB_PATH", default_value = DEFAULT_DB_FILE)]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the profiles table with the contents of a CSV file
    Load {
        /// Path to CSV file
        #[arg(long)]
        csv: PathBuf,
    },
    /// Run the HTTP read API and dashboard endpoints
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print the first N profiles as JSON
    Profiles {
        #[arg(short, long, default_value_t = DEFAULT_PROFILE_LIMIT, allow_negative_numbers = true)]
        limit: i64,
    },
    /// Print profiles matching depth and position bounds as JSON
    Filter {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Attach a note to a sample
    Annotate {
        #[arg(long)]
        sample_id: i64,
        #[arg(long)]
        user: String,
        #[arg(long)]
        note: String,
    },
    /// Print the annotation history of a sample as JSON
    Annotations {
        #[arg(long)]
        sample_id: i64,
    },
    /// Write the filtered profiles as xlsx or pdf
    Export {
        #[arg(short, long)]
        format: ExportFormat,
        #[arg(short, long)]
        out: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Inclusive bounds; defaults match the dashboard's initial sliders.
#[derive(Args, Debug, Clone, Copy)]
struct FilterArgs {
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH_M)]
    max_depth: f64,
    #[arg(long, default_value_t = DEFAULT_LAT_RANGE.0, allow_negative_numbers = true)]
    lat_min: f64,
    #[arg(long, default_value_t = DEFAULT_LAT_RANGE.1, allow_negative_numbers = true)]
    lat_max: f64,
    #[arg(long, default_value_t = DEFAULT_LON_RANGE.0, allow_negative_numbers = true)]
    lon_min: f64,
    #[arg(long, default_value_t = DEFAULT_LON_RANGE.1, allow_negative_numbers = true)]
    lon_max: f64,
}

impl From<FilterArgs> for ProfileFilter {
    fn from(args: FilterArgs) -> Self {
        Self::new(
            args.max_depth,
            CoordRange::new(args.lat_min, args.lat_max),
            CoordRange::new(args.lon_min, args.lon_max),
        )
    }
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub(crate) fn open_storage(db_path: &Path) -> Result<Storage> {
    ensure_parent_dir(db_path)?;
    Ok(Storage::new(db_path)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Load { csv } => commands::load::run(&cli.db, &csv)?,
        Commands::Serve { port, host } => commands::serve::run(&cli.db, port, host).await?,
        Commands::Profiles { limit } => commands::query::run_profiles(&cli.db, limit)?,
        Commands::Filter { filter } => commands::query::run_filter(&cli.db, &filter.into())?,
        Commands::Annotate { sample_id, user, note } => {
            commands::query::run_annotate(&cli.db, sample_id, user, note)?;
        },
        Commands::Annotations { sample_id } => {
            commands::query::run_annotations(&cli.db, sample_id)?;
        },
        Commands::Export { format, out, filter } => {
            commands::export::run(&cli.db, format, &out, &filter.into())?;
        },
    }

    Ok(())
}
