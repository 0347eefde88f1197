use clap::{Parser, Subcommand};
use st_app::config::{DATABASE_ENV, DEFAULT_DATABASE_FILE, FIT_SAMPLES_ENV};
use st_app::{AppError, AppResult, DEFAULT_FIT_SAMPLES, Session, database_service, fit};
use st_core::Real;
use st_db::AlloyRecord;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "st-cli")]
#[command(about = "SurfTension CLI - Browse alloy surface tension measurements", long_about = None)]
struct Cli {
    /// Path to the alloy database JSON file
    #[arg(short, long, global = true, env = DATABASE_ENV, default_value = DEFAULT_DATABASE_FILE)]
    database: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate database syntax and structure
    Validate,
    /// List categories in the database
    Categories,
    /// List alloys, optionally filtered by category
    Alloys {
        /// Only list alloys in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show metadata and observations of an alloy
    Show {
        /// Alloy display name
        alloy: String,
    },
    /// Print the model fit curve as CSV
    Fit {
        /// Alloy display name
        alloy: String,
        /// Number of points along the fit
        #[arg(short, long, env = FIT_SAMPLES_ENV, default_value_t = DEFAULT_FIT_SAMPLES)]
        samples: usize,
        /// Evaluate the model at these temperatures instead of sweeping
        #[arg(long = "at", value_delimiter = ',')]
        at: Vec<Real>,
    },
    /// Export an alloy record as key/value CSV
    Export {
        /// Alloy display name
        alloy: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(cli.verbose, &directives))
        .try_init();

    let mut session = Session::new();
    session.load_from_path(&cli.database)?;

    match cli.command {
        Commands::Validate => cmd_validate(&session, &cli.database),
        Commands::Categories => cmd_categories(&session),
        Commands::Alloys { category } => cmd_alloys(&mut session, category),
        Commands::Show { alloy } => cmd_show(&mut session, &alloy),
        Commands::Fit { alloy, samples, at } => cmd_fit(&mut session, &alloy, samples, &at),
        Commands::Export { alloy, output } => cmd_export(&mut session, &alloy, output.as_deref()),
    }
}

/// RUST_LOG directives win; without any, --verbose picks DEBUG over WARN.
fn log_filter(verbose: bool, directives: &str) -> EnvFilter {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives)
}

fn cmd_validate(session: &Session, path: &Path) -> AppResult<()> {
    let set = session.records().ok_or(AppError::NoDatabase)?;
    let summary = database_service::summarize(set);
    println!("Validating database: {}", path.display());
    println!(
        "✓ Database is valid ({} records, {} categories, {} observations)",
        summary.record_count, summary.category_count, summary.observation_count
    );
    Ok(())
}

fn cmd_categories(session: &Session) -> AppResult<()> {
    let categories = session.categories();
    if categories.is_empty() {
        println!("No categories found in database");
    } else {
        println!("Categories:");
        for category in categories {
            println!("  {}", category);
        }
    }
    Ok(())
}

fn cmd_alloys(session: &mut Session, category: Option<String>) -> AppResult<()> {
    let label = category.clone();
    let names = session.select_category(category);
    match (&label, names.is_empty()) {
        (Some(c), true) => println!("No alloys found in category: {}", c),
        (None, true) => println!("No alloys found in database"),
        (Some(c), false) => println!("Alloys in category '{}':", c),
        (None, false) => println!("Alloys:"),
    }
    for name in names {
        println!("  {}", name);
    }
    Ok(())
}

fn cmd_show(session: &mut Session, alloy: &str) -> AppResult<()> {
    session.select_alloy(alloy)?;
    let spec = session.current_plot(DEFAULT_FIT_SAMPLES)?;

    println!("{}", spec.title);
    println!("{}", spec.metadata_text());

    if spec.observed.points.is_empty() {
        println!("\nNo observations recorded");
    } else {
        println!("\nObservations:");
        println!("  {:>10}  {:>10}  {:>10}", "T (°C)", "sigma", "stddev");
        for p in &spec.observed.points {
            println!("  {:>10.2}  {:>10.5}  {:>10.5}", p.t, p.sigma, p.stddev);
        }
    }

    if let Some(notice) = &spec.notice {
        println!("\n{}", notice);
    }
    Ok(())
}

fn fit_points(record: &AlloyRecord, samples: usize, at: &[Real]) -> AppResult<Vec<[Real; 2]>> {
    if at.is_empty() {
        return Ok(fit::fit_curve(record, samples)?.points());
    }
    Ok(at
        .iter()
        .map(|&t| [t, fit::evaluate_model(&record.model, t)])
        .collect())
}

fn cmd_fit(session: &mut Session, alloy: &str, samples: usize, at: &[Real]) -> AppResult<()> {
    let entry = session.select_alloy(alloy)?;
    let points = fit_points(&entry.record, samples, at)?;

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    let result = (|| -> Result<(), csv::Error> {
        writer.write_record(["T_superheat", "sigma_fit"])?;
        for [t, sigma] in points {
            writer.write_record([t.to_string(), sigma.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    })();

    result.map_err(|e| AppError::Export {
        path: PathBuf::from("<stdout>"),
        message: e.to_string(),
    })
}

fn cmd_export(session: &mut Session, alloy: &str, output: Option<&Path>) -> AppResult<()> {
    session.select_alloy(alloy)?;

    if let Some(path) = output {
        let summary = session.export_current(path)?;
        println!(
            "✓ Exported {} rows to {}",
            summary.row_count,
            summary.path.display()
        );
    } else {
        let entry = session.current_record().ok_or(AppError::NoSelection)?;
        let rows = st_export::flatten(&entry.fields);
        let text = st_export::to_csv_string(&rows).map_err(|e| AppError::Export {
            path: PathBuf::from("<stdout>"),
            message: e.to_string(),
        })?;
        print!("{}", text);
    }
    Ok(())
}
