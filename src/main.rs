// Tue Jan 13 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use uefi_service_mapper::{
    analysis::X64ImageSource,
    config::Config,
    memory::PeImage,
    orchestrator::{AnalysisSession, Coordinator},
    output::{Annotations, OutputManager, ReportGenerator},
    services::ServiceTableKind,
    utils::{format_duration, LoggingUtils},
};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Maps UEFI Boot/Runtime service usage in x64 firmware drivers", long_about = None)]
struct Args {
    /// PE32+ UEFI driver or application to analyse
    binary: PathBuf,

    /// JSON config file; command line flags are applied on top of it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Unattended preset: stats, log file, SQL output and debug messages
    #[arg(long)]
    batch: bool,

    #[arg(long)]
    no_prototype_comments: bool,

    #[arg(long)]
    description_comments: bool,

    #[arg(long)]
    no_guid_comments: bool,

    #[arg(long)]
    no_stats: bool,

    /// Append run messages to the log file instead of the terminal
    #[arg(long)]
    generate_log: bool,

    /// Write the usage tables next to the binary
    #[arg(long)]
    output_log: bool,

    /// Append SQL statements for this binary to the database script
    #[arg(long)]
    sql: bool,

    #[arg(short, long)]
    debug: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long)]
    database: Option<PathBuf>,

    /// Export the session and all annotations as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn build_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None if args.batch => Config::batch(),
        None => Config::default(),
    };

    if args.batch {
        config.generate_stats = true;
        config.generate_log = true;
        config.debug_msgs = true;
        config.output_sql = true;
    }

    config.comment_prototype &= !args.no_prototype_comments;
    config.comment_description |= args.description_comments;
    config.comment_guid &= !args.no_guid_comments;
    config.generate_stats &= !args.no_stats;
    config.generate_log |= args.generate_log;
    config.output_log |= args.output_log;
    config.output_sql |= args.sql;
    config.debug_msgs |= args.debug;

    if let Some(path) = &args.log_file {
        config = config.with_log_file(path.clone());
    }
    if let Some(path) = &args.database {
        config = config.with_database_file(path.clone());
    }
    if let Some(path) = &args.json {
        config = config.with_json_output(path.clone());
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let config = build_config(args)?;
    LoggingUtils::init(&config, &args.binary)
        .with_context(|| format!("opening log file {}", config.log_file.display()))?;

    if !args.no_banner {
        print_banner();
    }

    let start_time = Instant::now();

    println!("{} Loading binary: {}", "[*]".blue(), args.binary.display());
    let image = PeImage::load(&args.binary).with_context(|| format!("loading {}", args.binary.display()))?;
    let mut source = X64ImageSource::new(image);
    println!(
        "{} Decoded {} instructions in {}",
        "[+]".green(),
        source.instruction_count(),
        format_duration(start_time.elapsed())
    );

    let progress = (!args.no_progress).then(spinner);

    let result = {
        let mut coordinator = Coordinator::new(&config, &mut source);
        if let Some(pb) = &progress {
            coordinator = coordinator.with_progress(pb.clone());
        }
        coordinator.run(&args.binary)
    };

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    let session = match result {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            LoggingUtils::finish(&config, &args.binary)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    print_summary(&session);

    if session.stats_generated {
        println!();
        print!("{}", ReportGenerator::new().generate(&session));
    }

    let annotations = Annotations {
        comments: source.comments(),
        names: source.names(),
    };
    let sinks = OutputManager::new(&config).emit(&session, Some(annotations));
    for (sink, path) in &sinks.written {
        println!("{} {} saved to: {}", "[+]".green(), sink, path.display());
    }
    for (sink, e) in &sinks.failed {
        eprintln!("{} Failed to write {}: {}", "[!]".red(), sink, e);
    }

    LoggingUtils::finish(&config, &args.binary)?;

    println!();
    println!("{}", "=".repeat(50).cyan());
    println!(
        "{} All done in {}",
        "[+]".green(),
        format_duration(start_time.elapsed())
    );

    Ok(ExitCode::SUCCESS)
}

fn print_banner() {
    println!("{}", "UEFI Service Mapper".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_summary(session: &AnalysisSession) {
    println!("{}", "Results Summary".cyan().bold());
    println!("{}", "-".repeat(40).cyan());
    println!("  Target: {} ({})", session.target_id.green(), session.image_kind);

    for kind in ServiceTableKind::ALL {
        println!(
            "  {} table: {}  calls: {}",
            kind,
            session.table(kind).to_string().green(),
            session.sites(kind).len().to_string().green()
        );
    }

    println!("  Known GUIDs in data: {}", session.data_guids.len().to_string().green());
    if session.stats_generated {
        println!(
            "  Protocol GUIDs: {}  installed: {}",
            session.guid_stats.len().to_string().green(),
            session.guid_stats.installed_count().to_string().green()
        );
    }
    if session.error {
        println!("  {}", "Some passes were skipped, see the log".yellow());
    }
}
