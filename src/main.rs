use clap::{Parser, ValueEnum};
use tracing::debug;
use treefs::TreeFs;

#[derive(Parser, Debug, Clone)]
#[command(about = "Scripted walkthrough of the in-memory file system")]
struct Cli {
    #[clap(long, short, default_value = "silent", value_enum)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, ValueEnum, Default)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    #[default]
    Silent,
}

impl LogLevel {
    fn to_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

fn main() {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");

    let mut fs = TreeFs::new();
    run_walkthrough(&mut fs);
}

fn setup_tracing(cli_args: &Cli) {
    if let Some(level) = cli_args.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .compact()
            .init();
    }
}

fn run_walkthrough(fs: &mut TreeFs) {
    println!("--- CONSOLE WALKTHROUGH ---");

    command("pwd");
    println!("{}", fs.pwd());

    command("mkdir files");
    report(fs.mkdir("files"));
    list(fs);

    command("cd files");
    report(fs.cd("files"));
    command("pwd");
    println!("{}", fs.pwd());

    command("touch hello.txt");
    report(fs.touch("hello.txt"));
    list(fs);

    command("mkdir docs");
    report(fs.mkdir("docs"));
    list(fs);

    command("cd docs");
    report(fs.cd("docs"));
    command("pwd");
    println!("{}", fs.pwd());

    command("cd ../..");
    report(fs.cd("../.."));
    command("pwd");
    println!("{}", fs.pwd());

    println!("\n--- FULL PATHS ---");

    command("touch /files/docs/report.txt");
    report(fs.touch("/files/docs/report.txt"));
    command("cd files/docs");
    report(fs.cd("files/docs"));
    list(fs);

    command("cd /");
    report(fs.cd("/"));
    command("pwd");
    println!("{}", fs.pwd());

    command("mkdir /files/docs/2025");
    report(fs.mkdir("/files/docs/2025"));
    command("cd /files/docs");
    report(fs.cd("/files/docs"));
    list(fs);

    command("rm /files/docs/report.txt");
    report(fs.rm("/files/docs/report.txt"));
    list(fs);

    println!("\n--- ERROR CASES ---");

    command("rm /files (non-empty directory)");
    report(fs.cd("/"));
    report(fs.rm("/files"));
    list(fs);

    command("rm 2025 (empty directory)");
    report(fs.cd("/files/docs"));
    report(fs.rm("2025"));
    list(fs);

    command("cd .. (from /files/docs)");
    report(fs.cd(".."));
    list(fs);

    command("touch existing.txt");
    report(fs.touch("existing.txt"));
    command("touch existing.txt (again)");
    report(fs.touch("existing.txt"));
    list(fs);

    command("cd .. (from the root)");
    report(fs.cd("/"));
    report(fs.cd(".."));
    command("pwd");
    println!("{}", fs.pwd());
}

fn command(label: &str) {
    println!("\nCommand: {label}");
}

fn report(result: treefs::Result<()>) {
    if let Err(e) = result {
        println!("Error: {e}");
    }
}

fn list(fs: &TreeFs) {
    println!("Current directory contents:");
    let entries = fs.ls();
    if entries.is_empty() {
        println!("directory is empty");
        return;
    }
    for entry in &entries {
        println!("{entry}");
    }
}
