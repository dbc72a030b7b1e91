use clap::Parser;
use termseq::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "termseq")]
#[command(version)]
#[command(
    about = "Run ohmyzsh.sh, then p10k.sh, each in its own terminal window",
    long_about = None
)]
struct Cli {}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    let result: Result<(), AppError> = termseq::setup().map(|report| {
        tracing::debug!(spawned = report.spawned(), missing = report.missing(), "setup finished");
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
