use automation_assets::cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli::run(&cli, &mut stdout) {
        eprintln!("Error: {}", e);
        std::process::exit(e.classify().exit_code);
    }
}
