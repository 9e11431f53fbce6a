mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Filter directive applying `level` to every cxsession crate.
fn log_directive(level: &str) -> String {
    ["cxsession", "cxsession_api", "cxsession_config"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn init_logging(level: &str) {
    let mut filter = EnvFilter::from_default_env();
    for directive in log_directive(level).split(',') {
        match directive.parse::<Directive>() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("ignoring log directive {directive:?}: {e}"),
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before the subscriber exists so its level can apply.
    let loaded = match args.config {
        Some(ref path) => cxsession_config::load_config_from(path),
        None => cxsession_config::load_config(),
    };

    let level = args.log_level.clone().unwrap_or_else(|| {
        loaded
            .as_ref()
            .map(|c| c.logging.level.as_directive())
            .unwrap_or("info")
            .to_string()
    });
    init_logging(&level);

    tracing::debug!("cxsession v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match (loaded, args.config.as_ref()) {
        (Ok(config), _) => config,
        (Err(e), Some(path)) => {
            eprintln!("error: failed to load config {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
        (Err(e), None) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            cxsession_config::CxConfig::default()
        }
    };

    match commands::run(args.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
