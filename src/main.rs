use anyhow::Result;

use qmd_lint::config::Config;
use qmd_lint::output::write_reports;
use qmd_lint::{EXIT_IO_ERROR, exit_code, lint_sources};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::from_args_and_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_IO_ERROR);
        }
    };

    let env = env_logger::Env::default().default_filter_or(&config.log_level);
    env_logger::Builder::from_env(env).init();

    if let Some(path) = &config.config_path {
        log::info!("Loaded config from {}", path.display());
    }

    let reports = lint_sources(&config.files).await;

    let stdout = std::io::stdout();
    write_reports(&mut stdout.lock(), &reports, config.format)?;

    std::process::exit(exit_code(&reports, config.exit_zero));
}
