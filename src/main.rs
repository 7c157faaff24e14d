// src/main.rs

use runlist::{cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("runlist error: {err:?}");
            std::process::exit(1);
        }
    }
}

/// `Ok(true)` when every command passed.
async fn run_main() -> anyhow::Result<bool> {
    let args = cli::parse();
    println!("runlist version: {}", env!("CARGO_PKG_VERSION"));
    logging::init_logging(args.log_level)?;
    let summary = run(args).await?;
    Ok(summary.is_success())
}
