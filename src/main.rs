use std::path::PathBuf;
use tracing::info;
use wordclock::{init_logging, load_config, run, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    info!(version = VERSION, build_date = BUILD_DATE, "Word clock cut-sheet generator");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    let written = run(&config)?;
    for path in &written {
        println!("{}", path.display());
    }

    Ok(())
}
