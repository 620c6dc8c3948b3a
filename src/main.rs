use std::error::Error;
use subnet_cidr::config::Config;
use subnet_cidr::{init_logging, load_input, print_summary};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = load_input(&config, &args)?;
    if input.is_empty() {
        eprintln!("usage: cidr-summary [<cidr-block> | <address>]...  (or set CIDR_SUMMARY_INPUT=<file.json>)");
        return Ok(());
    }

    print_summary(&input, config.range_limit)?;

    log::info!("#End main()");
    Ok(())
}
