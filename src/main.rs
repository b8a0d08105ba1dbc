use clap::Parser;
use hh_harvest::utils::{logger, validation::Validate};
use hh_harvest::{export, CliConfig, FileProgressStore, FilterPolicy, Harvester, HhClient};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hh-harvest");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let policy = match &config.policy {
        Some(path) => FilterPolicy::from_toml_file(path)?,
        None => FilterPolicy::default(),
    };

    let api = HhClient::new(config.base_url.clone());
    let progress = FileProgressStore::new(config.progress_file.clone());
    let harvester = Harvester::new(api, progress, policy, config.query.clone())
        .with_per_page(config.per_page)
        .with_page_delay(Duration::from_millis(config.page_delay_ms));

    let result = if config.all_regions {
        harvester.run_tree(&config.area).await
    } else {
        harvester.run_single(&config.area).await
    };

    let rows = match result {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Progress is saved; rerun to resume from the last page");
            std::process::exit(1);
        }
    };

    tracing::info!("Collected {} relevant vacancies", rows.len());

    if config.all_regions || config.csv {
        let path = export::dated_csv_path(&config.output_path);
        export::save_to_csv(&rows, &path)?;
        println!("✅ {} vacancies saved to {}", rows.len(), path.display());
    } else {
        export::print_rows(&rows);
    }

    Ok(())
}
