use std::process;

use colored::Colorize;
use log::debug;

use seed_database::{
    default_seed_path, load, report, Config, Error, InsertOutcome, RunSummary, SeedTable,
};

#[tokio::main]
async fn main() {
    env_logger::init();
    report::init_color();

    let config = Config::resolve();

    match run(&config).await {
        Ok(summary) => {
            debug!("run complete: {summary:?}");
            println!("{}", "Done!".green());
        }
        Err(err) => {
            report::print_fatal(&err, &config);
            process::exit(1);
        }
    }
}

/// The whole run is a strict linear sequence: probe, load, insert loop,
/// summary. The only branch is the existence check, which short-circuits to
/// a fatal abort. Per-record insert failures are isolated; they are counted
/// and reported but never change the exit code.
async fn run(config: &Config) -> Result<RunSummary, Error> {
    report::print_banner();
    report::print_config(config);

    let client = build_client(config).await;
    let table = SeedTable::new(client, &config.table_name);

    println!("{}", "Checking if table exists...".yellow());
    if !table.exists().await? {
        return Err(Error::TableMissing(config.table_name.clone()));
    }
    println!("{}\n", "✓ Table exists".green());

    println!("{}", "Loading seed data...".yellow());
    let seed_path = default_seed_path()?;
    let records = load(&seed_path)?;
    println!(
        "{}\n",
        format!(
            "✓ Loaded {} users from {}",
            records.len(),
            seed_database::seed_data::SEED_FILE_NAME
        )
        .green()
    );

    println!("{}\n", "Inserting users into DynamoDB...".yellow());

    let mut outcomes = Vec::with_capacity(records.len());
    for record in &records {
        let outcome = match table.put(record).await {
            Ok(()) => InsertOutcome::succeeded(record),
            Err(err) => InsertOutcome::failed(record, err.to_string()),
        };
        report::print_outcome(&outcome);
        outcomes.push(outcome);
    }

    let summary = RunSummary::from_outcomes(&outcomes);
    report::print_summary(&summary);

    if summary.succeeded > 0 {
        report::print_success_hints(config);
    }

    Ok(summary)
}

async fn build_client(config: &Config) -> aws_sdk_dynamodb::Client {
    let region = aws_config::Region::new(config.region.clone());

    let mut loader = aws_config::from_env().region(region);
    if let Some(url) = &config.endpoint_url {
        loader = loader.endpoint_url(url);
    }

    let sdk_config = loader.load().await;
    aws_sdk_dynamodb::Client::new(&sdk_config)
}
