use colored::Colorize;

use crate::config::Config;
use crate::error::Error;
use crate::seed_data::UserRecord;

const RULE: &str = "========================================";

/// Outcome of a single insert attempt. Failures are recorded here and
/// summarized after the loop; they never stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    pub username: String,
    pub email: String,
    pub error: Option<String>,
}

impl InsertOutcome {
    pub fn succeeded(record: &UserRecord) -> Self {
        Self {
            username: display_field(record, "username"),
            email: display_field(record, "email"),
            error: None,
        }
    }

    pub fn failed(record: &UserRecord, message: impl Into<String>) -> Self {
        Self {
            username: display_field(record, "username"),
            email: display_field(record, "email"),
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Final counts, derived from the collected outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[InsertOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();

        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}

// Records are schema-agnostic; a missing or non-string field renders as "?".
fn display_field(record: &UserRecord, field: &str) -> String {
    record
        .get(field)
        .and_then(|v| v.as_str())
        .unwrap_or("?")
        .to_string()
}

/// Honour NO_COLOR before any output is produced.
pub fn init_color() {
    if std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

pub fn print_banner() {
    println!("\n{}", RULE.cyan());
    println!("{}", "  DynamoDB Seed Script - LUNARi Users".cyan());
    println!("{}\n", RULE.cyan());
}

pub fn print_config(config: &Config) {
    println!("{}", format!("Environment: {}", config.environment).bright_black());
    println!("{}", format!("Table Name: {}", config.table_name).bright_black());
    println!("{}\n", format!("Region: {}", config.region).bright_black());
}

pub fn print_outcome(outcome: &InsertOutcome) {
    match &outcome.error {
        None => println!(
            "{}",
            format!("  ✓ Inserted user: {} ({})", outcome.username, outcome.email).green()
        ),
        Some(message) => println!(
            "{}",
            format!("  ✗ Failed to insert {}: {}", outcome.username, message).red()
        ),
    }
}

pub fn print_summary(summary: &RunSummary) {
    println!("\n{}", RULE.cyan());
    println!("{}", "  Summary".cyan());
    println!("{}", RULE.cyan());
    println!("{}", format!("Total users: {}", summary.total).bright_black());
    println!(
        "{}",
        format!("Successfully inserted: {}", summary.succeeded).green()
    );

    let failed = format!("Failed: {}", summary.failed);
    if summary.failed > 0 {
        println!("{}", failed.red());
    } else {
        println!("{}", failed.bright_black());
    }

    println!("{}\n", RULE.cyan());
}

pub fn print_success_hints(config: &Config) {
    println!("{}\n", "✓ Database seeded successfully!".green());
    println!("{}", "You can now query the data:".bright_black());
    println!(
        "{}\n",
        format!(
            "  aws dynamodb scan --table-name {} --region {}",
            config.table_name, config.region
        )
        .bright_black()
    );
    println!("{}", "Or via the API:".bright_black());
    println!(
        "{}\n",
        "  curl http://your-api:8080/api/v1/users".bright_black()
    );
}

/// Fatal errors go to stderr. The missing-table case keeps the original
/// remediation guidance.
pub fn print_fatal(err: &Error, config: &Config) {
    match err {
        Error::TableMissing(table_name) => {
            eprintln!(
                "{}",
                format!("ERROR: Table '{table_name}' does not exist!").red()
            );
            eprintln!("{}", "\nPlease create the table first:".yellow());
            eprintln!("{}", "  cd infrastructure".bright_black());
            eprintln!(
                "{}",
                format!("  ./deploy-dynamodb.sh {}\n", config.environment).bright_black()
            );
        }
        other => {
            eprintln!("{}", format!("\nERROR: {other}").red());
        }
    }
}
