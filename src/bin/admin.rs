//! CLI administration tool for string-analyzer.
//!
//! Inspects the analyzer and the natural-language translator offline, and
//! manages stored strings without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the properties the service would compute
//! cargo run --bin admin -- analyze "A man, a plan, a canal: Panama"
//!
//! # Show how a natural-language query is interpreted
//! cargo run --bin admin -- interpret "single word palindromic strings"
//!
//! # Storage statistics
//! cargo run --bin admin -- stats
//!
//! # Delete a stored string
//! cargo run --bin admin -- delete "hello world"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): required for `stats`, `delete` and `db`

use string_analyzer::application::services::StringService;
use string_analyzer::config::Config;
use string_analyzer::domain::analyzer::compute_properties;
use string_analyzer::domain::filter::StringFilter;
use string_analyzer::domain::nl_query::parse_query;
use string_analyzer::infrastructure::persistence::PgStringRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing string-analyzer.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the computed properties of a string
    Analyze {
        /// The raw string to analyze
        value: String,
    },

    /// Print the filters derived from a natural-language query
    Interpret {
        /// The natural-language query
        query: String,
    },

    /// Show storage statistics
    Stats,

    /// Delete a stored string
    Delete {
        /// Exact value to delete
        value: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { value } => analyze(&value),
        Commands::Interpret { query } => interpret(&query)?,
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Delete { value, yes } => delete_string(&connect().await?, value, yes).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

/// Connects to the database configured in the environment.
async fn connect() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

fn string_service(pool: &PgPool) -> StringService {
    StringService::new(Arc::new(PgStringRepository::new(Arc::new(pool.clone()))))
}

/// Prints every property the service computes for `value`.
fn analyze(value: &str) {
    let props = compute_properties(value);

    println!("{}", "🔬 String Analysis".bright_blue().bold());
    println!();
    println!("  Value:             {}", value.cyan());
    println!("  SHA-256:           {}", props.sha256_hash.bright_black());
    println!("  Length:            {}", props.length.to_string().bright_white());
    println!(
        "  Palindrome:        {}",
        if props.is_palindrome {
            "yes".green()
        } else {
            "no".red()
        }
    );
    println!(
        "  Unique characters: {}",
        props.unique_characters.to_string().bright_white()
    );
    println!(
        "  Words:             {}",
        props.word_count.to_string().bright_white()
    );
    println!();
    println!("{}", "Character frequency:".bright_white().bold());

    for (c, count) in &props.character_frequency_map {
        println!("  {:<6} {}", format!("{c:?}").cyan(), count);
    }
    println!();
}

/// Prints the structured filter derived from a natural-language query.
fn interpret(query: &str) -> Result<()> {
    println!("{}", "🧭 Query Interpretation".bright_blue().bold());
    println!();
    println!("  Query: {}", query.cyan());
    println!();

    match parse_query(query) {
        Ok(filter) => {
            print_filter(&filter);
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("❌ {e}").red());
            Err(e.into())
        }
    }
}

fn print_filter(filter: &StringFilter) {
    if filter.is_empty() {
        println!("{}", "  No filters recognized (matches everything)".yellow());
        return;
    }

    if let Some(p) = filter.is_palindrome {
        println!("  is_palindrome:      {}", p.to_string().green());
    }
    if let Some(n) = filter.min_length {
        println!("  min_length:         {}", n.to_string().green());
    }
    if let Some(n) = filter.max_length {
        println!("  max_length:         {}", n.to_string().green());
    }
    if let Some(n) = filter.word_count {
        println!("  word_count:         {}", n.to_string().green());
    }
    if let Some(c) = filter.contains_character {
        println!("  contains_character: {}", c.to_string().green());
    }
    println!();
}

/// Displays storage statistics.
///
/// Shows:
/// - Total number of stored strings
/// - Number of palindromes
/// - Number of single-word strings
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = string_service(pool);

    let total = service.count_strings().await?;
    let palindromes = service
        .list_strings(StringFilter::new().with_palindrome(Some(true)))
        .await?
        .count;
    let single_words = service
        .list_strings(StringFilter::new().with_word_count(Some(1)))
        .await?
        .count;

    println!("  Strings:      {}", total.to_string().bright_green().bold());
    println!(
        "  Palindromes:  {}",
        palindromes.to_string().bright_green().bold()
    );
    println!(
        "  Single words: {}",
        single_words.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Deletes a stored string after confirmation.
async fn delete_string(pool: &PgPool, value: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete String".bright_blue().bold());
    println!();

    let service = string_service(pool);
    let record = service.get_string(&value).await?;

    println!("  Value:   {}", record.value.cyan());
    println!("  ID:      {}", record.id.bright_black());
    println!(
        "  Created: {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this string?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete_string(&value).await?;

    println!("{}", "✅ String deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrated: bool = sqlx::query_scalar(
                "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = 'analyzed_strings')",
            )
            .fetch_one(pool)
            .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Schema:     {}",
                if migrated {
                    "migrated".green()
                } else {
                    "not migrated (start the server once)".yellow()
                }
            );
            println!();
        }
    }

    Ok(())
}
