//! CLI administration tool for trivia-api.
//!
//! Provides commands for question maintenance, statistics and database
//! checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show question counts per category
//! cargo run --bin admin -- stats
//!
//! # Add a question interactively
//! cargo run --bin admin -- question add
//!
//! # Delete a question
//! cargo run --bin admin -- question delete 15
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use trivia_api::application::services::{CategoryService, QuestionService};
use trivia_api::domain::entities::NewQuestion;
use trivia_api::infrastructure::persistence::{PgCategoryRepository, PgQuestionRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use sqlx::PgPool;
use std::collections::BTreeMap;
use std::sync::Arc;

/// CLI tool for managing trivia-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage questions
    Question {
        #[command(subcommand)]
        action: QuestionAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Question management subcommands.
#[derive(Subcommand)]
enum QuestionAction {
    /// Add a question with interactive prompts
    Add,

    /// Permanently delete a question
    Delete {
        /// Question ID
        id: i32,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

/// Services the commands operate on.
struct Services {
    questions: QuestionService<PgQuestionRepository>,
    categories: CategoryService<PgCategoryRepository>,
}

impl Services {
    fn new(pool: &PgPool) -> Self {
        let pool = Arc::new(pool.clone());
        Self {
            questions: QuestionService::new(Arc::new(PgQuestionRepository::new(pool.clone()))),
            categories: CategoryService::new(Arc::new(PgCategoryRepository::new(pool))),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let services = Services::new(&pool);

    match cli.command {
        Commands::Question { action } => match action {
            QuestionAction::Add => add_question(&services).await?,
            QuestionAction::Delete { id, yes } => delete_question(&services, id, yes).await?,
        },
        Commands::Stats => handle_stats(&services).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Creates a question from interactive prompts.
///
/// The category is picked from the stored categories; difficulty is 1-5.
async fn add_question(services: &Services) -> Result<()> {
    println!("{}", "➕ Add Question".bright_blue().bold());
    println!();

    let categories = services
        .categories
        .list_categories()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load categories: {}", e))?;

    if categories.is_empty() {
        println!("{}", "  No categories found".yellow());
        return Ok(());
    }

    let question: String = Input::new().with_prompt("Question").interact_text()?;
    let answer: String = Input::new().with_prompt("Answer").interact_text()?;

    let names: Vec<&str> = categories.iter().map(|c| c.kind.as_str()).collect();
    let selected = Select::new()
        .with_prompt("Category")
        .items(&names)
        .default(0)
        .interact()?;
    let category = &categories[selected];

    let difficulty: i32 = Input::new()
        .with_prompt("Difficulty (1-5)")
        .default(1)
        .validate_with(|d: &i32| {
            if (1..=5).contains(d) {
                Ok(())
            } else {
                Err("difficulty must be between 1 and 5")
            }
        })
        .interact_text()?;

    println!();
    println!("  Question:   {}", question.cyan());
    println!("  Answer:     {}", answer.cyan());
    println!("  Category:   {}", category.kind.cyan());
    println!("  Difficulty: {}", difficulty.to_string().cyan());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Create this question?")
        .default(true)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let created = services
        .questions
        .create_question(NewQuestion {
            question: Some(question),
            answer: Some(answer),
            category: Some(category.id),
            difficulty: Some(difficulty),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create question: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Question created with ID".green().bold(),
        created.id.to_string().bright_white().bold()
    );

    Ok(())
}

/// Deletes a question after showing it and asking for confirmation.
async fn delete_question(services: &Services, id: i32, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Question".bright_blue().bold());
    println!();

    let question = services
        .questions
        .get_question(id)
        .await
        .map_err(|e| anyhow::anyhow!("Question {}: {}", id, e))?;

    println!("  ID:       {}", question.id.to_string().bright_black());
    println!("  Question: {}", question.question.cyan());
    println!("  Answer:   {}", question.answer.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this question? This cannot be undone.")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    services
        .questions
        .delete_question(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete question: {}", e))?;

    println!("{}", "✅ Question deleted".green().bold());
    println!();

    Ok(())
}

/// Displays question totals and per-category counts.
///
/// Questions whose category id has no matching category are listed under
/// their raw id.
async fn handle_stats(services: &Services) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (categories, questions) = tokio::try_join!(
        services.categories.list_categories(),
        services.questions.list_questions()
    )
    .map_err(|e| anyhow::anyhow!("Failed to load data: {}", e))?;

    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for q in &questions {
        *counts.entry(q.category).or_default() += 1;
    }

    println!(
        "  {:<4} {:<20} {:>9}",
        "ID".bright_white().bold(),
        "Category".bright_white().bold(),
        "Questions".bright_white().bold()
    );
    println!("  {}", "─".repeat(35).bright_black());

    for category in &categories {
        let count = counts.remove(&category.id).unwrap_or(0);
        println!(
            "  {:<4} {:<20} {:>9}",
            category.id.to_string().bright_black(),
            category.kind.cyan(),
            count
        );
    }

    for (category_id, count) in counts {
        println!(
            "  {:<4} {:<20} {:>9}",
            category_id.to_string().bright_black(),
            "(unknown)".yellow(),
            count
        );
    }

    println!();
    println!(
        "  Total questions: {}",
        questions.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔌 Database Check".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "  ✅ Connected".green().bold());
            println!("  {}", version.bright_black());
            println!();
        }
    }

    Ok(())
}
