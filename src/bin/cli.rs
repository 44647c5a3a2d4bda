//! Terminal client for BizInsight.
//!
//! Runs the same generation pipeline as the HTTP service without a server
//! and without accounts or history.
//!
//! # Usage
//!
//! ```bash
//! # Analyse an address (missing values are prompted)
//! cargo run --bin bizinsight-cli -- analyze --address "서울시 강남구 강남대로 396" --business-type 카페
//!
//! # Recommend locations in a region, printing raw JSON
//! cargo run --bin bizinsight-cli -- recommend --city 서울시 --district 마포구 --json
//!
//! # Show the prompt that would be sent, without calling the provider
//! cargo run --bin bizinsight-cli -- analyze --print-prompt
//!
//! # Clean up a saved model reply
//! cargo run --bin bizinsight-cli -- extract reply.txt
//! ```
//!
//! # Environment Variables
//!
//! The same as the server; see [`bizinsight::config`]. Without
//! `GEMINI_API_KEY` every result is demo data.

use bizinsight::config;
use bizinsight::domain::catalog::{
    BUDGET_RANGES, BUSINESS_TYPES, CITIES, DEFAULT_BUDGET, DEFAULT_HOURS, DEFAULT_PARKING,
    DEFAULT_TARGET_AGE, OPERATING_HOURS, PARKING_OPTIONS, TARGET_AGES, districts, dongs,
};
use bizinsight::domain::entities::{
    AnalysisInput, AnalysisResult, Radius, RecommendationInput, RecommendationResult, SourceLink,
    WHOLE_AREA,
};
use bizinsight::domain::outcome::Outcome;
use bizinsight::domain::prompt::{analysis_prompt, recommendation_prompt};
use bizinsight::server::build_analysis_service;
use bizinsight::utils::json_extract::extract_json;
use bizinsight::utils::text_sanitizer::sanitize_value;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Commercial-location analysis from the terminal.
#[derive(Parser)]
#[command(name = "bizinsight-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse one address
    Analyze {
        /// Street address
        #[arg(short, long)]
        address: Option<String>,

        /// Business type (e.g. "카페")
        #[arg(short, long)]
        business_type: Option<String>,

        /// Operating hours
        #[arg(long)]
        hours: Option<String>,

        /// Search radius: 250m, 500m or 1km
        #[arg(short, long)]
        radius: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Recommend locations in a region
    Recommend {
        /// Business type (e.g. "카페")
        #[arg(short, long)]
        business_type: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        district: Option<String>,

        /// Neighbourhood, or "전체" for the whole district
        #[arg(long)]
        dong: Option<String>,

        #[arg(long)]
        hours: Option<String>,

        /// Monthly rent budget
        #[arg(long)]
        budget: Option<String>,

        #[arg(long)]
        target_age: Option<String>,

        #[arg(long)]
        parking: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract, repair and clean the JSON in a saved model reply
    Extract {
        /// File holding the raw reply text
        file: PathBuf,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Print the result as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Print the prompt and exit without calling the provider
    #[arg(long)]
    print_prompt: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            address,
            business_type,
            hours,
            radius,
            output,
        } => {
            let radius = match radius {
                Some(raw) => Some(
                    Radius::parse(&raw)
                        .with_context(|| format!("unknown radius '{}', use 250m, 500m or 1km", raw))?,
                ),
                None => None,
            };
            let input = AnalysisInput {
                address: text_or_prompt(address, "Address")?,
                business_type: choose_or_prompt(business_type, "Business type", BUSINESS_TYPES)?,
                hours: choose_or_prompt(hours, "Operating hours", OPERATING_HOURS)?,
                radius: match radius {
                    Some(r) => r,
                    None => select_radius()?,
                },
            };
            run_analysis(input, output).await?
        }
        Commands::Recommend {
            business_type,
            city,
            district,
            dong,
            hours,
            budget,
            target_age,
            parking,
            output,
        } => {
            let business_type = choose_or_prompt(business_type, "Business type", BUSINESS_TYPES)?;
            let city = choose_or_prompt(city, "City", CITIES)?;
            let district = choose_or_prompt(district, "District", districts(&city))?;
            let dong = match dong {
                Some(d) => d,
                None => {
                    let mut options = vec![WHOLE_AREA];
                    options.extend_from_slice(dongs(&district));
                    if options.len() == 1 {
                        WHOLE_AREA.to_string()
                    } else {
                        choose_or_prompt(None, "Neighbourhood", &options)?
                    }
                }
            };

            let input = RecommendationInput {
                business_type,
                city,
                district,
                dong,
                hours: hours.unwrap_or_else(|| DEFAULT_HOURS.to_string()),
                budget: match budget {
                    Some(b) => b,
                    None => choose_with_default("Budget", BUDGET_RANGES, DEFAULT_BUDGET)?,
                },
                target_age: match target_age {
                    Some(a) => a,
                    None => choose_with_default("Target age", TARGET_AGES, DEFAULT_TARGET_AGE)?,
                },
                parking: match parking {
                    Some(p) => p,
                    None => choose_with_default("Parking", PARKING_OPTIONS, DEFAULT_PARKING)?,
                },
            };
            run_recommendation(input, output).await?
        }
        Commands::Extract { file } => extract_file(file)?,
    }

    Ok(())
}

fn text_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    let text = match value {
        Some(v) => v,
        None => Input::new().with_prompt(prompt).interact_text()?,
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        bail!("{} must not be empty", prompt);
    }
    Ok(text)
}

/// Uses `value` if given, otherwise lets the user pick from `options`.
fn choose_or_prompt(value: Option<String>, prompt: &str, options: &[&str]) -> Result<String> {
    if let Some(v) = value {
        return text_or_prompt(Some(v), prompt);
    }
    if options.is_empty() {
        return text_or_prompt(None, prompt);
    }

    let index = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()?;
    Ok(options[index].to_string())
}

fn choose_with_default(prompt: &str, options: &[&str], default: &str) -> Result<String> {
    let index = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(options.iter().position(|o| *o == default).unwrap_or(0))
        .interact()?;
    Ok(options[index].to_string())
}

fn select_radius() -> Result<Radius> {
    let labels: Vec<&str> = Radius::ALL.iter().map(Radius::as_str).collect();
    let default = Radius::ALL
        .iter()
        .position(|r| *r == Radius::default())
        .unwrap_or(0);

    let index = Select::new()
        .with_prompt("Radius")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(Radius::ALL[index])
}

/// Serialized enum label, e.g. `"A등급"` for a score level.
fn label<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn print_json<T: Serialize>(outcome: &Outcome<T>) -> Result<()> {
    let value = serde_json::json!({
        "outcome": outcome.label(),
        "fallbackReason": outcome.reason().map(|r| r.code()),
        "result": outcome.value(),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_fallback_notice<T>(outcome: &Outcome<T>) {
    if let Some(reason) = outcome.reason() {
        println!(
            "{}",
            format!("⚠️  Showing demo data: {}", reason).yellow().bold()
        );
        println!();
    }
}

fn print_sources(sources: &[SourceLink]) {
    if sources.is_empty() {
        return;
    }
    println!();
    println!("{}", "Sources".bright_white().bold());
    for source in sources {
        println!("  • {} {}", source.title, source.url.bright_black());
    }
}

async fn run_analysis(input: AnalysisInput, output: OutputArgs) -> Result<()> {
    if output.print_prompt {
        println!("{}", analysis_prompt(&input));
        return Ok(());
    }

    let config = config::load_from_env()?;
    let service = build_analysis_service(&config)?;

    if !output.json {
        println!(
            "{} {} ({}, {})",
            "🔎 Analysing".bright_blue().bold(),
            input.address.cyan(),
            input.business_type,
            input.radius
        );
    }

    let outcome = service.analyze(&input).await;

    if output.json {
        return print_json(&outcome);
    }

    println!();
    print_fallback_notice(&outcome);
    print_analysis(outcome.value());
    Ok(())
}

fn print_analysis(result: &AnalysisResult) {
    println!(
        "{} {} {}",
        "Score".bright_white().bold(),
        format!("{:.0}", result.overall_score).bright_green().bold(),
        label(&result.score_level).green()
    );
    println!("{}", result.summary);
    println!();

    let revenue = &result.revenue;
    println!("{}", "Revenue".bright_white().bold());
    println!(
        "  Daily customers: {:.0} - {:.0}",
        revenue.daily_customers_min, revenue.daily_customers_max
    );
    println!(
        "  Monthly revenue: {:.0} - {:.0} {}",
        revenue.monthly_revenue_min, revenue.monthly_revenue_max, revenue.currency_unit
    );
    println!(
        "  Net profit:      {:.0} - {:.0} {}",
        revenue.net_profit_min, revenue.net_profit_max, revenue.currency_unit
    );

    println!();
    println!("{}", "Factors".bright_white().bold());
    for factor in &result.factors {
        println!(
            "  {:<12} {:>3.0}/{:<3.0} {}",
            factor.category,
            factor.score,
            factor.full_mark,
            factor.description.bright_black()
        );
    }

    println!();
    println!("{}", "Competitors".bright_white().bold());
    for competitor in &result.competitors {
        println!(
            "  {} ({}, {})",
            competitor.name.cyan(),
            competitor.kind,
            competitor.distance
        );
    }

    println!();
    println!("{}", "Risks".bright_white().bold());
    for risk in &result.risks {
        println!(
            "  [{}] {} → {}",
            label(&risk.severity).red(),
            risk.risk,
            risk.mitigation
        );
    }

    print_sources(&result.sources);
}

async fn run_recommendation(input: RecommendationInput, output: OutputArgs) -> Result<()> {
    if output.print_prompt {
        println!("{}", recommendation_prompt(&input));
        return Ok(());
    }

    let config = config::load_from_env()?;
    let service = build_analysis_service(&config)?;

    if !output.json {
        println!(
            "{} {} in {}",
            "📍 Recommending".bright_blue().bold(),
            input.business_type.cyan(),
            input.region()
        );
    }

    let outcome = service.recommend(&input).await;

    if output.json {
        return print_json(&outcome);
    }

    println!();
    print_fallback_notice(&outcome);
    print_recommendation(outcome.value());
    Ok(())
}

fn print_recommendation(result: &RecommendationResult) {
    println!("{}", result.summary);
    println!();

    for location in &result.locations {
        println!(
            "{} {} {} {}",
            format!("#{}", location.rank).bright_yellow().bold(),
            location.location_name.cyan().bold(),
            location.area.bright_black(),
            format!("{:.0}", location.score).bright_green()
        );
        println!(
            "   Rent {:.0} - {:.0} / Revenue {:.0} - {:.0} (만원)",
            location.estimated_rent_min,
            location.estimated_rent_max,
            location.estimated_revenue_min,
            location.estimated_revenue_max
        );
        println!("   {}", location.reason);
        println!("   {} {}", "Caution:".yellow(), location.caution);
    }

    println!();
    println!("{}", "Expert advice".bright_white().bold());
    println!("  {}", result.expert_advice);

    print_sources(&result.sources);
}

fn extract_file(file: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let value = extract_json(&text)
        .with_context(|| format!("No usable JSON in {}", file.display()))?;

    println!("{}", serde_json::to_string_pretty(&sanitize_value(value))?);
    Ok(())
}
