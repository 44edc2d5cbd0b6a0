//! Feedback command.

use anyhow::anyhow;
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use ua_core::config::AppConfig;
use ua_core::error::UaResult;

use super::{create_client, print_json};
use crate::OutputFormat;

#[derive(Args)]
pub struct FeedbackArgs {
    /// Platform: ios or android.
    #[arg(short, long, default_value = "ios")]
    platform: String,
    /// Lower bound as an RFC 3339 timestamp.
    #[arg(long, conflicts_with = "hours")]
    since: Option<String>,
    /// Look back this many hours from now.
    #[arg(long, default_value = "24", value_parser = clap::value_parser!(i64).range(0..))]
    hours: i64,
}

pub fn run(config: &AppConfig, args: FeedbackArgs, format: OutputFormat) -> UaResult<()> {
    let since = resolve_since(args.since.as_deref(), args.hours, Utc::now())?;
    let client = create_client(config)?;
    let records = client.feedback_for(&args.platform, since)?;

    match format {
        OutputFormat::Json => print_json(&serde_json::to_value(&records)?),
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No inactive devices since {}.", since.format("%Y-%m-%d %H:%M:%S UTC"));
                return Ok(());
            }

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Device", "Inactive Since", "Alias"]);

            for record in &records {
                let (id, marked, alias) = record.as_tuple();
                table.add_row(vec![
                    id.to_string(),
                    marked.to_string(),
                    alias.unwrap_or("-").to_string(),
                ]);
            }

            println!("{table}");
            println!("\n{} inactive devices", records.len());
        }
    }
    Ok(())
}

/// Pick the feedback lower bound from `--since` or `--hours`.
fn resolve_since(since: Option<&str>, hours: i64, now: DateTime<Utc>) -> UaResult<DateTime<Utc>> {
    match since {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| anyhow!("--since must be RFC 3339: {e}").into()),
        None => Duration::try_hours(hours)
            .and_then(|back| now.checked_sub_signed(back))
            .ok_or_else(|| anyhow!("--hours {hours} reaches outside the supported date range").into()),
    }
}
