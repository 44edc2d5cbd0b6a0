//! Device commands.

use clap::Subcommand;
use console::style;

use ua_api::RegisterOptions;
use ua_core::config::AppConfig;
use ua_core::error::UaResult;

use super::{create_client, print_json};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum DevicesAction {
    /// Register a device token or APID.
    Register {
        /// Device identifier.
        identifier: String,
        /// Alias to attach.
        #[arg(long)]
        alias: Option<String>,
        /// Tag to attach (repeatable).
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Badge value to store (iOS).
        #[arg(long)]
        badge: Option<u32>,
        /// Platform: ios or android.
        #[arg(short, long, default_value = "ios")]
        platform: String,
    },
    /// Mark a device as inactive.
    Deregister {
        /// Device identifier.
        identifier: String,
        /// Platform: ios or android.
        #[arg(short, long, default_value = "ios")]
        platform: String,
    },
    /// Show what the provider knows about a device.
    Info {
        /// Device identifier.
        identifier: String,
        /// Platform: ios or android.
        #[arg(short, long, default_value = "ios")]
        platform: String,
    },
    /// List registered devices.
    List {
        /// Platform: ios or android.
        #[arg(short, long, default_value = "ios")]
        platform: String,
        /// Stop after this many identifiers.
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

pub fn run(config: &AppConfig, action: DevicesAction, format: OutputFormat) -> UaResult<()> {
    let client = create_client(config)?;

    match action {
        DevicesAction::Register {
            identifier,
            alias,
            tags,
            badge,
            platform,
        } => {
            let options = RegisterOptions {
                alias,
                tags: (!tags.is_empty()).then_some(tags),
                badge,
            };
            let created = client.register(&identifier, &options, &platform)?;
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "identifier": identifier,
                    "created": created,
                })),
                OutputFormat::Text => {
                    let outcome = if created {
                        style("created").green()
                    } else {
                        style("updated").yellow()
                    };
                    println!("{identifier}: {outcome}");
                }
            }
        }
        DevicesAction::Deregister {
            identifier,
            platform,
        } => {
            client.deregister(&identifier, &platform)?;
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "identifier": identifier,
                    "deregistered": true,
                })),
                OutputFormat::Text => println!("{identifier}: {}", style("deregistered").green()),
            }
        }
        DevicesAction::Info {
            identifier,
            platform,
        } => match client.get_device_info(&identifier, &platform)? {
            Some(info) => match format {
                OutputFormat::Json => print_json(&info),
                OutputFormat::Text => {
                    println!("{}", style("Device").bold().underlined());
                    if let Some(fields) = info.as_object() {
                        for (name, value) in fields {
                            println!("  {name:<20} {value}");
                        }
                    }
                }
            },
            None => match format {
                OutputFormat::Json => print_json(&serde_json::Value::Null),
                OutputFormat::Text => println!("Device {identifier} not found."),
            },
        },
        DevicesAction::List { platform, limit } => {
            let mut list = client.get_device_list(&platform)?;
            let identifiers = list
                .by_ref()
                .take(limit.unwrap_or(usize::MAX))
                .collect::<UaResult<Vec<_>>>()?;

            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "platform": list.platform(),
                    "total": list.len(),
                    "identifiers": identifiers,
                })),
                OutputFormat::Text => {
                    for id in &identifiers {
                        println!("{id}");
                    }
                    println!(
                        "\n{} shown ({} registered {} devices)",
                        identifiers.len(),
                        list.len(),
                        list.platform()
                    );
                }
            }
        }
    }

    Ok(())
}
