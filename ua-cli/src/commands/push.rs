//! Push commands.

use anyhow::anyhow;
use clap::{Args, Subcommand};
use console::style;
use serde_json::{Map, Value};

use ua_api::PushOptions;
use ua_core::config::AppConfig;
use ua_core::error::UaResult;

use super::{create_client, print_json};
use crate::OutputFormat;

/// Notification content shared by single pushes and broadcasts.
#[derive(Args)]
pub struct NotificationArgs {
    /// Alert text.
    #[arg(short, long)]
    alert: String,
    /// Platform: ios or android.
    #[arg(short, long, default_value = "ios")]
    platform: String,
    /// Badge number (iOS).
    #[arg(long)]
    badge: Option<u32>,
    /// Sound name (iOS).
    #[arg(long)]
    sound: Option<String>,
    /// Extra data as a JSON object, e.g. '{"screen":"inbox"}'.
    #[arg(long)]
    extra: Option<String>,
}

#[derive(Subcommand)]
pub enum PushAction {
    /// Push to specific devices, aliases or tags.
    Send {
        #[command(flatten)]
        notification: NotificationArgs,
        /// Device identifier to target (repeatable).
        #[arg(long = "device")]
        devices: Vec<String>,
        /// Alias to target (repeatable).
        #[arg(long = "alias")]
        aliases: Vec<String>,
        /// Tag to target (repeatable).
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Push to every registered device.
    Broadcast {
        #[command(flatten)]
        notification: NotificationArgs,
        /// Device identifier to leave out (repeatable).
        #[arg(long = "exclude")]
        exclude: Vec<String>,
    },
}

pub fn run(config: &AppConfig, action: PushAction, format: OutputFormat) -> UaResult<()> {
    let client = create_client(config)?;

    let (kind, platform) = match action {
        PushAction::Send {
            notification,
            devices,
            aliases,
            tags,
        } => {
            let options = PushOptions {
                extra: parse_extra(notification.extra.as_deref())?,
                device_identifiers: devices,
                aliases,
                tags,
                badge: notification.badge,
                sound: notification.sound,
            };
            client.push(&notification.alert, &options, &notification.platform)?;
            ("push", notification.platform)
        }
        PushAction::Broadcast {
            notification,
            exclude,
        } => {
            let options = PushOptions {
                extra: parse_extra(notification.extra.as_deref())?,
                badge: notification.badge,
                sound: notification.sound,
                ..Default::default()
            };
            let payload =
                client.build_push_payload(&notification.alert, &options, &notification.platform)?;
            client.broadcast(&payload, &exclude)?;
            ("broadcast", notification.platform)
        }
    };

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "kind": kind,
            "platform": platform,
            "sent": true,
        })),
        OutputFormat::Text => println!("{} {kind} sent", style("✓").green()),
    }
    Ok(())
}

/// Parse the `--extra` flag into a JSON object.
fn parse_extra(raw: Option<&str>) -> UaResult<Map<String, Value>> {
    let Some(raw) = raw else {
        return Ok(Map::new());
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(anyhow!("--extra must be a JSON object, got {other}").into()),
        Err(e) => Err(anyhow!("--extra is not valid JSON: {e}").into()),
    }
}
