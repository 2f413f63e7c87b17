use anyhow::bail;
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use daily_rooms::{Config, CreateParams, DailyClient, GetManyParams};

const USAGE: &str = "usage: daily-rooms list [pattern] | get <name> | create [prefix] | delete <pattern>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(api_url = %config.api_url, "Configuration loaded");

    let client = DailyClient::from_config(&config)?;
    let all = GetManyParams::default();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["list"] => print_json(&client.get_rooms(&all).await?)?,
        ["list", pattern] => print_json(&client.get_rooms_with_regex(&all, pattern).await?)?,
        ["get", name] => print_json(&client.get_room(name).await?)?,
        ["create"] => print_json(&client.create_room(CreateParams::default()).await?)?,
        ["create", prefix] => {
            let room = client
                .create_room_with_prefix(prefix, CreateParams::default())
                .await?;
            print_json(&room)?
        }
        ["delete", pattern] => {
            let rooms = client.get_rooms_with_regex(&all, pattern).await?;
            client.delete_rooms(&rooms).await?;
            tracing::info!(count = rooms.len(), pattern = %pattern, "Deleted matching rooms");
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
