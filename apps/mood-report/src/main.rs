mod commands;
mod config;

use chrono::Local;
use clap::Parser;
use mood_store::JsonFileMoodStore;
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, util::SubscriberInitExt, Layer};

use crate::commands::Output;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	if init_tracing(&config).is_none() && config.rust_log.is_some() {
		eprintln!("ignoring invalid RUST_LOG filter");
	}

	let store = JsonFileMoodStore::new(&config.entries_file);
	let today = config.today.unwrap_or_else(|| Local::now().date_naive());

	match commands::execute(&config, &store, today).await? {
		Output::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
		Output::Message(message) => println!("{message}"),
	}

	Ok(())
}

#[must_use]
pub fn init_tracing(config: &Config) -> Option<()> {
	use std::str::FromStr;
	use tracing_subscriber::layer::SubscriberExt;

	let filter = EnvFilter::from_str(config.rust_log.as_deref()?).ok()?;

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_writer(std::io::stderr)
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_writer(std::io::stderr)
					.with_filter(filter),
			)
		})
		.init();
	Some(())
}
