use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use mood_analytics::{WeekStart, YearMonth};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false")]
	pub log_json: bool,

	/// Log level
	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,

	/// JSON file holding the mood journal
	#[arg(long, env = "ENTRIES_FILE", default_value = "mood_entries.json")]
	pub entries_file: PathBuf,

	/// Whose entries to read and write
	#[arg(long, env = "MOOD_USER_ID", default_value = "default")]
	pub user_id: String,

	/// Number of most recent entries plotted by the bar and line charts
	#[arg(long, env = "WINDOW_SIZE", default_value = "7")]
	pub window: usize,

	/// First column of the calendar grid (sunday or monday)
	#[arg(long, env = "WEEK_START", default_value = "sunday")]
	pub week_start: WeekStart,

	/// Override today's date (YYYY-MM-DD)
	#[arg(long, env = "MOOD_TODAY")]
	pub today: Option<NaiveDate>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Clone, Debug, Serialize, Deserialize)]
pub enum Command {
	/// Summary statistics over the whole history
	Stats,
	/// Per-mood counts and percentages
	Distribution,
	/// Six-week calendar grid for a month (YYYY-MM, defaults to the current month)
	Calendar {
		#[arg(long)]
		month: Option<YearMonth>,
	},
	/// Chart geometry: bar and line over the recent window, pie over the distribution
	Chart {
		#[arg(value_enum)]
		kind: ChartKind,
	},
	/// Every derived view in one document
	Report {
		#[arg(long)]
		month: Option<YearMonth>,
	},
	/// Append an entry to the journal
	Log {
		#[arg(long)]
		mood: String,
		/// 1 to 10
		#[arg(long)]
		intensity: u8,
		/// Defaults to today
		#[arg(long)]
		date: Option<NaiveDate>,
		#[arg(long)]
		time: Option<String>,
		#[arg(long)]
		notes: Option<String>,
		#[arg(long = "activity")]
		activities: Vec<String>,
	},
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
	Bar,
	Line,
	Pie,
}
