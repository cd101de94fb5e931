use crate::config::{ChartKind, Command, Config};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use mood_analytics::window::recent;
use mood_analytics::{
	bar_geometry, build_month_grid_with, compute_distribution, compute_stats, current_streak, line_geometry, longest_streak, pie_geometry, AnalyticsError, MoodEntry,
	MoodReport, ReportOptions, StatsSummary, YearMonth,
};
use mood_store::MoodEntryStore;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

pub const NOT_ENOUGH_DATA: &str = "Not enough data yet: log a mood to see your stats.";

#[derive(Debug, Clone, PartialEq)]
pub enum Output {
	Json(Value),
	Message(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsView {
	#[serde(flatten)]
	summary: StatsSummary,
	average_display: String,
	current_streak: u32,
	longest_streak: u32,
}

fn json<T: Serialize>(value: &T) -> Result<Output> {
	Ok(Output::Json(serde_json::to_value(value)?))
}

async fn history<S: MoodEntryStore>(config: &Config, store: &S) -> Result<Vec<MoodEntry>> {
	let entries = store
		.list(&config.user_id)
		.await
		.with_context(|| format!("could not read entries from {}", config.entries_file.display()))?;
	info!(user = %config.user_id, entries = entries.len(), "loaded mood history");
	Ok(entries)
}

pub async fn execute<S: MoodEntryStore>(config: &Config, store: &S, today: NaiveDate) -> Result<Output> {
	let current_month = YearMonth::of(today);

	match &config.command {
		Command::Log {
			mood,
			intensity,
			date,
			time,
			notes,
			activities,
		} => {
			let mut entry = MoodEntry::new(date.unwrap_or(today), mood.clone(), *intensity);
			entry.time.clone_from(time);
			entry.notes.clone_from(notes);
			entry.activities.clone_from(activities);

			let stored = store.create(&config.user_id, entry).await.context("could not log mood entry")?;
			json(&stored)
		}
		Command::Stats => {
			let entries = history(config, store).await?;
			match compute_stats(&entries) {
				Ok(summary) => json(&StatsView {
					average_display: summary.average_display(),
					current_streak: current_streak(&entries, today),
					longest_streak: longest_streak(&entries),
					summary,
				}),
				Err(AnalyticsError::EmptyInput) => Ok(Output::Message(NOT_ENOUGH_DATA.to_string())),
				Err(err) => Err(err.into()),
			}
		}
		Command::Distribution => json(&compute_distribution(&history(config, store).await?)),
		Command::Calendar { month } => {
			let entries = history(config, store).await?;
			json(&build_month_grid_with(month.unwrap_or(current_month), &entries, config.week_start)?)
		}
		Command::Chart { kind } => {
			let entries = history(config, store).await?;
			let window = recent(&entries, config.window);
			match kind {
				ChartKind::Bar => json(&bar_geometry(window)?),
				ChartKind::Line => json(&line_geometry(window)?),
				ChartKind::Pie => json(&pie_geometry(&compute_distribution(&entries))?),
			}
		}
		Command::Report { month } => {
			let entries = history(config, store).await?;
			let options = ReportOptions {
				month: month.unwrap_or(current_month),
				window: config.window,
				week_start: config.week_start,
			};
			json(&MoodReport::build(&entries, &options)?)
		}
	}
}
