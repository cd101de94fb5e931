use crate::entry::MoodEntry;
use std::collections::HashMap;

/// Mood label counts in order of first appearance.
pub(crate) struct MoodTally<'a> {
	counts: Vec<(&'a str, usize)>,
}

impl<'a> MoodTally<'a> {
	pub(crate) fn from_entries(entries: &'a [MoodEntry]) -> Self {
		let mut slots: HashMap<&'a str, usize> = HashMap::new();
		let mut counts: Vec<(&'a str, usize)> = Vec::new();

		for entry in entries {
			let label = entry.mood.as_str();
			match slots.get(label) {
				Some(&slot) => counts[slot].1 += 1,
				None => {
					slots.insert(label, counts.len());
					counts.push((label, 1));
				}
			}
		}

		Self { counts }
	}

	pub(crate) fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
		self.counts.iter().copied()
	}

	/// Highest count; ties go to the label seen first.
	pub(crate) fn leader(&self) -> Option<(&'a str, usize)> {
		self.iter().fold(None, |best, (label, count)| match best {
			Some((_, best_count)) if best_count >= count => best,
			_ => Some((label, count)),
		})
	}
}
