//! Capacity report for carrier files.

use crate::container::WavReader;
use crate::driver::{capacity, combined_rate};
use crate::error::{Error, Result};
use prettytable::{Table, format, row};
use std::fs::File;
use std::io::BufReader;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityInfo {
	pub path: String,
	pub channels: u16,
	pub sample_rate: u32,
	pub nb_frames: usize,
	/// Payload bytes the file can carry before looping.
	pub capacity: usize,
	/// Rate of the combined file, `None` when it would overflow.
	pub combined_rate: Option<u32>,
}

impl CapacityInfo {
	pub fn analyze(path: &str) -> Result<Self> {
		let input = BufReader::new(File::open(path)?);
		let mut reader = WavReader::new(input)?;
		let waveform = reader.read_waveform()?;
		let nb_frames = waveform.nb_frames();

		debug!(path, nb_frames, "analyzed carrier");

		Ok(Self {
			path: path.to_string(),
			channels: waveform.channels,
			sample_rate: waveform.sample_rate,
			nb_frames,
			capacity: capacity(nb_frames),
			combined_rate: combined_rate(waveform.sample_rate).ok(),
		})
	}
}

pub fn render_table(infos: &[CapacityInfo]) -> Table {
	let mut table = Table::new();
	table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
	table.set_titles(row!["file", "channels", "rate", "samples", "capacity (bytes)", "combined rate"]);

	for info in infos {
		let combined = info.combined_rate.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());
		table.add_row(row![
			info.path,
			info.channels,
			info.sample_rate,
			info.nb_frames,
			info.capacity,
			combined
		]);
	}

	table
}

pub struct Show {
	inputs: Vec<String>,
}

impl Show {
	pub fn new(inputs: Vec<String>) -> Self {
		Self { inputs }
	}

	pub fn collect(&self) -> Result<Vec<CapacityInfo>> {
		self.inputs.iter().map(|path| CapacityInfo::analyze(path)).collect()
	}

	pub fn run(&self) -> Result<()> {
		if self.inputs.is_empty() {
			return Err(Error::invalid_argument("no carrier files to inspect"));
		}

		let infos = self.collect()?;
		render_table(&infos).printstd();
		Ok(())
	}
}
