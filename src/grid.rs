// this file is part of padboard. For copyright and licensing details, see main.rs

use crate::error::PadboardError;
use crate::fit::{LabelFitter, TextMeasurer};
use crate::midi::{OutputSink, Volume};
use crate::pad::{LabelStyle, Pad};
use crate::registry::Registry;
use itertools::Itertools;
use log::{debug, info};

/// Interaction events after the input-adapter layer has translated whatever
/// the hosting UI delivers. Coordinates are `(row, col)`, row-major from the
/// top-left.
#[derive(Clone, Debug)]
pub enum PadEvent {
	Press(usize, usize),
	Release(usize, usize),
	/// Commit of a reconfiguration dialog: new (color, instrument, note)
	/// names for one pad. Only names cross this boundary, never codes.
	Reconfigure {
		row: usize,
		col: usize,
		color: String,
		instrument: String,
		note: String
	},
	ContainerResize(f32, f32)
}

/// A fixed rows × cols arrangement of pads. The grid exclusively owns its
/// pads; trailing cells stay unpopulated when the note or color list runs
/// out before `rows * cols`.
pub struct Grid {
	rows: usize,
	cols: usize,
	pads: Vec<Pad>
}

impl Grid {
	/// Builds the initial layout: notes sorted by ascending code are zipped
	/// with colors sorted by ascending name, truncated to capacity, one pad
	/// per pair in row-major order. Every name is resolved up front, so an
	/// unknown name aborts the whole build.
	pub fn build(
		rows: usize,
		cols: usize,
		note_names: &[&str],
		color_names: &[&str],
		instrument_name: &str,
		registry: &Registry,
		style: &LabelStyle
	) -> Result<Grid, PadboardError> {
		if rows == 0 || cols == 0 {
			return Err(PadboardError::InvalidConfiguration(format!(
				"grid dimensions must be positive, got {}x{}",
				rows, cols
			)));
		}
		registry.resolve_instrument(instrument_name)?;

		let sorted_notes = note_names
			.iter()
			.map(|name| registry.resolve_note(name).map(|code| (code, *name)))
			.collect::<Result<Vec<_>, _>>()?
			.into_iter()
			.sorted();
		let sorted_colors = color_names.iter().copied().sorted();

		let capacity = rows * cols;
		let mut pads = Vec::with_capacity(capacity);
		for ((_, note_name), color_name) in sorted_notes.zip(sorted_colors).take(capacity) {
			pads.push(Pad::new(registry, color_name, instrument_name, note_name, style.clone())?);
		}

		info!("grid built: {}x{} cells, {} populated", rows, cols, pads.len());
		Ok(Grid { rows, cols, pads })
	}

	pub fn rows(&self) -> usize { self.rows }
	pub fn cols(&self) -> usize { self.cols }
	pub fn pad_count(&self) -> usize { self.pads.len() }

	pub fn pad(&self, row: usize, col: usize) -> Option<&Pad> {
		if row >= self.rows || col >= self.cols {
			return None;
		}
		self.pads.get(row * self.cols + col)
	}

	fn pad_mut(&mut self, row: usize, col: usize) -> Option<&mut Pad> {
		if row >= self.rows || col >= self.cols {
			return None;
		}
		self.pads.get_mut(row * self.cols + col)
	}

	/// Presses the pad at `(row, col)`. Events on empty or out-of-range
	/// cells are dropped.
	pub fn press(&mut self, row: usize, col: usize, sink: &mut impl OutputSink) {
		match self.pad_mut(row, col) {
			Some(pad) => pad.press(sink),
			None => debug!("press on empty cell ({}, {}) dropped", row, col)
		}
	}

	pub fn release(&mut self, row: usize, col: usize, sink: &mut impl OutputSink) {
		match self.pad_mut(row, col) {
			Some(pad) => pad.release(sink),
			None => debug!("release on empty cell ({}, {}) dropped", row, col)
		}
	}

	pub fn update_pad(
		&mut self,
		row: usize,
		col: usize,
		color_name: &str,
		instrument_name: &str,
		note_name: &str,
		registry: &Registry,
		sink: &mut impl OutputSink
	) -> Result<(), PadboardError> {
		match self.pad_mut(row, col) {
			Some(pad) => pad.update(registry, color_name, instrument_name, note_name, sink),
			None => {
				debug!("reconfigure of empty cell ({}, {}) dropped", row, col);
				Ok(())
			}
		}
	}

	/// Applies one velocity to every populated pad.
	pub fn set_volume(&mut self, volume: Volume) {
		for pad in self.pads.iter_mut() {
			pad.set_volume(volume);
		}
	}

	/// Splits the container equally into cells and refits every pad label.
	/// Runs synchronously: when this returns, no pad carries a font size
	/// computed for a previous container size.
	pub fn on_container_resize(
		&mut self,
		width: f32,
		height: f32,
		fitter: &LabelFitter<impl TextMeasurer>
	) {
		let cell_width = width / self.cols as f32;
		let cell_height = height / self.rows as f32;
		info!("container resized to {}x{}, cells {}x{}", width, height, cell_width, cell_height);
		for pad in self.pads.iter_mut() {
			pad.on_resize(cell_width, cell_height, fitter);
		}
	}

	pub fn handle_event(
		&mut self,
		event: PadEvent,
		registry: &Registry,
		sink: &mut impl OutputSink,
		fitter: &LabelFitter<impl TextMeasurer>
	) -> Result<(), PadboardError> {
		use PadEvent::*;
		match event {
			Press(row, col) => {
				self.press(row, col, sink);
				Ok(())
			}
			Release(row, col) => {
				self.release(row, col, sink);
				Ok(())
			}
			Reconfigure { row, col, color, instrument, note } => {
				self.update_pad(row, col, &color, &instrument, &note, registry, sink)
			}
			ContainerResize(width, height) => {
				self.on_container_resize(width, height, fitter);
				Ok(())
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fit::HeuristicMetrics;
	use crate::midi::testing::{RecordingSink, SinkCall};
	use crate::pad::DispatchState;

	fn full_grid(registry: &Registry) -> Grid {
		Grid::build(
			4,
			8,
			&registry.note_names(),
			&registry.color_names(),
			"Accordion",
			registry,
			&LabelStyle::default()
		)
		.unwrap()
	}

	#[test]
	fn test_build_populates_row_major_sorted() {
		let registry = Registry::builtin();
		let grid = full_grid(&registry);
		assert_eq!(grid.pad_count(), 32);

		// lowest note code with the alphabetically first color
		let first = grid.pad(0, 0).unwrap();
		assert_eq!(first.note_name(), "Bass_D♯/E♭");
		assert_eq!(first.note().raw(), 51);
		assert_eq!(registry.color_name(first.color()).unwrap(), "Beige");

		// cell 31 holds the 32nd note (code 51+31) and the last color
		let last = grid.pad(3, 7).unwrap();
		assert_eq!(last.note().raw(), 82);
		assert_eq!(registry.color_name(last.color()).unwrap(), "Yellow");

		// note codes ascend in row-major order; 39 notes leave 7 unused
		let mut previous = None;
		for row in 0..4 {
			for col in 0..8 {
				let code = grid.pad(row, col).unwrap().note().raw();
				if let Some(previous) = previous {
					assert!(code > previous);
				}
				previous = Some(code);
			}
		}
	}

	#[test]
	fn test_build_rejects_zero_dimension() {
		let registry = Registry::builtin();
		let result = Grid::build(
			0,
			8,
			&registry.note_names(),
			&registry.color_names(),
			"Accordion",
			&registry,
			&LabelStyle::default()
		);
		assert!(matches!(result, Err(PadboardError::InvalidConfiguration(_))));
	}

	#[test]
	fn test_build_rejects_unknown_names_atomically() {
		let registry = Registry::builtin();
		assert!(Grid::build(
			2,
			2,
			&["Middle_C", "Not_A_Note"],
			&["Red", "Green"],
			"Accordion",
			&registry,
			&LabelStyle::default()
		)
		.is_err());
		assert!(Grid::build(
			2,
			2,
			&["Middle_C"],
			&["Red"],
			"Theremin",
			&registry,
			&LabelStyle::default()
		)
		.is_err());
	}

	#[test]
	fn test_short_lists_leave_trailing_cells_empty() {
		let registry = Registry::builtin();
		let grid = Grid::build(
			2,
			2,
			&["Middle_E", "Middle_C", "Middle_D"],
			&["Red", "Green", "Blue", "Yellow"],
			"Accordion",
			&registry,
			&LabelStyle::default()
		)
		.unwrap();

		assert_eq!(grid.pad_count(), 3);
		assert!(grid.pad(1, 1).is_none());
		assert!(grid.pad(5, 0).is_none());

		// sorted pairing: (Middle_C, Blue), (Middle_D, Green), (Middle_E, Red)
		assert_eq!(grid.pad(0, 0).unwrap().note_name(), "Middle_C");
		assert_eq!(registry.color_name(grid.pad(0, 0).unwrap().color()).unwrap(), "Blue");
		assert_eq!(grid.pad(1, 0).unwrap().note_name(), "Middle_E");
		assert_eq!(registry.color_name(grid.pad(1, 0).unwrap().color()).unwrap(), "Red");
	}

	#[test]
	fn test_events_on_empty_cells_are_dropped() {
		let registry = Registry::builtin();
		let mut grid = Grid::build(
			2,
			2,
			&["Middle_C"],
			&["Red"],
			"Accordion",
			&registry,
			&LabelStyle::default()
		)
		.unwrap();
		let mut sink = RecordingSink::default();
		grid.press(1, 1, &mut sink);
		grid.release(1, 1, &mut sink);
		grid.press(9, 9, &mut sink);
		assert!(sink.calls.is_empty());
	}

	#[test]
	fn test_resize_updates_every_pad_before_returning() {
		let registry = Registry::builtin();
		let mut grid = full_grid(&registry);
		let fitter = LabelFitter::new(HeuristicMetrics);

		// huge cells: every label reaches the ceiling
		grid.on_container_resize(16000.0, 8000.0, &fitter);
		for row in 0..4 {
			for col in 0..8 {
				assert_eq!(grid.pad(row, col).unwrap().font_size(), 50);
			}
		}

		// tiny cells: every label degrades to the floor, nothing stale
		grid.on_container_resize(80.0, 40.0, &fitter);
		for row in 0..4 {
			for col in 0..8 {
				assert_eq!(grid.pad(row, col).unwrap().font_size(), 4);
			}
		}
	}

	#[test]
	fn test_handle_event_dispatch() {
		let registry = Registry::builtin();
		let mut grid = full_grid(&registry);
		let fitter = LabelFitter::new(HeuristicMetrics);
		let mut sink = RecordingSink::default();

		grid.handle_event(PadEvent::Press(0, 0), &registry, &mut sink, &fitter).unwrap();
		assert_eq!(grid.pad(0, 0).unwrap().state(), DispatchState::Sounding);
		grid.handle_event(PadEvent::Release(0, 0), &registry, &mut sink, &fitter).unwrap();
		assert_eq!(sink.calls.len(), 2);
		assert!(matches!(sink.calls[0], SinkCall::On(21, 51, 127)));
		assert!(matches!(sink.calls[1], SinkCall::Off(21, 51, 127)));

		grid.handle_event(
			PadEvent::Reconfigure {
				row: 0,
				col: 0,
				color: "Navy".to_string(),
				instrument: "Violin".to_string(),
				note: "Treble_G".to_string()
			},
			&registry,
			&mut sink,
			&fitter
		)
		.unwrap();
		assert_eq!(grid.pad(0, 0).unwrap().label(), "Violin\nTreble_G");

		grid.handle_event(PadEvent::ContainerResize(16000.0, 8000.0), &registry, &mut sink, &fitter)
			.unwrap();
		assert_eq!(grid.pad(0, 0).unwrap().font_size(), 50);
	}
}
