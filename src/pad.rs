// this file is part of padboard. For copyright and licensing details, see main.rs

use crate::error::PadboardError;
use crate::fit::{FitRequest, LabelFitter, TextMeasurer};
use crate::midi::{InstrumentCode, NoteCode, OutputSink, Volume};
use crate::registry::{Registry, Rgb};
use log::{debug, warn};

/// Whether an unmatched note-on is outstanding for this pad.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DispatchState {
	Idle,
	Sounding
}

/// Font bounds and padding for the pad label.
#[derive(Clone, Debug)]
pub struct LabelStyle {
	pub family: String,
	pub min_size: u32,
	pub max_size: u32,
	pub padding: f32
}

impl Default for LabelStyle {
	fn default() -> LabelStyle {
		LabelStyle {
			family: "Arial".to_string(),
			min_size: 4,
			max_size: 50,
			padding: 10.0
		}
	}
}

/// One grid cell: a registry-validated (color, instrument, note) triple, a
/// press/release dispatch state and a label that refits itself on resize.
///
/// The codes are resolved at construction and re-resolved on every update, so
/// they can never go stale relative to the names.
pub struct Pad {
	color: Rgb,
	instrument_name: String,
	instrument: InstrumentCode,
	note_name: String,
	note: NoteCode,
	state: DispatchState,
	label: String,
	font_size: u32,
	style: LabelStyle,
	volume: Volume
}

fn label_for(instrument_name: &str, note_name: &str) -> String {
	format!("{}\n{}", instrument_name, note_name)
}

impl Pad {
	pub fn new(
		registry: &Registry,
		color_name: &str,
		instrument_name: &str,
		note_name: &str,
		style: LabelStyle
	) -> Result<Pad, PadboardError> {
		let color = registry.resolve_color(color_name)?;
		let instrument = registry.resolve_instrument(instrument_name)?;
		let note = registry.resolve_note(note_name)?;
		let font_size = style.min_size;
		Ok(Pad {
			color,
			instrument,
			note,
			state: DispatchState::Idle,
			label: label_for(instrument_name, note_name),
			instrument_name: instrument_name.to_string(),
			note_name: note_name.to_string(),
			font_size,
			style,
			volume: Volume::default()
		})
	}

	/// Emits a single note-on and moves to `Sounding`. A press while already
	/// sounding is a no-op, so duplicate press events never double the
	/// note-on.
	pub fn press(&mut self, sink: &mut impl OutputSink) {
		if self.state == DispatchState::Sounding {
			debug!("duplicate press on {} / {}, ignored", self.instrument_name, self.note_name);
			return;
		}
		sink.note_on(self.instrument, self.note, self.volume);
		self.state = DispatchState::Sounding;
	}

	/// Emits the matching note-off and moves back to `Idle`. A release with
	/// no outstanding note-on (e.g. the pointer left the pad before the
	/// button came up) is a no-op.
	pub fn release(&mut self, sink: &mut impl OutputSink) {
		if self.state == DispatchState::Idle {
			debug!("stray release on {} / {}, ignored", self.instrument_name, self.note_name);
			return;
		}
		sink.note_off(self.instrument, self.note, self.volume);
		self.state = DispatchState::Idle;
	}

	/// Rebinds the pad to a new (color, instrument, note) triple. All three
	/// names are resolved before anything is mutated, so an unknown name
	/// leaves the pad untouched.
	///
	/// If the old note is still sounding, its note-off is emitted here:
	/// forcing the state back to `Idle` without it would strand a note-on at
	/// the old instrument/note that no later release could ever match.
	pub fn update(
		&mut self,
		registry: &Registry,
		color_name: &str,
		instrument_name: &str,
		note_name: &str,
		sink: &mut impl OutputSink
	) -> Result<(), PadboardError> {
		let color = registry.resolve_color(color_name)?;
		let instrument = registry.resolve_instrument(instrument_name)?;
		let note = registry.resolve_note(note_name)?;

		if self.state == DispatchState::Sounding {
			warn!(
				"pad reconfigured while sounding, releasing {} / {}",
				self.instrument_name, self.note_name
			);
			sink.note_off(self.instrument, self.note, self.volume);
		}

		self.color = color;
		self.instrument = instrument;
		self.note = note;
		self.label = label_for(instrument_name, note_name);
		self.instrument_name = instrument_name.to_string();
		self.note_name = note_name.to_string();
		self.state = DispatchState::Idle;
		// font_size is recomputed on the next resize pass
		Ok(())
	}

	/// Refits the label to the new box. Pure state update, no sink calls.
	pub fn on_resize(&mut self, width: f32, height: f32, fitter: &LabelFitter<impl TextMeasurer>) {
		self.font_size = fitter.fit(&FitRequest {
			text: &self.label,
			family: &self.style.family,
			min_size: self.style.min_size,
			max_size: self.style.max_size,
			box_width: width,
			box_height: height,
			padding: self.style.padding
		});
	}

	pub fn set_volume(&mut self, volume: Volume) { self.volume = volume; }

	pub fn color(&self) -> Rgb { self.color }
	pub fn instrument(&self) -> InstrumentCode { self.instrument }
	pub fn instrument_name(&self) -> &str { &self.instrument_name }
	pub fn note(&self) -> NoteCode { self.note }
	pub fn note_name(&self) -> &str { &self.note_name }
	pub fn state(&self) -> DispatchState { self.state }
	pub fn label(&self) -> &str { &self.label }
	pub fn font_size(&self) -> u32 { self.font_size }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fit::HeuristicMetrics;
	use crate::midi::testing::{RecordingSink, SinkCall};

	fn pad(registry: &Registry) -> Pad {
		Pad::new(registry, "Red", "Accordion", "Middle_C", LabelStyle::default()).unwrap()
	}

	#[test]
	fn test_new_resolves_triple() {
		let registry = Registry::builtin();
		let pad = pad(&registry);
		assert_eq!(pad.color(), Rgb(255, 0, 0));
		assert_eq!(pad.instrument().raw(), 21);
		assert_eq!(pad.note().raw(), 60);
		assert_eq!(pad.state(), DispatchState::Idle);
		assert_eq!(pad.label(), "Accordion\nMiddle_C");
	}

	#[test]
	fn test_new_fails_atomically_on_unknown_name() {
		let registry = Registry::builtin();
		assert!(Pad::new(&registry, "Red", "Theremin", "Middle_C", LabelStyle::default()).is_err());
		assert!(Pad::new(&registry, "Octarine", "Accordion", "Middle_C", LabelStyle::default())
			.is_err());
	}

	#[test]
	fn test_double_press_emits_one_note_on() {
		let registry = Registry::builtin();
		let mut pad = pad(&registry);
		let mut sink = RecordingSink::default();
		pad.press(&mut sink);
		pad.press(&mut sink);
		assert_eq!(sink.calls, vec![SinkCall::On(21, 60, 127)]);
		assert_eq!(pad.state(), DispatchState::Sounding);
	}

	#[test]
	fn test_press_release_pair_matches() {
		let registry = Registry::builtin();
		let mut pad = pad(&registry);
		let mut sink = RecordingSink::default();
		pad.press(&mut sink);
		pad.release(&mut sink);
		assert_eq!(sink.calls, vec![SinkCall::On(21, 60, 127), SinkCall::Off(21, 60, 127)]);
		assert_eq!(pad.state(), DispatchState::Idle);
	}

	#[test]
	fn test_stray_release_emits_nothing() {
		let registry = Registry::builtin();
		let mut pad = pad(&registry);
		let mut sink = RecordingSink::default();
		pad.release(&mut sink);
		assert!(sink.calls.is_empty());
		assert_eq!(pad.state(), DispatchState::Idle);
	}

	#[test]
	fn test_update_rebinds_and_resets_state() {
		let registry = Registry::builtin();
		let mut pad = pad(&registry);
		let mut sink = RecordingSink::default();
		pad.update(&registry, "Navy", "Violin", "Treble_G", &mut sink).unwrap();
		assert!(sink.calls.is_empty());
		assert_eq!(pad.color(), Rgb(0, 0, 128));
		assert_eq!(pad.instrument().raw(), 40);
		assert_eq!(pad.note().raw(), 67);
		assert_eq!(pad.label(), "Violin\nTreble_G");
		assert_eq!(pad.state(), DispatchState::Idle);
	}

	#[test]
	fn test_update_while_sounding_releases_old_note() {
		let registry = Registry::builtin();
		let mut pad = pad(&registry);
		let mut sink = RecordingSink::default();
		pad.press(&mut sink);
		pad.update(&registry, "Navy", "Violin", "Treble_G", &mut sink).unwrap();
		// the synthetic note-off targets the OLD triple
		assert_eq!(sink.calls, vec![SinkCall::On(21, 60, 127), SinkCall::Off(21, 60, 127)]);
		assert_eq!(pad.state(), DispatchState::Idle);

		// a fresh press sounds the new triple
		pad.press(&mut sink);
		assert_eq!(sink.calls.last(), Some(&SinkCall::On(40, 67, 127)));
	}

	#[test]
	fn test_failed_update_leaves_pad_untouched() {
		let registry = Registry::builtin();
		let mut pad = pad(&registry);
		let mut sink = RecordingSink::default();
		pad.press(&mut sink);
		let before = sink.calls.len();

		assert!(pad.update(&registry, "Navy", "Violin", "Not_A_Note", &mut sink).is_err());
		assert_eq!(sink.calls.len(), before, "failed update must not emit");
		assert_eq!(pad.instrument_name(), "Accordion");
		assert_eq!(pad.note_name(), "Middle_C");
		assert_eq!(pad.color(), Rgb(255, 0, 0));
		assert_eq!(pad.state(), DispatchState::Sounding, "dispatch state survives a failed update");

		// the outstanding note can still be released normally
		pad.release(&mut sink);
		assert_eq!(sink.calls.last(), Some(&SinkCall::Off(21, 60, 127)));
	}

	#[test]
	fn test_on_resize_stores_fitted_size() {
		let registry = Registry::builtin();
		let mut pad = pad(&registry);
		let fitter = LabelFitter::new(HeuristicMetrics);
		assert_eq!(pad.font_size(), 4);
		pad.on_resize(1000.0, 1000.0, &fitter);
		assert_eq!(pad.font_size(), 50);
		pad.on_resize(15.0, 15.0, &fitter);
		assert_eq!(pad.font_size(), 4);
	}

	#[test]
	fn test_custom_volume_rides_both_edges() {
		let registry = Registry::builtin();
		let mut pad = pad(&registry);
		pad.set_volume(Volume::from_raw(64).unwrap());
		let mut sink = RecordingSink::default();
		pad.press(&mut sink);
		pad.release(&mut sink);
		assert_eq!(sink.calls, vec![SinkCall::On(21, 60, 64), SinkCall::Off(21, 60, 64)]);
	}
}
