// this file is part of padboard. For copyright and licensing details, see main.rs

/// A MIDI program number in `0..=127`. Only the [`Registry`](crate::registry::Registry)
/// produces these, so holders may assume the range invariant.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct InstrumentCode(u8);

impl InstrumentCode {
	pub fn from_raw(raw: u8) -> Option<InstrumentCode> {
		if raw < 128 {
			Some(InstrumentCode(raw))
		}
		else {
			None
		}
	}
	pub fn raw(self) -> u8 { self.0 }
}

/// A MIDI note number in `0..=127`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NoteCode(u8);

impl NoteCode {
	pub fn from_raw(raw: u8) -> Option<NoteCode> {
		if raw < 128 {
			Some(NoteCode(raw))
		}
		else {
			None
		}
	}
	pub fn raw(self) -> u8 { self.0 }
}

/// A MIDI velocity in `0..=127`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Volume(u8);

impl Volume {
	pub const MAX: Volume = Volume(127);

	pub fn from_raw(raw: u8) -> Option<Volume> {
		if raw < 128 {
			Some(Volume(raw))
		}
		else {
			None
		}
	}
	pub fn raw(self) -> u8 { self.0 }
}

impl Default for Volume {
	fn default() -> Volume { Volume::MAX }
}

/// The sound-producing collaborator. Calls are fire-and-forget; no
/// acknowledgment is awaited. Callers guarantee that all codes went through
/// the registry, so implementations may assume valid MIDI-range integers.
pub trait OutputSink {
	fn note_on(&mut self, instrument: InstrumentCode, note: NoteCode, volume: Volume);
	fn note_off(&mut self, instrument: InstrumentCode, note: NoteCode, volume: Volume);
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	#[derive(Copy, Clone, Debug, PartialEq, Eq)]
	pub enum SinkCall {
		On(u8, u8, u8),
		Off(u8, u8, u8)
	}

	/// Records every emitted call so tests can assert exact pairing and order.
	#[derive(Default)]
	pub struct RecordingSink {
		pub calls: Vec<SinkCall>
	}

	impl OutputSink for RecordingSink {
		fn note_on(&mut self, instrument: InstrumentCode, note: NoteCode, volume: Volume) {
			self.calls.push(SinkCall::On(instrument.raw(), note.raw(), volume.raw()));
		}
		fn note_off(&mut self, instrument: InstrumentCode, note: NoteCode, volume: Volume) {
			self.calls.push(SinkCall::Off(instrument.raw(), note.raw(), volume.raw()));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_codes_reject_out_of_range() {
		assert!(InstrumentCode::from_raw(127).is_some());
		assert!(InstrumentCode::from_raw(128).is_none());
		assert!(NoteCode::from_raw(0).is_some());
		assert!(NoteCode::from_raw(200).is_none());
		assert!(Volume::from_raw(128).is_none());
		assert_eq!(Volume::default(), Volume::MAX);
	}
}
