// this file is part of padboard. For copyright and licensing details, see main.rs

use crate::error::{KeyKind, PadboardError};
use crate::midi::{InstrumentCode, NoteCode};
use crate::tables::TableSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An sRGB color triple. Serialized as `[r, g, b]`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl std::fmt::Display for Rgb {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "({}, {}, {})", self.0, self.1, self.2)
	}
}

/// Immutable name↔code/rgb lookup over the three static tables. Built once at
/// startup; the reverse maps are derived at construction and guaranteed to be
/// true inverses (duplicate codes are rejected).
pub struct Registry {
	instruments: HashMap<String, InstrumentCode>,
	instruments_rev: HashMap<InstrumentCode, String>,
	notes: HashMap<String, NoteCode>,
	notes_rev: HashMap<NoteCode, String>,
	colors: HashMap<String, Rgb>,
	colors_rev: HashMap<Rgb, String>
}

impl Registry {
	pub fn new(tables: TableSet) -> Result<Registry, PadboardError> {
		if tables.instruments.is_empty() || tables.notes.is_empty() || tables.colors.is_empty() {
			return Err(PadboardError::InvalidConfiguration(
				"table set must contain at least one instrument, note and color".to_string()
			));
		}

		let mut registry = Registry {
			instruments: HashMap::new(),
			instruments_rev: HashMap::new(),
			notes: HashMap::new(),
			notes_rev: HashMap::new(),
			colors: HashMap::new(),
			colors_rev: HashMap::new()
		};

		for (name, raw) in tables.instruments {
			let code = InstrumentCode::from_raw(raw).ok_or_else(|| {
				PadboardError::InvalidConfiguration(format!(
					"instrument code {} for \"{}\" is outside the MIDI range",
					raw, name
				))
			})?;
			if registry.instruments_rev.insert(code, name.clone()).is_some() {
				return Err(PadboardError::InvalidConfiguration(format!(
					"two instrument names share code {}",
					raw
				)));
			}
			registry.instruments.insert(name, code);
		}

		for (name, raw) in tables.notes {
			let code = NoteCode::from_raw(raw).ok_or_else(|| {
				PadboardError::InvalidConfiguration(format!(
					"note code {} for \"{}\" is outside the MIDI range",
					raw, name
				))
			})?;
			if registry.notes_rev.insert(code, name.clone()).is_some() {
				return Err(PadboardError::InvalidConfiguration(format!(
					"two note names share code {}",
					raw
				)));
			}
			registry.notes.insert(name, code);
		}

		for (name, rgb) in tables.colors {
			if registry.colors_rev.insert(rgb, name.clone()).is_some() {
				return Err(PadboardError::InvalidConfiguration(format!(
					"two color names share rgb {}",
					rgb
				)));
			}
			registry.colors.insert(name, rgb);
		}

		log::info!(
			"registry built: {} instruments, {} notes, {} colors",
			registry.instruments.len(),
			registry.notes.len(),
			registry.colors.len()
		);
		Ok(registry)
	}

	pub fn builtin() -> Registry {
		Registry::new(TableSet::builtin()).expect("builtin tables are valid")
	}

	/// Loads a replacement table set from JSON, validated exactly like the
	/// builtin one.
	pub fn from_reader(reader: impl std::io::Read) -> Result<Registry, PadboardError> {
		let tables: TableSet = serde_json::from_reader(reader)?;
		Registry::new(tables)
	}

	pub fn resolve_instrument(&self, name: &str) -> Result<InstrumentCode, PadboardError> {
		self.instruments
			.get(name)
			.copied()
			.ok_or_else(|| PadboardError::UnknownKey {
				kind: KeyKind::Instrument,
				name: name.to_string()
			})
	}

	pub fn resolve_note(&self, name: &str) -> Result<NoteCode, PadboardError> {
		self.notes
			.get(name)
			.copied()
			.ok_or_else(|| PadboardError::UnknownKey {
				kind: KeyKind::Note,
				name: name.to_string()
			})
	}

	pub fn resolve_color(&self, name: &str) -> Result<Rgb, PadboardError> {
		self.colors
			.get(name)
			.copied()
			.ok_or_else(|| PadboardError::UnknownKey {
				kind: KeyKind::Color,
				name: name.to_string()
			})
	}

	pub fn instrument_name(&self, code: InstrumentCode) -> Result<&str, PadboardError> {
		self.instruments_rev
			.get(&code)
			.map(|s| s.as_str())
			.ok_or_else(|| PadboardError::UnknownKey {
				kind: KeyKind::Instrument,
				name: code.raw().to_string()
			})
	}

	pub fn note_name(&self, code: NoteCode) -> Result<&str, PadboardError> {
		self.notes_rev
			.get(&code)
			.map(|s| s.as_str())
			.ok_or_else(|| PadboardError::UnknownKey {
				kind: KeyKind::Note,
				name: code.raw().to_string()
			})
	}

	pub fn color_name(&self, rgb: Rgb) -> Result<&str, PadboardError> {
		self.colors_rev
			.get(&rgb)
			.map(|s| s.as_str())
			.ok_or_else(|| PadboardError::UnknownKey {
				kind: KeyKind::Color,
				name: rgb.to_string()
			})
	}

	pub fn instrument_names(&self) -> Vec<&str> {
		self.instruments.keys().map(|s| s.as_str()).collect()
	}

	pub fn note_names(&self) -> Vec<&str> { self.notes.keys().map(|s| s.as_str()).collect() }

	pub fn color_names(&self) -> Vec<&str> { self.colors.keys().map(|s| s.as_str()).collect() }
}
