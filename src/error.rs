// this file is part of padboard. For copyright and licensing details, see main.rs

use thiserror::Error;

/// Which of the three lookup tables a key was expected in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyKind {
	Instrument,
	Note,
	Color
}

impl std::fmt::Display for KeyKind {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			KeyKind::Instrument => write!(f, "Instrument"),
			KeyKind::Note => write!(f, "Note"),
			KeyKind::Color => write!(f, "Color")
		}
	}
}

#[derive(Debug, Error)]
pub enum PadboardError {
	/// A name (or, for reverse lookups, a code rendered as text) was not
	/// found in its table. Lookups are exact-string, no case folding.
	#[error("{kind}: \"{name}\" not found")]
	UnknownKey { kind: KeyKind, name: String },

	/// The requested configuration is internally inconsistent: a grid with a
	/// zero dimension, or a table set with out-of-range or duplicate codes.
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),

	#[error("failed to parse table set")]
	TableParse(#[from] serde_json::Error)
}
