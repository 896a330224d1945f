// this file is part of padboard. For copyright and licensing details, see main.rs

use crate::registry::Rgb;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The three raw name→code/rgb mappings the registry is built from. Either
/// [`TableSet::builtin`] or a JSON file loaded once at startup; validation
/// (MIDI range, duplicate codes) happens in `Registry::new`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableSet {
	pub instruments: BTreeMap<String, u8>,
	pub notes: BTreeMap<String, u8>,
	pub colors: BTreeMap<String, Rgb>
}

impl TableSet {
	pub fn builtin() -> TableSet {
		TableSet {
			instruments: INSTRUMENTS
				.iter()
				.map(|(name, code)| (name.to_string(), *code))
				.collect(),
			notes: NOTES.iter().map(|(name, code)| (name.to_string(), *code)).collect(),
			colors: COLORS
				.iter()
				.map(|(name, (r, g, b))| (name.to_string(), Rgb(*r, *g, *b)))
				.collect()
		}
	}
}

// General MIDI program numbers (names follow the sound set of a particular
// hardware synth, hence the occasional brand name).
#[rustfmt::skip]
const INSTRUMENTS: &[(&str, u8)] = &[
	("Grand Piano", 0), ("Bright Piano", 1), ("Electric Piano", 2), ("Honkytonk Piano", 3),
	("Rhodes Piano", 4), ("Chorused Piano", 5), ("German Harpsichord", 6), ("Clavinet", 7),
	("Celesta", 8), ("Glockenspiel", 9), ("Music Box", 10), ("Vibraphone", 11),
	("Xylophone", 13), ("Tubular Bells", 14), ("Dulcimer", 15), ("Hammond Organ", 16),
	("Percussive Organ", 17), ("Rock Organ", 18), ("Pipe Organ & Pedals", 19), ("Reed Organ", 20),
	("Accordion", 21), ("Hohner Harmonica", 22), ("Bandoneon", 23), ("Nylon Guitar", 24),
	("Steel Guitar", 25), ("Jazz Guitar", 26), ("Clean Guitar", 27), ("Guitar Mutes", 28),
	("Strat. Marshall", 29), ("Garcia Dist. Guitar", 30), ("Guitar Harmonics", 31),
	("Acoustic Bass", 32), ("Fingered Bass", 33), ("Epiphone Pick Bass", 34),
	("Frettless Bass", 35), ("Slap Bass 1", 36), ("Slap Bass 2", 37), ("Synth Bass 1", 38),
	("Synth Bass 2", 39), ("Violin", 40), ("Viola", 41), ("Cello", 42),
	("Contrabass", 43), ("Tremelo Strings", 44), ("Pizzicato Strings", 45), ("Harp", 46),
	("Timpani and Rolls", 47), ("String Ensemble 1", 48), ("String Ensemble 2", 49),
	("Synth Strings 1", 50), ("Synth Strings 2", 51), ("Synth Choir Oohs", 54),
	("Orchestra Hit", 55), ("Trumpet", 56), ("Trombone", 57), ("Tuba", 58),
	("Trumpet Cup Mute", 59), ("French Horn", 60), ("Brass Section", 61), ("Synth Brass 1", 62),
	("Synth Brass 2", 63), ("Soprano Sax", 64), ("Alto Sax", 65), ("Breathy Tenor Sax", 66),
	("Baritone Sax", 67), ("Oboe", 68), ("English Horn", 69), ("Bassoon", 70),
	("Clarinet", 71), ("Piccolo", 72), ("Flute", 73), ("Recorder", 74),
	("Pan Flute", 75), ("Bottle Chiff", 76), ("Shakuhachi", 77), ("Whistle", 78),
	("Ocarina", 79), ("Lead 1 (Square)", 80), ("Lead 2 (Sawtooth)", 81), ("Lead 3 (Calliope)", 82),
	("Lead 4 (Chiff)", 83), ("Lead 5 (Charang)", 84), ("Lead 6 (Voice)", 85),
	("Lead 7 (Fifths)", 86), ("Lead 8 (Bass&Lead)", 87), ("Pad 1 (New Age)", 88),
	("Pad 2 (Warm)", 89), ("Pad 3 (Polysynth)", 90), ("Pad 4 (Choir)", 91),
	("Pad 5 (Bowed)", 92), ("Pad 6 (Metallic)", 93), ("Pad 7 (Halo)", 94),
	("Pad 8 (Sweep)", 95), ("FX 1 (Rain)", 96), ("FX 2 (Soundtrack)", 97),
	("FX 3 (Crystal)", 98), ("FX 4 (Atmosphere)", 99), ("FX 5 (Brightness)", 100),
	("FX 6 (Goblins)", 101), ("FX 7 (Echoes)", 102), ("FX 8 (Sci-Fi)", 103),
	("Sitar", 104), ("Banjo", 105), ("Shamisen", 106), ("Koto", 107),
	("Kalimba", 108), ("Bagpipe", 109), ("Fiddle", 110), ("Shanai", 111),
	("Tinkle Bell", 112), ("Agogo", 113), ("Steel Drum", 114), ("Wood Block", 115),
	("Taiko Drum", 116), ("Melodic Tom", 117), ("Synth Drum", 118), ("Reverse Cymbal", 119),
	("Guitar Fret Noise", 120), ("Breath Noise", 121), ("Seashore", 122), ("Bird Tweet", 123),
	("Telephone Ring", 124), ("Helicopter", 125), ("Applause", 126), ("Gun Shot", 127)
];

// Three octaves around middle C, named by register.
#[rustfmt::skip]
const NOTES: &[(&str, u8)] = &[
	("Bass_D♯/E♭", 51), ("Bass_E", 52), ("Bass_F", 53), ("Bass_F♯/G♭", 54),
	("Middle_G", 55), ("Middle_G♯/A♭", 56), ("Middle_A", 57), ("Middle_A♯/B♭", 58),
	("Middle_B", 59), ("Middle_C", 60), ("Middle_C♯/D♭", 61), ("Middle_D", 62),
	("Middle_D♯/E♭", 63), ("Middle_E", 64), ("Middle_F", 65), ("Treble_F♯/G♭", 66),
	("Treble_G", 67), ("Treble_G♯/A♭", 68), ("Treble_A", 69), ("Treble_A♯/B♭", 70),
	("Treble_B", 71), ("Treble_C", 72), ("Treble_C♯/D♭", 73), ("Treble_D", 74),
	("Treble_D♯/E♭", 75), ("Treble_E", 76), ("Treble_F", 77), ("High_F♯/G♭", 78),
	("High_G", 79), ("High_G♯/A♭", 80), ("High_A", 81), ("High_A♯/B♭", 82),
	("High_B", 83), ("High_C", 84), ("High_C♯/D♭", 85), ("High_D", 86),
	("High_D♯/E♭", 87), ("High_E", 88), ("High_F", 89)
];

#[rustfmt::skip]
const COLORS: &[(&str, (u8, u8, u8))] = &[
	("Red", (255, 0, 0)), ("Green", (0, 255, 0)), ("Blue", (0, 0, 255)),
	("Yellow", (255, 255, 0)), ("Orange", (255, 165, 0)), ("Purple", (128, 0, 128)),
	("Cyan", (0, 255, 255)), ("Magenta", (255, 0, 255)), ("Lime", (191, 255, 0)),
	("Pink", (255, 192, 203)), ("Teal", (0, 128, 128)), ("Lavender", (230, 230, 250)),
	("Brown", (165, 42, 42)), ("Beige", (245, 245, 220)), ("Maroon", (128, 0, 0)),
	("Mint", (189, 252, 201)), ("Olive", (128, 128, 0)), ("Coral", (255, 127, 80)),
	("Navy", (0, 0, 128)), ("Grey", (128, 128, 128)), ("Peach", (255, 229, 180)),
	("Turquoise", (64, 224, 208)), ("Sky Blue", (135, 206, 235)), ("Plum", (221, 160, 221)),
	("Gold", (255, 215, 0)), ("Silver", (192, 192, 192)), ("Bronze", (205, 127, 50)),
	("Copper", (184, 115, 51)), ("Salmon", (250, 128, 114)), ("Khaki", (240, 230, 140)),
	("Ivory", (255, 255, 240)), ("Scarlet", (255, 36, 0))
];
