// padboard - an on-screen grid of programmable MIDI pads
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License version 3, as published
// by the Free Software Foundation.

mod error;
mod fit;
mod grid;
mod midi;
mod pad;
mod registry;
mod tables;

use crate::fit::{HeuristicMetrics, LabelFitter};
use crate::grid::{Grid, PadEvent};
use crate::midi::{InstrumentCode, NoteCode, OutputSink, Volume};
use crate::pad::LabelStyle;
use crate::registry::Registry;
use anyhow::Context;
use clap::Parser;
use std::io::BufRead;

#[derive(Parser)]
#[clap(name = "padboard", version, about = "An on-screen grid of programmable MIDI pads")]
struct Args {
	/// Number of grid rows
	#[clap(long, default_value_t = 4)]
	rows: usize,

	/// Number of grid columns
	#[clap(long, default_value_t = 8)]
	cols: usize,

	/// Instrument every pad starts with
	#[clap(long, default_value = "Accordion")]
	instrument: String,

	/// Initial container width in layout units
	#[clap(long, default_value_t = 800.0)]
	width: f32,

	/// Initial container height in layout units
	#[clap(long, default_value_t = 400.0)]
	height: f32,

	/// Velocity used for every note-on/note-off
	#[clap(long, default_value_t = 127)]
	volume: u8,

	/// JSON file with replacement instrument/note/color tables
	#[clap(long)]
	tables: Option<std::path::PathBuf>
}

/// Stand-in output sink for running without sound hardware: prints every
/// call, with names reverse-resolved for readability.
struct ConsoleSink<'a> {
	registry: &'a Registry
}

impl<'a> OutputSink for ConsoleSink<'a> {
	fn note_on(&mut self, instrument: InstrumentCode, note: NoteCode, volume: Volume) {
		println!(
			"note on:  {} / {} (volume {})",
			self.registry.instrument_name(instrument).unwrap_or("?"),
			self.registry.note_name(note).unwrap_or("?"),
			volume.raw()
		);
	}
	fn note_off(&mut self, instrument: InstrumentCode, note: NoteCode, volume: Volume) {
		println!(
			"note off: {} / {} (volume {})",
			self.registry.instrument_name(instrument).unwrap_or("?"),
			self.registry.note_name(note).unwrap_or("?"),
			volume.raw()
		);
	}
}

enum Command {
	Event(PadEvent),
	Show,
	List,
	Help,
	Quit
}

/// Translates one input line into a grid event. This is the whole input
/// adapter; a graphical frontend would produce the same [PadEvent]s from
/// mouse and window events.
fn parse_command(line: &str) -> Result<Command, String> {
	let tokens: Vec<&str> = line.trim().splitn(4, ' ').filter(|t| !t.is_empty()).collect();

	fn coord(token: &str) -> Result<usize, String> {
		token.parse().map_err(|_| format!("not a coordinate: \"{}\"", token))
	}
	fn extent(token: &str) -> Result<f32, String> {
		token.parse().map_err(|_| format!("not a size: \"{}\"", token))
	}

	match tokens.as_slice() {
		["press", row, col] => Ok(Command::Event(PadEvent::Press(coord(row)?, coord(col)?))),
		["release", row, col] => Ok(Command::Event(PadEvent::Release(coord(row)?, coord(col)?))),
		["resize", width, height] => {
			Ok(Command::Event(PadEvent::ContainerResize(extent(width)?, extent(height)?)))
		}
		["set", row, col, names] => {
			let names: Vec<&str> = names.split(',').map(str::trim).collect();
			match names.as_slice() {
				[color, instrument, note] => Ok(Command::Event(PadEvent::Reconfigure {
					row: coord(row)?,
					col: coord(col)?,
					color: color.to_string(),
					instrument: instrument.to_string(),
					note: note.to_string()
				})),
				_ => Err("set needs \"color,instrument,note\"".to_string())
			}
		}
		["show"] => Ok(Command::Show),
		["list"] => Ok(Command::List),
		["help"] | ["?"] => Ok(Command::Help),
		["quit"] | ["exit"] => Ok(Command::Quit),
		[] => Err(String::new()),
		_ => Err(format!("unknown command: \"{}\" (try \"help\")", line.trim()))
	}
}

fn print_help() {
	println!("commands:");
	println!("  press ROW COL                     press a pad (note on)");
	println!("  release ROW COL                   release a pad (note off)");
	println!("  resize WIDTH HEIGHT               resize the container");
	println!("  set ROW COL COLOR,INSTRUMENT,NOTE rebind a pad");
	println!("  show                              print the grid");
	println!("  list                              print all known names");
	println!("  quit");
}

fn show_grid(grid: &Grid, registry: &Registry) {
	for row in 0..grid.rows() {
		for col in 0..grid.cols() {
			match grid.pad(row, col) {
				Some(pad) => println!(
					"({}, {})  {:<20} {:<14} {:<9} font {}",
					row,
					col,
					pad.label().replace('\n', " / "),
					registry.color_name(pad.color()).unwrap_or("?"),
					format!("{:?}", pad.state()),
					pad.font_size()
				),
				None => println!("({}, {})  <empty>", row, col)
			}
		}
	}
}

fn print_names(registry: &Registry) {
	let mut instruments = registry.instrument_names();
	let mut notes = registry.note_names();
	let mut colors = registry.color_names();
	instruments.sort_unstable();
	notes.sort_unstable();
	colors.sort_unstable();
	println!("instruments: {}", instruments.join(", "));
	println!("notes: {}", notes.join(", "));
	println!("colors: {}", colors.join(", "));
}

fn main() -> anyhow::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let registry = match &args.tables {
		Some(path) => {
			let file = std::fs::File::open(path)
				.with_context(|| format!("cannot open table file {}", path.display()))?;
			Registry::from_reader(std::io::BufReader::new(file))?
		}
		None => Registry::builtin()
	};

	let volume = Volume::from_raw(args.volume)
		.with_context(|| format!("volume {} is outside the MIDI range", args.volume))?;

	let mut grid = Grid::build(
		args.rows,
		args.cols,
		&registry.note_names(),
		&registry.color_names(),
		&args.instrument,
		&registry,
		&LabelStyle::default()
	)?;
	grid.set_volume(volume);

	let fitter = LabelFitter::new(HeuristicMetrics);
	grid.on_container_resize(args.width, args.height, &fitter);

	let mut sink = ConsoleSink { registry: &registry };
	print_help();

	let stdin = std::io::stdin();
	for line in stdin.lock().lines() {
		let line = line.context("failed to read input")?;
		match parse_command(&line) {
			Ok(Command::Event(event)) => {
				if let Err(e) = grid.handle_event(event, &registry, &mut sink, &fitter) {
					eprintln!("error: {}", e);
				}
			}
			Ok(Command::Show) => show_grid(&grid, &registry),
			Ok(Command::List) => print_names(&registry),
			Ok(Command::Help) => print_help(),
			Ok(Command::Quit) => break,
			Err(message) => {
				if !message.is_empty() {
					eprintln!("{}", message);
				}
			}
		}
	}

	Ok(())
}
