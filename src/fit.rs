// this file is part of padboard. For copyright and licensing details, see main.rs

use log::debug;

/// Bounding box of a rendered text block, in abstract layout units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextExtent {
	pub width: f32,
	pub height: f32
}

/// Measures the bounding box of `text` rendered in `family` at `size`.
/// A multi-line label (lines separated by `\n`) is measured as a block:
/// the widest line times the summed line heights.
///
/// The fitter assumes the extent is monotone in `size` (a larger size never
/// fits where a smaller one did not). This holds for [`HeuristicMetrics`] by
/// construction but is not guaranteed by every real text backend for every
/// font; a pathological backend could make the search miss a larger valid
/// size.
pub trait TextMeasurer {
	fn measure(&self, text: &str, family: &str, size: u32) -> TextExtent;
}

pub struct FitRequest<'a> {
	pub text: &'a str,
	pub family: &'a str,
	pub min_size: u32,
	pub max_size: u32,
	pub box_width: f32,
	pub box_height: f32,
	pub padding: f32
}

/// Finds the largest integer font size in `[min_size, max_size]` whose
/// rendered bounding box fits the target box minus padding.
pub struct LabelFitter<M: TextMeasurer> {
	measurer: M
}

impl<M: TextMeasurer> LabelFitter<M> {
	pub fn new(measurer: M) -> LabelFitter<M> { LabelFitter { measurer } }

	/// Never errors: an under-sized box degrades to `min_size`, an ample box
	/// short-circuits to `max_size`. O(log(max-min)) measurement probes,
	/// deterministic for identical inputs.
	pub fn fit(&self, request: &FitRequest) -> u32 {
		let min = request.min_size;
		let max = request.max_size.max(min);

		let fits = |size: u32| {
			let extent = self.measurer.measure(request.text, request.family, size);
			extent.width <= request.box_width - request.padding
				&& extent.height <= request.box_height - request.padding
		};

		let result = if !fits(min) {
			min
		}
		else if fits(max) {
			max
		}
		else {
			// invariant: fits(lo) && !fits(hi)
			let (mut lo, mut hi) = (min, max);
			while hi - lo > 1 {
				let mid = lo + (hi - lo) / 2;
				if fits(mid) {
					lo = mid;
				}
				else {
					hi = mid;
				}
			}
			lo
		};

		debug!(
			"fit: {:?} in {}x{} (pad {}) -> {}",
			request.text, request.box_width, request.box_height, request.padding, result
		);
		result
	}
}

/// Deterministic built-in measurer: a per-family average advance factor
/// stands in for real glyph metrics. Good enough for layout decisions, and
/// strictly monotone in size, which real font metrics need not be.
pub struct HeuristicMetrics;

const LINE_HEIGHT_FACTOR: f32 = 1.2;
const FALLBACK_ADVANCE: f32 = 0.55;

#[rustfmt::skip]
const ADVANCE_FACTORS: &[(&str, f32)] = &[
	("Arial", 0.52),
	("Helvetica", 0.52),
	("Times New Roman", 0.48),
	("Georgia", 0.50),
	("Courier New", 0.60)
];

impl TextMeasurer for HeuristicMetrics {
	fn measure(&self, text: &str, family: &str, size: u32) -> TextExtent {
		let advance = ADVANCE_FACTORS
			.iter()
			.find(|(name, _)| *name == family)
			.map(|(_, factor)| *factor)
			.unwrap_or(FALLBACK_ADVANCE);

		let longest_line = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
		let line_count = text.lines().count().max(1);

		TextExtent {
			width: longest_line as f32 * size as f32 * advance,
			height: line_count as f32 * size as f32 * LINE_HEIGHT_FACTOR
		}
	}
}
