/// Smallest font-size class.
pub const MIN_FONT: u32 = 11;

/// Largest font-size class.
pub const MAX_FONT: u32 = 48;

/// Width of the scaling range before the `MIN_FONT` offset.
pub const SPAN: u32 = 38;

/// Maps `count` onto a font-size class between `MIN_FONT` and `MAX_FONT`.
///
/// `max_count` and `min_count` are the extremes of the displayed entries
/// only. Scaling is linear with truncating integer division:
/// `MIN_FONT + SPAN * (count - min) / (max - min)`.
///
/// # Notes
/// - With `SPAN = 38` the formula reaches `MAX_FONT + 1` at `count == max_count`;
///   the result is clamped so the largest word lands on `MAX_FONT`.
/// - When every entry shares one count (including an empty set), all map to `MAX_FONT`.
/// - Counts outside `[min_count, max_count]` are clamped to that range first.
pub fn font_bucket(count: usize, max_count: usize, min_count: usize) -> u32 {
	if max_count <= min_count {
		return MAX_FONT;
	}

	let count = count.clamp(min_count, max_count);
	let scaled = SPAN as u64 * (count - min_count) as u64 / (max_count - min_count) as u64;
	// scaled <= SPAN, so the cast cannot truncate
	(MIN_FONT + scaled as u32).min(MAX_FONT)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn minimum_maps_to_min_font() {
		assert_eq!(font_bucket(1, 3, 1), MIN_FONT);
	}

	#[test]
	fn maximum_maps_to_max_font() {
		assert_eq!(font_bucket(3, 3, 1), MAX_FONT);
		assert_eq!(font_bucket(1000, 1000, 7), MAX_FONT);
	}

	#[test]
	fn midpoint_truncates() {
		// 11 + 38 * 1 / 2
		assert_eq!(font_bucket(2, 3, 1), 30);
		// 11 + 38 * 1 / 3 = 11 + 12
		assert_eq!(font_bucket(2, 4, 1), 23);
	}

	#[test]
	fn equal_extremes_map_to_max_font() {
		assert_eq!(font_bucket(5, 5, 5), MAX_FONT);
		assert_eq!(font_bucket(1, 1, 1), MAX_FONT);
	}

	#[test]
	fn always_within_bounds() {
		for max in 1..40 {
			for min in 1..=max {
				for count in min..=max {
					let bucket = font_bucket(count, max, min);
					assert!((MIN_FONT..=MAX_FONT).contains(&bucket), "{} {} {}", count, max, min);
				}
			}
		}
	}
}
