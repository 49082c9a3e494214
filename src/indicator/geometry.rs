//! Tab and pointer sizing.
//!
//! All lengths are in the host's layout units (pixels on a canvas, cells in a
//! terminal). The pointer path uses a y-down coordinate space with the base on
//! `y = 0` and the apex above it at `y = -height`.

/// The pointer base spans one sixth of a tab.
pub const POINTER_WIDTH_DIVISOR: u32 = 6;

/// Distance between the bottom of the tab row and the pointer base.
pub const POINTER_GAP: u32 = 2;

/// Width of a single tab slot.
pub fn tab_width(container_width: u32, visible_tab_count: u32) -> u32 {
	container_width / visible_tab_count.max(1)
}

/// Device-wide ceiling on the pointer width: one sixth of a tab laid out
/// three to a screen.
pub fn max_pointer_width(screen_width: u32) -> u32 {
	screen_width / 3 / POINTER_WIDTH_DIVISOR
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
	pub x: i32,
	pub y: i32,
}

impl Point {
	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

/// Closed isoceles triangle: left base, right base, apex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerPath {
	points: [Point; 3],
}

impl PointerPath {
	#[must_use]
	pub fn triangle(width: u32, height: u32) -> Self {
		let width = width as i32;
		let height = height as i32;
		Self {
			points: [
				Point::new(0, 0),
				Point::new(width, 0),
				Point::new(width / 2, -height),
			],
		}
	}

	pub fn points(&self) -> &[Point; 3] {
		&self.points
	}

	/// Whether `(x, y)` lies inside or on the outline.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		let [a, b, c] = self.points;
		let edge = |p: Point, q: Point| {
			(q.x - p.x) as f64 * (y - p.y as f64) - (q.y - p.y) as f64 * (x - p.x as f64)
		};
		let d1 = edge(a, b);
		let d2 = edge(b, c);
		let d3 = edge(c, a);
		let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
		let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
		!(has_neg && has_pos)
	}
}

/// Pointer size and resting offset for the current layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerGeometry {
	pub width: u32,
	pub height: u32,
	/// Offset that centres the pointer under the first tab slot.
	pub base_offset: u32,
	pub path: PointerPath,
}

impl PointerGeometry {
	#[must_use]
	pub fn compute(container_width: u32, visible_tab_count: u32, max_width: u32) -> Self {
		let slot = tab_width(container_width, visible_tab_count);
		let width = (slot / POINTER_WIDTH_DIVISOR).min(max_width);
		let height = width / 2;
		Self {
			width,
			height,
			base_offset: (slot / 2).saturating_sub(width / 2),
			path: PointerPath::triangle(width, height),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tab_width_floors_division() {
		assert_eq!(tab_width(1080, 4), 270);
		assert_eq!(tab_width(1000, 3), 333);
		assert_eq!(tab_width(1000, 0), 1000);
	}

	#[test]
	fn max_pointer_width_is_a_sixth_of_a_third() {
		assert_eq!(max_pointer_width(1080), 60);
		assert_eq!(max_pointer_width(1000), 55);
	}

	#[test]
	fn pointer_is_a_sixth_of_a_tab_when_below_the_ceiling() {
		let geometry = PointerGeometry::compute(1080, 4, 60);
		assert_eq!(geometry.width, 45);
		assert_eq!(geometry.height, 22);
		assert_eq!(geometry.base_offset, 135 - 22);
	}

	#[test]
	fn pointer_width_is_capped() {
		let geometry = PointerGeometry::compute(1080, 1, 60);
		assert_eq!(geometry.width, 60);
		assert_eq!(geometry.height, 30);
		assert_eq!(geometry.base_offset, 540 - 30);
	}

	#[test]
	fn width_derivation_holds_across_counts() {
		for count in 1..=12 {
			for width in [0, 7, 320, 1080, 1441] {
				let geometry = PointerGeometry::compute(width, count, 60);
				assert_eq!(geometry.width, (width / count / 6).min(60));
				assert!(geometry.width <= 60);
			}
		}
	}

	#[test]
	fn triangle_points_up_from_the_base() {
		let path = PointerPath::triangle(10, 5);
		assert_eq!(
			path.points(),
			&[Point::new(0, 0), Point::new(10, 0), Point::new(5, -5)]
		);
	}

	#[test]
	fn triangle_containment() {
		let path = PointerPath::triangle(10, 5);
		assert!(path.contains(5.0, -2.0));
		assert!(path.contains(0.0, 0.0));
		assert!(!path.contains(5.0, 1.0));
		assert!(!path.contains(1.0, -4.0));
	}
}
