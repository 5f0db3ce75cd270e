//! Screen-space geometry in surface points.

/// A point in surface coordinates. The origin is the top-left corner of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
	pub x: f32,
	pub y: f32,
}

impl Point {
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
}

/// Width and height in surface points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
	pub width: f32,
	pub height: f32,
}

impl Size {
	pub const fn new(width: f32, height: f32) -> Self {
		Self { width, height }
	}
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
	pub x: f32,
	pub y: f32,
	pub width: f32,
	pub height: f32,
}

impl Rect {
	pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
		Self { x, y, width, height }
	}

	/// Builds a rectangle from an origin and a size.
	pub const fn from_parts(origin: Point, size: Size) -> Self {
		Self::new(origin.x, origin.y, size.width, size.height)
	}

	pub fn right(&self) -> f32 {
		self.x + self.width
	}

	pub fn bottom(&self) -> f32 {
		self.y + self.height
	}

	/// Returns true when `point` lies inside the rectangle.
	///
	/// The left and top edges are inclusive, the right and bottom edges exclusive.
	pub fn contains(&self, point: Point) -> bool {
		point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
	}

	/// Returns true when any part of the rectangle overlaps `viewport`.
	pub fn intersects(&self, viewport: Size) -> bool {
		self.right() > 0.0 && self.bottom() > 0.0 && self.x < viewport.width && self.y < viewport.height
	}
}
