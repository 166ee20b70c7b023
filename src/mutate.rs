use crate::{Argb, PathRecord};

/// The fields of a stroke that mutations read and write.
///
/// Mutations only depend on this, so anything that can expose a color and a width can be mutated,
/// whether it lives in Rust or behind a host object.
pub trait StrokeStyle {
	fn color(&self) -> Argb;
	fn set_color(&mut self, color: Argb);
	fn width(&self) -> f32;
	fn set_width(&mut self, width: f32);
}

impl StrokeStyle for PathRecord {
	fn color(&self) -> Argb {
		self.color
	}

	fn set_color(&mut self, color: Argb) {
		self.color = color;
	}

	fn width(&self) -> f32 {
		self.width
	}

	fn set_width(&mut self, width: f32) {
		self.width = width;
	}
}

/// A detached copy of a stroke's style, e.g. one read out of a host object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeAttributes {
	pub color: Argb,
	pub width: f32,
}

impl StrokeStyle for StrokeAttributes {
	fn color(&self) -> Argb {
		self.color
	}

	fn set_color(&mut self, color: Argb) {
		self.color = color;
	}

	fn width(&self) -> f32 {
		self.width
	}

	fn set_width(&mut self, width: f32) {
		self.width = width;
	}
}

impl From<&PathRecord> for StrokeAttributes {
	fn from(path: &PathRecord) -> Self {
		Self {
			color: path.color,
			width: path.width,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mutation {
	/// Multiplies the width. Any factor is accepted, so zero or negative widths can result.
	ScaleWidth(f32),
	/// Replaces the color.
	Recolor(Argb),
	/// Inverts red, green and blue, keeping alpha.
	InvertColor,
}

impl Mutation {
	pub const FORCE_WHITE: Self = Self::Recolor(Argb::WHITE);

	pub fn touches_color(&self) -> bool {
		matches!(self, Self::Recolor(_) | Self::InvertColor)
	}

	pub fn touches_width(&self) -> bool {
		matches!(self, Self::ScaleWidth(_))
	}

	pub fn apply<S: StrokeStyle + ?Sized>(&self, stroke: &mut S) {
		match *self {
			Self::ScaleWidth(factor) => stroke.set_width(stroke.width() * factor),
			Self::Recolor(color) => stroke.set_color(color),
			Self::InvertColor => stroke.set_color(stroke.color().inverted()),
		}
	}

	/// Applies the mutation to each stroke once, in order, and returns how many were visited.
	#[tracing::instrument(level = "trace", skip(strokes))]
	pub fn apply_all<'a, S, I>(&self, strokes: I) -> usize
	where
		S: StrokeStyle + ?Sized + 'a,
		I: IntoIterator<Item = &'a mut S>,
	{
		let visited = strokes.into_iter().fold(0, |count, stroke| {
			self.apply(stroke);
			count + 1
		});
		tracing::debug!(mutation = ?self, visited, "mutated strokes");
		visited
	}
}

pub fn scale_width<'a, S>(strokes: impl IntoIterator<Item = &'a mut S>, factor: f32)
where
	S: StrokeStyle + ?Sized + 'a,
{
	Mutation::ScaleWidth(factor).apply_all(strokes);
}

pub fn force_white<'a, S>(strokes: impl IntoIterator<Item = &'a mut S>)
where
	S: StrokeStyle + ?Sized + 'a,
{
	Mutation::FORCE_WHITE.apply_all(strokes);
}

pub fn recolor<'a, S>(strokes: impl IntoIterator<Item = &'a mut S>, color: Argb)
where
	S: StrokeStyle + ?Sized + 'a,
{
	Mutation::Recolor(color).apply_all(strokes);
}

pub fn invert_color<'a, S>(strokes: impl IntoIterator<Item = &'a mut S>)
where
	S: StrokeStyle + ?Sized + 'a,
{
	Mutation::InvertColor.apply_all(strokes);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test::*;
	use crate::Drawing;
	use approx::assert_relative_eq;

	#[test]
	fn scale_width_only_touches_width() {
		let mut drawing = two_stroke_drawing();
		let before = drawing.clone();
		scale_width(&mut drawing, 3.0);
		for (after, before) in drawing.iter().zip(before.iter()) {
			assert_eq!(after.width, before.width * 3.0);
			assert_eq!(after.color, before.color);
			assert_eq!(after.points, before.points);
		}
	}

	#[test]
	fn scale_width_identity() {
		let mut drawing = two_stroke_drawing();
		let before = drawing.clone();
		scale_width(&mut drawing, 1.0);
		assert_eq!(drawing, before);
	}

	#[test]
	fn scale_width_composes() {
		let mut twice = two_stroke_drawing();
		scale_width(&mut twice, 1.5);
		scale_width(&mut twice, 0.3);
		let mut once = two_stroke_drawing();
		scale_width(&mut once, 1.5 * 0.3);
		for (a, b) in twice.iter().zip(once.iter()) {
			assert_relative_eq!(a.width, b.width, max_relative = 1e-6);
		}
	}

	#[test]
	fn scale_width_is_not_clamped() {
		let mut drawing = Drawing::new(vec![stroke(Argb::BLACK, 4.0), stroke(Argb::BLACK, 2.0)]);
		scale_width(&mut drawing, -0.5);
		assert_eq!(drawing.paths()[0].width, -2.0);
		assert_eq!(drawing.paths()[1].width, -1.0);
		scale_width(&mut drawing, 0.0);
		assert!(drawing.iter().all(|path| path.width == 0.0));
	}

	#[test]
	fn force_white_is_idempotent() {
		let mut once = two_stroke_drawing();
		force_white(&mut once);
		assert!(once.iter().all(|path| path.color == Argb::WHITE));
		let mut twice = once.clone();
		force_white(&mut twice);
		assert_eq!(once, twice);
	}

	#[test]
	fn recolor_sets_every_color() {
		let mut drawing = two_stroke_drawing();
		let before = drawing.clone();
		recolor(&mut drawing, Argb(0xFF00FF00));
		for (after, before) in drawing.iter().zip(before.iter()) {
			assert_eq!(after.color, Argb(0xFF00FF00));
			assert_eq!(after.width, before.width);
			assert_eq!(after.points, before.points);
		}
	}

	#[test]
	fn invert_color_is_involution() {
		let mut drawing: Drawing = [0x00000000, 0x80102030, 0xFFFFFFFF, 0x7F00FF80, 0x11223344]
			.into_iter()
			.map(|color| stroke(Argb(color), 1.0))
			.collect();
		let before = drawing.clone();
		invert_color(&mut drawing);
		assert_ne!(drawing, before);
		invert_color(&mut drawing);
		assert_eq!(drawing, before);
	}

	#[test]
	fn invert_color_scenario() {
		let mut drawing = Drawing::new(vec![stroke(Argb(0x80102030), 2.0)]);
		invert_color(&mut drawing);
		assert_eq!(drawing.paths()[0].color, Argb(0x80EFDFCF));
		assert_eq!(drawing.paths()[0].width, 2.0);
	}

	#[test]
	fn empty_drawing() {
		let mut drawing = Drawing::default();
		scale_width(&mut drawing, 2.0);
		force_white(&mut drawing);
		recolor(&mut drawing, Argb::BLACK);
		invert_color(&mut drawing);
		assert!(drawing.is_empty());
		assert_eq!(Mutation::InvertColor.apply_all(&mut drawing), 0);
	}

	#[test]
	fn apply_all_visits_each_stroke_once() {
		let mut drawing = two_stroke_drawing();
		assert_eq!(Mutation::ScaleWidth(2.0).apply_all(&mut drawing), 2);
		let mut paths = vec![stroke(Argb::BLACK, 1.0); 3];
		assert_eq!(Mutation::FORCE_WHITE.apply_all(paths.as_mut_slice()), 3);
	}

	#[test]
	fn attributes_match_records() {
		let mutations = [
			Mutation::ScaleWidth(0.25),
			Mutation::FORCE_WHITE,
			Mutation::Recolor(Argb(0x12345678)),
			Mutation::InvertColor,
		];
		for mutation in mutations {
			let mut drawing = two_stroke_drawing();
			let mut attributes: Vec<StrokeAttributes> =
				drawing.iter().map(StrokeAttributes::from).collect();
			mutation.apply_all(&mut drawing);
			mutation.apply_all(&mut attributes);
			let expected: Vec<StrokeAttributes> = drawing.iter().map(StrokeAttributes::from).collect();
			assert_eq!(attributes, expected, "{mutation:?}");
		}
	}

	#[test]
	fn touched_fields() {
		let mutations = [
			Mutation::ScaleWidth(3.0),
			Mutation::FORCE_WHITE,
			Mutation::Recolor(Argb(0xFF0000FF)),
			Mutation::InvertColor,
		];
		let original = StrokeAttributes {
			color: Argb(0x80102030),
			width: 2.0,
		};
		for mutation in mutations {
			let mut attributes = original;
			mutation.apply(&mut attributes);
			assert_eq!(attributes.color != original.color, mutation.touches_color(), "{mutation:?}");
			assert_eq!(attributes.width != original.width, mutation.touches_width(), "{mutation:?}");
		}
	}

	#[test]
	fn dyn_strokes() {
		let mut a = stroke(Argb(0xFF000000), 1.0);
		let mut b = StrokeAttributes {
			color: Argb(0xFF0000FF),
			width: 2.0,
		};
		let strokes: [&mut dyn StrokeStyle; 2] = [&mut a, &mut b];
		invert_color(strokes);
		assert_eq!(a.color, Argb::WHITE);
		assert_eq!(b.color, Argb(0xFFFFFF00));
	}
}
