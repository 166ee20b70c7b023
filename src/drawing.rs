use crate::Argb;

pub type Point = glam::Vec2;

/// One freehand stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct PathRecord {
	/// In drawing order.
	pub points: Vec<Point>,
	pub color: Argb,
	pub width: f32,
}

impl PathRecord {
	pub fn new(points: impl IntoIterator<Item = Point>, color: Argb, width: f32) -> Self {
		Self {
			points: points.into_iter().collect(),
			color,
			width,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
	#[default]
	Path,
	Triangle,
	Rectangle,
	Circle,
}

/// The host's current brush. New strokes take its color and size.
#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct Brush {
	#[builder(default = Argb::BLACK)]
	pub color: Argb,
	#[builder(default = 5.0)]
	pub size: f32,
	#[builder(default)]
	pub shape: Shape,
}

impl Default for Brush {
	fn default() -> Self {
		Self::builder().build()
	}
}

const UNNAMED: &str = "NA";

/// An ordered collection of strokes making up one canvas.
///
/// Mutation passes borrow the paths mutably and never add, remove or reorder them. Only the host
/// changes the set of paths, through `add_path`, `add_stroke` and `clear`.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawing {
	/// Assigned by the host database; `None` until the drawing is first saved.
	pub id: Option<i64>,
	pub name: String,
	pub author: String,
	paths: Vec<PathRecord>,
}

impl Default for Drawing {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl Drawing {
	pub fn new(paths: Vec<PathRecord>) -> Self {
		Self {
			id: None,
			name: UNNAMED.to_owned(),
			author: UNNAMED.to_owned(),
			paths,
		}
	}

	/// The host stores a negative id for drawings that have not been saved yet.
	pub fn with_host_id(mut self, id: i64) -> Self {
		self.id = (id >= 0).then_some(id);
		self
	}

	pub fn paths(&self) -> &[PathRecord] {
		&self.paths
	}

	pub fn paths_mut(&mut self) -> &mut [PathRecord] {
		&mut self.paths
	}

	pub fn len(&self) -> usize {
		self.paths.len()
	}

	pub fn is_empty(&self) -> bool {
		self.paths.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, PathRecord> {
		self.paths.iter()
	}

	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, PathRecord> {
		self.paths.iter_mut()
	}

	pub fn add_path(&mut self, path: PathRecord) {
		self.paths.push(path);
	}

	pub fn add_stroke(&mut self, points: impl IntoIterator<Item = Point>, brush: &Brush) {
		self.add_path(PathRecord::new(points, brush.color, brush.size));
	}

	/// Removes every path, keeping the drawing's identity.
	pub fn clear(&mut self) {
		tracing::debug!(id = ?self.id, paths = self.paths.len(), "clearing drawing");
		self.paths.clear();
	}
}

impl<'a> IntoIterator for &'a Drawing {
	type Item = &'a PathRecord;
	type IntoIter = std::slice::Iter<'a, PathRecord>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a> IntoIterator for &'a mut Drawing {
	type Item = &'a mut PathRecord;
	type IntoIter = std::slice::IterMut<'a, PathRecord>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

impl FromIterator<PathRecord> for Drawing {
	fn from_iter<T: IntoIterator<Item = PathRecord>>(iter: T) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
