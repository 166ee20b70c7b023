//! Entry points for `com.example.drawingapp.viewmodel.DrawingViewModel`.
//!
//! The Kotlin side passes its `Drawing`, whose `paths: ArrayList<PathData>` holds the strokes. Each
//! `PathData` is read into `StrokeAttributes`, mutated, and the touched fields written back.

use crate::{Argb, Mutation, StrokeAttributes};
use jni::objects::{JObject, JValue};
use jni::sys::{jfloat, jint, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use std::ffi::c_void;

#[derive(Debug, thiserror::Error)]
pub enum BindingError {
	#[error("drawing is null")]
	NullDrawing,

	#[error("drawing reports {0} paths")]
	NegativePathCount(jint),

	#[error(transparent)]
	Jni(#[from] jni::errors::Error),
}

static_assertions::assert_impl_all!(BindingError: std::error::Error, Send, Sync);

pub type Result<T> = std::result::Result<T, BindingError>;

/// Field access on a host-owned drawing and its paths.
trait HostDrawing {
	type Path;

	fn is_null(&self) -> bool;
	fn path_count(&mut self) -> Result<jint>;
	fn path(&mut self, index: jint) -> Result<Self::Path>;
	fn read(&mut self, path: &Self::Path) -> Result<StrokeAttributes>;
	fn write_color(&mut self, path: &Self::Path, color: Argb) -> Result<()>;
	fn write_width(&mut self, path: &Self::Path, width: f32) -> Result<()>;
	fn release(&mut self, path: Self::Path) -> Result<()>;
	fn close(&mut self) -> Result<()>;

	fn exception_pending(&mut self) -> bool;
	fn throw(&mut self, message: String) -> Result<()>;
}

const PATHS_FIELD: &str = "paths";
const PATHS_TYPE: &str = "Ljava/util/ArrayList;";
const COLOR_FIELD: &str = "color";
const COLOR_TYPE: &str = "I";
const SIZE_FIELD: &str = "size";
const SIZE_TYPE: &str = "F";

struct JavaDrawing<'a, 'local> {
	env: &'a mut JNIEnv<'local>,
	drawing: &'a JObject<'local>,
	// Null until `path_count` looks up the list.
	paths: JObject<'local>,
}

impl<'a, 'local> JavaDrawing<'a, 'local> {
	fn new(env: &'a mut JNIEnv<'local>, drawing: &'a JObject<'local>) -> Self {
		Self {
			env,
			drawing,
			paths: JObject::null(),
		}
	}
}

impl<'a, 'local> HostDrawing for JavaDrawing<'a, 'local> {
	type Path = JObject<'local>;

	fn is_null(&self) -> bool {
		self.drawing.is_null()
	}

	fn path_count(&mut self) -> Result<jint> {
		let paths = self.env.get_field(self.drawing, PATHS_FIELD, PATHS_TYPE)?.l()?;
		let count = self.env.call_method(&paths, "size", "()I", &[])?.i()?;
		self.paths = paths;
		Ok(count)
	}

	fn path(&mut self, index: jint) -> Result<Self::Path> {
		Ok(self
			.env
			.call_method(&self.paths, "get", "(I)Ljava/lang/Object;", &[JValue::Int(index)])?
			.l()?)
	}

	fn read(&mut self, path: &Self::Path) -> Result<StrokeAttributes> {
		let color = self.env.get_field(path, COLOR_FIELD, COLOR_TYPE)?.i()?;
		let width = self.env.get_field(path, SIZE_FIELD, SIZE_TYPE)?.f()?;
		Ok(StrokeAttributes {
			color: Argb::from(color),
			width,
		})
	}

	fn write_color(&mut self, path: &Self::Path, color: Argb) -> Result<()> {
		let color = i32::from(color);
		Ok(self.env.set_field(path, COLOR_FIELD, COLOR_TYPE, JValue::Int(color))?)
	}

	fn write_width(&mut self, path: &Self::Path, width: f32) -> Result<()> {
		Ok(self.env.set_field(path, SIZE_FIELD, SIZE_TYPE, JValue::Float(width))?)
	}

	// Large drawings would otherwise exhaust the local reference table.
	fn release(&mut self, path: Self::Path) -> Result<()> {
		Ok(self.env.delete_local_ref(path)?)
	}

	fn close(&mut self) -> Result<()> {
		let paths = std::mem::replace(&mut self.paths, JObject::null());
		Ok(self.env.delete_local_ref(paths)?)
	}

	fn exception_pending(&mut self) -> bool {
		self.env.exception_check().unwrap_or(true)
	}

	fn throw(&mut self, message: String) -> Result<()> {
		Ok(self.env.throw_new("java/lang/IllegalStateException", message)?)
	}
}

/// Applies `mutation` to every path of `drawing`, writing back only the fields it touches.
#[tracing::instrument(level = "debug", skip(drawing), err)]
fn mutate_drawing<D: HostDrawing>(drawing: &mut D, mutation: Mutation) -> Result<usize> {
	if drawing.is_null() {
		return Err(BindingError::NullDrawing);
	}

	let count = drawing.path_count()?;
	if count < 0 {
		return Err(BindingError::NegativePathCount(count));
	}

	for index in 0..count {
		let path = drawing.path(index)?;
		let mut attributes = drawing.read(&path)?;
		mutation.apply(&mut attributes);
		if mutation.touches_color() {
			drawing.write_color(&path, attributes.color)?;
		}
		if mutation.touches_width() {
			drawing.write_width(&path, attributes.width)?;
		}
		drawing.release(path)?;
	}
	drawing.close()?;

	tracing::debug!(count, "mutated drawing");
	Ok(count as usize)
}

/// Runs `mutation` over `drawing`, turning any failure into a Java exception.
fn mutate_or_throw<D: HostDrawing>(drawing: &mut D, mutation: Mutation) {
	let Err(err) = mutate_drawing(drawing, mutation) else {
		return;
	};
	// A failed JNI call usually leaves its own exception pending, which is more useful to the caller.
	if drawing.exception_pending() {
		return;
	}
	if let Err(throw_err) = drawing.throw(err.to_string()) {
		tracing::error!(?throw_err, "failed to throw");
	}
}

#[no_mangle]
pub extern "system" fn Java_com_example_drawingapp_viewmodel_DrawingViewModel_multPathSizeJIN<
	'local,
>(
	mut env: JNIEnv<'local>,
	_this: JObject<'local>,
	drawing: JObject<'local>,
	scale_factor: jfloat,
) {
	let mut drawing = JavaDrawing::new(&mut env, &drawing);
	mutate_or_throw(&mut drawing, Mutation::ScaleWidth(scale_factor));
}

#[no_mangle]
pub extern "system" fn Java_com_example_drawingapp_viewmodel_DrawingViewModel_makePathsWhiteJIN<
	'local,
>(
	mut env: JNIEnv<'local>,
	_this: JObject<'local>,
	drawing: JObject<'local>,
) {
	let mut drawing = JavaDrawing::new(&mut env, &drawing);
	mutate_or_throw(&mut drawing, Mutation::FORCE_WHITE);
}

#[no_mangle]
pub extern "system" fn Java_com_example_drawingapp_viewmodel_DrawingViewModel_makePathsColorJIN<
	'local,
>(
	mut env: JNIEnv<'local>,
	_this: JObject<'local>,
	drawing: JObject<'local>,
	color: jint,
) {
	let mut drawing = JavaDrawing::new(&mut env, &drawing);
	mutate_or_throw(&mut drawing, Mutation::Recolor(Argb::from(color)));
}

#[no_mangle]
pub extern "system" fn Java_com_example_drawingapp_viewmodel_DrawingViewModel_invertPathColorsJIN<
	'local,
>(
	mut env: JNIEnv<'local>,
	_this: JObject<'local>,
	drawing: JObject<'local>,
) {
	let mut drawing = JavaDrawing::new(&mut env, &drawing);
	mutate_or_throw(&mut drawing, Mutation::InvertColor);
}

#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
	match crate::logging::configure_logging() {
		Ok(sink) => tracing::debug!(?sink, "logging configured"),
		// We can technically continue without logging.
		Err(error) => tracing::error!(error = error.to_string()),
	}
	JNI_VERSION_1_6
}
