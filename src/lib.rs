//! Stroke mutations for the drawing app's native library.
//!
//! The host owns a `Drawing` and hands it over for a single pass that scales widths, recolors or
//! inverts every stroke in place. The "jni" feature, on by default, exports the entry points the
//! Android `DrawingViewModel` calls; without it the library loads but every `external fun` fails
//! with `UnsatisfiedLinkError`.

mod color;
pub use color::*;

mod drawing;
pub use drawing::*;

mod mutate;
pub use mutate::*;

pub mod logging;

#[cfg(feature = "jni")]
pub mod bindings;
