use std::str::FromStr;

/// A color packed as `0xAARRGGBB`, the layout Android uses for `@ColorInt`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, derive_more::Display)]
#[display("#{:08X}", _0)]
#[repr(transparent)]
pub struct Argb(pub u32);

static_assertions::assert_eq_size!(Argb, u32);

const ALPHA_SHIFT: u32 = 24;
const RED_SHIFT: u32 = 16;
const GREEN_SHIFT: u32 = 8;
const BLUE_SHIFT: u32 = 0;

impl Argb {
	pub const TRANSPARENT: Self = Self(0x0000_0000);
	pub const BLACK: Self = Self(0xFF00_0000);
	pub const WHITE: Self = Self(0xFFFF_FFFF);

	pub const fn from_channels(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
		Self(
			(alpha as u32) << ALPHA_SHIFT
				| (red as u32) << RED_SHIFT
				| (green as u32) << GREEN_SHIFT
				| (blue as u32) << BLUE_SHIFT,
		)
	}

	const fn channel(self, shift: u32) -> u8 {
		(self.0 >> shift) as u8
	}

	pub const fn alpha(self) -> u8 {
		self.channel(ALPHA_SHIFT)
	}

	pub const fn red(self) -> u8 {
		self.channel(RED_SHIFT)
	}

	pub const fn green(self) -> u8 {
		self.channel(GREEN_SHIFT)
	}

	pub const fn blue(self) -> u8 {
		self.channel(BLUE_SHIFT)
	}

	/// Returns `[alpha, red, green, blue]`.
	pub const fn channels(self) -> [u8; 4] {
		[self.alpha(), self.red(), self.green(), self.blue()]
	}

	/// Replaces each color channel `c` with `255 - c`, keeping alpha.
	///
	/// This is an involution: inverting twice yields the original color.
	pub const fn inverted(self) -> Self {
		Self::from_channels(
			self.alpha(),
			u8::MAX - self.red(),
			u8::MAX - self.green(),
			u8::MAX - self.blue(),
		)
	}

	pub const fn with_alpha(self, alpha: u8) -> Self {
		Self::from_channels(alpha, self.red(), self.green(), self.blue())
	}
}

impl From<u32> for Argb {
	fn from(value: u32) -> Self {
		Self(value)
	}
}

impl From<Argb> for u32 {
	fn from(value: Argb) -> Self {
		value.0
	}
}

// Java has no unsigned `int`, so colors cross the boundary bit-for-bit as `i32`.
impl From<i32> for Argb {
	fn from(value: i32) -> Self {
		Self(value as u32)
	}
}

impl From<Argb> for i32 {
	fn from(value: Argb) -> Self {
		value.0 as i32
	}
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {input:?}: {reason}")]
pub struct ParseArgbError {
	input: String,
	reason: String,
}

static_assertions::assert_impl_all!(ParseArgbError: std::error::Error, Send, Sync);

impl FromStr for Argb {
	type Err = ParseArgbError;

	/// Accepts anything CSS does, e.g. `"white"`, `"#102030"` or `"rgb(16 32 48 / 50%)"`.
	///
	/// Note that CSS hex notation puts alpha last (`#RRGGBBAA`).
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let color = csscolorparser::parse(s).map_err(|err| ParseArgbError {
			input: s.to_owned(),
			reason: err.to_string(),
		})?;
		let [red, green, blue, alpha] = color.to_rgba8();
		Ok(Self::from_channels(alpha, red, green, blue))
	}
}
