//! RGBA colors for the speed bar and label outlines.

/// A linear RGBA color with components in 0.0..=1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    pub a: f32,
}

#[cfg(feature = "serde")]
fn opaque() -> f32 {
    1.0
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    /// Default speed bar color (burnt orange).
    pub const DEFAULT_BAR: Rgba = Rgba::rgb(0.839, 0.349, 0.129);

    /// Default over-max threshold color (magenta).
    pub const DEFAULT_OVER_MAX: Rgba = Rgba::rgb(0.898, 0.098, 0.443);

    /// Creates an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color with explicit alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to 8-bit channels, clamping out-of-range components.
    ///
    /// ```
    /// use speedo_hud::Rgba;
    ///
    /// assert_eq!(Rgba::rgb(1.0, 0.5, 2.0).to_rgba8(), [255, 128, 255, 255]);
    /// ```
    pub fn to_rgba8(&self) -> [u8; 4] {
        fn channel(v: f32) -> u8 {
            // `as` saturates and maps NaN to 0
            (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
        }
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::DEFAULT_BAR
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Rgba::rgba(r, g, b, a)
    }
}

impl From<[f32; 3]> for Rgba {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Rgba::rgb(r, g, b)
    }
}

#[cfg(feature = "display")]
impl From<Rgba> for embedded_graphics::pixelcolor::Rgb888 {
    fn from(color: Rgba) -> Self {
        let [r, g, b, _] = color.to_rgba8();
        embedded_graphics::pixelcolor::Rgb888::new(r, g, b)
    }
}
