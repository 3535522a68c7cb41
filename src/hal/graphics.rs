//! `embedded-graphics` sink for the speed readout.
//!
//! Draws the fill bar and up to two label lines on any RGB draw target
//! (a framebuffer, an SPI color panel, a simulator window).
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────┐
//! │ 123.4 KM/H                 │  Live label
//! │ 98.7 KM/H                  │  Zip label
//! │████████████████░░░░░░░░░░░░│  Speed bar
//! └────────────────────────────┘
//! ```
//!
//! The bar clips the unclamped fill ratio to its own width: overspeed
//! shows as a full bar, the color change carries the rest.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::color::Rgba;
use crate::style::Outline;
use crate::traits::{LabelSlot, SpeedometerSink};

/// Height of one label line in pixels.
const LINE_HEIGHT: u32 = 10;

/// Where the bar and labels go on the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HudLayout {
    /// Bar area.
    pub bar: Rectangle,
    /// Top-left of the live label.
    pub live_label: Point,
    /// Top-left of the zip label.
    pub zip_label: Point,
    /// Width reserved for each label.
    pub label_width: u32,
}

impl HudLayout {
    /// Stack the two labels above a bar of the given size.
    pub fn stacked(origin: Point, bar_size: Size) -> Self {
        let line = LINE_HEIGHT as i32;
        Self {
            live_label: origin,
            zip_label: origin + Point::new(0, line),
            bar: Rectangle::new(origin + Point::new(0, 2 * line), bar_size),
            label_width: bar_size.width,
        }
    }

    fn label_origin(&self, slot: LabelSlot) -> Point {
        match slot {
            LabelSlot::Live => self.live_label,
            LabelSlot::Zip => self.zip_label,
        }
    }
}

/// Draws the readout onto an RGB [`DrawTarget`].
pub struct GraphicsSpeedometer<D: DrawTarget<Color = Rgb888>> {
    target: D,
    layout: HudLayout,
    fill: f32,
    bar_color: Rgb888,
    background: Rgb888,
    text_color: Rgb888,
    outlines: [Option<Rgb888>; 2],
}

impl<D: DrawTarget<Color = Rgb888>> GraphicsSpeedometer<D> {
    /// Creates a sink drawing with `layout` on `target`.
    pub fn new(target: D, layout: HudLayout) -> Self {
        Self {
            target,
            layout,
            fill: 0.0,
            bar_color: Rgba::DEFAULT_BAR.into(),
            background: Rgb888::BLACK,
            text_color: Rgb888::WHITE,
            outlines: [None; 2],
        }
    }

    /// Sets the background and text colors.
    pub fn with_palette(mut self, background: Rgb888, text: Rgb888) -> Self {
        self.background = background;
        self.text_color = text;
        self
    }

    /// The draw target.
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Consumes the sink, returning the draw target.
    pub fn into_target(self) -> D {
        self.target
    }

    /// Width in pixels of the filled part of the bar.
    pub fn filled_width(&self) -> u32 {
        let width = self.layout.bar.size.width;
        let ratio = if self.fill.is_nan() {
            0.0
        } else {
            self.fill.clamp(0.0, 1.0)
        };
        // no `f32::round` in core
        ((width as f32) * ratio + 0.5) as u32
    }

    fn draw_bar(&mut self) -> Result<(), D::Error> {
        let bar = self.layout.bar;
        bar.into_styled(PrimitiveStyle::with_fill(self.background))
            .draw(&mut self.target)?;

        let filled = self.filled_width();
        if filled > 0 {
            Rectangle::new(bar.top_left, Size::new(filled, bar.size.height))
                .into_styled(PrimitiveStyle::with_fill(self.bar_color))
                .draw(&mut self.target)?;
        }
        Ok(())
    }

    fn slot_index(slot: LabelSlot) -> usize {
        match slot {
            LabelSlot::Live => 0,
            LabelSlot::Zip => 1,
        }
    }
}

impl<D: DrawTarget<Color = Rgb888>> SpeedometerSink for GraphicsSpeedometer<D> {
    type Error = D::Error;

    fn set_fill(&mut self, ratio: f32) -> Result<(), Self::Error> {
        self.fill = ratio;
        self.draw_bar()
    }

    fn set_bar_color(&mut self, color: Rgba) -> Result<(), Self::Error> {
        self.bar_color = color.into();
        self.draw_bar()
    }

    fn set_label(&mut self, slot: LabelSlot, text: &str) -> Result<(), Self::Error> {
        let origin = self.layout.label_origin(slot);
        Rectangle::new(origin, Size::new(self.layout.label_width, LINE_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(self.background))
            .draw(&mut self.target)?;

        if let Some(outline) = self.outlines[Self::slot_index(slot)] {
            let style = MonoTextStyle::new(&FONT_6X10, outline);
            for offset in [
                Point::new(-1, 0),
                Point::new(1, 0),
                Point::new(0, -1),
                Point::new(0, 1),
            ] {
                Text::with_baseline(text, origin + offset, style, Baseline::Top)
                    .draw(&mut self.target)?;
            }
        }

        let style = MonoTextStyle::new(&FONT_6X10, self.text_color);
        Text::with_baseline(text, origin, style, Baseline::Top).draw(&mut self.target)?;
        Ok(())
    }

    fn set_label_outline(&mut self, slot: LabelSlot, outline: Outline) -> Result<(), Self::Error> {
        // Mono fonts have no width control; any positive width draws a 1px halo.
        self.outlines[Self::slot_index(slot)] = (outline.width > 0.0).then(|| outline.color.into());
        Ok(())
    }
}
