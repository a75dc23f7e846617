//! Composites text runs and controller button glyphs into one drawn string.
//!
//! Layout is a single left-to-right pass over the [`Segment`]s of the input:
//! runs are drawn with the text font and advance the cursor by their scaled
//! width, buttons are drawn with the button font scaled to the text line
//! height, and `\n` returns the cursor to the origin column one line down.

use serde::{Deserialize, Serialize};

use crate::button::ControllerButton;
use crate::error::CompositeError;
use crate::font::{FontMetrics, GlyphFont};
use crate::primitives::{Color, Point, Size};
use crate::scanner::{Segment, segments};

/// Longest accepted input, in characters.
pub const MAX_INPUT_LEN: usize = 4095;

/// Color and scale applied to a composited string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeStyle {
    /// Color of text runs.
    pub color: Color,
    /// Uniform scale of text runs.
    pub scale: f32,
    /// Color button glyphs are drawn with. White keeps the icons' own colors.
    pub button_tint: Color,
}

impl CompositeStyle {
    pub fn new(color: Color, scale: f32) -> Self {
        Self {
            color,
            scale,
            ..Self::default()
        }
    }
}

impl Default for CompositeStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            scale: 1.0,
            button_tint: Color::WHITE,
        }
    }
}

/// Per-call scale factors derived from the two fonts' line spacings.
#[derive(Debug, Clone, Copy)]
struct LineMetrics {
    /// Scaled text line advance.
    line_advance: f32,
    /// Scale that makes a button glyph one text line tall.
    button_scale: f32,
}

impl LineMetrics {
    fn new<T: FontMetrics + ?Sized, B: FontMetrics + ?Sized>(text: &T, button: &B, scale: f32) -> Self {
        let line_spacing = text.line_spacing();
        Self {
            line_advance: line_spacing * scale,
            button_scale: line_spacing * scale / button.line_spacing(),
        }
    }
}

fn check_len(text: &str) -> Result<(), CompositeError> {
    let len = text.chars().count();
    if len > MAX_INPUT_LEN {
        tracing::warn!(len, max = MAX_INPUT_LEN, "rejecting oversized controller string");
        return Err(CompositeError::InputTooLarge {
            len,
            max: MAX_INPUT_LEN,
        });
    }
    Ok(())
}

/// Draw `text` at `position`, replacing button tokens with button glyphs.
///
/// Returns the cursor position after the last draw. Fails with
/// [`CompositeError::InputTooLarge`] before drawing anything if `text` is
/// longer than [`MAX_INPUT_LEN`] characters.
pub fn draw_controller_string<T, B>(
    text_font: &mut T,
    button_font: &mut B,
    text: &str,
    position: Point,
    color: Color,
    scale: f32,
) -> Result<Point, CompositeError>
where
    T: GlyphFont + ?Sized,
    B: GlyphFont + ?Sized,
{
    draw_styled(
        text_font,
        button_font,
        text,
        position,
        &CompositeStyle::new(color, scale),
    )
}

/// [`draw_controller_string`] with a full [`CompositeStyle`].
pub fn draw_styled<T, B>(
    text_font: &mut T,
    button_font: &mut B,
    text: &str,
    position: Point,
    style: &CompositeStyle,
) -> Result<Point, CompositeError>
where
    T: GlyphFont + ?Sized,
    B: GlyphFont + ?Sized,
{
    check_len(text)?;

    let scale = style.scale;
    let metrics = LineMetrics::new(&*text_font, &*button_font, scale);
    // Lifts the glyph so it sits centered on the text line.
    let offset_y = metrics.button_scale / 2.0;

    tracing::debug!(
        len = text.len(),
        scale,
        button_scale = metrics.button_scale,
        "compositing controller string"
    );

    let mut cursor = position;
    let mut glyph_buf = [0u8; 4];

    for segment in segments(text) {
        match segment {
            Segment::Run(run) => {
                tracing::trace!(%run, x = cursor.x, y = cursor.y, "text run");
                text_font.draw(&run, cursor, style.color, scale);
                cursor.x += text_font.measure(&run) * scale;
            }
            Segment::Button(button) => {
                let glyph: &str = button.glyph().encode_utf8(&mut glyph_buf);
                let advance = button_font.measure(glyph) * metrics.button_scale;
                let at = Point::new(cursor.x + advance / 2.0, cursor.y - offset_y);
                tracing::trace!(?button, x = at.x, y = at.y, "button glyph");
                button_font.draw(glyph, at, style.button_tint, metrics.button_scale);
                cursor.x += advance;
            }
            Segment::Unknown(token) => {
                tracing::trace!(%token, "ignoring unknown button token");
            }
            Segment::Newline => {
                cursor.x = position.x;
                cursor.y += metrics.line_advance;
            }
        }
    }

    Ok(cursor)
}

/// Size the string would occupy if drawn at `scale`, without drawing it.
///
/// Width is that of the widest line; height is the number of lines times
/// the scaled text line spacing. An empty string measures zero.
pub fn measure_controller_string<T, B>(
    text_font: &T,
    button_font: &B,
    text: &str,
    scale: f32,
) -> Result<Size, CompositeError>
where
    T: FontMetrics + ?Sized,
    B: FontMetrics + ?Sized,
{
    check_len(text)?;
    if text.is_empty() {
        return Ok(Size::ZERO);
    }

    let metrics = LineMetrics::new(text_font, button_font, scale);
    let mut glyph_buf = [0u8; 4];
    let mut line_width = 0.0_f32;
    let mut widest = 0.0_f32;
    let mut lines = 1usize;

    for segment in segments(text) {
        match segment {
            Segment::Run(run) => line_width += text_font.measure(&run) * scale,
            Segment::Button(button) => {
                line_width += button_width(button_font, button, &mut glyph_buf) * metrics.button_scale;
            }
            Segment::Unknown(_) => {}
            Segment::Newline => {
                widest = widest.max(line_width);
                line_width = 0.0;
                lines += 1;
            }
        }
    }

    Ok(Size::new(
        widest.max(line_width),
        lines as f32 * metrics.line_advance,
    ))
}

fn button_width<B: FontMetrics + ?Sized>(font: &B, button: ControllerButton, buf: &mut [u8; 4]) -> f32 {
    font.measure(button.glyph().encode_utf8(buf))
}

/// A reusable compositing setup: one style applied to every string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Compositor {
    style: CompositeStyle,
}

impl Compositor {
    pub fn new(style: CompositeStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &CompositeStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: CompositeStyle) {
        self.style = style;
    }

    /// Draw `text` at `position` with this compositor's style.
    pub fn draw<T, B>(
        &self,
        text_font: &mut T,
        button_font: &mut B,
        text: &str,
        position: Point,
    ) -> Result<Point, CompositeError>
    where
        T: GlyphFont + ?Sized,
        B: GlyphFont + ?Sized,
    {
        draw_styled(text_font, button_font, text, position, &self.style)
    }

    /// Measure `text` at this compositor's scale.
    pub fn measure<T, B>(&self, text_font: &T, button_font: &B, text: &str) -> Result<Size, CompositeError>
    where
        T: FontMetrics + ?Sized,
        B: FontMetrics + ?Sized,
    {
        measure_controller_string(text_font, button_font, text, self.style.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_list::{DrawCommand, DrawList, FontSlot, Recorder};
    use crate::font::FixedAdvanceFont;

    /// Text: 10 wide per char, 20 tall. Buttons: 40 wide, 40 tall (button scale 0.5).
    fn fonts() -> (FixedAdvanceFont, FixedAdvanceFont) {
        (FixedAdvanceFont::new(10.0, 20.0), FixedAdvanceFont::new(40.0, 40.0))
    }

    fn draw(text: &str, origin: Point, style: CompositeStyle) -> (Result<Point, CompositeError>, DrawList) {
        let (text_metrics, button_metrics) = fonts();
        let recorder = Recorder::new();
        let result = {
            let mut text_font = recorder.font(FontSlot::Text, text_metrics);
            let mut button_font = recorder.font(FontSlot::Button, button_metrics);
            draw_styled(&mut text_font, &mut button_font, text, origin, &style)
        };
        (result, recorder.finish())
    }

    #[test]
    fn plain_string_is_one_run_at_origin() {
        let origin = Point::new(5.0, 7.0);
        let (end, list) = draw("hello", origin, CompositeStyle::new(Color::BLACK, 2.0));

        assert_eq!(end, Ok(Point::new(5.0 + 50.0 * 2.0, 7.0)));
        assert_eq!(
            list.commands(),
            &[DrawCommand {
                font: FontSlot::Text,
                text: "hello".into(),
                position: origin,
                color: Color::BLACK,
                scale: 2.0,
            }]
        );
    }

    #[test]
    fn button_is_scaled_to_line_height_and_centered() {
        let (end, list) = draw("Go [A]!", Point::ORIGIN, CompositeStyle::default());
        let cmds = list.commands();
        assert_eq!(cmds.len(), 3);

        // "Go " is 30 wide; the glyph advances 40 * 0.5 = 20.
        let glyph = &cmds[1];
        assert_eq!(glyph.font, FontSlot::Button);
        assert_eq!(glyph.text, ControllerButton::AButton.glyph().to_string());
        assert_eq!(glyph.scale, 0.5);
        assert_eq!(glyph.position, Point::new(30.0 + 10.0, -0.25));
        assert_eq!(glyph.color, Color::WHITE);

        assert_eq!(cmds[2].position, Point::new(50.0, 0.0));
        assert_eq!(end, Ok(Point::new(60.0, 0.0)));
    }

    #[test]
    fn button_uses_tint_not_text_color() {
        let style = CompositeStyle {
            color: Color::BLACK,
            scale: 1.0,
            button_tint: Color::rgb(1.0, 0.0, 0.0),
        };
        let (_, list) = draw("[B]", Point::ORIGIN, style);
        assert_eq!(list.commands()[0].color, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn newline_resets_column_and_advances_row() {
        let origin = Point::new(3.0, 4.0);
        let (end, list) = draw("ab\ncd", origin, CompositeStyle::new(Color::WHITE, 1.5));
        let cmds = list.commands();
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].position, origin);
        assert_eq!(cmds[1].position, Point::new(3.0, 4.0 + 30.0));
        assert_eq!(end, Ok(Point::new(3.0 + 30.0, 34.0)));
    }

    #[test]
    fn oversized_input_draws_nothing() {
        let text = "x".repeat(MAX_INPUT_LEN + 1);
        let (result, list) = draw(&text, Point::ORIGIN, CompositeStyle::default());
        assert_eq!(
            result,
            Err(CompositeError::InputTooLarge { len: 4096, max: 4095 })
        );
        assert!(list.is_empty());
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_INPUT_LEN);
        let (result, _) = draw(&text, Point::ORIGIN, CompositeStyle::default());
        assert!(result.is_ok());
    }

    #[test]
    fn measure_tracks_widest_line() {
        let (text_font, button_font) = fonts();
        let size = measure_controller_string(&text_font, &button_font, "ab\n[X] abcd\nc", 1.0).unwrap();
        // Line two: 20 (glyph) + 50.
        assert_eq!(size, Size::new(70.0, 60.0));
    }

    #[test]
    fn measure_matches_draw_cursor_on_single_line() {
        let (text_font, button_font) = fonts();
        let text = "Press [LT] and [RT] together";
        let size = measure_controller_string(&text_font, &button_font, text, 1.25).unwrap();
        let (end, _) = draw(text, Point::ORIGIN, CompositeStyle::new(Color::WHITE, 1.25));
        assert_eq!(end.unwrap().x, size.width);
        assert_eq!(size.height, 25.0);
    }

    #[test]
    fn measure_empty_is_zero() {
        let (text_font, button_font) = fonts();
        assert_eq!(
            measure_controller_string(&text_font, &button_font, "", 3.0),
            Ok(Size::ZERO)
        );
    }

    #[test]
    fn compositor_applies_its_style() {
        let (text_metrics, button_metrics) = fonts();
        let compositor = Compositor::new(CompositeStyle::new(Color::BLACK, 2.0));
        let recorder = Recorder::new();
        {
            let mut text_font = recorder.font(FontSlot::Text, &text_metrics);
            let mut button_font = recorder.font(FontSlot::Button, &button_metrics);
            compositor
                .draw(&mut text_font, &mut button_font, "hi", Point::ORIGIN)
                .unwrap();
        }
        let list = recorder.finish();
        assert_eq!(list.commands()[0].scale, 2.0);
        assert_eq!(list.commands()[0].color, Color::BLACK);
        assert_eq!(
            compositor.measure(&text_metrics, &button_metrics, "hi"),
            Ok(Size::new(40.0, 40.0))
        );
    }
}
