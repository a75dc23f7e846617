//! Recorded draw commands.
//!
//! `RecordingFont` stands in for a real sprite font: it answers metric
//! queries from a wrapped [`FontMetrics`] and appends every draw to a
//! shared [`Recorder`]. Text and button fonts record into the same recorder,
//! so the finished [`DrawList`] is a single timeline that can be inspected,
//! serialized, or replayed onto fonts that actually render.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::font::{FontMetrics, GlyphFont};
use crate::primitives::{Color, Point};

/// Which font a command was issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSlot {
    Text,
    Button,
}

/// A single draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub font: FontSlot,
    pub text: String,
    pub position: Point,
    pub color: Color,
    pub scale: f32,
}

/// An ordered list of draw calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// Commands issued against one font.
    pub fn for_font(&self, slot: FontSlot) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |cmd| cmd.font == slot)
    }

    /// Re-issue every command, in order, against real fonts.
    pub fn replay<T: GlyphFont, B: GlyphFont>(&self, text_font: &mut T, button_font: &mut B) {
        for cmd in &self.commands {
            match cmd.font {
                FontSlot::Text => text_font.draw(&cmd.text, cmd.position, cmd.color, cmd.scale),
                FontSlot::Button => button_font.draw(&cmd.text, cmd.position, cmd.color, cmd.scale),
            }
        }
    }
}

impl IntoIterator for DrawList {
    type Item = DrawCommand;
    type IntoIter = std::vec::IntoIter<DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

/// Collects draws from any number of [`RecordingFont`]s into one list.
#[derive(Debug, Default)]
pub struct Recorder {
    list: RefCell<DrawList>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A font that measures with `metrics` and records into this recorder.
    pub fn font<M: FontMetrics>(&self, slot: FontSlot, metrics: M) -> RecordingFont<'_, M> {
        RecordingFont {
            metrics,
            slot,
            recorder: self,
        }
    }

    /// Number of draws recorded so far.
    pub fn len(&self) -> usize {
        self.list.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.borrow().is_empty()
    }

    pub fn finish(self) -> DrawList {
        self.list.into_inner()
    }
}

/// A [`GlyphFont`] that records instead of rendering.
#[derive(Debug)]
pub struct RecordingFont<'r, M> {
    metrics: M,
    slot: FontSlot,
    recorder: &'r Recorder,
}

impl<M: FontMetrics> FontMetrics for RecordingFont<'_, M> {
    fn measure(&self, text: &str) -> f32 {
        self.metrics.measure(text)
    }

    fn line_spacing(&self) -> f32 {
        self.metrics.line_spacing()
    }
}

impl<M: FontMetrics> GlyphFont for RecordingFont<'_, M> {
    fn draw(&mut self, text: &str, position: Point, color: Color, scale: f32) {
        self.recorder.list.borrow_mut().push(DrawCommand {
            font: self.slot,
            text: text.to_string(),
            position,
            color,
            scale,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FixedAdvanceFont;

    #[test]
    fn recording_fonts_share_one_timeline() {
        let recorder = Recorder::new();
        {
            let mut text = recorder.font(FontSlot::Text, FixedAdvanceFont::new(8.0, 16.0));
            let mut button = recorder.font(FontSlot::Button, FixedAdvanceFont::new(32.0, 32.0));

            text.draw("a", Point::ORIGIN, Color::WHITE, 1.0);
            button.draw("'", Point::new(8.0, 0.0), Color::WHITE, 0.5);
            text.draw("b", Point::new(24.0, 0.0), Color::BLACK, 1.0);
        }
        assert_eq!(recorder.len(), 3);

        let list = recorder.finish();
        let slots: Vec<FontSlot> = list.iter().map(|c| c.font).collect();
        assert_eq!(slots, [FontSlot::Text, FontSlot::Button, FontSlot::Text]);
        assert_eq!(list.for_font(FontSlot::Text).count(), 2);
    }

    #[test]
    fn recording_font_forwards_metrics() {
        let recorder = Recorder::new();
        let font = recorder.font(FontSlot::Text, FixedAdvanceFont::new(5.0, 11.0));
        assert_eq!(font.measure("four"), 20.0);
        assert_eq!(font.line_spacing(), 11.0);
        assert!(recorder.is_empty());
    }

    #[test]
    fn replay_reissues_in_order() {
        let source = Recorder::new();
        {
            let mut text = source.font(FontSlot::Text, FixedAdvanceFont::default());
            let mut button = source.font(FontSlot::Button, FixedAdvanceFont::default());
            text.draw("go ", Point::ORIGIN, Color::WHITE, 2.0);
            button.draw("+", Point::new(48.0, -1.0), Color::WHITE, 1.0);
        }
        let list = source.finish();

        let target = Recorder::new();
        {
            let mut text = target.font(FontSlot::Text, FixedAdvanceFont::default());
            let mut button = target.font(FontSlot::Button, FixedAdvanceFont::default());
            list.replay(&mut text, &mut button);
        }
        assert_eq!(target.finish(), list);
    }

    #[test]
    fn draw_list_serializes_slots_in_snake_case() {
        let mut list = DrawList::new();
        list.push(DrawCommand {
            font: FontSlot::Button,
            text: "!".into(),
            position: Point::new(1.0, 2.0),
            color: Color::WHITE,
            scale: 1.0,
        });
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["commands"][0]["font"], "button");
    }
}
