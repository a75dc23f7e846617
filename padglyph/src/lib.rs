//! padglyph - controller button glyphs composited into UI text.
//!
//! A string such as `"Press [A] to jump, [LT] to aim"` is drawn as text runs
//! interleaved with glyphs from a controller button font. Tokens are matched
//! case-insensitively against a fixed table (`[A] [B] [X] [Y] [DPad] [Back]
//! [Start] [Guide] [RThumb] [LThumb] [RB] [LB] [RT] [LT]`); unknown tokens
//! are dropped. Only `\n` breaks lines.
//!
//! Rendering stays with the caller: anything implementing [`GlyphFont`] can
//! be drawn into, and [`Recorder`] captures the draw calls instead.
//!
//! ```ignore
//! use padglyph::{draw_controller_string, Color, Point};
//!
//! let end = draw_controller_string(
//!     &mut text_font,
//!     &mut button_font,
//!     "Press [A] to continue",
//!     Point::new(40.0, 600.0),
//!     Color::WHITE,
//!     1.0,
//! )?;
//! ```

pub mod button;
pub mod compositor;
pub mod config;
pub mod cosmic;
pub mod draw_list;
pub mod error;
pub mod font;
pub mod primitives;
pub mod scanner;

pub use button::{ControllerButton, ParseButtonError};
pub use compositor::{
    CompositeStyle, Compositor, MAX_INPUT_LEN, draw_controller_string, draw_styled,
    measure_controller_string,
};
pub use config::CompositorConfig;
pub use cosmic::{CosmicFamily, CosmicFont};
pub use draw_list::{DrawCommand, DrawList, FontSlot, Recorder, RecordingFont};
pub use error::{CompositeError, ConfigError};
pub use font::{FixedAdvanceFont, FontMetrics, GlyphFont};
pub use primitives::{Color, Point, Size};
pub use scanner::{Segment, Segments, segments};
