//! Controller buttons and the bracket-token table that names them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A physical controller button with a glyph in the button font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerButton {
    LeftThumb,
    DPad,
    RightThumb,
    Back,
    Guide,
    Start,
    XButton,
    AButton,
    YButton,
    BButton,
    RightShoulder,
    RightTrigger,
    LeftTrigger,
    LeftShoulder,
}

/// Bracket literal for each button, matched case-insensitively.
const TOKENS: [(&str, ControllerButton); 14] = [
    ("[A]", ControllerButton::AButton),
    ("[B]", ControllerButton::BButton),
    ("[X]", ControllerButton::XButton),
    ("[Y]", ControllerButton::YButton),
    ("[DPad]", ControllerButton::DPad),
    ("[Back]", ControllerButton::Back),
    ("[Start]", ControllerButton::Start),
    ("[Guide]", ControllerButton::Guide),
    ("[RThumb]", ControllerButton::RightThumb),
    ("[LThumb]", ControllerButton::LeftThumb),
    ("[RB]", ControllerButton::RightShoulder),
    ("[LB]", ControllerButton::LeftShoulder),
    ("[RT]", ControllerButton::RightTrigger),
    ("[LT]", ControllerButton::LeftTrigger),
];

impl ControllerButton {
    /// Every button, in button-font glyph order.
    pub const ALL: [ControllerButton; 14] = [
        ControllerButton::LeftThumb,
        ControllerButton::DPad,
        ControllerButton::RightThumb,
        ControllerButton::Back,
        ControllerButton::Guide,
        ControllerButton::Start,
        ControllerButton::XButton,
        ControllerButton::AButton,
        ControllerButton::YButton,
        ControllerButton::BButton,
        ControllerButton::RightShoulder,
        ControllerButton::RightTrigger,
        ControllerButton::LeftTrigger,
        ControllerButton::LeftShoulder,
    ];

    /// The character this button occupies in the controller button font.
    ///
    /// The stock font packs the fourteen buttons into `' '..='-'`.
    pub const fn glyph(self) -> char {
        match self {
            ControllerButton::LeftThumb => ' ',
            ControllerButton::DPad => '!',
            ControllerButton::RightThumb => '"',
            ControllerButton::Back => '#',
            ControllerButton::Guide => '$',
            ControllerButton::Start => '%',
            ControllerButton::XButton => '&',
            ControllerButton::AButton => '\'',
            ControllerButton::YButton => '(',
            ControllerButton::BButton => ')',
            ControllerButton::RightShoulder => '*',
            ControllerButton::RightTrigger => '+',
            ControllerButton::LeftTrigger => ',',
            ControllerButton::LeftShoulder => '-',
        }
    }

    /// The canonical bracket token, e.g. `"[LThumb]"`.
    pub fn token(self) -> &'static str {
        TOKENS
            .iter()
            .find(|(_, button)| *button == self)
            .map(|(token, _)| *token)
            .unwrap_or_default()
    }

    /// Resolve a complete bracket token such as `"[rb]"`.
    ///
    /// Matching ignores ASCII case but is otherwise exact: no trimming,
    /// no partial matches.
    pub fn from_token(token: &str) -> Option<Self> {
        TOKENS
            .iter()
            .find(|(literal, _)| literal.eq_ignore_ascii_case(token))
            .map(|(_, button)| *button)
    }
}

impl fmt::Display for ControllerButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when a string names no controller button.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown controller button: {0:?}")]
pub struct ParseButtonError(pub String);

impl FromStr for ControllerButton {
    type Err = ParseButtonError;

    /// Accepts either the bracketed token (`"[LB]"`) or its bare name (`"lb"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = if s.starts_with('[') {
            Self::from_token(s)
        } else {
            Self::from_token(&format!("[{s}]"))
        };
        found.ok_or_else(|| ParseButtonError(s.to_string()))
    }
}
