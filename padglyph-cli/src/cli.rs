use std::path::PathBuf;

use clap::Parser;

/// Composite a controller string and print the resulting draw calls.
#[derive(Debug, Parser)]
#[command(name = "padglyph", version)]
pub struct Args {
    /// String to composite, e.g. "Press [A] to jump". Use \n for line breaks.
    pub text: String,

    /// JSON compositor config (fonts and style).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Origin x.
    #[arg(long, default_value_t = 0.0)]
    pub x: f32,

    /// Origin y.
    #[arg(long, default_value_t = 0.0)]
    pub y: f32,

    /// Override the configured text scale.
    #[arg(short, long)]
    pub scale: Option<f32>,

    /// Print the draw list as JSON.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The text with `\n` escapes expanded, so line breaks can be typed on a shell.
    pub fn expanded_text(&self) -> String {
        self.text.replace("\\n", "\n")
    }
}
