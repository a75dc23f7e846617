mod cli;
mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use padglyph::{CompositorConfig, DrawList, FontSlot, Point, Recorder, Size};

use crate::cli::Args;
use crate::logging::setup_logging;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => CompositorConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => CompositorConfig::default(),
    };
    if let Some(scale) = args.scale {
        if !(scale.is_finite() && scale > 0.0) {
            bail!("--scale must be a positive number, got {scale}");
        }
        config.style.scale = scale;
    }

    let text = args.expanded_text();
    let origin = Point::new(args.x, args.y);
    let compositor = config.compositor();

    let recorder = Recorder::new();
    let end = {
        let mut text_font = recorder.font(FontSlot::Text, &config.text_font);
        let mut button_font = recorder.font(FontSlot::Button, &config.button_font);
        compositor
            .draw(&mut text_font, &mut button_font, &text, origin)
            .context("Failed to composite string")?
    };
    let size = compositor.measure(&config.text_font, &config.button_font, &text)?;
    let list = recorder.finish();

    tracing::info!(draws = list.len(), "composited string");

    if args.json {
        let out = serde_json::json!({
            "draws": list,
            "cursor": end,
            "size": size,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_list(&list, end, size);
    }
    Ok(())
}

fn print_list(list: &DrawList, end: Point, size: Size) {
    for cmd in list.iter() {
        let kind = match cmd.font {
            FontSlot::Text => "text  ",
            FontSlot::Button => "button",
        };
        println!(
            "{kind} ({:>8.2}, {:>8.2}) x{:.3} {:?}",
            cmd.position.x, cmd.position.y, cmd.scale, cmd.text
        );
    }
    println!("cursor ({:.2}, {:.2})", end.x, end.y);
    println!("size   {:.2} x {:.2}", size.width, size.height);
}
