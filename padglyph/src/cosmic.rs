//! Font metrics backed by cosmic-text shaping.
//!
//! Lets the compositor lay out against real system fonts. Measurement shapes
//! each run with `Shaping::Advanced` so ligatures and fallback fonts are
//! accounted for.

use std::sync::{Mutex, MutexGuard};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};

use crate::font::FontMetrics;

/// Which family to shape with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CosmicFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
    Named(String),
}

/// A [`FontMetrics`] source over a cosmic-text [`FontSystem`].
pub struct CosmicFont {
    font_system: Mutex<FontSystem>,
    metrics: Metrics,
    family: CosmicFamily,
}

impl std::fmt::Debug for CosmicFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicFont")
            .field("font_size", &self.metrics.font_size)
            .field("line_height", &self.metrics.line_height)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl CosmicFont {
    /// Wrap an existing font system. Line height defaults to 1.2 × size.
    pub fn new(font_system: FontSystem, font_size: f32) -> Self {
        Self {
            font_system: Mutex::new(font_system),
            metrics: Metrics::new(font_size, font_size * 1.2),
            family: CosmicFamily::default(),
        }
    }

    /// Load the platform's installed fonts.
    pub fn system(font_size: f32) -> Self {
        Self::new(FontSystem::new(), font_size)
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.metrics = Metrics::new(self.metrics.font_size, line_height);
        self
    }

    pub fn with_family(mut self, family: CosmicFamily) -> Self {
        self.family = family;
        self
    }

    fn lock(&self) -> MutexGuard<'_, FontSystem> {
        // Shaping never leaves the font system half-updated, so a poisoned lock is still usable.
        self.font_system.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn attrs(&self) -> Attrs<'_> {
        let family = match &self.family {
            CosmicFamily::SansSerif => Family::SansSerif,
            CosmicFamily::Serif => Family::Serif,
            CosmicFamily::Monospace => Family::Monospace,
            CosmicFamily::Named(name) => Family::Name(name),
        };
        Attrs::new().family(family)
    }
}

impl FontMetrics for CosmicFont {
    fn measure(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let mut font_system = self.lock();
        let mut buffer = Buffer::new(&mut font_system, self.metrics);
        buffer.set_size(&mut font_system, None, None);
        buffer.set_text(&mut font_system, text, self.attrs(), Shaping::Advanced);
        buffer.shape_until_scroll(&mut font_system, false);

        buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0, f32::max)
    }

    fn line_spacing(&self) -> f32 {
        self.metrics.line_height
    }
}
