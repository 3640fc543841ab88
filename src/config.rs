//! Widget configuration. Everything is decided at build time and handed to
//! the widget as props; there is no environment or file based config.

use crate::form::ValidationPolicy;
use crate::palette::{
    display_color, FALLBACK_COLOR, FALLBACK_SOLID_COLOR, GRADIENT_PALETTE, SOLID_PALETTE,
};
use crate::store::SchemaVersion;
use std::time::Duration;

/// How long "Posting..." shows before the review appears.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(600);

/// Visual style of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Gradient avatars, dropdown rating.
    #[default]
    Gradient,
    /// Solid avatars, star buttons.
    Solid,
}

impl Variant {
    /// Avatar classes for a stored color tag.
    pub fn avatar_class(self, color: &str) -> String {
        match self {
            Variant::Gradient => format!(
                "bg-gradient-to-br {}",
                display_color(color, FALLBACK_COLOR)
            ),
            Variant::Solid => display_color(color, FALLBACK_SOLID_COLOR).to_string(),
        }
    }
}

/// Control used to pick a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingInput {
    Select,
    Stars,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub variant: Variant,
    pub schema: SchemaVersion,
    pub policy: ValidationPolicy,
    pub rating_input: RatingInput,
    pub palette: &'static [&'static str],
    pub submit_delay: Duration,
    /// Copy the other schema's list into this one on mount if this one is empty.
    pub migrate_legacy: bool,
}

impl WidgetConfig {
    pub fn gradient() -> Self {
        Self {
            variant: Variant::Gradient,
            schema: SchemaVersion::V2,
            policy: ValidationPolicy::Lenient,
            rating_input: RatingInput::Select,
            palette: GRADIENT_PALETTE,
            submit_delay: DEFAULT_SUBMIT_DELAY,
            migrate_legacy: false,
        }
    }

    pub fn solid() -> Self {
        Self {
            variant: Variant::Solid,
            schema: SchemaVersion::V1,
            policy: ValidationPolicy::Strict,
            rating_input: RatingInput::Stars,
            palette: SOLID_PALETTE,
            submit_delay: DEFAULT_SUBMIT_DELAY,
            migrate_legacy: false,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Gradient => Self::gradient(),
            Variant::Solid => Self::solid(),
        }
    }

    /// The schema this widget would migrate from, if any.
    pub fn legacy_schema(&self) -> Option<SchemaVersion> {
        match (self.migrate_legacy, self.schema) {
            (true, SchemaVersion::V2) => Some(SchemaVersion::V1),
            _ => None,
        }
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn with_legacy_migration(mut self, enabled: bool) -> Self {
        self.migrate_legacy = enabled;
        self
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::gradient()
    }
}
