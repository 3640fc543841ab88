//! Avatar style tags. Purely cosmetic: nothing reads them back except the view.

use rand::Rng;

/// Gradient classes used by the dropdown variant.
pub const GRADIENT_PALETTE: &[&str] = &[
    "from-red-400 to-orange-400",
    "from-teal-400 to-emerald-400",
    "from-blue-400 to-indigo-400",
    "from-purple-400 to-pink-400",
    "from-fuchsia-400 to-rose-400",
];

/// Solid background classes used by the star-button variant.
pub const SOLID_PALETTE: &[&str] = &[
    "bg-rose-500",
    "bg-amber-500",
    "bg-emerald-500",
    "bg-sky-500",
    "bg-violet-500",
];

/// Gradient shown for records stored without a tag.
pub const FALLBACK_COLOR: &str = "from-indigo-400 to-purple-400";

/// Solid counterpart of [`FALLBACK_COLOR`].
pub const FALLBACK_SOLID_COLOR: &str = "bg-indigo-400";

/// Uniform draw from `palette`.
pub fn pick_color<R: Rng + ?Sized>(palette: &[&str], rng: &mut R) -> String {
    if palette.is_empty() {
        return FALLBACK_COLOR.to_string();
    }
    palette[rng.gen_range(0..palette.len())].to_string()
}

/// Tag to render for a stored color, or `fallback` when it is blank.
pub fn display_color<'a>(color: &'a str, fallback: &'a str) -> &'a str {
    if color.trim().is_empty() {
        fallback
    } else {
        color
    }
}
