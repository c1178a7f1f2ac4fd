use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_DPI: f64 = 96.0;
pub const CM_PER_INCH: f64 = 2.54;

/// Outcome of parsing the DPI text field.
///
/// Unparsable input falls back to 96, but an explicit non-positive value is
/// kept as `Invalid` so the physical readouts can show it verbatim. Pixel
/// readouts never depend on this.
#[derive(Debug, Clone, PartialEq)]
pub enum Dpi {
    Value(f64),
    Invalid(String),
}

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("float prefix pattern")
});

/// Parses the DPI field like a browser number field: the longest leading
/// float prefix counts, so "72dpi" reads as 72 and "abc" falls back to 96.
pub fn parse_dpi(text: &str) -> Dpi {
    let trimmed = text.trim();
    let parsed = FLOAT_PREFIX
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok());
    match parsed {
        None => Dpi::Value(DEFAULT_DPI),
        Some(value) if value > 0.0 => Dpi::Value(value),
        Some(_) => Dpi::Invalid(trimmed.to_string()),
    }
}

pub fn to_inches(pixels: f64, dpi: f64) -> f64 {
    pixels / dpi
}

pub fn to_cm(pixels: f64, dpi: f64) -> f64 {
    pixels / dpi * CM_PER_INCH
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Cm,
    In,
}

impl Unit {
    pub fn label(self) -> &'static str {
        match self {
            Unit::Cm => "CM",
            Unit::In => "IN",
        }
    }

    pub fn convert(self, pixels: f64, dpi: f64) -> f64 {
        match self {
            Unit::Cm => to_cm(pixels, dpi),
            Unit::In => to_inches(pixels, dpi),
        }
    }
}

pub fn format_pixels(width: f64, height: f64) -> String {
    format!("Pixels: {width:.0} W x {height:.0} H")
}

pub fn format_physical(unit: Unit, width_px: f64, height_px: f64, dpi: &Dpi) -> String {
    match dpi {
        Dpi::Value(value) => format!(
            "{} (at {} DPI): {:.2} W x {:.2} H",
            unit.label(),
            value,
            unit.convert(width_px, *value),
            unit.convert(height_px, *value),
        ),
        Dpi::Invalid(raw) => format!("{} (at {} DPI): Invalid DPI", unit.label(), raw),
    }
}

/// Blank when either the original or the selection has a zero dimension.
pub fn format_percent(sel_width: f64, sel_height: f64, orig_width: f64, orig_height: f64) -> String {
    if orig_width <= 0.0 || orig_height <= 0.0 || sel_width <= 0.0 || sel_height <= 0.0 {
        return String::new();
    }
    format!(
        "% of Original: {:.1}% W x {:.1}% H",
        sel_width / orig_width * 100.0,
        sel_height / orig_height * 100.0,
    )
}
