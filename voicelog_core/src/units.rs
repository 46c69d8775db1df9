//! Pure numeric/unit conversion helpers.
//!
//! All quantities the engine reports are in canonical units: millilitres for
//! volume, minutes for duration, "lbs" or "kg" for body weight. These helpers
//! are the only place conversion factors live.

/// Millilitres per fluid ounce
pub const ML_PER_OZ: f64 = 29.5735;

/// Millilitres per US cup
pub const ML_PER_CUP: f64 = 236.588;

/// Convert a spoken volume to whole millilitres, rounding half up.
///
/// Unrecognized units fall back to the ounce factor rather than failing;
/// the water extractor guarantees the unit came from its own vocabulary, so
/// the fallback only fires for future vocabulary additions.
pub fn convert_to_ml(amount: f64, unit: &str) -> u32 {
    let unit = unit.to_lowercase();
    let ml = if unit.contains("ounce") || unit.contains("oz") {
        amount * ML_PER_OZ
    } else if unit.contains("cup") {
        amount * ML_PER_CUP
    } else if unit.contains("milliliter") || unit.contains("ml") {
        amount
    } else if unit.contains("liter") || unit == "l" {
        amount * 1000.0
    } else {
        amount * ML_PER_OZ
    };
    round_half_up(ml)
}

/// Convert a spoken duration to canonical minutes (hours x 60).
pub fn duration_to_minutes(value: u32, unit: &str) -> u32 {
    let unit = unit.to_lowercase();
    if unit.contains("hour") || unit.contains("hr") {
        value * 60
    } else {
        value
    }
}

/// Canonicalize a spoken weight unit to "lbs" or "kg".
pub fn canonical_weight_unit(unit: &str) -> &'static str {
    let unit = unit.to_lowercase();
    if unit.contains("pound") || unit.contains("lb") {
        "lbs"
    } else {
        "kg"
    }
}

/// Round a non-negative value half up to the nearest integer.
pub fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}
