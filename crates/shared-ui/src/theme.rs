/// Base sizing unit in CSS pixels.
///
/// Component dimensions are derived as multiples of this unit so the
/// UI scales consistently from one constant.
pub const SIZE_UNIT_BASE: f64 = 8.0;

/// Convert a number of base units to CSS pixels.
pub fn size_units(units: f64) -> f64 {
    units * SIZE_UNIT_BASE
}
