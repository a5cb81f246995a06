// bf-core/src/units.rs
//
// The boiler correlations are empirical fits written in US customary units
// (°F, psig, BTU); feedwater and flue temperatures arrive in °C. These two
// helpers are the entire conversion surface the pipeline needs.

#[inline]
pub fn fahrenheit_from_celsius(c: f64) -> f64 {
    c * 1.8 + 32.0
}

#[inline]
pub fn celsius_from_fahrenheit(f: f64) -> f64 {
    (f - 32.0) / 1.8
}
