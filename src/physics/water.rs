//! Named physical constants for the default seawater column.

/// Mean density of seawater, kg/m^3.
pub const SEAWATER_MEAN_DENSITY_KG_PER_M3: f64 = 1025.0;

/// Mean dynamic viscosity of seawater, Pa*s.
pub const SEAWATER_MEAN_VISCOSITY_PA_S: f64 = 1.08e-3;

/// Standard atmospheric pressure at sea level, Pa.
pub const SEA_LEVEL_PRESSURE_PASCALS: f64 = 101_325.0;

/// Standard gravity, m/s^2.
pub const GRAVITY_M_PER_S2: f64 = 9.81;

/// Hydrostatic pressure at the given depth below sea level, in Pa.
/// Linear in depth; depth 0 is sea level.
pub fn pressure_at_depth(depth_m: f64) -> f64 {
    SEA_LEVEL_PRESSURE_PASCALS + SEAWATER_MEAN_DENSITY_KG_PER_M3 * GRAVITY_M_PER_S2 * depth_m
}
