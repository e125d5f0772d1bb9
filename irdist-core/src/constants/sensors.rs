//! Sharp Sensor Calibration Tables
//!
//! Curve fits of distance (mm) against raw 10-bit analog value, taken from
//! the datasheet distance/output plots at 5 V supply. Each table is only
//! valid over its analog range; outside it the fits diverge quickly.
//!
//! Polynomial coefficients are ordered from x^0 upwards.

/// Maximum polynomial coefficients (fifth-order fit).
pub const MAX_POLY_COEFFS: usize = 6;

// ===== GP2Y0A60SZLF (10-150 cm) =====

/// GP2Y0A60SZLF 5 V fifth-order fit.
///
/// Source: datasheet output curve, 50-1500 mm
pub const GP2Y0A60SZLF_5V_COEFFS: [f32; 6] =
    [1734.0, -9.005, 2.023E-2, -2.251E-5, 1.167E-8, -2.037E-12];

/// Analog range of the GP2Y0A60SZLF fit (raw counts).
pub const GP2Y0A60SZLF_5V_RANGE: (u16, u16) = (30, 875);

// ===== GP2Y0A710K0F (100-500 cm) =====

/// GP2Y0A710K0F 5 V fourth-order fit.
///
/// Source: datasheet output curve
pub const GP2Y0A710K0F_5V_COEFFS: [f32; 5] =
    [178506.0, -1607.72, 5.5239, -8.47601E-3, 4.87819E-6];

/// Analog range of the GP2Y0A710K0F fit (raw counts).
pub const GP2Y0A710K0F_5V_RANGE: (u16, u16) = (284, 507);

// ===== GP2Y0A41SK0F (4-30 cm) =====

/// GP2Y0A41SK0F 5 V fifth-order fit.
///
/// Source: datasheet output curve
pub const GP2Y0A41SK0F_5V_COEFFS: [f32; 6] =
    [761.913, -8.13336, 4.18857E-2, -1.11338E-4, 1.46237E-7, -7.49656E-11];

/// Analog range of the GP2Y0A41SK0F fit (raw counts).
pub const GP2Y0A41SK0F_5V_RANGE: (u16, u16) = (61, 614);

// ===== GP2Y0A51SK0F (2-15 cm) =====

/// GP2Y0A51SK0F 5 V power fit, `distance = C * x^P`.
///
/// Source: datasheet output curve
pub const GP2Y0A51SK0F_5V_POWER: (f32, f32) = (4.03576E+4, -1.26093);

/// Analog range of the GP2Y0A51SK0F fit (raw counts).
pub const GP2Y0A51SK0F_5V_RANGE: (u16, u16) = (70, 500);
