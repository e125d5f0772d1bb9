//! Sensor preset registry
//!
//! A closed set of Sharp models with datasheet-derived calibrations.
//! Supporting another model means adding a table to
//! `constants::sensors` and a variant here; there is no runtime
//! registration and therefore no "unknown model" case at selection time.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sensors::{
        GP2Y0A41SK0F_5V_COEFFS, GP2Y0A41SK0F_5V_RANGE, GP2Y0A51SK0F_5V_POWER,
        GP2Y0A51SK0F_5V_RANGE, GP2Y0A60SZLF_5V_COEFFS, GP2Y0A60SZLF_5V_RANGE,
        GP2Y0A710K0F_5V_COEFFS, GP2Y0A710K0F_5V_RANGE,
    },
    errors::CalibrationError,
};

use super::{CalibrationModel, Domain, FitFunction};

/// Pre-calibrated Sharp sensor models (5 V supply)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Preset {
    /// GP2Y0A60SZLF, 10-150 cm
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "GP2Y0A60SZLF_5V"))]
    Gp2y0a60szlf,

    /// GP2Y0A710K0F, 100-500 cm
    #[cfg_attr(feature = "serde", serde(rename = "GP2Y0A710K0F_5V_DS"))]
    Gp2y0a710k0f,

    /// GP2Y0A51SK0F, 2-15 cm
    #[cfg_attr(feature = "serde", serde(rename = "GP2Y0A51SK0F_5V_DS"))]
    Gp2y0a51sk0f,

    /// GP2Y0A41SK0F, 4-30 cm
    #[cfg_attr(feature = "serde", serde(rename = "GP2Y0A41SK0F_5V_DS"))]
    Gp2y0a41sk0f,
}

impl Preset {
    /// Every registered preset
    pub const ALL: [Preset; 4] = [
        Preset::Gp2y0a60szlf,
        Preset::Gp2y0a710k0f,
        Preset::Gp2y0a51sk0f,
        Preset::Gp2y0a41sk0f,
    ];

    /// Datasheet-style model name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gp2y0a60szlf => "GP2Y0A60SZLF_5V",
            Self::Gp2y0a710k0f => "GP2Y0A710K0F_5V_DS",
            Self::Gp2y0a51sk0f => "GP2Y0A51SK0F_5V_DS",
            Self::Gp2y0a41sk0f => "GP2Y0A41SK0F_5V_DS",
        }
    }

    /// Fit function of this model
    pub fn fit(&self) -> FitFunction {
        match self {
            Self::Gp2y0a60szlf => FitFunction::polynomial(&GP2Y0A60SZLF_5V_COEFFS),
            Self::Gp2y0a710k0f => FitFunction::polynomial(&GP2Y0A710K0F_5V_COEFFS),
            Self::Gp2y0a51sk0f => {
                let (c, p) = GP2Y0A51SK0F_5V_POWER;
                FitFunction::power(c, p)
            }
            Self::Gp2y0a41sk0f => FitFunction::polynomial(&GP2Y0A41SK0F_5V_COEFFS),
        }
    }

    /// Analog range the fit is valid for
    pub fn domain(&self) -> Domain {
        let range = match self {
            Self::Gp2y0a60szlf => GP2Y0A60SZLF_5V_RANGE,
            Self::Gp2y0a710k0f => GP2Y0A710K0F_5V_RANGE,
            Self::Gp2y0a51sk0f => GP2Y0A51SK0F_5V_RANGE,
            Self::Gp2y0a41sk0f => GP2Y0A41SK0F_5V_RANGE,
        };

        Domain::from(range)
    }

    /// Complete calibration for this model
    pub fn calibration(&self) -> CalibrationModel {
        CalibrationModel::new(self.fit(), self.domain())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = CalibrationError;

    /// Parse a model name, ignoring ASCII case
    ///
    /// Accepts the full name (`GP2Y0A41SK0F_5V_DS`) or the bare part
    /// number (`gp2y0a41sk0f`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| {
                let name = preset.name();
                let part = name.split('_').next().unwrap_or(name);
                s.eq_ignore_ascii_case(name) || s.eq_ignore_ascii_case(part)
            })
            .ok_or(CalibrationError::UnknownPreset)
    }
}
