//! Sensor descriptions kept in host-side config files
//!
//! The crate persists nothing itself; these tests pin down the textual form
//! an integrator's tooling would read and write.

#![cfg(feature = "serde")]

mod common;

use irdist_core::{
    CalibrationSource, Domain, DistanceSensor, FitFunction, Preset, SensorConfig,
};

use common::ScriptedSource;

#[test]
fn preset_config_from_json() {
    let json = r#"{
        "channel": 2,
        "filter_window": 5,
        "calibration": { "preset": "GP2Y0A51SK0F_5V_DS" }
    }"#;

    let config: SensorConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.channel, 2);
    assert_eq!(config.filter_window, 5);
    assert_eq!(config.calibration, CalibrationSource::Preset(Preset::Gp2y0a51sk0f));
}

#[test]
fn missing_fields_use_defaults() {
    let config: SensorConfig = serde_json::from_str(r#"{ "channel": 1 }"#).unwrap();

    assert_eq!(config.channel, 1);
    assert_eq!(config.filter_window, 1);
    assert_eq!(config.calibration, CalibrationSource::Default);
}

#[test]
fn explicit_power_fit_from_json() {
    let json = r#"{
        "calibration": {
            "fit": {
                "fit": { "PowerLaw": { "c": 40357.6, "p": -1.26093 } },
                "domain": { "min": 70, "max": 500 }
            }
        }
    }"#;

    let config: SensorConfig = serde_json::from_str(json).unwrap();
    let mut sensor: DistanceSensor<_> =
        DistanceSensor::from_config(ScriptedSource::constant(200), &config);

    assert_eq!(sensor.get_distance(), 51);
}

#[test]
fn short_polynomial_from_json_is_zero_padded() {
    // The GP2Y0A710K0F fit is fourth order: five coefficients
    let json = r#"{
        "calibration": {
            "fit": {
                "fit": { "Polynomial": [178506.0, -1607.72, 5.5239, -8.47601E-3, 4.87819E-6] },
                "domain": { "min": 284, "max": 507 }
            }
        }
    }"#;

    let config: SensorConfig = serde_json::from_str(json).unwrap();
    let model = config.calibration.model();
    let preset = Preset::Gp2y0a710k0f.calibration();

    match *model.fit() {
        FitFunction::Polynomial(coeffs) => assert_eq!(coeffs[5], 0.0),
        FitFunction::PowerLaw { .. } => panic!("expected a polynomial fit"),
    }
    assert_eq!(model.domain(), preset.domain());
    for raw in 0..1024 {
        assert_eq!(model.evaluate(raw), preset.evaluate(raw), "raw {}", raw);
    }
}

#[test]
fn extra_polynomial_coefficients_are_dropped() {
    let json = r#"{ "Polynomial": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 99.0] }"#;

    let fit: FitFunction = serde_json::from_str(json).unwrap();

    assert_eq!(fit, FitFunction::Polynomial([1.0; 6]));
}

#[test]
fn empty_polynomial_is_rejected() {
    assert!(serde_json::from_str::<FitFunction>(r#"{ "Polynomial": [] }"#).is_err());
}

#[test]
fn preset_snapshot_keeps_its_name() {
    let config = SensorConfig {
        channel: 1,
        filter_window: 3,
        calibration: CalibrationSource::Preset(Preset::Gp2y0a710k0f),
    };

    let sensor: DistanceSensor<_> = DistanceSensor::from_config(ScriptedSource::constant(0), &config);
    let json = serde_json::to_string(&sensor.config()).unwrap();

    assert!(json.contains("GP2Y0A710K0F"), "{}", json);
    assert_eq!(serde_json::from_str::<SensorConfig>(&json).unwrap(), config);
}

#[test]
fn unknown_preset_is_rejected() {
    let json = r#"{ "calibration": { "preset": "GP2D12" } }"#;
    assert!(serde_json::from_str::<SensorConfig>(json).is_err());
}

#[test]
fn snapshot_survives_json() {
    let config = SensorConfig {
        channel: 3,
        filter_window: 7,
        calibration: CalibrationSource::Fit {
            fit: FitFunction::polynomial(&[761.913, -8.13336, 4.18857E-2]),
            domain: Domain::new(61, 614),
        },
    };

    let sensor: DistanceSensor<_> = DistanceSensor::from_config(ScriptedSource::constant(0), &config);
    let json = serde_json::to_string(&sensor.config()).unwrap();
    let restored: SensorConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, config);
}
