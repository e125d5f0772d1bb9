//! Basic Distance Reading
//!
//! Simulates a GP2Y0A60SZLF on a 10-bit ADC while a target approaches from
//! 1.4 m to 10 cm, with an occasional noise spike, and prints raw and
//! smoothed distances side by side.
//!
//! ```bash
//! cargo run --example 01_basic_reading
//! ```

use irdist_core::{Channel, DistanceSensor, Preset, SampleSource};

/// Fake ADC: walks the raw value up (target approaching), spiking every 11th read
struct SimulatedAdc {
    tick: u16,
}

impl SampleSource for SimulatedAdc {
    fn read(&mut self, _channel: Channel) -> u16 {
        self.tick += 1;
        let raw = 40 + self.tick * 20;
        if self.tick % 11 == 0 {
            // Emitter pulse ripple coupling into the output
            raw / 3
        } else {
            raw
        }
    }
}

fn main() {
    println!("=== irdist - Basic Distance Reading ===\n");

    let calibration = Preset::Gp2y0a60szlf.calibration();
    let mut sensor: DistanceSensor<_> =
        DistanceSensor::with_preset(SimulatedAdc { tick: 0 }, 0, 5, Preset::Gp2y0a60szlf);

    println!(
        "Preset {} | analog range [{}, {}] | median window {}\n",
        Preset::Gp2y0a60szlf,
        calibration.domain().min(),
        calibration.domain().max(),
        sensor.filter_window()
    );
    println!("{:>5} {:>8} {:>10}", "raw", "fit mm", "median mm");

    let mut shadow = SimulatedAdc { tick: 0 };
    for _ in 0..40 {
        let raw = shadow.read(0);
        let unfiltered = calibration.evaluate(raw);
        let smoothed = sensor.get_distance();

        println!("{:>5} {:>8} {:>10}", raw, unfiltered, smoothed);
    }

    println!("\nSwitching to GP2Y0A51SK0F (power fit)...");
    sensor.set_model(Preset::Gp2y0a51sk0f);
    for _ in 0..5 {
        println!("{:>10} mm", sensor.get_distance());
    }
}
