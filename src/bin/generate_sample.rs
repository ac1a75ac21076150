use chrono::{Duration, NaiveDate};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Hourly observations over 90 days, Santos basin coordinates.
    let t0 = NaiveDate::from_ymd_opt(2020, 1, 1)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time");
    let n_hours: i64 = 90 * 24;

    let base_lat = -25.28;
    let base_lon = -44.93;

    std::fs::create_dir_all("data").expect("Failed to create data directory");
    let output_path = "data/sample_wind.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "date_time",
            "latitude",
            "longitude",
            "wspd1",
            "flag_wspd1",
            "wdir1",
            "flag_wdir1",
        ])
        .expect("Failed to write header");

    let mut direction: f64 = 120.0;

    for hour in 0..n_hours {
        let dt = t0 + Duration::hours(hour);

        // Diurnal cycle on top of a slow synoptic drift.
        let diurnal = 1.5 * (std::f64::consts::TAU * (hour % 24) as f64 / 24.0).sin();
        let synoptic = 2.0 * (std::f64::consts::TAU * hour as f64 / (24.0 * 7.0)).sin();
        let mut speed = (6.0 + diurnal + synoptic + rng.gauss(0.0, 1.0)).max(0.0);

        direction = (direction + rng.gauss(0.0, 8.0)).rem_euclid(360.0);

        // Sprinkle in the defects the quality filter has to reject:
        // sensor-dropout sentinel speeds and flagged readings.
        let mut flag_wspd = 0i64;
        let mut flag_wdir = 0i64;
        if hour % 97 == 0 {
            speed = -9999.0;
        } else if hour % 41 == 0 {
            flag_wspd = 4;
        } else if hour % 53 == 0 {
            flag_wdir = 4;
        }

        let lat = base_lat + rng.gauss(0.0, 0.001);
        let lon = base_lon + rng.gauss(0.0, 0.001);

        writer
            .write_record([
                dt.format("%Y-%m-%d %H:%M:%S").to_string(),
                format!("{lat:.5}"),
                format!("{lon:.5}"),
                format!("{speed:.2}"),
                flag_wspd.to_string(),
                format!("{direction:.1}"),
                flag_wdir.to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_hours} observations to {output_path}");
}
