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

fn round_to(v: f64, step: f64) -> f64 {
    (v / step).round() * step
}

fn main() {
    let mut rng = SimpleRng::new(7);

    let brands: [(&str, &[&str]); 12] = [
        ("Wilson", &["Blade", "Clash", "Pro Staff", "Ultra"]),
        ("Head", &["Speed", "Radical", "Extreme", "Gravity"]),
        ("Babolat", &["Pure Drive", "Pure Aero", "Pure Strike"]),
        ("Yonex", &["EZONE", "VCORE", "Percept"]),
        ("Tecnifibre", &["TFight", "TF40"]),
        ("Dunlop", &["FX", "SX", "CX"]),
        ("Prince", &["Phantom", "Textreme Tour"]),
        ("Volkl", &["V-Cell", "C10"]),
        ("ProKennex", &["Ki Q+", "Black Ace"]),
        ("Pacific", &["X Tour"]),
        ("Gamma", &["RZR"]),
        ("Genesis", &["Xenon"]),
    ];
    let head_sizes = [95.0, 97.0, 98.0, 100.0, 104.0];

    std::fs::create_dir_all("data").expect("Failed to create data directory");
    let output_path = "data/racquets.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "Brand",
            "Model Name",
            "Price Num",
            "Head Size In2",
            "Weight G",
            "Swing Weight",
            "Flex RA",
            "Power Lv Num",
            "Length In",
            "Swing Sp Num",
        ])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for (brand, families) in brands {
        for family in families {
            for head in head_sizes {
                // Not every family ships every head size.
                if rng.next_f64() < 0.35 {
                    continue;
                }

                let weight = round_to(rng.gauss(300.0, 14.0).clamp(255.0, 345.0), 5.0);
                let swing_weight = round_to(weight + rng.gauss(18.0, 9.0), 1.0);
                let flex = round_to(rng.gauss(65.0, 4.0).clamp(55.0, 74.0), 1.0);

                // Bigger, lighter frames return more energy.
                let power = if head >= 104.0 || weight <= 280.0 {
                    3
                } else if head >= 100.0 {
                    2
                } else {
                    1
                };
                // Power frames target slower swings and vice versa.
                let swing_speed = 4 - power;
                let length = if rng.next_f64() < 0.15 { 27.5 } else { 27.0 };

                // Prices carry currency formatting to exercise normalization,
                // and a few are missing entirely.
                let price = if rng.next_f64() < 0.06 {
                    String::new()
                } else {
                    format!("${:.2}", rng.gauss(219.0, 45.0).clamp(89.0, 349.0))
                };

                writer
                    .write_record([
                        brand.to_string(),
                        format!("{family} {head:.0}"),
                        price,
                        format!("{head:.0}"),
                        format!("{weight:.0}"),
                        format!("{swing_weight:.0}"),
                        format!("{flex:.0}"),
                        power.to_string(),
                        format!("{length}"),
                        swing_speed.to_string(),
                    ])
                    .expect("Failed to write row");
                rows += 1;
            }
        }
    }

    // Source-data quirks the loader has to handle: a legacy "Pro" brand
    // label, a brandless row, and the known-bad Gamma row.
    for quirk in [
        ["Pro", "Ki 5", "$159.00", "100", "295", "312", "64", "2", "27", "2"],
        ["", "No brand", "$99.00", "102", "285", "305", "66", "3", "27", "1"],
        ["Gamma", "RZR Bubba", "$229.00", "137", "255", "412", "60", "3", "29", "1"],
    ] {
        writer.write_record(quirk).expect("Failed to write row");
        rows += 1;
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} racquets to {output_path}");
}
