extern crate chirpcalc;

use chirpcalc::{Loadable, RadarSpec, RequestedSpecs, ACQUISITION_SAMPLES};

use std::path::Path;

fn main() {
    let config = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/automotive_77ghz.json");
    let requested = RequestedSpecs::from_file(&config).expect("Could not read config file");

    println!("All parameters are based on taking IF_Max = 40 MHz");

    for &samples in ACQUISITION_SAMPLES.iter() {
        let spec = RadarSpec::new(samples, &requested);
        let results = spec.results();

        println!(
            "samples={}: bandwidth={:.3} MHz, range_max={:.1} m, range_res={:.3} m, chirp={:.2} us, chirps={}, tx/rx={}/{}, memory={:.1} kb",
            samples,
            results.chirp_frequency_params.bandwidth,
            results.obtained_params.range_max,
            results.obtained_params.range_res,
            results.chirp_timing_params.chirp_time,
            results.frame_params.no_of_chirps,
            results.antennas.tx,
            results.antennas.rx,
            results.memory_required,
        );

        for row in spec.if_bandwidth_table() {
            println!(
                "    chirp {:>6.0} MHz -> IF {:>8.3} MHz",
                row.chirp_bandwidth, row.if_bandwidth
            );
        }
    }
}
