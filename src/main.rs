use chirpcalc::{
    run_scenarios, Loadable, Real, RequestedSpecs, SpecError, SpecResult, Storable, Validation,
    ACQUISITION_SAMPLES,
};

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{error, info, Level};

/// Derives achievable FMCW chirp and frame parameters from requested specs.
#[derive(Parser, Debug)]
#[clap(name = "chirpcalc", version)]
struct Args {
    /// JSON file with the requested specs; flags override its values
    #[clap(long)]
    config: Option<PathBuf>,

    /// Range resolution (m)
    #[clap(long)]
    range_res: Option<Real>,

    /// Maximum range (m)
    #[clap(long)]
    range_max: Option<Real>,

    /// Maximum velocity (km/h)
    #[clap(long)]
    velocity_max: Option<Real>,

    /// Velocity resolution (km/h)
    #[clap(long)]
    velocity_res: Option<Real>,

    /// Angular resolution (degrees)
    #[clap(long)]
    angular_res: Option<Real>,

    /// Start frequency (Hz, or GHz with --ghz)
    #[clap(long)]
    frequency: Option<Real>,

    /// `--frequency` is given in GHz
    #[clap(long)]
    ghz: bool,

    /// Acquisition-sample counts to evaluate [default: 512,1024,2048]
    #[clap(long, value_delimiter = ',')]
    samples: Vec<u64>,

    /// Also reject zero and negative figures
    #[clap(long)]
    strict: bool,

    /// Write the JSON report here instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,

    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

impl Args {
    fn requested(&self) -> SpecResult<RequestedSpecs> {
        let file = match &self.config {
            Some(path) => Some(RequestedSpecs::from_file(path)?),
            None => None,
        };

        let pick =
            |flag: Option<Real>, field: &'static str, from_file: fn(&RequestedSpecs) -> Real| {
                flag.or_else(|| file.as_ref().map(from_file))
                    .ok_or(SpecError::MissingField { field })
            };

        // --ghz scales the flag only, config files are always in Hz
        let frequency_flag = self.frequency.map(|f| if self.ghz { f * 1e9 } else { f });

        Ok(RequestedSpecs {
            range_res: pick(self.range_res, "range_res", |r| r.range_res)?,
            range_max: pick(self.range_max, "range_max", |r| r.range_max)?,
            velocity_max: pick(self.velocity_max, "velocity_max", |r| r.velocity_max)?,
            velocity_res: pick(self.velocity_res, "velocity_res", |r| r.velocity_res)?,
            angular_res: pick(self.angular_res, "angular_res", |r| r.angular_res)?,
            frequency: pick(frequency_flag, "frequency", |r| r.frequency)?,
        })
    }

    fn validation(&self) -> Validation {
        if self.strict {
            Validation::Strict
        } else {
            Validation::Finite
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn run(args: &Args) -> SpecResult<()> {
    let requested = args.requested()?;
    let samples = if args.samples.is_empty() {
        &ACQUISITION_SAMPLES[..]
    } else {
        &args.samples[..]
    };

    info!("All parameters are based on taking IF_Max = 40 MHz");

    let reports = run_scenarios(&requested, samples, args.validation())?;

    match &args.output {
        Some(path) => {
            reports.to_file(path)?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            reports.to_writer(&mut handle)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
