//! Forward/inverse FFT demo: windows a test tone, transforms it there and
//! back, and writes every stage to a CSV log.

use std::f64::consts::PI;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use rs_sintbl_fft::{FftTables, Window, export, spectrum, window};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WindowArg {
    Hann,
    Rectangular,
}

impl From<WindowArg> for Window {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Hann => Window::Hann,
            WindowArg::Rectangular => Window::Rectangular,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Windowed FFT round trip of a test tone, logged as CSV")]
struct Config {
    /// Number of samples, a power of two
    #[arg(long, default_value_t = 64)]
    size: usize,

    /// Peak amplitude of the test tone
    #[arg(long, default_value_t = 6.0)]
    amplitude: f64,

    /// Tone frequency in cycles per frame; fractional values fall between bins
    #[arg(long, default_value_t = 3.0)]
    cycles: f64,

    #[arg(long, value_enum, default_value_t = WindowArg::Hann)]
    window: WindowArg,

    /// Destination of the CSV log
    #[arg(long, default_value = "Log.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    run(&config)
}

fn run(config: &Config) -> Result<()> {
    let n = config.size;
    if !n.is_power_of_two() {
        bail!("--size must be a power of two, got {n}");
    }

    let tables = FftTables::new(n).context("building fft tables")?;
    let fft = tables.engine();

    let mut weights = vec![0.0; n];
    Window::from(config.window).fill(&mut weights);
    let acf = window::amplitude_correction(&weights);
    tracing::info!(acf, window = ?config.window, "amplitude correction factor");

    // Test tone, real only
    let mut xw: Vec<f64> = (0..n)
        .map(|i| config.amplitude * (2.0 * PI * config.cycles * i as f64 / n as f64).cos())
        .collect();
    let yw = vec![0.0; n];
    window::apply(&weights, &mut xw)?;

    let (mut xf, mut yf) = (xw.clone(), yw.clone());
    fft.forward(&mut xf, &mut yf)?;

    if let Some(peak) = spectrum::peak_bin(&xf, &yf)? {
        tracing::info!(
            bin = peak,
            amplitude = spectrum::corrected_amplitude(peak, n, xf[peak], yf[peak], acf),
            "spectral peak"
        );
    }

    let (mut xr, mut yr) = (xf.clone(), yf.clone());
    fft.inverse(&mut xr, &mut yr)?;

    let max_error = xr
        .iter()
        .zip(&xw)
        .chain(yr.iter().zip(&yw))
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    tracing::info!(max_error, "round trip");

    let records = export::records((&xw, &yw), (&xf, &yf), (&xr, &yr), &weights)?;
    let file = File::create(&config.output)
        .with_context(|| format!("creating {}", config.output.display()))?;
    export::write_log(BufWriter::new(file), &records)
        .with_context(|| format!("writing {}", config.output.display()))?;

    tracing::info!(path = %config.output.display(), "fin.");
    Ok(())
}
