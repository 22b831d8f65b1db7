use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = positive_rate,
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 8.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        value_parser = positive_rate,
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "MILLIS",
        help = "Quiet period before a typed query is searched (overrides config)"
    )]
    pub debounce_ms: Option<u64>,
}

/// Rates become intervals (`1 / rate`), so they must be finite and above zero.
fn positive_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("{s} is not a positive number"))
    }
}
