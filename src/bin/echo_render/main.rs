//! echo-render - offline digital / tape echo for WAV files
//!
//! Run with: cargo run --bin echo-render -- -i in.wav -o out.wav

mod args;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use echo_dsp::io::process_file;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = args::parse(std::env::args().skip(1))? else {
        args::print_usage();
        return Ok(());
    };

    args.params
        .validate(args.sample_rate)
        .wrap_err("invalid delay parameters")?;

    info!(
        mode = %args.params.mode,
        delay = args.params.delay_time,
        feedback = args.params.feedback,
        mix = args.params.mix,
        sample_rate = args.sample_rate,
        "rendering {} -> {}",
        args.input.display(),
        args.output.display()
    );

    let rendered = process_file(
        &args.input,
        &args.output,
        args.sample_rate,
        &args.params,
        args.seed,
    )
    .wrap_err_with(|| format!("failed to process {}", args.input.display()))?;

    info!(seconds = rendered.duration(), "done");
    Ok(())
}
