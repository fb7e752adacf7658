//! Command-line parsing for echo-render.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use color_eyre::eyre::{bail, eyre, Result as EyreResult, WrapErr};
use echo_dsp::{DelayMode, DelayParams, DEFAULT_SAMPLE_RATE};

/// Fully resolved run configuration.
#[derive(Debug)]
pub struct Args {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sample_rate: u32,
    pub seed: Option<u64>,
    pub params: DelayParams,
}

/// Values given on the command line, applied on top of the preset.
#[derive(Debug, Default)]
struct Overrides {
    mode: Option<DelayMode>,
    delay_time: Option<f32>,
    feedback: Option<f32>,
    mix: Option<f32>,
    lp_cutoff: Option<f32>,
    timing_jitter: Option<f32>,
    pitch_drift: Option<f32>,
    hiss_level: Option<f32>,
    flutter_rate: Option<f32>,
    flutter_depth: Option<f32>,
    apply_flutter: bool,
}

impl Overrides {
    fn apply(self, mut params: DelayParams) -> DelayParams {
        if let Some(mode) = self.mode {
            params.mode = mode;
        }
        if let Some(v) = self.delay_time {
            params.delay_time = v;
        }
        if let Some(v) = self.feedback {
            params.feedback = v;
        }
        if let Some(v) = self.mix {
            params.mix = v;
        }
        if let Some(v) = self.lp_cutoff {
            params.lp_cutoff = v;
        }
        if let Some(v) = self.timing_jitter {
            params.timing_jitter = v;
        }
        if let Some(v) = self.pitch_drift {
            params.pitch_drift = v;
        }
        if let Some(v) = self.hiss_level {
            params.hiss_level = v;
        }
        if let Some(v) = self.flutter_rate {
            params.flutter_rate = v;
        }
        if let Some(v) = self.flutter_depth {
            params.flutter_depth = v;
        }
        if self.apply_flutter {
            params.flutter_in_read_offset = true;
        }
        params
    }
}

/// Parse process arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse<I>(args: I) -> EyreResult<Option<Args>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut preset: Option<PathBuf> = None;
    let mut sample_rate = DEFAULT_SAMPLE_RATE;
    let mut seed: Option<u64> = None;
    let mut overrides = Overrides::default();

    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| eyre!("missing value for {name}"))
        };

        match arg.as_str() {
            "--input" | "-i" => input = Some(PathBuf::from(value(arg.as_str())?)),
            "--output" | "-o" => output = Some(PathBuf::from(value(arg.as_str())?)),
            "--preset" | "-p" => preset = Some(PathBuf::from(value(arg.as_str())?)),
            "--sample-rate" | "-r" => sample_rate = number(&arg, value(arg.as_str())?)?,
            "--seed" => seed = Some(number(&arg, value(arg.as_str())?)?),
            "--mode" | "-m" => {
                overrides.mode = Some(value(arg.as_str())?.parse().map_err(|e: String| eyre!(e))?)
            }
            "--delay" | "-d" => overrides.delay_time = Some(number(&arg, value(arg.as_str())?)?),
            "--feedback" | "-f" => overrides.feedback = Some(number(&arg, value(arg.as_str())?)?),
            "--mix" => overrides.mix = Some(number(&arg, value(arg.as_str())?)?),
            "--cutoff" => overrides.lp_cutoff = Some(number(&arg, value(arg.as_str())?)?),
            "--jitter" => overrides.timing_jitter = Some(number(&arg, value(arg.as_str())?)?),
            "--drift" => overrides.pitch_drift = Some(number(&arg, value(arg.as_str())?)?),
            "--hiss" => overrides.hiss_level = Some(number(&arg, value(arg.as_str())?)?),
            "--flutter-rate" => overrides.flutter_rate = Some(number(&arg, value(arg.as_str())?)?),
            "--flutter-depth" => overrides.flutter_depth = Some(number(&arg, value(arg.as_str())?)?),
            "--apply-flutter" => overrides.apply_flutter = true,
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument: {other}"),
        }
    }

    let input = input.ok_or_else(|| eyre!("--input is required"))?;
    let output = output.ok_or_else(|| eyre!("--output is required"))?;

    let base = match preset {
        Some(path) => load_preset(&path)?,
        None => DelayParams::default(),
    };

    Ok(Some(Args {
        input,
        output,
        sample_rate,
        seed,
        params: overrides.apply(base),
    }))
}

fn number<T>(name: &str, raw: String) -> EyreResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .wrap_err_with(|| format!("invalid value `{raw}` for {name}"))
}

fn load_preset(path: &Path) -> EyreResult<DelayParams> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read preset {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("invalid preset {}", path.display()))
}

pub fn print_usage() {
    eprintln!(
        r#"echo-render - offline digital / tape echo

USAGE:
    echo-render -i <IN.wav> -o <OUT.wav> [OPTIONS]

OPTIONS:
    -i, --input <PATH>           Source WAV (any rate, any channel count)
    -o, --output <PATH>          Destination WAV (mono, 16-bit PCM)
    -p, --preset <PATH>          JSON parameter preset; flags below override it
    -r, --sample-rate <HZ>       Processing rate (default: 44100)
    -m, --mode <digital|analog>  Echo character (default: digital)
    -d, --delay <SECS>           Echo spacing (default: 0.25)
    -f, --feedback <AMOUNT>      Repeat level (default: 0.5)
        --mix <0..1>             Dry/wet balance (default: 0.5)
        --cutoff <HZ>            Analog darkening cutoff (default: 1500)
        --jitter <SECS>          Analog per-sample timing jitter (default: 0.05)
        --drift <SECS>           Analog slow drift depth (default: 0.1)
        --hiss <LEVEL>           Analog hiss level (default: 0.0001)
        --flutter-rate <HZ>      Flutter carrier rate (default: 0.5)
        --flutter-depth <SECS>   Flutter depth (default: 0.005)
        --apply-flutter          Let flutter move the analog read position
        --seed <N>               Seed the analog random source
    -h, --help                   Print this help

EXAMPLES:
    echo-render -i voice.wav -o slap.wav -d 0.12 -f 0.2
    echo-render -i voice.wav -o tape.wav -m analog -f 0.7 --mix 0.9 --cutoff 1000
    echo-render -i voice.wav -o tape.wav -p tape.json --seed 7"#
    );
}
