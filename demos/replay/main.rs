//! Gesture replay — feeds synthetic strokes through the recorder and the
//! recognizer and logs what each one triggers.
//!
//! ```text
//! main.rs     — entry point (this file)
//! strokes.rs  — named synthetic strokes
//! ```
//!
//! Usage:
//! ```text
//! cargo run --example replay                      # every stroke, default chain
//! cargo run --example replay -- checkmark         # one stroke
//! cargo run --example replay -- --checkmarks      # include V detectors
//! RUST_LOG=gestura=trace cargo run --example replay -- tall_v
//! ```

mod strokes;

use gestura::recognize::checkmark_chain;
use gestura::{
    GestureConfig, GestureMap, PreviewChange, Recognize, Result, Sample, StrokeRecorder,
};
use tracing::{info, warn};

/// Stored overrides merged over the default bindings.
const SETTINGS_MAP: &str = r#"{ "V": "CLOSE_ALL_TABS", "INV_V": "RESTORE_CLOSED_TAB" }"#;

/// Stored thresholds; missing keys keep their defaults.
const SETTINGS_CONFIG: &str = r#"{ "maxTimeMs": 1500, "vRelaxed": true }"#;

/// Parsed CLI arguments.
struct CliArgs {
    /// Use the checkmark chain instead of the default one.
    checkmarks: bool,
    /// Stroke to replay; all of them when absent.
    stroke: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    CliArgs {
        checkmarks: args.iter().any(|a| a == "--checkmarks"),
        stroke: args.iter().find(|a| !a.starts_with('-')).cloned(),
    }
}

/// Replays `samples` as pointer events, logging preview changes, and returns
/// the recorded stream.
fn record(
    recorder: &mut StrokeRecorder,
    samples: &[Sample],
    config: GestureConfig,
    map: &GestureMap,
) -> Vec<Sample> {
    let [first, moves @ .., last] = samples else {
        return samples.to_vec();
    };
    recorder.begin(*first, config);
    for sample in moves {
        if recorder.push(*sample) {
            match recorder.preview(sample.t, map) {
                Some(PreviewChange::Show(r)) => info!(t = sample.t, preview = r.label(), "preview"),
                Some(PreviewChange::Clear) => info!(t = sample.t, "preview cleared"),
                None => {}
            }
        }
    }
    recorder.finish(*last).unwrap_or_default()
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for gestura and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=gestura=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("replay=info".parse().unwrap_or_default())
        .add_directive("gestura=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = parse_args();
    let config = GestureConfig::from_json(SETTINGS_CONFIG)?.sanitized();
    config.validate()?;
    let map = GestureMap::from_json(SETTINGS_MAP)?;
    let chain = if args.checkmarks {
        checkmark_chain(&config)
    } else {
        gestura::recognize::DEFAULT_CHAIN
    };

    let names: Vec<&str> = match &args.stroke {
        Some(name) => vec![name.as_str()],
        None => strokes::STROKES.to_vec(),
    };

    let mut recorder = StrokeRecorder::new().with_chain(chain);
    for name in names {
        let Some(samples) = strokes::build(name) else {
            warn!(name, available = ?strokes::STROKES, "unknown stroke");
            continue;
        };
        let stream = record(&mut recorder, &samples, config, &map);
        match Recognize::new(&stream).with_chain(chain).execute(&config, &map) {
            Some(r) => info!(
                stroke = name,
                samples = stream.len(),
                gesture = %r.key,
                arrows = %r.key.arrows(),
                action = r.label(),
                "recognized"
            ),
            None => info!(stroke = name, samples = stream.len(), "no gesture"),
        }
    }
    Ok(())
}
