use std::env;
use std::fs;

use anyhow::{bail, Context};
use ecg_pipeline::{EcgPipeline, HeartRateEstimator, PipelineConfig};

const PREVIEW_SAMPLES: usize = 10;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        bail!("usage: ecg-process <input> <output> [config.json]");
    };
    let config = match args.next() {
        Some(path) => {
            let text =
                fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?
        }
        None => PipelineConfig::default(),
    };

    let mut pipeline = EcgPipeline::new(config);
    let count = pipeline
        .load_from_path(&input)
        .with_context(|| format!("loading {input}"))?;
    println!("loaded {count} samples from {input}");

    pipeline.apply_filter();
    let peaks = pipeline.detect_peaks();
    println!("detected {} peaks", peaks.len());
    println!(
        "average heart rate: {:.1} bpm",
        HeartRateEstimator::bpm_from_peaks(&peaks)
    );

    pipeline
        .export_to_path(&output)
        .with_context(|| format!("exporting {output}"))?;
    println!("processed signal written to {output}");

    println!("first {PREVIEW_SAMPLES} samples:");
    println!("time\toriginal\tfiltered");
    for sample in pipeline.signal().samples().iter().take(PREVIEW_SAMPLES) {
        println!("{}\t{}\t{}", sample.time, sample.amplitude, sample.filtered);
    }
    Ok(())
}
