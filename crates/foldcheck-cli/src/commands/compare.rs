use crate::cli::CompareArgs;
use crate::error::Result;
use crate::report;
use foldcheck::workflows::validate::{self, ValidationConfig};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

pub fn run(args: CompareArgs) -> Result<()> {
    let mut config = ValidationConfig::new(
        &args.predicted,
        &args.experimental,
        &args.predicted_contacts,
        &args.experimental_contacts,
    );
    config.hot_spot_min = args.hot_spot_min;

    let validation = validate::run(&config)?;

    if let Some(path) = &args.json {
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(file, &validation)?;
        info!(path = %path.display(), "JSON report written.");
    }

    if let Some(path) = &args.csv {
        report::export_type_metrics_csv(path, &validation)?;
        info!(path = %path.display(), "Per-type metrics CSV written.");
    }

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            report::write_validation_report(&mut writer, &validation)?;
            writer.flush()?;
            info!(path = %path.display(), "Report written.");
        }
        None => {
            let stdout = io::stdout();
            report::write_validation_report(&mut stdout.lock(), &validation)?;
        }
    }

    Ok(())
}
