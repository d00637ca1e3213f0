use crate::cli::AnalyzeArgs;
use crate::error::Result;
use crate::report;
use foldcheck::interactions::contact_map::parse_contact_map_path;
use foldcheck::interactions::profile::profile;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let interactions = parse_contact_map_path(&args.input)?;
    info!(
        count = interactions.len(),
        input = %args.input.display(),
        "Contact map parsed."
    );

    let result = profile(&interactions);

    if let Some(path) = &args.csv {
        report::export_csv(path, &interactions)?;
        info!(path = %path.display(), "CSV export written.");
    }

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            report::write_analysis_report(&mut writer, &result, args.hot_spot_min)?;
            writer.flush()?;
            info!(path = %path.display(), "Report written.");
        }
        None => {
            let stdout = io::stdout();
            report::write_analysis_report(&mut stdout.lock(), &result, args.hot_spot_min)?;
        }
    }

    Ok(())
}
