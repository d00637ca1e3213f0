use crate::cli::FetchArgs;
use crate::error::{CliError, Result};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

const DOWNLOAD_BASE_URL: &str = "https://files.rcsb.org/download";

pub fn run(args: FetchArgs) -> Result<()> {
    let id = normalize_id(&args.id)?;
    let extension = args.format.extension();
    let url = format!(
        "{}/{}.{}.gz",
        DOWNLOAD_BASE_URL,
        id.to_uppercase(),
        extension
    );

    fs::create_dir_all(&args.output_dir)?;
    let output_path = args.output_dir.join(format!("{}.{}", id, extension));

    info!(%url, "Requesting structure from the RCSB archive.");
    let response = reqwest::blocking::get(&url)?.error_for_status()?;

    let bytes = save_decompressed(response, &output_path)?;
    info!(
        path = %output_path.display(),
        bytes,
        "Structure downloaded and decompressed."
    );
    println!("Saved {}", output_path.display());

    Ok(())
}

/// Decompresses the gzip stream into `output_path` via a sibling `.part`
/// file, renamed into place only after the stream ends cleanly. A transfer
/// that dies midway must not leave a truncated file that passes for a valid
/// structure.
fn save_decompressed(reader: impl Read, output_path: &Path) -> Result<u64> {
    let mut tmp = output_path.as_os_str().to_owned();
    tmp.push(".part");
    let tmp_path = PathBuf::from(tmp);

    let copied = (|| {
        let mut file = BufWriter::new(File::create(&tmp_path)?);
        let bytes = io::copy(&mut GzDecoder::new(reader), &mut file)?;
        file.flush()?;
        Ok::<u64, CliError>(bytes)
    })();

    match copied {
        Ok(bytes) => {
            fs::rename(&tmp_path, output_path)?;
            Ok(bytes)
        }
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            Err(e)
        }
    }
}

/// Accepts a four-character alphanumeric PDB id, case-insensitively.
fn normalize_id(raw: &str) -> Result<String> {
    let id = raw.trim().to_lowercase();
    if id.len() != 4 || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CliError::Argument(format!(
            "'{}' is not a valid PDB identifier (expected 4 alphanumeric characters)",
            raw
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn ids_are_trimmed_and_lowercased() {
        assert_eq!(normalize_id(" 6M0J ").unwrap(), "6m0j");
        assert_eq!(normalize_id("1abc").unwrap(), "1abc");
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(matches!(normalize_id("6M0"), Err(CliError::Argument(_))));
        assert!(matches!(normalize_id("6M0JX"), Err(CliError::Argument(_))));
        assert!(matches!(normalize_id("6M-J"), Err(CliError::Argument(_))));
        assert!(matches!(normalize_id(""), Err(CliError::Argument(_))));
    }

    #[test]
    fn decompressed_content_lands_at_the_final_path() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("1abc.pdb");
        let content = b"ATOM      1  CA  ALA A   1       0.000   0.000   0.000\nEND\n";

        let bytes = save_decompressed(gzip(content).as_slice(), &output).unwrap();

        assert_eq!(bytes, content.len() as u64);
        assert_eq!(fs::read(&output).unwrap(), content);
        assert!(!dir.path().join("1abc.pdb.part").exists());
    }

    #[test]
    fn truncated_stream_leaves_no_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("1abc.pdb");
        let content = vec![b'x'; 4096];
        let mut payload = gzip(&content);
        payload.truncate(payload.len() / 2);

        let result = save_decompressed(payload.as_slice(), &output);

        assert!(result.is_err());
        assert!(!output.exists());
        assert!(!dir.path().join("1abc.pdb.part").exists());
    }
}
