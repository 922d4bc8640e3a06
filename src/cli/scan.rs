use crate::cli::ScanArgs;
use crate::config::{parse_tags, split_csv, ScanOptions};
use crate::discovery;
use crate::error::OutputError;
use crate::output;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub fn execute(args: ScanArgs) -> anyhow::Result<()> {
    let options = ScanOptions {
        root: args.root,
        ignore: split_csv(&args.ignore),
        min_score: args.min_score,
        tags: parse_tags(&args.tags)?,
    };

    discovery::check_root(&options)?;
    if let Some(out) = &args.out {
        check_out_dir(out)?;
    }

    let results = discovery::collect(&options)?;

    match &args.out {
        Some(path) => {
            let file = File::create(path).map_err(|e| OutputError::CreateFile {
                path: path.clone(),
                source: e,
            })?;
            let mut writer = BufWriter::new(file);
            write_report(&mut writer, results, args.format)?;
            info!("Report written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_report(&mut writer, results, args.format)?;
        }
    }

    Ok(())
}

fn write_report<W: Write>(
    writer: &mut W,
    results: Vec<crate::scoring::ScoredAnnotation>,
    format: output::ReportFormat,
) -> Result<(), OutputError> {
    output::render(writer, results, format)?;
    writer.flush()?;
    Ok(())
}

/// The parent of `--out` must already exist
fn check_out_dir(out: &Path) -> Result<(), OutputError> {
    let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    let meta = fs::metadata(dir).map_err(|e| OutputError::OutputDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    if !meta.is_dir() {
        return Err(OutputError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_in_current_dir_needs_no_check() {
        assert!(check_out_dir(Path::new("report.md")).is_ok());
    }

    #[test]
    fn test_out_dir_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_out_dir(&dir.path().join("report.md")).is_ok());
        assert!(matches!(
            check_out_dir(&dir.path().join("missing/report.md")),
            Err(OutputError::OutputDir { .. })
        ));

        let file = dir.path().join("plain");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            check_out_dir(&file.join("report.md")),
            Err(OutputError::NotADirectory(_))
        ));
    }
}
