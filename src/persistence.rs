// File: src/persistence.rs
use crate::core::types::AnalysisResult;
use crate::error::{Result, TajweedError};
use bincode::Options;
use log::debug;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the archive through a temp file in the target directory, then
/// renames it into place so readers never see a partial file.
pub fn save_archive(results: &[AnalysisResult], path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, results)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| TajweedError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    debug!("Saved {} results to '{}'", results.len(), path.display());
    Ok(())
}

/// Loads a saved archive. A missing file is an empty archive.
/// Length prefixes are bounded by the file size, so a corrupt file is an
/// error rather than a huge allocation.
pub fn load_archive(path: &Path) -> Result<Vec<AnalysisResult>> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    // Same encoding as `bincode::serialize_into`.
    let results: Vec<AnalysisResult> = bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_limit(bytes.len() as u64)
        .deserialize(&bytes)?;
    Ok(results)
}

/// Appends one result to the archive at `path`.
pub fn append_to_archive(result: &AnalysisResult, path: &Path) -> Result<usize> {
    let mut results = load_archive(path)?;
    results.push(result.clone());
    save_archive(&results, path)?;
    Ok(results.len())
}

pub fn export_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::TajweedEngine;

    #[test]
    fn missing_archive_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_archive(&dir.path().join("none.bin")).unwrap().is_empty());
    }

    #[test]
    fn archive_survives_a_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("archive.bin");
        let engine = TajweedEngine::new();

        assert_eq!(append_to_archive(&engine.analyze_text("نب"), &path).unwrap(), 1);
        assert_eq!(append_to_archive(&engine.analyze_text("قط"), &path).unwrap(), 2);

        let loaded = load_archive(&path).unwrap();
        assert_eq!(loaded[0].normalized_text, "نب");
        assert_eq!(loaded[1].rules.len(), 2);
    }

    #[test]
    fn corrupt_archive_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.bin");
        fs::write(&path, [0xff; 3]).unwrap();
        assert!(matches!(load_archive(&path), Err(TajweedError::Bincode(_))));
    }

    #[test]
    fn forged_length_prefix_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.bin");
        let mut bytes = 1u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(&(u64::MAX / 2).to_le_bytes());
        fs::write(&path, bytes).unwrap();
        assert!(matches!(load_archive(&path), Err(TajweedError::Bincode(_))));
    }

    #[test]
    fn append_refuses_to_overwrite_a_corrupt_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.bin");
        let mut bytes = 1u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(&u64::MAX.to_le_bytes());
        fs::write(&path, &bytes).unwrap();

        let result = TajweedEngine::new().analyze_text("قل");
        assert!(append_to_archive(&result, &path).is_err());
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn json_export_names_fields() {
        let result = TajweedEngine::new().analyze_text("نب");
        let json = export_json(&result).unwrap();
        assert!(json.contains("\"normalized_text\": \"نب\""));
        assert!(json.contains("\"Iqlab\""));
    }
}
