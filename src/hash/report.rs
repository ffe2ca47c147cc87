//! Per-file hash reports for the CLI

use super::digest::HashResult;
use super::file::{hash_file_with_progress, verify_hash};
use crate::config::{HashConfig, OutputFormat};
use crate::error::{HashError, Result};
use crate::progress::ProgressReporter;
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of hashing one file, optionally checked against an expected hash
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// File that was hashed
    pub path: PathBuf,
    /// Computed hash
    #[serde(flatten)]
    pub result: HashResult,
    /// Normalized expected hash, when verifying
    #[serde(skip)]
    pub expected: Option<String>,
    /// Verification outcome, only present when verifying
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<bool>,
}

impl FileReport {
    /// Render as `<hash>  <path>` text or a JSON object
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => {
                let mut out = format!("{}  {}", self.result.hash, self.path.display());
                if let Some(matches) = self.matches {
                    out.push_str(if matches { "\nMatch: YES" } else { "\nMatch: NO" });
                }
                Ok(out)
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Fail with [`HashError::IntegrityMismatch`] if verification failed
    pub fn ensure_matches(&self) -> Result<()> {
        match (&self.expected, self.matches) {
            (Some(expected), Some(false)) => Err(HashError::integrity_mismatch(
                &self.path,
                expected.as_str(),
                self.result.hash.as_str(),
            )),
            _ => Ok(()),
        }
    }
}

/// Hash the configured file and verify it when an expected hash is set.
///
/// A malformed expected hash is an error; a mismatch is recorded in the
/// report and surfaced by [`FileReport::ensure_matches`].
pub fn hash_with_config(config: &HashConfig, progress: &mut ProgressReporter) -> Result<FileReport> {
    let result = hash_file_with_progress(&config.file, config.algorithm, config.buffer_size, progress)?;

    let verification = config
        .expected
        .as_deref()
        .map(|expected| verify_hash(&result, expected))
        .transpose()?;

    Ok(FileReport {
        path: config.file.clone(),
        result,
        matches: verification.as_ref().map(|v| v.matches),
        expected: verification.map(|v| v.expected),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HashAlgorithm;
    use tempfile::TempDir;

    const ABC: &str = "4f8b42c22dd3729b519ba6f68d2da7cc5b2d606d05daed5ad5128cc03e6c6358";

    fn abc_config(dir: &TempDir, expected: Option<&str>) -> HashConfig {
        let file = dir.path().join("abc.txt");
        std::fs::write(&file, b"abc").unwrap();
        HashConfig {
            file,
            expected: expected.map(str::to_string),
            ..Default::default()
        }
    }

    fn report_for(config: &HashConfig) -> Result<FileReport> {
        hash_with_config(config, &mut ProgressReporter::disabled())
    }

    #[test]
    fn test_text_output() {
        let dir = TempDir::new().unwrap();
        let config = abc_config(&dir, None);
        let report = report_for(&config).unwrap();

        let text = report.render(OutputFormat::Text).unwrap();
        assert_eq!(text, format!("{}  {}", ABC, config.file.display()));
    }

    #[test]
    fn test_json_shape() {
        let dir = TempDir::new().unwrap();
        let config = abc_config(&dir, None);
        let report = report_for(&config).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["algorithm", "hash", "path", "size"]);
        assert_eq!(object["algorithm"], "dropbox");
        assert_eq!(object["hash"], ABC);
        assert_eq!(object["size"], 3);
    }

    #[test]
    fn test_json_includes_match_when_verifying() {
        let dir = TempDir::new().unwrap();
        let config = abc_config(&dir, Some(&ABC.to_uppercase()));
        let report = report_for(&config).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["matches"], true);
        assert!(json.get("expected").is_none());
        assert!(report.ensure_matches().is_ok());

        let text = report.render(OutputFormat::Text).unwrap();
        assert!(text.ends_with("\nMatch: YES"));
    }

    #[test]
    fn test_mismatch_is_an_error() {
        let dir = TempDir::new().unwrap();
        let wrong = "00".repeat(32);
        let config = abc_config(&dir, Some(&wrong));
        let report = report_for(&config).unwrap();

        assert_eq!(report.matches, Some(false));
        assert!(report.render(OutputFormat::Text).unwrap().ends_with("\nMatch: NO"));

        match report.ensure_matches() {
            Err(HashError::IntegrityMismatch { path, expected, actual }) => {
                assert_eq!(path, config.file);
                assert_eq!(expected, wrong);
                assert_eq!(actual, ABC);
            }
            other => panic!("expected IntegrityMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_expected_hash() {
        let dir = TempDir::new().unwrap();
        let config = HashConfig {
            algorithm: HashAlgorithm::XXHash64,
            ..abc_config(&dir, Some("abcd"))
        };

        let err = report_for(&config).unwrap_err();
        assert!(matches!(err, HashError::InvalidDigest(_)));
    }
}
