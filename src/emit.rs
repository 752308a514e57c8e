use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::sarif::{self, Document, Driver, Rule, Run, SarifResult, Tool};

/// Assemble the full SARIF document. Rules come out in identifier order so
/// identical input always serializes to identical bytes.
pub fn build_document(results: Vec<SarifResult>, rules: BTreeMap<String, Rule>) -> Document {
    Document {
        schema: sarif::SCHEMA_URL,
        version: sarif::SARIF_VERSION,
        runs: vec![Run {
            tool: Tool {
                driver: Driver {
                    name: sarif::DRIVER_NAME,
                    rules: rules.into_values().collect(),
                },
            },
            results,
        }],
    }
}

/// Serialize the document as compact JSON, creating the output's parent
/// directories if needed. Overwrites any existing file.
pub fn write_document(document: &Document, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let rendered = serde_json::to_string(document)?;
    fs::write(output, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_document_has_schema_version_and_driver() {
        let document = build_document(Vec::new(), BTreeMap::new());
        let rendered = serde_json::to_string(&document).expect("document should serialize");
        assert!(rendered.contains(r#""$schema":"https://json.schemastore.org/sarif-2.1.0.json""#));
        assert!(rendered.contains(r#""version":"2.1.0""#));
        assert!(rendered.contains(r#""name":"lintrunner""#));
        assert!(rendered.contains(r#""rules":[]"#));
        assert!(rendered.contains(r#""results":[]"#));
    }

    #[test]
    fn write_document_creates_missing_parent_directories() {
        let dir = TempDir::new().expect("temp dir should be created");
        let output = dir.path().join("nested/report/out.sarif");
        let document = build_document(Vec::new(), BTreeMap::new());
        write_document(&document, &output).expect("write should succeed");
        let written = std::fs::read_to_string(&output).expect("output should exist");
        assert!(written.starts_with('{'));
    }

    #[test]
    fn write_document_overwrites_existing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let output = dir.path().join("out.sarif");
        std::fs::write(&output, "stale").expect("seed file should write");
        let document = build_document(Vec::new(), BTreeMap::new());
        write_document(&document, &output).expect("write should succeed");
        let written = std::fs::read_to_string(&output).expect("output should exist");
        assert!(!written.contains("stale"));
    }
}
