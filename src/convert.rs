use std::collections::BTreeMap;
use std::io::BufRead;

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::sarif::{
    ArtifactLocation, Configuration, Location, Message, PhysicalLocation, Region, Rule,
    SarifResult,
};
use crate::types::Finding;

/// Rule identifier shared between results and rule metadata, e.g.
/// `FLAKE8/E501`. Also the deduplication key for rules.
pub fn rule_identifier(finding: &Finding) -> String {
    format!("{}/{}", finding.code, finding.name)
}

/// Normalize lintrunner's soft severities to a level SARIF consumers treat
/// as non-blocking. Unknown severities pass through verbatim.
pub fn map_severity(severity: &str) -> &str {
    match severity {
        "advice" | "disabled" => "warning",
        other => other,
    }
}

// 0 and absent both mean "unknown position" in lintrunner output.
fn position(value: Option<u64>) -> u64 {
    match value {
        Some(0) | None => 1,
        Some(n) => n,
    }
}

/// Project one finding into its SARIF result and the rule entry describing
/// its rule.
pub fn convert_finding(finding: &Finding) -> (SarifResult, Rule) {
    let id = rule_identifier(finding);
    let level = map_severity(&finding.severity).to_owned();

    let result = SarifResult {
        rule_id: id.clone(),
        level: level.clone(),
        message: Message {
            text: format!("{}\n{}", id, finding.description),
        },
        locations: vec![Location {
            physical_location: PhysicalLocation {
                artifact_location: ArtifactLocation {
                    uri: format!("file://{}", finding.path),
                },
                region: Region {
                    start_line: position(finding.line),
                    start_column: position(finding.char),
                },
            },
        }],
    };

    let first_line = finding.description.split('\n').next().unwrap_or_default();
    let rule = Rule {
        id: id.clone(),
        name: id.clone(),
        short_description: Message {
            text: format!("{id}: {first_line}"),
        },
        full_description: Message {
            text: format!("{}\n{}", id, finding.description),
        },
        default_configuration: Configuration { level },
    };

    (result, rule)
}

/// Read newline-delimited JSON findings and accumulate SARIF results in
/// input order plus rules keyed by identifier, last-write-wins. Any line
/// that fails to parse aborts the whole conversion.
pub fn convert<R: BufRead>(reader: R) -> Result<(Vec<SarifResult>, BTreeMap<String, Rule>)> {
    let mut results = Vec::new();
    let mut rules = BTreeMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let finding: Finding =
            serde_json::from_str(&line).map_err(|source| ConvertError::ParseLine {
                line: index + 1,
                source,
            })?;
        let (result, rule) = convert_finding(&finding);
        debug!(rule = %result.rule_id, line = index + 1, "converted finding");
        results.push(result);
        rules.insert(rule.id.clone(), rule);
    }

    Ok((results, rules))
}
