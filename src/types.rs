use serde::Deserialize;

/// One lint finding as produced by `lintrunner --output=json`, one per input
/// line. `line` and `char` are 1-based; `0`, `null`, and absent all mean
/// "position unknown". Every other field is required and its absence makes
/// the record malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct Finding {
    pub path: String,
    #[serde(default)]
    pub line: Option<u64>,
    #[serde(default)]
    pub char: Option<u64>,
    pub code: String,
    pub severity: String,
    pub name: String,
    pub description: String,
}
