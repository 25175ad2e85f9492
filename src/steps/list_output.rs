//! Parser for `zig build --list-steps` output
//!
//! The listing is semi-structured text: a header, then one line per step,
//! indented by exactly two spaces, with the step name padded out to a column
//! before the description. Only the two-space-indented lines matter; headers,
//! blank lines and deeper-nested lines are skipped.

use super::StepRecord;

/// Extracts step records from the step-listing stdout, in appearance order.
///
/// The name is the token before the first whitespace of the trimmed line; the
/// description is the remainder with runs of whitespace collapsed to single
/// spaces. A line with no whitespace after the name yields an empty
/// description. Output with no matching lines yields an empty list, not an
/// error. Duplicate names keep the first occurrence.
pub fn parse_step_listing(output: &str) -> Vec<StepRecord> {
    let mut steps: Vec<StepRecord> = Vec::new();
    for line in output.lines() {
        let Some(candidate) = step_candidate(line) else {
            continue;
        };
        let mut tokens = candidate.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };
        if steps.iter().any(|s| s.name == name) {
            continue;
        }
        let description = tokens.collect::<Vec<_>>().join(" ");
        steps.push(StepRecord::new(name, description));
    }
    steps
}

/// A candidate step line starts with exactly two spaces followed by a
/// non-space character. Returns the trimmed line.
fn step_candidate(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("  ")?;
    if rest.is_empty() || rest.starts_with(' ') {
        return None;
    }
    Some(line.trim())
}
