use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::FilterError;

/// Patterns appended after the user rules on every run.
///
/// They suppress analyzer bookkeeping entries (virtual lockbud/audit
/// targets, placeholder messages), lockfile paths, and findings inside the
/// Rust toolchain's own library sources.
pub const BUILTIN_PATTERNS: [&str; 5] = [
    r"\(?virtual\)?\s*lockbud",
    r"\(?virtual\)?\s*audit",
    r"/Cargo\.lock$",
    r"\[lockbud\] Not supported to display yet\.",
    r"rustlib/src/rust/library",
];

/// Load the rule file and compile it into an ordered list of regexes,
/// with the builtin patterns appended last.
///
/// One rule token per line; blank lines are skipped. Order is insertion
/// order but has no semantic weight: a report is suppressed when any rule
/// matches its file path.
pub fn compile_rules(path: &Path) -> Result<Vec<Regex>, FilterError> {
    let text = fs::read_to_string(path).map_err(|source| FilterError::Config {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rules = Vec::new();
    for line in text.lines() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        rules.push(compile_token(token)?);
    }

    for pattern in BUILTIN_PATTERNS {
        rules.push(compile_pattern(pattern)?);
    }

    Ok(rules)
}

/// Compile one rule-file token.
///
/// A token with a `/` is a crate-relative path: the part before the first
/// `/` is a crate directory name whose trailing `-<version>` suffix is
/// stripped, and the match re-admits any version (`name-[^/]+/subpath`).
/// Everything except that single wildcard is escaped literally. A token
/// without `/` matches as a literal substring.
fn compile_token(token: &str) -> Result<Regex, FilterError> {
    let pattern = match token.split_once('/') {
        Some((prefix, subpath)) => {
            let crate_name = prefix.split('-').next().unwrap_or(prefix);
            format!(
                "{}-[^/]+/{}",
                regex::escape(crate_name),
                regex::escape(subpath)
            )
        }
        None => regex::escape(token),
    };
    compile_pattern(&pattern)
}

fn compile_pattern(pattern: &str) -> Result<Regex, FilterError> {
    Regex::new(pattern).map_err(|source| FilterError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}
