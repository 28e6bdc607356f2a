use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::models::{AnalysisDocument, Entry, Package, Report};

/// Map from a seen file path to the packages that reported on it.
///
/// Only the first-seen package's entry survives into the output; the owner
/// set is kept as a diagnostic so shared-dependency attribution is not lost
/// inside this pass.
type FileOwners = HashMap<String, HashSet<String>>;

/// Rebuild `document.data`, dropping every report whose file path matches
/// one of `rules` and every package left without a first-seen file path.
///
/// No-op when the document has no `data` field.
pub fn apply_filter(document: &mut AnalysisDocument, rules: &[Regex]) {
    let Some(entries) = document.data.take() else {
        return;
    };

    let (mut survivors, _owners) = collect_survivors(&entries, rules);

    // Lockfile findings are cross-cutting advisories, not per-package noise:
    // the first one anywhere in the original (unfiltered) report lists is
    // passed through as a bare report, and the scan stops there.
    if let Some(report) = first_lockfile_report(&entries) {
        survivors.push(Entry::Report(report.clone()));
    }

    document.data = Some(survivors);
}

/// Walk packages in order and collect the surviving entries, deduplicating
/// by file path across the whole run.
///
/// A package is appended (with `raw_reports` replaced by its filtered list
/// and `count` recomputed) the first time one of its filtered reports names
/// a file path nobody has claimed yet. Later sightings of the same path,
/// from any package, only extend that path's owner set.
fn collect_survivors(entries: &[Entry], rules: &[Regex]) -> (Vec<Entry>, FileOwners) {
    let mut owners: FileOwners = HashMap::new();
    let mut survivors: Vec<Entry> = Vec::new();

    for entry in entries {
        let Entry::Package(package) = entry else {
            continue;
        };

        let filtered: Vec<Report> = package
            .raw_reports
            .iter()
            .filter(|report| !rules.iter().any(|rule| rule.is_match(report.file_path())))
            .cloned()
            .collect();

        for report in &filtered {
            let file = report.file_path().to_string();
            if let Some(set) = owners.get_mut(&file) {
                set.insert(package.name().to_string());
                continue;
            }
            owners.insert(file, HashSet::from([package.name().to_string()]));

            let survivor = Entry::Package(retained(package, &filtered));
            // A package with several first-seen files would be appended once
            // per file otherwise; dedup is by value, not identity.
            if !survivors.contains(&survivor) {
                survivors.push(survivor);
            }
        }
    }

    (survivors, owners)
}

fn retained(package: &Package, filtered: &[Report]) -> Package {
    let mut kept = package.clone();
    kept.raw_reports = filtered.to_vec();
    kept.count = Some(filtered.len() as u64);
    kept
}

/// First report in original order whose file path mentions `Cargo.lock`,
/// checked against the unfiltered report lists.
fn first_lockfile_report(entries: &[Entry]) -> Option<&Report> {
    for entry in entries {
        let Entry::Package(package) = entry else {
            continue;
        };
        for report in &package.raw_reports {
            if report.file_path().contains("Cargo.lock") {
                return Some(report);
            }
        }
    }
    None
}
