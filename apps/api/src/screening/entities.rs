//! Organization recognition over résumé text.
//!
//! `HeuristicRecognizer` is the built-in backend: it reads capitalization and a
//! short list of corporate suffixes instead of running a statistical model.

use std::collections::BTreeSet;

/// Labels organization spans in free text.
pub trait EntityRecognizer: Send + Sync {
    fn organizations(&self, text: &str) -> BTreeSet<String>;
}

const ORG_SUFFIXES: &[&str] = &[
    "inc",
    "corp",
    "corporation",
    "co",
    "company",
    "llc",
    "llp",
    "ltd",
    "limited",
    "plc",
    "gmbh",
    "ag",
    "technologies",
    "technology",
    "labs",
    "systems",
    "solutions",
    "software",
    "group",
    "consulting",
    "partners",
    "bank",
    "university",
    "institute",
    "college",
];

const ABBREVIATED_SUFFIXES: &[&str] = &["Inc", "Co", "Corp", "Ltd"];

/// Words that introduce an employer: "Engineer at Acme Cloud".
const EMPLOYER_MARKERS: &[&str] = &["at", "@"];

/// Lowercase connectors allowed inside a capitalized run ("Bank of America").
const CONNECTORS: &[&str] = &["of", "&", "and"];

#[derive(Debug, Default, Clone)]
pub struct HeuristicRecognizer;

impl EntityRecognizer for HeuristicRecognizer {
    fn organizations(&self, text: &str) -> BTreeSet<String> {
        let mut orgs = BTreeSet::new();
        for line in text.lines() {
            scan_line(line, &mut orgs);
        }
        orgs
    }
}

fn scan_line(line: &str, orgs: &mut BTreeSet<String>) {
    let words: Vec<&str> = line.split_whitespace().collect();
    let mut i = 0;

    while i < words.len() {
        let after_marker = i > 0 && EMPLOYER_MARKERS.contains(&normalize(words[i - 1]).as_str());

        if !is_capitalized(words[i]) {
            i += 1;
            continue;
        }

        // Collect the capitalized run starting at i; it ends at the first
        // non-capitalized word or at a word carrying trailing punctuation.
        let mut end = i;
        loop {
            let closes = ends_clause(words[end]);
            if closes || end + 1 >= words.len() {
                break;
            }
            let next = words[end + 1];
            if is_capitalized(next) {
                end += 1;
            } else if CONNECTORS.contains(&next)
                && end + 2 < words.len()
                && is_capitalized(words[end + 2])
            {
                end += 2;
            } else {
                break;
            }
        }

        let run = &words[i..=end];
        if let Some(span) = suffix_span(run) {
            orgs.insert(span);
        } else if after_marker {
            orgs.insert(join_span(run));
        }
        i = end + 1;
    }
}

/// Shortest prefix of the run that ends in a corporate suffix, if any.
fn suffix_span(run: &[&str]) -> Option<String> {
    // A lone suffix word ("Software") is not an organization on its own.
    let pos = run
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, w)| ORG_SUFFIXES.contains(&normalize(w).as_str()))
        .map(|(idx, _)| idx)?;
    Some(join_span(&run[..=pos]))
}

fn join_span(words: &[&str]) -> String {
    let joined = words.join(" ");
    let trimmed = joined.trim_end_matches(|c: char| matches!(c, ',' | ';' | ':' | ')' | '(' | '|'));
    match trimmed.strip_suffix('.') {
        // Keep the period of abbreviated suffixes ("Globex Inc.").
        Some(stem) if !ABBREVIATED_SUFFIXES.iter().any(|a| stem.ends_with(a)) => stem.to_string(),
        _ => trimmed.to_string(),
    }
}

fn normalize(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '@' && c != '&')
        .to_lowercase()
}

fn is_capitalized(word: &str) -> bool {
    word.trim_start_matches(|c: char| c == '(' || c == '"')
        .chars()
        .next()
        .map(|c| c.is_uppercase())
        .unwrap_or(false)
}

fn ends_clause(word: &str) -> bool {
    word.ends_with(',') || word.ends_with(';') || word.ends_with(':') || word.ends_with('|')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orgs(text: &str) -> BTreeSet<String> {
        HeuristicRecognizer.organizations(text)
    }

    #[test]
    fn test_suffix_marks_organization() {
        let found = orgs("Senior engineer, Initech Corp (2019 - 2022)");
        assert!(found.contains("Initech Corp"), "{found:?}");
    }

    #[test]
    fn test_employer_marker_marks_organization() {
        let found = orgs("Backend developer at Acme Cloud, building APIs");
        assert_eq!(found, BTreeSet::from(["Acme Cloud".to_string()]));
    }

    #[test]
    fn test_connector_inside_name() {
        let found = orgs("Analyst at Bank of America");
        assert!(found.contains("Bank of America"), "{found:?}");
    }

    #[test]
    fn test_university_suffix() {
        let found = orgs("B.Sc. Computer Science, Stanford University");
        assert!(found.contains("Stanford University"), "{found:?}");
    }

    #[test]
    fn test_template_sentence_has_no_organizations() {
        let found = orgs(
            "Experienced software engineer with strong skills in Python Java and machine learning",
        );
        assert!(found.is_empty(), "{found:?}");
    }

    #[test]
    fn test_abbreviation_keeps_period() {
        let found = orgs("Worked for Globex Inc. as a contractor");
        assert!(found.contains("Globex Inc."), "{found:?}");
    }

    #[test]
    fn test_empty_text() {
        assert!(orgs("").is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let found = orgs("Intern at Globex\nEngineer at Globex");
        assert_eq!(found.len(), 1);
    }
}
