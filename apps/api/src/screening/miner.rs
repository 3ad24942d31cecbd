//! Feature mining: skill keywords and organization entities from raw résumé text.

use std::collections::BTreeSet;

use crate::screening::entities::EntityRecognizer;

/// Skills recognized by the miner. Matching is exact and single-token, so
/// multi-word skills such as "machine learning" are never detected.
pub const KNOWN_SKILLS: &[&str] = &[
    "python", "java", "sql", "ml", "ai", "react", "node", "c++", "aws", "docker",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinedFeatures {
    pub skills: BTreeSet<String>,
    pub companies: BTreeSet<String>,
}

pub fn mine_features(text: &str, recognizer: &dyn EntityRecognizer) -> MinedFeatures {
    MinedFeatures {
        skills: match_skills(text),
        companies: recognizer.organizations(text),
    }
}

/// Case-folded tokens of `text` that exactly equal a known skill.
pub fn match_skills(text: &str) -> BTreeSet<String> {
    tokenize(text)
        .map(|t| t.to_lowercase())
        .filter(|t| KNOWN_SKILLS.contains(&t.as_str()))
        .collect()
}

/// Splits on whitespace, hyphens and list punctuation, then strips trailing
/// sentence punctuation. `+` and `#` are word characters so "C++" stays one token.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        c.is_whitespace() || matches!(c, '-' | '/' | ',' | ';' | '(' | ')' | '[' | ']' | '{' | '}' | '"' | '\'' | '|')
    })
    .map(|t| t.trim_end_matches(['.', ':', '!', '?']))
    .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::entities::HeuristicRecognizer;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matches_case_folded_tokens() {
        assert_eq!(match_skills("Python, SQL and Docker."), set(&["docker", "python", "sql"]));
    }

    #[test]
    fn test_cpp_survives_tokenization() {
        assert_eq!(match_skills("Languages: C++/Java"), set(&["c++", "java"]));
    }

    #[test]
    fn test_hyphenated_skill_is_matched() {
        assert_eq!(
            match_skills("Built Python-based services and AWS-certified, React-Native apps"),
            set(&["aws", "python", "react"])
        );
    }

    #[test]
    fn test_multi_word_skill_not_detected() {
        assert!(match_skills("machine learning").is_empty());
    }

    #[test]
    fn test_partial_tokens_do_not_match() {
        // "javascript" and "nodejs" are not exact matches for "java" / "node".
        assert!(match_skills("javascript nodejs mysql").is_empty());
    }

    #[test]
    fn test_repeated_skill_counted_once() {
        assert_eq!(match_skills("aws AWS Aws").len(), 1);
    }

    #[test]
    fn test_empty_text_yields_empty_sets() {
        let mined = mine_features("", &HeuristicRecognizer);
        assert_eq!(mined, MinedFeatures::default());
    }

    #[test]
    fn test_mine_features_combines_both_passes() {
        let mined = mine_features("Data engineer at Umbrella Labs using python", &HeuristicRecognizer);
        assert_eq!(mined.skills, set(&["python"]));
        assert_eq!(mined.companies, set(&["Umbrella Labs"]));
    }
}
