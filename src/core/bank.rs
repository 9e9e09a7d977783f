/// Template bank runtime: types, loading, keyword selection, validation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A canned response: the keyword that unlocks it and the body it yields.
///
/// Triggers must be lowercase. Prompts are lowercased before matching, so
/// a trigger containing uppercase letters can never match anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Template")]
pub struct Template {
    pub trigger: String,
    pub body: String,
}

/// An ordered catalogue of templates plus a fallback body.
///
/// Declaration order is the tie-break: when several triggers occur in the
/// same prompt, the earliest-declared template wins. The fallback body
/// never participates in matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Bank")]
pub struct TemplateBank {
    pub default_body: String,
    pub entries: Vec<Template>,
}

/// How serious a lint finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The entry violates the matching contract.
    Error,
    /// The entry is well-formed but can never be selected.
    Warning,
}

/// A single finding from `TemplateBank::lint`.
#[derive(Debug, Clone, PartialEq)]
pub struct LintIssue {
    pub severity: Severity,
    pub message: String,
}

impl LintIssue {
    fn error(message: String) -> LintIssue {
        LintIssue {
            severity: Severity::Error,
            message,
        }
    }

    fn warning(message: String) -> LintIssue {
        LintIssue {
            severity: Severity::Warning,
            message,
        }
    }
}

impl TemplateBank {
    /// Load a template bank from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<TemplateBank, BankError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a template bank from a RON string.
    pub fn parse_ron(input: &str) -> Result<TemplateBank, BankError> {
        Ok(ron::from_str(input)?)
    }

    /// Find the template selected by a prompt, if any.
    ///
    /// The prompt is lowercased, then entries are scanned in declaration
    /// order for the first whose trigger occurs as a substring.
    pub fn matched(&self, prompt: &str) -> Option<&Template> {
        let lowered = prompt.to_lowercase();
        self.entries
            .iter()
            .find(|template| lowered.contains(template.trigger.as_str()))
    }

    /// The body a prompt resolves to: the matched template's body, or the
    /// fallback when no trigger occurs in the prompt.
    pub fn body_for(&self, prompt: &str) -> &str {
        match self.matched(prompt) {
            Some(template) => &template.body,
            None => &self.default_body,
        }
    }

    /// Validate the bank, reporting entries that break the matching
    /// contract (errors) and entries that can never be selected (warnings).
    pub fn lint(&self) -> Vec<LintIssue> {
        let mut issues = Vec::new();

        if self.default_body.is_empty() {
            issues.push(LintIssue::error("fallback body is empty".to_string()));
        }

        let mut seen: HashSet<&str> = HashSet::new();

        for (index, template) in self.entries.iter().enumerate() {
            if template.trigger.is_empty() {
                issues.push(LintIssue::error(format!(
                    "entry {} has an empty trigger (it would match every prompt)",
                    index
                )));
                continue;
            }

            if template.trigger != template.trigger.to_lowercase() {
                issues.push(LintIssue::error(format!(
                    "trigger '{}' contains uppercase letters and can never match",
                    template.trigger
                )));
            }

            if template.body.is_empty() {
                issues.push(LintIssue::error(format!(
                    "trigger '{}' has an empty body",
                    template.trigger
                )));
            }

            if !seen.insert(template.trigger.as_str()) {
                issues.push(LintIssue::warning(format!(
                    "trigger '{}' is declared more than once (later copies never win)",
                    template.trigger
                )));
                continue;
            }

            // An earlier trigger occurring inside this one shadows it:
            // any prompt containing this trigger also contains the earlier
            // trigger, which wins the declaration-order tie-break.
            for earlier in &self.entries[..index] {
                if !earlier.trigger.is_empty()
                    && earlier.trigger != template.trigger
                    && template.trigger.contains(earlier.trigger.as_str())
                {
                    issues.push(LintIssue::warning(format!(
                        "trigger '{}' is shadowed by earlier trigger '{}'",
                        template.trigger, earlier.trigger
                    )));
                    break;
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bank() -> TemplateBank {
        TemplateBank {
            default_body: "fallback body".to_string(),
            entries: vec![
                Template {
                    trigger: "poem".to_string(),
                    body: "poem body".to_string(),
                },
                Template {
                    trigger: "story".to_string(),
                    body: "story body".to_string(),
                },
            ],
        }
    }

    #[test]
    fn matches_single_trigger() {
        let bank = sample_bank();
        let template = bank.matched("write me a poem please").unwrap();
        assert_eq!(template.trigger, "poem");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let bank = sample_bank();
        let template = bank.matched("Write Me A POEM Please").unwrap();
        assert_eq!(template.trigger, "poem");
    }

    #[test]
    fn earliest_declared_wins_tie_break() {
        let bank = sample_bank();
        // Both triggers occur; "story" comes first in the prompt but
        // "poem" is declared first in the bank.
        let template = bank.matched("a story and a poem").unwrap();
        assert_eq!(template.trigger, "poem");
    }

    #[test]
    fn no_match_returns_none() {
        let bank = sample_bank();
        assert!(bank.matched("completely unrelated request").is_none());
    }

    #[test]
    fn body_for_falls_back_to_default() {
        let bank = sample_bank();
        assert_eq!(bank.body_for("unrelated"), "fallback body");
        assert_eq!(bank.body_for("a poem"), "poem body");
    }

    #[test]
    fn fallback_never_matches() {
        let bank = TemplateBank {
            default_body: "the word poem appears here".to_string(),
            entries: vec![],
        };
        assert!(bank.matched("poem").is_none());
        assert_eq!(bank.body_for("poem"), "the word poem appears here");
    }

    #[test]
    fn trigger_matches_inside_words() {
        // Substring matching is intentional: "summarize" fires on
        // "summarizes" too.
        let bank = TemplateBank {
            default_body: "fallback".to_string(),
            entries: vec![Template {
                trigger: "summarize".to_string(),
                body: "summary body".to_string(),
            }],
        };
        assert!(bank.matched("this summarizes everything").is_some());
    }

    #[test]
    fn parse_ron_bank() {
        let input = r#"Bank(
            default_body: "fallback",
            entries: [
                Template(trigger: "alpha", body: "first"),
                Template(trigger: "beta", body: "second"),
            ],
        )"#;
        let bank = TemplateBank::parse_ron(input).unwrap();
        assert_eq!(bank.entries.len(), 2);
        assert_eq!(bank.entries[0].trigger, "alpha");
        assert_eq!(bank.entries[1].trigger, "beta");
        assert_eq!(bank.default_body, "fallback");
    }

    #[test]
    fn parse_ron_rejects_garbage() {
        assert!(TemplateBank::parse_ron("not ron at all {{{").is_err());
    }

    #[test]
    fn ron_round_trip() {
        let bank = sample_bank();
        let serialized = ron::to_string(&bank).unwrap();
        let deserialized: TemplateBank = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, bank);
    }

    #[test]
    fn lint_clean_bank() {
        assert!(sample_bank().lint().is_empty());
    }

    #[test]
    fn lint_flags_empty_trigger() {
        let bank = TemplateBank {
            default_body: "fallback".to_string(),
            entries: vec![Template {
                trigger: String::new(),
                body: "body".to_string(),
            }],
        };
        let issues = bank.lint();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn lint_flags_uppercase_trigger() {
        let bank = TemplateBank {
            default_body: "fallback".to_string(),
            entries: vec![Template {
                trigger: "Poem".to_string(),
                body: "body".to_string(),
            }],
        };
        let issues = bank.lint();
        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::Error && i.message.contains("uppercase")));
    }

    #[test]
    fn lint_flags_duplicate_trigger() {
        let bank = TemplateBank {
            default_body: "fallback".to_string(),
            entries: vec![
                Template {
                    trigger: "poem".to_string(),
                    body: "first".to_string(),
                },
                Template {
                    trigger: "poem".to_string(),
                    body: "second".to_string(),
                },
            ],
        };
        let issues = bank.lint();
        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::Warning && i.message.contains("more than once")));
    }

    #[test]
    fn lint_flags_shadowed_trigger() {
        let bank = TemplateBank {
            default_body: "fallback".to_string(),
            entries: vec![
                Template {
                    trigger: "summarize".to_string(),
                    body: "short".to_string(),
                },
                Template {
                    trigger: "summarize everything".to_string(),
                    body: "long".to_string(),
                },
            ],
        };
        let issues = bank.lint();
        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::Warning && i.message.contains("shadowed")));
    }

    #[test]
    fn lint_flags_empty_bodies() {
        let bank = TemplateBank {
            default_body: String::new(),
            entries: vec![Template {
                trigger: "poem".to_string(),
                body: String::new(),
            }],
        };
        let issues = bank.lint();
        let errors = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        assert_eq!(errors, 2);
    }
}
