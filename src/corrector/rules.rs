use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rules shipped with the binary, used when no rule file is configured.
/// Same format as a rule file: one `pattern,correction` pair per line.
const DEFAULT_RULES: &str = "\
# 의존 명사 앞은 띄어 쓴다
수있,수 있
수없,수 없
것같,것 같
할수,할 수
될수,될 수
지않,지 않
# 수 관형사 + 단위 명사
한번,한 번
두번,두 번
([0-9]+)개,$1 개
([0-9]+)명,$1 명
([0-9]+)번째,$1 번째
";

/// Failure while constructing a [`RuleSet`]. Any bad line aborts the whole
/// load; no partial rule application is attempted.
#[derive(Debug, Error)]
pub enum RuleLoadError {
    #[error("failed to read rule file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `pattern,correction`, found {found} field(s)")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid pattern")]
    Pattern {
        line: usize,
        #[source]
        source: regex::Error,
    },

    #[error("line {line}: correction references group ${group} but the pattern defines {defined}")]
    UnknownGroup {
        line: usize,
        group: usize,
        defined: usize,
    },
}

/// One spacing heuristic: a pattern and the correction template applied to
/// its matches. The template may reference the pattern's capture groups
/// with `$1`/`${1}`; `$$` is a literal dollar sign.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    correction: String,
}

impl Rule {
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn correction(&self) -> &str {
        &self.correction
    }

    /// Rewrite one matched slice through the correction template.
    pub fn apply(&self, matched: &str) -> String {
        self.pattern
            .replace(matched, self.correction.as_str())
            .into_owned()
    }
}

/// Ordered collection of spacing rules. Order matters: the corrector runs
/// the rules in definition order, and earlier rules take precedence when
/// their edits collide.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Load a rule definition file.
    pub fn load(path: &Path) -> Result<Self, RuleLoadError> {
        let content = fs::read_to_string(path).map_err(|source| RuleLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse a rule definition: one `pattern,correction` pair per line,
    /// `#` starts a comment, blank lines are skipped.
    pub fn parse(content: &str) -> Result<Self, RuleLoadError> {
        let mut rules = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed.split(',').collect();
            if fields.len() != 2 {
                return Err(RuleLoadError::FieldCount {
                    line,
                    found: fields.len(),
                });
            }

            let pattern = Regex::new(fields[0])
                .map_err(|source| RuleLoadError::Pattern { line, source })?;

            let correction = fields[1].to_string();
            if let Some(group) = undefined_group(&correction, pattern.captures_len()) {
                return Err(RuleLoadError::UnknownGroup {
                    line,
                    group,
                    defined: pattern.captures_len() - 1,
                });
            }

            rules.push(Rule {
                pattern,
                correction,
            });
        }

        Ok(Self { rules })
    }

    /// The rules shipped with the binary.
    pub fn defaults() -> Self {
        Self::parse(DEFAULT_RULES).expect("built-in rules are well-formed")
    }

    /// Rules in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// First `$N`/`${N}` reference in `template` that `captures_len` does not
/// cover. Group 0 is the whole match and always defined.
fn undefined_group(template: &str, captures_len: usize) -> Option<usize> {
    let bytes = template.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' {
            if i + 1 < bytes.len() && bytes[i + 1] == b'$' {
                i += 2;
                continue;
            }
            let rest = &template[i + 1..];
            let inner = rest.strip_prefix('{').unwrap_or(rest);
            let digits: String = inner.chars().take_while(|c| c.is_ascii_digit()).collect();
            if !digits.is_empty() {
                if let Ok(group) = digits.parse::<usize>() {
                    if group >= captures_len {
                        return Some(group);
                    }
                }
            }
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_rules_parse() {
        let rules = RuleSet::defaults();
        assert!(!rules.is_empty());
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let rules = RuleSet::parse("# comment\n\n수있,수 있\n").unwrap();
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_load_order_is_definition_order() {
        let rules = RuleSet::parse("한번,한 번\n수있,수 있\n").unwrap();
        let patterns: Vec<&str> = rules.iter().map(|r| r.pattern().as_str()).collect();
        assert_eq!(patterns, vec!["한번", "수있"]);
    }

    #[test]
    fn test_wrong_field_count_names_the_line() {
        let err = RuleSet::parse("수있,수 있\n한번\n").unwrap_err();
        match err {
            RuleLoadError::FieldCount { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_pattern_names_the_line() {
        let err = RuleSet::parse("[가-힣,오류\n").unwrap_err();
        match err {
            RuleLoadError::Pattern { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_template_group_must_exist() {
        let err = RuleSet::parse("수있,$1 있\n").unwrap_err();
        match err {
            RuleLoadError::UnknownGroup {
                line,
                group,
                defined,
            } => {
                assert_eq!(line, 1);
                assert_eq!(group, 1);
                assert_eq!(defined, 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_template_group_in_braces() {
        assert!(RuleSet::parse("([0-9]+)개,${1} 개\n").is_ok());
        assert!(RuleSet::parse("([0-9]+)개,${2} 개\n").is_err());
    }

    #[test]
    fn test_literal_dollar_is_not_a_group() {
        assert!(RuleSet::parse("수있,$$1 있\n").is_ok());
    }

    #[test]
    fn test_apply_substitutes_groups() {
        let rules = RuleSet::parse("([0-9]+)개,$1 개\n").unwrap();
        let rule = rules.iter().next().unwrap();
        assert_eq!(rule.apply("3개"), "3 개");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# demo").unwrap();
        writeln!(file, "수있,수 있").unwrap();

        let rules = RuleSet::load(file.path()).unwrap();
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = RuleSet::load(Path::new("/no/such/rules.txt")).unwrap_err();
        assert!(matches!(err, RuleLoadError::Io { .. }));
    }
}
