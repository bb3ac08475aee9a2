//! Discovery of `gh_*` functions in the helper library.
//!
//! Matching is textual, not a shell parse: a trimmed line that starts with
//! [`FUNCTION_PREFIX`] and contains `()` anywhere names a function. Comments
//! or strings that happen to match are treated as functions too, and the
//! extracted name is used as-is.

use log::trace;
use std::fmt;

/// Prefix shared by every helper function that gets a wrapper.
pub const FUNCTION_PREFIX: &str = "gh_";

const PARAMETER_LIST: &str = "()";

/// Name of a helper function discovered in the library.
///
/// No validation is applied; whatever text precedes the first `(` on the
/// matching line becomes the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionName(String);

impl FunctionName {
    /// Get the function name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FunctionName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Return the function named on `line`, if the line is a `gh_*` signature.
#[must_use]
pub fn function_name(line: &str) -> Option<FunctionName> {
    let line = line.trim();
    if !line.starts_with(FUNCTION_PREFIX) || !line.contains(PARAMETER_LIST) {
        return None;
    }
    line.split('(').next().map(FunctionName::from)
}

/// Scan `contents` line by line and return every matching function name in
/// line order. Repeated names are returned once per occurrence.
#[must_use]
pub fn discover_functions(contents: &str) -> Vec<FunctionName> {
    contents
        .split('\n')
        .filter_map(|line| {
            let name = function_name(line);
            if name.is_none() && line.trim_start().starts_with(FUNCTION_PREFIX) {
                trace!("skipping {FUNCTION_PREFIX} line without parameter list: {line:?}");
            }
            name
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::brace_on_same_line("gh_status() {", "gh_status")]
    #[case::indented("    gh_log()", "gh_log")]
    #[case::space_before_parens("gh_push () {", "gh_push ")]
    #[case::parens_later_on_line("gh_sync { # call as gh_sync() }", "gh_sync { # call as gh_sync")]
    #[case::carriage_return("gh_help() {\r", "gh_help")]
    #[case::punctuation_passes_through("gh_a.b-c() {", "gh_a.b-c")]
    fn function_name_extracts_text_before_first_paren(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(function_name(line), Some(FunctionName::from(expected)));
    }

    #[rstest]
    #[case::no_parameter_list("gh_status {")]
    #[case::no_prefix("status() {")]
    #[case::prefix_not_at_start("function gh_status() {")]
    #[case::comment("# gh_status() shows status")]
    #[case::split_parens("gh_status( ) {")]
    #[case::blank("")]
    fn function_name_rejects_non_matching_lines(#[case] line: &str) {
        assert_eq!(function_name(line), None);
    }

    #[test]
    fn discover_functions_keeps_line_order_and_duplicates() {
        let contents = "\
#!/usr/bin/env bash
gh_status() {
  git status
}

helper() { :; }
gh_log() {
  git log --oneline
}
gh_status() {
  git status -sb
}
";
        let names = discover_functions(contents);
        assert_eq!(
            names,
            vec![
                FunctionName::from("gh_status"),
                FunctionName::from("gh_log"),
                FunctionName::from("gh_status"),
            ]
        );
    }

    #[test]
    fn discover_functions_returns_empty_for_no_matches() {
        assert!(discover_functions("echo hello\nstatus() { :; }\n").is_empty());
    }
}
