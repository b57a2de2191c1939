use std::sync::LazyLock;

use regex::Regex;

/// A double quoted group, or a bare word that does not start with a quote.
static ARG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"|([^"\s]\S*)"#).unwrap());

/// Split a string into simple command line arguments.
///
/// Words are separated by whitespace. Text enclosed in double quotes forms a
/// single argument with the quotes removed, and may contain whitespace. There
/// are no escape sequences, and a quote without a closing partner is dropped.
///
/// **This is not to be used for security purposes.** It is a convenience for
/// user supplied extra arguments, not a shell grammar.
///
/// ```
/// assert_eq!(
///     javaproc::split_args(r#"foo bar "baz qux" end"#),
///     ["foo", "bar", "baz qux", "end"]
/// );
/// ```
pub fn split_args(input: &str) -> Vec<String> {
    ARG_PATTERN
        .captures_iter(input)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}
