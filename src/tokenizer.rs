//! Splits a raw JVM options string into individual options.
//!
//! Whitespace alone cannot delimit options because values may contain
//! spaces (`-XX:OnError="kill -9 %p"`). A new option starts only at a
//! space followed by a dash and a known option introducer, so spaces
//! inside values stay attached to the option that owns them.

/// Texts that may follow `" -"` at an option boundary.
const INTRODUCERS: &[&str] = &[
    "-add",
    "agentlib",
    "agentpath",
    "classpath",
    "client",
    "d32",
    "d64",
    "javaagent",
    "noverify",
    "server",
    "verbose",
    "D",
    "X",
];

fn is_boundary(rest: &str) -> bool {
    INTRODUCERS.iter().any(|stem| rest.starts_with(stem))
}

/// Splits `options` into trimmed option tokens, in order.
///
/// Tokens that do not look like options at all are kept so they can be
/// reported, not silently dropped. An empty or all-whitespace input
/// yields no tokens.
pub fn tokenize(options: &str) -> Vec<String> {
    let mut cuts = Vec::new();
    for (at, _) in options.match_indices(" -") {
        if at > 0 && is_boundary(&options[at + 2..]) {
            cuts.push(at);
        }
    }

    let mut tokens = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        push_trimmed(&mut tokens, &options[start..cut]);
        start = cut;
    }
    push_trimmed(&mut tokens, &options[start..]);

    log::trace!("tokenized {} options", tokens.len());
    tokens
}

fn push_trimmed(tokens: &mut Vec<String>, raw: &str) {
    let token = raw.trim();
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_simple_options() {
        assert_eq!(
            tokenize("-Xmx1g -XX:+UseG1GC -Dfile.encoding=UTF-8"),
            vec!["-Xmx1g", "-XX:+UseG1GC", "-Dfile.encoding=UTF-8"]
        );
    }

    #[test]
    fn keeps_spaces_inside_values() {
        assert_eq!(
            tokenize("-Xmx1g -XX:+UseG1GC -Dfile.encoding=UTF-8 -XX:OnError=\"echo %p\""),
            vec![
                "-Xmx1g",
                "-XX:+UseG1GC",
                "-Dfile.encoding=UTF-8",
                "-XX:OnError=\"echo %p\"",
            ]
        );
    }

    #[test]
    fn kill_command_value_stays_whole() {
        assert_eq!(
            tokenize("-XX:OnOutOfMemoryError=kill -9 %p -Xmx2g"),
            vec!["-XX:OnOutOfMemoryError=kill -9 %p", "-Xmx2g"]
        );
    }

    #[test]
    fn empty_and_whitespace_inputs_yield_nothing() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   "), Vec::<String>::new());
        assert_eq!(tokenize("\t \t"), Vec::<String>::new());
    }

    #[test]
    fn single_option_is_one_token() {
        assert_eq!(tokenize("-Xmx1g"), vec!["-Xmx1g"]);
        assert_eq!(tokenize("  -Xmx1g  "), vec!["-Xmx1g"]);
    }

    #[test]
    fn garbage_tokens_survive() {
        assert_eq!(tokenize("hello world -Xmx1g"), vec!["hello world", "-Xmx1g"]);
        assert_eq!(tokenize("foo"), vec!["foo"]);
    }

    #[test]
    fn double_dash_module_options_split() {
        assert_eq!(
            tokenize("--add-exports=java.base/sun.nio.ch=ALL-UNNAMED --add-opens=java.base/java.lang=ALL-UNNAMED"),
            vec![
                "--add-exports=java.base/sun.nio.ch=ALL-UNNAMED",
                "--add-opens=java.base/java.lang=ALL-UNNAMED",
            ]
        );
    }

    #[test]
    fn dash_without_introducer_is_not_a_boundary() {
        // "kill -9" has no recognized introducer after the dash.
        assert_eq!(
            tokenize("-XX:OnError=kill -9 %p"),
            vec!["-XX:OnError=kill -9 %p"]
        );
    }

    #[test]
    fn repeated_spaces_between_options() {
        assert_eq!(
            tokenize("-Xms1g   -Xmx2g"),
            vec!["-Xms1g", "-Xmx2g"]
        );
    }

    #[test]
    fn d32_and_d64_are_boundaries() {
        assert_eq!(tokenize("-server -d64 -d32"), vec!["-server", "-d64", "-d32"]);
    }
}
