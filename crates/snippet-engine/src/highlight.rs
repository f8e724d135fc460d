//! Lexical highlighter
//!
//! A line-oriented classifier, not a lexer. Each line is handled on its own:
//! a line whose leading text is `//` or `#` becomes one comment token,
//! anything else is split on whitespace runs and single punctuation
//! characters, and every token is checked against [`RULES`] in order.
//!
//! Known limitations are part of the contract:
//! - comment markers are only recognised at the start of a line
//! - strings are recognised by their first character only, so a quoted
//!   string with spaces is split into several tokens
//! - a capitalised call like `Foo(` is a [`TokenCategory::Type`], because the
//!   type rule runs before the call rule
//! - the vocabulary is shared by every language
//!
//! Whitespace is the ECMAScript WhiteSpace and LineTerminator set
//! ([`WHITESPACE_CLASS`]), not Unicode `White_Space`: U+FEFF counts, U+0085
//! does not.
//!
//! Patterns are compiled once. A pattern that fails to compile is logged and
//! its rule never matches; a failed split pattern leaves each line as a
//! single token.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Markers that turn a whole line into a comment when they lead it
pub const COMMENT_MARKERS: &[&str] = &["//", "#"];

/// Whitespace code points as a regex class body
pub const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Characters that end a token and form a token of their own, as a regex class body
pub const DELIMITER_CLASS: &str = r#"(){}\[\],.;"'"#;

/// Whitespace runs and single delimiters; the gaps between matches are words
static SPLIT: Lazy<Option<Regex>> =
    Lazy::new(|| compile(&format!("[{}]+|[{}]", WHITESPACE_CLASS, DELIMITER_CLASS)));

static LEADING_WHITESPACE: Lazy<Option<Regex>> =
    Lazy::new(|| compile(&format!("^[{}]*", WHITESPACE_CLASS)));

static DIGITS: Lazy<Option<Regex>> = Lazy::new(|| compile(r"^[0-9]+$"));

static TYPE_NAME: Lazy<Option<Regex>> = Lazy::new(|| compile(r"^[A-Z][A-Za-z0-9]*$"));

static IDENT: Lazy<Option<Regex>> = Lazy::new(|| compile(r"^[A-Za-z_][A-Za-z0-9_]*$"));

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::error!("Highlighter pattern {:?} is invalid, disabling it: {}", pattern, e);
            None
        }
    }
}

fn is_match(pattern: &Lazy<Option<Regex>>, token: &str) -> bool {
    pattern.as_ref().is_some_and(|regex| regex.is_match(token))
}

/// Characters that open a string literal
pub const QUOTES: &[char] = &['\'', '"', '`'];

/// Declaration and modifier words across the supported languages
pub const DECLARATION_KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "def", "class", "int", "void", "async", "await",
    "public", "private", "static", "package", "import", "using", "namespace", "struct", "impl",
    "fn", "mut", "type", "interface",
];

/// Branching, looping, exception and jump words
pub const CONTROL_FLOW_KEYWORDS: &[&str] = &[
    "return", "if", "else", "for", "while", "try", "catch", "from", "match", "switch", "case",
    "break", "continue",
];

/// Syntactic class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    Keyword,
    ControlFlow,
    String,
    Function,
    Number,
    Comment,
    Type,
    Default,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 8] = [
        TokenCategory::Keyword,
        TokenCategory::ControlFlow,
        TokenCategory::String,
        TokenCategory::Function,
        TokenCategory::Number,
        TokenCategory::Comment,
        TokenCategory::Type,
        TokenCategory::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::ControlFlow => "control_flow",
            TokenCategory::String => "string",
            TokenCategory::Function => "function",
            TokenCategory::Number => "number",
            TokenCategory::Comment => "comment",
            TokenCategory::Type => "type",
            TokenCategory::Default => "default",
        }
    }
}

/// One classified piece of a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub category: TokenCategory,
}

/// A classified source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifiedLine {
    /// Whole line is a comment, kept verbatim
    Comment { text: String },
    /// Ordered tokens; their texts concatenate to the original line
    Tokens { tokens: Vec<Token> },
}

impl ClassifiedLine {
    /// Reconstruct the original line
    pub fn text(&self) -> String {
        match self {
            ClassifiedLine::Comment { text } => text.clone(),
            ClassifiedLine::Tokens { tokens } => tokens.iter().map(|t| t.text.as_str()).collect(),
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, ClassifiedLine::Comment { .. })
    }

    /// `(text, category)` pairs, with a comment line as a single pair
    pub fn spans(&self) -> Vec<(&str, TokenCategory)> {
        match self {
            ClassifiedLine::Comment { text } => vec![(text.as_str(), TokenCategory::Comment)],
            ClassifiedLine::Tokens { tokens } => tokens
                .iter()
                .map(|t| (t.text.as_str(), t.category))
                .collect(),
        }
    }
}

/// Token predicate used by the classification table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// First character is a quote
    QuotePrefix,
    /// Exact declaration/modifier keyword
    DeclarationKeyword,
    /// Exact control-flow keyword
    ControlFlowKeyword,
    /// Only ASCII digits
    Digits,
    /// Upper-case ASCII letter followed by at least one ASCII alphanumeric
    CapitalizedName,
    /// Identifier whose next token is `(`
    CallName,
}

/// Classification table; the first matching rule decides the category
pub const RULES: [(Rule, TokenCategory); 6] = [
    (Rule::QuotePrefix, TokenCategory::String),
    (Rule::DeclarationKeyword, TokenCategory::Keyword),
    (Rule::ControlFlowKeyword, TokenCategory::ControlFlow),
    (Rule::Digits, TokenCategory::Number),
    (Rule::CapitalizedName, TokenCategory::Type),
    (Rule::CallName, TokenCategory::Function),
];

impl Rule {
    /// Whether `token` satisfies this rule; `next` is the following token on the line
    pub fn matches(self, token: &str, next: Option<&str>) -> bool {
        match self {
            Rule::QuotePrefix => token.starts_with(QUOTES),
            Rule::DeclarationKeyword => DECLARATION_KEYWORDS.contains(&token),
            Rule::ControlFlowKeyword => CONTROL_FLOW_KEYWORDS.contains(&token),
            Rule::Digits => is_match(&DIGITS, token),
            Rule::CapitalizedName => token.len() > 1 && is_match(&TYPE_NAME, token),
            Rule::CallName => next == Some("(") && is_match(&IDENT, token),
        }
    }
}

/// Category for a single token given the token after it
pub fn categorize(token: &str, next: Option<&str>) -> TokenCategory {
    RULES
        .iter()
        .find(|(rule, _)| rule.matches(token, next))
        .map(|&(_, category)| category)
        .unwrap_or(TokenCategory::Default)
}

/// Split a line into tokens, keeping whitespace runs and delimiters as tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    let Some(split) = SPLIT.as_ref() else {
        return if line.is_empty() { Vec::new() } else { vec![line] };
    };

    let mut tokens = Vec::new();
    let mut last = 0;
    for m in split.find_iter(line) {
        if last < m.start() {
            tokens.push(&line[last..m.start()]);
        }
        tokens.push(m.as_str());
        last = m.end();
    }

    if last < line.len() {
        tokens.push(&line[last..]);
    }
    tokens
}

fn trim_leading_whitespace(line: &str) -> &str {
    match LEADING_WHITESPACE.as_ref().and_then(|regex| regex.find(line)) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Classify one line
pub fn classify_line(line: &str) -> ClassifiedLine {
    let leading = trim_leading_whitespace(line);
    if COMMENT_MARKERS.iter().any(|m| leading.starts_with(m)) {
        return ClassifiedLine::Comment {
            text: line.to_string(),
        };
    }

    let parts = tokenize(line);
    let tokens = parts
        .iter()
        .enumerate()
        .map(|(i, part)| Token {
            text: part.to_string(),
            category: categorize(part, parts.get(i + 1).copied()),
        })
        .collect();

    ClassifiedLine::Tokens { tokens }
}

/// Classify every line of `source`; empty input yields no lines
pub fn classify(source: &str) -> Vec<ClassifiedLine> {
    if source.is_empty() {
        return Vec::new();
    }
    source.split('\n').map(classify_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SnippetCatalog;

    fn category_of(line: &ClassifiedLine, text: &str) -> Option<TokenCategory> {
        line.spans()
            .into_iter()
            .find(|(t, _)| *t == text)
            .map(|(_, c)| c)
    }

    #[test]
    fn test_empty_source() {
        assert!(classify("").is_empty());
    }

    #[test]
    fn test_trailing_newline_yields_empty_line() {
        let lines = classify("x\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], ClassifiedLine::Tokens { tokens: vec![] });
    }

    #[test]
    fn test_tokenize_keeps_delimiters() {
        assert_eq!(
            tokenize("print(fib(i))"),
            vec!["print", "(", "fib", "(", "i", ")", ")"]
        );
        assert_eq!(
            tokenize("  a,  b;"),
            vec!["  ", "a", ",", "  ", "b", ";"]
        );
        assert_eq!(tokenize("'x'"), vec!["'", "x", "'"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_round_trip_all_builtin_snippets() {
        let catalog = SnippetCatalog::builtin();
        for language in catalog.languages() {
            let mut snippets = vec![catalog.default_snippet(language).unwrap()];
            for keyword in catalog.keywords(language).unwrap() {
                snippets.push(catalog.snippet(language, keyword).unwrap());
            }
            for snippet in snippets {
                let lines: Vec<String> = classify(snippet).iter().map(|l| l.text()).collect();
                assert_eq!(lines.join("\n"), snippet);
            }
        }
    }

    #[test]
    fn test_round_trip_odd_whitespace() {
        let line = "\t let  x =\u{00a0}f( 'a b' ) ;  ";
        assert_eq!(classify_line(line).text(), line);
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert!(classify_line("\u{feff}// comment").is_comment());
        assert!(classify_line("\u{feff}\u{3000}# comment").is_comment());
        assert_eq!(tokenize("a\u{feff}b"), vec!["a", "\u{feff}", "b"]);
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert_eq!(tokenize("a\u{85}b"), vec!["a\u{85}b"]);
        assert!(!classify_line("\u{85}// comment").is_comment());
    }

    #[test]
    fn test_patterns_compile() {
        for pattern in [&SPLIT, &LEADING_WHITESPACE, &DIGITS, &TYPE_NAME, &IDENT] {
            assert!(pattern.is_some());
        }
    }

    #[test]
    fn test_comment_lines() {
        let line = classify_line("    // return \"quoted\" const");
        assert_eq!(
            line,
            ClassifiedLine::Comment {
                text: "    // return \"quoted\" const".to_string()
            }
        );
        assert!(classify_line("# comment").is_comment());
        // Preprocessor lines start with '#', so they are comments too
        assert!(classify_line("#include <iostream>").is_comment());
    }

    #[test]
    fn test_mid_line_comment_not_recognised() {
        let line = classify_line("x = 1 # trailing");
        assert!(!line.is_comment());
        assert_eq!(category_of(&line, "#"), Some(TokenCategory::Default));
        assert_eq!(category_of(&line, "1"), Some(TokenCategory::Number));
    }

    #[test]
    fn test_token_examples() {
        assert_eq!(categorize("123", None), TokenCategory::Number);
        assert_eq!(categorize("Foo", None), TokenCategory::Type);
        assert_eq!(categorize("print", Some("(")), TokenCategory::Function);
        assert_eq!(categorize("print", None), TokenCategory::Default);
        assert_eq!(categorize("return", None), TokenCategory::ControlFlow);
        assert_eq!(categorize("const", None), TokenCategory::Keyword);
    }

    #[test]
    fn test_rule_priority() {
        // quote prefix beats everything, even a keyword-looking tail
        assert_eq!(categorize("`const", None), TokenCategory::String);
        // type beats call
        assert_eq!(categorize("Promise", Some("(")), TokenCategory::Type);
        // single capital letter is not a type
        assert_eq!(categorize("A", None), TokenCategory::Default);
        assert_eq!(categorize("A", Some("(")), TokenCategory::Function);
        // keywords before call
        assert_eq!(categorize("if", Some("(")), TokenCategory::ControlFlow);
        assert_eq!(categorize("int", Some("(")), TokenCategory::Keyword);
    }

    #[test]
    fn test_exact_keyword_match_only() {
        assert_eq!(categorize("constant", None), TokenCategory::Default);
        assert_eq!(categorize("Return", None), TokenCategory::Type);
        assert_eq!(categorize("returns", None), TokenCategory::Default);
    }

    #[test]
    fn test_call_requires_adjacent_paren() {
        let line = classify_line("void set_values (int,int);");
        assert_eq!(category_of(&line, "set_values"), Some(TokenCategory::Default));

        let line = classify_line("rect.set_values(3,4);");
        assert_eq!(category_of(&line, "set_values"), Some(TokenCategory::Function));
        assert_eq!(category_of(&line, "rect"), Some(TokenCategory::Default));
    }

    #[test]
    fn test_multi_token_string_is_split() {
        let line = classify_line("print('Hello, World!')");
        assert_eq!(
            line.spans(),
            vec![
                ("print", TokenCategory::Function),
                ("(", TokenCategory::Default),
                ("'", TokenCategory::String),
                ("Hello", TokenCategory::Type),
                (",", TokenCategory::Default),
                (" ", TokenCategory::Default),
                ("World!", TokenCategory::Default),
                ("'", TokenCategory::String),
                (")", TokenCategory::Default),
            ]
        );
    }

    #[test]
    fn test_backtick_token_is_string() {
        let line = classify_line("console.log(`[${timestamp}]`);");
        assert_eq!(category_of(&line, "`"), Some(TokenCategory::String));
    }

    #[test]
    fn test_reverse_string_snippet() {
        let code = SnippetCatalog::builtin()
            .snippet("python", "reverse string")
            .unwrap();
        let lines = classify(code);
        assert_eq!(lines.len(), 5);

        assert_eq!(category_of(&lines[0], "def"), Some(TokenCategory::Keyword));
        assert_eq!(
            category_of(&lines[0], "reverse_string"),
            Some(TokenCategory::Function)
        );
        assert_eq!(category_of(&lines[1], "return"), Some(TokenCategory::ControlFlow));
        assert!(lines[3].is_comment());

        let last = lines[4].spans();
        assert_eq!(last[0], ("print", TokenCategory::Function));
        assert_eq!(last[2], ("reverse_string", TokenCategory::Function));
        assert_eq!(last[4], ("'", TokenCategory::String));
        assert_eq!(last[5], ("hello", TokenCategory::Default));
    }

    #[test]
    fn test_serialized_shape() {
        let lines = classify("# hi\nfn");
        let json = serde_json::to_value(&lines).unwrap();
        assert_eq!(json[0]["kind"], "comment");
        assert_eq!(json[0]["text"], "# hi");
        assert_eq!(json[1]["kind"], "tokens");
        assert_eq!(json[1]["tokens"][0]["category"], "keyword");
    }

    #[test]
    fn test_category_names() {
        for category in TokenCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.as_str());
        }
    }
}
