use once_cell::sync::Lazy;
use regex::Regex;

/// A single token of normalized header text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening brace, entering one level of scope nesting
    Open,

    /// Closing brace, leaving one level of scope nesting
    Close,

    /// Structural punctuation: `;`, `(`, `)`, `[`, `]`, `,` or an isolated `:`
    Punct(char),

    /// Any other run of non-space characters; scope-resolution `::` stays
    /// inside a single word, so `std::vector<int>` is one token
    Word(String),
}

impl Token {
    /// The literal text of this token
    pub fn text(&self) -> &str {
        match self {
            Token::Open => "{",
            Token::Close => "}",
            Token::Punct(_) => self.punct_str(),
            Token::Word(w) => w,
        }
    }

    fn punct_str(&self) -> &'static str {
        match self {
            Token::Punct(';') => ";",
            Token::Punct('(') => "(",
            Token::Punct(')') => ")",
            Token::Punct('[') => "[",
            Token::Punct(']') => "]",
            Token::Punct(',') => ",",
            Token::Punct(':') => ":",
            _ => "",
        }
    }
}

/// Characters that always stand alone as punctuation tokens
const PUNCT_CHARS: &[char] = &[';', '(', ')', '[', ']', ','];

/// Remove text between `open` and `close` (inclusive), once.
/// Returns false when no complete pair remains; an unterminated pair is
/// left in place rather than erasing everything after it.
fn remove_between(data: &mut String, open: &str, close: &str) -> bool {
    if let Some(start) = data.find(open) {
        if let Some(rel) = data[start + open.len()..].find(close) {
            let stop = start + open.len() + rel + close.len();
            data.replace_range(start..stop, " ");
            return true;
        }
    }
    false
}

/// Strip block comments, line comments and preprocessor directives from
/// raw header text. Never fails; an unterminated `/*` is left in place.
pub fn strip_comments(data: &str) -> String {
    let mut data = data.replace('\r', "");

    while remove_between(&mut data, "/*", "*/") {}

    // line comments and directives run to end of line; a trailing newline
    // guarantees the last one terminates
    data.push('\n');
    while remove_between(&mut data, "//", "\n") {}

    data.push('\n');
    while remove_between(&mut data, "#", "\n") {}

    data
}

/// Tokenize comment-stripped text into a flat token stream.
///
/// Words are maximal runs of non-space, non-punctuation characters. A `:`
/// immediately followed by another `:` is kept inside the surrounding word
/// (scope resolution); a lone `:` becomes punctuation so visibility-section
/// markers stay distinguishable from `::`.
pub fn tokenize(data: &str) -> Vec<Token> {
    let chars: Vec<char> = data.chars().collect();
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            flush_word(&mut tokens, &mut word);
            i += 1;
        } else if c == '{' {
            flush_word(&mut tokens, &mut word);
            tokens.push(Token::Open);
            i += 1;
        } else if c == '}' {
            flush_word(&mut tokens, &mut word);
            tokens.push(Token::Close);
            i += 1;
        } else if PUNCT_CHARS.contains(&c) {
            flush_word(&mut tokens, &mut word);
            tokens.push(Token::Punct(c));
            i += 1;
        } else if c == ':' {
            if chars.get(i + 1) == Some(&':') {
                word.push_str("::");
                i += 2;
            } else {
                flush_word(&mut tokens, &mut word);
                tokens.push(Token::Punct(':'));
                i += 1;
            }
        } else {
            word.push(c);
            i += 1;
        }
    }
    flush_word(&mut tokens, &mut word);

    tokens
}

fn flush_word(tokens: &mut Vec<Token>, word: &mut String) {
    if !word.is_empty() {
        tokens.push(Token::Word(std::mem::take(word)));
    }
}

static ANGLE_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"< *").unwrap());
static ANGLE_CLOSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" *>").unwrap());

/// Render a token slice back into normalized single-line text: tokens are
/// space-separated, template argument lists keep no spacing adjacent to
/// `<`/`>`, and `*` attaches to the preceding token.
pub fn render(tokens: &[Token]) -> String {
    let joined = tokens
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ");
    let tight = ANGLE_OPEN_RE.replace_all(&joined, "<");
    let tight = ANGLE_CLOSE_RE.replace_all(&tight, ">");
    tight.replace(" *", "*")
}
