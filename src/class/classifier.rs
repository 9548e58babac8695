use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{ClassifyOptions, Declaration, Role, Visibility};

static TYPEDEF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" typedef[^;]*;").unwrap());
static INITIALIZER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"= [^,;)]*").unwrap());
static PAREN_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\( *").unwrap());
static PAREN_CLOSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\) *").unwrap());
static COMMA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" *, *").unwrap());

/// Split one class body into visibility-tagged field/method records.
///
/// This is a heuristic, not a grammar: multi-declarator statements and
/// function-pointer fields may misclassify, and that is accepted. The
/// visibility state starts at private and carries across declarations
/// until the next section marker.
pub fn classify(body: &str, options: &ClassifyOptions) -> Vec<Declaration> {
    let data = remove_body_noise(body, options);

    let mut visibility = Visibility::Private;
    let mut declarations = Vec::new();

    for candidate in data.split(';') {
        let (line, next) = extract_visibility(candidate, visibility);
        visibility = next;
        if line.trim().is_empty() {
            continue;
        }

        let declaration = match line.find('(') {
            Some(paren) if paren > 0 => {
                let (name, type_name) = split_name_type(&line[..paren]);
                Declaration {
                    visibility,
                    role: Role::Method,
                    name: tidy_signature(&format!("{}{}", name, &line[paren..])),
                    type_name,
                }
            }
            _ => {
                let (name, type_name) = split_name_type(line);
                Declaration {
                    visibility,
                    role: Role::Field,
                    name,
                    type_name,
                }
            }
        };
        declarations.push(declaration);
    }

    declarations
}

/// Strip non-semantic qualifiers, whole typedef statements and default
/// initializers from a class body before it is split into declarations
fn remove_body_noise(body: &str, options: &ClassifyOptions) -> String {
    let mut data = format!(" {} ", body);
    for qualifier in &options.qualifiers {
        data = data.replace(&format!(" {} ", qualifier), " ");
    }
    let data = TYPEDEF_RE.replace_all(&data, "");
    INITIALIZER_RE.replace_all(&data, "").into_owned()
}

/// Detect a visibility-section marker: an isolated ` : ` with the section
/// keyword before it. `::` tokens never render with surrounding spaces,
/// so scope resolution cannot match. Returns the remaining declaration
/// text and the visibility now in effect.
fn extract_visibility(line: &str, current: Visibility) -> (&str, Visibility) {
    match line.find(" : ") {
        Some(pos) if pos > 0 => {
            let keyword = line[..pos].trim();
            (&line[pos + 3..], Visibility::from_keyword(keyword))
        }
        _ => (line, current),
    }
}

/// Split a declaration at its last whitespace boundary into name and
/// type. No whitespace at all means a constructor or destructor: the
/// whole token is the name and the type is empty.
fn split_name_type(text: &str) -> (String, String) {
    let text = text.trim();
    match text.rfind(' ') {
        Some(pos) if pos > 0 => (text[pos + 1..].to_string(), text[..pos].to_string()),
        _ => (text.to_string(), String::new()),
    }
}

/// Re-normalize the spacing of a method signature: no space adjacent to
/// the parentheses, exactly one space after each comma
fn tidy_signature(signature: &str) -> String {
    let tight = PAREN_OPEN_RE.replace_all(signature, "(");
    let tight = PAREN_CLOSE_RE.replace_all(&tight, ")");
    COMMA_RE.replace_all(&tight, ", ").into_owned()
}
