//! Entry content markup: `**bold**`, `*italic*`, `<u>underline</u>` and line breaks
//!
//! Two views of the same markup string are provided. [`render_markup`] turns
//! it into safe HTML for display, and [`parse_spans`] / [`spans_to_markup`]
//! convert between the string and a list of styled text runs.
//!
//! A backslash before `\`, `*` or `<` makes that character literal, so `\*`
//! is a plain asterisk and `\<u>` is the text `<u>`.

use regex::Regex;
use std::sync::OnceLock;

const UNDERLINE_OPEN_HTML: &str = r#"<u class="underline decoration-primary/50 underline-offset-4">"#;
const BOLD_HTML: &str = r#"<strong class="font-bold text-foreground">${1}</strong>"#;
const ITALIC_HTML: &str = r#"<em class="italic text-foreground/80">${1}</em>"#;

fn bold_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap())
}

fn italic_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\*(.*?)\*").unwrap())
}

/// Backslash escapes after HTML escaping, where `<` has become `&lt;`
fn escape_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\\(\\|\*|&lt;)").unwrap())
}

/// Render entry markup to HTML.
///
/// Rules run in a fixed order, each on the output of the previous one:
/// angle brackets, underline tags, bold, italic, newlines. Angle brackets are
/// escaped before anything else, so only the `<u>`/`</u>` pair ever becomes
/// a tag.
pub fn render_markup(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let decoded = text.replace("&lt;", "<").replace("&gt;", ">");
    let escaped = decoded
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    let literal = escape_regex().replace_all(&escaped, |caps: &regex::Captures| {
        match &caps[1] {
            "\\" => "&#92;",
            "*" => "&#42;",
            _ => "&#60;",
        }
    });

    let underlined = literal
        .replace("&lt;u&gt;", UNDERLINE_OPEN_HTML)
        .replace("&lt;/u&gt;", "</u>");

    let bold = bold_regex().replace_all(&underlined, BOLD_HTML);
    let italic = italic_regex().replace_all(&bold, ITALIC_HTML);

    italic.replace('\n', "<br />")
}

/// Style flags carried by a run of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        bold: false,
        italic: false,
        underline: false,
    };
}

/// A run of text with a single style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Span {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Span::new(text, Style::PLAIN)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Text(String),
    Bold,
    Italic,
    UnderlineOpen,
    UnderlineClose,
}

impl Token {
    fn literal(&self) -> &'static str {
        match self {
            Token::Bold => "**",
            Token::Italic => "*",
            Token::UnderlineOpen => "<u>",
            Token::UnderlineClose => "</u>",
            Token::Text(_) => "",
        }
    }
}

fn tokenize(markup: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut rest = markup;

    let flush = |text: &mut String, tokens: &mut Vec<Token>| {
        if !text.is_empty() {
            tokens.push(Token::Text(std::mem::take(text)));
        }
    };

    while let Some(c) = rest.chars().next() {
        if c == '\\' {
            if let Some(escaped) = rest[1..].chars().next().filter(|n| is_escapable(*n)) {
                text.push(escaped);
                rest = &rest[1 + escaped.len_utf8()..];
                continue;
            }
        }

        let (token, len) = if rest.starts_with("**") {
            (Some(Token::Bold), 2)
        } else if c == '*' {
            (Some(Token::Italic), 1)
        } else if rest.starts_with("<u>") {
            (Some(Token::UnderlineOpen), 3)
        } else if rest.starts_with("</u>") {
            (Some(Token::UnderlineClose), 4)
        } else if c == '\n' {
            (Some(Token::Text("\n".to_string())), 1)
        } else {
            (None, c.len_utf8())
        };

        match token {
            Some(token) => {
                flush(&mut text, &mut tokens);
                tokens.push(token);
            }
            None => text.push(c),
        }
        rest = &rest[len..];
    }
    flush(&mut text, &mut tokens);

    tokens
}

fn is_escapable(c: char) -> bool {
    matches!(c, '\\' | '*' | '<')
}

/// Write `text` so that none of it reads back as a marker
fn push_literal(out: &mut String, text: &str) {
    for (i, c) in text.char_indices() {
        let rest = &text[i..];
        let needs_escape = match c {
            '*' => true,
            '<' => ["<u>", "</u>"]
                .iter()
                .any(|tag| rest.starts_with(*tag) || tag.starts_with(rest)),
            '\\' => rest[1..].chars().next().map_or(true, is_escapable),
            _ => false,
        };
        if needs_escape {
            out.push('\\');
        }
        out.push(c);
    }
}

/// Turn markers that have no partner into literal text.
///
/// `*` and `**` pair with the next marker of the same kind on the same line;
/// `<u>` pairs with the next `</u>` anywhere after it.
fn pair_markers(tokens: &mut [Token]) {
    let mut open_bold: Option<usize> = None;
    let mut open_italic: Option<usize> = None;
    let mut open_underline: Option<usize> = None;
    let mut unpaired = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Bold => match open_bold.take() {
                Some(_) => {}
                None => open_bold = Some(i),
            },
            Token::Italic => match open_italic.take() {
                Some(_) => {}
                None => open_italic = Some(i),
            },
            Token::UnderlineOpen => {
                if let Some(previous) = open_underline.replace(i) {
                    unpaired.push(previous);
                }
            }
            Token::UnderlineClose => {
                if open_underline.take().is_none() {
                    unpaired.push(i);
                }
            }
            Token::Text(text) if text == "\n" => {
                unpaired.extend(open_bold.take());
                unpaired.extend(open_italic.take());
            }
            Token::Text(_) => {}
        }
    }
    unpaired.extend(open_bold);
    unpaired.extend(open_italic);
    unpaired.extend(open_underline);

    for i in unpaired {
        tokens[i] = Token::Text(tokens[i].literal().to_string());
    }
}

/// Parse markup into styled spans. Adjacent runs with the same style are merged.
pub fn parse_spans(markup: &str) -> Vec<Span> {
    let mut tokens = tokenize(markup);
    pair_markers(&mut tokens);

    let mut spans: Vec<Span> = Vec::new();
    let mut style = Style::PLAIN;

    for token in tokens {
        match token {
            Token::Bold => style.bold = !style.bold,
            Token::Italic => style.italic = !style.italic,
            Token::UnderlineOpen => style.underline = true,
            Token::UnderlineClose => style.underline = false,
            Token::Text(text) => match spans.last_mut() {
                Some(last) if last.style == style => last.text.push_str(&text),
                _ => spans.push(Span::new(text, style)),
            },
        }
    }

    spans
}

/// Serialize spans back to markup.
///
/// Bold and italic are closed before each line break and reopened after it,
/// since those markers only pair within a line. Marker characters inside the
/// text are backslash-escaped.
pub fn spans_to_markup(spans: &[Span]) -> String {
    let mut out = String::new();
    let mut current = Style::PLAIN;

    for span in spans {
        for segment in span.text.split_inclusive('\n') {
            let (line, newline) = match segment.strip_suffix('\n') {
                Some(line) => (line, true),
                None => (segment, false),
            };

            if !line.is_empty() {
                transition(&mut out, current, span.style);
                current = span.style;
                push_literal(&mut out, line);
            }
            if newline {
                let at_break = Style {
                    bold: false,
                    italic: false,
                    ..span.style
                };
                transition(&mut out, current, at_break);
                current = at_break;
                out.push('\n');
            }
        }
    }
    transition(&mut out, current, Style::PLAIN);

    out
}

fn transition(out: &mut String, from: Style, to: Style) {
    if from.italic != to.italic {
        out.push('*');
    }
    if from.bold != to.bold {
        out.push_str("**");
    }
    if from.underline && !to.underline {
        out.push_str("</u>");
    }
    if !from.underline && to.underline {
        out.push_str("<u>");
    }
}
