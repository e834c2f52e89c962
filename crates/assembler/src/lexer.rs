//! Tokenizer for MiniMIPS assembly text.

use crate::error::AsmError;

/// A single token from an assembly line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A bare word: an instruction mnemonic or a register name written
    /// without `$`. Always lowercase.
    Ident(String),
    /// A `$`-prefixed register operand, kept as written.
    Register(String),
    /// A numeric literal (decimal or hex, optionally negative).
    Number(i64),
    /// A `name:` label definition.
    Label(String),
    /// An assembler directive such as `.text` or `.org`.
    Directive(String),
}

impl Token {
    /// Source text for error messages.
    pub(crate) fn text(&self) -> String {
        match self {
            Token::Ident(s) | Token::Register(s) => s.clone(),
            Token::Number(n) => n.to_string(),
            Token::Label(s) => format!("{s}:"),
            Token::Directive(s) => s.clone(),
        }
    }
}

/// Tokenize a single line of assembly text.
///
/// Returns an empty Vec for blank lines and comment-only lines.
/// Comments start with `#` and extend to end of line. Commas separate
/// operands and are otherwise insignificant.
pub(crate) fn tokenize_line(line: &str, line_num: usize) -> Result<Vec<Token>, AsmError> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut tokens = Vec::new();
    for word in line.split(|c: char| c == ',' || c.is_whitespace()) {
        if word.is_empty() {
            continue;
        }
        let token = if let Some(name) = word.strip_suffix(':') {
            Token::Label(name.to_string())
        } else if word.starts_with('.') {
            Token::Directive(word.to_lowercase())
        } else if word.starts_with('$') {
            Token::Register(word.to_string())
        } else if looks_numeric(word) {
            Token::Number(parse_number(word).ok_or_else(|| AsmError::InvalidNumber {
                line: line_num,
                token: word.to_string(),
            })?)
        } else {
            Token::Ident(word.to_lowercase())
        };
        tokens.push(token);
    }

    Ok(tokens)
}

fn looks_numeric(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    digits.as_bytes().first().is_some_and(|b| b.is_ascii_digit())
}

fn parse_number(word: &str) -> Option<i64> {
    let (negative, digits) = match word.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, word),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<i64>().ok()?,
    };
    Some(if negative { -magnitude } else { magnitude })
}
