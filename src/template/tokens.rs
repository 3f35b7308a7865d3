//! Token grammar.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

const SHARED_PREFIX: &str = "shared:";

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[(shared:)?([A-Za-z0-9_.\-]+)\]\]").expect("Invalid token regex")
});

/// Whether a token is answered per page or per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScope {
    Local,
    Shared,
}

/// One token occurrence in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The identifier between the brackets, without any `shared:` prefix.
    pub name: String,
    pub scope: TokenScope,
    /// Byte range of the whole `[[...]]` literal.
    pub span: Range<usize>,
}

impl Token {
    pub fn is_shared(&self) -> bool {
        self.scope == TokenScope::Shared
    }

    /// The literal text of this token as it appears in a template.
    pub fn literal(&self) -> String {
        match self.scope {
            TokenScope::Local => local_token(&self.name),
            TokenScope::Shared => shared_token(&self.name),
        }
    }
}

/// `[[name]]`
pub fn local_token(name: &str) -> String {
    format!("[[{}]]", name)
}

/// `[[shared:name]]`
pub fn shared_token(name: &str) -> String {
    format!("[[{}{}]]", SHARED_PREFIX, name)
}

/// Find the first token at or after byte offset `start`.
pub fn find_token_from(text: &str, start: usize) -> Option<Token> {
    if start > text.len() {
        return None;
    }
    TOKEN_REGEX.captures_at(text, start).map(|caps| {
        let whole = caps.get(0).expect("capture group 0 always matches");
        let scope = if caps.get(1).is_some() {
            TokenScope::Shared
        } else {
            TokenScope::Local
        };
        Token {
            name: caps[2].to_string(),
            scope,
            span: whole.range(),
        }
    })
}

/// Every token occurrence in `text`, in document order.
pub fn scan_tokens(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while let Some(token) = find_token_from(text, pos) {
        pos = token.span.end;
        tokens.push(token);
    }
    tokens
}
