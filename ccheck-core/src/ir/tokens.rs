//! Lexical token stream with explicit backward navigation.

use serde::{Deserialize, Serialize};

/// 1-based line/column of a token's first character.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Index of a token within its `TokenStream`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u32);

/// A lexical unit: its text and source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    pub pos: SourcePos,
}

/// All tokens of one translation unit, in source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token, returning its id.
    pub fn push(&mut self, value: impl Into<String>, line: u32, column: u32) -> TokenId {
        let id = TokenId(self.tokens.len() as u32);
        self.tokens.push(Token {
            value: value.into(),
            pos: SourcePos::new(line, column),
        });
        id
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0 as usize)
    }

    /// The token immediately preceding `id` in the source.
    ///
    /// Returns `None` at stream start or for an out-of-range id; stream
    /// exhaustion is an ordinary value, never an error.
    pub fn try_prev(&self, id: TokenId) -> Option<TokenId> {
        let idx = id.0 as usize;
        if idx == 0 || idx >= self.tokens.len() {
            return None;
        }
        Some(TokenId(id.0 - 1))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut stream = TokenStream::new();
        let id = stream.push("int", 1, 1);
        let token = stream.get(id).unwrap();
        assert_eq!(token.value, "int");
        assert_eq!(token.pos, SourcePos::new(1, 1));
    }

    #[test]
    fn test_try_prev_steps_backward() {
        let mut stream = TokenStream::new();
        let a = stream.push("int", 1, 1);
        let b = stream.push("x", 1, 5);
        assert_eq!(stream.try_prev(b), Some(a));
    }

    #[test]
    fn test_try_prev_none_at_stream_start() {
        let mut stream = TokenStream::new();
        let a = stream.push("int", 1, 1);
        assert_eq!(stream.try_prev(a), None);
    }

    #[test]
    fn test_try_prev_none_for_out_of_range_id() {
        let mut stream = TokenStream::new();
        stream.push("int", 1, 1);
        assert_eq!(stream.try_prev(TokenId(7)), None);
    }
}
