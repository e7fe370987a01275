//! Go Lexer
//!
//! Tokenizes Go source with `logos` and reproduces Go's automatic
//! semicolon insertion, so the parser can treat line ends exactly like
//! explicit `;` tokens.

use crate::error::LexError;
use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    /* Kept so a comment spanning lines can still end a statement */
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[token("\n")]
    Newline,

    // Keywords the type grammar cares about
    #[token("package")]
    Package,
    #[token("import")]
    Import,
    #[token("type")]
    Type,
    #[token("struct")]
    Struct,
    #[token("interface")]
    Interface,
    #[token("map")]
    Map,
    #[token("chan")]
    Chan,
    #[token("func")]
    Func,
    #[token("const")]
    Const,
    #[token("var")]
    Var,

    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*", |lex| lex.slice().to_string())]
    Ident(String),

    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| lex.slice().to_string())]
    #[regex(r"`[^`]*`", |lex| lex.slice().to_string())]
    String(String),

    #[regex(r"'([^'\\\n]|\\.)*'")]
    Rune,

    #[regex(r"[0-9][0-9a-zA-Z_.]*")]
    Number,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("*")]
    Star,
    #[token("=")]
    Assign,
    #[token("<-")]
    Arrow,
    #[token("++")]
    Increment,
    #[token("--")]
    Decrement,

    /* Every other operator; only ever skipped over */
    #[regex(r"[+\-/%&^!<>=:~|]+", priority = 1)]
    Operator,
}

impl Token {
    /* Tokens after which a line end terminates the statement */
    fn ends_statement(&self) -> bool {
        matches!(
            self,
            Token::Ident(_)
                | Token::String(_)
                | Token::Rune
                | Token::Number
                | Token::RParen
                | Token::RBracket
                | Token::RBrace
                | Token::Increment
                | Token::Decrement
        )
    }

    pub fn describe(&self) -> String {
        match self {
            Token::Ident(name) => format!("identifier `{}`", name),
            Token::String(text) => format!("string {}", text),
            Token::Semicolon => "end of statement".to_string(),
            other => format!("{:?}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub span: Range<usize>,
    pub line: usize,
    pub column: usize,
}

/* Maps byte offsets to 1-based line/column pairs */
pub(crate) struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(src: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(src.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    pub(crate) fn position(&self, src: &str, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let start = self.line_starts[line];
        let column = src[start..offset].chars().count() + 1;
        (line + 1, column)
    }
}

/// Tokenize `src`, inserting `;` wherever Go's semicolon rule does.
pub fn tokenize(src: &str) -> Result<Vec<Spanned>, LexError> {
    let src = src.strip_prefix('\u{feff}').unwrap_or(src);
    let index = LineIndex::new(src);
    let mut tokens: Vec<Spanned> = Vec::new();
    let mut lexer = Token::lexer(src);

    let mut insert_pending = false;
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let (line, column) = index.position(src, span.start);

        let token = match result {
            Ok(token) => token,
            Err(()) => {
                return Err(LexError {
                    line,
                    column,
                    snippet: lexer.slice().to_string(),
                });
            }
        };

        let line_break = match &token {
            Token::Newline => true,
            Token::BlockComment => {
                if !lexer.slice().contains('\n') {
                    continue;
                }
                true
            }
            _ => false,
        };

        if line_break {
            if insert_pending {
                tokens.push(Spanned {
                    token: Token::Semicolon,
                    span,
                    line,
                    column,
                });
                insert_pending = false;
            }
            continue;
        }

        insert_pending = token.ends_statement();
        tokens.push(Spanned {
            token,
            span,
            line,
            column,
        });
    }

    if insert_pending {
        let (line, column) = index.position(src, src.len());
        tokens.push(Spanned {
            token: Token::Semicolon,
            span: src.len()..src.len(),
            line,
            column,
        });
    }

    Ok(tokens)
}
