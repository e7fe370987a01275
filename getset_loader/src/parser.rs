//! Go Declaration Parser
//!
//! Reads the package clause and every top-level `type` declaration of a
//! Go source file. Imports, constants, variables and functions are skipped
//! by bracket balancing; only struct declarations become records.

use crate::error::ParseError;
use crate::lexer::{tokenize, Spanned, Token};
use getset_types::{ArrayType, FieldDef, RecordDef, SourceUnit, StructType, TypeExpr};

/// Parse a complete Go source file.
pub fn parse_source(src: &str) -> Result<SourceUnit, ParseError> {
    let src = strip_byte_order_mark(src);
    let tokens = tokenize(src)?;
    Parser::new(src, tokens).parse_source_unit()
}

/// Parse a single Go type expression, e.g. `map[string][]*pkg.Item`.
pub fn parse_type_expr(src: &str) -> Result<TypeExpr, ParseError> {
    let src = strip_byte_order_mark(src);
    let tokens = tokenize(src)?;
    let mut parser = Parser::new(src, tokens);
    let ty = parser.parse_type()?;
    parser.skip_semicolons();
    if parser.pos < parser.tokens.len() {
        return Err(parser.unexpected("end of type expression"));
    }
    Ok(ty)
}

/* Spans index the text after the mark */
fn strip_byte_order_mark(src: &str) -> &str {
    src.strip_prefix('\u{feff}').unwrap_or(src)
}

struct Parser<'src> {
    src: &'src str,
    tokens: Vec<Spanned>,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn new(src: &'src str, tokens: Vec<Spanned>) -> Self {
        Self {
            src,
            tokens,
            pos: 0,
        }
    }

    /* ----- token cursor ----- */

    fn peek(&self) -> Option<&Token> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|s| &s.token)
    }

    fn at(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.at(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token, expected: &str) -> Result<(), ParseError> {
        if self.eat(&token) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_ident(&mut self, expected: &str) -> Result<String, ParseError> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    /* A statement ends at `;` or at end of input */
    fn expect_terminator(&mut self) -> Result<(), ParseError> {
        if self.pos >= self.tokens.len() || self.eat(&Token::Semicolon) {
            Ok(())
        } else {
            Err(self.unexpected("end of declaration"))
        }
    }

    fn skip_semicolons(&mut self) {
        while self.eat(&Token::Semicolon) {}
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match self.tokens.get(self.pos) {
            Some(spanned) => ParseError::Unexpected {
                line: spanned.line,
                column: spanned.column,
                expected: expected.to_string(),
                found: spanned.token.describe(),
            },
            None => ParseError::UnexpectedEof {
                expected: expected.to_string(),
            },
        }
    }

    /* Index just past the bracket group opening at `start` */
    fn group_end(&self, start: usize) -> Result<usize, ParseError> {
        let mut depth = 0usize;
        let mut idx = start;
        while let Some(spanned) = self.tokens.get(idx) {
            match spanned.token {
                Token::LBrace | Token::LParen | Token::LBracket => depth += 1,
                Token::RBrace | Token::RParen | Token::RBracket => {
                    depth = depth.checked_sub(1).ok_or(ParseError::Unbalanced {
                        line: spanned.line,
                        column: spanned.column,
                        delimiter: closing_char(&spanned.token),
                    })?;
                    if depth == 0 {
                        return Ok(idx + 1);
                    }
                }
                _ => {}
            }
            idx += 1;
        }

        let opener = &self.tokens[start];
        Err(ParseError::Unbalanced {
            line: opener.line,
            column: opener.column,
            delimiter: opening_char(&opener.token),
        })
    }

    fn skip_group(&mut self) -> Result<(), ParseError> {
        self.pos = self.group_end(self.pos)?;
        Ok(())
    }

    /* ----- declarations ----- */

    fn parse_source_unit(&mut self) -> Result<SourceUnit, ParseError> {
        self.skip_semicolons();
        self.expect(Token::Package, "package clause")?;
        let package = self.expect_ident("package name")?;
        self.expect_terminator()?;

        let mut records = Vec::new();
        loop {
            match self.peek() {
                None => break,
                Some(Token::Semicolon) => self.pos += 1,
                Some(Token::Type) => records.extend(self.parse_type_decl()?),
                Some(_) => self.skip_declaration()?,
            }
        }

        Ok(SourceUnit { package, records })
    }

    /* Skips one import/const/var/func declaration up to its terminating `;` */
    fn skip_declaration(&mut self) -> Result<(), ParseError> {
        let mut open: Vec<&Spanned> = Vec::new();
        while let Some(spanned) = self.tokens.get(self.pos) {
            match spanned.token {
                Token::LBrace | Token::LParen | Token::LBracket => open.push(spanned),
                Token::RBrace | Token::RParen | Token::RBracket => {
                    if open.pop().is_none() {
                        return Err(ParseError::Unbalanced {
                            line: spanned.line,
                            column: spanned.column,
                            delimiter: closing_char(&spanned.token),
                        });
                    }
                }
                Token::Semicolon if open.is_empty() => {
                    self.pos += 1;
                    return Ok(());
                }
                _ => {}
            }
            self.pos += 1;
        }

        match open.pop() {
            Some(opener) => Err(ParseError::Unbalanced {
                line: opener.line,
                column: opener.column,
                delimiter: opening_char(&opener.token),
            }),
            None => Ok(()),
        }
    }

    fn parse_type_decl(&mut self) -> Result<Vec<RecordDef>, ParseError> {
        self.expect(Token::Type, "`type`")?;

        let mut records = Vec::new();
        if self.eat(&Token::LParen) {
            loop {
                self.skip_semicolons();
                if self.eat(&Token::RParen) {
                    break;
                }
                records.extend(self.parse_type_spec()?);
                if !self.at(&Token::RParen) {
                    self.expect(Token::Semicolon, "`;` or `)`")?;
                }
            }
        } else {
            records.extend(self.parse_type_spec()?);
        }

        self.expect_terminator()?;
        Ok(records)
    }

    /* `Name [TypeParams] [=] Type`; only struct definitions yield a record */
    fn parse_type_spec(&mut self) -> Result<Option<RecordDef>, ParseError> {
        let name = self.expect_ident("type name")?;

        if self.at(&Token::LBracket) && self.starts_type_params() {
            self.skip_group()?;
        }

        if self.eat(&Token::Assign) {
            self.parse_type()?;
            return Ok(None);
        }

        match self.parse_type()? {
            TypeExpr::Record(st) => Ok(Some(RecordDef::new(name, st.fields))),
            _ => Ok(None),
        }
    }

    /* Tells `type Set[T comparable] ...` apart from `type Block [Size]byte` */
    fn starts_type_params(&self) -> bool {
        if !matches!(self.peek_at(1), Some(Token::Ident(_))) {
            return false;
        }
        match self.tokens.get(self.pos + 2) {
            Some(spanned) => match spanned.token {
                Token::RBracket | Token::Dot | Token::Star => false,
                Token::Operator => self.src[spanned.span.clone()].starts_with('~'),
                _ => true,
            },
            None => false,
        }
    }

    /* ----- types ----- */

    fn starts_type(token: Option<&Token>) -> bool {
        matches!(
            token,
            Some(
                Token::Ident(_)
                    | Token::Star
                    | Token::LBracket
                    | Token::Map
                    | Token::Chan
                    | Token::Func
                    | Token::Struct
                    | Token::Interface
                    | Token::Arrow
                    | Token::LParen
            )
        )
    }

    fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.unexpected("type"));
        };

        match token {
            Token::Ident(name) => {
                self.pos += 1;
                let ty = if self.eat(&Token::Dot) {
                    let member = self.expect_ident("qualified type name")?;
                    TypeExpr::qualified(name, member)
                } else {
                    TypeExpr::Named(name)
                };
                /* Generic instantiation, e.g. `List[int]` */
                if self.at(&Token::LBracket) {
                    self.skip_group()?;
                    return Ok(TypeExpr::Unknown);
                }
                Ok(ty)
            }
            Token::Star => {
                self.pos += 1;
                Ok(TypeExpr::pointer(self.parse_type()?))
            }
            Token::LBracket => {
                self.pos += 1;
                if self.eat(&Token::RBracket) {
                    return Ok(TypeExpr::slice(self.parse_type()?));
                }
                let len = self.parse_array_len()?;
                let element = self.parse_type()?;
                Ok(TypeExpr::Array(ArrayType {
                    len,
                    element_type: Box::new(element),
                }))
            }
            Token::Map => {
                self.pos += 1;
                self.expect(Token::LBracket, "`[` after `map`")?;
                let key = self.parse_type()?;
                self.expect(Token::RBracket, "`]` after map key type")?;
                let value = self.parse_type()?;
                Ok(TypeExpr::map(key, value))
            }
            Token::Struct => Ok(TypeExpr::Record(self.parse_struct_type()?)),
            Token::Interface => {
                self.pos += 1;
                if !self.at(&Token::LBrace) {
                    return Err(self.unexpected("`{` after `interface`"));
                }
                self.skip_group()?;
                Ok(TypeExpr::Unknown)
            }
            Token::Func => {
                self.pos += 1;
                self.skip_signature()?;
                Ok(TypeExpr::Unknown)
            }
            Token::Chan => {
                self.pos += 1;
                self.eat(&Token::Arrow);
                self.parse_type()?;
                Ok(TypeExpr::Unknown)
            }
            Token::Arrow => {
                self.pos += 1;
                self.expect(Token::Chan, "`chan` after `<-`")?;
                self.parse_type()?;
                Ok(TypeExpr::Unknown)
            }
            Token::LParen => {
                self.pos += 1;
                self.parse_type()?;
                self.expect(Token::RParen, "`)`")?;
                Ok(TypeExpr::Unknown)
            }
            _ => Err(self.unexpected("type")),
        }
    }

    /* Consumes `N]` of an array type and returns `N` as written */
    fn parse_array_len(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(spanned) = self.tokens.get(self.pos) {
            match spanned.token {
                Token::LBrace | Token::LParen | Token::LBracket => depth += 1,
                Token::RBrace | Token::RParen | Token::RBracket if depth > 0 => depth -= 1,
                Token::RBracket => {
                    let from = self.tokens[start].span.start;
                    let to = self.tokens[self.pos - 1].span.end;
                    self.pos += 1;
                    return Ok(self.src[from..to].trim().to_string());
                }
                _ => {}
            }
            self.pos += 1;
        }
        Err(self.unexpected("`]` closing array length"))
    }

    /* Parameters, then an optional result list or single result type */
    fn skip_signature(&mut self) -> Result<(), ParseError> {
        if !self.at(&Token::LParen) {
            return Err(self.unexpected("`(` starting parameter list"));
        }
        self.skip_group()?;

        if self.at(&Token::LParen) {
            self.skip_group()?;
        } else if Self::starts_type(self.peek()) {
            self.parse_type()?;
        }
        Ok(())
    }

    fn parse_struct_type(&mut self) -> Result<StructType, ParseError> {
        self.expect(Token::Struct, "`struct`")?;
        self.expect(Token::LBrace, "`{` after `struct`")?;

        let mut fields = Vec::new();
        loop {
            self.skip_semicolons();
            if self.eat(&Token::RBrace) {
                break;
            }
            fields.extend(self.parse_field_decl()?);
            if !self.at(&Token::RBrace) {
                self.expect(Token::Semicolon, "`;` or `}` after field")?;
            }
        }

        Ok(StructType { fields })
    }

    fn parse_field_decl(&mut self) -> Result<Vec<FieldDef>, ParseError> {
        let mut fields = match self.peek().cloned() {
            Some(Token::Star) => vec![FieldDef::embedded(self.parse_type()?)],
            Some(Token::Ident(first)) => match self.peek_at(1) {
                Some(Token::Dot | Token::Semicolon | Token::RBrace | Token::String(_)) => {
                    vec![FieldDef::embedded(self.parse_type()?)]
                }
                Some(Token::LBracket) if self.embeds_generic()? => {
                    vec![FieldDef::embedded(self.parse_type()?)]
                }
                Some(Token::Comma) => {
                    self.pos += 1;
                    let mut names = vec![first];
                    while self.eat(&Token::Comma) {
                        names.push(self.expect_ident("field name")?);
                    }
                    let field_type = self.parse_type()?;
                    names
                        .into_iter()
                        .map(|name| FieldDef::named(name, field_type.clone()))
                        .collect()
                }
                _ => {
                    self.pos += 1;
                    vec![FieldDef::named(first, self.parse_type()?)]
                }
            },
            _ => return Err(self.unexpected("field declaration")),
        };

        if let Some(Token::String(tag)) = self.peek() {
            let tag = tag.clone();
            self.pos += 1;
            for field in &mut fields {
                field.tag = Some(tag.clone());
            }
        }

        Ok(fields)
    }

    /* `List[int]` embeds an instantiation; `Buf [8]byte` declares an array field */
    fn embeds_generic(&self) -> Result<bool, ParseError> {
        let open = self.pos + 1;
        if matches!(self.peek_at(2), Some(Token::RBracket)) {
            return Ok(false);
        }
        let after = self.group_end(open)?;
        Ok(!Self::starts_type(self.tokens.get(after).map(|s| &s.token)))
    }
}

fn opening_char(token: &Token) -> char {
    match token {
        Token::LParen => '(',
        Token::LBracket => '[',
        _ => '{',
    }
}

fn closing_char(token: &Token) -> char {
    match token {
        Token::RParen => ')',
        Token::RBracket => ']',
        _ => '}',
    }
}
