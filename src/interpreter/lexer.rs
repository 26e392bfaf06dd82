use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Identifier tokens; variable or function names such as `x` or `adder`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// Integer literal tokens, such as `42`.
    ///
    /// The raw digits are kept as text; numeric conversion happens in the
    /// parser so that overflow is a parse error, not a lexer concern.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens, such as `"hello"`.
    ///
    /// The payload is the contents without the surrounding quotes. There is
    /// no escape processing. An unterminated string runs to end of input.
    #[regex(r#""[^"]*"?"#, |lex| {
        let s = &lex.slice()[1..];
        s.strip_suffix('"').unwrap_or(s).to_string()
    })]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// End of input. A NUL byte acts as the same sentinel inside a stream.
    #[token("\u{0}")]
    Eof,
    /// Any byte no other rule recognizes.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),

    /// Tabs, carriage returns and spaces.
    #[regex(r"[ \t\r]+", logos::skip)]
    Whitespace,
    /// Line feeds.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Token {
    /// Returns the stable tag naming this token's kind.
    ///
    /// Operator and delimiter tokens are tagged with their surface text;
    /// every other kind has a symbolic name. These tags appear verbatim in
    /// parser error messages.
    ///
    /// # Example
    /// ```
    /// use simia::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Ident("adder".to_string()).kind(), "IDENT");
    /// assert_eq!(Token::Assign.kind(), "=");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ident(_) => "IDENT",
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Eof => "EOF",
            Self::Illegal(_) => "ILLEGAL",
            Self::Whitespace | Self::Newline => "ILLEGAL",
        }
    }

    /// Returns the surface text this token was read from.
    ///
    /// For string tokens this is the contents without quotes; the `Eof`
    /// sentinel has no surface text.
    #[must_use]
    pub fn literal(&self) -> String {
        match self {
            Self::Ident(s) | Self::Int(s) | Self::Str(s) | Self::Illegal(s) => s.clone(),
            Self::Function => "fn".to_string(),
            Self::Let => "let".to_string(),
            Self::True => "true".to_string(),
            Self::False => "false".to_string(),
            Self::If => "if".to_string(),
            Self::Else => "else".to_string(),
            Self::Return => "return".to_string(),
            Self::Eof => String::new(),
            _ => self.kind().to_string(),
        }
    }
}

/// Tokenizes a whole source string.
///
/// Every token is paired with the line it started on. Bytes no rule
/// recognizes become [`Token::Illegal`] rather than aborting the scan; the
/// parser turns them into diagnostics. The returned stream always ends with
/// a single [`Token::Eof`].
///
/// # Example
/// ```
/// use simia::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("let five = 5;");
///
/// assert_eq!(tokens[0].0, Token::Let);
/// assert_eq!(tokens[1].0, Token::Ident("five".to_string()));
/// assert_eq!(tokens.last().unwrap().0, Token::Eof);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), lexer.extras.line)),
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    tokens
}
