use simia::interpreter::lexer::{Token, lex};

fn kinds(source: &str) -> Vec<&'static str> {
    lex(source).iter().map(|(token, _)| token.kind()).collect()
}

#[test]
fn tokenizes_a_representative_program() {
    let source = "let five = 5;
let ten = 10;
let add = fn(x, y) {
    x + y;
};
let result = add(five, ten);
!-/*5;
5 < 10 > 5;
if (5 < 10) {
    return true;
} else {
    return false;
}
10 == 10;
10 != 9;
\"foobar\"
\"foo bar\"
[1, 2];
{\"foo\": \"bar\"}
";

    let expected = [Token::Let,
                    Token::Ident("five".to_string()),
                    Token::Assign,
                    Token::Int("5".to_string()),
                    Token::Semicolon,
                    Token::Let,
                    Token::Ident("ten".to_string()),
                    Token::Assign,
                    Token::Int("10".to_string()),
                    Token::Semicolon,
                    Token::Let,
                    Token::Ident("add".to_string()),
                    Token::Assign,
                    Token::Function,
                    Token::LParen,
                    Token::Ident("x".to_string()),
                    Token::Comma,
                    Token::Ident("y".to_string()),
                    Token::RParen,
                    Token::LBrace,
                    Token::Ident("x".to_string()),
                    Token::Plus,
                    Token::Ident("y".to_string()),
                    Token::Semicolon,
                    Token::RBrace,
                    Token::Semicolon,
                    Token::Let,
                    Token::Ident("result".to_string()),
                    Token::Assign,
                    Token::Ident("add".to_string()),
                    Token::LParen,
                    Token::Ident("five".to_string()),
                    Token::Comma,
                    Token::Ident("ten".to_string()),
                    Token::RParen,
                    Token::Semicolon,
                    Token::Bang,
                    Token::Minus,
                    Token::Slash,
                    Token::Asterisk,
                    Token::Int("5".to_string()),
                    Token::Semicolon,
                    Token::Int("5".to_string()),
                    Token::Lt,
                    Token::Int("10".to_string()),
                    Token::Gt,
                    Token::Int("5".to_string()),
                    Token::Semicolon,
                    Token::If,
                    Token::LParen,
                    Token::Int("5".to_string()),
                    Token::Lt,
                    Token::Int("10".to_string()),
                    Token::RParen,
                    Token::LBrace,
                    Token::Return,
                    Token::True,
                    Token::Semicolon,
                    Token::RBrace,
                    Token::Else,
                    Token::LBrace,
                    Token::Return,
                    Token::False,
                    Token::Semicolon,
                    Token::RBrace,
                    Token::Int("10".to_string()),
                    Token::Eq,
                    Token::Int("10".to_string()),
                    Token::Semicolon,
                    Token::Int("10".to_string()),
                    Token::NotEq,
                    Token::Int("9".to_string()),
                    Token::Semicolon,
                    Token::Str("foobar".to_string()),
                    Token::Str("foo bar".to_string()),
                    Token::LBracket,
                    Token::Int("1".to_string()),
                    Token::Comma,
                    Token::Int("2".to_string()),
                    Token::RBracket,
                    Token::Semicolon,
                    Token::LBrace,
                    Token::Str("foo".to_string()),
                    Token::Colon,
                    Token::Str("bar".to_string()),
                    Token::RBrace,
                    Token::Eof];

    let found: Vec<Token> = lex(source).into_iter().map(|(token, _)| token).collect();
    assert_eq!(found, expected.to_vec());
}

#[test]
fn two_character_operators_win_over_single() {
    assert_eq!(kinds("= =="), vec!["=", "==", "EOF"]);
    assert_eq!(kinds("! !="), vec!["!", "!=", "EOF"]);
    assert_eq!(kinds("==="), vec!["==", "=", "EOF"]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("fn let true false if else return"),
               vec!["FUNCTION", "LET", "TRUE", "FALSE", "IF", "ELSE", "RETURN", "EOF"]);
    // A keyword prefix inside a longer name stays an identifier.
    assert_eq!(lex("lettuce fnord")[0].0, Token::Ident("lettuce".to_string()));
    assert_eq!(lex("lettuce fnord")[1].0, Token::Ident("fnord".to_string()));
}

#[test]
fn strings_have_no_escape_processing() {
    assert_eq!(lex("\"hello world\"")[0].0, Token::Str("hello world".to_string()));
    assert_eq!(lex("\"with \\ backslash\"")[0].0, Token::Str("with \\ backslash".to_string()));
    // An unterminated string runs to end of input.
    assert_eq!(lex("\"runs off")[0].0, Token::Str("runs off".to_string()));
    assert_eq!(lex("\"\"")[0].0, Token::Str(String::new()));
}

#[test]
fn unrecognized_bytes_become_illegal_tokens() {
    assert_eq!(lex("@")[0].0, Token::Illegal("@".to_string()));
    assert_eq!(kinds("1 @ 2"), vec!["INT", "ILLEGAL", "INT", "EOF"]);
    assert_eq!(kinds("a & b"), vec!["IDENT", "ILLEGAL", "IDENT", "EOF"]);
}

#[test]
fn tokens_carry_line_numbers() {
    let tokens = lex("let x = 1\nlet y = 2\n\nlet z = 3");

    let line_of = |name: &str| {
        tokens.iter()
              .find(|(token, _)| *token == Token::Ident(name.to_string()))
              .map(|(_, line)| *line)
              .unwrap()
    };

    assert_eq!(line_of("x"), 1);
    assert_eq!(line_of("y"), 2);
    assert_eq!(line_of("z"), 4);
}

#[test]
fn literals_round_trip() {
    let source = "let add = fn(x, y) { x + y; }; add(1, 2) == 3; \"str\" != \"other\"; [1][0]";

    let tokens = lex(source);
    let rebuilt: Vec<String> = tokens.iter()
                                     .take(tokens.len() - 1)
                                     .map(|(token, _)| match token {
                                         Token::Str(contents) => format!("\"{contents}\""),
                                         token => token.literal(),
                                     })
                                     .collect();
    let rebuilt = rebuilt.join(" ");

    let relexed: Vec<Token> = lex(&rebuilt).into_iter().map(|(token, _)| token).collect();
    let original: Vec<Token> = lex(source).into_iter().map(|(token, _)| token).collect();
    assert_eq!(relexed, original);
}
