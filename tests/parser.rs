use simia::parse;

fn assert_parses_to(source: &str, expected: &str) {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "parse errors in {source:?}: {errors:?}");
    assert_eq!(program.to_string(), expected, "source: {source}");
}

fn assert_parse_error(source: &str, message: &str) {
    let (_, errors) = parse(source);
    assert!(!errors.is_empty(), "expected a parse error for: {source}");
    assert_eq!(errors[0].to_string(), message, "source: {source}");
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b);"),
                 ("!-a", "(!(-a));"),
                 ("a + b + c", "((a + b) + c);"),
                 ("a + b - c", "((a + b) - c);"),
                 ("a * b * c", "((a * b) * c);"),
                 ("a * b / c", "((a * b) / c);"),
                 ("a + b / c", "(a + (b / c));"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f);"),
                 ("3 + 4; -5 * 5", "(3 + 4); ((-5) * 5);"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4));"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));"),
                 ("true", "true;"),
                 ("false", "false;"),
                 ("3 > 5 == false", "((3 > 5) == false);"),
                 ("3 < 5 == true", "((3 < 5) == true);"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);"),
                 ("(5 + 5) * 2", "((5 + 5) * 2);"),
                 ("2 / (5 + 5)", "(2 / (5 + 5));"),
                 ("-(5 + 5)", "(-(5 + 5));"),
                 ("!(true == true)", "(!(true == true));"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d);"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g));"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d);"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])));")];

    for (source, expected) in cases {
        assert_parses_to(source, expected);
    }
}

#[test]
fn let_statements() {
    assert_parses_to("let x = 5;", "let x = 5;");
    assert_parses_to("let y = true;", "let y = true;");
    assert_parses_to("let foobar = y;", "let foobar = y;");
    // The trailing semicolon is optional.
    assert_parses_to("let x = 5", "let x = 5;");
}

#[test]
fn return_statements() {
    assert_parses_to("return 5;", "return 5;");
    assert_parses_to("return true;", "return true;");
    assert_parses_to("return x + y", "return (x + y);");
}

#[test]
fn if_expressions() {
    assert_parses_to("if (x < y) { x }", "if ((x < y)) { x; };");
    assert_parses_to("if (x < y) { x } else { y }", "if ((x < y)) { x; } else { y; };");
    assert_parses_to("if (x) {}", "if (x) {};");
}

#[test]
fn function_literals() {
    assert_parses_to("fn(x, y) { x + y; }", "fn(x, y) { (x + y); };");
    assert_parses_to("fn() {}", "fn() {};");
    assert_parses_to("fn(x) { return x; }", "fn(x) { return x; };");
    assert_parses_to("fn(x, y, z) { x }", "fn(x, y, z) { x; };");
}

#[test]
fn call_expressions() {
    assert_parses_to("add(1, 2 * 3, 4 + 5);", "add(1, (2 * 3), (4 + 5));");
    assert_parses_to("empty()", "empty();");
    assert_parses_to("fn(x) { x }(5)", "fn(x) { x; }(5);");
}

#[test]
fn literals() {
    assert_parses_to("5;", "5;");
    assert_parses_to("foobar;", "foobar;");
    assert_parses_to("\"hello world\";", "\"hello world\";");
    assert_parses_to("[1, 2 * 2, 3 + 3]", "[1, (2 * 2), (3 + 3)];");
    assert_parses_to("[]", "[];");
    assert_parses_to("myArray[1 + 1]", "(myArray[(1 + 1)]);");
    assert_parses_to("{\"one\": 1, \"two\": 2}", "{\"one\":1, \"two\":2};");
    assert_parses_to("{}", "{};");
    assert_parses_to("{1: true, true: 1}", "{1:true, true:1};");
    assert_parses_to("{\"k\": 1 + 2}", "{\"k\":(1 + 2)};");
}

#[test]
fn pretty_print_is_idempotent() {
    let sources = ["let x = 5; let y = 10; x + y;",
                   "-a * b; !-a",
                   "if (x < y) { x } else { y }",
                   "let adder = fn(x) { fn(y) { x + y } }; adder(2)(3)",
                   "if (10 > 1) { if (10 > 1) { return 10; } return 1; }",
                   "[1, 2, 3][1 + 1]",
                   "{\"one\": 1, 2: \"two\", true: [1, 2]}",
                   "\"Hello\" + \" \" + \"World\"",
                   "let f = fn() {}; f()",
                   "puts(len([1, 2]), first([3]))"];

    for source in sources {
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "parse errors in {source:?}: {errors:?}");
        let printed = program.to_string();

        let (reparsed, errors) = parse(&printed);
        assert!(errors.is_empty(), "printed form does not parse: {printed:?}: {errors:?}");
        assert_eq!(reparsed.to_string(), printed, "not a fixed point: {source}");
        assert_eq!(reparsed, program, "printed form parses to a different tree: {source}");
    }
}

#[test]
fn parse_errors() {
    assert_parse_error("let x 5;", "expected next token to be =, got INT instead");
    assert_parse_error("let = 5;", "expected next token to be IDENT, got = instead");
    assert_parse_error("let", "expected next token to be IDENT, got EOF instead");
    assert_parse_error(";", "no prefix parse function for ; found.");
    assert_parse_error("@", "no prefix parse function for ILLEGAL found.");
    assert_parse_error("if (x { 1 }", "expected next token to be ), got { instead");
    assert_parse_error("fn(x { x }", "expected next token to be ), got { instead");
    assert_parse_error("[1, 2", "expected next token to be ], got EOF instead");
    assert_parse_error("{\"a\" 1}", "expected next token to be :, got INT instead");
    assert_parse_error("9999999999999999999999",
                       "could not parse \"9999999999999999999999\" as integer");
}

#[test]
fn parse_errors_accumulate() {
    let (_, errors) = parse("let x 5; let = 10; 7;");
    assert_eq!(errors.len(), 2);
}

#[test]
fn parse_errors_carry_lines() {
    let (_, errors) = parse("let x = 5;\nlet y 10;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line(), 2);
}

#[test]
fn parse_recovers_after_an_error() {
    let (program, errors) = parse("let x 5; let y = 10;");
    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "let y = 10;");
}
