use lox::{ErrorKind, Literal, LoxError, Scanner, Token, TokenKind};

use rand::{seq::SliceRandom, Rng};

fn scan(src: &str) -> (Vec<Token>, Vec<LoxError>) {
    let mut errors = Vec::new();
    let tokens = Scanner::new(src).scan_tokens(&mut errors);
    (tokens, errors)
}

fn check_invariants(src: &str, tokens: &[Token]) {
    assert_eq!(
        tokens.iter().filter(|t| t.is_eof()).count(),
        1,
        "one eof in {src:?}"
    );

    let eof = tokens.last().unwrap();
    assert!(eof.is_eof(), "eof last in {src:?}");
    assert_eq!(eof.lexeme, "");
    assert_eq!(eof.literal, None);

    assert!(
        tokens.windows(2).all(|w| w[0].line <= w[1].line),
        "lines non-decreasing in {src:?}"
    );
    assert!(tokens.iter().all(|t| t.line >= 1));

    for token in tokens {
        match token.kind {
            TokenKind::Number => {
                assert!(!token.lexeme.starts_with('.') && !token.lexeme.ends_with('.'));
                assert_eq!(
                    token.literal,
                    Some(Literal::Number(token.lexeme.parse().unwrap()))
                );
            }
            TokenKind::String => {
                let inner = &token.lexeme[1..token.lexeme.len() - 1];
                assert_eq!(token.literal, Some(Literal::String(inner)));
            }
            _ => assert_eq!(token.literal, None),
        }
    }
}

#[test]
fn scan_correctly() {
    let src = "( ) { } , . - + ; / * ! != = == > >= < <= \
               ident \"string\" 3.14 23 \
               and class else false for fun if nil or print return super this true var while";
    let (tokens, errors) = scan(src);
    assert!(errors.is_empty());

    use TokenKind::*;
    let tk: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        tk,
        vec![
            LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus, Semicolon,
            Slash, Star, Bang, BangEqual, Equal, EqualEqual, Greater, GreaterEqual, Less,
            LessEqual, Identifier, String, Number, Number, And, Class, Else, False, For, Fun,
            If, Nil, Or, Print, Return, Super, This, True, Var, While, Eof
        ]
    );
    check_invariants(src, &tokens);
}

#[test]
fn reports_every_error() {
    let src = "var a = @;\nvar b = #;\nprint \"never closed\n";
    let (tokens, errors) = scan(src);

    let lines: Vec<Option<usize>> = errors.iter().map(LoxError::get_line).collect();
    assert_eq!(lines, &[Some(1), Some(2), Some(4)]);
    assert!(matches!(
        errors[0].kind(),
        ErrorKind::UnexpectedCharacter { character: '@' }
    ));
    assert!(matches!(
        errors[1].kind(),
        ErrorKind::UnexpectedCharacter { character: '#' }
    ));
    assert!(matches!(errors[2].kind(), ErrorKind::UnterminatedString));

    // scanning went on past each error
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Var).count(),
        2
    );
    assert_eq!(tokens[tokens.len() - 2].kind, TokenKind::Print);
    check_invariants(src, &tokens);
}

#[test]
fn error_messages() {
    let errors = lox::scan("@\n\"abc").unwrap_err();
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        &[
            "[line 1] Error: Unexpected '@' character.",
            "[line 2] Error: Unterminated string.",
        ]
    );
}

#[test]
fn comment_then_tokens() {
    let tokens = lox::scan("1 + 2 // comment\n3").unwrap();
    let summary: Vec<(TokenKind, usize)> = tokens.iter().map(|t| (t.kind, t.line)).collect();
    assert_eq!(
        summary,
        &[
            (TokenKind::Number, 1),
            (TokenKind::Plus, 1),
            (TokenKind::Number, 1),
            (TokenKind::Number, 2),
            (TokenKind::Eof, 2),
        ]
    );
}

#[test]
fn random_punctuation() {
    let punctuation = ['(', ')', '{', '}', ',', '.', '-', '+', ';', '*'];
    let whitespace = [' ', '\t', '\n'];
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let len = rng.gen_range(0..40);
        let src: String = (0..len)
            .map(|_| {
                if rng.gen_bool(0.3) {
                    *whitespace.choose(&mut rng).unwrap()
                } else {
                    *punctuation.choose(&mut rng).unwrap()
                }
            })
            .collect();

        let (tokens, errors) = scan(&src);
        assert!(errors.is_empty());
        check_invariants(&src, &tokens);

        for token in &tokens[..tokens.len() - 1] {
            assert_eq!(token.lexeme.len(), 1);
        }

        let lexemes: String = tokens.iter().map(|t| t.lexeme).collect();
        let stripped: String = src.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(lexemes, stripped);

        let newlines = src.matches('\n').count();
        assert_eq!(tokens.last().unwrap().line, newlines + 1);
    }
}

#[test]
fn random_sources() {
    let pieces = [
        "var", "while", "whilex", "x1", "_", "12", "3.5", "7.", ".", "\"s\"", "\"a\nb\"",
        "\"open", "//c\n", "!", "!=", "=", "==", "<", "<=", ">", ">=", "/", "@", "é", "\n",
        " ", "\t", "\r",
    ];
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let len = rng.gen_range(0..30);
        let src: String = (0..len)
            .map(|_| *pieces.choose(&mut rng).unwrap())
            .collect();

        let (tokens, errors) = scan(&src);
        check_invariants(&src, &tokens);

        let lexical = errors.iter().all(LoxError::is_lexical);
        assert!(lexical);
    }
}
