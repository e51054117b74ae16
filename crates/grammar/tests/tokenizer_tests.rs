// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Tokenizer integration tests
//!
//! Round-trip and position properties across dialects.

use sqlsense_grammar::{
    DialectKind, Kind, KeywordKind, Pos, Token, compare_pos, tokenize, tokenize_with,
};
use std::cmp::Ordering;

fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.render()).collect()
}

#[test]
fn test_round_trip_reproduces_input() {
    let inputs = [
        "SELECT * FROM city WHERE id = 1",
        "select ci.ID, ci.Name from world.city as ci where ci.ID >= 10 and ci.Name <> 'x'",
        "insert into city (ID, Name) VALUES (123, 'it''s')",
        "SELECT a::int, b != c -- trailing\nFROM t /* block\ncomment */ ;",
        "select\t1.5e+3, N'nat', \"Quoted Col\" from t",
        "update t set a = a + 1, b = (c * 2) / 3 % 4 ^ 5",
    ];

    for input in inputs {
        let tokens = tokenize(input).unwrap();
        assert_eq!(render(&tokens), input, "round trip failed for {:?}", input);
    }
}

#[test]
fn test_round_trip_with_dialect_quotes() {
    let mysql = DialectKind::MySql.dialect();
    let tokens = tokenize_with(mysql.as_ref(), "select `order` from `t`").unwrap();
    assert_eq!(render(&tokens), "select `order` from `t`");
    assert_eq!(tokens[2].keyword_kind(), Some(KeywordKind::Unmatched));

    let mssql = DialectKind::MsSql.dialect();
    let tokens = tokenize_with(mssql.as_ref(), "select [my col] from [dbo].[t]").unwrap();
    assert_eq!(render(&tokens), "select [my col] from [dbo].[t]");
    assert_eq!(tokens[2].text(), "my col");
}

#[test]
fn test_doubled_closing_quote_in_delimited_identifier() {
    let tokens = tokenize(r#"select "a""b" from t"#).unwrap();
    assert_eq!(tokens[2].text(), r#"a"b"#);
    assert_eq!(render(&tokens), r#"select "a""b" from t"#);

    let mysql = DialectKind::MySql.dialect();
    let tokens = tokenize_with(mysql.as_ref(), "select `a``b`, `c` from t").unwrap();
    assert_eq!(tokens[2].text(), "a`b");
    assert_eq!(tokens[3].kind, Kind::Comma);
    assert_eq!(render(&tokens), "select `a``b`, `c` from t");

    let mssql = DialectKind::MsSql.dialect();
    let tokens = tokenize_with(mssql.as_ref(), "select [a]]b] from t").unwrap();
    assert_eq!(tokens[2].text(), "a]b");
    assert_eq!(render(&tokens), "select [a]]b] from t");
}

#[test]
fn test_brackets_are_punctuation_in_generic_dialect() {
    let tokens = tokenize("a[1]").unwrap();
    let kinds: Vec<Kind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![Kind::SqlKeyword, Kind::LBracket, Kind::Number, Kind::RBracket]
    );
}

#[test]
fn test_unterminated_string_keeps_partial_content() {
    let tokens = tokenize("select 'abc").unwrap();
    let rendered = render(&tokens);
    // the closing quote is added back on render
    assert_eq!(rendered, "select 'abc'");
    assert_eq!(tokens.last().unwrap().to, Pos::new(0, 11));
}

#[test]
fn test_single_line_positions_are_contiguous() {
    let input = "select CountryCode from city left join country on country.ID = 1";
    let tokens = tokenize(input).unwrap();

    assert_eq!(tokens[0].from, Pos::new(0, 0));
    for pair in tokens.windows(2) {
        assert_eq!(pair[1].from.col, pair[0].to.col);
    }
    for token in &tokens {
        assert_ne!(compare_pos(token.to, token.from), Ordering::Less);
    }
    assert_eq!(tokens.last().unwrap().to.col as usize, input.len());
}

#[test]
fn test_multiline_positions() {
    let tokens = tokenize("select a\nfrom t").unwrap();
    let from = tokens.iter().find(|t| t.is_keyword("FROM")).unwrap();
    assert_eq!(from.from, Pos::new(1, 0));
    assert_eq!(from.to, Pos::new(1, 4));
}

#[test]
fn test_block_comment_spanning_lines_advances_line() {
    let tokens = tokenize("/* a\nb */x").unwrap();
    assert_eq!(tokens[0].to, Pos::new(1, 4));
    assert_eq!(tokens[1].from, Pos::new(1, 4));
}

#[test]
fn test_each_dialect_tokenizes_plain_select() {
    for kind in DialectKind::all() {
        let dialect = kind.dialect();
        let tokens = tokenize_with(dialect.as_ref(), "SELECT id FROM users").unwrap();
        assert_eq!(tokens.len(), 7, "Unexpected token count for {}", kind);
        assert!(tokens[0].is_keyword("select"));
    }
}
