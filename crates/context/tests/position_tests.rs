// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Syntax position classification for cursors in partial SQL

use sqlsense_context::{NodeWalker, SyntaxPosition, check_syntax_position};
use sqlsense_grammar::Pos;
use sqlsense_parser::parse;
use sqlsense_test_utils::{SqlFixtures, init_tracing, parse_cursor};

fn position(fixture: &str) -> SyntaxPosition {
    init_tracing();
    let (text, pos) = parse_cursor(fixture);
    position_at(&text, pos)
}

fn position_at(text: &str, pos: Pos) -> SyntaxPosition {
    let root = parse(text).unwrap();
    check_syntax_position(&NodeWalker::new(&root, pos))
}

#[test]
fn test_insert_value() {
    // inside the digits of 'aaa'
    assert_eq!(
        position_at(SqlFixtures::simple_insert(), Pos::new(0, 57)),
        SyntaxPosition::InsertValue
    );
}

#[test]
fn test_insert_column() {
    assert_eq!(position("insert into city (|)"), SyntaxPosition::InsertColumn);
    assert_eq!(position("insert into city(|)"), SyntaxPosition::InsertColumn);
}

#[test]
fn test_join_clause() {
    assert_eq!(
        position_at("select CountryCode from city join ", Pos::new(0, 34)),
        SyntaxPosition::JoinClause
    );
}

#[test]
fn test_join_table_before_on() {
    assert_eq!(
        position("select * from city join | on x"),
        SyntaxPosition::TableReference
    );
}

#[test]
fn test_join_on() {
    assert_eq!(
        position_at("select * from city left join country on ", Pos::new(0, 40)),
        SyntaxPosition::JoinOn
    );
}

#[test]
fn test_join_on_qualified_column() {
    assert_eq!(
        position_at("select * from city left join country on country.", Pos::new(0, 48)),
        SyntaxPosition::ColName
    );
}

#[test]
fn test_join_on_right_side() {
    assert_eq!(
        position("select * from city left join country on city.ID = |"),
        SyntaxPosition::WhereCondition
    );
}

#[test]
fn test_select_expr_inside_sub_query() {
    assert_eq!(
        position("SELECT * FROM (SELECT ci.| FROM world.city AS ci) AS sub"),
        SyntaxPosition::SelectExpr
    );
}

#[test]
fn test_table_reference() {
    assert_eq!(position("select * from |"), SyntaxPosition::TableReference);
    assert_eq!(position("delete from |"), SyntaxPosition::TableReference);
    assert_eq!(position("insert into |"), SyntaxPosition::TableReference);
}

#[test]
fn test_alias_name() {
    assert_eq!(position("select a as | from t"), SyntaxPosition::AliasName);
}

#[test]
fn test_case_value() {
    assert_eq!(
        position("select case when | from t"),
        SyntaxPosition::CaseValue
    );
}

#[test]
fn test_group_by() {
    assert_eq!(
        position("select a from t group by |"),
        SyntaxPosition::ColName
    );
}

#[test]
fn test_unknown() {
    assert_eq!(position("|"), SyntaxPosition::Unknown);
    assert_eq!(position("select a from t |"), SyntaxPosition::Unknown);
}

#[test]
fn test_second_statement() {
    let text = SqlFixtures::two_statements();
    assert_eq!(
        position_at(text, Pos::new(1, 7)),
        SyntaxPosition::SelectExpr
    );
}

#[test]
fn test_set_is_col_name() {
    assert_eq!(position("update city set |"), SyntaxPosition::ColName);
}

#[test]
fn test_select_modifiers() {
    for fixture in [
        "select all | from t",
        "select distinct | from t",
        "select distinctrow | from t",
    ] {
        assert_eq!(position(fixture), SyntaxPosition::SelectExpr, "{}", fixture);
    }
}

#[test]
fn test_logical_operators_and_having() {
    for fixture in [
        "select a from t group by a having |",
        "select * from t where a = 1 or |",
        "select * from t where a = 1 xor |",
    ] {
        assert_eq!(position(fixture), SyntaxPosition::WhereCondition, "{}", fixture);
    }
}

#[test]
fn test_table_reference_keywords() {
    for fixture in [
        "update |",
        "select * from a cross join |",
        "describe |",
        "desc |",
        "truncate |",
    ] {
        assert_eq!(position(fixture), SyntaxPosition::TableReference, "{}", fixture);
    }
}

#[test]
fn test_insert_value_after_comma() {
    assert_eq!(
        position("insert into city (ID, Name) VALUES (1, 'a'), (2, |)"),
        SyntaxPosition::InsertValue
    );
}
