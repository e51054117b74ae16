// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Tokenizer and parser throughput

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlsense_grammar::tokenize;
use sqlsense_parser::parse;

fn load_queries() -> Vec<(&'static str, &'static str)> {
    vec![
        ("simple_select", "SELECT id, name FROM users WHERE active = true"),
        (
            "complex_join",
            "SELECT u.id, u.name, o.order_id, p.product_name
             FROM users u
             INNER JOIN orders o ON u.id = o.user_id
             LEFT JOIN order_items oi ON o.order_id = oi.order_id
             LEFT JOIN products p ON oi.product_id = p.id
             WHERE o.created_at > '2024-01-01'
             ORDER BY o.order_id",
        ),
        (
            "nested_subquery",
            "SELECT * FROM (SELECT ci.ID, ci.Name FROM world.city AS ci
             WHERE ci.CountryCode IN (SELECT Code FROM country WHERE Population > 1000000)) AS sub",
        ),
        (
            "insert_values",
            "insert into city (ID, Name, CountryCode) VALUES (123, 'aaa', '2020'), (124, 'bbb', '2021')",
        ),
    ]
}

fn benchmark_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for (name, sql) in load_queries() {
        group.bench_with_input(BenchmarkId::from_parameter(name), sql, |b, sql| {
            b.iter(|| tokenize(black_box(sql)))
        });
    }
    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, sql) in load_queries() {
        group.bench_with_input(BenchmarkId::from_parameter(name), sql, |b, sql| {
            b.iter(|| parse(black_box(sql)))
        });
    }
    group.finish();
}

fn benchmark_editing_session(c: &mut Criterion) {
    let text = "select ci.ID, ci.Name from world.city as ci where ci.ID > 10";
    c.bench_function("editing_session", |b| {
        b.iter(|| {
            for end in 1..=text.len() {
                let _ = parse(black_box(&text[..end]));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_tokenize,
    benchmark_parse,
    benchmark_editing_session
);
criterion_main!(benches);
