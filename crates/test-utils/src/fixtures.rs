// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures and sample SQL queries
//!
//! Queries against the MySQL `world` sample schema (`city`, `country`).

/// Sample SQL queries for testing
pub struct SqlFixtures;

impl SqlFixtures {
    // ===== SELECT queries =====

    pub const fn select_city() -> &'static str {
        "SELECT ID, Name, CountryCode FROM city"
    }

    /// Qualified columns over an aliased table
    pub const fn select_aliased() -> &'static str {
        "SELECT ci.ID, ci.Name FROM world.city AS ci WHERE ci.ID > 10"
    }

    /// Columns of an aliased sub-query
    pub const fn select_sub_query() -> &'static str {
        "SELECT * FROM (SELECT ci.ID, ci.Name FROM world.city AS ci) AS sub"
    }

    /// Sub-query selecting everything from a nested sub-query
    pub const fn select_nested_sub_query() -> &'static str {
        "SELECT * FROM (SELECT * FROM (SELECT ID, Name FROM city) AS inner_sub) AS outer_sub"
    }

    // ===== JOIN queries =====

    pub const fn left_join() -> &'static str {
        "select * from city left join country on city.CountryCode = country.Code"
    }

    /// Several joins, each table aliased
    pub const fn multiple_joins() -> &'static str {
        "SELECT ci.Name, co.Name, cl.Language
         FROM city ci
         INNER JOIN country co ON ci.CountryCode = co.Code
         LEFT JOIN countrylanguage cl ON co.Code = cl.CountryCode"
    }

    // ===== INSERT queries =====

    pub const fn simple_insert() -> &'static str {
        "insert into city (ID, Name, CountryCode) VALUES (123, 'aaa', '2020')"
    }

    pub const fn bulk_insert() -> &'static str {
        "insert into city (ID, Name) VALUES (1, 'a'), (2, 'b'), (3, 'c')"
    }

    // ===== Multiple statements =====

    pub const fn two_statements() -> &'static str {
        "SELECT ID FROM city;\nSELECT Code FROM country;"
    }
}
