//! End-to-end conformance tests against the scenarios and properties laid
//! out for the scanner/parser pipeline: token round-tripping, position
//! monotonicity, keyword case-insensitivity, parse determinism, the §4.3
//! validation rules, and twelve literal end-to-end scenarios.

use pgql_parser::ast::{
    Cardinality, Dir, Expr, ModClause, Op, Order, Stmt,
};
use pgql_parser::{TokenKind, parse_str, tokenize};

fn parse_ok(source: &str) -> pgql_parser::Statements {
    match parse_str(source) {
        Ok(stmts) => stmts,
        Err(err) => panic!("unexpected parse failure for `{source}`: {err}"),
    }
}

fn single_stmt(source: &str) -> Stmt {
    let mut stmts = parse_ok(source).stmts;
    assert_eq!(stmts.len(), 1, "expected exactly one statement in `{source}`");
    stmts.remove(0)
}

// Property 1: token round-trip (leading trivia + raw/canonical form
// reconstructs the source modulo trailing whitespace).
#[test]
fn token_round_trip_reconstructs_source() {
    let source = "SELECT n FROM MATCH (n:Person) WHERE n.age > 18;";
    let (tokens, diags) = tokenize(source);
    assert!(diags.is_empty());

    let mut rebuilt = String::new();
    for token in &tokens {
        if token.kind == TokenKind::Eof {
            continue;
        }
        rebuilt.push_str(&token.leading_trivia);
        match &token.text {
            Some(text) => rebuilt.push_str(text),
            None => rebuilt.push_str(&token.kind.to_string()),
        }
    }
    assert_eq!(rebuilt, source);
}

// Property 2: position monotonicity.
#[test]
fn token_positions_are_monotonically_increasing() {
    let source = "SELECT n.name, COUNT(n) FROM MATCH (n:Person)-[:KNOWS]->(m) WHERE n.age > 18 GROUP BY n.name;";
    let (tokens, diags) = tokenize(source);
    assert!(diags.is_empty());
    for pair in tokens.windows(2) {
        assert!(
            pair[1].pos.offset >= pair[0].pos.offset,
            "token offsets went backwards: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}

// Property 3: keyword case-insensitivity.
#[test]
fn keywords_are_case_insensitive() {
    for (upper, lower, title) in [
        ("SELECT", "select", "Select"),
        ("MATCH", "match", "Match"),
        ("WHERE", "where", "Where"),
        ("INSERT", "insert", "Insert"),
        ("PROPERTY", "property", "Property"),
    ] {
        let (tok_upper, _) = tokenize(upper);
        let (tok_lower, _) = tokenize(lower);
        let (tok_title, _) = tokenize(title);
        assert_eq!(tok_upper[0].kind, tok_lower[0].kind, "case mismatch for {upper}");
        assert_eq!(tok_upper[0].kind, tok_title[0].kind, "case mismatch for {upper}");
        assert_ne!(tok_upper[0].kind, TokenKind::UnquotedIdentifier);
    }
}

// Property 4: parse determinism.
#[test]
fn parsing_is_deterministic() {
    let source = "SELECT n.name FROM MATCH (n:Person) WHERE n.age > 18 ORDER BY n.name;";
    let first = parse_ok(source);
    let second = parse_ok(source);
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

// Property 5: validation coverage — minimal failing/passing inputs per §4.3 rule.
mod validation_coverage {
    use super::*;

    #[test]
    fn rule1_all_without_upper_bound_fails() {
        let err = pgql_parser::parse_str("SELECT * FROM MATCH ALL () -> ();").unwrap_err();
        assert!(
            err.messages
                .iter()
                .any(|m| m.contains("an ALL pattern must have an upper bound quantifier"))
        );
    }

    #[test]
    fn rule1_all_with_upper_bound_passes() {
        parse_ok("SELECT * FROM MATCH ALL () -[e]->{1,3} ();");
    }

    #[test]
    fn rule2_insert_without_from_passes() {
        parse_ok("INSERT VERTEX avar;");
    }

    #[test]
    fn rule2_insert_with_where_and_no_from_fails() {
        let err = pgql_parser::parse_str("INSERT VERTEX avar WHERE true;").unwrap_err();
        assert!(err.messages.iter().any(|m| m.contains("WHERE")));
    }

    #[test]
    fn rule3_quoted_identifier_unquotes_doubled_quotes() {
        let stmt = single_stmt(r#"DROP PROPERTY GRAPH "my""graph";"#);
        match stmt {
            Stmt::Drop(drop) => assert_eq!(drop.graph_name.first().name, r#"my"graph"#),
            other => panic!("expected DropStmt, got {other:?}"),
        }
    }
}

// Scenarios S1-S12, literal inputs from the end-to-end conformance list.

#[test]
fn s1_create_simple_graph() {
    let stmt = single_stmt("CREATE PROPERTY GRAPH mygraph VERTEX TABLES(atbl);");
    match stmt {
        Stmt::Create(create) => {
            assert_eq!(create.graph_name.names.len(), 1);
            assert_eq!(create.graph_name.first().name, "mygraph");
            assert_eq!(create.vertex_tables.len(), 1);
            assert_eq!(create.vertex_tables[0].table_name.first().name, "atbl");
        }
        other => panic!("expected CreateStmt, got {other:?}"),
    }
}

#[test]
fn s2_create_qualified_graph_name() {
    let stmt = single_stmt("CREATE PROPERTY GRAPH asch.mygraph VERTEX TABLES(atbl);");
    match stmt {
        Stmt::Create(create) => {
            let names: Vec<_> = create.graph_name.names.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(names, vec!["asch", "mygraph"]);
        }
        other => panic!("expected CreateStmt, got {other:?}"),
    }
}

#[test]
fn s3_wildcard_select_has_empty_sels_and_empty_vertex_pattern() {
    let stmt = single_stmt("SELECT * FROM MATCH();");
    match stmt {
        Stmt::Select(select) => {
            assert!(select.sels.is_empty());
            assert_eq!(select.from.len(), 1);
            assert_eq!(select.from[0].patterns.len(), 1);
            let pattern = &select.from[0].patterns[0];
            assert_eq!(pattern.vs.len(), 1);
            assert!(pattern.vs[0].name.is_none());
            assert!(pattern.vs[0].labels.is_empty());
        }
        other => panic!("expected SelectStmt, got {other:?}"),
    }
}

#[test]
fn s4_distinct_with_named_select_element() {
    let stmt = single_stmt("SELECT DISTINCT acolumn FROM MATCH();");
    match stmt {
        Stmt::Select(select) => {
            assert!(select.distinct);
            assert_eq!(select.sels.len(), 1);
            assert!(select.sels[0].expr.is_some());
        }
        other => panic!("expected SelectStmt, got {other:?}"),
    }
}

#[test]
fn s5_precedence_multiplication_binds_tighter_on_the_right() {
    let stmt = single_stmt("SELECT * FROM MATCH() WHERE 2 + 3 * 4;");
    match stmt {
        Stmt::Select(select) => {
            let Expr::Op(op) = select.where_clause.unwrap() else { panic!("expected OpExpr") };
            assert_eq!(op.op, Op::Add);
            let Expr::Op(rhs) = &op.args[1] else { panic!("expected OpExpr on rhs") };
            assert_eq!(rhs.op, Op::Mul);
        }
        other => panic!("expected SelectStmt, got {other:?}"),
    }
}

#[test]
fn s6_precedence_multiplication_binds_tighter_on_the_left() {
    let stmt = single_stmt("SELECT * FROM MATCH() WHERE 2 * 3 + 4;");
    match stmt {
        Stmt::Select(select) => {
            let Expr::Op(op) = select.where_clause.unwrap() else { panic!("expected OpExpr") };
            assert_eq!(op.op, Op::Add);
            let Expr::Op(lhs) = &op.args[0] else { panic!("expected OpExpr on lhs") };
            assert_eq!(lhs.op, Op::Mul);
        }
        other => panic!("expected SelectStmt, got {other:?}"),
    }
}

#[test]
fn s7_any_cardinality_reachability_edge_with_label() {
    let stmt = single_stmt("SELECT * FROM MATCH ANY () -/:albl/-> ();");
    match stmt {
        Stmt::Select(select) => {
            let pattern = &select.from[0].patterns[0];
            assert_eq!(pattern.cardinality, Cardinality::Any);
            assert_eq!(pattern.vs.len(), 2);
            assert_eq!(pattern.es.len(), 1);
            let edge = &pattern.es[0].es[0];
            assert!(edge.reachability);
            assert_eq!(edge.dir, Dir::Outgoing);
            assert_eq!(edge.labels[0].name, "albl");
        }
        other => panic!("expected SelectStmt, got {other:?}"),
    }
}

#[test]
fn s8_count_distinct_encodes_bool_flag_then_argument() {
    let stmt = single_stmt("SELECT COUNT(DISTINCT 2) FROM MATCH();");
    match stmt {
        Stmt::Select(select) => {
            let Some(Expr::Op(op)) = &select.sels[0].expr else { panic!("expected OpExpr") };
            assert_eq!(op.op, Op::Count);
            assert_eq!(op.args.len(), 2);
            let Expr::BasicLit(flag) = &op.args[0] else { panic!("expected bool flag") };
            assert!(flag.as_bool());
        }
        other => panic!("expected SelectStmt, got {other:?}"),
    }
}

#[test]
fn s9_insert_without_from_passes_validation() {
    let stmt = single_stmt("INSERT VERTEX avar;");
    match stmt {
        Stmt::Modify(modify) => {
            assert_eq!(modify.mods.len(), 1);
            match &modify.mods[0] {
                ModClause::Insert(insert) => assert_eq!(insert.vs[0].var.name, "avar"),
                other => panic!("expected InsertClause, got {other:?}"),
            }
        }
        other => panic!("expected ModifyStmt, got {other:?}"),
    }
}

#[test]
fn s10_insert_with_from_parses_but_with_where_and_no_from_fails() {
    parse_ok("INSERT VERTEX avar FROM MATCH();");

    let err = parse_str("INSERT VERTEX avar WHERE x;").unwrap_err();
    assert!(err.to_string().contains("WHERE") || format!("{err}").contains("modify statement"));
}

#[test]
fn s11_all_without_upper_bound_quantifier_fails() {
    let err = parse_str("SELECT * FROM MATCH ALL () -> ();").unwrap_err();
    assert!(err.to_string().contains("an ALL pattern must have an upper bound quantifier"));
}

#[test]
fn s12_quoted_identifier_unquotes_doubled_quotes() {
    let stmt = single_stmt(r#"DROP PROPERTY GRAPH "my""graph";"#);
    match stmt {
        Stmt::Drop(drop) => assert_eq!(drop.graph_name.first().name, r#"my"graph"#),
        other => panic!("expected DropStmt, got {other:?}"),
    }
}

#[test]
fn order_by_desc_is_preserved() {
    let stmt = single_stmt("SELECT n FROM MATCH (n) ORDER BY n.age DESC;");
    match stmt {
        Stmt::Select(select) => assert_eq!(select.order_by[0].order, Order::Desc),
        other => panic!("expected SelectStmt, got {other:?}"),
    }
}
