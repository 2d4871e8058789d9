//! Statements: `CREATE`/`DROP PROPERTY GRAPH`, `SELECT`, and modification
//! statements, plus the clause types they're built from (§4.2 "Modification
//! clauses", §A.6.2).

use crate::ast::{
    CreateStmt, DeleteClause, DropStmt, EdgeInsertion, EdgeTableDecl, Ident, InsertClause,
    ModClause, ModifyStmt, Order, OrderTerm, PathMacroClause, PropAssignment, PropExpr,
    PropsClause, QIdent, SelectElem, SelectStmt, Update, UpdateClause, VertexInsertion,
    VertexTableDecl, VertexTableRef,
};
use crate::lexer::TokenKind;

use super::base::{ParseResult, TokenStream};
use super::expression::parse_expr;
use super::pattern::{parse_match_clause_list, parse_path_pattern};
use super::util::{parse_ident, parse_ident_list, parse_qident};

/// Zero or more leading `PATH name AS (pattern) [WHERE cond]` macros, scoped
/// to the statement that follows them.
pub(crate) fn parse_path_macros(ts: &mut TokenStream) -> ParseResult<Vec<PathMacroClause>> {
    let mut macros = Vec::new();
    while ts.check(TokenKind::Path) {
        ts.advance();
        let name = parse_ident(ts)?;
        ts.expect(TokenKind::As)?;
        ts.expect(TokenKind::LParen)?;
        let pattern = parse_path_pattern(ts)?;
        ts.expect(TokenKind::RParen)?;
        let where_clause = if ts.consume(TokenKind::Where) { Some(parse_expr(ts)?) } else { None };
        macros.push(PathMacroClause { name, pattern, where_clause });
    }
    Ok(macros)
}

/// `SELECT [DISTINCT] sels FROM match_clauses [WHERE ...] [GROUP BY ...]
/// [HAVING ...] [ORDER BY ...] [LIMIT ...] [OFFSET ...]`. `path_macros` is
/// left empty — the caller attaches whatever macros preceded the statement.
pub(crate) fn parse_select_stmt(ts: &mut TokenStream) -> ParseResult<SelectStmt> {
    let pos = ts.expect(TokenKind::Select)?;
    let distinct = ts.consume(TokenKind::Distinct);
    let sels = parse_select_list(ts)?;
    ts.expect(TokenKind::From)?;
    let from = parse_match_clause_list(ts)?;
    let where_clause = if ts.consume(TokenKind::Where) { Some(parse_expr(ts)?) } else { None };
    let group_by = parse_group_by_opt(ts)?;
    let having = if ts.consume(TokenKind::Having) { Some(parse_expr(ts)?) } else { None };
    let order_by = parse_order_by_opt(ts)?;
    let limit = if ts.consume(TokenKind::Limit) { Some(parse_expr(ts)?) } else { None };
    let offset = if ts.consume(TokenKind::Offset) { Some(parse_expr(ts)?) } else { None };
    Ok(SelectStmt {
        path_macros: Vec::new(),
        sels,
        from,
        where_clause,
        group_by,
        having,
        limit,
        offset,
        order_by,
        distinct,
        pos,
    })
}

/// `*` collapses to an empty list (§8 S3); otherwise a comma-separated list
/// of `expr [AS name]` / `ident.* [PREFIX 'str']` items.
fn parse_select_list(ts: &mut TokenStream) -> ParseResult<Vec<SelectElem>> {
    if ts.check(TokenKind::Star) {
        ts.advance();
        return Ok(Vec::new());
    }
    let mut elems = vec![parse_select_elem(ts)?];
    while ts.consume(TokenKind::Comma) {
        elems.push(parse_select_elem(ts)?);
    }
    Ok(elems)
}

fn parse_select_elem(ts: &mut TokenStream) -> ParseResult<SelectElem> {
    if matches!(ts.current().kind, TokenKind::UnquotedIdentifier | TokenKind::QuotedIdentifier) {
        let checkpoint = ts.position();
        let mut names = vec![parse_ident(ts)?];
        while ts.check(TokenKind::Dot) && ts.peek().map(|t| t.kind) != Some(TokenKind::Star) {
            ts.advance();
            names.push(parse_ident(ts)?);
        }
        if ts.consume(TokenKind::Dot) {
            ts.expect(TokenKind::Star)?;
            let prefix = parse_prefix_opt(ts)?;
            return Ok(SelectElem {
                expr: None,
                alias: None,
                all_of: Some(QIdent::new(names)),
                prefix,
            });
        }
        ts.set_position(checkpoint);
    }
    let expr = parse_expr(ts)?;
    let alias = if ts.consume(TokenKind::As) { Some(parse_ident(ts)?) } else { None };
    Ok(SelectElem { expr: Some(expr), alias, all_of: None, prefix: None })
}

fn parse_prefix_opt(ts: &mut TokenStream) -> ParseResult<Option<String>> {
    if ts.consume(TokenKind::Prefix) {
        let tok = ts.current().clone();
        ts.expect(TokenKind::StringLiteral)?;
        Ok(Some(tok.text.expect("string literal carries text").to_string()))
    } else {
        Ok(None)
    }
}

fn parse_group_by_opt(ts: &mut TokenStream) -> ParseResult<Vec<crate::ast::Expr>> {
    if ts.consume(TokenKind::Group) {
        ts.expect(TokenKind::By)?;
        parse_expr_list(ts)
    } else {
        Ok(Vec::new())
    }
}

fn parse_order_by_opt(ts: &mut TokenStream) -> ParseResult<Vec<OrderTerm>> {
    if ts.consume(TokenKind::Order) {
        ts.expect(TokenKind::By)?;
        let mut terms = vec![parse_order_term(ts)?];
        while ts.consume(TokenKind::Comma) {
            terms.push(parse_order_term(ts)?);
        }
        Ok(terms)
    } else {
        Ok(Vec::new())
    }
}

fn parse_order_term(ts: &mut TokenStream) -> ParseResult<OrderTerm> {
    let expr = parse_expr(ts)?;
    let order = if ts.consume(TokenKind::Asc) {
        Order::Asc
    } else if ts.consume(TokenKind::Desc) {
        Order::Desc
    } else {
        Order::Default
    };
    Ok(OrderTerm { expr, order })
}

fn parse_expr_list(ts: &mut TokenStream) -> ParseResult<Vec<crate::ast::Expr>> {
    let mut exprs = vec![parse_expr(ts)?];
    while ts.consume(TokenKind::Comma) {
        exprs.push(parse_expr(ts)?);
    }
    Ok(exprs)
}

/// `INSERT`/`UPDATE`/`DELETE` clauses, optionally followed by `FROM
/// MATCH(...)` and the rest of the query shape (§4.2, §4.3 rule 2).
/// `path_macros` is left empty; the caller attaches whatever preceded it.
pub(crate) fn parse_modify_stmt(ts: &mut TokenStream) -> ParseResult<ModifyStmt> {
    let pos = ts.current().pos;
    let mut mods = vec![parse_mod_clause(ts)?];
    while matches!(ts.current().kind, TokenKind::Insert | TokenKind::Update | TokenKind::Delete) {
        mods.push(parse_mod_clause(ts)?);
    }
    let from = if ts.consume(TokenKind::From) { parse_match_clause_list(ts)? } else { Vec::new() };
    let where_clause = if ts.consume(TokenKind::Where) { Some(parse_expr(ts)?) } else { None };
    let group_by = parse_group_by_opt(ts)?;
    let having = if ts.consume(TokenKind::Having) { Some(parse_expr(ts)?) } else { None };
    let order_by = parse_order_by_opt(ts)?;
    let limit = if ts.consume(TokenKind::Limit) { Some(parse_expr(ts)?) } else { None };
    let offset = if ts.consume(TokenKind::Offset) { Some(parse_expr(ts)?) } else { None };
    Ok(ModifyStmt {
        path_macros: Vec::new(),
        mods,
        from,
        where_clause,
        group_by,
        having,
        limit,
        offset,
        order_by,
        pos,
    })
}

/// Validation rule 2 (§4.3): a FROM-less modify statement must carry exactly
/// one `INSERT` clause and none of the query-shape clauses. Each violation
/// gets its own message naming the disallowed clause.
pub(crate) fn validate_modify_shape(ts: &mut TokenStream, stmt: &ModifyStmt) {
    if !stmt.from.is_empty() {
        return;
    }
    if stmt.mods.len() != 1 || !matches!(stmt.mods[0], ModClause::Insert(_)) {
        ts.push_error(
            stmt.pos,
            "a modify statement without FROM must contain exactly one INSERT clause",
        );
    }
    if !stmt.path_macros.is_empty() {
        ts.push_error(stmt.pos, "a modify statement without FROM must not have a PATH clause");
    }
    if stmt.where_clause.is_some() {
        ts.push_error(stmt.pos, "a modify statement without FROM must not have a WHERE clause");
    }
    if !stmt.group_by.is_empty() {
        ts.push_error(stmt.pos, "a modify statement without FROM must not have a GROUP BY clause");
    }
    if stmt.having.is_some() {
        ts.push_error(stmt.pos, "a modify statement without FROM must not have a HAVING clause");
    }
    if !stmt.order_by.is_empty() {
        ts.push_error(stmt.pos, "a modify statement without FROM must not have an ORDER BY clause");
    }
    if stmt.limit.is_some() {
        ts.push_error(stmt.pos, "a modify statement without FROM must not have a LIMIT clause");
    }
    if stmt.offset.is_some() {
        ts.push_error(stmt.pos, "a modify statement without FROM must not have an OFFSET clause");
    }
}

fn parse_mod_clause(ts: &mut TokenStream) -> ParseResult<ModClause> {
    match ts.current().kind {
        TokenKind::Insert => parse_insert_clause(ts).map(ModClause::Insert),
        TokenKind::Update => parse_update_clause(ts).map(ModClause::Update),
        TokenKind::Delete => parse_delete_clause(ts).map(ModClause::Delete),
        other => Err(ts.error_here(format!("expected INSERT, UPDATE, or DELETE, found {other}"))),
    }
}

fn parse_insert_clause(ts: &mut TokenStream) -> ParseResult<InsertClause> {
    let pos = ts.expect(TokenKind::Insert)?;
    let into = if ts.consume(TokenKind::Into) { Some(parse_qident(ts)?) } else { None };
    let mut vs = Vec::new();
    let mut es = Vec::new();
    loop {
        match ts.current().kind {
            TokenKind::Vertex => vs.push(parse_vertex_insertion(ts)?),
            TokenKind::Edge => es.push(parse_edge_insertion(ts)?),
            other => return Err(ts.error_here(format!("expected VERTEX or EDGE, found {other}"))),
        }
        if !ts.consume(TokenKind::Comma) {
            break;
        }
    }
    Ok(InsertClause { into, vs, es, pos })
}

fn parse_vertex_insertion(ts: &mut TokenStream) -> ParseResult<VertexInsertion> {
    ts.expect(TokenKind::Vertex)?;
    let var = parse_ident(ts)?;
    let labels = parse_labels_clause_opt(ts)?;
    let props = parse_props_assignments_opt(ts)?;
    Ok(VertexInsertion { var, labels, props })
}

fn parse_edge_insertion(ts: &mut TokenStream) -> ParseResult<EdgeInsertion> {
    ts.expect(TokenKind::Edge)?;
    let var = if ts.check(TokenKind::Between) { None } else { Some(parse_ident(ts)?) };
    ts.expect(TokenKind::Between)?;
    let source = parse_ident(ts)?;
    ts.expect(TokenKind::And)?;
    let dest = parse_ident(ts)?;
    let labels = parse_labels_clause_opt(ts)?;
    let props = parse_props_assignments_opt(ts)?;
    Ok(EdgeInsertion { var, source, dest, labels, props })
}

fn parse_labels_clause_opt(ts: &mut TokenStream) -> ParseResult<Vec<Ident>> {
    if ts.consume(TokenKind::Labels) { parse_ident_list(ts) } else { Ok(Vec::new()) }
}

fn parse_props_assignments_opt(ts: &mut TokenStream) -> ParseResult<Vec<PropAssignment>> {
    if ts.consume(TokenKind::Properties) {
        ts.expect(TokenKind::LParen)?;
        let mut props = vec![parse_prop_assignment(ts)?];
        while ts.consume(TokenKind::Comma) {
            props.push(parse_prop_assignment(ts)?);
        }
        ts.expect(TokenKind::RParen)?;
        Ok(props)
    } else {
        Ok(Vec::new())
    }
}

fn parse_prop_assignment(ts: &mut TokenStream) -> ParseResult<PropAssignment> {
    let prop = parse_qident(ts)?;
    ts.expect(TokenKind::Eq)?;
    let value = parse_expr(ts)?;
    Ok(PropAssignment { prop: Some(prop), value })
}

fn parse_update_clause(ts: &mut TokenStream) -> ParseResult<UpdateClause> {
    let pos = ts.expect(TokenKind::Update)?;
    let mut updates = vec![parse_update_entry(ts)?];
    while ts.consume(TokenKind::Comma) {
        updates.push(parse_update_entry(ts)?);
    }
    Ok(UpdateClause { updates, pos })
}

fn parse_update_entry(ts: &mut TokenStream) -> ParseResult<Update> {
    let var = parse_ident(ts)?;
    ts.expect(TokenKind::Set)?;
    ts.expect(TokenKind::LParen)?;
    let mut props = vec![parse_prop_assignment(ts)?];
    while ts.consume(TokenKind::Comma) {
        props.push(parse_prop_assignment(ts)?);
    }
    ts.expect(TokenKind::RParen)?;
    Ok(Update { var, props })
}

fn parse_delete_clause(ts: &mut TokenStream) -> ParseResult<DeleteClause> {
    let pos = ts.expect(TokenKind::Delete)?;
    let mut vars = vec![parse_ident(ts)?];
    while ts.consume(TokenKind::Comma) {
        vars.push(parse_ident(ts)?);
    }
    Ok(DeleteClause { vars, pos })
}

/// `CREATE PROPERTY GRAPH name VERTEX TABLES(...) [EDGE TABLES(...)]`.
pub(crate) fn parse_create_stmt(ts: &mut TokenStream) -> ParseResult<CreateStmt> {
    let pos = ts.expect(TokenKind::Create)?;
    ts.expect(TokenKind::Property)?;
    ts.expect(TokenKind::Graph)?;
    let graph_name = parse_qident(ts)?;
    ts.expect(TokenKind::Vertex)?;
    ts.expect(TokenKind::Tables)?;
    ts.expect(TokenKind::LParen)?;
    let mut vertex_tables = vec![parse_vertex_table_decl(ts)?];
    while ts.consume(TokenKind::Comma) {
        vertex_tables.push(parse_vertex_table_decl(ts)?);
    }
    ts.expect(TokenKind::RParen)?;
    let edge_tables = if ts.consume(TokenKind::Edge) {
        ts.expect(TokenKind::Tables)?;
        ts.expect(TokenKind::LParen)?;
        let mut edges = vec![parse_edge_table_decl(ts)?];
        while ts.consume(TokenKind::Comma) {
            edges.push(parse_edge_table_decl(ts)?);
        }
        ts.expect(TokenKind::RParen)?;
        edges
    } else {
        Vec::new()
    };
    Ok(CreateStmt { graph_name, vertex_tables, edge_tables, pos })
}

pub(crate) fn parse_drop_stmt(ts: &mut TokenStream) -> ParseResult<DropStmt> {
    let pos = ts.expect(TokenKind::Drop)?;
    ts.expect(TokenKind::Property)?;
    ts.expect(TokenKind::Graph)?;
    let graph_name = parse_qident(ts)?;
    Ok(DropStmt { graph_name, pos })
}

/// Table alias may be introduced with `AS` or bare (§A.6.2).
fn parse_table_alias_opt(ts: &mut TokenStream) -> ParseResult<Option<Ident>> {
    if ts.consume(TokenKind::As) {
        Ok(Some(parse_ident(ts)?))
    } else if matches!(ts.current().kind, TokenKind::UnquotedIdentifier | TokenKind::QuotedIdentifier)
    {
        Ok(Some(parse_ident(ts)?))
    } else {
        Ok(None)
    }
}

fn parse_vertex_table_decl(ts: &mut TokenStream) -> ParseResult<VertexTableDecl> {
    let table_name = parse_qident(ts)?;
    let table_alias = parse_table_alias_opt(ts)?;
    let mut label = None;
    let mut keys = Vec::new();
    let mut props = PropsClause::default();
    loop {
        match ts.current().kind {
            TokenKind::Key => {
                ts.advance();
                keys = parse_ident_list(ts)?;
            }
            TokenKind::Label => {
                ts.advance();
                label = Some(parse_ident(ts)?);
            }
            TokenKind::Properties | TokenKind::No => {
                props = parse_props_clause(ts)?;
            }
            _ => break,
        }
    }
    Ok(VertexTableDecl { table_name, table_alias, label, props, keys })
}

fn parse_edge_table_decl(ts: &mut TokenStream) -> ParseResult<EdgeTableDecl> {
    let table_name = parse_qident(ts)?;
    let table_alias = parse_table_alias_opt(ts)?;
    ts.expect(TokenKind::Source)?;
    let source = parse_vertex_table_ref(ts)?;
    ts.expect(TokenKind::Destination)?;
    let dest = parse_vertex_table_ref(ts)?;
    let mut label = None;
    let mut keys = Vec::new();
    let mut props = PropsClause::default();
    loop {
        match ts.current().kind {
            TokenKind::Key => {
                ts.advance();
                keys = parse_ident_list(ts)?;
            }
            TokenKind::Label => {
                ts.advance();
                label = Some(parse_ident(ts)?);
            }
            TokenKind::Properties | TokenKind::No => {
                props = parse_props_clause(ts)?;
            }
            _ => break,
        }
    }
    Ok(EdgeTableDecl { table_name, table_alias, source, dest, label, props, keys })
}

/// `SOURCE`/`DESTINATION` reference: `tbl` alone, or `KEY (cols) REFERENCES
/// tbl (cols)` (§A.6.2).
fn parse_vertex_table_ref(ts: &mut TokenStream) -> ParseResult<VertexTableRef> {
    if ts.consume(TokenKind::Key) {
        let keys = parse_ident_list(ts)?;
        ts.expect(TokenKind::References)?;
        let table_name = parse_qident(ts)?;
        let columns = parse_ident_list(ts)?;
        Ok(VertexTableRef { keys, table_name, columns })
    } else {
        let table_name = parse_qident(ts)?;
        Ok(VertexTableRef { keys: Vec::new(), table_name, columns: Vec::new() })
    }
}

/// The three `PROPERTIES` forms (§A.6.2): `NO PROPERTIES`, `PROPERTIES
/// (ALL COLUMNS | ARE ALL COLUMNS) [EXCEPT (...)]`, or an explicit list.
fn parse_props_clause(ts: &mut TokenStream) -> ParseResult<PropsClause> {
    if ts.consume(TokenKind::No) {
        ts.expect(TokenKind::Properties)?;
        return Ok(PropsClause { none: true, except: Vec::new(), exprs: Vec::new() });
    }
    ts.expect(TokenKind::Properties)?;
    if ts.consume(TokenKind::Are) {
        ts.expect(TokenKind::All)?;
        ts.expect(TokenKind::Columns)?;
        let except = parse_except_opt(ts)?;
        return Ok(PropsClause { none: false, except, exprs: Vec::new() });
    }
    ts.expect(TokenKind::LParen)?;
    if ts.consume(TokenKind::All) {
        ts.expect(TokenKind::Columns)?;
        let except = parse_except_opt(ts)?;
        ts.expect(TokenKind::RParen)?;
        return Ok(PropsClause { none: false, except, exprs: Vec::new() });
    }
    let mut exprs = vec![parse_prop_expr(ts)?];
    while ts.consume(TokenKind::Comma) {
        exprs.push(parse_prop_expr(ts)?);
    }
    ts.expect(TokenKind::RParen)?;
    Ok(PropsClause { none: false, except: Vec::new(), exprs })
}

fn parse_except_opt(ts: &mut TokenStream) -> ParseResult<Vec<Ident>> {
    if ts.consume(TokenKind::Except) { parse_ident_list(ts) } else { Ok(Vec::new()) }
}

fn parse_prop_expr(ts: &mut TokenStream) -> ParseResult<PropExpr> {
    let column = parse_ident(ts)?;
    let name = if ts.consume(TokenKind::As) { Some(parse_ident(ts)?) } else { None };
    Ok(PropExpr { name, column, cast_as: None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn select(src: &str) -> SelectStmt {
        let (tokens, diags) = tokenize(src);
        assert!(diags.is_empty(), "{diags:?}");
        let mut ts = TokenStream::new(&tokens);
        let stmt = parse_select_stmt(&mut ts).unwrap();
        assert!(ts.take_errors().is_empty());
        stmt
    }

    fn modify(src: &str) -> (ModifyStmt, Vec<crate::diag::Diag>) {
        let (tokens, diags) = tokenize(src);
        assert!(diags.is_empty(), "{diags:?}");
        let mut ts = TokenStream::new(&tokens);
        let stmt = parse_modify_stmt(&mut ts).unwrap();
        validate_modify_shape(&mut ts, &stmt);
        (stmt, ts.take_errors())
    }

    #[test]
    fn wildcard_select_has_empty_sels() {
        let stmt = select("SELECT * FROM MATCH()");
        assert!(stmt.sels.is_empty());
        assert!(!stmt.distinct);
    }

    #[test]
    fn distinct_flag_and_named_column() {
        let stmt = select("SELECT DISTINCT acolumn FROM MATCH()");
        assert!(stmt.distinct);
        assert_eq!(stmt.sels.len(), 1);
        assert!(stmt.sels[0].expr.is_some());
    }

    #[test]
    fn qualified_wildcard_with_prefix() {
        let stmt = select("SELECT n.* PREFIX 'foo_' FROM MATCH()");
        let elem = &stmt.sels[0];
        assert!(elem.all_of.is_some());
        assert_eq!(elem.prefix.as_deref(), Some("'foo_'"));
    }

    #[test]
    fn order_by_group_by_having_limit_offset() {
        let stmt =
            select("SELECT x FROM MATCH() GROUP BY x HAVING x > 1 ORDER BY x DESC LIMIT 5 OFFSET 1");
        assert_eq!(stmt.group_by.len(), 1);
        assert!(stmt.having.is_some());
        assert_eq!(stmt.order_by[0].order, Order::Desc);
        assert!(stmt.limit.is_some());
        assert!(stmt.offset.is_some());
    }

    #[test]
    fn insert_without_from_is_valid() {
        let (stmt, errors) = modify("INSERT VERTEX avar");
        assert_eq!(stmt.mods.len(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn insert_with_from_is_valid() {
        let (_, errors) = modify("INSERT VERTEX avar FROM MATCH()");
        assert!(errors.is_empty());
    }

    #[test]
    fn insert_with_where_but_no_from_fails_validation() {
        let (_, errors) = modify("INSERT VERTEX avar WHERE x");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("WHERE"));
    }

    #[test]
    fn multiple_mods_without_from_fails_validation() {
        let (_, errors) = modify("INSERT VERTEX a DELETE a");
        assert!(errors.iter().any(|e| e.message.contains("INSERT clause")));
    }

    #[test]
    fn edge_insertion_between_two_vertices() {
        let (stmt, errors) = modify("INSERT VERTEX a, VERTEX b, EDGE e BETWEEN a AND b");
        assert!(errors.is_empty());
        assert_eq!(stmt.mods.len(), 1);
        match &stmt.mods[0] {
            ModClause::Insert(insert) => {
                assert_eq!(insert.vs.len(), 2);
                assert_eq!(insert.es.len(), 1);
                assert_eq!(insert.es[0].source.name, "a");
                assert_eq!(insert.es[0].dest.name, "b");
            }
            other => panic!("expected InsertClause, got {other:?}"),
        }
    }

    #[test]
    fn update_sets_properties() {
        let (tokens, _) = tokenize("UPDATE v SET (v.prop = 1, v.other = 2)");
        let mut ts = TokenStream::new(&tokens);
        let clause = parse_update_clause(&mut ts).unwrap();
        assert_eq!(clause.updates.len(), 1);
        assert_eq!(clause.updates[0].props.len(), 2);
    }

    #[test]
    fn delete_multiple_vars() {
        let (tokens, _) = tokenize("DELETE a, b, c");
        let mut ts = TokenStream::new(&tokens);
        let clause = parse_delete_clause(&mut ts).unwrap();
        assert_eq!(clause.vars.len(), 3);
    }

    #[test]
    fn create_simple_graph() {
        let (tokens, _) = tokenize("CREATE PROPERTY GRAPH mygraph VERTEX TABLES(atbl)");
        let mut ts = TokenStream::new(&tokens);
        let stmt = parse_create_stmt(&mut ts).unwrap();
        assert_eq!(stmt.graph_name.first().name, "mygraph");
        assert_eq!(stmt.vertex_tables.len(), 1);
        assert_eq!(stmt.vertex_tables[0].table_name.first().name, "atbl");
    }

    #[test]
    fn create_qualified_graph_name() {
        let (tokens, _) = tokenize("CREATE PROPERTY GRAPH asch.mygraph VERTEX TABLES(atbl)");
        let mut ts = TokenStream::new(&tokens);
        let stmt = parse_create_stmt(&mut ts).unwrap();
        assert_eq!(stmt.graph_name.names.len(), 2);
    }

    #[test]
    fn vertex_table_with_bare_alias_and_no_properties() {
        let (tokens, _) =
            tokenize("CREATE PROPERTY GRAPH g VERTEX TABLES(atbl atbl2 NO PROPERTIES)");
        let mut ts = TokenStream::new(&tokens);
        let stmt = parse_create_stmt(&mut ts).unwrap();
        let decl = &stmt.vertex_tables[0];
        assert_eq!(decl.table_alias.as_ref().unwrap().name, "atbl2");
        assert!(decl.props.none);
    }

    #[test]
    fn vertex_table_all_columns_except() {
        let (tokens, _) = tokenize(
            "CREATE PROPERTY GRAPH g VERTEX TABLES(atbl PROPERTIES (ALL COLUMNS EXCEPT (c1, c2)))",
        );
        let mut ts = TokenStream::new(&tokens);
        let stmt = parse_create_stmt(&mut ts).unwrap();
        assert_eq!(stmt.vertex_tables[0].props.except.len(), 2);
    }

    #[test]
    fn edge_table_with_source_destination_references() {
        let (tokens, _) = tokenize(
            "CREATE PROPERTY GRAPH g VERTEX TABLES(persons) EDGE TABLES(knows SOURCE KEY (pid) REFERENCES persons (id) DESTINATION persons)",
        );
        let mut ts = TokenStream::new(&tokens);
        let stmt = parse_create_stmt(&mut ts).unwrap();
        let edge = &stmt.edge_tables[0];
        assert_eq!(edge.source.keys.len(), 1);
        assert_eq!(edge.source.table_name.first().name, "persons");
        assert!(edge.dest.keys.is_empty());
    }

    #[test]
    fn drop_quoted_graph_name_unquotes() {
        let (tokens, _) = tokenize(r#"DROP PROPERTY GRAPH "my""graph""#);
        let mut ts = TokenStream::new(&tokens);
        let stmt = parse_drop_stmt(&mut ts).unwrap();
        assert_eq!(stmt.graph_name.first().name, r#"my"graph"#);
    }

    #[test]
    fn path_macro_before_select() {
        let (tokens, _) = tokenize("PATH p AS (() -> ()) WHERE true SELECT * FROM MATCH()");
        let mut ts = TokenStream::new(&tokens);
        let macros = parse_path_macros(&mut ts).unwrap();
        assert_eq!(macros.len(), 1);
        assert_eq!(macros[0].name.name, "p");
        assert!(macros[0].where_clause.is_some());
    }
}
