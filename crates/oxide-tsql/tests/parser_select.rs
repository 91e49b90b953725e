//! Tests for SELECT queries: clauses, joins, set operators, expressions.

mod common;
use common::*;

use oxide_tsql::ast::*;

#[test]
fn select_with_every_clause() {
    let stmt = parse_select(
        "SELECT region, SUM(amount) AS total FROM dbo.sales \
         WHERE amount > 0 GROUP BY region HAVING SUM(amount) > 100 \
         ORDER BY total DESC OFFSET 10 ROWS FETCH NEXT 5 ROWS ONLY",
    );
    let q = specification(&stmt.query_expression);
    assert_eq!(q.select_elements.len(), 2);
    assert!(q.from_clause.is_some());
    assert!(q.where_clause.is_some());
    assert_eq!(q.group_by_clause.as_ref().unwrap().grouping_specifications.len(), 1);
    assert!(q.having_clause.is_some());

    let order = q.order_by_clause.as_ref().unwrap();
    assert_eq!(order.order_by_elements[0].sort_order, SortOrder::Descending);
    let offset = q.offset_clause.as_ref().unwrap();
    assert!(offset.fetch_expression.is_some());
}

#[test]
fn select_top_with_ties() {
    let stmt = parse_select("SELECT TOP (3) WITH TIES name FROM t ORDER BY score");
    let top = specification(&stmt.query_expression).top_row_filter.clone().unwrap();
    assert!(top.with_ties);
    assert!(!top.percent);
}

#[test]
fn select_without_from() {
    let stmt = parse_select("SELECT 1 + 2 * 3");
    let q = specification(&stmt.query_expression);
    assert!(q.from_clause.is_none());
    let SelectElement::ScalarExpression(element) = &q.select_elements[0] else {
        panic!("expected scalar select element");
    };
    let ScalarExpression::Binary(add) = &element.expression else {
        panic!("expected binary expression");
    };
    assert_eq!(add.binary_expression_type, BinaryExpressionType::Add);
    assert!(matches!(
        &add.second_expression,
        ScalarExpression::Binary(m) if m.binary_expression_type == BinaryExpressionType::Multiply
    ));
}

#[test]
fn from_three_part_name_with_alias() {
    let stmt = parse_select("SELECT o.id FROM Sales.dbo.Orders AS o");
    let q = specification(&stmt.query_expression);
    let from = q.from_clause.as_ref().unwrap();
    let TableReference::Named(named) = &from.table_references[0] else {
        panic!("expected named table");
    };
    assert_eq!(named.schema_object.count, 3);
    assert_eq!(named.schema_object.base_identifier.value, "Orders");
    assert_eq!(
        named.schema_object.database_identifier.as_ref().unwrap().value,
        "Sales"
    );
    assert_eq!(named.alias.as_ref().unwrap().value, "o");
}

#[test]
fn bracketed_identifiers_keep_quote_type() {
    let stmt = parse_select("SELECT [order id] FROM [dbo].[my table]");
    let q = specification(&stmt.query_expression);
    let TableReference::Named(named) = &q.from_clause.as_ref().unwrap().table_references[0] else {
        panic!("expected named table");
    };
    assert_eq!(named.schema_object.base_identifier.value, "my table");
    assert_eq!(named.schema_object.base_identifier.quote_type, QuoteType::Square);
}

#[test]
fn joins_nest_left_to_right() {
    let stmt = parse_select(
        "SELECT * FROM a \
         INNER JOIN b ON a.id = b.a_id \
         LEFT OUTER JOIN c ON b.id = c.b_id \
         CROSS APPLY dbo.fn(c.id) AS f",
    );
    let q = specification(&stmt.query_expression);
    let from = q.from_clause.as_ref().unwrap();
    assert_eq!(from.table_references.len(), 1);

    let TableReference::UnqualifiedJoin(apply) = &from.table_references[0] else {
        panic!("expected CROSS APPLY at the root");
    };
    assert_eq!(apply.unqualified_join_type, UnqualifiedJoinType::CrossApply);
    let TableReference::QualifiedJoin(left) = &apply.first_table_reference else {
        panic!("expected LEFT JOIN");
    };
    assert_eq!(left.qualified_join_type, QualifiedJoinType::LeftOuter);
    assert!(matches!(
        &left.first_table_reference,
        TableReference::QualifiedJoin(inner)
            if inner.qualified_join_type == QualifiedJoinType::Inner
    ));
}

#[test]
fn table_hints_and_derived_tables() {
    let stmt = parse_select(
        "SELECT d.n FROM t WITH (NOLOCK) JOIN (SELECT 1 AS n) AS d (n) ON 1 = 1",
    );
    let q = specification(&stmt.query_expression);
    let TableReference::QualifiedJoin(join) = &q.from_clause.as_ref().unwrap().table_references[0]
    else {
        panic!("expected join");
    };
    let TableReference::Named(t) = &join.first_table_reference else {
        panic!("expected named table");
    };
    assert_eq!(t.table_hints.len(), 1);
    let TableReference::QueryDerived(derived) = &join.second_table_reference else {
        panic!("expected derived table");
    };
    assert_eq!(derived.alias.as_ref().unwrap().value, "d");
    assert_eq!(derived.columns.len(), 1);
}

#[test]
fn common_table_expressions() {
    let stmt = parse_select(
        "WITH totals (region, total) AS (SELECT region, SUM(x) FROM s GROUP BY region), \
         top_regions AS (SELECT region FROM totals WHERE total > 10) \
         SELECT * FROM top_regions",
    );
    let ctes = stmt.with_ctes_and_xml_namespaces.unwrap().common_table_expressions;
    assert_eq!(ctes.len(), 2);
    assert_eq!(ctes[0].expression_name.value, "totals");
    assert_eq!(ctes[0].columns.len(), 2);
    assert!(ctes[1].columns.is_empty());
}

#[test]
fn union_all_and_except() {
    let stmt = parse_select("SELECT a FROM t UNION ALL SELECT a FROM u EXCEPT SELECT a FROM v");
    let QueryExpression::Binary(except) = &stmt.query_expression else {
        panic!("expected binary query");
    };
    assert_eq!(except.binary_query_expression_type, BinaryQueryExpressionType::Except);
    let QueryExpression::Binary(union) = &except.first_query_expression else {
        panic!("expected UNION on the left");
    };
    assert_eq!(union.binary_query_expression_type, BinaryQueryExpressionType::Union);
    assert!(union.all);
}

#[test]
fn window_function_over_clause() {
    let stmt = parse_select(
        "SELECT ROW_NUMBER() OVER (PARTITION BY dept ORDER BY salary DESC) AS rn FROM staff",
    );
    let q = specification(&stmt.query_expression);
    let SelectElement::ScalarExpression(element) = &q.select_elements[0] else {
        panic!("expected scalar select element");
    };
    let ScalarExpression::FunctionCall(call) = &element.expression else {
        panic!("expected function call");
    };
    assert_eq!(call.function_name.value, "ROW_NUMBER");
    let over = call.over_clause.as_ref().unwrap();
    assert_eq!(over.partitions.len(), 1);
    assert!(over.order_by_clause.is_some());
}

#[test]
fn predicates_in_where() {
    let stmt = parse_select(
        "SELECT * FROM t WHERE a BETWEEN 1 AND 5 AND b LIKE 'x%' \
         AND c IN (1, 2, 3) AND d IS NOT NULL \
         AND EXISTS (SELECT 1 FROM u WHERE u.id = t.id)",
    );
    let q = specification(&stmt.query_expression);
    let condition = q.where_clause.as_ref().unwrap().search_condition.as_ref().unwrap();

    let mut kinds = Vec::new();
    collect_conjuncts(condition, &mut kinds);
    assert_eq!(kinds, ["Ternary", "Like", "In", "IsNull", "Exists"]);
}

fn collect_conjuncts(expression: &BooleanExpression, out: &mut Vec<&'static str>) {
    match expression {
        BooleanExpression::Binary(b)
            if b.binary_expression_type == BooleanBinaryExpressionType::And =>
        {
            collect_conjuncts(&b.first_expression, out);
            collect_conjuncts(&b.second_expression, out);
        }
        BooleanExpression::Ternary(_) => out.push("Ternary"),
        BooleanExpression::Like(_) => out.push("Like"),
        BooleanExpression::In(_) => out.push("In"),
        BooleanExpression::IsNull(_) => out.push("IsNull"),
        BooleanExpression::Exists(_) => out.push("Exists"),
        _ => out.push("Other"),
    }
}

#[test]
fn and_binds_tighter_than_or() {
    let stmt = parse_select("SELECT 1 FROM t WHERE a = 1 OR b = 2 AND c = 3");
    let q = specification(&stmt.query_expression);
    let condition = q.where_clause.as_ref().unwrap().search_condition.as_ref().unwrap();
    let BooleanExpression::Binary(or) = condition else {
        panic!("expected OR at the root");
    };
    assert_eq!(or.binary_expression_type, BooleanBinaryExpressionType::Or);
    assert!(matches!(
        &or.second_expression,
        BooleanExpression::Binary(and)
            if and.binary_expression_type == BooleanBinaryExpressionType::And
    ));
}

#[test]
fn case_cast_and_convert() {
    let stmt = parse_select(
        "SELECT CASE WHEN a > 0 THEN 'pos' ELSE 'neg' END, \
         CAST(b AS DECIMAL(10, 2)), TRY_CONVERT(VARCHAR(20), c, 120) FROM t",
    );
    let q = specification(&stmt.query_expression);
    let expressions: Vec<&ScalarExpression> = q
        .select_elements
        .iter()
        .map(|e| match e {
            SelectElement::ScalarExpression(s) => &s.expression,
            other => panic!("unexpected element {other:?}"),
        })
        .collect();

    assert!(matches!(
        expressions[0],
        ScalarExpression::SearchedCase(c) if c.else_expression.is_some()
    ));
    let ScalarExpression::Cast(cast) = expressions[1] else {
        panic!("expected CAST");
    };
    assert!(!cast.is_try);
    let DataTypeReference::Sql(data_type) = &cast.data_type else {
        panic!("expected SQL data type");
    };
    assert_eq!(data_type.sql_data_type_option, SqlDataTypeOption::Decimal);
    assert_eq!(data_type.parameters.len(), 2);

    let ScalarExpression::Convert(convert) = expressions[2] else {
        panic!("expected CONVERT");
    };
    assert!(convert.is_try);
    assert!(convert.style.is_some());
}

#[test]
fn literals_keep_source_text() {
    let stmt = parse_select("SELECT N'héllo', 0x1F, $12.50, 1.5E3, NULL");
    let q = specification(&stmt.query_expression);
    let literals: Vec<&Literal> = q
        .select_elements
        .iter()
        .map(|e| match e {
            SelectElement::ScalarExpression(s) => match &s.expression {
                ScalarExpression::Literal(l) => l,
                other => panic!("expected literal, got {other:?}"),
            },
            other => panic!("unexpected element {other:?}"),
        })
        .collect();

    assert_eq!(literals[0].literal_type, LiteralType::String);
    assert_eq!(literals[0].value, "héllo");
    assert_eq!(literals[0].text, "N'héllo'");
    assert!(literals[0].is_national);
    assert_eq!(literals[1].literal_type, LiteralType::Binary);
    assert_eq!(literals[2].literal_type, LiteralType::Money);
    assert_eq!(literals[3].literal_type, LiteralType::Real);
    assert!(literals[4].is_null());
}

#[test]
fn query_hints_in_option_clause() {
    let stmt = parse_select("SELECT * FROM t OPTION (RECOMPILE, MAXDOP 4)");
    assert_eq!(stmt.option_clause.unwrap().optimizer_hints.len(), 2);
}

#[test]
fn for_json_clause() {
    let stmt = parse_select("SELECT id FROM t FOR JSON PATH, ROOT('items')");
    let q = specification(&stmt.query_expression);
    let Some(ForClause::Json(json)) = &q.for_clause else {
        panic!("expected FOR JSON");
    };
    assert_eq!(json.options.len(), 2);
}

#[test]
fn select_into_temp_table() {
    let stmt = parse_select("SELECT id INTO #staging FROM t");
    let q = specification(&stmt.query_expression);
    assert_eq!(q.into.as_ref().unwrap().base_identifier.value, "#staging");
}

#[test]
fn variable_assignment_elements() {
    let stmt = parse_select("SELECT @total += amount FROM t");
    let q = specification(&stmt.query_expression);
    let SelectElement::SetVariable(set) = &q.select_elements[0] else {
        panic!("expected variable assignment");
    };
    assert_eq!(set.variable.name, "@total");
    assert_eq!(set.assignment_kind, AssignmentKind::AddEquals);
}
