//! Property-based checks of rendering and copy isolation over arbitrary statements.

use proptest::prelude::*;
use sqlstmt::Statement;

fn fragment() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_ .=?()*,]{0,15}"
}

fn statement() -> impl Strategy<Value = Statement> {
    (
        prop::option::of((any::<bool>(), fragment())),
        prop::option::of(fragment()),
        prop::collection::vec(fragment(), 0..5),
        prop::option::of(fragment()),
        prop::option::of(fragment()),
        prop::option::of(fragment()),
    )
        .prop_map(|(head, from, conditions, order_by, limit, offset)| {
            let mut s = match head {
                Some((true, cols)) => Statement::select(cols),
                Some((false, raw)) => Statement::raw(raw),
                None => Statement::new(),
            };
            if let Some(from) = from {
                s = s.from(from);
            }
            s = s.where_(conditions);
            if let Some(order_by) = order_by {
                s = s.order_by(order_by);
            }
            if let Some(limit) = limit {
                s = s.limit(limit);
            }
            if let Some(offset) = offset {
                s = s.offset(offset);
            }
            s
        })
}

proptest! {
    #[test]
    fn prop_sql_is_idempotent(s in statement()) {
        let first = s.sql();
        prop_assert_eq!(&first, &s.sql());
        prop_assert_eq!(&first, &s.to_string());
        prop_assert_eq!(s.count_sql(), s.count_sql());
    }

    #[test]
    fn prop_copy_preserves_sql(s in statement()) {
        prop_assert_eq!(s.copy().sql(), s.sql());
        prop_assert_eq!(s.copy(), s);
    }

    #[test]
    fn prop_where_on_copy_is_isolated(s in statement(), f in fragment()) {
        let before = s.sql();
        let conditions_before = s.conditions().to_vec();

        let child = s.copy().where_(f.clone());

        prop_assert_eq!(s.sql(), before);
        prop_assert_eq!(s.conditions(), conditions_before.as_slice());
        prop_assert_eq!(child.conditions().last(), Some(&f));
        let where_clause = format!("WHERE {}", child.conditions().join(" AND "));
        prop_assert!(child.sql().contains(&where_clause));

        let grown = s.where_("ORIGINAL_ONLY");
        prop_assert!(!child.conditions().iter().any(|c| c == "ORIGINAL_ONLY"));
        prop_assert_eq!(grown.conditions().last().map(String::as_str), Some("ORIGINAL_ONLY"));
    }

    #[test]
    fn prop_where_accumulates_in_call_order(
        table in fragment(),
        conditions in prop::collection::vec(fragment(), 1..8),
    ) {
        let chained = conditions
            .iter()
            .fold(Statement::select("x").from(table.clone()), |s, c| s.where_(c));
        let batched = Statement::select("x").from(table.clone()).where_(conditions.clone());

        let expected = format!("SELECT x FROM {} WHERE {}", table, conditions.join(" AND "));
        prop_assert_eq!(chained.sql(), expected);
        prop_assert_eq!(chained, batched);
    }

    #[test]
    fn prop_paginate_never_renders_negative_values(page in any::<i64>(), per_page in any::<i64>()) {
        let s = Statement::select("x").from("t").paginate(page, per_page);
        let limit: i64 = s.limit_fragment().unwrap().parse().unwrap();
        let offset: i64 = s.offset_fragment().unwrap().parse().unwrap();
        prop_assert!(limit >= 1);
        prop_assert!(offset >= 0);
    }
}
