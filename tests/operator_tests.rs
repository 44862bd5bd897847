use lookup_resolver::operators::{
    ArithmeticOverloader, ComparisonOverloader, HasOverloader, InOverloader, IntersectsOverloader,
    LogicalOverloader, OperatorOverloader, OverloaderManager,
};
use lookup_resolver::{BinOp, Value};

fn list(items: &[&str]) -> Value {
    Value::from(items.to_vec())
}

fn compare(left: Value, op: BinOp, right: Value) -> Value {
    ComparisonOverloader.evaluate(&left, &right, op)
}

/// Joins two strings with `+`.
struct Concat;

impl OperatorOverloader for Concat {
    fn supports(&self, left: &Value, right: &Value, op: BinOp) -> bool {
        op == BinOp::Add && left.as_str().is_some() && right.as_str().is_some()
    }

    fn evaluate(&self, left: &Value, right: &Value, _op: BinOp) -> Value {
        Value::String(format!(
            "{}{}",
            left.as_str().unwrap_or(""),
            right.as_str().unwrap_or("")
        ))
    }
}

// Manager

#[test]
fn test_first_supporting_overloader_wins() {
    let ops = OverloaderManager::new(vec![Box::new(ArithmeticOverloader), Box::new(Concat)]);
    // numeric text is claimed by arithmetic before concatenation is asked
    assert_eq!(
        ops.evaluate(&Value::from("1"), &Value::from("2"), BinOp::Add).unwrap(),
        Value::Integer(3)
    );
    assert_eq!(
        ops.evaluate(&Value::from("a"), &Value::from("b"), BinOp::Add).unwrap(),
        Value::from("ab")
    );
}

#[test]
fn test_unsupported_triple_names_operator_and_operands() {
    let ops = OverloaderManager::default();
    let err = ops
        .evaluate(&Value::from("abc"), &Value::Integer(1), BinOp::Add)
        .unwrap_err();
    assert_eq!(err.to_string(), "No overloader found for ['abc'] + [1]");
    assert!(!ops.supports(&Value::Integer(1), &Value::Integer(0), BinOp::Divide));
}

// Arithmetic

#[test]
fn test_arithmetic_claims_numeric_operands_only() {
    let ops = ArithmeticOverloader;
    assert!(ops.supports(&Value::Integer(1), &Value::from("2.5"), BinOp::Add));
    assert!(!ops.supports(&Value::Integer(1), &Value::from("two"), BinOp::Add));
    assert!(!ops.supports(&Value::Boolean(true), &Value::Integer(1), BinOp::Add));
    assert!(!ops.supports(&Value::Integer(1), &Value::Integer(2), BinOp::Equal));
}

#[test]
fn test_arithmetic_keeps_integers_whole() {
    let ops = ArithmeticOverloader;
    assert_eq!(
        ops.evaluate(&Value::Integer(6), &Value::Integer(3), BinOp::Divide),
        Value::Integer(2)
    );
    assert_eq!(
        ops.evaluate(&Value::Float(1.5), &Value::Float(0.5), BinOp::Add),
        Value::Integer(2)
    );
    assert_eq!(
        ops.evaluate(&Value::Integer(150000), &Value::Float(0.015), BinOp::Multiply),
        Value::Integer(2250)
    );
}

// Comparison

#[test]
fn test_loose_and_strict_equality_differ() {
    assert_eq!(compare(Value::from("30"), BinOp::Equal, Value::Integer(30)), Value::Boolean(true));
    assert_eq!(
        compare(Value::from("30"), BinOp::StrictEqual, Value::Integer(30)),
        Value::Boolean(false)
    );
    assert_eq!(
        compare(Value::Integer(1), BinOp::StrictNotEqual, Value::Float(1.0)),
        Value::Boolean(true)
    );
}

#[test]
fn test_ordering_of_numeric_text_is_numeric() {
    assert_eq!(
        compare(Value::from("100000"), BinOp::LessEqual, Value::from("150000")),
        Value::Boolean(true)
    );
    assert_eq!(
        compare(Value::from("9"), BinOp::GreaterThan, Value::from("10")),
        Value::Boolean(false)
    );
    assert_eq!(
        compare(Value::from("b"), BinOp::GreaterEqual, Value::from("abc")),
        Value::Boolean(true)
    );
}

#[test]
fn test_incomparable_operands_are_never_ordered() {
    let ids = Value::from(vec![1i64]);
    assert_eq!(compare(ids.clone(), BinOp::LessThan, Value::from("x")), Value::Boolean(false));
    assert_eq!(compare(ids, BinOp::GreaterEqual, Value::from("x")), Value::Boolean(false));
}

// Logical

#[test]
fn test_xor_is_true_for_differing_operands() {
    let t = Value::Boolean(true);
    let f = Value::Boolean(false);
    assert_eq!(LogicalOverloader.evaluate(&t, &f, BinOp::Xor), t);
    assert_eq!(LogicalOverloader.evaluate(&t, &t, BinOp::Xor), f);
    assert_eq!(LogicalOverloader.evaluate(&t, &f, BinOp::And), f);
    assert_eq!(LogicalOverloader.evaluate(&t, &f, BinOp::Or), t);
}

#[test]
fn test_truthy_non_booleans_are_not_claimed() {
    assert!(!LogicalOverloader.supports(&Value::Integer(1), &Value::Boolean(true), BinOp::And));
}

// Collections

#[test]
fn test_has_checks_membership_and_subsets() {
    let cities = list(&["NYC", "LA", "Chicago"]);
    assert_eq!(
        HasOverloader.evaluate(&cities, &Value::from("LA"), BinOp::Has),
        Value::Boolean(true)
    );
    assert_eq!(
        HasOverloader.evaluate(&cities, &list(&["LA", "NYC"]), BinOp::Has),
        Value::Boolean(true)
    );
    assert_eq!(
        HasOverloader.evaluate(&cities, &list(&["LA", "Boston"]), BinOp::Has),
        Value::Boolean(false)
    );
    assert!(!HasOverloader.supports(&Value::from("LA"), &cities, BinOp::Has));
}

#[test]
fn test_in_mirrors_has() {
    let cities = list(&["NYC", "LA"]);
    assert_eq!(
        InOverloader.evaluate(&Value::from("NYC"), &cities, BinOp::In),
        Value::Boolean(true)
    );
    assert_eq!(InOverloader.evaluate(&list(&["LA"]), &cities, BinOp::In), Value::Boolean(true));
    assert_eq!(
        InOverloader.evaluate(&Value::from("Paris"), &cities, BinOp::In),
        Value::Boolean(false)
    );
    assert!(!InOverloader.supports(&cities, &Value::from("NYC"), BinOp::In));
}

#[test]
fn test_single_value_membership_is_loose() {
    let ids = Value::from(vec![1i64, 2, 3]);
    assert_eq!(InOverloader.evaluate(&Value::from("2"), &ids, BinOp::In), Value::Boolean(true));
}

#[test]
fn test_set_comparisons_use_exact_text() {
    let whole = list(&["1"]);
    let decimal = list(&["1.0"]);
    assert_eq!(HasOverloader.evaluate(&decimal, &whole, BinOp::Has), Value::Boolean(false));
    assert_eq!(InOverloader.evaluate(&whole, &decimal, BinOp::In), Value::Boolean(false));
    assert_eq!(
        IntersectsOverloader.evaluate(&whole, &decimal, BinOp::Intersects),
        Value::Boolean(false)
    );

    let ids = Value::from(vec![1i64, 2, 3]);
    assert_eq!(
        HasOverloader.evaluate(&ids, &list(&["2", "3"]), BinOp::Has),
        Value::Boolean(true)
    );
    assert_eq!(
        IntersectsOverloader.evaluate(&ids, &Value::from("3"), BinOp::Intersects),
        Value::Boolean(true)
    );
}

#[test]
fn test_intersects_treats_scalars_as_singletons() {
    let tags = list(&["a", "b"]);
    assert_eq!(
        IntersectsOverloader.evaluate(&tags, &list(&["b", "c"]), BinOp::Intersects),
        Value::Boolean(true)
    );
    assert_eq!(
        IntersectsOverloader.evaluate(&Value::from("a"), &tags, BinOp::Intersects),
        Value::Boolean(true)
    );
    assert_eq!(
        IntersectsOverloader.evaluate(&Value::from("z"), &Value::from("z"), BinOp::Intersects),
        Value::Boolean(true)
    );
    assert_eq!(
        IntersectsOverloader.evaluate(&tags, &list(&[]), BinOp::Intersects),
        Value::Boolean(false)
    );
}
