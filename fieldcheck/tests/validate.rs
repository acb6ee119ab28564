use fieldcheck::{
    validate, Error, FieldError, FieldKind, Reflect, RuleViolation, SyntaxError,
};

fn fields_of(err: Error) -> Vec<String> {
    match err {
        Error::Invalid(report) => report.iter().map(|v| v.field().to_string()).collect(),
        other => panic!("expected a report, got {:?}", other),
    }
}

fn first_error(err: Error) -> FieldError {
    match err {
        Error::Invalid(report) => report
            .into_iter()
            .next()
            .map(|v| v.error().clone())
            .expect("empty report"),
        other => panic!("expected a report, got {:?}", other),
    }
}

#[test]
fn non_record_values_are_rejected() {
    assert_eq!(validate(&42i32), Err(Error::NotAStruct));
    assert_eq!(validate(&true), Err(Error::NotAStruct));
    assert_eq!(validate(&String::from("hello")), Err(Error::NotAStruct));
}

#[test]
fn record_without_annotations_passes() {
    #[derive(Reflect)]
    struct Plain {
        pub id: i64,
        pub name: String,
    }

    let plain = Plain { id: 1, name: "a".to_string() };
    assert_eq!(validate(&plain), Ok(()));
}

#[test]
fn exact_length_rule() {
    #[derive(Reflect)]
    struct Code {
        #[validate("len:5")]
        pub value: String,
    }

    assert!(validate(&Code { value: "abcde".to_string() }).is_ok());

    let err = validate(&Code { value: "abcd".to_string() }).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected length 5, actual length 4"
    );
}

#[test]
fn membership_rule() {
    #[derive(Reflect)]
    struct Status {
        #[validate("in:foo,bar")]
        pub value: String,
    }

    assert!(validate(&Status { value: "foo".to_string() }).is_ok());

    let err = validate(&Status { value: "baz".to_string() }).unwrap_err();
    assert_eq!(err.to_string(), "value not in [foo bar]");
}

#[test]
fn minimum_value_rule() {
    #[derive(Reflect)]
    struct Age {
        #[validate("min:3")]
        pub value: i64,
    }

    assert!(validate(&Age { value: 5 }).is_ok());

    let err = validate(&Age { value: 2 }).unwrap_err();
    assert_eq!(err.to_string(), "expected minimum value 3, actual value 2");
    assert_eq!(
        first_error(err),
        FieldError::Rule(RuleViolation::MinValue { expected: 3, actual: 2 })
    );
}

#[test]
fn combined_bounds_in_one_tag() {
    #[derive(Reflect)]
    struct Age {
        #[validate("min:18,max:130")]
        pub value: i32,
    }

    assert!(validate(&Age { value: 42 }).is_ok());
    assert_eq!(
        first_error(validate(&Age { value: 12 }).unwrap_err()),
        FieldError::Rule(RuleViolation::MinValue { expected: 18, actual: 12 })
    );
    assert_eq!(
        first_error(validate(&Age { value: 150 }).unwrap_err()),
        FieldError::Rule(RuleViolation::MaxValue { expected: 130, actual: 150 })
    );
}

#[test]
fn unexported_annotated_field_is_flagged_regardless_of_value() {
    #[derive(Reflect)]
    #[allow(dead_code)]
    struct Hidden {
        #[validate("len:1")]
        secret: String,
    }

    let err = validate(&Hidden { secret: "x".to_string() }).unwrap_err();
    assert_eq!(first_error(err), FieldError::UnexportedField);

    // a passing value changes nothing
    let err = validate(&Hidden { secret: "ok".to_string() }).unwrap_err();
    assert_eq!(first_error(err), FieldError::UnexportedField);
}

#[test]
fn every_failing_field_is_reported_in_declaration_order() {
    #[derive(Reflect)]
    struct Form {
        #[validate("len:5")]
        pub code: String,
        #[allow(dead_code)]
        pub untracked: i64,
        #[validate("min:18")]
        pub age: i64,
        #[validate("in:red,green")]
        pub color: String,
    }

    let form = Form {
        code: "abc".to_string(),
        untracked: 0,
        age: 12,
        color: "blue".to_string(),
    };

    let err = validate(&form).unwrap_err();
    assert_eq!(fields_of(err.clone()), vec!["code", "age", "color"]);
    assert_eq!(
        err.to_string(),
        "expected length 5, actual length 3\n\
         expected minimum value 18, actual value 12\n\
         value not in [red green]"
    );
}

#[test]
fn one_violation_per_field_even_when_several_rules_fail() {
    #[derive(Reflect)]
    struct Name {
        // both bounds fail for a 12-char string; only max (folded first) reports
        #[validate("min:20,max:5")]
        pub value: String,
    }

    let err = validate(&Name { value: "abcdefghijkl".to_string() }).unwrap_err();
    assert_eq!(
        first_error(err.clone()),
        FieldError::Rule(RuleViolation::MaxLength { expected: 5, actual: 12 })
    );
    assert_eq!(fields_of(err).len(), 1);
}

#[test]
fn unknown_rule_is_reported() {
    #[derive(Reflect)]
    struct Odd {
        #[validate("bogus:1")]
        pub value: String,
    }

    let err = validate(&Odd { value: "x".to_string() }).unwrap_err();
    assert_eq!(first_error(err.clone()), FieldError::UnknownValidator("bogus".to_string()));
    assert_eq!(err.to_string(), "unknown validator: bogus");
}

#[test]
fn malformed_tag_is_that_fields_violation() {
    #[derive(Reflect)]
    struct Odd {
        #[validate("len")]
        pub value: String,
        #[validate("min:3")]
        pub count: i64,
    }

    let err = validate(&Odd { value: "x".to_string(), count: 5 }).unwrap_err();
    assert_eq!(
        first_error(err.clone()),
        FieldError::Syntax(SyntaxError::MalformedSegment("len".to_string()))
    );
    // the walk still reaches the healthy field, which passes
    assert_eq!(fields_of(err), vec!["value"]);
}

#[test]
fn bounds_reject_unsupported_kinds() {
    #[derive(Reflect)]
    struct Flag {
        #[validate("min:1")]
        pub enabled: bool,
    }

    let err = validate(&Flag { enabled: true }).unwrap_err();
    assert_eq!(
        first_error(err),
        FieldError::UnsupportedType { rule: "min", kind: FieldKind::Bool }
    );
}

#[test]
fn string_bounds_check_length() {
    #[derive(Reflect)]
    struct Name {
        #[validate("min:3")]
        pub value: String,
    }

    assert!(validate(&Name { value: "abc".to_string() }).is_ok());
    let err = validate(&Name { value: "ab".to_string() }).unwrap_err();
    assert_eq!(err.to_string(), "expected minimum length 3, actual length 2");
}

#[test]
fn borrowed_string_fields_are_supported() {
    #[derive(Reflect)]
    struct Borrowed<'a> {
        #[validate("len:2")]
        pub value: &'a str,
    }

    assert!(validate(&Borrowed { value: "ab" }).is_ok());
    assert!(validate(&Borrowed { value: "abc" }).is_err());
}
