use crate::error::{FieldError, RuleViolation, SyntaxError};
use crate::parser::RuleSet;
use crate::value::FieldValue;

/// Signature of a registered rule: the field's value plus the parsed
/// arguments, `Err` carrying the single failure to report.
pub type RuleFn = fn(&FieldValue<'_>, &[String]) -> Result<(), FieldError>;

/// Every known rule, keyed by annotation name.
pub const REGISTRY: &[(&str, RuleFn)] = &[
    ("len", len),
    ("in", one_of),
    ("min", min),
    ("max", max),
];

fn lookup(name: &str) -> Option<RuleFn> {
    REGISTRY.iter().find(|(n, _)| *n == name).map(|(_, rule)| *rule)
}

/// Runs every rule in the set against one value, in rule-set order, stopping
/// at the first failure. A field therefore reports at most one violation.
pub fn dispatch(value: &FieldValue<'_>, rules: &RuleSet) -> Result<(), FieldError> {
    for (name, args) in rules.iter() {
        match lookup(name) {
            Some(rule) => rule(value, args)?,
            None => return Err(FieldError::UnknownValidator(name.to_string())),
        }
    }
    Ok(())
}

// The parser guarantees at least one argument per recorded rule.
fn int_arg(rule: &'static str, args: &[String]) -> Result<i64, FieldError> {
    let arg = args.first().map(String::as_str).unwrap_or_default();
    arg.parse().map_err(|_| {
        SyntaxError::NonIntegerArgument { rule, arg: arg.to_string() }.into()
    })
}

fn len(value: &FieldValue<'_>, args: &[String]) -> Result<(), FieldError> {
    let expected = int_arg("len", args)?;
    let FieldValue::Str(s) = value else {
        return Err(FieldError::UnsupportedType { rule: "len", kind: value.kind() });
    };
    let actual = s.len() as i64;
    if actual != expected {
        return Err(FieldError::Rule(RuleViolation::Length { expected, actual }));
    }
    Ok(())
}

fn one_of(value: &FieldValue<'_>, args: &[String]) -> Result<(), FieldError> {
    let rendered = value.to_string();
    if args.iter().any(|allowed| *allowed == rendered) {
        return Ok(());
    }
    Err(FieldError::Rule(RuleViolation::NotInSet { allowed: args.to_vec() }))
}

fn min(value: &FieldValue<'_>, args: &[String]) -> Result<(), FieldError> {
    let expected = int_arg("min", args)?;
    match value {
        FieldValue::Str(s) => {
            let actual = s.len() as i64;
            if actual < expected {
                return Err(FieldError::Rule(RuleViolation::MinLength { expected, actual }));
            }
            Ok(())
        }
        FieldValue::Int(actual) => {
            if *actual < expected {
                return Err(FieldError::Rule(RuleViolation::MinValue {
                    expected,
                    actual: *actual,
                }));
            }
            Ok(())
        }
        other => Err(FieldError::UnsupportedType { rule: "min", kind: other.kind() }),
    }
}

fn max(value: &FieldValue<'_>, args: &[String]) -> Result<(), FieldError> {
    let expected = int_arg("max", args)?;
    match value {
        FieldValue::Str(s) => {
            let actual = s.len() as i64;
            if actual > expected {
                return Err(FieldError::Rule(RuleViolation::MaxLength { expected, actual }));
            }
            Ok(())
        }
        FieldValue::Int(actual) => {
            if *actual > expected {
                return Err(FieldError::Rule(RuleViolation::MaxValue {
                    expected,
                    actual: *actual,
                }));
            }
            Ok(())
        }
        other => Err(FieldError::UnsupportedType { rule: "max", kind: other.kind() }),
    }
}
