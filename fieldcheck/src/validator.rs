use crate::error::{Error, FieldError, Report, Violation};
use crate::parser;
use crate::rules;
use crate::value::{Reflect, Shape};
use tracing::{debug, trace};

/// Validates every annotated field of a record, collecting all violations.
///
/// Returns [`Error::NotAStruct`] when the value does not reflect as a
/// record. Otherwise every field is visited in declaration order: fields
/// without an annotation are skipped, annotated non-`pub` fields are
/// flagged, and the rest are checked against their parsed rules. Failures
/// never stop the walk, so the caller receives either full success or the
/// complete [`Report`].
///
/// # Examples
///
/// ```
/// use fieldcheck::{validate, Reflect};
///
/// #[derive(Reflect)]
/// struct Signup {
///     #[validate("min:8")]
///     pub password: String,
///     #[validate("min:18,max:130")]
///     pub age: i32,
/// }
///
/// let signup = Signup { password: "hunter2".to_string(), age: 42 };
/// assert!(validate(&signup).is_err());
/// ```
pub fn validate<T: Reflect + ?Sized>(value: &T) -> Result<(), Error> {
    let fields = match value.reflect() {
        Shape::Record(fields) => fields,
        Shape::Scalar(_) => return Err(Error::NotAStruct),
    };

    let mut report = Report::new();
    for field in &fields {
        if field.annotation.is_empty() {
            continue;
        }
        trace!(field = field.name, annotation = field.annotation, "checking field");
        if !field.exported {
            report.push(Violation::new(field.name, FieldError::UnexportedField));
            continue;
        }
        // The derive captures a value for every exported annotated field.
        let Some(field_value) = field.value else {
            continue;
        };
        let outcome = parser::parse(field.annotation)
            .map_err(FieldError::from)
            .and_then(|ruleset| rules::dispatch(&field_value, &ruleset));
        if let Err(error) = outcome {
            debug!(field = field.name, %error, "field failed validation");
            report.push(Violation::new(field.name, error));
        }
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(Error::Invalid(report))
    }
}
