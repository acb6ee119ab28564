//! Fieldcheck - tag-driven struct field validation
//!
//! Struct fields carry small string annotations describing validation rules
//! (`len:5`, `min:3`, `max:10`, `in:a,b`); [`validate`] checks every
//! annotated field and reports every violation found, in field-declaration
//! order. It is meant to run before a value is trusted, e.g. right after
//! deserialization.
//!
//! ```
//! use fieldcheck::{validate, Reflect};
//!
//! #[derive(Reflect)]
//! struct Request {
//!     #[validate("len:5")]
//!     pub code: String,
//!     #[validate("min:18,max:130")]
//!     pub age: i32,
//! }
//!
//! let request = Request { code: "abcde".to_string(), age: 42 };
//! assert!(validate(&request).is_ok());
//!
//! let request = Request { code: "ab".to_string(), age: 12 };
//! assert!(validate(&request).is_err());
//! ```

pub mod error;
pub mod parser;
pub mod rules;
pub mod validator;
pub mod value;

pub use error::*;
pub use parser::*;
pub use rules::*;
pub use validator::*;
pub use value::*;

// Re-export the derive macro
pub use fieldcheck_macros::Reflect;
