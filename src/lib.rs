//! Turn documented function signatures into JSON tool schemas.
//!
//! ```
//! use toolspec::prelude::*;
//!
//! let signature = Signature::new("multiply")
//!     .with_docstring("Multiplies two numbers.\n\nArgs:\n    x: first factor\n    y: second factor")
//!     .parameter(Parameter::new("x", TypeDescriptor::NUMBER))
//!     .parameter(Parameter::new("y", TypeDescriptor::NUMBER));
//!
//! let schema = build_schema(&signature).unwrap();
//! assert_eq!(
//!     schema.to_json().unwrap(),
//!     serde_json::json!({
//!         "name": "multiply",
//!         "description": "Multiplies two numbers.",
//!         "parameters": {
//!             "type": "object",
//!             "properties": {
//!                 "x": {"type": "number", "description": "first factor"},
//!                 "y": {"type": "number", "description": "second factor"}
//!             },
//!             "required": ["x", "y"]
//!         }
//!     })
//! );
//! ```

pub use toolspec_schema;
pub use toolspec_schema::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use toolspec_schema::{
        Callable, Describe, Parameter, PrimitiveKind, SchemaError, SchemaRecord, Signature,
        TypeDescriptor, build_schema,
    };

    #[cfg(feature = "macros")]
    pub use toolspec_schema::tool_schema;
}
