//! Static metadata describing how entities are listed, sorted and filtered
//!
//! Every listable entity has one `ModelDescriptor` defined as a `const` in
//! `crate::domain`. Descriptors are plain data; behaviour lives in the
//! frontend column materializer and list query builder.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::registry;
//!
//! let article = registry::find("article").unwrap();
//! article.validate()?;
//! for field in article.list_fields {
//!     println!("{}", field);
//! }
//! ```

mod descriptor;
mod field_kind;
mod projection;
mod validation;

pub use descriptor::{DefaultSort, DetailGroup, Endpoints, ModelDescriptor, StaticValue};
pub use field_kind::{DropdownOption, FieldKind, FieldValue};
pub use projection::{Projection, ProjectionError};
pub use validation::{DescriptorError, FieldInputError, FilterField};
