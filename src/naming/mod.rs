//! Identifier naming: the camel-case transform, the protected-name guard, the
//! composer and the per-kind resolver built on top of them.
pub mod case;
pub mod compose;
pub(crate) mod package;
pub mod protected;
pub mod resolver;

pub use case::camel_case;
pub use compose::join_names;
pub use package::GO_KEYWORDS;
pub use protected::{is_protected, replace_protected, PROTECTED_NAMES};
pub use resolver::Resolver;
