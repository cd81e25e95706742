//! Identifiers the generated Go code always defines on every message type.
//! Field and oneof names must steer clear of them.
use std::borrow::Cow;

use log::debug;

use crate::conf::PROTECTED_SUFFIX;

//==================================================================================PROTECTED
/// Methods synthesized on each generated message. A field or oneof getter with
/// one of these names would clash with them.
pub const PROTECTED_NAMES: &[&str] = &[
    "Reset",
    "String",
    "ProtoMessage",
    "Marshal",
    "Unmarshal",
    "ExtensionRangeArray",
    "ExtensionMap",
    "Descriptor",
];

/// True when `name` is one of the [`PROTECTED_NAMES`].
pub fn is_protected(name: &str) -> bool {
    PROTECTED_NAMES.contains(&name)
}

/// Return the substitute for a protected identifier (the name plus a trailing
/// `_`), or the input unchanged.
///
/// ```
/// use pgsgo_names::naming::replace_protected;
///
/// assert_eq!(replace_protected("String"), "String_");
/// assert_eq!(replace_protected("Widget"), "Widget");
/// ```
pub fn replace_protected(name: &str) -> Cow<'_, str> {
    if is_protected(name) {
        debug!("protected identifier `{name}` renamed to `{name}{PROTECTED_SUFFIX}`");
        Cow::Owned(format!("{name}{PROTECTED_SUFFIX}"))
    } else {
        Cow::Borrowed(name)
    }
}
