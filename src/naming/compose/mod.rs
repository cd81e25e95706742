//! Qualified names built from a parent name and a child segment.
use crate::conf::NAME_SEPARATOR;

/// Join two name fragments with the generator's separator (`a_b`).
///
/// Used for nested types (`Outer_Inner`), enum values (`Color_RED`) and
/// oneof wrapper options (`Msg_Kind`).
pub fn join_names(parent: &str, child: &str) -> String {
    let mut buffer = String::with_capacity(parent.len() + child.len() + 1);
    buffer.push_str(parent);
    buffer.push(NAME_SEPARATOR);
    buffer.push_str(child);
    buffer
}
