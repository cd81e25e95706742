//! Upper-camel transform applied to declared schema names before they are used
//! as Go identifiers.
use crate::conf::{LEADING_UNDERSCORE, NAME_SEPARATOR};

//==================================================================================CAMEL_CASE
/// Convert a declared schema name into the generator's upper-camel form.
///
/// - a leading `_` becomes `X`;
/// - a `_` followed by a lowercase ASCII letter is dropped and the letter is
///   capitalized;
/// - every other `_` and every other punctuation character is kept;
/// - a lowercase letter right after a digit is capitalized (`sha256sum` ->
///   `Sha256Sum`);
/// - the first letter of the result is capitalized.
///
/// ```
/// use pgsgo_names::naming::camel_case;
///
/// assert_eq!(camel_case("foo_bar"), "FooBar");
/// assert_eq!(camel_case("_foo"), "Xfoo");
/// assert_eq!(camel_case("foo_Bar"), "Foo_Bar");
/// ```
pub fn camel_case(raw: &str) -> String {
    let mut buffer = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut capitalize_next = false;
    let mut letter_seen = false;

    if chars.next_if_eq(&NAME_SEPARATOR).is_some() {
        buffer.push(LEADING_UNDERSCORE);
        letter_seen = true;
    }

    while let Some(c) = chars.next() {
        match c {
            NAME_SEPARATOR if chars.peek().is_some_and(char::is_ascii_lowercase) => {
                capitalize_next = true;
            }
            _ if c.is_alphabetic() => {
                if capitalize_next || !letter_seen {
                    buffer.push(c.to_ascii_uppercase());
                } else {
                    buffer.push(c);
                }
                capitalize_next = false;
                letter_seen = true;
            }
            _ => {
                // Digits end a word; any other character does not.
                capitalize_next = c.is_ascii_digit();
                buffer.push(c);
            }
        }
    }

    buffer
}
