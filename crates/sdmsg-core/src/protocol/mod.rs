//! Structured-data wire format.
//!
//! ```text
//! HEADER " " SD-ELEMENTS (" " MESSAGE)?
//! HEADER       ::= MSGID | "-"
//! SD-ELEMENTS  ::= "-" | SD-ELEMENT+
//! SD-ELEMENT   ::= "[" SD-ID (" " PARAM-NAME "=\"" ESCAPED-VALUE "\"")* "]"
//! ```
//!
//! - `escape`: value escaping and the printable-identifier predicate.
//! - `encoder` / `decoder`: the two codec directions.
//! - `scanner`: the escape-aware delimiter walk used by the decoder.
//!
//! All parsers are panic-free: malformed input is reported as `SdError`
//! instead of panicking or slicing past a char boundary.

pub mod decoder;
pub mod encoder;
pub mod escape;
pub mod message;
pub mod scanner;

/// NIL sentinel: the field is absent.
pub const NILVALUE: &str = "-";

/// Stands in for every SD-ELEMENT when a message carries no structured data.
/// Some receivers mis-store a version 1 message whose STRUCTURED-DATA is
/// missing entirely.
pub const EMPTY_VALUE: &str = "-";
