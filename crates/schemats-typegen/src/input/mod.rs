//! Input document readers.
//!
//! Each reader turns a serialized document into a [`SchemaMap`](crate::schema::SchemaMap).

mod openapi;

pub use openapi::{InputFormat, ParseError, parse_document, parse_str};
