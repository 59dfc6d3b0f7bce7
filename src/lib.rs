//! Typed model of Matrix timeline events plus a uniform accessor layer.
//!
//! The [`events`] module defines the closed catalog of event shapes as a
//! tagged union, with serde mappings back to the Matrix wire format. The
//! [`accessors`] module projects individual fields out of any variant of
//! that union, returning a type-appropriate default where a field does not
//! apply, so callers never need to match on the concrete shape themselves.

#[macro_use]
extern crate serde_derive;
#[cfg(test)]
#[macro_use]
extern crate serde_json;

pub mod accessors;
pub mod events;
