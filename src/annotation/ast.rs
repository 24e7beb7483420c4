//! Metadata model produced by the annotation parser
//!
//! A parsed line is exactly one [`Metadata`] variant. Routes keep their path as an
//! ordered list of literal and placeholder segments; the placeholder names are also
//! collected in `mapping` for quick existence checks.

pub mod error;
pub mod metadata;
pub mod route;
pub mod variable;

pub use error::{ParseError, SlashContext};
pub use metadata::{Metadata, MetadataKind};
pub use route::{HttpMethod, PathSegment, RouteInfo};
pub use variable::{MultiVariableInfo, VariableInfo};
