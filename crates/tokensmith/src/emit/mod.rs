//! Output artifacts: the resolved JSON document and the CSS stylesheet.
//!
//! Both are rendered to strings; writing them to disk is the job of
//! [`build`](crate::build).

pub mod css;
pub mod json;

pub use css::{custom_properties, render_stylesheet, CustomProperty};
pub use json::{format_timestamp, Meta, ResolvedDocument};
