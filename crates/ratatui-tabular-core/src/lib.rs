//! `ratatui-tabular-core` provides the geometry and option primitives a terminal table needs.
//!
//! This crate does not draw anything. It answers two questions for a layout component:
//! where a region goes ([`area`]) and which vocabulary describes how content sits inside it
//! ([`align`], [`wrapping`]).
//!
//! ## Areas
//!
//! [`area::Area`] is an integer rectangle given by two corner points. An `Area` always covers at
//! least one cell, so every operation that could leave nothing behind returns `Option<Area>`:
//! `None` means "nothing to draw here" and is a normal result, not a failure.
//!
//! Only caller-supplied arguments outside their documented range produce an error
//! ([`error::LayoutError::InvalidArgument`]).
//!
//! ```
//! use ratatui_tabular_core::area::{self, Area, Point};
//!
//! let screen = Area::new(Point::new(0, 0), Point::new(80, 24)).unwrap();
//! let (header, body) = area::hsplit(screen, 10).unwrap();
//! assert_eq!(header.map(|a| a.height()), Some(2));
//! assert_eq!(body.map(|a| a.height()), Some(22));
//! ```
pub mod align;
pub mod area;
pub mod error;
pub mod numbers;
pub mod wrapping;

pub use error::LayoutError;
pub use error::Result;
