#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # nearch-entities
//!
//! Reusable, agnostic domain entities for nearchitectural.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod display_item;
pub mod geo;
pub mod id;
pub mod place;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
