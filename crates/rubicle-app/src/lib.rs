//! Shared library module for the Rubicle app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod controls;
pub mod history_view;
