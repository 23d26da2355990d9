//! fpgen: parametric footprint generator for the gEDA PCB layout editor
//!
//! This library turns a parametric package description into a complete
//! footprint element file: copper pads and pins, silkscreen outline, pin-1
//! marker, courtyard keep-out and embedded attributes.
//!
//! # Architecture
//!
//! Everything flows through an immutable [`element::PackageDescriptor`],
//! built from explicit values, a JSON parameter file or the builtin preset
//! catalog. Three entry points drive one generation run:
//!
//! - [`element::check_rules`] — run the family's design rule table
//! - [`element::build_primitives`] — compute the primitive geometry
//! - [`element::serialize_to_path`] — write the footprint file
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`element`] — Descriptor, geometry engine, DRC and file writer
//! - [`error`] — Configuration error types

pub mod config;
pub mod element;
pub mod error;
