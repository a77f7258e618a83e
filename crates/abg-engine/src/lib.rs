//! abg-engine
//!
//! Arterial blood gas interpretation. Pure and stateless: every function is
//! a computation over its arguments and the read-only tables in
//! [`reference`] and [`causes`]. Range validation of raw input lives in
//! [`validation`] and is the caller's responsibility.

pub mod anion_gap;
pub mod causes;
pub mod compensation;
pub mod consistency;
pub mod delta_ratio;
pub mod disorder;
pub mod error;
pub mod interpret;
pub mod osmolar_gap;
pub mod ph;
pub mod reference;
pub mod validation;

pub use interpret::{interpret, try_interpret};
