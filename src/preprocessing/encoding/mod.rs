//! Categorical feature encoding transformers.
//!
//! # Available Encoders
//!
//! ## RareLabelEncoder
//! Replaces labels seen in less than `tol` of the training rows with `"Rare"`.
//!
//! ```ignore
//! // tol = 0.5, fit on ["A", "A", "B"]
//! // transform ["A", "B", "C"] -> ["A", "Rare", "Rare"]
//! ```
//!
//! ## CategoricalEncoder
//! Expands labels into `<field>_<label>` indicator columns, dropping the first
//! (reference) label of each field.
//!
//! ```ignore
//! // sex = ["female", "male", "male"]
//! // -> sex_male = [0, 1, 1]
//! ```
//!
//! # Design Notes
//!
//! Encoders run last in a pipeline: rare-label collapsing bounds the number of
//! labels, and the one-hot encoder turns the remaining labels into numbers.

mod one_hot;
mod rare_label;

pub use one_hot::{CategoricalEncoder, CategoricalEncoderState};
pub use rare_label::{RareLabelEncoder, RareLabelEncoderState, DEFAULT_TOLERANCE, RARE_LABEL};
