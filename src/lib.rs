//! # Hornlog
//!
//! A Horn-clause entailment engine in Rust.
//!
//! ## Features
//!
//! - Horn-form validation and disjunction-to-implication rewriting
//! - Forward chaining to a fixed point with an ordered derivation trace
//!
//! ## Example
//!
//! ```rust
//! use hornlog::{engine, KnowledgeBase, Literal};
//!
//! let kb = KnowledgeBase::parse("A; A => B; B => C").unwrap();
//! let outcome = engine::run(&kb, &Literal::parse("C"));
//! assert!(outcome.is_entailed());
//! assert_eq!(outcome.trace, vec!["A", "B", "C"]);
//! ```

/// Forward-chaining engine.
pub mod engine;
/// Error taxonomy.
pub mod error;
/// Horn-form validation and rewriting.
pub mod horn;
/// TELL/ASK section extraction.
pub mod input;
/// Knowledge-base data model and builder.
pub mod kb;

pub use engine::{ask, run, Outcome, Verdict};
pub use error::{Error, FormatError, ParseError};
pub use horn::{is_horn_form, to_implication};
pub use kb::{Disjunct, KnowledgeBase, Literal, NegationScope, ParseOptions};
