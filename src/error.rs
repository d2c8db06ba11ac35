use thiserror::Error;

/// A clause shape the Horn restriction rejects.
///
/// Any of these aborts the whole knowledge-base load; nothing is partially
/// loaded. Each variant carries the offending clause text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The clause contains a biconditional connective, which has no Horn form.
    #[error("biconditional is not Horn form: {0}")]
    Biconditional(String),
    /// The clause contains more than one implication connective.
    #[error("more than one implication in clause: {0}")]
    MultipleImplications(String),
    /// The conclusion is negated or is not a single token.
    #[error("conclusion must be a single positive literal: {0}")]
    InvalidConclusion(String),
    /// A disjunctive clause has more than one positive literal.
    #[error("more than one positive literal in clause: {0}")]
    MultiplePositiveLiterals(String),
    /// A disjunctive clause cannot be rewritten as an implication
    /// (no negative literal, or not exactly one positive literal).
    #[error("cannot rewrite disjunction as implication: {0}")]
    UnconvertibleDisjunction(String),
}

/// Structurally malformed input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Splitting a clause on its implication connective did not yield
    /// exactly a premise part and a conclusion part.
    #[error("malformed clause: {0}")]
    MalformedClause(String),
    /// The input text has no TELL section followed by an ASK section.
    #[error("input does not contain TELL and ASK sections")]
    MissingSections,
}

/// Any error raised while loading a knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The clause text is not in Horn form or cannot be normalized to it.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The clause text is structurally malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
