//! Knowledge-base construction from validated, normalized clause text.

use crate::error::{Error, ParseError};
use crate::horn::{self, CONJUNCTION, DISJUNCTION, IMPLICATION, NEGATION};
use indexmap::IndexMap;
use log::{debug, info};
use smallvec::SmallVec;

/// A propositional symbol together with its polarity.
///
/// Two literals name the same atom iff their symbols are equal; the polarity
/// is a separate axis. Symbols are case-sensitive opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    /// The symbol name, with any negation marker stripped.
    pub symbol: String,
    /// Whether the literal carried a negation marker.
    pub negated: bool,
}

impl Literal {
    /// Parses a literal token, stripping a leading negation marker.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        Self {
            symbol: token.trim_start_matches(NEGATION).to_string(),
            negated: token.starts_with(NEGATION),
        }
    }

    /// A positive literal for `symbol`.
    #[must_use]
    pub fn positive(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            negated: false,
        }
    }

    /// A negated literal for `symbol`.
    #[must_use]
    pub fn negative(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            negated: true,
        }
    }
}

/// One alternative body for a conclusion symbol.
///
/// The conclusion itself is the rule-set key; only its negation flag lives
/// here, because the same symbol can be concluded by several clauses with
/// different premise sets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disjunct {
    /// The conjoined premises that must all hold for the disjunct to fire.
    pub premises: SmallVec<[Literal; 4]>,
    /// Whether the concluded symbol is committed with negative polarity.
    pub negated_conclusion: bool,
}

/// Where the negation marker for a rule conclusion (or fact) is looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NegationScope {
    /// Test whether the entire trimmed clause starts with the marker.
    ///
    /// This reproduces the historical behavior: a clause like `~P & Q => R`
    /// records `R` as a negated conclusion even though the marker sits on a
    /// premise. Kept as the default for compatibility.
    #[default]
    ClauseInitial,
    /// Test the conclusion token itself. Under this scope a negated
    /// conclusion can never survive the Horn-form check, so rule conclusions
    /// are always committed positive.
    ConclusionToken,
}

/// Configuration for [`KnowledgeBase::parse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Negation-marker detection for conclusions and facts.
    pub negation_scope: NegationScope,
}

/// An immutable rule set plus the initial fact polarities.
///
/// Built once from TELL text (or programmatically) and never mutated by the
/// engine; a [`crate::engine::run`] call copies the fact polarities into its
/// own transient state.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnowledgeBase {
    /// Conclusion symbol to its alternative bodies, in clause order.
    rules: IndexMap<String, Vec<Disjunct>>,
    /// Symbol to initially asserted polarity; presence means "known".
    facts: IndexMap<String, bool>,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses semicolon-separated clause text with the default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if any clause fails the Horn-form check or a
    /// disjunction cannot be rewritten, and [`Error::Parse`] for structurally
    /// malformed clauses. Nothing is loaded on error.
    pub fn parse(tell_text: &str) -> Result<Self, Error> {
        Self::parse_with(tell_text, ParseOptions::default())
    }

    /// Parses semicolon-separated clause text.
    ///
    /// The whole text is validated as Horn form first; then each clause
    /// containing a disjunction is rewritten to an implication, and the
    /// result is split into rules (clauses with `=>`) and initial facts
    /// (bare literals).
    ///
    /// # Errors
    ///
    /// Same as [`KnowledgeBase::parse`].
    pub fn parse_with(tell_text: &str, options: ParseOptions) -> Result<Self, Error> {
        horn::check_horn_form(tell_text)?;

        let mut kb = Self::new();
        for raw in tell_text.split(';') {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let clause = if raw.contains(DISJUNCTION) {
                let rewritten = horn::to_implication(raw)?;
                info!("rewrote disjunction {raw} as {rewritten}");
                rewritten
            } else {
                raw.to_string()
            };

            if clause.contains(IMPLICATION) {
                let mut parts = clause.split(IMPLICATION);
                let (Some(premise_text), Some(conclusion_text), None) =
                    (parts.next(), parts.next(), parts.next())
                else {
                    return Err(ParseError::MalformedClause(clause.clone()).into());
                };

                let premises: SmallVec<[Literal; 4]> =
                    premise_text.split(CONJUNCTION).map(Literal::parse).collect();
                let conclusion_token = conclusion_text.trim();
                let symbol = conclusion_token.trim_start_matches(NEGATION).to_string();
                let negated_conclusion = match options.negation_scope {
                    NegationScope::ClauseInitial => clause.trim().starts_with(NEGATION),
                    NegationScope::ConclusionToken => conclusion_token.starts_with(NEGATION),
                };
                debug!("rule: {premises:?} => {symbol} (negated: {negated_conclusion})");
                kb.add_rule(
                    symbol,
                    Disjunct {
                        premises,
                        negated_conclusion,
                    },
                );
            } else {
                let fact = Literal::parse(&clause);
                debug!("fact: {fact:?}");
                kb.assert_fact(fact);
            }
        }
        Ok(kb)
    }

    /// Asserts an initial fact; its polarity is the literal's.
    ///
    /// Re-asserting a symbol overwrites its polarity.
    pub fn assert_fact(&mut self, literal: Literal) {
        self.facts.insert(literal.symbol, !literal.negated);
    }

    /// Appends a disjunct to the rule for `conclusion`.
    pub fn add_rule(&mut self, conclusion: impl Into<String>, disjunct: Disjunct) {
        self.rules.entry(conclusion.into()).or_default().push(disjunct);
    }

    /// The rule table, keyed by conclusion symbol, in insertion order.
    #[must_use]
    pub fn rules(&self) -> &IndexMap<String, Vec<Disjunct>> {
        &self.rules
    }

    /// The initial fact polarities, in insertion order.
    #[must_use]
    pub fn facts(&self) -> &IndexMap<String, bool> {
        &self.facts
    }
}
