//! Forward-chaining entailment over a Horn knowledge base.
//!
//! The engine is a worklist fixed point: a FIFO agenda of symbols seeded from
//! the initially-true facts, a map from symbol to its committed polarity, and
//! a sweep over the rule table after every pop. Each symbol is committed at
//! most once and the symbol universe is finite, so the loop always terminates.

use crate::kb::{KnowledgeBase, Literal};
use indexmap::IndexMap;
use log::debug;
use std::collections::VecDeque;
use std::fmt;

/// Whether the query was proven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// The knowledge base entails the query.
    Entailed,
    /// The agenda drained without proving the query.
    NotEntailed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entailed => f.write_str("YES"),
            Self::NotEntailed => f.write_str("NO"),
        }
    }
}

/// Result of a single forward-chaining run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// The verdict for the query.
    pub verdict: Verdict,
    /// Symbols in the order they were popped from the agenda. Only meaningful
    /// as a justification when the verdict is [`Verdict::Entailed`].
    pub trace: Vec<String>,
}

impl Outcome {
    /// Returns whether the query was proven.
    #[must_use]
    pub fn is_entailed(&self) -> bool {
        self.verdict == Verdict::Entailed
    }
}

/// Runs forward chaining over `kb` until the query is proven or the agenda
/// drains.
///
/// The knowledge base is not mutated: all transient state (committed
/// polarities, agenda, trace) is owned by this call and dropped with it, so
/// repeated runs over the same knowledge base give identical outcomes.
///
/// A premise holds iff its symbol has a committed polarity matching the
/// premise: a positive premise needs the symbol committed true, a negated
/// premise needs it committed false. A symbol's polarity is committed at most
/// once (first derivation wins; initial facts count as committed), and the
/// query succeeds the moment its symbol is popped while carrying the polarity
/// the query asks for.
#[must_use]
pub fn run(kb: &KnowledgeBase, query: &Literal) -> Outcome {
    // Committed polarities; presence doubles as the derived flag.
    let mut known: IndexMap<String, bool> = kb.facts().clone();
    // Negative initial facts are known but never enter the agenda.
    let mut agenda: VecDeque<String> = kb
        .facts()
        .iter()
        .filter(|&(_, &polarity)| polarity)
        .map(|(symbol, _)| symbol.clone())
        .collect();
    let mut trace = Vec::new();

    while let Some(symbol) = agenda.pop_front() {
        trace.push(symbol.clone());

        if symbol == query.symbol && known.get(&symbol).copied() == Some(!query.negated) {
            debug!("query {symbol} satisfied after {} pops", trace.len());
            return Outcome {
                verdict: Verdict::Entailed,
                trace,
            };
        }

        for (conclusion, disjuncts) in kb.rules() {
            if known.contains_key(conclusion) {
                continue;
            }
            for disjunct in disjuncts {
                let fires = disjunct
                    .premises
                    .iter()
                    .all(|p| known.get(&p.symbol).copied() == Some(!p.negated));
                if fires {
                    let polarity = !disjunct.negated_conclusion;
                    debug!("derived {conclusion} = {polarity}");
                    known.insert(conclusion.clone(), polarity);
                    agenda.push_back(conclusion.clone());
                    break;
                }
            }
        }
    }

    Outcome {
        verdict: Verdict::NotEntailed,
        trace,
    }
}

/// Returns whether `kb` entails `query`.
#[must_use]
pub fn ask(kb: &KnowledgeBase, query: &Literal) -> bool {
    run(kb, query).is_entailed()
}
