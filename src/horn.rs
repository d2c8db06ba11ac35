//! Horn-form validation and disjunction rewriting.
//!
//! Both operations work on raw clause text, before any knowledge base is
//! built: [`check_horn_form`] gates the whole TELL input, and
//! [`to_implication`] rewrites a single disjunctive clause into the
//! implication the builder understands.

use crate::error::FormatError;
use log::debug;

/// Implication connective.
pub(crate) const IMPLICATION: &str = "=>";
/// Biconditional connective; never legal in Horn form.
pub(crate) const BICONDITIONAL: &str = "<=>";
/// Disjunction connective.
pub(crate) const DISJUNCTION: &str = "||";
/// Conjunction connective.
pub(crate) const CONJUNCTION: &str = "&";
/// Negation prefix on a literal (or, by the original quirk, on a clause).
pub(crate) const NEGATION: char = '~';

/// Checks that every clause in the semicolon-separated text is Horn form.
///
/// Returns the first rejection found, identifying the offending clause.
/// Empty clauses (for example a trailing separator) are skipped.
pub fn check_horn_form(tell_text: &str) -> Result<(), FormatError> {
    for clause in tell_text.split(';') {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }
        if clause.contains(BICONDITIONAL) {
            debug!("rejecting biconditional clause: {clause}");
            return Err(FormatError::Biconditional(clause.to_string()));
        }
        if clause.contains(IMPLICATION) {
            let parts: Vec<&str> = clause.split(IMPLICATION).collect();
            if parts.len() != 2 {
                debug!("rejecting clause with multiple implications: {clause}");
                return Err(FormatError::MultipleImplications(clause.to_string()));
            }
            let conclusion = parts[1].trim();
            if conclusion.starts_with(NEGATION) || conclusion.split_whitespace().count() > 1 {
                debug!("rejecting clause with invalid conclusion: {clause}");
                return Err(FormatError::InvalidConclusion(clause.to_string()));
            }
        } else {
            // No implication: the clause is a disjunction (or a bare literal,
            // which is a one-disjunct disjunction). At most one positive
            // disjunct, or it cannot reduce to a single-conclusion implication.
            let positives = clause
                .split(DISJUNCTION)
                .map(str::trim)
                .filter(|term| !term.starts_with(NEGATION))
                .count();
            if positives > 1 {
                debug!("rejecting clause with {positives} positive literals: {clause}");
                return Err(FormatError::MultiplePositiveLiterals(clause.to_string()));
            }
        }
    }
    Ok(())
}

/// Returns whether the semicolon-separated clause text is entirely Horn form.
///
/// Pure boolean contract over [`check_horn_form`]; no diagnostics.
#[must_use]
pub fn is_horn_form(tell_text: &str) -> bool {
    check_horn_form(tell_text).is_ok()
}

/// Rewrites a disjunctive clause of the restricted shape
/// `~p1 || ~p2 || ... || c` into the implication `p1&p2&...=>c`.
///
/// Succeeds only when the clause has at least one negated term and exactly
/// one non-negated term; every other shape is reported as
/// [`FormatError::UnconvertibleDisjunction`] and the caller must abort the
/// whole knowledge-base load.
pub fn to_implication(clause: &str) -> Result<String, FormatError> {
    let (negated, positive): (Vec<&str>, Vec<&str>) = clause
        .split(DISJUNCTION)
        .map(str::trim)
        .partition(|term| term.starts_with(NEGATION));

    if negated.is_empty() || positive.len() != 1 {
        return Err(FormatError::UnconvertibleDisjunction(clause.to_string()));
    }

    let premises: Vec<&str> = negated
        .iter()
        .map(|term| term.trim_start_matches(NEGATION))
        .collect();
    Ok(format!(
        "{}{IMPLICATION}{}",
        premises.join(CONJUNCTION),
        positive[0]
    ))
}
