//! Contains simple functions implementing the logical operators of an expression. These are
//! used by the postfix evaluator as well as by the `BooleanExpression` tree.

use crate::Operator;

/// Operator function corresponding to $\neg x$.
pub fn not(x: bool) -> bool {
    !x
}

/// Operator function corresponding to $x \land y$.
pub fn and(l: bool, r: bool) -> bool {
    l && r
}

/// Operator function corresponding to $x \lor y$.
pub fn or(l: bool, r: bool) -> bool {
    l || r
}

/// Operator function corresponding to $x \not\Leftrightarrow y$.
pub fn xor(l: bool, r: bool) -> bool {
    l ^ r
}

/// Get the function implementing a binary `operator`, or `None` for `Operator::Not`.
pub fn binary(operator: Operator) -> Option<fn(bool, bool) -> bool> {
    match operator {
        Operator::Not => None,
        Operator::And => Some(and),
        Operator::Xor => Some(xor),
        Operator::Or => Some(or),
    }
}
