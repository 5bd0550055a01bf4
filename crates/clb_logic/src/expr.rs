//! Symbolic Boolean expression trees over the four LUT inputs.
//!
//! An [`Expr`] is a read-only tree of operator nodes over positional input
//! leaves. Sub-trees are reference-counted, so reusing an expression in two
//! places shares structure instead of copying it. Every expression carries
//! the set of fabric signals it references; combining expressions unions the
//! sets. Construction never fails and evaluation is pure.

use crate::signal::LutSignal;
use std::collections::BTreeSet;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::rc::Rc;

/// A binary Boolean operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// Conjunction (`&`).
    And,
    /// Disjunction (`|`).
    Or,
    /// Exclusive or (`^`).
    Xor,
    /// Negated exclusive or (equality of the operands).
    Xnor,
}

impl BinOp {
    fn apply(self, l: bool, r: bool) -> bool {
        match self {
            BinOp::And => l & r,
            BinOp::Or => l | r,
            BinOp::Xor => l ^ r,
            BinOp::Xnor => l == r,
        }
    }
}

/// An operator node. Leaves reference one of the four positional LUT inputs.
#[derive(Debug)]
enum Node {
    Input(usize),
    Not(Rc<Node>),
    Bin(BinOp, Rc<Node>, Rc<Node>),
}

impl Node {
    fn eval(&self, inputs: [bool; 4]) -> bool {
        match self {
            Node::Input(i) => inputs[*i],
            Node::Not(inner) => !inner.eval(inputs),
            Node::Bin(op, l, r) => op.apply(l.eval(inputs), r.eval(inputs)),
        }
    }
}

/// A symbolic Boolean expression over the four LUT inputs.
///
/// Built from positional leaves ([`Expr::input`]) or fabric signals
/// (`Expr::from(signal)`, which places the leaf at the signal's port index)
/// and combined with `&`, `|`, `^`, `!`, [`xnor`](Expr::xnor) and
/// [`xor`](Expr::xor). Expressions are symbolic values, never truth values;
/// the only way to get a `bool` out is [`eval`](Expr::eval).
#[derive(Debug, Clone)]
pub struct Expr {
    node: Rc<Node>,
    signals: BTreeSet<LutSignal>,
}

impl Expr {
    /// Creates a leaf referencing positional LUT input `index` (0..=3).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid LUT input index.
    pub fn input(index: usize) -> Self {
        assert!(index < 4, "LUT input index must be 0..=3");
        Self {
            node: Rc::new(Node::Input(index)),
            signals: BTreeSet::new(),
        }
    }

    /// Evaluates the expression at one assignment of the four inputs.
    pub fn eval(&self, inputs: [bool; 4]) -> bool {
        self.node.eval(inputs)
    }

    /// Returns the set of fabric signals this expression references.
    pub fn signals(&self) -> &BTreeSet<LutSignal> {
        &self.signals
    }

    /// Combines two expressions with a binary operator.
    pub fn combine(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        let mut signals = lhs.signals;
        signals.extend(rhs.signals.iter().copied());
        Expr {
            node: Rc::new(Node::Bin(op, lhs.node, rhs.node)),
            signals,
        }
    }

    /// Builds the XNOR of two expressions (true where the operands agree).
    pub fn xnor(self, rhs: impl Into<Expr>) -> Expr {
        Expr::combine(BinOp::Xnor, self, rhs.into())
    }

    /// Builds the XOR of two expressions (true where the operands differ).
    pub fn xor(self, rhs: impl Into<Expr>) -> Expr {
        Expr::combine(BinOp::Xor, self, rhs.into())
    }
}

impl From<LutSignal> for Expr {
    fn from(sig: LutSignal) -> Self {
        let mut signals = BTreeSet::new();
        signals.insert(sig);
        Expr {
            node: Rc::new(Node::Input(sig.input_index())),
            signals,
        }
    }
}

impl<R: Into<Expr>> BitAnd<R> for Expr {
    type Output = Expr;

    fn bitand(self, rhs: R) -> Expr {
        Expr::combine(BinOp::And, self, rhs.into())
    }
}

impl<R: Into<Expr>> BitOr<R> for Expr {
    type Output = Expr;

    fn bitor(self, rhs: R) -> Expr {
        Expr::combine(BinOp::Or, self, rhs.into())
    }
}

impl<R: Into<Expr>> BitXor<R> for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: R) -> Expr {
        Expr::combine(BinOp::Xor, self, rhs.into())
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr {
            node: Rc::new(Node::Not(self.node)),
            signals: self.signals,
        }
    }
}

impl<R: Into<Expr>> BitAnd<R> for LutSignal {
    type Output = Expr;

    fn bitand(self, rhs: R) -> Expr {
        Expr::from(self) & rhs
    }
}

impl<R: Into<Expr>> BitOr<R> for LutSignal {
    type Output = Expr;

    fn bitor(self, rhs: R) -> Expr {
        Expr::from(self) | rhs
    }
}

impl<R: Into<Expr>> BitXor<R> for LutSignal {
    type Output = Expr;

    fn bitxor(self, rhs: R) -> Expr {
        Expr::from(self) ^ rhs
    }
}

impl Not for LutSignal {
    type Output = Expr;

    fn not(self) -> Expr {
        !Expr::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::signal;
    use clb_model::{LutInA, LutInB, LutInC};

    fn inputs(w: usize) -> [bool; 4] {
        [w & 1 != 0, w & 2 != 0, w & 4 != 0, w & 8 != 0]
    }

    #[test]
    fn leaf_evaluation() {
        for i in 0..4 {
            let leaf = Expr::input(i);
            for w in 0..16 {
                assert_eq!(leaf.eval(inputs(w)), w & (1 << i) != 0);
            }
        }
    }

    #[test]
    #[should_panic(expected = "LUT input index")]
    fn leaf_index_out_of_range_panics() {
        let _ = Expr::input(4);
    }

    #[test]
    fn operators_match_boolean_algebra() {
        let a = Expr::input(0);
        let b = Expr::input(1);
        let and = a.clone() & b.clone();
        let or = a.clone() | b.clone();
        let xor = a.clone() ^ b.clone();
        let xnor = a.clone().xnor(b.clone());
        let not = !a;

        for w in 0..4usize {
            let (va, vb) = (w & 1 != 0, w & 2 != 0);
            assert_eq!(and.eval(inputs(w)), va & vb);
            assert_eq!(or.eval(inputs(w)), va | vb);
            assert_eq!(xor.eval(inputs(w)), va ^ vb);
            assert_eq!(xnor.eval(inputs(w)), va == vb);
            assert_eq!(not.eval(inputs(w)), !va);
        }
    }

    #[test]
    fn xnor_is_negated_xor() {
        let e1 = Expr::input(0).xnor(Expr::input(1));
        let e2 = !(Expr::input(0) ^ Expr::input(1));
        for w in 0..16 {
            assert_eq!(e1.eval(inputs(w)), e2.eval(inputs(w)));
        }
    }

    #[test]
    fn signal_leaf_uses_port_index() {
        // A port-C signal evaluates positional input 2.
        let e = Expr::from(signal(LutInC::In8));
        assert!(!e.eval(inputs(0b0011)));
        assert!(e.eval(inputs(0b0100)));
    }

    #[test]
    fn signal_sets_accumulate() {
        let e = signal(LutInA::ClbBle5) ^ signal(LutInC::In8) | signal(LutInB::ClbBle8);
        let names: Vec<&str> = e.signals().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["CLB_BLE_5", "CLB_BLE_8", "IN8"]);
    }

    #[test]
    fn duplicate_signals_collapse() {
        let s = signal(LutInA::In0);
        let e = (s & s) | s;
        assert_eq!(e.signals().len(), 1);
    }

    #[test]
    fn positional_leaves_reference_no_signals() {
        let e = Expr::input(0) & Expr::input(3);
        assert!(e.signals().is_empty());
    }

    #[test]
    fn shared_subtrees_clone_cheaply() {
        let shared = signal(LutInA::In0) ^ signal(LutInB::In4);
        let e = shared.clone() | !shared;
        // A tautology: true everywhere.
        for w in 0..16 {
            assert!(e.eval(inputs(w)));
        }
        assert_eq!(e.signals().len(), 2);
    }
}
