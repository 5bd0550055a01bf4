//! Shared helpers for the CLB toolchain conformance tests.
//!
//! Provides deterministic random sampling of configuration records (every
//! field drawn uniformly from its enumeration) and random Boolean expression
//! trees, used by the integration tests to exercise the round-trip and
//! truth-table laws.

#![warn(missing_docs)]

use clb_logic::{signal, Expr};
use clb_model::{
    BleId, ClbConfig, Clbin, ClkDiv, CntMux, Flopsel, InputSync, IrqSel, LutInA, LutInB, LutInC,
    LutInD, LutMask, PpsPinSel,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Draws a configuration record with every codec-backed field populated
/// uniformly from its enumeration.
///
/// The FASM-only parts of the record (output enables, peripheral
/// attributions) are left unset, matching what decoding produces.
pub fn sample_config(rng: &mut impl Rng) -> ClbConfig {
    let mut cfg = ClbConfig::new();

    for ble in BleId::all() {
        let slot = cfg.ble_mut(ble);
        slot.lut_mask = Some(LutMask::new(rng.gen()));
        slot.flopsel = Some(Flopsel::from(rng.gen_bool(0.5)));
        slot.input_a = Some(*LutInA::ALL.choose(rng).unwrap());
        slot.input_b = Some(*LutInB::ALL.choose(rng).unwrap());
        slot.input_c = Some(*LutInC::ALL.choose(rng).unwrap());
        slot.input_d = Some(*LutInD::ALL.choose(rng).unwrap());
    }

    for mux in cfg.muxes.iter_mut() {
        mux.clbin = Some(*Clbin::ALL.choose(rng).unwrap());
        mux.insync = InputSync::from_bits(rng.gen_range(0..8));
    }

    for pin in cfg.pps_out.iter_mut() {
        *pin = PpsPinSel::from_code(rng.gen_range(0..4));
    }
    for irq in cfg.irq_out.iter_mut() {
        *irq = IrqSel::from_code(rng.gen_range(0..8));
    }

    cfg.counter.stop = BleId::new(rng.gen_range(0..32));
    cfg.counter.reset = BleId::new(rng.gen_range(0..32));
    for slot in cfg.counter.count_is.iter_mut() {
        *slot = Some(*CntMux::ALL.choose(rng).unwrap());
    }

    cfg.clkdiv = *ClkDiv::ALL.choose(rng).unwrap();
    cfg
}

/// Builds a random expression tree over the four positional inputs.
///
/// At depth 0 the tree is a leaf; otherwise an operator node over two
/// recursively drawn sub-trees (or a negation of one).
pub fn random_expr(rng: &mut impl Rng, depth: usize) -> Expr {
    if depth == 0 || rng.gen_bool(0.2) {
        return Expr::input(rng.gen_range(0..4));
    }
    match rng.gen_range(0..5) {
        0 => random_expr(rng, depth - 1) & random_expr(rng, depth - 1),
        1 => random_expr(rng, depth - 1) | random_expr(rng, depth - 1),
        2 => random_expr(rng, depth - 1) ^ random_expr(rng, depth - 1),
        3 => random_expr(rng, depth - 1).xnor(random_expr(rng, depth - 1)),
        _ => !random_expr(rng, depth - 1),
    }
}

/// Builds a random expression over a fixed set of one signal per port.
///
/// All four ports are referenced, so the resolved record selects a source on
/// every input.
pub fn random_signal_expr(rng: &mut impl Rng, depth: usize) -> Expr {
    let leaves = [
        Expr::from(signal(LutInA::In0)),
        Expr::from(signal(LutInB::In4)),
        Expr::from(signal(LutInC::In8)),
        Expr::from(signal(LutInD::In12)),
    ];
    if depth == 0 || rng.gen_bool(0.2) {
        return leaves[rng.gen_range(0..4)].clone();
    }
    match rng.gen_range(0..5) {
        0 => random_signal_expr(rng, depth - 1) & random_signal_expr(rng, depth - 1),
        1 => random_signal_expr(rng, depth - 1) | random_signal_expr(rng, depth - 1),
        2 => random_signal_expr(rng, depth - 1) ^ random_signal_expr(rng, depth - 1),
        3 => random_signal_expr(rng, depth - 1).xnor(random_signal_expr(rng, depth - 1)),
        _ => !random_signal_expr(rng, depth - 1),
    }
}
