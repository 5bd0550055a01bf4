//! Front-end laws: truth-table completeness, port-assignment determinism,
//! and active-input detection, plus the concrete end-to-end scenarios.

use clb_conformance::{random_expr, random_signal_expr, sample_config};
use clb_diagnostics::DiagnosticSink;
use clb_logic::{auto_ble, signal, truth_table, Expr};
use clb_model::{BleId, ClbError, Flopsel, LutInA, LutInB, LutInC, LutMask, PortLetter};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assignment(w: usize) -> [bool; 4] {
    [w & 1 != 0, w & 2 != 0, w & 4 != 0, w & 8 != 0]
}

#[test]
fn truth_table_completeness_over_random_trees() {
    // mask >> ((d<<3)|(c<<2)|(b<<1)|a) & 1 equals the expression's value at
    // that assignment, for trees up to depth 5.
    let mut rng = StdRng::seed_from_u64(0x7AB1E);
    for _ in 0..300 {
        let e = random_expr(&mut rng, 5);
        let mask = truth_table(&e).bits();
        for w in 0..16usize {
            assert_eq!(mask >> w & 1 == 1, e.eval(assignment(w)));
        }
    }
}

#[test]
fn port_assignment_determinism() {
    // Expressions over the same signal set resolve to the same port map no
    // matter how their sub-expressions were combined.
    let sink = DiagnosticSink::new();
    let mut rng = StdRng::seed_from_u64(0xD37);
    for _ in 0..100 {
        let e = random_signal_expr(&mut rng, 4);
        let cfg = auto_ble(e, None, &sink).unwrap();
        for sig in [
            cfg.input_a.map(|s| s.name()),
            cfg.input_b.map(|s| s.name()),
            cfg.input_c.map(|s| s.name()),
            cfg.input_d.map(|s| s.name()),
        ]
        .into_iter()
        .flatten()
        {
            assert!(["IN0", "IN4", "IN8", "IN12"].contains(&sig));
        }
    }

    // The two concrete orderings resolve identically.
    let e1 = (signal(LutInA::In0) & signal(LutInB::In4)) ^ signal(LutInC::In8);
    let e2 = signal(LutInC::In8) ^ (signal(LutInA::In0) & signal(LutInB::In4));
    let c1 = auto_ble(e1, None, &sink).unwrap();
    let c2 = auto_ble(e2, None, &sink).unwrap();
    assert_eq!(c1, c2);
}

#[test]
fn active_input_detection_is_exact() {
    // For every sampled mask, input k is reported active iff toggling bit k
    // of the address changes the output somewhere.
    let mut rng = StdRng::seed_from_u64(0xAC71);
    for _ in 0..500 {
        let mask = LutMask::new(rand::Rng::gen(&mut rng));
        let active = mask.active_inputs();
        for k in 0..4 {
            let brute = (0..16usize).any(|w| mask.output_at(w) != mask.output_at(w ^ (1 << k)));
            assert_eq!(active[k], brute, "mask {mask} input {k}");
        }
    }
}

#[test]
fn auto_ble_ports_match_mask_active_inputs() {
    // Expressions whose every referenced signal actually matters produce
    // records where the active set equals the selected set; in general the
    // active set can only shrink below the referenced set.
    let sink = DiagnosticSink::new();
    let mut rng = StdRng::seed_from_u64(0x90F);
    for _ in 0..100 {
        let cfg = auto_ble(random_signal_expr(&mut rng, 4), None, &sink).unwrap();
        let active = cfg.lut_mask.unwrap().active_inputs();
        let selected = cfg.selected_ports();
        for k in 0..4 {
            assert!(
                !active[k] || selected[k],
                "active input {k} without a source"
            );
        }
    }
}

#[test]
fn scenario_xor_or_expression() {
    let sink = DiagnosticSink::new();
    let expr = signal(LutInA::ClbBle5) ^ signal(LutInC::In8) | signal(LutInB::ClbBle8);
    let cfg = auto_ble(expr, None, &sink).unwrap();

    assert_eq!(cfg.input_a, Some(LutInA::ClbBle5));
    assert_eq!(cfg.input_b, Some(LutInB::ClbBle8));
    assert_eq!(cfg.input_c, Some(LutInC::In8));
    assert_eq!(cfg.flopsel, Some(Flopsel::Disable));

    let expected = clb_logic::truth_table_fn(|a, b, c, _| (a ^ c) | b);
    assert_eq!(cfg.lut_mask, Some(expected));
}

#[test]
fn scenario_port_collision() {
    let sink = DiagnosticSink::new();
    let err = auto_ble(signal(LutInA::ClbBle0) & signal(LutInA::ClbBle1), None, &sink).unwrap_err();
    assert!(matches!(err, ClbError::PortCollision { port: 'A', .. }));
}

#[test]
fn scenario_parity_mask() {
    let e = Expr::input(0) ^ Expr::input(1) ^ Expr::input(2) ^ Expr::input(3);
    assert_eq!(truth_table(&e).to_string(), "0110100110010110");
}

#[test]
fn scenario_sampled_records_are_value_equal_and_checkable() {
    // The consistency check is pure observation: it never mutates the record
    // or aborts, even on the inconsistent configurations a sampler produces.
    let mut rng = StdRng::seed_from_u64(0xF00D);
    let cfg = sample_config(&mut rng);
    let sink = DiagnosticSink::new();
    cfg.check(&sink);
    let copy = cfg.clone();
    assert_eq!(copy, cfg);
    for ble in BleId::all() {
        let ports = cfg.ble(ble).lut_mask.unwrap().active_ports();
        assert!(ports.len() <= PortLetter::ALL.len());
    }
}
