//! Signal-to-port resolution: from a Boolean expression to a complete
//! logic-element configuration.

use crate::expr::Expr;
use crate::lut4::truth_table;
use crate::signal::LutSignal;
use clb_diagnostics::DiagnosticSink;
use clb_model::{BleCfg, ClbError, ClbResult, Flopsel};
use std::collections::BTreeMap;

/// Resolves an expression over fabric signals into a logic-element
/// configuration.
///
/// Each distinct signal the expression references is assigned to its LUT
/// input port — the assignment is fixed by the signal's port letter
/// (A↔input 0 .. D↔input 3), never reshuffled, so the same expression always
/// resolves to the same record regardless of the order its sub-expressions
/// were combined in. The 16-bit truth table is synthesized from the
/// expression, and the flip-flop directive defaults to disabled when absent.
///
/// Consistency between the synthesized mask and the selected ports is
/// checked on the way out; disagreements (a port the mask never reads) are
/// warnings on `sink`, not errors.
///
/// # Errors
///
/// - [`ClbError::ArityExceeded`] if the expression references more than four
///   distinct signals.
/// - [`ClbError::PortCollision`] if two distinct signals need the same port,
///   naming both offenders.
pub fn auto_ble(
    expr: impl Into<Expr>,
    flopsel: Option<Flopsel>,
    sink: &DiagnosticSink,
) -> ClbResult<BleCfg> {
    let expr = expr.into();
    let signals = expr.signals();

    if signals.len() > 4 {
        return Err(ClbError::ArityExceeded {
            count: signals.len(),
        });
    }

    let mut by_port: BTreeMap<char, LutSignal> = BTreeMap::new();
    for &sig in signals {
        let letter = sig.letter().as_char();
        if let Some(&prev) = by_port.get(&letter) {
            return Err(ClbError::PortCollision {
                port: letter,
                first: prev.name().to_string(),
                second: sig.name().to_string(),
            });
        }
        by_port.insert(letter, sig);
    }

    let mut cfg = BleCfg {
        lut_mask: Some(truth_table(&expr)),
        flopsel: Some(flopsel.unwrap_or(Flopsel::Disable)),
        ..Default::default()
    };
    for sig in by_port.into_values() {
        match sig {
            LutSignal::A(s) => cfg.input_a = Some(s),
            LutSignal::B(s) => cfg.input_b = Some(s),
            LutSignal::C(s) => cfg.input_c = Some(s),
            LutSignal::D(s) => cfg.input_d = Some(s),
        }
    }

    cfg.check("auto_ble", sink);
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::signal;
    use clb_model::{LutInA, LutInB, LutInC, LutInD, LutMask};

    fn sink() -> DiagnosticSink {
        DiagnosticSink::new()
    }

    #[test]
    fn resolves_ports_and_mask() {
        // (a ^ c) | b with a = CLB_BLE_5, c = IN8, b = CLB_BLE_8.
        let expr = signal(LutInA::ClbBle5) ^ signal(LutInC::In8) | signal(LutInB::ClbBle8);
        let s = sink();
        let cfg = auto_ble(expr, None, &s).unwrap();

        assert_eq!(cfg.input_a, Some(LutInA::ClbBle5));
        assert_eq!(cfg.input_b, Some(LutInB::ClbBle8));
        assert_eq!(cfg.input_c, Some(LutInC::In8));
        assert_eq!(cfg.input_d, None);
        assert_eq!(cfg.flopsel, Some(Flopsel::Disable));

        let expected = crate::lut4::truth_table_fn(|a, b, c, _| (a ^ c) | b);
        assert_eq!(cfg.lut_mask, Some(expected));
        assert!(!s.has_warnings());
    }

    #[test]
    fn bare_signal_resolves() {
        let s = sink();
        let cfg = auto_ble(Expr::from(signal(LutInD::In12)), Some(Flopsel::Enable), &s).unwrap();
        assert_eq!(cfg.input_d, Some(LutInD::In12));
        assert_eq!(cfg.flopsel, Some(Flopsel::Enable));
        // Output = d.
        assert_eq!(cfg.lut_mask, Some(LutMask::new(0xFF00)));
    }

    #[test]
    fn flopsel_from_bool() {
        let s = sink();
        let cfg = auto_ble(
            Expr::from(signal(LutInA::In0)),
            Some(Flopsel::from(true)),
            &s,
        )
        .unwrap();
        assert_eq!(cfg.flopsel, Some(Flopsel::Enable));
    }

    #[test]
    fn port_collision_names_both() {
        let expr = signal(LutInA::ClbBle0) & signal(LutInA::ClbBle1);
        let err = auto_ble(expr, None, &sink()).unwrap_err();
        match err {
            ClbError::PortCollision {
                port,
                first,
                second,
            } => {
                assert_eq!(port, 'A');
                assert_eq!(first, "CLB_BLE_0");
                assert_eq!(second, "CLB_BLE_1");
            }
            other => panic!("expected PortCollision, got {other}"),
        }
    }

    #[test]
    fn five_signals_exceed_arity() {
        let expr = signal(LutInA::ClbBle0)
            & signal(LutInB::ClbBle8)
            & signal(LutInC::ClbBle16)
            & signal(LutInD::ClbBle24)
            & signal(LutInA::In0);
        let err = auto_ble(expr, None, &sink()).unwrap_err();
        assert!(matches!(err, ClbError::ArityExceeded { count: 5 }));
    }

    #[test]
    fn arity_checked_before_collision() {
        // Five distinct signals, two of them on port A: arity wins.
        let expr = signal(LutInA::ClbBle0)
            & signal(LutInA::ClbBle1)
            & signal(LutInB::ClbBle8)
            & signal(LutInC::ClbBle16)
            & signal(LutInD::ClbBle24);
        let err = auto_ble(expr, None, &sink()).unwrap_err();
        assert!(matches!(err, ClbError::ArityExceeded { .. }));
    }

    #[test]
    fn determinism_across_combination_order() {
        let s = sink();
        let e1 = signal(LutInA::In0) & signal(LutInB::In4) | signal(LutInC::In8);
        let e2 = signal(LutInC::In8) | signal(LutInB::In4) & signal(LutInA::In0);
        let c1 = auto_ble(e1, None, &s).unwrap();
        let c2 = auto_ble(e2, None, &s).unwrap();
        assert_eq!(c1.input_a, c2.input_a);
        assert_eq!(c1.input_b, c2.input_b);
        assert_eq!(c1.input_c, c2.input_c);
        // The masks differ only if the functions differ; these are equal too.
        assert_eq!(c1.lut_mask, c2.lut_mask);
    }

    #[test]
    fn degenerate_expression_warns_not_errors() {
        // x & !x collapses to constant false: port A is selected but unused.
        let x = signal(LutInA::In0);
        let s = sink();
        let cfg = auto_ble(x & !Expr::from(x), None, &s).unwrap();
        assert_eq!(cfg.lut_mask, Some(LutMask::new(0)));
        assert!(s.has_warnings());
    }

    #[test]
    fn active_inputs_match_resolved_ports() {
        let expr = signal(LutInA::ClbBle5) ^ signal(LutInC::In8) | signal(LutInB::ClbBle8);
        let cfg = auto_ble(expr, None, &sink()).unwrap();
        let active = cfg.lut_mask.unwrap().active_inputs();
        assert_eq!(active, cfg.selected_ports());
    }
}
