//! The typed configuration record for one fully configured fabric.
//!
//! [`ClbConfig`] is plain data with value semantics: mutation happens while a
//! configuration is being built (by hand, by the Boolean front end, or by a
//! decoder) and the record is treated as frozen once it has been saved.
//! Decoding from the packed store always produces a fully populated record;
//! fields a FASM file never mentioned stay `None`.

use crate::ble::BleId;
use crate::lut_mask::LutMask;
use crate::routing::{Clbin, ClkDiv, InputSync, Oesel};
use crate::selectors::{CntMux, IrqSel, PpsPinSel, IRQ_OUT_COUNT, PPS_OUT_COUNT};
use crate::signals::{Flopsel, LutInA, LutInB, LutInC, LutInD, PortLetter};
use clb_diagnostics::{code, Diagnostic, DiagnosticSink};
use serde::{Deserialize, Serialize};

/// Number of input routing muxes.
pub const MUX_COUNT: usize = 16;

/// Configuration of one basic logic element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BleCfg {
    /// The LUT truth table, absent until configured.
    pub lut_mask: Option<LutMask>,
    /// Whether the element's output is registered.
    pub flopsel: Option<Flopsel>,
    /// Source selected at input port A.
    pub input_a: Option<LutInA>,
    /// Source selected at input port B.
    pub input_b: Option<LutInB>,
    /// Source selected at input port C.
    pub input_c: Option<LutInC>,
    /// Source selected at input port D.
    pub input_d: Option<LutInD>,
}

impl BleCfg {
    /// Returns which ports have a source selected.
    pub fn selected_ports(&self) -> [bool; 4] {
        [
            self.input_a.is_some(),
            self.input_b.is_some(),
            self.input_c.is_some(),
            self.input_d.is_some(),
        ]
    }

    /// Returns the display name of the source on `port`, if one is selected.
    pub fn input_name(&self, port: PortLetter) -> Option<&'static str> {
        match port {
            PortLetter::A => self.input_a.map(LutInA::name),
            PortLetter::B => self.input_b.map(LutInB::name),
            PortLetter::C => self.input_c.map(LutInC::name),
            PortLetter::D => self.input_d.map(LutInD::name),
        }
    }

    /// Checks that the LUT mask and the port selections agree.
    ///
    /// A mask whose active inputs lack a source, a selected source the mask
    /// never reads, and port selections without any mask are all reported as
    /// warnings through `sink` — the hardware accepts such configurations,
    /// so none of them is fatal. `context` names the element in the emitted
    /// diagnostics.
    pub fn check(&self, context: &str, sink: &DiagnosticSink) {
        let selected = self.selected_ports();

        let Some(mask) = self.lut_mask else {
            if selected.iter().any(|&s| s) {
                let names: Vec<String> = PortLetter::ALL
                    .into_iter()
                    .filter_map(|p| self.input_name(p).map(|n| format!("LUT_I_{p}={n}")))
                    .collect();
                sink.emit(
                    Diagnostic::warning(
                        code::MISCONFIG_NO_MASK,
                        format!("element has no LUT mask but selects {}", names.join(", ")),
                    )
                    .with_context(context),
                );
            }
            return;
        };

        let active = mask.active_inputs();
        for port in PortLetter::ALL {
            let i = port.index();
            if active[i] && !selected[i] {
                sink.emit(
                    Diagnostic::warning(
                        code::MISCONFIG_MISSING_INPUT,
                        format!("LUT_I_{port} is used by the LUT mask but has no source"),
                    )
                    .with_context(context),
                );
            }
            if !active[i] && selected[i] {
                sink.emit(
                    Diagnostic::warning(
                        code::MISCONFIG_UNUSED_INPUT,
                        format!(
                            "LUT_I_{port} is not used by the LUT mask but was {}",
                            self.input_name(port).unwrap_or("set")
                        ),
                    )
                    .with_context(context),
                );
            }
        }
    }
}

/// Configuration of one input routing mux.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuxCfg {
    /// The selected CLBIN source.
    pub clbin: Option<Clbin>,
    /// The input synchronizer mode.
    pub insync: Option<InputSync>,
}

/// Configuration of the counter block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterCfg {
    /// The logic element that stops the counter.
    pub stop: Option<BleId>,
    /// The logic element that resets the counter.
    pub reset: Option<BleId>,
    /// Comparator thresholds feeding the per-port taps, A1..D2.
    pub count_is: [Option<CntMux>; 8],
}

impl CounterCfg {
    /// The hardware spellings of the eight comparator fields, in the order
    /// of [`count_is`](Self::count_is).
    pub const COUNT_IS_NAMES: [&'static str; 8] = [
        "COUNT_IS_A1",
        "COUNT_IS_A2",
        "COUNT_IS_B1",
        "COUNT_IS_B2",
        "COUNT_IS_C1",
        "COUNT_IS_C2",
        "COUNT_IS_D1",
        "COUNT_IS_D2",
    ];

    /// Returns the index of a comparator field from its hardware spelling.
    pub fn count_is_index(name: &str) -> Option<usize> {
        Self::COUNT_IS_NAMES.iter().position(|&n| n == name)
    }
}

/// Peripheral inputs recorded verbatim from FASM.
///
/// These attributions are not represented in the packed configuration store;
/// they survive only in the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeripheralInputs {
    /// Timer 0 clock input attribution.
    pub tmr0_in: Option<String>,
    /// Timer 1 clock input attribution.
    pub tmr1_in: Option<String>,
    /// Timer 1 gate attribution.
    pub tmr1_gate: Option<String>,
    /// Timer 2 clock input attribution.
    pub tmr2_in: Option<String>,
    /// Timer 2 reset attribution.
    pub tmr2_rst: Option<String>,
    /// Capture/compare 1 input attribution.
    pub ccp1_in: Option<String>,
    /// Capture/compare 2 input attribution.
    pub ccp2_in: Option<String>,
    /// ADC trigger input attribution.
    pub adc_in: Option<String>,
}

/// One fully configured CLB fabric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClbConfig {
    /// The 32 logic elements, indexed by [`BleId`].
    pub bles: [BleCfg; 32],
    /// The 16 input routing muxes.
    pub muxes: [MuxCfg; MUX_COUNT],
    /// The eight output-pin selectors.
    pub pps_out: [Option<PpsPinSel>; PPS_OUT_COUNT],
    /// The four interrupt-source selectors.
    pub irq_out: [Option<IrqSel>; IRQ_OUT_COUNT],
    /// The counter block.
    pub counter: CounterCfg,
    /// The fabric clock divider.
    pub clkdiv: ClkDiv,
    /// The eight output-enable selectors (FASM-only).
    pub oe: [Option<Oesel>; 8],
    /// Peripheral input attributions (FASM-only).
    pub peripherals: PeripheralInputs,
}

impl ClbConfig {
    /// Creates an empty record: nothing selected, clock undivided.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configuration of one logic element.
    pub fn ble(&self, id: BleId) -> &BleCfg {
        &self.bles[id.index()]
    }

    /// Returns the mutable configuration of one logic element.
    pub fn ble_mut(&mut self, id: BleId) -> &mut BleCfg {
        &mut self.bles[id.index()]
    }

    /// Runs the mask/port consistency check over every logic element.
    pub fn check(&self, sink: &DiagnosticSink) {
        for id in BleId::all() {
            self.ble(id).check(&id.fasm_name(), sink);
        }
    }
}
