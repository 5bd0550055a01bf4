//! The line-family parsers behind [`parse_str`].

use crate::Strictness;
use clb_diagnostics::{code, Diagnostic, DiagnosticSink};
use clb_model::{
    BleId, ClbConfig, ClbError, ClbResult, Clbin, ClkDiv, CntMux, CounterCfg, Flopsel, InputSync,
    IrqSel, LutInA, LutInB, LutInC, LutInD, Oesel, PpsPinSel,
};

/// Parses FASM text into a configuration record.
///
/// Recognized line families are dispatched on the prefix of the first dotted
/// segment; everything else is handled per `strictness`. Fields a file never
/// mentions stay unset in the returned record.
pub fn parse_str(
    text: &str,
    sink: &DiagnosticSink,
    strictness: Strictness,
) -> ClbResult<ClbConfig> {
    let mut cfg = ClbConfig::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("BLE_X") {
            parse_ble(line, &mut cfg)?;
        } else if line.starts_with("PPS_X") {
            parse_pps(line, &mut cfg)?;
        } else if line.starts_with("PPS_OE") {
            parse_oe(line, &mut cfg)?;
        } else if line.starts_with("MUX") {
            parse_mux(line, &mut cfg)?;
        } else if line.starts_with("CLKDIV") {
            parse_clkdiv(line, &mut cfg)?;
        } else if line.starts_with("CNT_X0Y3") {
            parse_cnt(line, &mut cfg)?;
        } else if line.starts_with("CLB_IRQ") {
            parse_irq(line, &mut cfg)?;
        } else if line.starts_with("MODULE_CLB_") {
            parse_module(line, &mut cfg)?;
        } else if strictness == Strictness::Strict {
            return Err(ClbError::parse(line));
        } else {
            sink.emit(
                Diagnostic::warning(code::UNHANDLED_FASM_LINE, "unhandled line")
                    .with_context(line),
            );
        }
    }

    Ok(cfg)
}

/// Extracts the value of a binary literal such as `16'b0110100110010110`,
/// tolerating anything (`3'b`, a bare `b`) before the digits.
fn binary_literal(token: &str, line: &str) -> Result<u16, ClbError> {
    let (_, digits) = token.split_once('b').ok_or_else(|| ClbError::parse(line))?;
    u16::from_str_radix(digits.trim(), 2).map_err(|_| ClbError::parse(line))
}

/// Resolves an `LI` source segment: either a routed `LO_<y>_<x>` peer
/// reference or a raw signal name.
fn source_name(segment: &str, line: &str) -> Result<String, ClbError> {
    if segment.starts_with("LO_") {
        let ble = BleId::from_lo(segment).map_err(|_| ClbError::parse(line))?;
        Ok(ble.signal_name())
    } else {
        Ok(segment.to_string())
    }
}

fn parse_ble(line: &str, cfg: &mut ClbConfig) -> ClbResult<()> {
    let parts: Vec<&str> = line.split('.').map(str::trim).collect();
    if parts.len() < 3 {
        return Err(ClbError::parse(line));
    }
    let ble = BleId::from_fasm(parts[0]).map_err(|_| ClbError::parse(line))?;

    if parts[1] == "BLE0" {
        match parts[2] {
            // e.g. BLE_X1Y2.BLE0.FLOPSEL.DISABLE
            "FLOPSEL" => {
                let word = parts.get(3).ok_or_else(|| ClbError::parse(line))?;
                let flopsel = Flopsel::from_name(word).ok_or_else(|| ClbError::parse(line))?;
                cfg.ble_mut(ble).flopsel = Some(flopsel);
                return Ok(());
            }
            // e.g. BLE_X1Y2.BLE0.LUT.INIT[15:0] = 16'b1110101111110100
            "LUT" => {
                let value = line.split_once('=').ok_or_else(|| ClbError::parse(line))?.1;
                let digits = value
                    .split_once('b')
                    .ok_or_else(|| ClbError::parse(line))?
                    .1
                    .trim();
                let mask = digits.parse().map_err(|_| ClbError::parse(line))?;
                cfg.ble_mut(ble).lut_mask = Some(mask);
                return Ok(());
            }
            _ => return Err(ClbError::parse(line)),
        }
    }

    // e.g. BLE_X1Y2.BLE0_LI2.IN8 or BLE_X1Y2.BLE0_LI0.LO_0_1
    if let Some(port) = parts[1].strip_prefix("BLE0_LI") {
        let name = source_name(parts[2], line)?;
        let slot = cfg.ble_mut(ble);
        match port {
            "0" => {
                slot.input_a =
                    Some(LutInA::from_name(&name).ok_or_else(|| ClbError::parse(line))?);
            }
            "1" => {
                slot.input_b =
                    Some(LutInB::from_name(&name).ok_or_else(|| ClbError::parse(line))?);
            }
            "2" => {
                slot.input_c =
                    Some(LutInC::from_name(&name).ok_or_else(|| ClbError::parse(line))?);
            }
            "3" => {
                slot.input_d =
                    Some(LutInD::from_name(&name).ok_or_else(|| ClbError::parse(line))?);
            }
            _ => return Err(ClbError::parse(line)),
        }
        return Ok(());
    }

    Err(ClbError::parse(line))
}

fn parse_pps(line: &str, cfg: &mut ClbConfig) -> ClbResult<()> {
    // e.g. PPS_X5Y4.OPAD0_O.LO_2_1
    let parts: Vec<&str> = line.split('.').map(str::trim).collect();
    let [name, opad, lo] = parts[..] else {
        return Err(ClbError::parse(line));
    };
    if opad != "OPAD0_O" {
        return Err(ClbError::parse(line));
    }

    let y: usize = name
        .strip_prefix("PPS_X5Y")
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ClbError::parse(line))?;
    let pin = y.checked_sub(2).filter(|&p| p < 8).ok_or_else(|| ClbError::parse(line))?;

    let ble = BleId::from_lo(lo).map_err(|_| ClbError::parse(line))?;
    cfg.pps_out[pin] = Some(PpsPinSel::from_ble(pin, ble)?);
    Ok(())
}

fn parse_irq(line: &str, cfg: &mut ClbConfig) -> ClbResult<()> {
    // e.g. CLB_IRQ1.OPAD0_O.LO_3_2
    let parts: Vec<&str> = line.split('.').map(str::trim).collect();
    let [name, opad, lo] = parts[..] else {
        return Err(ClbError::parse(line));
    };
    if opad != "OPAD0_O" {
        return Err(ClbError::parse(line));
    }

    let irq: usize = name
        .strip_prefix("CLB_IRQ")
        .and_then(|s| s.parse().ok())
        .filter(|&n| n < 4)
        .ok_or_else(|| ClbError::parse(line))?;

    let ble = BleId::from_lo(lo).map_err(|_| ClbError::parse(line))?;
    cfg.irq_out[irq] = Some(IrqSel::from_ble(irq, ble)?);
    Ok(())
}

fn parse_oe(line: &str, cfg: &mut ClbConfig) -> ClbResult<()> {
    // e.g. PPS_OE0.OPAD0_O.OE_TRIS0
    let parts: Vec<&str> = line.split('.').map(str::trim).collect();
    let [name, opad, source] = parts[..] else {
        return Err(ClbError::parse(line));
    };
    if opad != "OPAD0_O" {
        return Err(ClbError::parse(line));
    }

    let oe: usize = name
        .strip_prefix("PPS_OE")
        .and_then(|s| s.parse().ok())
        .filter(|&n| n < 8)
        .ok_or_else(|| ClbError::parse(line))?;

    let source = source.strip_prefix("OE_").unwrap_or(source);
    let sel = Oesel::from_name(source).ok_or_else(|| ClbError::parse(line))?;
    cfg.oe[oe] = Some(sel);
    Ok(())
}

fn parse_mux(line: &str, cfg: &mut ClbConfig) -> ClbResult<()> {
    // e.g. MUX3.CLBIN = 6'b000100 or MUX3.INSYNC = 3'b100
    let (lhs, rhs) = line.split_once('=').ok_or_else(|| ClbError::parse(line))?;
    let (mux_name, reg) = lhs.trim().split_once('.').ok_or_else(|| ClbError::parse(line))?;
    let index: usize = mux_name
        .strip_prefix("MUX")
        .and_then(|s| s.parse().ok())
        .filter(|&n| n < 16)
        .ok_or_else(|| ClbError::parse(line))?;

    let value = binary_literal(rhs, line)?;
    if reg.starts_with("CLBIN") {
        let clbin = Clbin::from_code(value as u8).ok_or(ClbError::UnknownEncoding {
            field: format!("MUX{index}.CLBIN"),
            value,
        })?;
        cfg.muxes[index].clbin = Some(clbin);
    } else if reg.starts_with("INSYNC") {
        let insync = InputSync::from_bits(value as u8).ok_or_else(|| ClbError::parse(line))?;
        cfg.muxes[index].insync = Some(insync);
    } else {
        return Err(ClbError::parse(line));
    }
    Ok(())
}

fn parse_clkdiv(line: &str, cfg: &mut ClbConfig) -> ClbResult<()> {
    // e.g. CLKDIV = 3'b000
    let (_, rhs) = line.split_once('=').ok_or_else(|| ClbError::parse(line))?;
    let value = binary_literal(rhs, line)?;
    cfg.clkdiv = ClkDiv::from_code(value as u8).ok_or(ClbError::UnknownEncoding {
        field: "CLKDIV".to_string(),
        value,
    })?;
    Ok(())
}

fn parse_cnt(line: &str, cfg: &mut ClbConfig) -> ClbResult<()> {
    // e.g. CNT_X0Y3.CNT0_STOP.LO_0_3 or CNT_X0Y3.COUNT_IS_A1.CNT0_COUNT_IS_4
    let parts: Vec<&str> = line.split('.').map(str::trim).collect();
    let [_, field, value] = parts[..] else {
        return Err(ClbError::parse(line));
    };

    match field {
        "CNT0_STOP" => {
            cfg.counter.stop = Some(BleId::from_lo(value).map_err(|_| ClbError::parse(line))?);
        }
        "CNT0_RESET" => {
            cfg.counter.reset = Some(BleId::from_lo(value).map_err(|_| ClbError::parse(line))?);
        }
        _ => {
            let index =
                CounterCfg::count_is_index(field).ok_or_else(|| ClbError::parse(line))?;
            let mux = CntMux::from_name(value).ok_or_else(|| ClbError::parse(line))?;
            cfg.counter.count_is[index] = Some(mux);
        }
    }
    Ok(())
}

fn parse_module(line: &str, cfg: &mut ClbConfig) -> ClbResult<()> {
    // e.g. MODULE_CLB_TMR0_IN.OPAD0_O.LO_0_0; the attribution is kept verbatim.
    let parts: Vec<&str> = line.split('.').map(str::trim).collect();
    let [module, _opad, value] = parts[..] else {
        return Err(ClbError::parse(line));
    };

    let slot = match module {
        "MODULE_CLB_TMR0_IN" => &mut cfg.peripherals.tmr0_in,
        "MODULE_CLB_TMR1_IN" => &mut cfg.peripherals.tmr1_in,
        "MODULE_CLB_TMR1_GATE" => &mut cfg.peripherals.tmr1_gate,
        "MODULE_CLB_TMR2_IN" => &mut cfg.peripherals.tmr2_in,
        "MODULE_CLB_TMR2_RST" => &mut cfg.peripherals.tmr2_rst,
        "MODULE_CLB_CCP1_IN" => &mut cfg.peripherals.ccp1_in,
        "MODULE_CLB_CCP2_IN" => &mut cfg.peripherals.ccp2_in,
        "MODULE_CLB_ADC_IN" => &mut cfg.peripherals.adc_in,
        _ => return Err(ClbError::parse(line)),
    };
    *slot = Some(value.to_string());
    Ok(())
}
