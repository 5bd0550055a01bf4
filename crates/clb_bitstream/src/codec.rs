//! Marshalling between the typed configuration record and the bit store.
//!
//! Every field is read LSB-first from the bit positions named by its map in
//! [`clb_model::bitmap`], assembled into an integer, and interpreted through
//! the matching enumeration; encoding formats the integer back into the same
//! positions. Decoding always produces a fully populated record — a field
//! nobody ever configured reads back as the zero code of its enumeration —
//! and encoding treats absent fields the same way, which is what makes the
//! two directions inverses of each other.

use crate::buffer::BitBuffer;
use clb_model::bitmap::{
    flopsel_bit, lut_input_bits, lut_mask_bits, CLKDIV_BITS, COUNT_MUX_BITS, COUNT_RESET_BITS,
    COUNT_STOP_BITS, IRQ_BITS, MUX_BITS, PPS_OUT_BITS,
};
use clb_model::{
    BleId, ClbConfig, ClbError, ClbResult, Clbin, ClkDiv, CntMux, Flopsel, InputSync, IrqSel,
    LutInA, LutInB, LutInC, LutInD, LutMask, PpsPinSel,
};

/// Reads a field's bits LSB-first and assembles the integer.
pub fn read_field(buffer: &BitBuffer, map: &[u16]) -> ClbResult<u16> {
    let mut value = 0u16;
    for (i, &pos) in map.iter().enumerate() {
        if buffer.get_bit(pos as usize)? {
            value |= 1 << i;
        }
    }
    Ok(value)
}

/// Formats an integer LSB-first into a field's bits.
///
/// # Errors
///
/// [`ClbError::ValueDoesNotFit`] when the value's binary representation
/// exceeds the number of bits the map reserves.
pub fn write_field(buffer: &mut BitBuffer, value: u16, map: &[u16]) -> ClbResult<()> {
    if map.len() < 16 && value >> map.len() != 0 {
        return Err(ClbError::ValueDoesNotFit {
            value,
            bits: map.len(),
        });
    }
    for (i, &pos) in map.iter().enumerate() {
        buffer.set_bit(pos as usize, value >> i & 1 == 1)?;
    }
    Ok(())
}

fn unknown(field: String, value: u16) -> ClbError {
    ClbError::UnknownEncoding { field, value }
}

/// Decodes the whole bit store into a configuration record.
///
/// # Errors
///
/// [`ClbError::UnknownEncoding`] when a field's raw value falls outside its
/// enumeration, naming the field and the value. The FASM-only parts of the
/// record (output enables, peripheral attributions) are left unset.
pub fn decode(buffer: &BitBuffer) -> ClbResult<ClbConfig> {
    let mut cfg = ClbConfig::new();

    for ble in BleId::all() {
        let slot = cfg.ble_mut(ble);
        slot.lut_mask = Some(LutMask::new(read_field(buffer, &lut_mask_bits(ble))?));
        slot.flopsel = Some(Flopsel::from(buffer.get_bit(flopsel_bit(ble) as usize)?));

        let inputs = lut_input_bits(ble);
        let name = ble.fasm_name();
        let a = read_field(buffer, &inputs[0])?;
        slot.input_a = Some(
            LutInA::from_code(a as u8).ok_or_else(|| unknown(format!("{name}.LUT_I_A"), a))?,
        );
        let b = read_field(buffer, &inputs[1])?;
        slot.input_b = Some(
            LutInB::from_code(b as u8).ok_or_else(|| unknown(format!("{name}.LUT_I_B"), b))?,
        );
        let c = read_field(buffer, &inputs[2])?;
        slot.input_c = Some(
            LutInC::from_code(c as u8).ok_or_else(|| unknown(format!("{name}.LUT_I_C"), c))?,
        );
        let d = read_field(buffer, &inputs[3])?;
        slot.input_d = Some(
            LutInD::from_code(d as u8).ok_or_else(|| unknown(format!("{name}.LUT_I_D"), d))?,
        );
    }

    for (i, map) in MUX_BITS.iter().enumerate() {
        let raw = read_field(buffer, &map.clbin)?;
        let clbin = Clbin::from_code(raw as u8)
            .ok_or_else(|| unknown(format!("MUX{i}.CLBIN"), raw))?;
        let insync = read_field(buffer, &map.insync)?;
        cfg.muxes[i].clbin = Some(clbin);
        cfg.muxes[i].insync = InputSync::from_bits(insync as u8);
    }

    for (pin, map) in PPS_OUT_BITS.iter().enumerate() {
        let raw = read_field(buffer, map)?;
        cfg.pps_out[pin] = PpsPinSel::from_code(raw as u8);
    }

    for (irq, map) in IRQ_BITS.iter().enumerate() {
        let raw = read_field(buffer, map)?;
        cfg.irq_out[irq] = IrqSel::from_code(raw as u8);
    }

    let clkdiv = read_field(buffer, &CLKDIV_BITS)?;
    cfg.clkdiv = ClkDiv::from_code(clkdiv as u8)
        .ok_or_else(|| unknown("CLKDIV".into(), clkdiv))?;

    cfg.counter.stop = BleId::new(read_field(buffer, &COUNT_STOP_BITS)? as u8);
    cfg.counter.reset = BleId::new(read_field(buffer, &COUNT_RESET_BITS)? as u8);
    for (i, map) in COUNT_MUX_BITS.iter().enumerate() {
        cfg.counter.count_is[i] = CntMux::from_code(read_field(buffer, map)? as u8);
    }

    Ok(cfg)
}

/// Encodes a configuration record into the bit store.
///
/// Absent fields encode as the zero code of their enumeration, exactly what
/// decoding an untouched store produces.
///
/// # Errors
///
/// [`ClbError::ValueDoesNotFit`] if a field value exceeds its bit allotment
/// (unreachable through the typed record, but checked for every write).
pub fn encode(cfg: &ClbConfig, buffer: &mut BitBuffer) -> ClbResult<()> {
    for ble in BleId::all() {
        let slot = cfg.ble(ble);
        let mask = slot.lut_mask.unwrap_or_default();
        write_field(buffer, mask.bits(), &lut_mask_bits(ble))?;
        let flopsel = slot.flopsel.unwrap_or_default();
        buffer.set_bit(flopsel_bit(ble) as usize, flopsel.is_enabled())?;

        let inputs = lut_input_bits(ble);
        write_field(
            buffer,
            slot.input_a.map_or(0, |s| s.code() as u16),
            &inputs[0],
        )?;
        write_field(
            buffer,
            slot.input_b.map_or(0, |s| s.code() as u16),
            &inputs[1],
        )?;
        write_field(
            buffer,
            slot.input_c.map_or(0, |s| s.code() as u16),
            &inputs[2],
        )?;
        write_field(
            buffer,
            slot.input_d.map_or(0, |s| s.code() as u16),
            &inputs[3],
        )?;
    }

    for (i, map) in MUX_BITS.iter().enumerate() {
        let clbin = cfg.muxes[i].clbin.map_or(0, |c| c.code() as u16);
        write_field(buffer, clbin, &map.clbin)?;
        let insync = cfg.muxes[i].insync.map_or(0, |s| s.bits() as u16);
        write_field(buffer, insync, &map.insync)?;
    }

    for (pin, map) in PPS_OUT_BITS.iter().enumerate() {
        let code = cfg.pps_out[pin].map_or(0, |s| s.code() as u16);
        write_field(buffer, code, map)?;
    }

    for (irq, map) in IRQ_BITS.iter().enumerate() {
        let code = cfg.irq_out[irq].map_or(0, |s| s.code() as u16);
        write_field(buffer, code, map)?;
    }

    write_field(buffer, cfg.clkdiv.code() as u16, &CLKDIV_BITS)?;

    let stop = cfg.counter.stop.map_or(0, |b| b.index() as u16);
    write_field(buffer, stop, &COUNT_STOP_BITS)?;
    let reset = cfg.counter.reset.map_or(0, |b| b.index() as u16);
    write_field(buffer, reset, &COUNT_RESET_BITS)?;
    for (i, map) in COUNT_MUX_BITS.iter().enumerate() {
        let code = cfg.counter.count_is[i].map_or(0, |c| c.code() as u16);
        write_field(buffer, code, map)?;
    }

    Ok(())
}
