//! Precondition checks for intrinsic operands.
//!
//! The intrinsics themselves assume a valid `vl`. These helpers let callers
//! that take `vl` and operands from outside reject bad input up front.
//! All functions return `Result<(), String>`; callers map the message into
//! their own error type.

use crate::types::{MaskLayout, VLMAX_E32M1};

/// `vl` must fit both the register and the backing slice.
#[inline]
pub fn validate_vl(vl: usize, backing_len: usize) -> Result<(), String> {
    if vl > VLMAX_E32M1 {
        return Err(format!("vl {} exceeds VLMAX {}", vl, VLMAX_E32M1));
    }
    if vl > backing_len {
        return Err(format!(
            "vl {} exceeds backing length {}",
            vl, backing_len
        ));
    }
    Ok(())
}

/// `vl` must fit every operand slice.
#[inline]
pub fn validate_operands(vl: usize, lens: &[usize]) -> Result<(), String> {
    for &len in lens {
        validate_vl(vl, len)?;
    }
    Ok(())
}

/// Mask source must hold `vl` lanes in the given layout.
#[inline]
pub fn validate_mask_len(mask_len: usize, vl: usize, layout: MaskLayout) -> Result<(), String> {
    let need = layout.bytes_for(vl);
    if mask_len < need {
        return Err(format!(
            "mask holds {} bytes, {:?} needs {} for vl {}",
            mask_len, layout, need, vl
        ));
    }
    Ok(())
}
