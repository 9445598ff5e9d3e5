//! Code 32 (Italian Pharmacode, «Codice Farmaceutico»).
//!
//! 8 цифр + контрольная (удвоение нечётных позиций, mod 10) — девятизначное
//! число переводится в шесть знаков системы по основанию 32 и печатается Code 39.

use tracing::debug;

use crate::api::SymbologyEncoder;
use crate::core::checksum::doubling_mod10;
use crate::core::error::{EncodeError, Result};
use crate::core::grammar::fixed_width_digits;
use crate::core::types::{EncodeInfo, SymbolResult, Symbology};
use crate::one_d::code39::Code39;
use crate::one_d::{DataType, EncodeOptions};

/// Алфавит без гласных.
const BASE32_ALPHABET: &[u8; 32] = b"0123456789BCDFGHJKLMNPQRSTUVWXYZ";

const WIDTH: usize = 8;

/// Девятизначное число -> шесть знаков по основанию 32, старший первым.
fn to_base32(mut value: u32) -> String {
    let mut out = [b'0'; 6];
    for slot in out.iter_mut().rev() {
        let idx = usize::try_from(value % 32).unwrap_or_default();
        *slot = BASE32_ALPHABET[idx];
        value /= 32;
    }
    out.iter().map(|&b| char::from(b)).collect()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Code32;

impl SymbologyEncoder for Code32 {
    fn symbology(&self) -> Symbology {
        Symbology::Code32
    }

    fn validate(&self, content: &str, _opts: &EncodeOptions) -> Result<String> {
        fixed_width_digits(content, WIDTH)
    }

    fn encode(&self, content: &str, opts: &EncodeOptions) -> Result<SymbolResult> {
        let data = self.validate(content, opts)?;
        let check = doubling_mod10(&data);
        let full = format!("{data}{check}");
        let value: u32 = full
            .parse()
            .map_err(|e| EncodeError::Internal(format!("code 32 value {full:?}: {e}")))?;
        let payload = to_base32(value);
        debug!(check, %payload, "code 32: delegating");

        let info = EncodeInfo::new()
            .with("Check Digit", check)
            .with("Encoded Data", &payload);
        let child = Code39
            .encode(&payload, &opts.child(false, DataType::Generic))
            .map_err(|e| EncodeError::delegated(Symbology::Code39, e))?;

        Ok(SymbolResult::adopt(
            Symbology::Code32,
            payload,
            format!("A{full}"),
            info,
            child,
        ))
    }
}
