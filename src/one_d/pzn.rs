//! PZN (Pharmazentralnummer, PZN8).
//!
//! Семь цифр, контрольная — позиционные веса 1..7 по модулю 11. Остаток 10
//! означает, что такого номера не существует. Печатается Code 39 как
//! `-` + 7 цифр + контрольная.

use tracing::debug;

use crate::api::SymbologyEncoder;
use crate::core::checksum::positional_weight_mod11;
use crate::core::error::{EncodeError, Result};
use crate::core::grammar::fixed_width_digits;
use crate::core::types::{EncodeInfo, SymbolResult, Symbology};
use crate::one_d::code39::Code39;
use crate::one_d::{DataType, EncodeOptions};

const WIDTH: usize = 7;

#[derive(Clone, Copy, Debug, Default)]
pub struct Pzn;

impl SymbologyEncoder for Pzn {
    fn symbology(&self) -> Symbology {
        Symbology::Pzn
    }

    fn validate(&self, content: &str, _opts: &EncodeOptions) -> Result<String> {
        fixed_width_digits(content, WIDTH)
    }

    fn encode(&self, content: &str, opts: &EncodeOptions) -> Result<SymbolResult> {
        let data = self.validate(content, opts)?;
        // Префикс `-` в весах не участвует.
        let check = positional_weight_mod11(&data).ok_or(EncodeError::InvalidCheckDigit("PZN"))?;
        debug!(check, "pzn check digit");

        let payload = format!("-{data}{check}");
        let info = EncodeInfo::new().with("Check Digit", check);
        let child = Code39
            .encode(&payload, &opts.child(false, DataType::Generic))
            .map_err(|e| EncodeError::delegated(Symbology::Code39, e))?;

        Ok(SymbolResult::adopt(
            Symbology::Pzn,
            payload.clone(),
            format!("*PZN{payload}*"),
            info,
            child,
        ))
    }
}
