//! LOGMARS (MIL-STD-1189): Code 39 с обязательной контрольной цифрой mod 43
//! и лимитом 59 знаков.

use crate::api::SymbologyEncoder;
use crate::core::error::{EncodeError, Result};
use crate::core::grammar::{ensure_all, ensure_max_len};
use crate::core::types::{EncodeInfo, SymbolResult, Symbology};
use crate::one_d::code39::{is_code39_char, Code39};
use crate::one_d::{DataType, EncodeOptions};

const MAX_LEN: usize = 59;

#[derive(Clone, Copy, Debug, Default)]
pub struct Logmars;

impl SymbologyEncoder for Logmars {
    fn symbology(&self) -> Symbology {
        Symbology::Logmars
    }

    fn validate(&self, content: &str, _opts: &EncodeOptions) -> Result<String> {
        ensure_max_len(content, MAX_LEN)?;
        if content.is_empty() {
            return Err(EncodeError::TooShort { min: 1 });
        }
        ensure_all(content, is_code39_char)?;
        Ok(content.to_string())
    }

    fn encode(&self, content: &str, opts: &EncodeOptions) -> Result<SymbolResult> {
        let data = self.validate(content, opts)?;
        let child = Code39
            .encode(&data, &opts.child(true, DataType::Generic))
            .map_err(|e| EncodeError::delegated(Symbology::Code39, e))?;
        let readable = child.readable.clone();
        Ok(SymbolResult::adopt(
            Symbology::Logmars,
            data,
            readable,
            EncodeInfo::new(),
            child,
        ))
    }
}
