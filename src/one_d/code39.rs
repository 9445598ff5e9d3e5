//! Code 39 (3 of 9).
//!
//! Алфавит из 43 знаков, на знак — 9 элементов (3 широких) + межзнаковый
//! пробел. Данные обрамляются `*`. Необязательная контрольная цифра mod 43.
//!
//! На этот кодировщик опираются Code 39 Extended, LOGMARS, Code 32 и PZN.

use tracing::{debug, trace};

use crate::api::SymbologyEncoder;
use crate::core::checksum::mod43;
use crate::core::error::{EncodeError, Result};
use crate::core::grammar::{ensure_all, ensure_max_len, indices_in};
use crate::core::pattern::assemble;
use crate::core::types::{EncodeInfo, SymbolResult, Symbology};
use crate::one_d::EncodeOptions;

pub(crate) const CODE39_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

const CODE39_TABLE: [&str; 43] = [
    "1112212111", "2112111121", "1122111121", "2122111111", "1112211121", "2112211111",
    "1122211111", "1112112121", "2112112111", "1122112111", "2111121121", "1121121121",
    "2121121111", "1111221121", "2111221111", "1121221111", "1111122121", "2111122111",
    "1121122111", "1111222111", "2111111221", "1121111221", "2121111211", "1111211221",
    "2111211211", "1121211211", "1111112221", "2111112211", "1121112211", "1111212211",
    "2211111121", "1221111121", "2221111111", "1211211121", "2211211111", "1221211111",
    "1211112121", "2211112111", "1221112111", "1212121111", "1212111211", "1211121211",
    "1112121211",
];

/// `*` с межзнаковым пробелом.
const CODE39_START: &str = "1211212111";
/// `*` без хвостового пробела.
const CODE39_STOP: &str = "121121211";

pub(crate) const MAX_LEN: usize = 85;

#[inline]
pub(crate) fn is_code39_char(c: char) -> bool {
    CODE39_ALPHABET.contains(c)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Code39;

impl SymbologyEncoder for Code39 {
    fn symbology(&self) -> Symbology {
        Symbology::Code39
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
        let mut info = EncodeInfo::new();

        let mut indices = indices_in(CODE39_ALPHABET, &data)?;
        let mut readable = data.clone();
        if opts.check_digit {
            let check = mod43(&indices);
            let check_char = CODE39_ALPHABET
                .chars()
                .nth(check)
                .ok_or_else(|| EncodeError::Internal(format!("mod 43 residue {check}")))?;
            debug!(%check_char, "code 39 check digit");
            info.push("Code 39 Check Digit", check_char);
            indices.push(check);
            readable.push(check_char);
        }

        let body = assemble(&CODE39_TABLE, &indices)?;
        let mut row = String::with_capacity(body.len() + CODE39_START.len() + CODE39_STOP.len());
        row.push_str(CODE39_START);
        row.push_str(&body);
        row.push_str(CODE39_STOP);
        trace!(symbols = indices.len(), width = row.len(), "code 39 assembled");

        Ok(SymbolResult::single_row(
            Symbology::Code39,
            data,
            format!("*{readable}*"),
            row,
        )
        .with_info(info)
        .with_readable_location(opts.readable_location))
    }
}
