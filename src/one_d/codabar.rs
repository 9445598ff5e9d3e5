//! Codabar (NW-7).
//!
//! Формат: старт-знак `A`–`D`, хотя бы один знак из `0-9 - $ : / . +`,
//! стоп-знак `A`–`D`. На знак — 8 модулей: 7 элементов + межзнаковый пробел.
//! Необязательная контрольная цифра mod 16 вставляется перед стоп-знаком.

use tracing::debug;

use crate::api::SymbologyEncoder;
use crate::core::checksum::mod16;
use crate::core::error::{EncodeError, Result};
use crate::core::grammar::{ensure_all, ensure_max_len, ensure_min_len, indices_in};
use crate::core::pattern::assemble;
use crate::core::types::{EncodeInfo, SymbolResult, Symbology};
use crate::one_d::EncodeOptions;

/// Алфавит в порядке таблицы; индекс — значение для mod 16.
const CODABAR_ALPHABET: &str = "0123456789-$:/.+ABCD";

/// Ширины: 7 элементов + межзнаковый пробел.
const CODABAR_TABLE: [&str; 20] = [
    "11111221", "11112211", "11121121", "22111111", "11211211", "21111211", "12111121",
    "12112111", "12211111", "21121111", "11122111", "11221111", "21112121", "21211121",
    "21212111", "11212121", "11221211", "12121121", "11121221", "11122211",
];

const MAX_LEN: usize = 60;

#[inline]
fn is_start_stop(c: char) -> bool {
    matches!(c, 'A'..='D')
}

#[inline]
fn is_interior(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '$' | ':' | '/' | '.' | '+')
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Codabar;

impl SymbologyEncoder for Codabar {
    fn symbology(&self) -> Symbology {
        Symbology::Codabar
    }

    fn validate(&self, content: &str, _opts: &EncodeOptions) -> Result<String> {
        ensure_max_len(content, MAX_LEN)?;
        ensure_min_len(content, 3)?;

        // Регистр значим: `a`..`d` не старт/стоп-знаки.
        let mut chars = content.chars();
        let first = chars.next().ok_or(EncodeError::TooShort { min: 3 })?;
        let last = chars.next_back().ok_or(EncodeError::TooShort { min: 3 })?;
        if !is_start_stop(first) || !is_start_stop(last) {
            return Err(EncodeError::InvalidCharacters);
        }
        ensure_all(chars.as_str(), is_interior)?;
        Ok(content.to_string())
    }

    fn encode(&self, content: &str, opts: &EncodeOptions) -> Result<SymbolResult> {
        let data = self.validate(content, opts)?;
        let mut info = EncodeInfo::new();

        let mut indices = indices_in(CODABAR_ALPHABET, &data)?;
        let mut encoded = data.clone();
        if opts.check_digit {
            let check = mod16(&indices);
            let check_char = CODABAR_ALPHABET
                .chars()
                .nth(check)
                .ok_or_else(|| EncodeError::Internal(format!("mod 16 residue {check}")))?;
            debug!(%check_char, "codabar check digit");
            info.push("Check Digit", check_char);
            indices.insert(indices.len() - 1, check);
            encoded.insert(encoded.len() - 1, check_char);
        }

        let row = assemble(&CODABAR_TABLE, &indices)?;
        Ok(
            SymbolResult::single_row(Symbology::Codabar, encoded.clone(), encoded, row)
                .with_info(info)
                .with_readable_location(opts.readable_location),
        )
    }
}
