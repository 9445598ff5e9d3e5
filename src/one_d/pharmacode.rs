//! Pharmacode (Laetus, однодорожечный).
//!
//! Не табличный: число 3..=131070 раскладывается в «биективную двоичную»
//! запись, где чётный остаток — широкий бар, нечётный — узкий.
//! Текста под символом нет, контрольной цифры тоже.

use tracing::trace;

use crate::api::SymbologyEncoder;
use crate::core::error::{EncodeError, Result};
use crate::core::grammar::{ensure_digits, ensure_max_len};
use crate::core::types::{SymbolResult, Symbology};
use crate::one_d::EncodeOptions;

pub const MIN_VALUE: u32 = 3;
pub const MAX_VALUE: u32 = 131_070;

/// Широкий бар + узкий пробел.
const WIDE: &str = "32";
/// Узкий бар + узкий пробел.
const NARROW: &str = "12";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Bar {
    Wide,
    Narrow,
}

/// Бары от старшего к младшему.
fn bars(mut n: u32) -> Vec<Bar> {
    let mut out = Vec::with_capacity(17);
    while n != 0 {
        if n % 2 == 0 {
            out.push(Bar::Wide);
            n = (n - 2) / 2;
        } else {
            out.push(Bar::Narrow);
            n = (n - 1) / 2;
        }
    }
    out.reverse();
    out
}

/// Строка модулей для уже проверенного значения.
pub fn pattern_for(value: u32) -> String {
    bars(value)
        .into_iter()
        .map(|b| match b {
            Bar::Wide => WIDE,
            Bar::Narrow => NARROW,
        })
        .collect()
}

fn parse_value(content: &str) -> Result<u32> {
    ensure_max_len(content, 6)?;
    ensure_digits(content)?;
    let value: u32 = content
        .parse()
        .map_err(|e| EncodeError::Internal(format!("pharmacode value {content:?}: {e}")))?;
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(EncodeError::OutOfRange {
            min: MIN_VALUE,
            max: MAX_VALUE,
        });
    }
    Ok(value)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Pharmacode;

impl SymbologyEncoder for Pharmacode {
    fn symbology(&self) -> Symbology {
        Symbology::Pharmacode
    }

    fn validate(&self, content: &str, _opts: &EncodeOptions) -> Result<String> {
        parse_value(content).map(|v| v.to_string())
    }

    fn encode(&self, content: &str, opts: &EncodeOptions) -> Result<SymbolResult> {
        let value = parse_value(content)?;
        let row = pattern_for(value);
        trace!(value, bars = row.len() / 2, "pharmacode assembled");
        Ok(
            SymbolResult::single_row(Symbology::Pharmacode, value.to_string(), "", row)
                .with_readable_location(opts.readable_location),
        )
    }
}
