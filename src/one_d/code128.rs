//! Code 128: кодировщик с автоматическим выбором наборов A/B/C.
//!
//! Поддержка:
//! - Наборы A/B/C, переключения CODE A/B/C, SHIFT.
//! - Режим GS1 (`[AI]data`): ведущий FNC1 и разделители FNC1.
//! - Контрольная сумма mod 103 — всегда.
//!
//! Правила выбора набора (детерминированные, по мотивам ISO/IEC 15417, прил. E):
//! старт в C, если данные начинаются с 4+ цифр или состоят ровно из 2 цифр;
//! иначе A, если управляющий символ встречается раньше строчного, иначе B.
//! В A/B серия из 4+ цифр уводит в C (нечётная — одна цифра остаётся в A/B).
//! Одиночный символ «чужого» набора кодируется через SHIFT.

use tracing::{debug, trace};

use crate::api::SymbologyEncoder;
use crate::core::checksum::mod103;
use crate::core::error::{EncodeError, Result};
use crate::core::grammar::ensure_ascii;
use crate::core::pattern::assemble;
use crate::core::types::{EncodeInfo, SymbolResult, Symbology};
use crate::one_d::{gs1, DataType, EncodeOptions};

/// Паттерны 0..=105: по 6 чисел (bars/spaces), сумма 11.
const CODE128_PATTERNS_STR: [&str; 106] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212",
    "221213", "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221",
    "223211", "221132", "221231", "213212", "223112", "312131", "311222", "321122", "321221",
    "312212", "322112", "322211", "212123", "212321", "232121", "111323", "131123", "131321",
    "112313", "132113", "132311", "211313", "231113", "231311", "112133", "112331", "132131",
    "113123", "113321", "133121", "313121", "211331", "231131", "213113", "213311", "213131",
    "311123", "311321", "331121", "312113", "312311", "332111", "314111", "221411", "431111",
    "111224", "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114",
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", "111242",
    "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311",
    "113141", "114131", "311141", "411131", "211412", "211214", "211232",
];

/// STOP-паттерн (7 чисел, сумма 13).
const CODE128_STOP: &str = "2331112";

const SHIFT: u8 = 98;
const CODE_C: u8 = 99;
const CODE_B: u8 = 100;
const CODE_A: u8 = 101;
const FNC1: u8 = 102;

/// Максимум символов данных (без старта, контрольной и стопа).
const MAX_SYMBOLS: usize = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CodeSet {
    A,
    B,
    C,
}

impl CodeSet {
    #[inline]
    fn start(self) -> u8 {
        match self {
            CodeSet::A => 103,
            CodeSet::B => 104,
            CodeSet::C => 105,
        }
    }

    /// Код переключения в этот набор.
    #[inline]
    fn latch(self) -> u8 {
        match self {
            CodeSet::A => CODE_A,
            CodeSet::B => CODE_B,
            CodeSet::C => CODE_C,
        }
    }

    #[inline]
    fn contains(self, c: u8) -> bool {
        match self {
            CodeSet::A => c < 96,
            CodeSet::B => (32..128).contains(&c),
            CodeSet::C => false,
        }
    }

    /// Значение символа в наборе A или B.
    #[inline]
    fn value(self, c: u8) -> u8 {
        match self {
            CodeSet::A if c < 32 => c + 64,
            _ => c - 32,
        }
    }
}

/// Входной поток: ASCII-символы и FNC1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Char(u8),
    Fnc1,
}

#[inline]
fn is_digit(t: Option<&Token>) -> bool {
    matches!(t, Some(Token::Char(c)) if c.is_ascii_digit())
}

fn digit_run(tokens: &[Token], from: usize) -> usize {
    tokens[from.min(tokens.len())..]
        .iter()
        .take_while(|t| is_digit(Some(*t)))
        .count()
}

/// A предпочтительнее B, если управляющий символ идёт раньше строчного.
fn prefers_a(tokens: &[Token], from: usize) -> bool {
    for t in &tokens[from.min(tokens.len())..] {
        if let Token::Char(c) = *t {
            if c < 32 {
                return true;
            }
            if c >= 96 {
                return false;
            }
        }
    }
    false
}

#[inline]
fn a_or_b(tokens: &[Token], from: usize) -> CodeSet {
    if prefers_a(tokens, from) {
        CodeSet::A
    } else {
        CodeSet::B
    }
}

/// Выбрать стартовый набор и получить значения символов данных.
fn encode_values(tokens: &[Token]) -> (CodeSet, Vec<u8>) {
    let lead = tokens.iter().take_while(|t| **t == Token::Fnc1).count();
    let run0 = digit_run(tokens, lead);
    let start = if run0 >= 4 || (run0 == 2 && lead + 2 == tokens.len()) {
        CodeSet::C
    } else {
        a_or_b(tokens, 0)
    };

    let mut set = start;
    let mut values = Vec::with_capacity(tokens.len());
    let mut i = 0usize;
    while i < tokens.len() {
        let c = match tokens[i] {
            Token::Fnc1 => {
                values.push(FNC1);
                i += 1;
                continue;
            }
            Token::Char(c) => c,
        };

        if set == CodeSet::C {
            if let (Some(Token::Char(hi)), Some(Token::Char(lo))) =
                (tokens.get(i), tokens.get(i + 1))
            {
                if hi.is_ascii_digit() && lo.is_ascii_digit() {
                    values.push((hi - b'0') * 10 + (lo - b'0'));
                    i += 2;
                    continue;
                }
            }
            set = a_or_b(tokens, i);
            values.push(set.latch());
            continue;
        }

        let run = digit_run(tokens, i);
        if run >= 4 {
            if run % 2 == 1 {
                values.push(set.value(c));
                i += 1;
            } else {
                set = CodeSet::C;
                values.push(CODE_C);
            }
            continue;
        }

        if set.contains(c) {
            values.push(set.value(c));
            i += 1;
            continue;
        }

        let other = if set == CodeSet::A { CodeSet::B } else { CodeSet::A };
        let next_fits = matches!(tokens.get(i + 1), Some(Token::Char(n)) if set.contains(*n));
        if next_fits {
            values.push(SHIFT);
            values.push(other.value(c));
            i += 1;
        } else {
            set = other;
            values.push(set.latch());
        }
    }
    (start, values)
}

/// Разобрать данные в поток токенов и текст под символом.
fn tokenize(content: &str, data_type: DataType) -> Result<(Vec<Token>, String)> {
    match data_type {
        DataType::Generic => {
            if content.is_empty() {
                return Err(EncodeError::TooShort { min: 1 });
            }
            ensure_ascii(content)?;
            let tokens = content.bytes().map(Token::Char).collect();
            let readable = content
                .chars()
                .map(|c| if c.is_ascii_control() { ' ' } else { c })
                .collect();
            Ok((tokens, readable))
        }
        DataType::Gs1 => {
            let elements = gs1::parse(content)?;
            let mut tokens = vec![Token::Fnc1];
            for (k, el) in elements.iter().enumerate() {
                tokens.extend(el.ai.bytes().map(Token::Char));
                tokens.extend(el.data.bytes().map(Token::Char));
                if el.needs_separator() && k + 1 < elements.len() {
                    tokens.push(Token::Fnc1);
                }
            }
            Ok((tokens, gs1::readable(&elements)))
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Code128;

impl SymbologyEncoder for Code128 {
    fn symbology(&self) -> Symbology {
        Symbology::Code128
    }

    fn validate(&self, content: &str, opts: &EncodeOptions) -> Result<String> {
        let (tokens, _) = tokenize(content, opts.data_type)?;
        let (_, values) = encode_values(&tokens);
        if values.len() > MAX_SYMBOLS {
            return Err(EncodeError::TooLong { max: MAX_SYMBOLS });
        }
        Ok(content.to_string())
    }

    fn encode(&self, content: &str, opts: &EncodeOptions) -> Result<SymbolResult> {
        let (tokens, readable) = tokenize(content, opts.data_type)?;
        let (start, values) = encode_values(&tokens);
        if values.len() > MAX_SYMBOLS {
            return Err(EncodeError::TooLong { max: MAX_SYMBOLS });
        }
        let check = mod103(start.start(), &values);
        debug!(?start, check, symbols = values.len(), "code 128 check digit");

        let mut all: Vec<usize> = Vec::with_capacity(values.len() + 2);
        all.push(usize::from(start.start()));
        all.extend(values.iter().map(|&v| usize::from(v)));
        all.push(usize::from(check));
        let mut row = assemble(&CODE128_PATTERNS_STR, &all)?;
        row.push_str(CODE128_STOP);
        trace!(width = row.len(), "code 128 assembled");

        let info = EncodeInfo::new()
            .with("Codewords", format_codewords(&all))
            .with("Code 128 Check Digit", check);
        Ok(
            SymbolResult::single_row(Symbology::Code128, content, readable, row)
                .with_info(info)
                .with_readable_location(opts.readable_location),
        )
    }
}

fn format_codewords(values: &[usize]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
