//! Korea Post (почтовый индекс Кореи).
//!
//! Шесть цифр + контрольная (сумма цифр, mod 10). Часть записей таблицы
//! начинается с бара нулевой ширины: знак фактически открывается пробелом.

use tracing::debug;

use crate::api::SymbologyEncoder;
use crate::core::checksum::digit_sum_mod10;
use crate::core::error::Result;
use crate::core::grammar::{fixed_width_digits, indices_in};
use crate::core::pattern::assemble;
use crate::core::types::{EncodeInfo, SymbolResult, Symbology};
use crate::one_d::EncodeOptions;

const KOREA_TABLE: [&str; 10] = [
    "1313150613", "0713131313", "0417131313", "1506131313", "0413171313", "17171313",
    "1315061313", "0413131713", "17131713", "13171713",
];

const WIDTH: usize = 6;

#[derive(Clone, Copy, Debug, Default)]
pub struct KoreaPost;

impl SymbologyEncoder for KoreaPost {
    fn symbology(&self) -> Symbology {
        Symbology::KoreaPost
    }

    fn validate(&self, content: &str, _opts: &EncodeOptions) -> Result<String> {
        fixed_width_digits(content, WIDTH)
    }

    fn encode(&self, content: &str, opts: &EncodeOptions) -> Result<SymbolResult> {
        let data = self.validate(content, opts)?;
        let check = digit_sum_mod10(&data);
        debug!(check, "korea post check digit");

        let full = format!("{data}{check}");
        let indices = indices_in("0123456789", &full)?;
        let row = assemble(&KOREA_TABLE, &indices)?;

        Ok(SymbolResult::single_row(Symbology::KoreaPost, full.clone(), full, row)
            .with_info(EncodeInfo::new().with("Check Digit", check))
            .with_readable_location(opts.readable_location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::EncodeError;

    #[test]
    fn check_digit_from_digit_sum() {
        let r = KoreaPost.encode("123456", &EncodeOptions::default()).unwrap();
        assert_eq!(r.info.get("Check Digit"), Some("9"));
        assert_eq!(r.readable, "1234569");
        let expected: String = [1, 2, 3, 4, 5, 6, 9]
            .iter()
            .map(|&d| KOREA_TABLE[d])
            .collect();
        assert_eq!(r.pattern.row(0), Some(expected.as_str()));
    }

    #[test]
    fn zero_padded() {
        let r = KoreaPost.encode("42", &EncodeOptions::default()).unwrap();
        assert_eq!(r.content, "0000424");
    }

    #[test]
    fn grammar() {
        let opts = EncodeOptions::default();
        assert_eq!(
            KoreaPost.encode("1234567", &opts),
            Err(EncodeError::TooLong { max: 6 })
        );
        assert_eq!(
            KoreaPost.encode("12 34", &opts),
            Err(EncodeError::InvalidCharacters)
        );
    }
}
