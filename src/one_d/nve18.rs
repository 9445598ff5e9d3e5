//! NVE-18 / SSCC-18 (номер транспортной единицы).
//!
//! 17 цифр + контрольная (веса 3/1 справа, mod 10) под AI (00),
//! печатается Code 128 в режиме GS1.

use tracing::debug;

use crate::api::SymbologyEncoder;
use crate::core::checksum::alternating_weight_mod10;
use crate::core::error::{EncodeError, Result};
use crate::core::grammar::fixed_width_digits;
use crate::core::types::{EncodeInfo, SymbolResult, Symbology};
use crate::one_d::code128::Code128;
use crate::one_d::{DataType, EncodeOptions};

const WIDTH: usize = 17;

#[derive(Clone, Copy, Debug, Default)]
pub struct Nve18;

impl SymbologyEncoder for Nve18 {
    fn symbology(&self) -> Symbology {
        Symbology::Nve18
    }

    fn validate(&self, content: &str, _opts: &EncodeOptions) -> Result<String> {
        fixed_width_digits(content, WIDTH)
    }

    fn encode(&self, content: &str, opts: &EncodeOptions) -> Result<SymbolResult> {
        let data = self.validate(content, opts)?;
        let check = alternating_weight_mod10(&data);
        debug!(check, "nve-18 check digit");

        let payload = format!("[00]{data}{check}");
        let info = EncodeInfo::new().with("NVE Check Digit", check);
        let child = Code128
            .encode(&payload, &opts.child(false, DataType::Gs1))
            .map_err(|e| EncodeError::delegated(Symbology::Code128, e))?;

        Ok(SymbolResult::adopt(
            Symbology::Nve18,
            payload,
            format!("(00){data}{check}"),
            info,
            child,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_checks() {
        let r = Nve18.encode("1", &EncodeOptions::default()).unwrap();
        assert_eq!(r.info.get("NVE Check Digit"), Some("7"));
        assert_eq!(r.content, "[00]000000000000000017");
        assert_eq!(r.readable, "(00)000000000000000017");
    }

    #[test]
    fn geometry_equals_direct_gs1_code128() {
        let r = Nve18.encode("1", &EncodeOptions::default()).unwrap();
        let opts = EncodeOptions::default().with_data_type(DataType::Gs1);
        let direct = Code128.encode("[00]000000000000000017", &opts).unwrap();
        assert_eq!(r.pattern, direct.pattern);
        assert_eq!(r.row_heights, direct.row_heights);
        assert_eq!(r.info.get("Codewords"), direct.info.get("Codewords"));
    }

    #[test]
    fn grammar() {
        let opts = EncodeOptions::default();
        assert_eq!(
            Nve18.encode(&"1".repeat(18), &opts),
            Err(EncodeError::TooLong { max: 17 })
        );
        assert_eq!(Nve18.encode("12-3", &opts), Err(EncodeError::InvalidCharacters));
        let once = Nve18.validate("34", &opts).unwrap();
        assert_eq!(once.len(), 17);
        assert_eq!(Nve18.validate(&once, &opts).unwrap(), once);
    }
}
