//! Code 39 Extended (Full ASCII).
//!
//! Каждый ASCII-знак раскладывается на один-два знака базового Code 39
//! (`%U`, `$A`, `/A`, `+A`…), результат кодируется обычным Code 39.

use tracing::debug;

use crate::api::SymbologyEncoder;
use crate::core::error::{EncodeError, Result};
use crate::core::grammar::{ensure_ascii, ensure_max_len};
use crate::core::types::{EncodeInfo, SymbolResult, Symbology};
use crate::one_d::code39::{self, Code39};
use crate::one_d::{DataType, EncodeOptions};

/// Раскладка ASCII 0..=127 в базовый алфавит.
const FULL_ASCII: [&str; 128] = [
    "%U", "$A", "$B", "$C", "$D", "$E", "$F", "$G", "$H", "$I", "$J", "$K", "$L", "$M", "$N",
    "$O", "$P", "$Q", "$R", "$S", "$T", "$U", "$V", "$W", "$X", "$Y", "$Z", "%A", "%B", "%C",
    "%D", "%E", " ", "/A", "/B", "/C", "/D", "/E", "/F", "/G", "/H", "/I", "/J", "/K", "/L",
    "-", ".", "/O", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "/Z", "%F", "%G", "%H",
    "%I", "%J", "%V", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N",
    "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "%K", "%L", "%M", "%N", "%O",
    "%W", "+A", "+B", "+C", "+D", "+E", "+F", "+G", "+H", "+I", "+J", "+K", "+L", "+M", "+N",
    "+O", "+P", "+Q", "+R", "+S", "+T", "+U", "+V", "+W", "+X", "+Y", "+Z", "%P", "%Q", "%R",
    "%S", "%T",
];

/// Разложить проверенный ASCII-текст в базовый Code 39.
pub fn expand(content: &str) -> Result<String> {
    let mut out = String::with_capacity(content.len() * 2);
    for c in content.chars() {
        let seq = u8::try_from(c)
            .ok()
            .and_then(|b| FULL_ASCII.get(usize::from(b)))
            .ok_or_else(|| EncodeError::Internal(format!("{c:?} is not ASCII")))?;
        out.push_str(seq);
    }
    Ok(out)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Code39Extended;

impl SymbologyEncoder for Code39Extended {
    fn symbology(&self) -> Symbology {
        Symbology::Code39Extended
    }

    fn validate(&self, content: &str, _opts: &EncodeOptions) -> Result<String> {
        ensure_max_len(content, code39::MAX_LEN)?;
        if content.is_empty() {
            return Err(EncodeError::TooShort { min: 1 });
        }
        ensure_ascii(content)?;
        Ok(content.to_string())
    }

    fn encode(&self, content: &str, opts: &EncodeOptions) -> Result<SymbolResult> {
        let data = self.validate(content, opts)?;
        let expanded = expand(&data)?;
        debug!(%expanded, "code 39 extended: delegating");

        let info = EncodeInfo::new().with("Encoded Data", &expanded);
        let child = Code39
            .encode(&expanded, &opts.child(opts.check_digit, DataType::Generic))
            .map_err(|e| EncodeError::delegated(Symbology::Code39, e))?;

        // Управляющие символы в тексте показываем пробелами.
        let readable: String = data
            .chars()
            .map(|c| if c.is_ascii_control() { ' ' } else { c })
            .collect();

        Ok(SymbolResult::adopt(
            Symbology::Code39Extended,
            data,
            readable,
            info,
            child,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_table() {
        assert_eq!(expand("a").unwrap(), "+A");
        assert_eq!(expand("A").unwrap(), "A");
        assert_eq!(expand("\0\x7f").unwrap(), "%U%T");
        assert_eq!(expand("Hi!").unwrap(), "H+I/A");
        assert_eq!(expand("@[`{").unwrap(), "%V%K%W%P");
    }

    #[test]
    fn geometry_equals_direct_code39() {
        let opts = EncodeOptions::default().with_check_digit(true);
        let ext = Code39Extended.encode("Code-39", &opts).unwrap();
        let direct = Code39.encode("C+O+D+E-39", &opts).unwrap();
        assert_eq!(ext.pattern, direct.pattern);
        assert_eq!(ext.readable, "Code-39");
        assert_eq!(ext.info.get("Encoded Data"), Some("C+O+D+E-39"));
        assert!(ext.info.get("Code 39 Check Digit").is_some());
    }

    #[test]
    fn rejects_non_ascii() {
        let opts = EncodeOptions::default();
        assert_eq!(
            Code39Extended.encode("naïve", &opts),
            Err(EncodeError::InvalidCharacters)
        );
    }

    #[test]
    fn expansion_overflow_is_delegated_failure() {
        // 50 строчных -> 100 базовых знаков, больше лимита Code 39
        let opts = EncodeOptions::default();
        let err = Code39Extended.encode(&"a".repeat(50), &opts).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::Delegated {
                target: Symbology::Code39,
                ..
            }
        ));
        assert_eq!(err.to_string(), EncodeError::TooLong { max: 85 }.to_string());
    }

    #[test]
    fn control_characters_shown_as_spaces() {
        let r = Code39Extended
            .encode("A\tB", &EncodeOptions::default())
            .unwrap();
        assert_eq!(r.readable, "A B");
        assert_eq!(r.content, "A\tB");
    }
}
