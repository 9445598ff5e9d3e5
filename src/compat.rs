// src/compat.rs
//! Совместимость со старым «объектным» API: задать данные, вызвать
//! `encode()` и получить `bool`, ошибки копятся в аккумуляторе.
//! Внутри — тот же `Result`-API.

use crate::api::encode;
use crate::core::types::{EncodeInfo, ModulePattern, SymbolResult, Symbology};
use crate::one_d::EncodeOptions;

#[derive(Clone, Debug)]
pub struct Symbol {
    symbology: Symbology,
    options: EncodeOptions,
    content: String,
    result: Option<SymbolResult>,
    errors: Vec<String>,
}

impl Symbol {
    pub fn new(symbology: Symbology) -> Self {
        Self {
            symbology,
            options: EncodeOptions::default(),
            content: String::new(),
            result: None,
            errors: Vec::new(),
        }
    }

    #[inline]
    pub fn with_options(mut self, options: EncodeOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn options_mut(&mut self) -> &mut EncodeOptions {
        &mut self.options
    }

    /// Новые данные сбрасывают прошлый результат.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.result = None;
    }

    /// `true` — геометрия готова; `false` — см. [`Symbol::error_message`].
    pub fn encode(&mut self) -> bool {
        match encode(self.symbology, &self.content, &self.options) {
            Ok(r) => {
                self.result = Some(r);
                true
            }
            Err(e) => {
                tracing::debug!(symbology = %self.symbology, error = %e, "encode failed");
                self.result = None;
                self.errors.push(e.to_string());
                false
            }
        }
    }

    /// Все накопленные ошибки, по одной на строку.
    pub fn error_message(&self) -> Option<String> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self.errors.join("\n"))
        }
    }

    #[inline]
    pub fn result(&self) -> Option<&SymbolResult> {
        self.result.as_ref()
    }

    #[inline]
    pub fn pattern(&self) -> Option<&ModulePattern> {
        self.result.as_ref().map(|r| &r.pattern)
    }

    #[inline]
    pub fn readable(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.readable.as_str())
    }

    #[inline]
    pub fn info(&self) -> Option<&EncodeInfo> {
        self.result.as_ref().map(|r| &r.info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::HumanReadableLocation;

    #[test]
    fn failure_leaves_pattern_unset() {
        let mut s = Symbol::new(Symbology::Codabar);
        s.set_content("1234");
        assert!(!s.encode());
        assert!(s.pattern().is_none());
        assert_eq!(
            s.error_message().as_deref(),
            Some("invalid characters in input data")
        );
    }

    #[test]
    fn success_then_failure_accumulates() {
        let mut s = Symbol::new(Symbology::Pharmacode);
        s.set_content("3");
        assert!(s.encode());
        assert_eq!(s.pattern().and_then(|p| p.row(0)), Some("1212"));
        assert_eq!(s.error_message(), None);

        s.set_content("2");
        assert!(!s.encode());
        s.set_content("x");
        assert!(!s.encode());
        assert!(s.result().is_none());
        assert_eq!(s.error_message().map(|m| m.lines().count()), Some(2));
    }

    #[test]
    fn options_reach_the_encoder() {
        let mut s = Symbol::new(Symbology::Code39);
        s.options_mut().check_digit = true;
        s.set_content("CODE39");
        assert!(s.encode());
        assert_eq!(s.readable(), Some("*CODE39W*"));
        assert_eq!(s.info().and_then(|i| i.get("Code 39 Check Digit")), Some("W"));

        let top = EncodeOptions::default().with_readable_location(HumanReadableLocation::Top);
        let mut s = Symbol::new(Symbology::Pzn).with_options(top);
        s.set_content("1234567");
        assert!(s.encode());
        assert_eq!(s.readable(), Some("*PZN-12345678*"));
        assert_eq!(s.result().map(|r| r.readable_location), Some(HumanReadableLocation::Top));
    }
}
