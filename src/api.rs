// src/api.rs
//
// Верхнеуровневый API: трейт кодировщика и диспетчеризация по символике.
// Каждая символика — вариант `Symbology`, за которым стоит stateless-кодировщик.

use crate::core::error::Result;
use crate::core::types::{SymbolResult, Symbology};
use crate::one_d::{
    Codabar, Code128, Code32, Code39, Code39Extended, EncodeOptions, KoreaPost, Logmars, Nve18,
    Pharmacode, Pzn,
};

/// Возможности одной символики: проверить и закодировать.
pub trait SymbologyEncoder: Send + Sync {
    fn symbology(&self) -> Symbology;

    /// Проверить вход и вернуть нормализованные данные (дополненные нулями,
    /// в верхнем регистре и т.п.). Повторная проверка результата его не меняет.
    ///
    /// # Errors
    /// Нарушение грамматики, длины или диапазона символики.
    fn validate(&self, content: &str, opts: &EncodeOptions) -> Result<String>;

    /// Полное кодирование: проверка, контрольная цифра, сборка геометрии.
    ///
    /// # Errors
    /// Любая ошибка проверки, невозможная контрольная цифра или отказ
    /// дочернего кодировщика.
    fn encode(&self, content: &str, opts: &EncodeOptions) -> Result<SymbolResult>;
}

impl Symbology {
    /// Кодировщик для символики.
    pub fn encoder(self) -> &'static dyn SymbologyEncoder {
        match self {
            Symbology::Codabar => &Codabar,
            Symbology::Code39 => &Code39,
            Symbology::Code39Extended => &Code39Extended,
            Symbology::Logmars => &Logmars,
            Symbology::Code32 => &Code32,
            Symbology::Pzn => &Pzn,
            Symbology::Code128 => &Code128,
            Symbology::Nve18 => &Nve18,
            Symbology::KoreaPost => &KoreaPost,
            Symbology::Pharmacode => &Pharmacode,
        }
    }
}

/// One-shot: закодировать `content` выбранной символикой.
///
/// # Errors
/// См. [`SymbologyEncoder::encode`].
#[inline]
pub fn encode(symbology: Symbology, content: &str, opts: &EncodeOptions) -> Result<SymbolResult> {
    symbology.encoder().encode(content, opts)
}

/// Только проверка, без сборки геометрии.
///
/// # Errors
/// См. [`SymbologyEncoder::validate`].
#[inline]
pub fn validate(symbology: Symbology, content: &str, opts: &EncodeOptions) -> Result<String> {
    symbology.encoder().validate(content, opts)
}
