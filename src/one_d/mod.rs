// src/one_d/mod.rs
//
// Линейные символики. Простые табличные (Codabar, Code 39, Code 128,
// Korea Post), преобразование Pharmacode и «обёртки», которые
// переформатируют данные и отдают их Code 39 / Code 128.

pub mod codabar;
pub mod code128;
pub mod code32;
pub mod code39;
pub mod code39_extended;
pub mod gs1;
pub mod korea_post;
pub mod logmars;
pub mod nve18;
pub mod pharmacode;
pub mod pzn;

pub use codabar::Codabar;
pub use code128::Code128;
pub use code32::Code32;
pub use code39::Code39;
pub use code39_extended::Code39Extended;
pub use korea_post::KoreaPost;
pub use logmars::Logmars;
pub use nve18::Nve18;
pub use pharmacode::Pharmacode;
pub use pzn::Pzn;

use crate::core::types::HumanReadableLocation;

/// Как трактовать данные.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DataType {
    #[default]
    Generic,
    /// Данные в синтаксисе GS1: `[AI]data[AI]data…`.
    Gs1,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Добавить необязательную контрольную цифру (Codabar: mod 16, Code 39: mod 43).
    /// Символики с обязательной контрольной цифрой флаг игнорируют.
    pub check_digit: bool,
    /// Тип данных; `Gs1` понимает только Code 128.
    pub data_type: DataType,
    /// Подсказка рендереру, ядро её только переносит в результат.
    pub readable_location: HumanReadableLocation,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            check_digit: false,
            data_type: DataType::Generic,
            readable_location: HumanReadableLocation::Bottom,
        }
    }
}

impl EncodeOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_check_digit(mut self, on: bool) -> Self {
        self.check_digit = on;
        self
    }

    #[inline]
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    #[inline]
    pub fn with_readable_location(mut self, loc: HumanReadableLocation) -> Self {
        self.readable_location = loc;
        self
    }

    /// Опции для дочернего кодировщика: место текста наследуется.
    #[inline]
    pub(crate) fn child(&self, check_digit: bool, data_type: DataType) -> Self {
        Self {
            check_digit,
            data_type,
            readable_location: self.readable_location,
        }
    }
}
