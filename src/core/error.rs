// src/core/error.rs
//
// Ошибки кодирования. Все они — значения: вызывающий исправляет вход
// и пробует снова, повторов внутри нет.

use thiserror::Error;

use crate::core::types::Symbology;

/// Ошибка кодирования символа.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Недопустимый символ или неверные старт/стоп-знаки.
    #[error("invalid characters in input data")]
    InvalidCharacters,

    #[error("input too long (maximum {max} characters)")]
    TooLong { max: usize },

    #[error("input too short (minimum {min} characters)")]
    TooShort { min: usize },

    /// Числовое значение вне допустимого диапазона символики.
    #[error("data out of range ({min}..={max})")]
    OutOfRange { min: u32, max: u32 },

    /// Нарушен синтаксис GS1 (`[AI]data`).
    #[error("invalid GS1 data: {0}")]
    Gs1(String),

    /// Остаток контрольной суммы не представим в алфавите.
    #[error("not a valid {0} identifier")]
    InvalidCheckDigit(&'static str),

    /// Отказ дочернего кодировщика — текст прокидывается как есть.
    #[error("{source}")]
    Delegated {
        target: Symbology,
        source: Box<EncodeError>,
    },

    /// Таблица не нашла символ, прошедший валидацию. Баг, а не ошибка ввода.
    #[error("internal error: {0}")]
    Internal(String),
}

impl EncodeError {
    #[inline]
    pub(crate) fn delegated(target: Symbology, source: EncodeError) -> Self {
        Self::Delegated {
            target,
            source: Box::new(source),
        }
    }

    /// Самая «глубокая» причина: для делегированных ошибок — ошибка дочерней символики.
    pub fn root(&self) -> &EncodeError {
        match self {
            Self::Delegated { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EncodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegated_message_is_verbatim() {
        let child = EncodeError::TooLong { max: 85 };
        let err = EncodeError::delegated(Symbology::Code39, child.clone());
        assert_eq!(err.to_string(), child.to_string());
        assert_eq!(err.root(), &child);
    }
}
