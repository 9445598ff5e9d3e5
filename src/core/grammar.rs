// src/core/grammar.rs
//
// Проверки входа: классы символов, лимиты длины, дополнение нулями.
// Никакого regex — каждая грамматика записана явными предикатами.

use crate::core::error::{EncodeError, Result};

/// Длина не больше `max` символов.
#[inline]
pub fn ensure_max_len(content: &str, max: usize) -> Result<()> {
    if content.chars().count() > max {
        return Err(EncodeError::TooLong { max });
    }
    Ok(())
}

/// Длина не меньше `min` символов.
#[inline]
pub fn ensure_min_len(content: &str, min: usize) -> Result<()> {
    if content.chars().count() < min {
        return Err(EncodeError::TooShort { min });
    }
    Ok(())
}

/// Все символы удовлетворяют `pred`.
#[inline]
pub fn ensure_all(content: &str, pred: impl Fn(char) -> bool) -> Result<()> {
    if content.chars().all(pred) {
        Ok(())
    } else {
        Err(EncodeError::InvalidCharacters)
    }
}

/// Непустая строка из ASCII-цифр.
#[inline]
pub fn ensure_digits(content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(EncodeError::TooShort { min: 1 });
    }
    ensure_all(content, |c| c.is_ascii_digit())
}

/// Только 7-битный ASCII.
#[inline]
pub fn ensure_ascii(content: &str) -> Result<()> {
    ensure_all(content, |c| c.is_ascii())
}

/// Дополнить слева нулями до `width`. Длиннее — не трогаем.
pub fn left_pad_zeros(content: &str, width: usize) -> String {
    let len = content.len();
    if len >= width {
        return content.to_string();
    }
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat('0').take(width - len));
    out.push_str(content);
    out
}

/// Цифровые данные фиксированной ширины: только цифры, не длиннее `width`,
/// дополнены нулями слева.
pub fn fixed_width_digits(content: &str, width: usize) -> Result<String> {
    ensure_max_len(content, width)?;
    ensure_digits(content)?;
    Ok(left_pad_zeros(content, width))
}

/// Индекс символа в алфавите (линейный поиск).
#[inline]
pub fn index_in(alphabet: &str, c: char) -> Option<usize> {
    alphabet.chars().position(|a| a == c)
}

/// Индексы всех символов; промах после валидации — внутренняя ошибка.
pub fn indices_in(alphabet: &str, content: &str) -> Result<Vec<usize>> {
    content
        .chars()
        .map(|c| {
            index_in(alphabet, c).ok_or_else(|| {
                EncodeError::Internal(format!("character {c:?} missing from lookup table"))
            })
        })
        .collect()
}
