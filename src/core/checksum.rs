//! Контрольные цифры.
//!
//! Все функции принимают уже проверенные данные (только ASCII-цифры или
//! индексы алфавита), дополненные нулями слева до фиксированной длины.

#[inline]
fn digit(b: u8) -> u32 {
    debug_assert!(b.is_ascii_digit());
    u32::from(b - b'0')
}

/// Остаток по модулю не больше 256 всегда помещается в `u8`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn residue(r: u32) -> u8 {
    debug_assert!(r <= u32::from(u8::MAX));
    r as u8
}

/// Простая сумма цифр по модулю 10 (Korea Post).
pub fn digit_sum_mod10(digits: &str) -> u8 {
    let sum: u32 = digits.bytes().map(digit).sum();
    residue((10 - sum % 10) % 10)
}

/// Чередующиеся веса 3/1 справа налево по модулю 10 (GS1: SSCC/NVE, EAN).
/// Самая правая цифра (позиция 0) получает вес 3.
pub fn alternating_weight_mod10(digits: &str) -> u8 {
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| if i % 2 == 0 { 3 * digit(b) } else { digit(b) })
        .sum();
    residue((10 - sum % 10) % 10)
}

/// Позиционные веса 1..n по модулю 11 (PZN).
///
/// `None` — остаток 10: у таких данных нет допустимой контрольной цифры.
pub fn positional_weight_mod11(digits: &str) -> Option<u8> {
    let sum: u32 = digits
        .bytes()
        .zip(1u32..)
        .map(|(b, w)| w * digit(b))
        .sum();
    match sum % 11 {
        10 => None,
        11 => Some(0),
        r => Some(residue(r)),
    }
}

/// Удвоение нечётных позиций с суммой цифр произведения, по модулю 10 (Code 32).
pub fn doubling_mod10(digits: &str) -> u8 {
    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let v = if i % 2 == 0 { digit(b) } else { 2 * digit(b) };
            if v >= 10 {
                v - 10 + 1
            } else {
                v
            }
        })
        .sum();
    residue(sum % 10)
}

/// Сумма индексов по модулю 43 (Code 39). Возвращает индекс контрольного знака.
pub fn mod43(indices: &[usize]) -> usize {
    indices.iter().sum::<usize>() % 43
}

/// Дополнение суммы индексов до кратного 16 (Codabar).
pub fn mod16(indices: &[usize]) -> usize {
    (16 - indices.iter().sum::<usize>() % 16) % 16
}

/// Взвешенная сумма Code 128: старт + Σ(i·v) по модулю 103.
pub fn mod103(start: u8, values: &[u8]) -> u8 {
    let sum = values
        .iter()
        .zip(1u32..)
        .fold(u32::from(start), |acc, (&v, w)| acc + w * u32::from(v));
    residue(sum % 103)
}
