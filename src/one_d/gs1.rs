//! Разбор данных GS1 в синтаксисе `[AI]data[AI]data…`.
//!
//! Для Code 128 важно только одно: после AI переменной длины, если он не
//! последний, нужен разделитель FNC1. Список AI с предопределённой длиной —
//! из общих спецификаций GS1 (таблица «predefined length»).

use crate::core::error::{EncodeError, Result};

/// Один элемент: идентификатор применения и его данные.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub ai: String,
    pub data: String,
}

impl Element {
    /// Полная длина (AI + данные) для AI с предопределённой длиной.
    pub fn predefined_len(&self) -> Option<usize> {
        let prefix = self.ai.get(..2)?;
        let total = match prefix {
            "00" => 20,
            "01" | "02" | "03" => 16,
            "04" => 18,
            "11" | "12" | "13" | "14" | "15" | "16" | "17" | "18" | "19" => 8,
            "20" => 4,
            "31" | "32" | "33" | "34" | "35" | "36" => 10,
            "41" => 16,
            _ => return None,
        };
        Some(total)
    }

    /// Нужен ли FNC1 после элемента (если за ним есть ещё).
    #[inline]
    pub fn needs_separator(&self) -> bool {
        self.predefined_len().is_none()
    }
}

fn invalid(msg: impl Into<String>) -> EncodeError {
    EncodeError::Gs1(msg.into())
}

/// Разобрать строку вида `[01]09501101530003[10]ABC`.
pub fn parse(content: &str) -> Result<Vec<Element>> {
    if !content.is_ascii() {
        return Err(EncodeError::InvalidCharacters);
    }
    if !content.starts_with('[') {
        return Err(invalid("data must start with a bracketed AI"));
    }

    let mut out = Vec::new();
    let mut rest = content;
    while let Some(after_open) = rest.strip_prefix('[') {
        let close = after_open
            .find(']')
            .ok_or_else(|| invalid("unterminated AI bracket"))?;
        let ai = &after_open[..close];
        if !(2..=4).contains(&ai.len()) || !ai.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(format!("malformed AI [{ai}]")));
        }

        let tail = &after_open[close + 1..];
        let data_end = tail.find('[').unwrap_or(tail.len());
        let data = &tail[..data_end];
        if data.is_empty() {
            return Err(invalid(format!("AI ({ai}) has no data")));
        }
        if data.contains(']') || data.bytes().any(|b| b.is_ascii_control()) {
            return Err(EncodeError::InvalidCharacters);
        }

        let element = Element {
            ai: ai.to_string(),
            data: data.to_string(),
        };
        if let Some(total) = element.predefined_len() {
            if ai.len() + data.len() != total {
                return Err(invalid(format!(
                    "AI ({ai}) requires {} data characters",
                    total.saturating_sub(ai.len())
                )));
            }
        }
        out.push(element);
        rest = &tail[data_end..];
    }
    Ok(out)
}

/// Человекочитаемая форма: `(AI)data…`.
pub fn readable(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|e| format!("({}){}", e.ai, e.data))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_and_variable() {
        let els = parse("[01]09501101530003[10]AB-123[00]012345678901234567").unwrap();
        assert_eq!(els.len(), 3);
        assert_eq!(els[0].ai, "01");
        assert!(!els[0].needs_separator());
        assert_eq!(els[1].data, "AB-123");
        assert!(els[1].needs_separator());
        assert_eq!(
            readable(&els),
            "(01)09501101530003(10)AB-123(00)012345678901234567"
        );
    }

    #[test]
    fn rejects_malformed() {
        assert!(matches!(parse("01123"), Err(EncodeError::Gs1(_))));
        assert!(matches!(parse("[01"), Err(EncodeError::Gs1(_))));
        assert!(matches!(parse("[1]23"), Err(EncodeError::Gs1(_))));
        assert!(matches!(parse("[10]"), Err(EncodeError::Gs1(_))));
        assert!(matches!(parse("[00]123"), Err(EncodeError::Gs1(_))));
        assert_eq!(parse("[10]A\tB"), Err(EncodeError::InvalidCharacters));
        assert_eq!(parse("[10]é"), Err(EncodeError::InvalidCharacters));
    }
}
