// src/core/types.rs
//
// Общие типы результата, независимые от конкретных кодировщиков.

use std::fmt;

use serde::Serialize;

use crate::core::pattern::is_wire_row;

/// Тип символики.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Symbology {
    Codabar,
    Code39,
    Code39Extended,
    Logmars,
    Code32,
    Pzn,
    Code128,
    Nve18,
    KoreaPost,
    Pharmacode,
}

impl Symbology {
    pub const ALL: [Symbology; 10] = [
        Symbology::Codabar,
        Symbology::Code39,
        Symbology::Code39Extended,
        Symbology::Logmars,
        Symbology::Code32,
        Symbology::Pzn,
        Symbology::Code128,
        Symbology::Nve18,
        Symbology::KoreaPost,
        Symbology::Pharmacode,
    ];

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Symbology::Codabar => "Codabar",
            Symbology::Code39 => "Code 39",
            Symbology::Code39Extended => "Code 39 Extended",
            Symbology::Logmars => "LOGMARS",
            Symbology::Code32 => "Code 32",
            Symbology::Pzn => "PZN",
            Symbology::Code128 => "Code 128",
            Symbology::Nve18 => "NVE-18",
            Symbology::KoreaPost => "Korea Post",
            Symbology::Pharmacode => "Pharmacode",
        }
    }

    /// Естественная ширина группы для экспорта кодвордов (в цифрах-модулях).
    /// Только для символик, чья строка всегда кратна фиксированному числу.
    #[inline]
    pub fn codeword_width(self) -> Option<usize> {
        match self {
            Symbology::Codabar => Some(8),
            Symbology::Pharmacode => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Где рендерер должен рисовать человекочитаемый текст. Ядро его не трактует.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub enum HumanReadableLocation {
    None,
    Top,
    #[default]
    Bottom,
}

/// Высота строки: либо «по умолчанию» (решает рендерер), либо явная в пикселях.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub enum RowHeight {
    #[default]
    Default,
    Explicit(u32),
}

/// Геометрия символа: строки из ASCII-цифр, каждая цифра — ширина бара/пробела
/// в узких модулях. Чередование начинается с бара.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModulePattern {
    rows: Vec<String>,
}

impl ModulePattern {
    #[inline]
    pub fn single_row(row: String) -> Self {
        Self { rows: vec![row] }
    }

    #[inline]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[inline]
    pub fn row(&self, y: usize) -> Option<&str> {
        self.rows.get(y).map(String::as_str)
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Ширины строки `y` как числа.
    pub fn widths(&self, y: usize) -> Vec<u8> {
        self.row(y)
            .map(|r| r.bytes().map(|b| b - b'0').collect())
            .unwrap_or_default()
    }

    /// Полная ширина символа в модулях (максимум по строкам).
    pub fn total_modules(&self) -> usize {
        (0..self.rows.len())
            .map(|y| self.widths(y).into_iter().map(usize::from).sum::<usize>())
            .max()
            .unwrap_or(0)
    }
}

/// Одна запись диагностического лога.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InfoEntry {
    pub key: String,
    pub value: String,
}

/// Диагностика кодирования (контрольные цифры, промежуточные значения).
/// Только дописывается; отдельна от канала ошибок.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncodeInfo {
    entries: Vec<InfoEntry>,
}

impl EncodeInfo {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.entries.push(InfoEntry {
            key: key.into(),
            value: value.to_string(),
        });
    }

    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Дописать лог дочернего кодировщика.
    #[inline]
    pub fn append(&mut self, other: EncodeInfo) {
        self.entries.extend(other.entries);
    }

    /// Первое значение по ключу.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    #[inline]
    pub fn entries(&self) -> &[InfoEntry] {
        &self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for EncodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.entries {
            writeln!(f, "{}: {}", e.key, e.value)?;
        }
        Ok(())
    }
}

/// Результат успешного кодирования. После возврата не меняется.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolResult {
    pub symbology: Symbology,
    /// Фактически закодированные данные (после дополнения нулями и т.п.).
    pub content: String,
    /// Текст под символом; может отличаться от `content`.
    pub readable: String,
    pub readable_location: HumanReadableLocation,
    pub pattern: ModulePattern,
    pub row_heights: Vec<RowHeight>,
    pub info: EncodeInfo,
}

impl SymbolResult {
    /// Однострочный символ с высотой по умолчанию.
    pub fn single_row(
        symbology: Symbology,
        content: impl Into<String>,
        readable: impl Into<String>,
        row: String,
    ) -> Self {
        debug_assert!(is_wire_row(&row), "{symbology}: not a wire row {row:?}");
        Self {
            symbology,
            content: content.into(),
            readable: readable.into(),
            readable_location: HumanReadableLocation::default(),
            pattern: ModulePattern::single_row(row),
            row_heights: vec![RowHeight::Default],
            info: EncodeInfo::new(),
        }
    }

    /// Перенять геометрию дочернего результата как есть: строки, высоты, лог.
    /// Собственный лог родителя идёт первым.
    pub fn adopt(
        symbology: Symbology,
        content: impl Into<String>,
        readable: impl Into<String>,
        mut info: EncodeInfo,
        child: SymbolResult,
    ) -> Self {
        info.append(child.info);
        Self {
            symbology,
            content: content.into(),
            readable: readable.into(),
            readable_location: child.readable_location,
            pattern: child.pattern,
            row_heights: child.row_heights,
            info,
        }
    }

    #[inline]
    pub fn with_info(mut self, info: EncodeInfo) -> Self {
        self.info = info;
        self
    }

    #[inline]
    pub fn with_readable_location(mut self, loc: HumanReadableLocation) -> Self {
        self.readable_location = loc;
        self
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.pattern.row_count()
    }

    /// Ширина символа в модулях.
    #[inline]
    pub fn width(&self) -> usize {
        self.pattern.total_modules()
    }

    /// Кодворды с естественной для символики шириной группы.
    pub fn codewords(&self) -> Option<Vec<u32>> {
        self.codewords_with(self.symbology.codeword_width()?)
    }

    /// Перепаковать строку 0 в целые кодворды по `width` цифр.
    /// `None`, если строка не кратна `width` (или `width` вне 1..=9).
    pub fn codewords_with(&self, width: usize) -> Option<Vec<u32>> {
        if !(1..=9).contains(&width) {
            return None;
        }
        let row = self.pattern.row(0)?;
        if row.is_empty() || row.len() % width != 0 {
            return None;
        }
        let cws = row
            .as_bytes()
            .chunks(width)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'))
            })
            .collect();
        Some(cws)
    }
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
mod tests {
    use super::*;

    #[test]
    fn codewords_regroup_row_zero() {
        let r = SymbolResult::single_row(
            Symbology::Codabar,
            "A1B",
            "A1B",
            "112212111111221112121121".to_string(),
        );
        assert_eq!(
            r.codewords(),
            Some(vec![11221211, 11112211, 12121121])
        );
        assert_eq!(r.codewords_with(5), None);
        assert_eq!(r.codewords_with(0), None);
    }

    #[test]
    fn width_sums_modules() {
        let r = SymbolResult::single_row(Symbology::Pharmacode, "3", "", "1212".to_string());
        assert_eq!(r.width(), 6);
        assert_eq!(r.row_count(), 1);
        assert_eq!(r.row_heights, vec![RowHeight::Default]);
        assert_eq!(r.pattern.widths(0), vec![1, 2, 1, 2]);
        assert_eq!(r.pattern.widths(1), Vec::<u8>::new());
    }

    #[test]
    fn adopt_keeps_child_geometry_and_appends_log() {
        let child = SymbolResult::single_row(Symbology::Code39, "-1", "*-1*", "1211".to_string())
            .with_info(EncodeInfo::new().with("Code 39 Check Digit", "X"));
        let own = EncodeInfo::new().with("Check Digit", 8);
        let r = SymbolResult::adopt(Symbology::Pzn, "-1", "PZN", own, child.clone());
        assert_eq!(r.pattern, child.pattern);
        assert_eq!(r.row_heights, child.row_heights);
        assert_eq!(r.info.entries().len(), 2);
        assert_eq!(r.info.get("Check Digit"), Some("8"));
        assert_eq!(r.info.to_string(), "Check Digit: 8\nCode 39 Check Digit: X\n");
    }
}
