// src/core/pattern.rs
//
// Сборка строки модулей из таблиц. Вызывается только после валидации:
// каждый индекс обязан попасть в таблицу.

use crate::core::error::{EncodeError, Result};

/// Склеить записи таблицы для индексов в порядке входа.
pub fn assemble(table: &[&str], indices: &[usize]) -> Result<String> {
    let mut row = String::with_capacity(indices.len() * table.first().map_or(0, |s| s.len()));
    for &i in indices {
        let entry = table.get(i).ok_or_else(|| {
            EncodeError::Internal(format!("table index {i} out of bounds ({})", table.len()))
        })?;
        row.push_str(entry);
    }
    Ok(row)
}

/// Проверка формата: только ASCII-цифры.
#[inline]
pub fn is_wire_row(row: &str) -> bool {
    !row.is_empty() && row.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [&str; 3] = ["11", "21", "12"];

    #[test]
    fn concatenates_in_order() {
        assert_eq!(assemble(&TABLE, &[2, 0, 1]).unwrap(), "121121");
        assert_eq!(assemble(&TABLE, &[]).unwrap(), "");
    }

    #[test]
    fn out_of_table_is_internal() {
        assert!(matches!(assemble(&TABLE, &[3]), Err(EncodeError::Internal(_))));
    }

    #[test]
    fn wire_format() {
        assert!(is_wire_row("1212"));
        assert!(!is_wire_row(""));
        assert!(!is_wire_row("12a"));
    }
}
