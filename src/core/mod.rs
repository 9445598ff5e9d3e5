// src/core/mod.rs
//
// Общие типы и утилиты, независимые от конкретных символик.

pub mod checksum;
pub mod error;
pub mod grammar;
pub mod pattern;
pub mod types;
