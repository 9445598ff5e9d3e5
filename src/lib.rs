#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]

// Публичные модули
pub mod api; // высокий уровень: трейт кодировщика, диспетчеризация
pub mod core; // общие типы, ошибки, контрольные суммы, грамматики
pub mod prelude; // удобные re-export'ы

pub mod one_d; // линейные символики

// Старый API: encode() -> bool + аккумулятор ошибок
pub mod compat;

pub use crate::api::{encode, validate, SymbologyEncoder};
pub use crate::compat::Symbol;
pub use crate::core::error::{EncodeError, Result};
pub use crate::core::types::{ModulePattern, SymbolResult, Symbology};
pub use crate::one_d::{DataType, EncodeOptions};
