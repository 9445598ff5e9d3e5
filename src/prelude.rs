// src/prelude.rs
//
// Удобные re-export'ы: `use ultracode::prelude::*;`.

pub use crate::api::{encode, validate, SymbologyEncoder};
pub use crate::compat::Symbol;
pub use crate::core::error::{EncodeError, Result};
pub use crate::core::types::{
    EncodeInfo, HumanReadableLocation, InfoEntry, ModulePattern, RowHeight, SymbolResult,
    Symbology,
};
pub use crate::one_d::{DataType, EncodeOptions};
