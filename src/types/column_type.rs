//! This module defines the canonical, type-safe representation of zebra column
//! types and table schemas.

use crate::error::ZebraError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The tag of a zebra column.
///
/// The discriminants are the wire codes used by the on-disk format.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ColumnType {
    Byte = 0,
    Int = 1,
    Double = 2,
    Array = 3,
}

impl ColumnType {
    /// Decodes a wire code into a `ColumnType`.
    pub fn from_code(code: u8) -> Result<Self, ZebraError> {
        match code {
            0 => Ok(Self::Byte),
            1 => Ok(Self::Int),
            2 => Ok(Self::Double),
            3 => Ok(Self::Array),
            other => Err(ZebraError::InvalidColumnType(other)),
        }
    }

    /// Returns the wire code for this tag.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Returns `true` for the fixed-width variants.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Array)
    }
}

impl TryFrom<u8> for ColumnType {
    type Error = ZebraError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

/// Provides the canonical string representation for a `ColumnType`.
impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

//==================================================================================
// Schemas
//==================================================================================

/// The full shape of a column, including the schema of a nested table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "type", content = "table", rename_all = "snake_case")]
pub enum ColumnSchema {
    Byte,
    Int,
    Double,
    Array(TableSchema),
}

impl ColumnSchema {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Byte => ColumnType::Byte,
            Self::Int => ColumnType::Int,
            Self::Double => ColumnType::Double,
            Self::Array(_) => ColumnType::Array,
        }
    }
}

/// The ordered column schemas of a table. Two tables can be appended onto each
/// other iff their schemas are equal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TableSchema {
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    pub fn new(columns: Vec<ColumnSchema>) -> Self {
        Self { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
