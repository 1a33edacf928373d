use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

pub const EXPECTED_FIELDS: usize = 5;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error(
        "Linha {line} inválida: esperado {expected} campos, veio {found}",
        expected = EXPECTED_FIELDS
    )]
    FieldCount { line: usize, found: usize },

    #[error("Linha {line}: preço inválido '{value}': {source}")]
    Price {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Linha {line}: quantidade inválida '{value}': {source}")]
    Quantity {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Linha {line}: data de validade inválida '{value}': {source}")]
    Expiry {
        line: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Linha {line}: registro ilegível: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },
}

impl FormatError {
    pub fn line(&self) -> usize {
        match self {
            FormatError::FieldCount { line, .. }
            | FormatError::Price { line, .. }
            | FormatError::Quantity { line, .. }
            | FormatError::Expiry { line, .. }
            | FormatError::Csv { line, .. } => *line,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Erro ao ler arquivo '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Erro de formato nos dados: {0}")]
    Format(#[from] FormatError),
}
