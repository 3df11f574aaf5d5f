//! Модуль ошибок конвертации.

use thiserror::Error;

use crate::{hotel::RecordError, serde::Format};

/// Главная ошибка конвертации данных об отелях.
///
/// Отклонённая при валидации строка ошибкой не считается: она попадает в
/// [`ConversionResult::rejected`][crate::pipeline::ConversionResult::rejected].
/// Любой вариант этого типа фатален для запуска.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Ошибка ввода/вывода.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка чтения или записи CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Коллекцию не удалось закодировать.
    #[error("Failed to encode hotels as {format}: {source}")]
    Encode {
        /// Целевой формат.
        format: Format,
        /// Исходная ошибка кодировщика.
        source: crate::serde::Error,
    },

    /// Строка прошла валидацию, но не отобразилась в [`Hotel`][crate::hotel::Hotel].
    ///
    /// Означает нарушение инварианта конвейера, а не плохие входные данные.
    #[error("Validated record at line {line} could not be mapped: {source}")]
    UnmappableRecord {
        /// Номер строки во входных данных (1-based, заголовок — строка 1).
        line: u64,
        /// Причина отказа.
        source: RecordError,
    },
}

/// Удобный alias для Result с ConvertError.
pub type ConvertResult<T> = Result<T, ConvertError>;
