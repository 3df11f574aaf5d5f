//! Правила валидации сырых строк.

use std::sync::LazyLock;

use regex::bytes::Regex;
use thiserror::Error;

use super::types::{FIELD_COUNT, MAX_STARS, MIN_STARS, RawRow, column};

/// Шаблон адреса сайта: необязательная схема, домен, зона из 2–5 букв,
/// необязательные порт и путь. Это сопоставление с шаблоном, а не разбор URI.
///
/// Путь может содержать любые байты, кроме перевода строки, в том числе
/// невалидный UTF-8.
const URI_PATTERN: &str = r"^(http://www\.|https://www\.|http://|https://)?[a-z0-9]+([\-.][a-z0-9]+)*\.[a-z]{2,5}(:[0-9]{1,5})?(/(?-u:.)*)?$";

static URI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URI_PATTERN).expect("URI pattern is a valid regex"));

/// Причина, по которой строка не может стать записью об отеле.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Слишком мало полей: ожидалось не меньше {expected}, получено {actual}")]
    TooFewFields { expected: usize, actual: usize },
    #[error("Название отеля не является корректной UTF-8 строкой")]
    InvalidName,
    #[error("Количество звёзд не является целым числом: '{0}'")]
    InvalidStars(String),
    #[error("Количество звёзд вне диапазона 0..=5: {0}")]
    StarsOutOfRange(i64),
    #[error("Некорректный адрес сайта: '{0}'")]
    InvalidUri(String),
}

/// Проверяет сырую строку на пригодность для конвертации.
///
/// # Правила
///
/// Применяются по порядку, до первого нарушения:
///
/// 1. В строке не меньше [`FIELD_COUNT`] полей (лишние поля игнорируются)
/// 2. Название — корректная UTF-8 строка (пустое название допускается)
/// 3. Звёзды — целое число в диапазоне `0..=5`
/// 4. Адрес сайта соответствует шаблону URI
///
/// # Пример
///
/// ```
/// use hotel_data::hotel::{RawRow, RecordError, validate_record};
///
/// let row = RawRow::from(vec![
///     "The test hotel",
///     "01, test street",
///     "6",
///     "test test",
///     "+33 (0)2 24 56 78 90",
///     "https://test.com/",
/// ]);
///
/// assert_eq!(validate_record(&row), Err(RecordError::StarsOutOfRange(6)));
/// ```
pub fn validate_record(row: &RawRow) -> Result<(), RecordError> {
    if row.len() < FIELD_COUNT {
        return Err(RecordError::TooFewFields { expected: FIELD_COUNT, actual: row.len() });
    }

    if std::str::from_utf8(field(row, column::NAME)).is_err() {
        return Err(RecordError::InvalidName);
    }

    parse_stars(field(row, column::STARS))?;

    let uri = field(row, column::URI);
    if !URI_RE.is_match(uri) {
        return Err(RecordError::InvalidUri(String::from_utf8_lossy(uri).into_owned()));
    }

    Ok(())
}

/// Булева форма [`validate_record`].
#[must_use]
pub fn is_valid_record(row: &RawRow) -> bool {
    validate_record(row).is_ok()
}

/// Разбирает поле звёзд: знаковое десятичное число без пробелов в `0..=5`.
pub(super) fn parse_stars(raw: &[u8]) -> Result<u8, RecordError> {
    let invalid = || RecordError::InvalidStars(String::from_utf8_lossy(raw).into_owned());

    let value: i64 =
        std::str::from_utf8(raw).map_err(|_| invalid())?.parse().map_err(|_| invalid())?;

    if !(MIN_STARS..=MAX_STARS).contains(&value) {
        return Err(RecordError::StarsOutOfRange(value));
    }

    u8::try_from(value).map_err(|_| RecordError::StarsOutOfRange(value))
}

/// Поле по позиции. Вызывается только после проверки длины строки.
pub(super) fn field(row: &RawRow, index: usize) -> &[u8] {
    row.get(index).unwrap_or_default()
}
