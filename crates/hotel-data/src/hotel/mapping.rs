//! Преобразование проверенной строки в [`Hotel`].

use super::{
    types::{Hotel, RawRow, column},
    validation::{RecordError, field, parse_stars},
};

/// Строит [`Hotel`] из строки, прошедшей [`validate_record`][super::validate_record].
///
/// Позиции 0–5 переносятся в атрибуты напрямую. Название декодируется строго,
/// остальные текстовые поля — с заменой некорректных последовательностей на
/// `U+FFFD`.
///
/// # Ошибки
///
/// Для проверенной строки ошибки не бывает. [`RecordError`] означает, что
/// строку не проверили перед вызовом.
///
/// # Пример
///
/// ```
/// use hotel_data::hotel::{RawRow, map_record};
///
/// let row = RawRow::from(vec![
///     "The test hotel",
///     "01, test street",
///     "5",
///     "test test",
///     "+33 (0)2 24 56 78 90",
///     "https://test.com/",
/// ]);
///
/// let hotel = map_record(&row).unwrap();
/// assert_eq!(hotel.name, "The test hotel");
/// assert_eq!(hotel.stars, 5);
/// ```
pub fn map_record(row: &RawRow) -> Result<Hotel, RecordError> {
    let name = std::str::from_utf8(field(row, column::NAME))
        .map_err(|_| RecordError::InvalidName)?
        .to_string();

    Ok(Hotel {
        name,
        address: text(row, column::ADDRESS),
        stars: parse_stars(field(row, column::STARS))?,
        contact: text(row, column::CONTACT),
        phone: text(row, column::PHONE),
        uri: text(row, column::URI),
    })
}

fn text(row: &RawRow, index: usize) -> String {
    String::from_utf8_lossy(field(row, index)).into_owned()
}
