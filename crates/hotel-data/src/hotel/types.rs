//! Основные типы: запись об отеле и сырая строка входного файла.

use serde::{Deserialize, Serialize};

/// Сырая строка входного файла: упорядоченный набор полей в виде байтов.
///
/// Поля хранятся как байты, а не как `String`: проверка имени на корректную
/// кодировку выполняется при валидации, а отклонённые строки записываются
/// обратно без изменений.
pub type RawRow = csv::ByteRecord;

/// Количество атрибутов [`Hotel`].
///
/// Строка с меньшим числом полей заведомо невалидна. Значение проверяется
/// тестом против сериализованной формы структуры.
pub const FIELD_COUNT: usize = 6;

/// Минимально допустимое количество звёзд.
pub const MIN_STARS: i64 = 0;

/// Максимально допустимое количество звёзд.
pub const MAX_STARS: i64 = 5;

/// Позиции атрибутов отеля в сырой строке.
pub mod column {
    /// Название отеля.
    pub const NAME: usize = 0;
    /// Адрес.
    pub const ADDRESS: usize = 1;
    /// Количество звёзд.
    pub const STARS: usize = 2;
    /// Контактное лицо.
    pub const CONTACT: usize = 3;
    /// Телефон.
    pub const PHONE: usize = 4;
    /// Адрес сайта.
    pub const URI: usize = 5;
}

/// Запись об отеле.
///
/// Создаётся только из строки, прошедшей валидацию (см.
/// [`map_record`][crate::hotel::map_record]). Порядок полей совпадает с
/// порядком колонок входного файла и определяет порядок полей в JSON и XML.
///
/// # Пример
///
/// ```
/// use hotel_data::hotel::Hotel;
///
/// let hotel = Hotel {
///     name: "The test hotel".to_string(),
///     address: "01, test street".to_string(),
///     stars: 5,
///     contact: "test test".to_string(),
///     phone: "+33 (0)2 24 56 78 90".to_string(),
///     uri: "https://test.com/".to_string(),
/// };
///
/// assert_eq!(hotel.stars, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hotel {
    /// Название отеля.
    pub name: String,
    /// Почтовый адрес.
    pub address: String,
    /// Количество звёзд, от 0 до 5 включительно.
    pub stars: u8,
    /// Имя контактного лица.
    pub contact: String,
    /// Контактный телефон в свободной форме.
    pub phone: String,
    /// Адрес сайта отеля.
    pub uri: String,
}
