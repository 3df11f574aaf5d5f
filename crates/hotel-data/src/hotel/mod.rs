//! Модель данных отелей и правила разбора сырых CSV-строк.
//!
//! Здесь собраны все стадии обработки одной записи:
//! - [`validate_record`] — решает, годится ли строка для конвертации
//! - [`map_record`] — строит [`Hotel`] из уже проверенной строки
//! - [`sort_by_stars`] — упорядочивает готовую коллекцию по звёздам

mod mapping;
mod sort;
mod types;
mod validation;

pub use mapping::map_record;
pub use sort::{SortOrder, sort_by_stars};
pub use types::{FIELD_COUNT, Hotel, MAX_STARS, MIN_STARS, RawRow, column};
pub use validation::{RecordError, is_valid_record, validate_record};
