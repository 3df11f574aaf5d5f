//! Сортировка отелей по количеству звёзд.

use std::cmp::Reverse;

use super::types::Hotel;

/// Направление сортировки по звёздам.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// По неубыванию: от меньшего числа звёзд к большему.
    Ascending,
    /// По невозрастанию: от большего числа звёзд к меньшему.
    Descending,
}

impl SortOrder {
    /// Возвращает строковое представление направления.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascend",
            Self::Descending => "descend",
        }
    }
}

/// Сортирует отели по звёздам на месте.
///
/// Сортировка устойчивая: отели с одинаковым числом звёзд сохраняют
/// исходный взаимный порядок в обоих направлениях.
///
/// # Пример
///
/// ```
/// use hotel_data::hotel::{Hotel, SortOrder, sort_by_stars};
///
/// let hotel = |name: &str, stars| Hotel {
///     name: name.to_string(),
///     address: String::new(),
///     stars,
///     contact: String::new(),
///     phone: String::new(),
///     uri: "test.com".to_string(),
/// };
///
/// let mut hotels = vec![hotel("a", 5), hotel("b", 2), hotel("c", 4)];
/// sort_by_stars(&mut hotels, SortOrder::Ascending);
///
/// let stars: Vec<u8> = hotels.iter().map(|h| h.stars).collect();
/// assert_eq!(stars, [2, 4, 5]);
/// ```
pub fn sort_by_stars(hotels: &mut [Hotel], order: SortOrder) {
    match order {
        SortOrder::Ascending => hotels.sort_by_key(|h| h.stars),
        SortOrder::Descending => hotels.sort_by_key(|h| Reverse(h.stars)),
    }
}
