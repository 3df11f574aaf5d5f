//! Конвейер конвертации: разбиение строк, сортировка и кодирование.
//!
//! Всё выполняется за один синхронный проход:
//!
//! ```text
//! сырые строки → partition → [sort_by_stars] → JSON + XML
//!                    └──────→ отклонённые строки (с заголовком)
//! ```

use tracing::{debug, info};

use crate::{
    error::{ConvertError, ConvertResult},
    hotel::{Hotel, RawRow, SortOrder, map_record, sort_by_stars, validate_record},
    serde::{Format, Json, OutputFormat, Xml},
};

/// Результат разбиения входных строк.
///
/// Порядок внутри каждой коллекции совпадает с порядком во входных данных.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionResult {
    /// Отели из строк, прошедших валидацию.
    pub hotels: Vec<Hotel>,
    /// Отклонённые строки в исходном виде, без заголовка.
    pub rejected: Vec<RawRow>,
}

/// Разбивает строки на валидные отели и отклонённые строки.
///
/// Первая строка считается заголовком: она не проверяется и не попадает
/// ни в одну из коллекций. Каждая остальная строка попадает ровно в одну.
///
/// # Ошибки
///
/// [`ConvertError::UnmappableRecord`], если строка прошла валидацию, но не
/// отобразилась в [`Hotel`]. Отклонённые строки ошибкой не являются.
///
/// # Пример
///
/// ```
/// use hotel_data::{hotel::RawRow, pipeline::partition};
///
/// let rows = vec![
///     RawRow::from(vec!["name", "address", "stars", "contact", "phone", "uri"]),
///     RawRow::from(vec!["A", "B", "5", "C", "D", "https://test.com/"]),
///     RawRow::from(vec!["A", "B", "6", "C", "D", "https://test.com/"]),
/// ];
///
/// let result = partition(&rows).unwrap();
/// assert_eq!(result.hotels.len(), 1);
/// assert_eq!(result.rejected.len(), 1);
/// ```
pub fn partition(rows: &[RawRow]) -> ConvertResult<ConversionResult> {
    info!("Matching CSV records to hotels");

    let mut result = ConversionResult::default();

    for (index, row) in rows.iter().enumerate().skip(1) {
        let line = line_of(row, index);

        match validate_record(row) {
            Ok(()) => {
                let hotel = map_record(row)
                    .map_err(|source| ConvertError::UnmappableRecord { line, source })?;
                result.hotels.push(hotel);
            }
            Err(reason) => {
                debug!(line, %reason, "Record rejected");
                result.rejected.push(row.clone());
            }
        }
    }

    info!(
        valid = result.hotels.len(),
        rejected = result.rejected.len(),
        "Records partitioned"
    );

    Ok(result)
}

/// Номер строки входа (1-based). Без позиции из reader считается по индексу.
fn line_of(row: &RawRow, index: usize) -> u64 {
    row.position().map_or(index as u64 + 1, csv::Position::line)
}

/// Параметры одного запуска конвертации.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Направление сортировки по звёздам. `None` сохраняет порядок входа.
    pub sort: Option<SortOrder>,
}

/// Готовые к записи результаты конвертации.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    /// Отели в порядке вывода.
    pub hotels: Vec<Hotel>,
    /// JSON-представление `hotels`.
    pub json: Vec<u8>,
    /// XML-представление `hotels`.
    pub xml: Vec<u8>,
    /// Заголовок и отклонённые строки; `None`, если отклонённых строк нет.
    pub rejected: Option<Vec<RawRow>>,
}

impl ConversionOutput {
    /// Закодированные отели в указанном формате.
    #[must_use]
    pub fn encoded(&self, format: Format) -> &[u8] {
        match format {
            Format::Json => &self.json,
            Format::Xml => &self.xml,
        }
    }

    /// Количество отклонённых строк (без заголовка).
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected.as_ref().map_or(0, |rows| rows.len().saturating_sub(1))
    }
}

/// Конвертер данных об отелях.
///
/// Конфигурация передаётся явно при создании; глобального состояния нет,
/// поэтому один конвертер можно вызывать многократно на разных входах.
///
/// # Пример
///
/// ```
/// use hotel_data::{
///     hotel::{RawRow, SortOrder},
///     pipeline::{ConvertConfig, Converter},
/// };
///
/// let rows = vec![
///     RawRow::from(vec!["name", "address", "stars", "contact", "phone", "uri"]),
///     RawRow::from(vec!["A", "B", "2", "C", "D", "a.com"]),
///     RawRow::from(vec!["E", "F", "4", "G", "H", "e.com"]),
/// ];
///
/// let converter = Converter::new(ConvertConfig { sort: Some(SortOrder::Descending) });
/// let output = converter.convert(&rows).unwrap();
///
/// assert_eq!(output.hotels[0].stars, 4);
/// assert!(output.rejected.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Создаёт конвертер с заданной конфигурацией.
    #[must_use]
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Выполняет полный проход: разбиение, сортировку и оба кодирования.
    ///
    /// Если есть отклонённые строки, к ним спереди добавляется заголовок,
    /// чтобы файл отклонённых строк оставался самоописывающим.
    pub fn convert(&self, rows: &[RawRow]) -> ConvertResult<ConversionOutput> {
        let ConversionResult { mut hotels, rejected } = partition(rows)?;

        if let Some(order) = self.config.sort {
            info!(order = order.as_str(), "Sorting hotels by stars");
            sort_by_stars(&mut hotels, order);
        }

        let json = encode::<Json>(&hotels)?;
        let xml = encode::<Xml>(&hotels)?;

        let rejected = match rows.first() {
            Some(header) if !rejected.is_empty() => {
                let mut with_header = Vec::with_capacity(rejected.len() + 1);
                with_header.push(header.clone());
                with_header.extend(rejected);
                Some(with_header)
            }
            _ => None,
        };

        Ok(ConversionOutput { hotels, json, xml, rejected })
    }
}

fn encode<F: OutputFormat>(hotels: &[Hotel]) -> ConvertResult<Vec<u8>> {
    info!(format = %F::FORMAT, "Converting hotels");
    F::encode(hotels).map_err(|source| ConvertError::Encode { format: F::FORMAT, source })
}
