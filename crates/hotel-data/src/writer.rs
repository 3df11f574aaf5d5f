//! Потоковый writer отклонённых строк.
//!
//! Предоставляет [`RejectedWriter`] для записи сырых строк обратно в CSV
//! в любой тип, реализующий [`Write`].

use std::io::Write;

use crate::{error::ConvertResult, hotel::RawRow};

/// Потоковый writer отклонённых строк.
///
/// Строки записываются без изменений, байт в байт по полям; кавычки
/// расставляются только там, где без них CSV не разобрать.
///
/// # Пример
///
/// ```
/// use hotel_data::{hotel::RawRow, writer::RejectedWriter};
///
/// let header = RawRow::from(vec!["name", "stars"]);
/// let row = RawRow::from(vec!["Hotel, Paris", "6"]);
///
/// let mut output = Vec::new();
/// let mut writer = RejectedWriter::new(&mut output);
/// writer.write_header(&header).unwrap();
/// writer.write(&row).unwrap();
/// writer.flush().unwrap();
/// drop(writer);
///
/// assert_eq!(output, b"name,stars\n\"Hotel, Paris\",6\n");
/// ```
pub struct RejectedWriter<W: Write> {
    inner: csv::Writer<W>,
    /// Счётчик записанных строк (без заголовка).
    records_written: usize,
    /// Флаг: записан ли заголовок.
    header_written: bool,
}

impl<W: Write> RejectedWriter<W> {
    /// Создаёт новый writer.
    pub fn new(writer: W) -> Self {
        Self {
            inner: csv::WriterBuilder::new().flexible(true).from_writer(writer),
            records_written: 0,
            header_written: false,
        }
    }

    /// Записывает строку заголовка.
    ///
    /// Может вызываться несколько раз, но заголовок записывается только один раз.
    pub fn write_header(&mut self, header: &RawRow) -> ConvertResult<()> {
        if !self.header_written {
            self.inner.write_byte_record(header)?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Записывает одну строку.
    pub fn write(&mut self, row: &RawRow) -> ConvertResult<()> {
        self.inner.write_byte_record(row)?;
        self.records_written += 1;
        Ok(())
    }

    /// Записывает несколько строк.
    pub fn write_all(&mut self, rows: &[RawRow]) -> ConvertResult<()> {
        for row in rows {
            self.write(row)?;
        }
        Ok(())
    }

    /// Принудительно сбрасывает буфер.
    pub fn flush(&mut self) -> ConvertResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Возвращает количество записанных строк.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }
}
