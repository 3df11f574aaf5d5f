//! Потоковый reader сырых строк.
//!
//! Предоставляет [`RecordReader`] — итератор, который читает строки
//! CSV-файла из любого источника, реализующего [`Read`].

use std::io::Read;

use crate::{error::ConvertResult, hotel::RawRow};

/// Потоковый reader сырых строк.
///
/// Заголовок не интерпретируется: первая строка файла возвращается как
/// обычная, отделять её — задача [`partition`][crate::pipeline::partition].
/// Количество полей в строках может различаться.
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// use hotel_data::reader::RecordReader;
///
/// let input = "name,address,stars,contact,phone,uri\na,b,5,c,d,e.com\n";
/// let rows = RecordReader::new(Cursor::new(input)).read_all().unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(&rows[1][2], b"5");
/// ```
pub struct RecordReader<R> {
    inner: csv::Reader<R>,
    /// Счётчик прочитанных строк.
    records_read: usize,
    /// Флаг достижения EOF или ошибки.
    finished: bool,
}

impl<R: Read> RecordReader<R> {
    /// Создаёт новый reader.
    ///
    /// `csv::Reader` буферизует вход самостоятельно.
    pub fn new(reader: R) -> Self {
        let inner =
            csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);

        Self { inner, records_read: 0, finished: false }
    }

    /// Возвращает количество успешно прочитанных строк.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Читает все оставшиеся строки.
    pub fn read_all(self) -> ConvertResult<Vec<RawRow>> {
        self.collect()
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = ConvertResult<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut row = RawRow::new();
        match self.inner.read_byte_record(&mut row) {
            Ok(true) => {
                self.records_read += 1;
                Some(Ok(row))
            }
            Ok(false) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true; // Остановка при ошибке
                Some(Err(e.into()))
            }
        }
    }
}
