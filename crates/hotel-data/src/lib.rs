//! Библиотека конвертации данных об отелях.
//!
//! Этот крейт превращает строки CSV-файла с отелями в два структурированных
//! формата и отделяет строки, не прошедшие валидацию:
//!
//! - **JSON** — массив объектов, по одному на отель
//! - **XML** — корневой элемент `<hotels>` с элементом `<hotel>` на каждый отель
//! - **CSV** — отклонённые строки в исходном виде, с заголовком
//!
//! Файлы и пути крейт не открывает: на вход подаются сырые строки
//! ([`reader::RecordReader`]), на выходе получаются байты ([`pipeline::ConversionOutput`]).
//!
//! # Быстрый старт
//!
//! ```
//! use std::io::Cursor;
//!
//! use hotel_data::prelude::*;
//!
//! let csv = "name,address,stars,contact,phone,uri\n\
//!            The test hotel,\"01, test street\",5,test test,+33 (0)2 24 56 78 90,https://test.com/\n\
//!            ,\"3, invalid test street\",6,Mr invalid test,+33 (0)2 24 56 78 90,schneider.fr/index/\n";
//!
//! let rows = RecordReader::new(Cursor::new(csv)).read_all().unwrap();
//! let output = Converter::new(ConvertConfig::default()).convert(&rows).unwrap();
//!
//! assert_eq!(output.hotels.len(), 1);
//! assert_eq!(output.rejected_count(), 1);
//! assert_eq!(Json::decode(&output.json).unwrap(), output.hotels);
//! ```

pub mod error;
pub mod hotel;
pub mod pipeline;
pub mod reader;
pub mod serde;
pub mod writer;

/// Типы, нужные почти любому потребителю крейта.
pub mod prelude {
    pub use crate::{
        error::{ConvertError, ConvertResult},
        hotel::{Hotel, RawRow, SortOrder},
        pipeline::{ConversionOutput, ConvertConfig, Converter},
        reader::RecordReader,
        serde::{Format, Json, OutputFormat, Xml},
        writer::RejectedWriter,
    };
}
