//! # e2e-tests - End-to-end тесты CLI инструмента
//!
//! Этот крейт содержит e2e тесты `hotel-converter` — конвертера CSV-файлов
//! с отелями в JSON и XML.
//!
//! ## Фикстуры
//!
//! Тестовые файлы расположены в `fixtures/`:
//! - `hotels.csv` — валидные и невалидные строки вперемешку
//! - `hotels_valid.csv` — только валидные строки
//!
//! ## Запуск
//!
//! Тесты запускают готовый бинарник `hotel-converter` из соседнего крейта.
//! Cargo не собирает бинарники других пакетов для `cargo test`, поэтому
//! сначала нужна сборка всего workspace:
//!
//! ```bash
//! cargo build --workspace
//! cargo test --workspace
//! ```

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};

/// Получить путь к директории фикстур.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Найти единственный файл в директории, имя которого оканчивается на `suffix`.
///
/// Имена результатов начинаются с метки времени запуска, поэтому
/// искать их приходится по окончанию.
pub fn find_output(dir: &std::path::Path, suffix: &str) -> Result<PathBuf> {
    let mut found = Vec::new();

    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        let matches = path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.ends_with(suffix));
        if matches {
            found.push(path);
        }
    }

    match found.len() {
        1 => Ok(found.remove(0)),
        n => bail!("expected one file ending with '{suffix}' in {}, found {n}", dir.display()),
    }
}
