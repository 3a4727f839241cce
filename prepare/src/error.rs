use std::path::PathBuf;

use thiserror::Error;
use unicode_properties_source::PropertiesError;

/// ошибки сборки таблиц. любая из них прерывает генерацию, частичный результат не записывается
#[derive(Debug, Error)]
pub enum PrepareError
{
    #[error("нет подходящего разбиения {total_bits}-битного адреса на индекс и блок")]
    NoValidSplit { total_bits: u32 },

    #[error("{len} значений нельзя разбить на {block_count} равных блоков")]
    BlockCountMismatch { len: usize, block_count: usize },

    #[error("номер блока {0} не помещается в 16 бит")]
    TooManyBlocks(usize),

    #[error("слишком много уникальных значений свойств: {0}")]
    TooManyValues(usize),

    #[error("слишком много скриптов: {0}")]
    TooManyScripts(usize),

    #[error("плоскость {plane} ({start:04X}..{end:04X}) выходит за пределы данных ({len})")]
    PlaneBounds {
        plane: &'static str,
        start: u32,
        end: u32,
        len: usize,
    },

    #[error("записей о кодпоинтах {records}, упакованных значений {packed}")]
    LengthMismatch { records: usize, packed: usize },

    #[error("U+{0:04X}: отмечено большое смещение регистра, но нет соответствующей буквы")]
    MissingCaseTarget(u32),

    #[error("упакованное значение {0:#X} не найдено среди уникальных")]
    NotInterned(u32),

    #[error("не удалось записать {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Source(#[from] PropertiesError),
}
