use std::path::PathBuf;

use thiserror::Error;
use unicode_properties::category::UnknownCategory;

/// ошибки разбора файлов UCD
#[derive(Debug, Error)]
pub enum PropertiesError
{
    #[error("неизвестное значение свойства: {0:?}")]
    UnknownPropertyValue(String),

    #[error("некорректный кодпоинт: {0:?}")]
    InvalidCodePoint(String),

    #[error("некорректный диапазон: {start:04X}..{end:04X}")]
    InvalidRange { start: u32, end: u32 },

    #[error("{file}, строка {line}: {message}")]
    MalformedLine {
        file: &'static str,
        line: usize,
        message: String,
    },

    #[error("не удалось прочитать {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<UnknownCategory> for PropertiesError
{
    fn from(value: UnknownCategory) -> Self
    {
        Self::UnknownPropertyValue(value.0)
    }
}

impl PropertiesError
{
    /// привязать ошибку разбора к строке файла
    pub(crate) fn at(self, file: &'static str, line: usize) -> Self
    {
        match self {
            Self::MalformedLine { .. } | Self::Io { .. } => self,
            _ => Self::MalformedLine {
                file,
                line,
                message: self.to_string(),
            },
        }
    }
}
