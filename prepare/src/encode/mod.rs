use unicode_properties::packed::*;
use unicode_properties_source::CharacterRecord;

/// как записать простое преобразование регистра в упакованное значение
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedCase
{
    /// преобразования нет
    None,
    /// смещение помещается в 10 бит
    Packed { delta: i32, to_lower: bool },
    /// смещение к строчной не помещается, записываем в таблицу смещений
    LargeLowercase(i32),
    /// смещение к прописной не помещается, записываем в таблицу смещений
    LargeUppercase(i32),
}

impl EncodedCase
{
    /// смещение к парной букве. при наличии обоих преобразований приоритет у строчной
    pub fn of(record: &CharacterRecord) -> Self
    {
        let (delta, to_lower) = match (record.simple_lowercase, record.simple_uppercase) {
            (Some(lower), _) => (lower as i32 - record.code as i32, true),
            (None, Some(upper)) => (upper as i32 - record.code as i32, false),
            (None, None) => return Self::None,
        };

        match delta {
            0 => Self::None,
            MIN_PACKED_DELTA ..= MAX_PACKED_DELTA => Self::Packed { delta, to_lower },
            _ => match to_lower {
                true => Self::LargeLowercase(delta),
                false => Self::LargeUppercase(delta),
            },
        }
    }

    /// биты 0 - 10, 24, 25 упакованного значения
    pub fn bits(self) -> u32
    {
        match self {
            Self::None => 0,
            Self::Packed { delta, to_lower } => {
                let direction = match to_lower {
                    true => DELTA_TO_LOWER,
                    false => 0,
                };

                (delta as u32 & DELTA_MASK) | direction
            }
            Self::LargeLowercase(_) => LARGE_LOWERCASE_DELTA,
            Self::LargeUppercase(_) => LARGE_UPPERCASE_DELTA,
        }
    }
}

/// упаковать свойства кодпоинта в 32-битное значение
pub fn pack(record: &CharacterRecord) -> u32
{
    let flags = [
        (record.other_uppercase, OTHER_UPPERCASE),
        (record.other_lowercase, OTHER_LOWERCASE),
        (record.white_space, WHITE_SPACE),
        (record.ideographic, IDEOGRAPHIC),
        (record.id_start, ID_START),
        (record.id_continue, ID_CONTINUE),
        (record.is_java_identifier_start, JAVA_IDENTIFIER_START),
        (record.is_java_identifier_part, JAVA_IDENTIFIER_PART),
    ]
    .iter()
    .filter(|(is_set, _)| *is_set)
    .fold(0, |flags, (_, bit)| flags | bit);

    EncodedCase::of(record).bits() | record.category.code() << CATEGORY_SHIFT | flags
}

/// упаковать свойства всех кодпоинтов
pub fn pack_all(records: &[CharacterRecord]) -> Vec<u32>
{
    records.iter().map(pack).collect()
}
