pub use category::GeneralCategory;
pub use data::BlockData;
pub use data::CharacterData;
pub use data::Interned;
pub use data::LookupTable;
pub use data::PlaneData;
pub use data::RangeValue;
pub use data::ScriptData;
pub use data::ScriptPlaneData;
pub use data::UnicodeData;
pub use packed::PackedProperty;
pub use planes::PlaneDescriptor;
pub use search::find_in_ranges;

mod ascii;
pub mod category;
mod data;
pub mod packed;
pub mod planes;
mod search;
pub mod utf16;

use packed::*;
use planes::LATIN1_END;
use planes::MAX_CODE_POINT;
use planes::PLANES;

/// название скрипта с идентификатором 0
pub const UNKNOWN_SCRIPT: &str = "Unknown";

/// титульные диграфы, прописная пара которых предшествует им: Ǆ ǅ ǆ, Ǉ ǈ ǉ, Ǌ ǋ ǌ, Ǳ ǲ ǳ
pub const TITLECASE_DIGRAPHS: [u32; 4] = [0x01C5, 0x01C8, 0x01CB, 0x01F2];

/// скрипт кодпоинта: идентификатор, равный позиции названия в списке скриптов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Script
{
    pub id: u8,
}

impl Script
{
    pub const UNKNOWN: Self = Self { id: 0 };
}

/// свойства символов Unicode: классификация, простое преобразование регистра, скрипты
///
/// все запросы принимают кодпоинт как u32. значения за пределами U+10FFFF (в том числе
/// отрицательные числа, приведённые к u32) считаются неназначенными: предикаты возвращают false,
/// преобразования регистра - исходное значение, скрипт - Unknown
#[derive(Debug, Clone, Copy)]
pub struct UnicodeProperties<'a, N = &'a str>
{
    characters: CharacterData<'a>,
    scripts: ScriptData<'a, N>,
}

impl<'a, N: AsRef<str>> UnicodeProperties<'a, N>
{
    /// заранее подготовленные данные
    pub fn from_baked(source: UnicodeData<'a, N>) -> Self
    {
        Self {
            characters: source.characters,
            scripts: source.scripts,
        }
    }

    /// упакованные свойства кодпоинта
    #[inline(always)]
    pub fn packed(&self, code: u32) -> PackedProperty
    {
        if code <= LATIN1_END {
            return self.value(self.characters.latin1.get(code as usize));
        }

        if code > MAX_CODE_POINT {
            return PackedProperty::EMPTY;
        }

        let plane = planes::plane_index(code);
        let offset = code - PLANES[plane].start;

        match &self.characters.planes[plane] {
            PlaneData::Table(table) => self.value(table.get(offset)),
            PlaneData::Ranges(ranges) => PackedProperty(find_in_ranges(ranges, offset)),
        }
    }

    #[inline(always)]
    fn value(&self, index: usize) -> PackedProperty
    {
        PackedProperty(self.characters.values[index])
    }

    /// основная категория
    #[inline]
    pub fn general_category(&self, code: u32) -> GeneralCategory
    {
        self.packed(code).category()
    }

    /// буква (L)
    #[inline]
    pub fn is_letter(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return ascii::is_letter(code);
        }

        (1 << self.packed(code).category_code()) & category::LETTER_MASK != 0
    }

    /// десятичная цифра (Nd)
    #[inline]
    pub fn is_digit(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return ascii::is_digit(code);
        }

        self.packed(code).category() == GeneralCategory::DecimalNumber
    }

    #[inline]
    pub fn is_letter_or_digit(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return ascii::is_letter_or_digit(code);
        }

        (1 << self.packed(code).category_code()) & category::LETTER_OR_DIGIT_MASK != 0
    }

    /// Lu или Other_Uppercase
    #[inline]
    pub fn is_upper_case(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return ascii::is_upper(code);
        }

        let packed = self.packed(code);

        packed.category() == GeneralCategory::UppercaseLetter || packed.has(OTHER_UPPERCASE)
    }

    /// Ll или Other_Lowercase
    #[inline]
    pub fn is_lower_case(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return ascii::is_lower(code);
        }

        let packed = self.packed(code);

        packed.category() == GeneralCategory::LowercaseLetter || packed.has(OTHER_LOWERCASE)
    }

    /// Lt
    #[inline]
    pub fn is_title_case(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return false;
        }

        self.packed(code).category() == GeneralCategory::TitlecaseLetter
    }

    /// простое преобразование в строчную букву
    #[inline]
    pub fn to_lower_case(&self, code: u32) -> u32
    {
        if code < 0x80 {
            return ascii::to_lower(code);
        }

        let packed = self.packed(code);

        if packed.has(LARGE_LOWERCASE_DELTA) {
            return apply_delta(code, find_in_ranges(self.characters.lowercase_deltas, code));
        }

        apply_delta(code, packed.lower_delta())
    }

    /// свёртка регистра для сравнения без учёта регистра. совпадает с простым преобразованием
    /// в строчную букву: отдельной таблицы свёртки нет
    #[inline]
    pub fn to_case_folded(&self, code: u32) -> u32
    {
        self.to_lower_case(code)
    }

    /// простое преобразование в прописную букву
    #[inline]
    pub fn to_upper_case(&self, code: u32) -> u32
    {
        if code < 0x80 {
            return ascii::to_upper(code);
        }

        let packed = self.packed(code);

        // в упакованном значении титульного диграфа записано смещение к строчной паре
        if packed.category() == GeneralCategory::TitlecaseLetter {
            return match TITLECASE_DIGRAPHS.contains(&code) {
                true => code - 1,
                false => code,
            };
        }

        if packed.has(LARGE_UPPERCASE_DELTA) {
            return apply_delta(code, find_in_ranges(self.characters.uppercase_deltas, code));
        }

        apply_delta(code, packed.upper_delta())
    }

    /// разделитель (Zs, Zl, Zp)
    #[inline]
    pub fn is_space_char(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return ascii::is_space_char(code);
        }

        (1 << self.packed(code).category_code()) & category::SPACE_CHAR_MASK != 0
    }

    /// White_Space
    #[inline]
    pub fn is_whitespace(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return ascii::is_whitespace(code);
        }

        self.packed(code).has(WHITE_SPACE)
    }

    /// Ideographic
    #[inline]
    pub fn is_ideographic(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return false;
        }

        self.packed(code).has(IDEOGRAPHIC)
    }

    /// управляющие символы, кроме пробельных, и символы форматирования (Cf)
    #[inline]
    pub fn is_identifier_ignorable(&self, code: u32) -> bool
    {
        if matches!(code, 0x00 ..= 0x08 | 0x0E ..= 0x1B | 0x7F ..= 0x9F) {
            return true;
        }

        if code < 0x80 {
            return false;
        }

        self.packed(code).category() == GeneralCategory::Format
    }

    /// ID_Start
    #[inline]
    pub fn is_unicode_identifier_start(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return ascii::is_unicode_identifier_start(code);
        }

        self.packed(code).has(ID_START)
    }

    /// ID_Continue
    #[inline]
    pub fn is_unicode_identifier_part(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return ascii::is_unicode_identifier_part(code);
        }

        self.packed(code).has(ID_CONTINUE)
    }

    /// может начинать идентификатор Java: буква, Nl, Sc, Pc
    #[inline]
    pub fn is_java_identifier_start(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return ascii::is_java_identifier_start(code);
        }

        self.packed(code).has(JAVA_IDENTIFIER_START)
    }

    /// может быть частью идентификатора Java
    #[inline]
    pub fn is_java_identifier_part(&self, code: u32) -> bool
    {
        if code < 0x80 {
            return ascii::is_java_identifier_part(code);
        }

        self.packed(code).has(JAVA_IDENTIFIER_PART)
    }

    /// управляющие символы C0 и C1, без обращения к таблицам
    #[inline]
    pub fn is_iso_control(&self, code: u32) -> bool
    {
        matches!(code, 0x00 ..= 0x1F | 0x7F ..= 0x9F)
    }

    /// скрипт кодпоинта
    #[inline]
    pub fn script(&self, code: u32) -> Script
    {
        if code <= LATIN1_END {
            return Script {
                id: self.scripts.latin1[code as usize],
            };
        }

        if code > MAX_CODE_POINT {
            return Script::UNKNOWN;
        }

        let plane = planes::plane_index(code);
        let offset = code - PLANES[plane].start;

        let id = match &self.scripts.planes[plane] {
            ScriptPlaneData::Table(table) => table.get(offset) as u8,
            ScriptPlaneData::Ranges(ranges) => find_in_ranges(ranges, offset),
        };

        Script { id }
    }

    /// название скрипта, например "Latin". для неизвестного идентификатора - "Unknown"
    #[inline]
    pub fn script_name(&self, script: Script) -> &str
    {
        match self.scripts.names.get(script.id as usize) {
            Some(name) => name.as_ref(),
            None => UNKNOWN_SCRIPT,
        }
    }

    /// количество известных скриптов, включая Unknown
    pub fn scripts_count(&self) -> usize
    {
        self.scripts.names.len()
    }
}

/// прибавить смещение к кодпоинту
#[inline(always)]
fn apply_delta(code: u32, delta: i32) -> u32
{
    code.wrapping_add(delta as u32)
}
