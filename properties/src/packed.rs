use crate::category::GeneralCategory;

/// маска знакового смещения регистра (биты 0 - 9)
pub const DELTA_MASK: u32 = 0x3FF;
/// смещение указывает на строчную букву (бит 10)
pub const DELTA_TO_LOWER: u32 = 1 << 10;
/// сдвиг кода категории (биты 11 - 15)
pub const CATEGORY_SHIFT: u32 = 11;
/// маска кода категории после сдвига
pub const CATEGORY_MASK: u32 = 0x1F;

pub const OTHER_UPPERCASE: u32 = 1 << 16;
pub const OTHER_LOWERCASE: u32 = 1 << 17;
pub const WHITE_SPACE: u32 = 1 << 18;
pub const IDEOGRAPHIC: u32 = 1 << 19;
pub const ID_START: u32 = 1 << 20;
pub const ID_CONTINUE: u32 = 1 << 21;
/// может начинать идентификатор Java
pub const JAVA_IDENTIFIER_START: u32 = 1 << 22;
/// может быть частью идентификатора Java
pub const JAVA_IDENTIFIER_PART: u32 = 1 << 23;
/// смещение к строчной не помещается в 10 бит, смотрим таблицу смещений
pub const LARGE_LOWERCASE_DELTA: u32 = 1 << 24;
/// смещение к прописной не помещается в 10 бит, смотрим таблицу смещений
pub const LARGE_UPPERCASE_DELTA: u32 = 1 << 25;

/// минимальное смещение, которое помещается в упакованное значение
pub const MIN_PACKED_DELTA: i32 = -512;
/// максимальное смещение, которое помещается в упакованное значение
pub const MAX_PACKED_DELTA: i32 = 511;

/// упакованные свойства кодпоинта:
///
/// ```text
/// 0 ..= 9   знаковое смещение к парной букве (дополнительный код)
/// 10        смещение ведёт к строчной букве
/// 11 ..= 15 код основной категории
/// 16        Other_Uppercase
/// 17        Other_Lowercase
/// 18        White_Space
/// 19        Ideographic
/// 20        ID_Start
/// 21        ID_Continue
/// 22        начало идентификатора Java
/// 23        часть идентификатора Java
/// 24        большое смещение к строчной
/// 25        большое смещение к прописной
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PackedProperty(pub u32);

impl PackedProperty
{
    /// значение по умолчанию: Cn, нет свойств, нет смещений
    pub const EMPTY: Self = Self(0);

    /// знаковое смещение регистра из младших 10 бит
    #[inline(always)]
    pub fn delta(self) -> i32
    {
        ((self.0 & DELTA_MASK) as i32) << 22 >> 22
    }

    /// смещение ведёт к строчной букве
    #[inline(always)]
    pub fn delta_to_lower(self) -> bool
    {
        self.0 & DELTA_TO_LOWER != 0
    }

    /// основная категория
    #[inline(always)]
    pub fn category(self) -> GeneralCategory
    {
        GeneralCategory::from_code(self.category_code())
    }

    /// код основной категории
    #[inline(always)]
    pub fn category_code(self) -> u32
    {
        (self.0 >> CATEGORY_SHIFT) & CATEGORY_MASK
    }

    /// установлен-ли флаг
    #[inline(always)]
    pub fn has(self, flag: u32) -> bool
    {
        self.0 & flag != 0
    }

    /// смещение к строчной, если оно записано в самом значении
    #[inline]
    pub fn lower_delta(self) -> i32
    {
        match self.delta_to_lower() {
            true => self.delta(),
            false => 0,
        }
    }

    /// смещение к прописной, если оно записано в самом значении
    #[inline]
    pub fn upper_delta(self) -> i32
    {
        match self.delta_to_lower() {
            true => 0,
            false => self.delta(),
        }
    }
}

impl From<u32> for PackedProperty
{
    #[inline(always)]
    fn from(value: u32) -> Self
    {
        Self(value)
    }
}

impl From<PackedProperty> for u32
{
    #[inline(always)]
    fn from(value: PackedProperty) -> Self
    {
        value.0
    }
}
