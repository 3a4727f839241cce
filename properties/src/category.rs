/// основная категория символа (General Category, GC)
/// берется из UCD: вторая колонка UnicodeData.txt
///
/// 30 вариантов, код категории занимает 5 бит упакованного значения (биты 11 - 15).
/// порядок вариантов - часть формата таблиц: генератор и декодер должны использовать одни и те же коды
///
/// общие категории:
///     L (Lu, Ll, Lt, Lm, Lo) - буквы, коды 1 - 5
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом.
    /// дефолтный вариант при отсутствии записи о символе в UCD
    Unassigned = 0,

    /// Lu - прописная буква
    UppercaseLetter = 1,
    /// Ll - строчная буква
    LowercaseLetter = 2,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 3,
    /// Lm - буква-модификатор
    ModifierLetter = 4,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 5,

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark = 6,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 7,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 8,

    /// Nd - десятичная цифра
    DecimalNumber = 9,
    /// Nl - буквоподобный числовой символ
    LetterNumber = 10,
    /// No - прочие числовые символы
    OtherNumber = 11,

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation = 12,
    /// Pd - тире или дефис как знак препинания
    DashPunctuation = 13,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 14,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 15,
    /// Pi - начальный знак цитаты
    InitialPunctuation = 16,
    /// Pf - конечный знак цитаты
    FinalPunctuation = 17,
    /// Po - знак препинания другого типа
    OtherPunctuation = 18,

    /// Sm - математический символ
    MathSymbol = 19,
    /// Sc - символ валюты
    CurrencySymbol = 20,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 21,
    /// So - прочие символы
    OtherSymbol = 22,

    /// Zs - разделитель-пробел
    SpaceSeparator = 23,
    /// Zl - разделитель строки
    LineSeparator = 24,
    /// Zp - разделитель параграфов
    ParagraphSeparator = 25,

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 26,
    /// Cf - управляющий символ форматирования
    Format = 27,
    /// Cs - символ-суррогат
    Surrogate = 28,
    /// Co - символ для приватного использования
    PrivateUse = 29,
}

use GeneralCategory::*;

/// категории по их кодам. коды 30, 31 в данных не встречаются, но декодируются как Cn
const BY_CODE: [GeneralCategory; 32] = [
    Unassigned,
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
    NonspacingMark,
    SpacingMark,
    EnclosingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    ConnectorPunctuation,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    InitialPunctuation,
    FinalPunctuation,
    OtherPunctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,
    Control,
    Format,
    Surrogate,
    PrivateUse,
    Unassigned,
    Unassigned,
];

/// маска категорий L
pub const LETTER_MASK: u32 = 1 << UppercaseLetter as u32
    | 1 << LowercaseLetter as u32
    | 1 << TitlecaseLetter as u32
    | 1 << ModifierLetter as u32
    | 1 << OtherLetter as u32;

/// маска категорий L + Nd
pub const LETTER_OR_DIGIT_MASK: u32 = LETTER_MASK | 1 << DecimalNumber as u32;

/// маска категорий Z
pub const SPACE_CHAR_MASK: u32 =
    1 << SpaceSeparator as u32 | 1 << LineSeparator as u32 | 1 << ParagraphSeparator as u32;

impl GeneralCategory
{
    /// категория по 5-битному коду из упакованного значения
    #[inline(always)]
    pub fn from_code(code: u32) -> Self
    {
        BY_CODE[(code & 0x1F) as usize]
    }

    /// код категории
    #[inline(always)]
    pub fn code(self) -> u32
    {
        self as u32
    }

    /// относится-ли категория к буквам (L)
    #[inline]
    pub fn is_letter(self) -> bool
    {
        (1 << self.code()) & LETTER_MASK != 0
    }

    /// относится-ли категория к разделителям (Z)
    #[inline]
    pub fn is_separator(self) -> bool
    {
        (1 << self.code()) & SPACE_CHAR_MASK != 0
    }

    /// двухбуквенное обозначение категории, как в UCD
    pub fn abbr(self) -> &'static str
    {
        match self {
            Unassigned => "Cn",
            UppercaseLetter => "Lu",
            LowercaseLetter => "Ll",
            TitlecaseLetter => "Lt",
            ModifierLetter => "Lm",
            OtherLetter => "Lo",
            NonspacingMark => "Mn",
            SpacingMark => "Mc",
            EnclosingMark => "Me",
            DecimalNumber => "Nd",
            LetterNumber => "Nl",
            OtherNumber => "No",
            ConnectorPunctuation => "Pc",
            DashPunctuation => "Pd",
            OpenPunctuation => "Ps",
            ClosePunctuation => "Pe",
            InitialPunctuation => "Pi",
            FinalPunctuation => "Pf",
            OtherPunctuation => "Po",
            MathSymbol => "Sm",
            CurrencySymbol => "Sc",
            ModifierSymbol => "Sk",
            OtherSymbol => "So",
            SpaceSeparator => "Zs",
            LineSeparator => "Zl",
            ParagraphSeparator => "Zp",
            Control => "Cc",
            Format => "Cf",
            Surrogate => "Cs",
            PrivateUse => "Co",
        }
    }
}

/// неизвестное обозначение категории
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownCategory(pub String);

impl TryFrom<&str> for GeneralCategory
{
    type Error = UnknownCategory;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        match abbr {
            "" => Ok(Unassigned),
            _ => BY_CODE[.. 30]
                .iter()
                .find(|category| category.abbr() == abbr)
                .copied()
                .ok_or_else(|| UnknownCategory(abbr.to_owned())),
        }
    }
}

impl From<GeneralCategory> for u8
{
    #[inline]
    fn from(value: GeneralCategory) -> Self
    {
        value as u8
    }
}
