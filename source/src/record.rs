use unicode_properties::GeneralCategory;
use unicode_properties::GeneralCategory::*;

/// свойства кодпоинта, собранные из файлов UCD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord
{
    /// код символа
    pub code: u32,
    /// основная категория
    pub category: GeneralCategory,
    /// соответствующая прописная буква (Simple_Uppercase_Mapping)
    pub simple_uppercase: Option<u32>,
    /// соответствующая строчная буква (Simple_Lowercase_Mapping)
    pub simple_lowercase: Option<u32>,
    /// простая свёртка регистра (CaseFolding.txt, статусы C и S)
    pub simple_case_folding: Option<u32>,

    pub id_start: bool,
    pub id_continue: bool,
    pub xid_start: bool,
    pub xid_continue: bool,
    pub white_space: bool,
    pub ideographic: bool,
    pub other_lowercase: bool,
    pub other_uppercase: bool,
    /// есть преобразование регистра в несколько кодпоинтов (SpecialCasing.txt, свёртка F)
    pub has_special_casing: bool,

    // вычисляются из категории и свойств выше, см. derive_properties
    pub is_letter: bool,
    pub is_digit: bool,
    pub is_upper_case: bool,
    pub is_lower_case: bool,
    pub is_title_case: bool,
    pub is_space_char: bool,
    pub is_control: bool,
    pub is_format: bool,
    pub is_identifier_ignorable: bool,
    pub is_java_identifier_start: bool,
    pub is_java_identifier_part: bool,
}

impl CharacterRecord
{
    /// кодпоинт без записи в UCD: Cn, никаких свойств
    pub fn new(code: u32) -> Self
    {
        Self {
            code,
            category: Unassigned,
            simple_uppercase: None,
            simple_lowercase: None,
            simple_case_folding: None,
            id_start: false,
            id_continue: false,
            xid_start: false,
            xid_continue: false,
            white_space: false,
            ideographic: false,
            other_lowercase: false,
            other_uppercase: false,
            has_special_casing: false,
            is_letter: false,
            is_digit: false,
            is_upper_case: false,
            is_lower_case: false,
            is_title_case: false,
            is_space_char: false,
            is_control: false,
            is_format: false,
            is_identifier_ignorable: false,
            is_java_identifier_start: false,
            is_java_identifier_part: false,
        }
    }

    /// вычислить производные свойства после разбора всех файлов
    pub fn derive_properties(&mut self)
    {
        let category = self.category;

        self.is_letter = category.is_letter();
        self.is_digit = category == DecimalNumber;
        self.is_upper_case = category == UppercaseLetter || self.other_uppercase;
        self.is_lower_case = category == LowercaseLetter || self.other_lowercase;
        self.is_title_case = category == TitlecaseLetter;
        self.is_space_char = category.is_separator();
        self.is_control = category == Control;
        self.is_format = category == Format;

        self.is_identifier_ignorable =
            matches!(self.code, 0x00 ..= 0x08 | 0x0E ..= 0x1B | 0x7F ..= 0x9F) || self.is_format;

        // правила идентификаторов Java
        self.is_java_identifier_start = self.is_letter
            || matches!(category, LetterNumber | CurrencySymbol | ConnectorPunctuation);

        self.is_java_identifier_part = self.is_java_identifier_start
            || matches!(category, DecimalNumber | NonspacingMark | SpacingMark)
            || self.is_identifier_ignorable;
    }

    /// есть простое преобразование регистра
    pub fn has_case_mapping(&self) -> bool
    {
        self.simple_lowercase.is_some() || self.simple_uppercase.is_some()
    }
}
