//! быстрые проверки для U+0000 ..= U+007F, без обращения к таблицам

#[inline(always)]
pub fn is_upper(code: u32) -> bool
{
    matches!(code, 0x41 ..= 0x5A)
}

#[inline(always)]
pub fn is_lower(code: u32) -> bool
{
    matches!(code, 0x61 ..= 0x7A)
}

#[inline(always)]
pub fn is_letter(code: u32) -> bool
{
    // у ASCII строчная и прописная буква различаются только битом 0x20
    matches!(code | 0x20, 0x61 ..= 0x7A)
}

#[inline(always)]
pub fn is_digit(code: u32) -> bool
{
    matches!(code, 0x30 ..= 0x39)
}

#[inline(always)]
pub fn is_letter_or_digit(code: u32) -> bool
{
    is_letter(code) || is_digit(code)
}

/// White_Space: \t \n \v \f \r и пробел
#[inline(always)]
pub fn is_whitespace(code: u32) -> bool
{
    matches!(code, 0x09 ..= 0x0D | 0x20)
}

/// разделитель (Zs): единственный в ASCII - пробел
#[inline(always)]
pub fn is_space_char(code: u32) -> bool
{
    code == 0x20
}

/// символы, которые игнорируются в идентификаторах
#[inline(always)]
pub fn is_identifier_ignorable(code: u32) -> bool
{
    matches!(code, 0x00 ..= 0x08 | 0x0E ..= 0x1B | 0x7F)
}

#[inline(always)]
pub fn is_unicode_identifier_start(code: u32) -> bool
{
    is_letter(code)
}

#[inline(always)]
pub fn is_unicode_identifier_part(code: u32) -> bool
{
    is_letter_or_digit(code) || code == 0x5F
}

/// буква, $ или _
#[inline(always)]
pub fn is_java_identifier_start(code: u32) -> bool
{
    is_letter(code) || code == 0x24 || code == 0x5F
}

#[inline(always)]
pub fn is_java_identifier_part(code: u32) -> bool
{
    is_java_identifier_start(code) || is_digit(code) || is_identifier_ignorable(code)
}

#[inline(always)]
pub fn to_lower(code: u32) -> u32
{
    match is_upper(code) {
        true => code | 0x20,
        false => code,
    }
}

#[inline(always)]
pub fn to_upper(code: u32) -> u32
{
    match is_lower(code) {
        true => code & !0x20,
        false => code,
    }
}
