//! кодпоинты в UTF-16: суррогатные пары и обход последовательности кодовых единиц

/// первый кодпоинт за пределами BMP
pub const MIN_SUPPLEMENTARY_CODE_POINT: u32 = 0x10000;

pub const MIN_HIGH_SURROGATE: u16 = 0xD800;
pub const MAX_HIGH_SURROGATE: u16 = 0xDBFF;
pub const MIN_LOW_SURROGATE: u16 = 0xDC00;
pub const MAX_LOW_SURROGATE: u16 = 0xDFFF;

/// ((high - 0xD800) << 10) + (low - 0xDC00) + 0x10000, одним слагаемым
const SURROGATE_OFFSET: u32 = MIN_SUPPLEMENTARY_CODE_POINT
    .wrapping_sub((MIN_HIGH_SURROGATE as u32) << 10)
    .wrapping_sub(MIN_LOW_SURROGATE as u32);

/// кодпоинт помещается в одну кодовую единицу UTF-16
#[inline(always)]
pub fn is_bmp_code_point(code: u32) -> bool
{
    code >> 16 == 0
}

/// количество кодовых единиц UTF-16, необходимое для записи кодпоинта
#[inline(always)]
pub fn char_count(code: u32) -> usize
{
    match code >= MIN_SUPPLEMENTARY_CODE_POINT {
        true => 2,
        false => 1,
    }
}

#[inline(always)]
pub fn is_high_surrogate(unit: u16) -> bool
{
    matches!(unit, MIN_HIGH_SURROGATE ..= MAX_HIGH_SURROGATE)
}

#[inline(always)]
pub fn is_low_surrogate(unit: u16) -> bool
{
    matches!(unit, MIN_LOW_SURROGATE ..= MAX_LOW_SURROGATE)
}

#[inline(always)]
pub fn is_surrogate(unit: u16) -> bool
{
    matches!(unit, MIN_HIGH_SURROGATE ..= MAX_LOW_SURROGATE)
}

/// кодпоинт из суррогатной пары. корректность пары не проверяется
#[inline(always)]
pub fn from_surrogates(high: u16, low: u16) -> u32
{
    ((high as u32) << 10).wrapping_add(low as u32).wrapping_add(SURROGATE_OFFSET)
}

/// старшая часть суррогатной пары для кодпоинта вне BMP
#[inline(always)]
pub fn high_surrogate(code: u32) -> u16
{
    ((code >> 10) + (MIN_HIGH_SURROGATE as u32 - (MIN_SUPPLEMENTARY_CODE_POINT >> 10))) as u16
}

/// младшая часть суррогатной пары для кодпоинта вне BMP
#[inline(always)]
pub fn low_surrogate(code: u32) -> u16
{
    ((code & 0x3FF) + MIN_LOW_SURROGATE as u32) as u16
}

/// запись кодпоинта в UTF-16: кодовые единицы и их количество.
/// для кодпоинтов вне BMP - суррогатная пара, корректность кодпоинта не проверяется
#[inline]
pub fn encode(code: u32) -> ([u16; 2], usize)
{
    match is_bmp_code_point(code) {
        true => ([code as u16, 0], 1),
        false => ([high_surrogate(code), low_surrogate(code)], 2),
    }
}

/// дописать кодпоинт в конец последовательности UTF-16
#[inline]
pub fn append_code_point(output: &mut Vec<u16>, code: u32)
{
    let (units, len) = encode(code);

    output.extend_from_slice(&units[.. len]);
}

/// кодпоинт, начинающийся с позиции index. непарный суррогат возвращается как есть
#[inline]
pub fn code_point_at(units: &[u16], index: usize) -> Option<u32>
{
    let high = *units.get(index)?;

    if is_high_surrogate(high) {
        if let Some(&low) = units.get(index + 1) {
            if is_low_surrogate(low) {
                return Some(from_surrogates(high, low));
            }
        }
    }

    Some(high as u32)
}

/// кодпоинт, заканчивающийся перед позицией index (1 ..= units.len())
#[inline]
pub fn code_point_before(units: &[u16], index: usize) -> Option<u32>
{
    if index == 0 || index > units.len() {
        return None;
    }

    let low = units[index - 1];

    if is_low_surrogate(low) && index > 1 {
        let high = units[index - 2];

        if is_high_surrogate(high) {
            return Some(from_surrogates(high, low));
        }
    }

    Some(low as u32)
}

/// итератор по кодпоинтам последовательности UTF-16 в обоих направлениях
#[derive(Debug, Clone)]
pub struct CodePoints<'a>
{
    units: &'a [u16],
}

impl<'a> CodePoints<'a>
{
    pub fn new(units: &'a [u16]) -> Self
    {
        Self { units }
    }

    /// ещё не прочитанная часть последовательности
    pub fn as_slice(&self) -> &'a [u16]
    {
        self.units
    }
}

impl<'a> Iterator for CodePoints<'a>
{
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        let code = code_point_at(self.units, 0)?;
        self.units = &self.units[char_count(code) ..];

        Some(code)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        ((self.units.len() + 1) / 2, Some(self.units.len()))
    }
}

impl<'a> DoubleEndedIterator for CodePoints<'a>
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item>
    {
        let code = code_point_before(self.units, self.units.len())?;
        self.units = &self.units[.. self.units.len() - char_count(code)];

        Some(code)
    }
}

impl<'a> core::iter::FusedIterator for CodePoints<'a> {}
