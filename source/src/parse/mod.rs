use std::ops::RangeInclusive;

use unicode_properties::planes::MAX_CODE_POINT;

use crate::error::PropertiesError;
use crate::record::CharacterRecord;

pub mod binary_properties;
pub mod case_folding;
pub mod scripts;
pub mod special_casing;
pub mod unicode_data;

/// непустые строки файла UCD без комментариев, вместе с номерами строк (с единицы)
pub(crate) fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)>
{
    text.lines().enumerate().filter_map(|(number, line)| {
        let data = match line.find('#') {
            Some(position) => &line[.. position],
            None => line,
        };

        match data.trim().is_empty() {
            true => None,
            false => Some((number + 1, data)),
        }
    })
}

/// поля строки, разделённые ';', без пробелов по краям
pub(crate) fn fields(data: &str) -> Vec<&str>
{
    data.split(';').map(str::trim).collect()
}

/// кодпоинт в шестнадцатеричной записи, например 1F600
pub fn parse_code(value: &str) -> Result<u32, PropertiesError>
{
    let value = value.trim();

    match u32::from_str_radix(value, 16) {
        Ok(code) if code <= MAX_CODE_POINT && !value.is_empty() => Ok(code),
        _ => Err(PropertiesError::InvalidCodePoint(value.to_owned())),
    }
}

/// кодпоинт (0041) или диапазон (0041..005A)
pub fn parse_range(value: &str) -> Result<RangeInclusive<u32>, PropertiesError>
{
    let (start, end) = match value.split_once("..") {
        Some((start, end)) => (parse_code(start)?, parse_code(end)?),
        None => {
            let code = parse_code(value)?;
            (code, code)
        }
    };

    if start > end {
        return Err(PropertiesError::InvalidRange { start, end });
    }

    Ok(start ..= end)
}

/// последовательность кодпоинтов через пробел, может быть пустой
pub fn parse_code_list(value: &str) -> Result<Vec<u32>, PropertiesError>
{
    value.split_whitespace().map(parse_code).collect()
}

/// запись о кодпоинте
pub(crate) fn record_mut(
    records: &mut [CharacterRecord],
    code: u32,
) -> Result<&mut CharacterRecord, PropertiesError>
{
    records
        .get_mut(code as usize)
        .ok_or_else(|| PropertiesError::InvalidCodePoint(format!("{:04X}", code)))
}
