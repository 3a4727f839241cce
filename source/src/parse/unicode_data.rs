use unicode_properties::GeneralCategory;

use super::{data_lines, fields, parse_code, record_mut};
use crate::error::PropertiesError;
use crate::record::CharacterRecord;

const FILE: &str = "UnicodeData.txt";

/// разбор UnicodeData.txt: категория и простые преобразования регистра
///
/// пары строк вида `<CJK Ideograph, First>` / `<CJK Ideograph, Last>` задают диапазон,
/// всем кодпоинтам которого назначается категория первой строки
pub fn parse(text: &str, records: &mut [CharacterRecord]) -> Result<usize, PropertiesError>
{
    let mut range_start: Option<u32> = None;
    let mut count = 0;

    for (line, data) in data_lines(text) {
        parse_line(data, records, &mut range_start, &mut count).map_err(|e| e.at(FILE, line))?;
    }

    if let Some(start) = range_start {
        return Err(PropertiesError::MalformedLine {
            file: FILE,
            line: 0,
            message: format!("диапазон, начатый на {:04X}, не закрыт", start),
        });
    }

    Ok(count)
}

fn parse_line(
    data: &str,
    records: &mut [CharacterRecord],
    range_start: &mut Option<u32>,
    count: &mut usize,
) -> Result<(), PropertiesError>
{
    let props = fields(data);

    if props.len() != 15 {
        return Err(PropertiesError::UnknownPropertyValue(format!(
            "ожидается 15 полей, получено {}",
            props.len()
        )));
    }

    let code = parse_code(props[0])?;
    let name = props[1];
    let category = GeneralCategory::try_from(props[2])?;

    // связанные символы в другом регистре (если есть)
    let simple_uppercase = parse_mapping(props[12])?;
    let simple_lowercase = parse_mapping(props[13])?;

    if name.ends_with(", First>") {
        *range_start = Some(code);

        return Ok(());
    }

    if name.ends_with(", Last>") {
        let start = match range_start.take() {
            Some(start) => start,
            None => {
                return Err(PropertiesError::UnknownPropertyValue(format!(
                    "конец диапазона {:04X} без начала",
                    code
                )))
            }
        };

        if start > code {
            return Err(PropertiesError::InvalidRange { start, end: code });
        }

        for code in start ..= code {
            record_mut(records, code)?.category = category;
        }

        *count += (code - start + 1) as usize;

        return Ok(());
    }

    let record = record_mut(records, code)?;

    record.category = category;
    record.simple_uppercase = simple_uppercase;
    record.simple_lowercase = simple_lowercase;

    *count += 1;

    Ok(())
}

/// Simple_Uppercase_Mapping / Simple_Lowercase_Mapping: пустое поле или один кодпоинт
fn parse_mapping(value: &str) -> Result<Option<u32>, PropertiesError>
{
    match value.is_empty() {
        true => Ok(None),
        false => parse_code(value).map(Some),
    }
}
