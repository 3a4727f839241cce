use super::{data_lines, fields, parse_code, parse_code_list, record_mut};
use crate::error::PropertiesError;
use crate::record::CharacterRecord;

const FILE: &str = "SpecialCasing.txt";

/// разбор SpecialCasing.txt: `<код>; <строчные>; <заглавные>; <прописные>; (<условия>;)?`
///
/// безусловные преобразования в несколько кодпоинтов отмечают кодпоинт как особый случай.
/// условные (зависящие от языка или контекста) пропускаются
pub fn parse(text: &str, records: &mut [CharacterRecord]) -> Result<usize, PropertiesError>
{
    let mut count = 0;

    for (line, data) in data_lines(text) {
        if parse_line(data, records).map_err(|e| e.at(FILE, line))? {
            count += 1;
        }
    }

    Ok(count)
}

fn parse_line(data: &str, records: &mut [CharacterRecord]) -> Result<bool, PropertiesError>
{
    let props = fields(data);

    let conditional = match props.len() {
        5 => !props[4].is_empty(),
        6 => true,
        _ => return Err(PropertiesError::UnknownPropertyValue(data.trim().to_owned())),
    };

    let code = parse_code(props[0])?;

    if conditional {
        return Ok(false);
    }

    let lower = parse_code_list(props[1])?;
    let title = parse_code_list(props[2])?;
    let upper = parse_code_list(props[3])?;

    if lower.len() > 1 || title.len() > 1 || upper.len() > 1 {
        record_mut(records, code)?.has_special_casing = true;

        return Ok(true);
    }

    Ok(false)
}
