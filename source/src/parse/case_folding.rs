use super::{data_lines, fields, parse_code, parse_code_list, record_mut};
use crate::error::PropertiesError;
use crate::record::CharacterRecord;

const FILE: &str = "CaseFolding.txt";

/// разбор CaseFolding.txt: `<код>; <статус>; <свёртка>;`
///
///   C, S - простая свёртка, один кодпоинт
///   F - полная свёртка в несколько кодпоинтов, отмечаем как особый случай
///   T - свёртка для тюркских языков, не учитывается
pub fn parse(text: &str, records: &mut [CharacterRecord]) -> Result<(), PropertiesError>
{
    for (line, data) in data_lines(text) {
        parse_line(data, records).map_err(|e| e.at(FILE, line))?;
    }

    Ok(())
}

fn parse_line(data: &str, records: &mut [CharacterRecord]) -> Result<(), PropertiesError>
{
    let props = fields(data);

    if props.len() < 3 {
        return Err(PropertiesError::UnknownPropertyValue(data.trim().to_owned()));
    }

    let code = parse_code(props[0])?;

    match props[1] {
        "C" | "S" => record_mut(records, code)?.simple_case_folding = Some(parse_code(props[2])?),
        "F" => {
            parse_code_list(props[2])?;
            record_mut(records, code)?.has_special_casing = true;
        }
        "T" => (),
        status => return Err(PropertiesError::UnknownPropertyValue(status.to_owned())),
    }

    Ok(())
}
