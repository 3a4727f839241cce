use super::{data_lines, fields, parse_range, record_mut};
use crate::error::PropertiesError;
use crate::record::CharacterRecord;

/// разбор файла с двоичными свойствами (PropList.txt, DerivedCoreProperties.txt):
/// строки вида `0041..005A ; ID_Start`
///
/// учитываются White_Space, Ideographic, Other_Lowercase, Other_Uppercase,
/// ID_Start, ID_Continue, XID_Start, XID_Continue. остальные свойства, а также строки
/// со значением свойства (`InCB; Linker`) пропускаются. возвращает количество отмеченных кодпоинтов
pub fn parse(
    text: &str,
    file: &'static str,
    records: &mut [CharacterRecord],
) -> Result<usize, PropertiesError>
{
    let mut count = 0;

    for (line, data) in data_lines(text) {
        count += parse_line(data, records).map_err(|e| e.at(file, line))?;
    }

    Ok(count)
}

fn parse_line(data: &str, records: &mut [CharacterRecord]) -> Result<usize, PropertiesError>
{
    let props = fields(data);

    if props.len() != 2 {
        return Ok(0);
    }

    let range = parse_range(props[0])?;

    let set: fn(&mut CharacterRecord) = match props[1] {
        "White_Space" => |r| r.white_space = true,
        "Ideographic" => |r| r.ideographic = true,
        "Other_Lowercase" => |r| r.other_lowercase = true,
        "Other_Uppercase" => |r| r.other_uppercase = true,
        "ID_Start" => |r| r.id_start = true,
        "ID_Continue" => |r| r.id_continue = true,
        "XID_Start" => |r| r.xid_start = true,
        "XID_Continue" => |r| r.xid_continue = true,
        _ => return Ok(0),
    };

    let count = range.clone().count();

    for code in range {
        set(record_mut(records, code)?);
    }

    Ok(count)
}
