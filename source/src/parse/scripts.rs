use std::collections::HashMap;

use super::{data_lines, fields, parse_range};
use crate::error::PropertiesError;

const FILE: &str = "Scripts.txt";

/// разбор Scripts.txt: `0041..005A ; Latin`. кодпоинты, не упомянутые в файле, относятся к Unknown
pub fn parse(text: &str) -> Result<HashMap<u32, String>, PropertiesError>
{
    let mut scripts = HashMap::new();

    for (line, data) in data_lines(text) {
        parse_line(data, &mut scripts).map_err(|e| e.at(FILE, line))?;
    }

    Ok(scripts)
}

fn parse_line(data: &str, scripts: &mut HashMap<u32, String>) -> Result<(), PropertiesError>
{
    let props = fields(data);

    if props.len() != 2 || props[1].is_empty() {
        return Err(PropertiesError::UnknownPropertyValue(data.trim().to_owned()));
    }

    for code in parse_range(props[0])? {
        scripts.insert(code, props[1].to_owned());
    }

    Ok(())
}
