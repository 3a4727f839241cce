use std::collections::HashMap;

use unicode_properties::planes::{PlaneDescriptor, LATIN1_END, MAX_CODE_POINT, PLANES};
use unicode_properties::{LookupTable, ScriptPlaneData, UNKNOWN_SCRIPT};

use super::lookup;
use super::planes::{self, PlaneEncoding, PlaneTable};
use super::ranges;
use crate::error::PrepareError;

/// размер отрезка в байтах: начало, конец, идентификатор скрипта
pub const RANGE_BYTES: usize = 9;

/// плоскость скриптов: таблица идентификаторов или отрезки
pub type ScriptPlane = PlaneTable<Vec<u8>, u8>;

impl ScriptPlane
{
    pub fn view(&self) -> ScriptPlaneData<'_>
    {
        match &self.encoding {
            PlaneEncoding::Table(table) => ScriptPlaneData::Table(LookupTable {
                block_bits: table.block_bits,
                index: &table.index,
                data: table.data.as_slice(),
            }),
            PlaneEncoding::Ranges(ranges) => ScriptPlaneData::Ranges(ranges),
        }
    }
}

/// таблицы скриптов
#[derive(Debug, Clone)]
pub struct ScriptTables
{
    /// названия скриптов, позиция - идентификатор
    pub names: Vec<String>,
    pub latin1: Vec<u8>,
    pub planes: [ScriptPlane; 4],
}

/// идентификаторы скриптов в порядке первого появления при обходе кодпоинтов по возрастанию.
/// Unknown - всегда 0. возвращает названия и идентификатор для каждого кодпоинта
pub fn assign_ids(scripts: &HashMap<u32, String>) -> Result<(Vec<String>, Vec<u8>), PrepareError>
{
    let mut names: Vec<String> = vec![UNKNOWN_SCRIPT.to_owned()];
    let mut ids: HashMap<&str, u8> = HashMap::from([(UNKNOWN_SCRIPT, 0)]);
    let mut by_code = Vec::with_capacity(MAX_CODE_POINT as usize + 1);

    for code in 0 ..= MAX_CODE_POINT {
        let name = match scripts.get(&code) {
            Some(name) => name.as_str(),
            None => UNKNOWN_SCRIPT,
        };

        let id = match ids.get(name) {
            Some(&id) => id,
            None => {
                let id = u8::try_from(names.len())
                    .map_err(|_| PrepareError::TooManyScripts(names.len() + 1))?;

                ids.insert(name, id);
                names.push(name.to_owned());

                id
            }
        };

        by_code.push(id);
    }

    Ok((names, by_code))
}

/// собрать таблицы скриптов
pub fn build(scripts: &HashMap<u32, String>) -> Result<ScriptTables, PrepareError>
{
    let (names, ids) = assign_ids(scripts)?;

    info!("скриптов: {}", names.len());

    let planes = [
        encode_plane(&PLANES[0], &ids)?,
        encode_plane(&PLANES[1], &ids)?,
        encode_plane(&PLANES[2], &ids)?,
        encode_plane(&PLANES[3], &ids)?,
    ];

    Ok(ScriptTables {
        names,
        latin1: ids[..= LATIN1_END as usize].to_vec(),
        planes,
    })
}

fn encode_plane(plane: &PlaneDescriptor, ids: &[u8]) -> Result<ScriptPlane, PrepareError>
{
    let values = planes::padded_slice(plane, ids)?;
    let table = lookup::optimize(&values, plane.total_bits(), 1)?;

    let ranges = match plane.sparse {
        true => Some(ranges::compress(&values)),
        false => None,
    };

    Ok(planes::select(*plane, table, ranges, RANGE_BYTES))
}
