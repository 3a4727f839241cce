use unicode_properties::{CharacterData, ScriptData, UnicodeData};
use unicode_properties_source::SourceData;

use crate::encode::pack_all;
use crate::error::PrepareError;

pub mod blocks;
pub mod case_deltas;
pub mod lookup;
pub mod planes;
pub mod properties;
pub mod ranges;
pub mod scripts;

pub use case_deltas::CaseDeltaTables;
pub use properties::PropertyTables;
pub use scripts::ScriptTables;

/// подготовленные данные для записи
#[derive(Debug, Clone)]
pub struct PreparedTables
{
    pub properties: PropertyTables,
    pub case_deltas: CaseDeltaTables,
    pub scripts: ScriptTables,
}

impl PreparedTables
{
    /// представление данных в том виде, в котором их читает декодер
    pub fn view(&self) -> UnicodeData<'_, String>
    {
        UnicodeData {
            characters: CharacterData {
                values: &self.properties.values,
                latin1: self.properties.latin1.view(),
                planes: self.properties.planes.each_ref().map(|plane| plane.view()),
                lowercase_deltas: &self.case_deltas.lowercase,
                uppercase_deltas: &self.case_deltas.uppercase,
            },
            scripts: ScriptData {
                names: &self.scripts.names,
                latin1: &self.scripts.latin1,
                planes: self.scripts.planes.each_ref().map(|plane| plane.view()),
            },
        }
    }
}

/// упаковка свойств, таблицы плоскостей, смещения регистра, скрипты
pub fn prepare(source: &SourceData) -> Result<PreparedTables, PrepareError>
{
    let packed = pack_all(&source.characters);

    let properties = properties::build(&packed)?;
    let case_deltas = case_deltas::build(&source.characters, &packed)?;
    let scripts = scripts::build(&source.scripts)?;

    Ok(PreparedTables {
        properties,
        case_deltas,
        scripts,
    })
}
