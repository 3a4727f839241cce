#[macro_use]
extern crate log;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use unicode_properties::planes::MAX_CODE_POINT;
use unicode_properties::UNKNOWN_SCRIPT;

pub use error::PropertiesError;
pub use record::CharacterRecord;

mod error;
pub mod parse;
mod record;

/// содержимое файлов UCD, необходимых для сборки таблиц
#[derive(Debug, Clone, Copy)]
pub struct UcdFiles<'a>
{
    pub unicode_data: &'a str,
    pub prop_list: &'a str,
    pub derived_core_properties: &'a str,
    pub case_folding: &'a str,
    pub special_casing: &'a str,
    pub scripts: &'a str,
}

/// исходные данные генератора: записи о каждом кодпоинте U+0000 ..= U+10FFFF и скрипты
#[derive(Debug, Clone)]
pub struct SourceData
{
    /// запись с индексом N описывает кодпоинт N
    pub characters: Vec<CharacterRecord>,
    /// кодпоинт -> название скрипта. отсутствующие кодпоинты - Unknown
    pub scripts: HashMap<u32, String>,
}

impl SourceData
{
    /// все кодпоинты не назначены, скриптов нет
    pub fn empty() -> Self
    {
        Self {
            characters: (0 ..= MAX_CODE_POINT).map(CharacterRecord::new).collect(),
            scripts: HashMap::new(),
        }
    }

    /// разбор содержимого файлов UCD
    pub fn parse(files: &UcdFiles) -> Result<Self, PropertiesError>
    {
        let mut source = Self::empty();
        let characters = source.characters.as_mut_slice();

        let assigned = parse::unicode_data::parse(files.unicode_data, characters)?;
        debug!("UnicodeData.txt: {} кодпоинтов", assigned);

        let marked = parse::binary_properties::parse(files.prop_list, "PropList.txt", characters)?;
        debug!("PropList.txt: {} отметок", marked);

        let marked = parse::binary_properties::parse(
            files.derived_core_properties,
            "DerivedCoreProperties.txt",
            characters,
        )?;
        debug!("DerivedCoreProperties.txt: {} отметок", marked);

        parse::case_folding::parse(files.case_folding, characters)?;

        let special = parse::special_casing::parse(files.special_casing, characters)?;
        debug!("SpecialCasing.txt: {} безусловных преобразований", special);

        source.scripts = parse::scripts::parse(files.scripts)?;
        debug!("Scripts.txt: {} кодпоинтов", source.scripts.len());

        source.derive_properties();

        Ok(source)
    }

    /// чтение и разбор файлов UCD из каталога
    pub fn from_dir(dir: &Path) -> Result<Self, PropertiesError>
    {
        let read = |name: &str| {
            let path = dir.join(name);

            fs::read_to_string(&path).map_err(|source| PropertiesError::Io { path, source })
        };

        let unicode_data = read("UnicodeData.txt")?;
        let prop_list = read("PropList.txt")?;
        let derived_core_properties = read("DerivedCoreProperties.txt")?;
        let case_folding = read("CaseFolding.txt")?;
        let special_casing = read("SpecialCasing.txt")?;
        let scripts = read("Scripts.txt")?;

        info!("UCD: {}", dir.display());

        Self::parse(&UcdFiles {
            unicode_data: &unicode_data,
            prop_list: &prop_list,
            derived_core_properties: &derived_core_properties,
            case_folding: &case_folding,
            special_casing: &special_casing,
            scripts: &scripts,
        })
    }

    /// пересчитать производные свойства всех записей
    pub fn derive_properties(&mut self)
    {
        self.characters
            .iter_mut()
            .for_each(CharacterRecord::derive_properties);
    }

    /// запись о кодпоинте
    pub fn record(&self, code: u32) -> Option<&CharacterRecord>
    {
        self.characters.get(code as usize)
    }

    /// название скрипта кодпоинта
    pub fn script(&self, code: u32) -> &str
    {
        match self.scripts.get(&code) {
            Some(name) => name.as_str(),
            None => UNKNOWN_SCRIPT,
        }
    }
}
