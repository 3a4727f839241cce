#[cfg(test)]
#[macro_use]
extern crate lazy_static;


#[cfg(test)]
mod baked;
#[cfg(test)]
mod data;
#[cfg(test)]
mod properties;
#[cfg(test)]
mod texts;
#[cfg(test)]
mod utf16;

#[cfg(test)]
lazy_static! {
    /// записи о кодпоинтах по данным ICU
    static ref SOURCE: unicode_properties_source::SourceData = oracle::source();
    /// таблицы, собранные по этим записям
    static ref TABLES: unicode_properties_prepare::PreparedTables =
        unicode_properties_prepare::prepare(&SOURCE).unwrap();
}

/// декодер поверх собранных таблиц
#[cfg(test)]
fn properties() -> unicode_properties::UnicodeProperties<'static, String>
{
    unicode_properties::UnicodeProperties::from_baked(TABLES.view())
}
