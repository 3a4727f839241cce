use crate::tables::case_deltas;
use crate::tables::planes::{PlaneEncoding, PlaneTable};
use crate::tables::PreparedTables;

/// размеры подготовленных данных в байтах
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSizes
{
    /// уникальные значения, Latin-1 и плоскости свойств
    pub properties: usize,
    /// отрезки больших смещений регистра
    pub case_deltas: usize,
    /// названия, Latin-1 и плоскости скриптов
    pub scripts: usize,
}

impl TableSizes
{
    pub fn of(tables: &PreparedTables) -> Self
    {
        let properties = &tables.properties;
        let scripts = &tables.scripts;

        let bytes_per_entry = properties.latin1.view().bytes_per_entry();

        Self {
            properties: properties.values.len() * 4
                + properties.latin1.len() * bytes_per_entry
                + properties.planes.iter().map(|plane| plane.size()).sum::<usize>(),
            case_deltas: (tables.case_deltas.lowercase.len() + tables.case_deltas.uppercase.len())
                * case_deltas::RANGE_BYTES,
            scripts: scripts.names.iter().map(|name| name.len()).sum::<usize>()
                + scripts.latin1.len()
                + scripts.planes.iter().map(|plane| plane.size()).sum::<usize>(),
        }
    }

    pub fn total(&self) -> usize
    {
        self.properties + self.case_deltas + self.scripts
    }
}

/// информация о подготовленных данных
pub fn report(tables: &PreparedTables) -> TableSizes
{
    let sizes = TableSizes::of(tables);

    info!("свойства символов:");
    info!(
        "  уникальных значений: {}, индекс значения: {} байт",
        tables.properties.values.len(),
        tables.properties.latin1.view().bytes_per_entry()
    );
    for plane in tables.properties.planes.iter() {
        info!("  {}", describe(plane));
    }

    info!(
        "большие смещения регистра: к строчным {} отрезков, к прописным {}",
        tables.case_deltas.lowercase.len(),
        tables.case_deltas.uppercase.len()
    );

    info!("скрипты: {}", tables.scripts.names.len());
    for plane in tables.scripts.planes.iter() {
        info!("  {}", describe(plane));
    }
    debug!("  {}", tables.scripts.names.join(", "));

    info!(
        "размер: свойства {}, смещения {}, скрипты {}, всего {} байт",
        sizes.properties,
        sizes.case_deltas,
        sizes.scripts,
        sizes.total()
    );

    sizes
}

fn describe<D, R>(plane: &PlaneTable<D, R>) -> String
{
    let alternative = match plane.ranges_size {
        Some(size) => format!(", отрезки: {} байт", size),
        None => String::new(),
    };

    match &plane.encoding {
        PlaneEncoding::Table(table) => format!(
            "{}: таблица {} + {} бит, индекс {}, {} байт{}",
            plane.plane.name,
            table.index_bits,
            table.block_bits,
            table.index.len(),
            plane.table_size,
            alternative
        ),
        PlaneEncoding::Ranges(ranges) => format!(
            "{}: {} отрезков, {} байт (таблица: {} байт)",
            plane.plane.name,
            ranges.len(),
            plane.size(),
            plane.table_size
        ),
    }
}
