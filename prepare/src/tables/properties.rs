use std::collections::{BTreeSet, HashMap};

use unicode_properties::planes::{PlaneDescriptor, LATIN1_END, PLANES};
use unicode_properties::{Interned, LookupTable, PlaneData, RangeValue};

use super::lookup::{self, LookupTableData};
use super::planes::{self, PlaneEncoding, PlaneTable};
use crate::error::PrepareError;

/// размер отрезка в байтах: начало, конец, упакованное значение
pub const RANGE_BYTES: usize = 12;

/// индексы в общем списке уникальных значений, 1 или 2 байта на значение
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternedIndices
{
    Narrow(Vec<u8>),
    Wide(Vec<u16>),
}

impl InternedIndices
{
    pub fn view(&self) -> Interned<'_>
    {
        match self {
            Self::Narrow(data) => Interned::Narrow(data),
            Self::Wide(data) => Interned::Wide(data),
        }
    }

    pub fn len(&self) -> usize
    {
        match self {
            Self::Narrow(data) => data.len(),
            Self::Wide(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}

/// первый этап: сбор уникальных упакованных значений всех плоскостей
#[derive(Debug, Default)]
pub struct ValueCollector
{
    values: BTreeSet<u32>,
}

impl ValueCollector
{
    pub fn new() -> Self
    {
        // 0 - значение, которым дополняются плоскости до степени двойки
        Self {
            values: BTreeSet::from([0]),
        }
    }

    pub fn extend(&mut self, values: &[u32])
    {
        self.values.extend(values.iter().copied());
    }

    /// завершить сбор. после этого список значений не меняется
    pub fn close(self) -> Result<ValueInterner, PrepareError>
    {
        let values: Vec<u32> = self.values.into_iter().collect();

        let bytes_per_entry = match values.len() {
            0 ..= 0x100 => 1,
            0x101 ..= 0x10000 => 2,
            count => return Err(PrepareError::TooManyValues(count)),
        };

        let positions = values
            .iter()
            .enumerate()
            .map(|(position, &value)| (value, position as u16))
            .collect();

        Ok(ValueInterner {
            values,
            positions,
            bytes_per_entry,
        })
    }
}

/// второй этап: общий отсортированный список уникальных значений, только для чтения
#[derive(Debug, Clone)]
pub struct ValueInterner
{
    values: Vec<u32>,
    positions: HashMap<u32, u16>,
    bytes_per_entry: usize,
}

impl ValueInterner
{
    pub fn values(&self) -> &[u32]
    {
        &self.values
    }

    /// размер индекса значения: 1 байт, если уникальных значений не больше 256, иначе 2
    pub fn bytes_per_entry(&self) -> usize
    {
        self.bytes_per_entry
    }

    pub fn position(&self, value: u32) -> Result<u16, PrepareError>
    {
        self.positions
            .get(&value)
            .copied()
            .ok_or(PrepareError::NotInterned(value))
    }

    pub fn positions(&self, values: &[u32]) -> Result<Vec<u16>, PrepareError>
    {
        values.iter().map(|&value| self.position(value)).collect()
    }

    /// представить индексы в выбранной ширине
    pub fn narrow(&self, positions: Vec<u16>) -> InternedIndices
    {
        match self.bytes_per_entry {
            1 => InternedIndices::Narrow(positions.into_iter().map(|p| p as u8).collect()),
            _ => InternedIndices::Wide(positions),
        }
    }
}

/// плоскость свойств: таблица индексов в общем списке или отрезки упакованных значений
pub type CharacterPlane = PlaneTable<InternedIndices, u32>;

impl CharacterPlane
{
    pub fn view(&self) -> PlaneData<'_>
    {
        match &self.encoding {
            PlaneEncoding::Table(table) => PlaneData::Table(LookupTable {
                block_bits: table.block_bits,
                index: &table.index,
                data: table.data.view(),
            }),
            PlaneEncoding::Ranges(ranges) => PlaneData::Ranges(ranges),
        }
    }
}

/// таблицы свойств символов
#[derive(Debug, Clone)]
pub struct PropertyTables
{
    /// уникальные упакованные значения
    pub values: Vec<u32>,
    /// Latin-1
    pub latin1: InternedIndices,
    /// BMP, SMP, SIP, SSP
    pub planes: [CharacterPlane; 4],
}

/// собрать таблицы по упакованным значениям всех кодпоинтов
pub fn build(packed: &[u32]) -> Result<PropertyTables, PrepareError>
{
    for plane in PLANES.iter() {
        planes::check_bounds(plane, packed.len())?;
    }

    // сначала - общий список значений, затем кодирование плоскостей
    let mut collector = ValueCollector::new();
    collector.extend(packed);

    let interner = collector.close()?;

    info!(
        "уникальных упакованных значений: {}, {} байт на индекс",
        interner.values().len(),
        interner.bytes_per_entry()
    );

    let latin1 = interner.narrow(interner.positions(&packed[..= LATIN1_END as usize])?);

    let planes = [
        encode_plane(&PLANES[0], packed, &interner)?,
        encode_plane(&PLANES[1], packed, &interner)?,
        encode_plane(&PLANES[2], packed, &interner)?,
        encode_plane(&PLANES[3], packed, &interner)?,
    ];

    Ok(PropertyTables {
        values: interner.values().to_vec(),
        latin1,
        planes,
    })
}

/// таблица или отрезки для одной плоскости
fn encode_plane(
    plane: &PlaneDescriptor,
    packed: &[u32],
    interner: &ValueInterner,
) -> Result<CharacterPlane, PrepareError>
{
    let values = planes::padded_slice(plane, packed)?;

    let table: LookupTableData<InternedIndices> = lookup::optimize(
        &interner.positions(&values)?,
        plane.total_bits(),
        interner.bytes_per_entry(),
    )?
    .map_data(|data| interner.narrow(data));

    let ranges: Option<Vec<RangeValue<u32>>> = match plane.sparse {
        true => Some(super::ranges::compress(&values)),
        false => None,
    };

    Ok(planes::select(*plane, table, ranges, RANGE_BYTES))
}
