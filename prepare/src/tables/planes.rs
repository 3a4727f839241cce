use unicode_properties::planes::PlaneDescriptor;
use unicode_properties::RangeValue;

use super::lookup::LookupTableData;
use crate::error::PrepareError;

/// способ хранения данных плоскости
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaneEncoding<D, R>
{
    /// двухуровневая таблица, O(1)
    Table(LookupTableData<D>),
    /// отсортированные отрезки смещений, двоичный поиск
    Ranges(Vec<RangeValue<R>>),
}

/// закодированная плоскость и размеры обоих вариантов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneTable<D, R>
{
    pub plane: PlaneDescriptor,
    pub encoding: PlaneEncoding<D, R>,
    /// размер таблицы в байтах
    pub table_size: usize,
    /// размер отрезков в байтах, если они рассматривались
    pub ranges_size: Option<usize>,
}

impl<D, R> PlaneTable<D, R>
{
    /// размер выбранного варианта
    pub fn size(&self) -> usize
    {
        match self.encoding {
            PlaneEncoding::Table(_) => self.table_size,
            PlaneEncoding::Ranges(_) => self.ranges_size.unwrap_or_default(),
        }
    }

    pub fn is_table(&self) -> bool
    {
        matches!(self.encoding, PlaneEncoding::Table(_))
    }
}

/// плоскость должна целиком помещаться в данные
pub fn check_bounds(plane: &PlaneDescriptor, len: usize) -> Result<(), PrepareError>
{
    match plane.start <= plane.end && (plane.end as usize) < len {
        true => Ok(()),
        false => Err(PrepareError::PlaneBounds {
            plane: plane.name,
            start: plane.start,
            end: plane.end,
            len,
        }),
    }
}

/// значения плоскости, дополненные значением по умолчанию до размера адресного пространства
pub fn padded_slice<T: Copy + Default>(plane: &PlaneDescriptor, values: &[T]) -> Result<Vec<T>, PrepareError>
{
    check_bounds(plane, values.len())?;

    let mut result = values[plane.start as usize ..= plane.end as usize].to_vec();
    result.resize(plane.address_space(), T::default());

    Ok(result)
}

/// выбор между таблицей и отрезками
///
/// для плоскостей, не отмеченных как разреженные, отрезки не рассматриваются. для остальных
/// выбирается меньший по размеру вариант, при равенстве - таблица
pub fn select<D, R>(
    plane: PlaneDescriptor,
    table: LookupTableData<D>,
    ranges: Option<Vec<RangeValue<R>>>,
    range_bytes: usize,
) -> PlaneTable<D, R>
{
    let table_size = table.size;
    let split = (table.index_bits, table.block_bits);
    let ranges_size = ranges.as_ref().map(|ranges| ranges.len() * range_bytes);

    let encoding = match ranges {
        Some(ranges) if ranges.len() * range_bytes < table_size => PlaneEncoding::Ranges(ranges),
        _ => PlaneEncoding::Table(table),
    };

    debug!(
        "{}: таблица {} байт ({} + {} бит), отрезки {}, выбрано: {}",
        plane.name,
        table_size,
        split.0,
        split.1,
        match ranges_size {
            Some(size) => format!("{} байт", size),
            None => "не рассматривались".to_owned(),
        },
        match encoding {
            PlaneEncoding::Table(_) => "таблица",
            PlaneEncoding::Ranges(_) => "отрезки",
        }
    );

    PlaneTable {
        plane,
        encoding,
        table_size,
        ranges_size,
    }
}
