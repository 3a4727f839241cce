use std::hash::Hash;
use std::ops::RangeInclusive;

use super::blocks;
use crate::error::PrepareError;

/// перебираемые размеры индекса (в битах адреса)
pub const INDEX_BITS: RangeInclusive<u32> = 6 ..= 14;
/// допустимые размеры блока: от 16 до 4096 значений
pub const BLOCK_BITS: RangeInclusive<u32> = 4 ..= 12;
/// размер записи индекса в байтах
pub const INDEX_ENTRY_BYTES: usize = 2;

/// двухуровневая таблица с выбранным разбиением адреса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTableData<D>
{
    pub index_bits: u32,
    pub block_bits: u32,
    pub index: Vec<u16>,
    pub data: D,
    /// размер индекса и данных в байтах
    pub size: usize,
}

impl<D> LookupTableData<D>
{
    /// заменить представление данных, сохранив разбиение
    pub fn map_data<E>(self, f: impl FnOnce(D) -> E) -> LookupTableData<E>
    {
        LookupTableData {
            index_bits: self.index_bits,
            block_bits: self.block_bits,
            index: self.index,
            data: f(self.data),
            size: self.size,
        }
    }
}

/// подобрать разбиение адреса на индекс и блок с минимальным суммарным размером
///
/// data - значения для всего адресного пространства (1 << total_bits),
/// bytes_per_entry - размер одного значения в блоке данных
pub fn optimize<T: Copy + Eq + Hash>(
    data: &[T],
    total_bits: u32,
    bytes_per_entry: usize,
) -> Result<LookupTableData<Vec<T>>, PrepareError>
{
    let mut best: Option<LookupTableData<Vec<T>>> = None;

    for index_bits in INDEX_BITS {
        let block_bits = match total_bits.checked_sub(index_bits) {
            Some(bits) if BLOCK_BITS.contains(&bits) => bits,
            _ => continue,
        };

        let block_count = 1usize << index_bits;

        if data.len() != block_count << block_bits {
            continue;
        }

        let table = blocks::build(data, block_count)?;
        let size = table.index.len() * INDEX_ENTRY_BYTES + table.data.len() * bytes_per_entry;

        trace!(
            "разбиение {} + {} бит: {} уникальных блоков, {} байт",
            index_bits,
            block_bits,
            table.unique_blocks(),
            size
        );

        if best.as_ref().map_or(true, |best| size < best.size) {
            best = Some(LookupTableData {
                index_bits,
                block_bits,
                index: table.index,
                data: table.data,
                size,
            });
        }
    }

    best.ok_or(PrepareError::NoValidSplit { total_bits })
}
