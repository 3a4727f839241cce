use std::collections::HashMap;
use std::hash::Hash;

use crate::error::PrepareError;

/// данные, разбитые на блоки одинакового размера, где одинаковые блоки хранятся один раз
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTable<T>
{
    /// номер уникального блока для каждого исходного блока
    pub index: Vec<u16>,
    /// уникальные блоки подряд, в порядке первого появления
    pub data: Vec<T>,
    /// количество значений в блоке
    pub block_size: usize,
}

impl<T> BlockTable<T>
{
    /// количество уникальных блоков
    pub fn unique_blocks(&self) -> usize
    {
        self.data.len() / self.block_size
    }
}

/// разбить данные на block_count блоков и убрать повторы
pub fn build<T: Copy + Eq + Hash>(data: &[T], block_count: usize) -> Result<BlockTable<T>, PrepareError>
{
    if block_count == 0 || data.len() % block_count != 0 || data.is_empty() {
        return Err(PrepareError::BlockCountMismatch {
            len: data.len(),
            block_count,
        });
    }

    let block_size = data.len() / block_count;

    let mut index = Vec::with_capacity(block_count);
    let mut unique = vec![];
    let mut ids: HashMap<&[T], u16> = HashMap::new();

    for block in data.chunks_exact(block_size) {
        let id = match ids.get(block) {
            Some(&id) => id,
            None => {
                let id = u16::try_from(ids.len()).map_err(|_| PrepareError::TooManyBlocks(ids.len()))?;

                ids.insert(block, id);
                unique.extend_from_slice(block);

                id
            }
        };

        index.push(id);
    }

    Ok(BlockTable {
        index,
        data: unique,
        block_size,
    })
}
