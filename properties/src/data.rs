use crate::planes::PLANES;

/// непрерывный отрезок кодпоинтов (или смещений в плоскости) с одинаковым значением, границы включительно
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeValue<T>
{
    pub start: u32,
    pub end: u32,
    pub value: T,
}

impl<T> RangeValue<T>
{
    pub const fn new(start: u32, end: u32, value: T) -> Self
    {
        Self { start, end, value }
    }
}

/// индексы в общем списке уникальных упакованных значений
#[derive(Debug, Clone, Copy)]
pub enum Interned<'a>
{
    /// не более 256 уникальных значений
    Narrow(&'a [u8]),
    /// не более 65536 уникальных значений
    Wide(&'a [u16]),
}

impl<'a> Interned<'a>
{
    #[inline(always)]
    pub fn get(&self, index: usize) -> usize
    {
        match self {
            Interned::Narrow(data) => data[index] as usize,
            Interned::Wide(data) => data[index] as usize,
        }
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        match self {
            Interned::Narrow(data) => data.len(),
            Interned::Wide(data) => data.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// размер одного элемента в байтах
    #[inline]
    pub fn bytes_per_entry(&self) -> usize
    {
        match self {
            Interned::Narrow(_) => 1,
            Interned::Wide(_) => 2,
        }
    }
}

/// данные блоков двухуровневой таблицы
pub trait BlockData
{
    fn value(&self, index: usize) -> usize;
}

impl<'a> BlockData for Interned<'a>
{
    #[inline(always)]
    fn value(&self, index: usize) -> usize
    {
        self.get(index)
    }
}

impl<'a> BlockData for &'a [u8]
{
    #[inline(always)]
    fn value(&self, index: usize) -> usize
    {
        self[index] as usize
    }
}

/// двухуровневая таблица: индекс блоков + уникальные блоки
#[derive(Debug, Clone, Copy)]
pub struct LookupTable<'a, D>
{
    /// количество бит смещения внутри блока
    pub block_bits: u32,
    /// номер блока для каждого старшего значения смещения
    pub index: &'a [u16],
    /// уникальные блоки, записанные подряд
    pub data: D,
}

impl<'a, D: BlockData> LookupTable<'a, D>
{
    /// значение по смещению внутри плоскости
    #[inline(always)]
    pub fn get(&self, offset: u32) -> usize
    {
        let block = self.index[(offset >> self.block_bits) as usize] as usize;
        let mask = (1 << self.block_bits) - 1;

        self.data.value((block << self.block_bits) | (offset & mask) as usize)
    }
}

/// данные плоскости со свойствами символов
#[derive(Debug, Clone, Copy)]
pub enum PlaneData<'a>
{
    /// таблица индексов в общем списке значений
    Table(LookupTable<'a, Interned<'a>>),
    /// отрезки смещений с упакованными значениями
    Ranges(&'a [RangeValue<u32>]),
}

/// данные плоскости со скриптами
#[derive(Debug, Clone, Copy)]
pub enum ScriptPlaneData<'a>
{
    Table(LookupTable<'a, &'a [u8]>),
    Ranges(&'a [RangeValue<u8>]),
}

/// свойства символов
#[derive(Debug, Clone, Copy)]
pub struct CharacterData<'a>
{
    /// уникальные упакованные значения, отсортированные по возрастанию
    pub values: &'a [u32],
    /// U+0000 ..= U+00FF, индексы в values
    pub latin1: Interned<'a>,
    /// BMP, SMP, SIP, SSP
    pub planes: [PlaneData<'a>; PLANES.len()],
    /// смещения к строчным, не поместившиеся в упакованное значение
    pub lowercase_deltas: &'a [RangeValue<i32>],
    /// смещения к прописным, не поместившиеся в упакованное значение
    pub uppercase_deltas: &'a [RangeValue<i32>],
}

/// скрипты
#[derive(Debug, Clone, Copy)]
pub struct ScriptData<'a, N = &'a str>
{
    /// названия скриптов, позиция названия - его идентификатор. 0 - Unknown
    pub names: &'a [N],
    /// U+0000 ..= U+00FF
    pub latin1: &'a [u8],
    pub planes: [ScriptPlaneData<'a>; PLANES.len()],
}

/// все данные, необходимые для ответов на запросы о кодпоинтах
#[derive(Debug, Clone, Copy)]
pub struct UnicodeData<'a, N = &'a str>
{
    pub characters: CharacterData<'a>,
    pub scripts: ScriptData<'a, N>,
}
