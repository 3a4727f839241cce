/// последний кодпоинт Latin-1, до него включительно данные хранятся плоской таблицей
pub const LATIN1_END: u32 = 0xFF;
/// последний кодпоинт Unicode
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// диапазон кодпоинтов, для которого таблица строится отдельно
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneDescriptor
{
    pub name: &'static str,
    /// первый кодпоинт (включительно)
    pub start: u32,
    /// последний кодпоинт (включительно)
    pub end: u32,
    /// данные плоскости, скорее всего, разрежены - стоит сравнить таблицу и список диапазонов
    pub sparse: bool,
}

impl PlaneDescriptor
{
    /// количество бит, достаточное для адресации смещения внутри плоскости
    #[inline]
    pub const fn total_bits(&self) -> u32
    {
        32 - (self.end - self.start).leading_zeros()
    }

    /// размер адресного пространства плоскости (степень двойки)
    #[inline]
    pub const fn address_space(&self) -> usize
    {
        1 << self.total_bits()
    }

    /// количество кодпоинтов в плоскости
    #[inline]
    pub const fn len(&self) -> usize
    {
        (self.end - self.start + 1) as usize
    }

    #[inline]
    pub const fn contains(&self, code: u32) -> bool
    {
        code >= self.start && code <= self.end
    }
}

/// BMP без Latin-1
pub const BMP: PlaneDescriptor = PlaneDescriptor {
    name: "BMP",
    start: 0x100,
    end: 0xFFFF,
    sparse: false,
};

/// дополнительная многоязычная плоскость
pub const SMP: PlaneDescriptor = PlaneDescriptor {
    name: "SMP",
    start: 0x10000,
    end: 0x1FFFF,
    sparse: true,
};

/// дополнительная идеографическая плоскость
pub const SIP: PlaneDescriptor = PlaneDescriptor {
    name: "SIP",
    start: 0x20000,
    end: 0x2FFFF,
    sparse: true,
};

/// всё, что выше: третичная идеографическая плоскость, спецназначения, приватные
pub const SSP: PlaneDescriptor = PlaneDescriptor {
    name: "SSP",
    start: 0x30000,
    end: MAX_CODE_POINT,
    sparse: true,
};

/// плоскости в порядке возрастания кодпоинтов, вместе с Latin-1 покрывают весь Unicode
pub const PLANES: [PlaneDescriptor; 4] = [BMP, SMP, SIP, SSP];

/// индекс плоскости, в которую попадает кодпоинт (вне Latin-1)
#[inline(always)]
pub fn plane_index(code: u32) -> usize
{
    match code {
        0 ..= 0xFFFF => 0,
        0x10000 ..= 0x1FFFF => 1,
        0x20000 ..= 0x2FFFF => 2,
        _ => 3,
    }
}
