use core::cmp::Ordering;

use crate::data::RangeValue;

/// значение отрезка, содержащего ключ. если такого нет - значение по умолчанию
#[inline]
pub fn find_in_ranges<T: Copy + Default>(ranges: &[RangeValue<T>], key: u32) -> T
{
    let found = ranges.binary_search_by(|range| {
        if range.end < key {
            Ordering::Less
        } else if range.start > key {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });

    match found {
        Ok(position) => ranges[position].value,
        Err(_) => T::default(),
    }
}
