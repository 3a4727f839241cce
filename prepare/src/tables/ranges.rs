use unicode_properties::RangeValue;

/// отрезки одинаковых значений по отсортированному списку (позиция, значение)
///
/// отрезок продолжается, пока позиции идут подряд и значение не меняется
pub fn compress_entries<T: Copy + PartialEq>(entries: &[(u32, T)]) -> Vec<RangeValue<T>>
{
    let mut ranges: Vec<RangeValue<T>> = vec![];

    for &(position, value) in entries {
        if let Some(last) = ranges.last_mut() {
            if last.end + 1 == position && last.value == value {
                last.end = position;
                continue;
            }
        }

        ranges.push(RangeValue::new(position, position, value));
    }

    ranges
}

/// отрезки значений, отличных от значения по умолчанию, по плотному массиву
pub fn compress<T: Copy + PartialEq + Default>(values: &[T]) -> Vec<RangeValue<T>>
{
    let entries: Vec<(u32, T)> = values
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != T::default())
        .map(|(position, &value)| (position as u32, value))
        .collect();

    compress_entries(&entries)
}

/// отрезки отсортированы, не пересекаются и не содержат значений по умолчанию
pub fn is_well_formed<T: Copy + PartialEq + Default>(ranges: &[RangeValue<T>]) -> bool
{
    ranges.iter().all(|range| range.start <= range.end && range.value != T::default())
        && ranges.windows(2).all(|pair| pair[0].end < pair[1].start)
}
