use unicode_properties::RangeValue;

/// число: 0 или шестнадцатеричная запись
pub fn format_num(value: u64) -> String
{
    match value == 0 {
        true => "0".to_owned(),
        false => format!("0x{:X}", value),
    }
}

/// представить массив чисел в текстовом виде
pub fn format_num_vec<T: Into<u64> + Copy>(input: &[T], boundary: usize) -> String
{
    format_items(input.iter().map(|&e| format_num(e.into())), boundary)
}

/// отрезки в виде литералов RangeValue { start, end, value }
///
/// только литералы: вызов const fn не продвигается в 'static внутри fn с include!
pub fn format_ranges<T: Copy>(
    ranges: &[RangeValue<T>],
    boundary: usize,
    value: impl Fn(T) -> String,
) -> String
{
    format_items(
        ranges.iter().map(|range| {
            format!(
                "RangeValue {{ start: {}, end: {}, value: {} }}",
                format_num(range.start as u64),
                format_num(range.end as u64),
                value(range.value)
            )
        }),
        boundary,
    )
}

/// строки в кавычках
pub fn format_str_vec(input: &[String], boundary: usize) -> String
{
    format_items(input.iter().map(|e| format!("{:?}", e)), boundary)
}

/// элементы через запятую, переносим строку, если она становится длиннее boundary
pub fn format_items(items: impl IntoIterator<Item = String>, boundary: usize) -> String
{
    let mut output = String::new();

    let mut cur_len = boundary;

    for item in items {
        let e_str = format!("{}, ", item);

        match cur_len + e_str.len() > boundary {
            true => {
                output.push_str("\n    ");
                cur_len = e_str.len();
            }
            false => {
                cur_len += e_str.len();
            }
        };

        output.push_str(e_str.as_str());
    }
    output.push('\n');

    output
}
