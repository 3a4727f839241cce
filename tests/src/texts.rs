use unicode_properties::utf16::CodePoints;

use crate::data::files;
use crate::{oracle, properties};

/// свойства символов реальных текстов: сверяем с ICU и стандартной библиотекой
#[test]
fn texts()
{
    let properties = properties();

    for (name, text) in files() {
        for c in text.chars() {
            let code = u32::from(c);

            assert_eq!(properties.is_whitespace(code), c.is_whitespace(), "{}: U+{:04X}", name, code);
            assert_eq!(properties.is_upper_case(code), c.is_uppercase(), "{}: U+{:04X}", name, code);
            assert_eq!(properties.is_lower_case(code), c.is_lowercase(), "{}: U+{:04X}", name, code);
            assert_eq!(properties.is_iso_control(code), c.is_control(), "{}: U+{:04X}", name, code);

            // полное преобразование в один символ совпадает с простым
            let mut lower = c.to_lowercase();
            if let (Some(lower), None) = (lower.next(), lower.next()) {
                assert_eq!(properties.to_lower_case(code), u32::from(lower), "{}: U+{:04X}", name, code);
            }

            let mut upper = c.to_uppercase();
            if let (Some(upper), None) = (upper.next(), upper.next()) {
                if !properties.is_title_case(code) {
                    assert_eq!(properties.to_upper_case(code), u32::from(upper), "{}: U+{:04X}", name, code);
                }
            }

            assert_eq!(
                properties.script_name(properties.script(code)),
                oracle::script_name(code).unwrap_or("Unknown"),
                "{}: U+{:04X}",
                name,
                code
            );
        }
    }
}

/// текст в UTF-16: строчные буквы после преобразования совпадают со строчными из str::to_lowercase
#[test]
fn lowercase_text()
{
    let properties = properties();

    for (name, text) in files() {
        // Σ в конце слова и İ преобразуются контекстно или в несколько символов
        if text.contains(['Σ', 'İ']) {
            continue;
        }

        let units: Vec<u16> = text.encode_utf16().collect();

        let lowered: String = CodePoints::new(&units)
            .map(|code| properties.to_lower_case(code))
            .filter_map(char::from_u32)
            .collect();

        assert_eq!(lowered, text.to_lowercase(), "{}", name);
    }
}
