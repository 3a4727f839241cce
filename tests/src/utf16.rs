use unicode_properties::planes::MAX_CODE_POINT;
use unicode_properties::utf16::*;

/// суррогатные пары совпадают с кодировщиком стандартной библиотеки
#[test]
fn surrogates_match_std()
{
    let mut buffer = [0u16; 2];

    for c in (0 ..= MAX_CODE_POINT).filter_map(char::from_u32) {
        let code = u32::from(c);
        let units = c.encode_utf16(&mut buffer);

        assert_eq!(char_count(code), c.len_utf16(), "U+{:04X}", code);
        assert_eq!(is_bmp_code_point(code), units.len() == 1, "U+{:04X}", code);

        if units.len() == 2 {
            assert_eq!(high_surrogate(code), units[0], "U+{:04X}", code);
            assert_eq!(low_surrogate(code), units[1], "U+{:04X}", code);
            assert_eq!(from_surrogates(units[0], units[1]), code, "U+{:04X}", code);
        }

        assert_eq!(code_point_at(units, 0), Some(code), "U+{:04X}", code);
        assert_eq!(code_point_before(units, units.len()), Some(code), "U+{:04X}", code);
    }
}

/// обход в обе стороны даёт те же кодпоинты, что и декодер стандартной библиотеки
#[test]
fn code_points_match_std()
{
    for (name, text) in crate::data::files() {
        let units: Vec<u16> = text.encode_utf16().collect();
        let expected: Vec<u32> = text.chars().map(u32::from).collect();

        let forward: Vec<u32> = CodePoints::new(&units).collect();
        let mut backward: Vec<u32> = CodePoints::new(&units).rev().collect();
        backward.reverse();

        assert_eq!(forward, expected, "{}", name);
        assert_eq!(backward, expected, "{}", name);
    }
}

/// непарные суррогаты - как в char::decode_utf16, только без замены
#[test]
fn unpaired_surrogates()
{
    let units = [0x61, 0xDC00, 0xD800, 0x62, 0xD801, 0xDC37, 0xD800];

    let expected: Vec<u32> = char::decode_utf16(units.iter().copied())
        .map(|result| match result {
            Ok(c) => u32::from(c),
            Err(e) => e.unpaired_surrogate() as u32,
        })
        .collect();

    assert_eq!(CodePoints::new(&units).collect::<Vec<u32>>(), expected);
    assert_eq!(
        CodePoints::new(&units).rev().collect::<Vec<u32>>(),
        expected.iter().rev().copied().collect::<Vec<u32>>()
    );

    assert_eq!(code_point_at(&units, 7), None);
    assert_eq!(code_point_before(&units, 0), None);
    assert_eq!(code_point_before(&units, 8), None);
}
