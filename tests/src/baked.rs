use unicode_properties::planes::MAX_CODE_POINT;
use unicode_properties::{
    CharacterData, GeneralCategory, Interned, LookupTable, PlaneData, RangeValue, ScriptData, ScriptPlaneData,
    UnicodeData, UnicodeProperties,
};

use crate::properties;

/// таблицы, записанные сборочным скриптом
fn baked<'a>() -> UnicodeData<'a>
{
    include!(concat!(env!("OUT_DIR"), "/tables.rs.txt"))
}

/// подключённый файл декодируется так же, как таблицы в памяти
#[test]
fn baked_tables_decode_like_prepared()
{
    let baked = UnicodeProperties::from_baked(baked());
    let prepared = properties();

    assert_eq!(baked.scripts_count(), prepared.scripts_count());

    for code in 0 ..= MAX_CODE_POINT + 1 {
        assert_eq!(baked.packed(code), prepared.packed(code), "U+{:04X}", code);
        assert_eq!(baked.to_lower_case(code), prepared.to_lower_case(code), "U+{:04X}", code);
        assert_eq!(baked.to_upper_case(code), prepared.to_upper_case(code), "U+{:04X}", code);
        assert_eq!(
            baked.script_name(baked.script(code)),
            prepared.script_name(prepared.script(code)),
            "U+{:04X}",
            code
        );
    }
}

#[test]
fn baked_tables()
{
    let properties = UnicodeProperties::from_baked(baked());

    // большие смещения из таблиц отрезков
    assert_eq!(properties.to_lower_case(0x1E9E), 0xDF);
    assert_eq!(properties.to_upper_case(0xB5), 0x39C);

    assert_eq!(properties.general_category(0x10400), GeneralCategory::UppercaseLetter);
    assert_eq!(properties.to_lower_case(0x10400), 0x10428);
    assert_eq!(properties.script_name(properties.script(0x10400)), "Deseret");
    assert_eq!(properties.script_name(properties.script(0x20000)), "Han");
    assert_eq!(properties.script_name(properties.script(0xE0001)), "Common");
}
