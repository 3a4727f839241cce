use icu_casemap::CaseMapper;
use icu_properties::props::{IdContinue, IdStart, Ideographic, Lowercase, Uppercase, WhiteSpace};
use icu_properties::CodePointSetData;
use unicode_properties::planes::MAX_CODE_POINT;
use unicode_properties::utf16::char_count;
use unicode_properties::packed::{
    IDEOGRAPHIC, ID_CONTINUE, ID_START, JAVA_IDENTIFIER_PART, JAVA_IDENTIFIER_START, OTHER_LOWERCASE, OTHER_UPPERCASE,
    WHITE_SPACE,
};
use unicode_properties::GeneralCategory;
use unicode_properties::GeneralCategory::*;

use crate::oracle;
use crate::{properties, SOURCE};

/// категории, свойства и скрипты совпадают с данными ICU для всех кодпоинтов
#[test]
fn icu()
{
    let properties = properties();

    let white_space = CodePointSetData::new::<WhiteSpace>();
    let ideographic = CodePointSetData::new::<Ideographic>();
    let id_start = CodePointSetData::new::<IdStart>();
    let id_continue = CodePointSetData::new::<IdContinue>();
    let lowercase = CodePointSetData::new::<Lowercase>();
    let uppercase = CodePointSetData::new::<Uppercase>();

    for code in 0 ..= MAX_CODE_POINT {
        assert_eq!(properties.general_category(code).abbr(), oracle::category_abbr(code), "U+{:04X}", code);

        assert_eq!(properties.is_whitespace(code), white_space.contains32(code), "U+{:04X}", code);
        assert_eq!(properties.is_ideographic(code), ideographic.contains32(code), "U+{:04X}", code);
        assert_eq!(properties.is_unicode_identifier_start(code), id_start.contains32(code), "U+{:04X}", code);
        assert_eq!(properties.is_unicode_identifier_part(code), id_continue.contains32(code), "U+{:04X}", code);
        assert_eq!(properties.is_lower_case(code), lowercase.contains32(code), "U+{:04X}", code);
        assert_eq!(properties.is_upper_case(code), uppercase.contains32(code), "U+{:04X}", code);

        assert_eq!(
            properties.script_name(properties.script(code)),
            oracle::script_name(code).unwrap_or("Unknown"),
            "U+{:04X}",
            code
        );
    }
}

/// простые преобразования регистра совпадают с ICU, в том числе через таблицы больших смещений
#[test]
fn icu_case_mapping()
{
    let properties = properties();
    let case_mapper = CaseMapper::new();

    for c in (0 ..= MAX_CODE_POINT).filter_map(char::from_u32) {
        let code = u32::from(c);

        assert_eq!(properties.to_lower_case(code), u32::from(case_mapper.simple_lowercase(c)), "U+{:04X}", code);
        assert_eq!(properties.to_upper_case(code), u32::from(case_mapper.simple_uppercase(c)), "U+{:04X}", code);
    }
}

/// производные свойства совпадают с пересчётом по записям
#[test]
fn derived_properties()
{
    let properties = properties();

    for record in SOURCE.characters.iter() {
        let code = record.code;

        assert_eq!(properties.is_letter(code), record.is_letter, "U+{:04X}", code);
        assert_eq!(properties.is_digit(code), record.is_digit, "U+{:04X}", code);
        assert_eq!(properties.is_letter_or_digit(code), record.is_letter || record.is_digit, "U+{:04X}", code);
        assert_eq!(properties.is_title_case(code), record.is_title_case, "U+{:04X}", code);
        assert_eq!(properties.is_space_char(code), record.is_space_char, "U+{:04X}", code);
        assert_eq!(properties.is_iso_control(code), record.is_control, "U+{:04X}", code);
        assert_eq!(properties.is_identifier_ignorable(code), record.is_identifier_ignorable, "U+{:04X}", code);
        assert_eq!(properties.is_java_identifier_start(code), record.is_java_identifier_start, "U+{:04X}", code);
        assert_eq!(properties.is_java_identifier_part(code), record.is_java_identifier_part, "U+{:04X}", code);
    }
}

/// ASCII считается без таблиц, но ответы те же, что по упакованным значениям
#[test]
fn ascii_fast_path()
{
    let properties = properties();

    for record in SOURCE.characters[.. 0x80].iter() {
        let code = record.code;
        let packed = properties.packed(code);
        let category = packed.category();

        assert_eq!(category, record.category, "U+{:04X}", code);
        assert_eq!(properties.is_letter(code), category.is_letter(), "U+{:04X}", code);
        assert_eq!(properties.is_digit(code), category == DecimalNumber, "U+{:04X}", code);
        assert_eq!(
            properties.is_letter_or_digit(code),
            category.is_letter() || category == DecimalNumber,
            "U+{:04X}",
            code
        );
        assert_eq!(properties.is_space_char(code), category.is_separator(), "U+{:04X}", code);
        assert_eq!(
            properties.is_upper_case(code),
            category == UppercaseLetter || packed.has(OTHER_UPPERCASE),
            "U+{:04X}",
            code
        );
        assert_eq!(
            properties.is_lower_case(code),
            category == LowercaseLetter || packed.has(OTHER_LOWERCASE),
            "U+{:04X}",
            code
        );
        assert_eq!(properties.is_title_case(code), category == TitlecaseLetter, "U+{:04X}", code);

        assert_eq!(properties.is_whitespace(code), packed.has(WHITE_SPACE), "U+{:04X}", code);
        assert_eq!(properties.is_ideographic(code), packed.has(IDEOGRAPHIC), "U+{:04X}", code);
        assert_eq!(properties.is_unicode_identifier_start(code), packed.has(ID_START), "U+{:04X}", code);
        assert_eq!(properties.is_unicode_identifier_part(code), packed.has(ID_CONTINUE), "U+{:04X}", code);
        assert_eq!(
            properties.is_java_identifier_start(code),
            packed.has(JAVA_IDENTIFIER_START),
            "U+{:04X}",
            code
        );
        assert_eq!(
            properties.is_java_identifier_part(code),
            packed.has(JAVA_IDENTIFIER_PART),
            "U+{:04X}",
            code
        );
        // в упакованном значении нет отдельного бита, сверяем с записью
        assert_eq!(
            properties.is_identifier_ignorable(code),
            record.is_identifier_ignorable,
            "U+{:04X}",
            code
        );

        assert_eq!(
            properties.to_lower_case(code),
            code.wrapping_add(packed.lower_delta() as u32),
            "U+{:04X}",
            code
        );
        assert_eq!(
            properties.to_upper_case(code),
            code.wrapping_add(packed.upper_delta() as u32),
            "U+{:04X}",
            code
        );
    }
}

/// свёртка регистра - простое преобразование в строчную
#[test]
fn case_folding()
{
    let properties = properties();

    assert_eq!(properties.to_case_folded(0x41), 0x61);
    assert_eq!(properties.to_case_folded(0x61), 0x61);
    assert_eq!(properties.to_case_folded(0x3A3), 0x3C3);
    assert_eq!(properties.to_case_folded(0x1E9E), 0xDF);
    assert_eq!(properties.to_case_folded(0x130), 0x69);
    assert_eq!(properties.to_case_folded(0x10400), 0x10428);
    assert_eq!(properties.to_case_folded(MAX_CODE_POINT + 1), MAX_CODE_POINT + 1);

    for code in 0 ..= MAX_CODE_POINT {
        assert_eq!(properties.to_case_folded(code), properties.to_lower_case(code), "U+{:04X}", code);
    }
}

#[test]
fn case_conversion_is_idempotent()
{
    let properties = properties();

    for code in 0 ..= MAX_CODE_POINT {
        let lower = properties.to_lower_case(code);
        let upper = properties.to_upper_case(code);

        assert_eq!(properties.to_lower_case(lower), lower, "U+{:04X}", code);
        assert_eq!(properties.to_upper_case(upper), upper, "U+{:04X}", code);
    }
}

/// оба простых преобразования есть только у титульных диграфов
#[test]
fn lowercase_priority_is_unambiguous()
{
    let both: Vec<u32> = SOURCE
        .characters
        .iter()
        .filter(|record| record.simple_lowercase.is_some() && record.simple_uppercase.is_some())
        .map(|record| record.code)
        .collect();

    assert_eq!(both, unicode_properties::TITLECASE_DIGRAPHS);
}

#[test]
fn boundaries()
{
    let properties = properties();

    assert!(properties.is_letter(0x41));
    assert_eq!(properties.to_lower_case(0x41), 0x61);
    assert_eq!(properties.to_upper_case(0x61), 0x41);
    assert!(properties.is_digit(0x39));
    assert!(!properties.is_digit(0x3A));

    assert_eq!(char_count(0xFFFF), 1);
    assert_eq!(char_count(0x10000), 2);

    // большие смещения
    assert_eq!(properties.to_lower_case(0x1E9E), 0xDF);
    assert_eq!(properties.to_upper_case(0xB5), 0x39C);
    assert_eq!(properties.to_lower_case(0x2C6F), 0x250);
    assert_eq!(properties.to_upper_case(0x250), 0x2C6F);
    assert_eq!(properties.to_lower_case(0x10A0), 0x2D00);

    // дезерет в SMP
    assert_eq!(properties.to_lower_case(0x10400), 0x10428);
    assert_eq!(properties.to_upper_case(0x1044F), 0x10427);

    // незанятый кодпоинт SIP
    let code = 0x2FFFD;

    assert_eq!(properties.general_category(code), GeneralCategory::Unassigned);
    assert!(!properties.is_letter(code));
    assert!(!properties.is_digit(code));
    assert!(!properties.is_upper_case(code));
    assert!(!properties.is_lower_case(code));
    assert!(!properties.is_whitespace(code));
    assert!(!properties.is_ideographic(code));
    assert!(!properties.is_unicode_identifier_part(code));
    assert!(!properties.is_java_identifier_part(code));
    assert_eq!(properties.to_upper_case(code), code);
    assert_eq!(properties.script_name(properties.script(code)), "Unknown");

    // за пределами Unicode
    for code in [MAX_CODE_POINT + 1, -1i32 as u32] {
        assert_eq!(properties.general_category(code), GeneralCategory::Unassigned);
        assert!(!properties.is_letter(code));
        assert_eq!(properties.to_lower_case(code), code);
        assert_eq!(properties.script(code), unicode_properties::Script::UNKNOWN);
    }
}

#[test]
fn scripts()
{
    let properties = properties();

    assert_eq!(properties.script_name(unicode_properties::Script::UNKNOWN), "Unknown");
    assert_eq!(properties.script_name(properties.script(0x41)), "Latin");
    assert_eq!(properties.script_name(properties.script(0x30)), "Common");
    assert_eq!(properties.script_name(properties.script(0x4E00)), "Han");
    assert_eq!(properties.script_name(properties.script(0x20000)), "Han");
    assert_eq!(properties.script_name(properties.script(0x10400)), "Deseret");
    assert_eq!(properties.script_name(properties.script(0x10A0)), "Georgian");

    // U+0000 - Common, первый встреченный скрипт
    assert_eq!(properties.script(0).id, 1);
    assert!(properties.scripts_count() > 100);
}
