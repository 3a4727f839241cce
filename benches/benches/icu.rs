use criterion::{criterion_group, criterion_main, Criterion};
use icu_casemap::CaseMapper;
use icu_properties::props::{Alnum, GeneralCategory, Script, WhiteSpace};
use icu_properties::{CodePointMapData, CodePointSetData};

mod group;

#[inline(never)]
fn test_classify(text: &str) -> usize
{
    let alnum = CodePointSetData::new::<Alnum>();
    let white_space = CodePointSetData::new::<WhiteSpace>();

    text.chars()
        .filter(|&c| alnum.contains(c) || white_space.contains(c))
        .count()
}

#[inline(never)]
fn test_lower(text: &str) -> u32
{
    let case_mapper = CaseMapper::new();

    text.chars()
        .fold(0, |acc, c| acc ^ u32::from(case_mapper.simple_lowercase(c)))
}

#[inline(never)]
fn test_upper(text: &str) -> u32
{
    let case_mapper = CaseMapper::new();

    text.chars()
        .fold(0, |acc, c| acc ^ u32::from(case_mapper.simple_uppercase(c)))
}

#[inline(never)]
fn test_script(text: &str) -> u32
{
    let scripts = CodePointMapData::<Script>::new();
    let categories = CodePointMapData::<GeneralCategory>::new();

    text.chars().fold(0, |acc, c| {
        acc + scripts.get(c).to_icu4c_value() as u32 + categories.get(c) as u32
    })
}

group!("./../test_data/texts", classify, test_classify, "classify", "icu");
group!("./../test_data/texts", lower, test_lower, "lower", "icu");
group!("./../test_data/texts", upper, test_upper, "upper", "icu");
group!("./../test_data/texts", script, test_script, "script", "icu");

criterion_group!(benches, classify, lower, upper, script);
criterion_main!(benches);
