use unicode_properties::packed::{LARGE_LOWERCASE_DELTA, LARGE_UPPERCASE_DELTA};
use unicode_properties::RangeValue;
use unicode_properties_source::CharacterRecord;

use super::ranges::compress_entries;
use crate::encode::EncodedCase;
use crate::error::PrepareError;

/// размер отрезка смещений в байтах: начало, конец, смещение
pub const RANGE_BYTES: usize = 12;

/// смещения регистра, не поместившиеся в упакованное значение
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseDeltaTables
{
    /// к строчным
    pub lowercase: Vec<RangeValue<i32>>,
    /// к прописным
    pub uppercase: Vec<RangeValue<i32>>,
}

/// собрать отрезки больших смещений: для каждого кодпоинта с флагом большого смещения
/// смещение берётся из кодирования исходной записи, флаг и кодирование должны совпадать
pub fn build(records: &[CharacterRecord], packed: &[u32]) -> Result<CaseDeltaTables, PrepareError>
{
    if records.len() != packed.len() {
        return Err(PrepareError::LengthMismatch {
            records: records.len(),
            packed: packed.len(),
        });
    }

    let mut lowercase: Vec<(u32, i32)> = vec![];
    let mut uppercase: Vec<(u32, i32)> = vec![];

    for (record, &value) in records.iter().zip(packed) {
        let encoded = EncodedCase::of(record);

        match (value & LARGE_LOWERCASE_DELTA != 0, value & LARGE_UPPERCASE_DELTA != 0, encoded) {
            (false, false, _) => (),
            (true, false, EncodedCase::LargeLowercase(delta)) => lowercase.push((record.code, delta)),
            (false, true, EncodedCase::LargeUppercase(delta)) => uppercase.push((record.code, delta)),
            _ => return Err(PrepareError::MissingCaseTarget(record.code)),
        }
    }

    let tables = CaseDeltaTables {
        lowercase: compress_entries(&lowercase),
        uppercase: compress_entries(&uppercase),
    };

    info!(
        "большие смещения регистра: к строчным {} кодпоинтов ({} отрезков), к прописным {} ({} отрезков)",
        lowercase.len(),
        tables.lowercase.len(),
        uppercase.len(),
        tables.uppercase.len()
    );

    Ok(tables)
}
