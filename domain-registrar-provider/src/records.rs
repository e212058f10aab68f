//! DNS record lookup inside a zone.

use crate::error::{RegistrarError, Result};
use crate::types::{Record, RecordType};

/// Suffix of the default reverse name the platform assigns to an instance address.
pub const DEFAULT_REVERSE_SUFFIX: &str = ".instances.scw.cloud";

/// Canonical form of record data for comparison.
///
/// Lower-cased; hostname-valued types lose a trailing `.`, TXT loses its quotes.
/// Whitespace is kept as is.
fn normalize_record_data(data: &str, record_type: &RecordType) -> String {
    let data = data.to_lowercase();
    match record_type {
        RecordType::Cname
        | RecordType::Ns
        | RecordType::Mx
        | RecordType::Srv
        | RecordType::Ptr
        | RecordType::Alias => data.trim_end_matches('.').to_string(),
        RecordType::Txt => data.trim_matches('"').to_string(),
        _ => data,
    }
}

/// Finds the single record of `record_type` whose data starts with `data`.
///
/// Both sides are normalised with the candidate's type before the prefix comparison.
///
/// # Errors
///
/// - [`RegistrarError::DuplicateRecordMatch`] if several records qualify
/// - [`RegistrarError::RecordNotFound`] if none does
pub fn get_record_from_type_and_data<'a>(
    record_type: &RecordType,
    data: &str,
    records: &'a [Record],
) -> Result<&'a Record> {
    let mut matches = records.iter().filter(|r| {
        r.record_type == *record_type
            && normalize_record_data(&r.data, &r.record_type)
                .starts_with(&normalize_record_data(data, &r.record_type))
    });

    let Some(found) = matches.next() else {
        return Err(RegistrarError::RecordNotFound {
            record_type: record_type.to_string(),
            data: data.to_string(),
        });
    };

    if matches.next().is_some() {
        log::warn!("[registrar] ambiguous {record_type} record lookup for {data:?}");
        return Err(RegistrarError::DuplicateRecordMatch {
            record_type: record_type.to_string(),
            data: data.to_string(),
        });
    }

    Ok(found)
}

/// Default reverse name for an IPv4 address: `1.2.3.4` → `4-3-2-1.instances.scw.cloud`.
pub fn find_default_reverse(address: &str) -> String {
    let mut name = address.rsplit('.').collect::<Vec<_>>().join("-");
    name.push_str(DEFAULT_REVERSE_SUFFIX);
    name
}
