//! Bulk import records
//!
//! Parses semicolon-delimited records of the form
//! `fullName;email;hashPrefix:hashValue;phone`. Trailing empty fields are
//! allowed. A record is well-formed in exactly one of two shapes: an email
//! row carrying a precomputed hash, or a phone row with a blank email.

use crate::error::RegistryError;

const FIELD_DELIMITER: char = ';';
const HASH_DELIMITER: char = ':';
const FIELD_COUNT: usize = 4;

#[derive(Debug)]
pub(crate) struct ImportRecord {
    pub full_name: String,
    pub kind: RecordKind,
}

#[derive(Debug)]
pub(crate) enum RecordKind {
    Imported {
        email: String,
        hash_prefix: String,
        password_hash: String,
    },
    Phone {
        raw_phone: String,
    },
}

/// Parses one import row. The row index is carried into the error so a
/// failed bulk import names the offending record.
pub(crate) fn parse_record(index: usize, row: &str) -> Result<ImportRecord, RegistryError> {
    let malformed = || RegistryError::MalformedRecord {
        index,
        row: row.to_string(),
    };

    let mut fields = [""; FIELD_COUNT];
    for (position, field) in row.split(FIELD_DELIMITER).enumerate() {
        if position < FIELD_COUNT {
            fields[position] = field.trim();
        } else if !field.trim().is_empty() {
            return Err(malformed());
        }
    }
    let [full_name, email, password_spec, phone] = fields;
    if full_name.is_empty() {
        return Err(malformed());
    }

    let kind = if !email.is_empty() {
        // Email rows must carry a precomputed hash; a phone field on the
        // same row is ignored.
        let (hash_prefix, password_hash) = password_spec
            .split_once(HASH_DELIMITER)
            .ok_or_else(|| malformed())?;
        if hash_prefix.is_empty() || password_hash.is_empty() {
            return Err(malformed());
        }
        RecordKind::Imported {
            email: email.to_string(),
            hash_prefix: hash_prefix.to_string(),
            password_hash: password_hash.to_string(),
        }
    } else if !phone.is_empty() {
        RecordKind::Phone {
            raw_phone: phone.to_string(),
        }
    } else {
        return Err(malformed());
    };

    Ok(ImportRecord {
        full_name: full_name.to_string(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_email_record() {
        let record = parse_record(0, "John Doe;JohnDoe@unknow.com;abc:def;;").unwrap();
        assert_eq!("John Doe", record.full_name);
        match record.kind {
            RecordKind::Imported {
                email,
                hash_prefix,
                password_hash,
            } => {
                assert_eq!("JohnDoe@unknow.com", email);
                assert_eq!("abc", hash_prefix);
                assert_eq!("def", password_hash);
            }
            RecordKind::Phone { .. } => panic!("expected imported record"),
        }
    }

    #[test]
    fn test_parse_phone_record() {
        let record = parse_record(0, "John Stone;;abc:def;+7 (848) 239-50-85;").unwrap();
        match record.kind {
            RecordKind::Phone { raw_phone } => assert_eq!("+7 (848) 239-50-85", raw_phone),
            RecordKind::Imported { .. } => panic!("expected phone record"),
        }
    }

    #[test]
    fn test_email_wins_over_phone() {
        let record =
            parse_record(0, "Ponnappa;Ponnappa@unknown.com;abc:def;+7 (843) 054-48-00;").unwrap();
        assert!(matches!(record.kind, RecordKind::Imported { .. }));
    }

    #[test]
    fn test_missing_fields_are_absent() {
        // Trailing fields may be omitted entirely.
        let record = parse_record(0, "John Stone;;abc:def;+7 (848) 239-50-85").unwrap();
        assert!(matches!(record.kind, RecordKind::Phone { .. }));
    }

    #[test]
    fn test_malformed_records_rejected() {
        assert!(parse_record(0, "John").is_err());
        assert!(parse_record(0, "").is_err());
        assert!(parse_record(0, ";john@unknown.com;abc:def;;").is_err());
        assert!(parse_record(0, "John Doe;john@unknown.com;nodigest;;").is_err());
        assert!(parse_record(0, "John Doe;john@unknown.com;:def;;").is_err());
        assert!(parse_record(0, "John Doe;john@unknown.com;abc:;;").is_err());
        assert!(parse_record(0, "John Doe;;;;extra").is_err());
    }

    #[test]
    fn test_error_names_offending_row() {
        let err = parse_record(3, "John").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("row 3"));
        assert!(message.contains("John"));
    }
}
