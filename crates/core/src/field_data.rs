//! Symbology-specific field data preparation.
//!
//! Each [`BarcodeData`] variant checks (and for EAN-13 / UPC-A, pads or
//! truncates) its payload and yields a ready [`FieldData`]. Preparation is
//! pure: nothing reaches the document until the whole payload is accepted.

use serde::{Deserialize, Serialize};

use crate::commands::FieldData;
use crate::error::{BuildError, ValidationError, Violation};
use crate::tokens::{MsiCheckDigit, QrErrorCorrection};
use crate::validate::{check_alphanumeric, check_charset, check_digits, check_length};

const DATA: &str = "data";

/// Code 11 characters.
pub const CODE_11_CHARSET: &str = "0123456789-";
/// Code 39 (and LOGMARS) characters, without extended ASCII.
pub const CODE_39_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-.$/+% ";
/// Code 93 characters, without extended ASCII.
pub const CODE_93_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-.$/+%&,() ";
/// ANSI Codabar characters.
pub const CODABAR_CHARSET: &str = "0123456789-:.$/+";
/// Plessey characters.
pub const PLESSEY_CHARSET: &str = "0123456789ABCDEF";

const EAN_13_LEN: usize = 12;
const UPC_A_LEN: usize = 11;

const TLC39_SERIAL_MAX: usize = 26;
const TLC39_SEGMENT_MAX: usize = 25;
const TLC39_ADDITIONAL_MAX: usize = 139;

/// A barcode payload for one symbology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "symbology", rename_all = "snake_case", deny_unknown_fields)]
#[non_exhaustive]
pub enum BarcodeData {
    /// Code 11: digits and `-`.
    #[serde(rename = "code_11")]
    Code11 {
        /// Payload.
        data: String,
    },
    /// Interleaved 2 of 5: digits.
    #[serde(rename = "interleaved_2_of_5")]
    Interleaved2Of5 {
        /// Payload.
        data: String,
    },
    /// Code 39.
    #[serde(rename = "code_39")]
    Code39 {
        /// Payload.
        data: String,
        /// Full ASCII mode. Not supported.
        #[serde(default)]
        extended_ascii: bool,
    },
    /// Planet Code: digits.
    Planet {
        /// Payload.
        data: String,
    },
    /// EAN-8: digits.
    #[serde(rename = "ean_8")]
    Ean8 {
        /// Payload.
        data: String,
    },
    /// UPC-E: digits.
    #[serde(rename = "upc_e")]
    UpcE {
        /// Payload.
        data: String,
    },
    /// Code 93.
    #[serde(rename = "code_93")]
    Code93 {
        /// Payload.
        data: String,
        /// Full ASCII mode. Not supported.
        #[serde(default)]
        extended_ascii: bool,
    },
    /// EAN-13: digits, zero-padded or truncated to 12.
    #[serde(rename = "ean_13")]
    Ean13 {
        /// Payload.
        data: String,
    },
    /// Industrial 2 of 5: digits.
    #[serde(rename = "industrial_2_of_5")]
    Industrial2Of5 {
        /// Payload.
        data: String,
    },
    /// Standard 2 of 5: digits.
    #[serde(rename = "standard_2_of_5")]
    Standard2Of5 {
        /// Payload.
        data: String,
    },
    /// ANSI Codabar.
    AnsiCodabar {
        /// Payload.
        data: String,
    },
    /// LOGMARS: the Code 39 character set.
    Logmars {
        /// Payload.
        data: String,
    },
    /// MSI: digits, at most 13 with check digits or 14 without.
    Msi {
        /// Payload.
        data: String,
        /// Check digit scheme configured on the matching `^BM`.
        #[serde(default)]
        check_digit: Option<MsiCheckDigit>,
    },
    /// Plessey: hexadecimal digits.
    Plessey {
        /// Payload.
        data: String,
    },
    /// UPC/EAN extension: exactly 2 or 5 digits.
    UpcEanExtension {
        /// Payload.
        data: String,
    },
    /// TLC39 composite.
    Tlc39 {
        /// Six digit ECI number.
        eci_number: String,
        /// Alphanumeric serial number, 1–26 characters.
        #[serde(default)]
        serial_number: Option<String>,
        /// Alphanumeric segments of at most 25 characters, at most 139
        /// characters once joined with commas. Requires a serial number.
        #[serde(default)]
        additional_data: Vec<String>,
    },
    /// UPC-A: digits, zero-padded or truncated to 11.
    #[serde(rename = "upc_a")]
    UpcA {
        /// Payload.
        data: String,
    },
    /// Postal: digits.
    Postal {
        /// Payload.
        data: String,
    },
    /// QR code in automatic data input mode.
    Qr {
        /// Payload.
        data: String,
        /// Error correction level, written ahead of the data.
        #[serde(default)]
        error_correction: QrErrorCorrection,
    },
}

impl BarcodeData {
    /// Validate the payload and build the field data to append.
    pub fn prepare(&self) -> Result<FieldData, BuildError> {
        let payload = match self {
            BarcodeData::Code11 { data } => charset(data, CODE_11_CHARSET)?,
            BarcodeData::Interleaved2Of5 { data }
            | BarcodeData::Planet { data }
            | BarcodeData::Ean8 { data }
            | BarcodeData::UpcE { data }
            | BarcodeData::Industrial2Of5 { data }
            | BarcodeData::Standard2Of5 { data }
            | BarcodeData::Postal { data } => digits(data)?,
            BarcodeData::Code39 {
                extended_ascii: true,
                ..
            } => {
                return Err(BuildError::NotImplemented {
                    capability: "Code 39 extended ASCII",
                });
            }
            BarcodeData::Code93 {
                extended_ascii: true,
                ..
            } => {
                return Err(BuildError::NotImplemented {
                    capability: "Code 93 extended ASCII",
                });
            }
            BarcodeData::Code39 { data, .. } | BarcodeData::Logmars { data } => {
                charset(data, CODE_39_CHARSET)?
            }
            BarcodeData::Code93 { data, .. } => charset(data, CODE_93_CHARSET)?,
            BarcodeData::Ean13 { data } => fixed_width(data, EAN_13_LEN)?,
            BarcodeData::UpcA { data } => fixed_width(data, UPC_A_LEN)?,
            BarcodeData::AnsiCodabar { data } => charset(data, CODABAR_CHARSET)?,
            BarcodeData::Msi { data, check_digit } => {
                let max = check_digit.unwrap_or(MsiCheckDigit::NoCheck).max_data_len();
                check_length(DATA, data, 0, max)?;
                digits(data)?
            }
            BarcodeData::Plessey { data } => charset(data, PLESSEY_CHARSET)?,
            BarcodeData::UpcEanExtension { data } => {
                let len = data.chars().count();
                if len != 2 && len != 5 {
                    return Err(ValidationError::new(
                        DATA,
                        Violation::Rule("must be exactly 2 or 5 digits"),
                    )
                    .into());
                }
                digits(data)?
            }
            BarcodeData::Tlc39 {
                eci_number,
                serial_number,
                additional_data,
            } => tlc39(eci_number, serial_number.as_deref(), additional_data)?,
            BarcodeData::Qr {
                data,
                error_correction,
            } => format!("{error_correction}A,{data}"),
        };
        Ok(FieldData::text(payload))
    }

    /// Short symbology name, for logs and diagnostics.
    pub fn symbology(&self) -> &'static str {
        match self {
            BarcodeData::Code11 { .. } => "code_11",
            BarcodeData::Interleaved2Of5 { .. } => "interleaved_2_of_5",
            BarcodeData::Code39 { .. } => "code_39",
            BarcodeData::Planet { .. } => "planet",
            BarcodeData::Ean8 { .. } => "ean_8",
            BarcodeData::UpcE { .. } => "upc_e",
            BarcodeData::Code93 { .. } => "code_93",
            BarcodeData::Ean13 { .. } => "ean_13",
            BarcodeData::Industrial2Of5 { .. } => "industrial_2_of_5",
            BarcodeData::Standard2Of5 { .. } => "standard_2_of_5",
            BarcodeData::AnsiCodabar { .. } => "ansi_codabar",
            BarcodeData::Logmars { .. } => "logmars",
            BarcodeData::Msi { .. } => "msi",
            BarcodeData::Plessey { .. } => "plessey",
            BarcodeData::UpcEanExtension { .. } => "upc_ean_extension",
            BarcodeData::Tlc39 { .. } => "tlc39",
            BarcodeData::UpcA { .. } => "upc_a",
            BarcodeData::Postal { .. } => "postal",
            BarcodeData::Qr { .. } => "qr",
        }
    }
}

fn digits(data: &str) -> Result<String, ValidationError> {
    check_digits(DATA, data)?;
    Ok(data.to_string())
}

fn charset(data: &str, allowed: &'static str) -> Result<String, ValidationError> {
    check_charset(DATA, data, allowed)?;
    Ok(data.to_string())
}

/// Left-pad with zeros, or keep the leading `width` digits.
fn fixed_width(data: &str, width: usize) -> Result<String, ValidationError> {
    check_digits(DATA, data)?;
    let kept = &data[..data.len().min(width)];
    Ok(format!("{kept:0>width$}"))
}

fn tlc39(
    eci_number: &str,
    serial_number: Option<&str>,
    additional_data: &[String],
) -> Result<String, ValidationError> {
    check_length("eci_number", eci_number, 6, 6)?;
    check_digits("eci_number", eci_number)?;
    let mut parts = vec![eci_number];

    let Some(serial) = serial_number else {
        if !additional_data.is_empty() {
            return Err(ValidationError::new(
                "additional_data",
                Violation::Rule("requires a serial_number"),
            ));
        }
        return Ok(eci_number.to_string());
    };
    check_length("serial_number", serial, 1, TLC39_SERIAL_MAX)?;
    check_alphanumeric("serial_number", serial)?;
    parts.push(serial);

    for segment in additional_data {
        check_length("additional_data", segment, 1, TLC39_SEGMENT_MAX)?;
        check_alphanumeric("additional_data", segment)?;
        parts.push(segment);
    }
    let additional = additional_data.join(",");
    let joined = additional.chars().count();
    if joined > TLC39_ADDITIONAL_MAX {
        return Err(ValidationError::new(
            "additional_data",
            Violation::Length {
                min: 0,
                max: TLC39_ADDITIONAL_MAX,
                actual: joined,
            },
        ));
    }
    Ok(parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(data: BarcodeData) -> Result<String, BuildError> {
        data.prepare().map(|f| f.payload())
    }

    fn data_err(data: BarcodeData) -> Violation {
        payload(data)
            .unwrap_err()
            .as_validation()
            .unwrap()
            .violation
            .clone()
    }

    #[test]
    fn ean13_pads_and_truncates() {
        let p = payload(BarcodeData::Ean13 { data: "123".into() }).unwrap();
        assert_eq!(p, "000000000123");
        let p = payload(BarcodeData::Ean13 {
            data: "1234567890123".into(),
        })
        .unwrap();
        assert_eq!(p, "123456789012");
        assert!(payload(BarcodeData::Ean13 { data: "12a".into() }).is_err());
    }

    #[test]
    fn upca_pads_and_truncates() {
        let p = payload(BarcodeData::UpcA { data: "42".into() }).unwrap();
        assert_eq!(p, "00000000042");
        let p = payload(BarcodeData::UpcA {
            data: "123456789012".into(),
        })
        .unwrap();
        assert_eq!(p, "12345678901");
    }

    #[test]
    fn code39_rejects_lowercase_citing_charset() {
        let v = data_err(BarcodeData::Code39 {
            data: "ABc".into(),
            extended_ascii: false,
        });
        assert_eq!(
            v,
            Violation::IllegalCharacters {
                allowed: CODE_39_CHARSET.into()
            }
        );
        assert!(payload(BarcodeData::Code39 {
            data: "AB-12 $".into(),
            extended_ascii: false
        })
        .is_ok());
    }

    #[test]
    fn extended_ascii_fails_fast() {
        for data in [
            BarcodeData::Code39 {
                data: "abc".into(),
                extended_ascii: true,
            },
            BarcodeData::Code93 {
                data: "abc".into(),
                extended_ascii: true,
            },
        ] {
            assert!(matches!(
                data.prepare(),
                Err(BuildError::NotImplemented { .. })
            ));
        }
    }

    #[test]
    fn code93_accepts_its_wider_set() {
        assert!(payload(BarcodeData::Code93 {
            data: "A&B(1)".into(),
            extended_ascii: false
        })
        .is_ok());
        assert!(payload(BarcodeData::Code39 {
            data: "A&B".into(),
            extended_ascii: false
        })
        .is_err());
    }

    #[test]
    fn digit_only_symbologies() {
        assert!(payload(BarcodeData::Interleaved2Of5 { data: "0123".into() }).is_ok());
        assert_eq!(
            data_err(BarcodeData::Postal { data: "12 34".into() }),
            Violation::NotDigits
        );
        assert_eq!(
            data_err(BarcodeData::Planet { data: String::new() }),
            Violation::NotDigits
        );
    }

    #[test]
    fn msi_length_depends_on_check_digit() {
        let fourteen = "1".repeat(14);
        assert!(payload(BarcodeData::Msi {
            data: fourteen.clone(),
            check_digit: Some(MsiCheckDigit::NoCheck),
        })
        .is_ok());
        assert!(payload(BarcodeData::Msi {
            data: fourteen.clone(),
            check_digit: None,
        })
        .is_ok());
        assert!(matches!(
            data_err(BarcodeData::Msi {
                data: fourteen,
                check_digit: Some(MsiCheckDigit::Mod11Mod10),
            }),
            Violation::Length { max: 13, .. }
        ));
    }

    #[test]
    fn codabar_and_plessey_sets() {
        assert!(payload(BarcodeData::AnsiCodabar { data: "12-34:5.6$/+".into() }).is_ok());
        assert!(payload(BarcodeData::AnsiCodabar { data: "A123B".into() }).is_err());
        assert!(payload(BarcodeData::Plessey { data: "09AF".into() }).is_ok());
        assert!(payload(BarcodeData::Plessey { data: "09AG".into() }).is_err());
        assert!(payload(BarcodeData::Code11 { data: "12-3".into() }).is_ok());
    }

    #[test]
    fn upc_ean_extension_is_two_or_five() {
        assert!(payload(BarcodeData::UpcEanExtension { data: "12".into() }).is_ok());
        assert!(payload(BarcodeData::UpcEanExtension { data: "12345".into() }).is_ok());
        for bad in ["1", "123", "123456", "1a"] {
            assert!(
                payload(BarcodeData::UpcEanExtension { data: bad.into() }).is_err(),
                "{bad}"
            );
        }
    }

    fn tlc39(eci: &str, serial: Option<&str>, extra: &[&str]) -> Result<String, BuildError> {
        payload(BarcodeData::Tlc39 {
            eci_number: eci.into(),
            serial_number: serial.map(Into::into),
            additional_data: extra.iter().map(|s| (*s).to_string()).collect(),
        })
    }

    #[test]
    fn tlc39_composite() {
        assert_eq!(tlc39("123456", None, &[]).unwrap(), "123456");
        assert_eq!(tlc39("123456", Some("SN1"), &[]).unwrap(), "123456,SN1");
        assert_eq!(
            tlc39("123456", Some("SN1"), &["US", "X9"]).unwrap(),
            "123456,SN1,US,X9"
        );
    }

    #[test]
    fn tlc39_eci_must_be_six_digits() {
        assert!(tlc39("12345", None, &[]).is_err());
        assert!(tlc39("1234567", None, &[]).is_err());
        assert!(tlc39("12345A", None, &[]).is_err());
    }

    #[test]
    fn tlc39_serial_and_segment_bounds() {
        assert!(tlc39("123456", Some(""), &[]).is_err());
        assert!(tlc39("123456", Some("A".repeat(27).as_str()), &[]).is_err());
        assert!(tlc39("123456", Some("SN-1"), &[]).is_err());
        assert!(tlc39("123456", Some("SN1"), &["B".repeat(25).as_str()]).is_ok());
        assert!(tlc39("123456", Some("SN1"), &["B".repeat(26).as_str()]).is_err());
        assert!(tlc39("123456", Some("SN1"), &["A,B"]).is_err());
        assert!(tlc39("123456", None, &["US"]).is_err());
    }

    #[test]
    fn tlc39_joined_limit_applies_even_when_segments_fit() {
        let seg = "C".repeat(25);
        // 6 * 25 + 5 commas = 155 > 139
        let six: Vec<&str> = std::iter::repeat_n(seg.as_str(), 6).collect();
        let err = tlc39("123456", Some("SN1"), &six).unwrap_err();
        assert!(matches!(
            err.as_validation().unwrap().violation,
            Violation::Length {
                max: 139,
                actual: 155,
                ..
            }
        ));
        // 5 * 25 + 4 commas = 129
        assert!(tlc39("123456", Some("SN1"), &six[..5]).is_ok());
    }

    #[test]
    fn qr_prefixes_error_correction() {
        let p = payload(BarcodeData::Qr {
            data: "hello".into(),
            error_correction: QrErrorCorrection::default(),
        })
        .unwrap();
        assert_eq!(p, "MA,hello");
        let p = payload(BarcodeData::Qr {
            data: "x".into(),
            error_correction: QrErrorCorrection::Low,
        })
        .unwrap();
        assert_eq!(p, "LA,x");
    }

    #[test]
    fn deserializes_tagged_by_symbology() {
        let d: BarcodeData =
            serde_json::from_str(r#"{"symbology": "ean_13", "data": "123"}"#).unwrap();
        assert_eq!(d, BarcodeData::Ean13 { data: "123".into() });
        let d: BarcodeData = serde_json::from_str(
            r#"{"symbology": "msi", "data": "123", "check_digit": "B"}"#,
        )
        .unwrap();
        assert_eq!(d.symbology(), "msi");
        assert!(serde_json::from_str::<BarcodeData>(
            r#"{"symbology": "msi", "data": "123", "check_digit": "C,"}"#
        )
        .is_err());
    }
}
