//! Barcode command plus payload flows, as a caller would write them.

mod common;

use common::{body, failed_field};
use zpl_builder_core::commands::barcode::{Code39, Ean13, Logmars, Postal, Qr, Tlc39, UpcA};
use zpl_builder_core::field_data::CODE_39_CHARSET;
use zpl_builder_core::tokens::QrErrorCorrection;
use zpl_builder_core::{
    BarcodeData, BarcodeDefaults, FieldOrigin, LabelBuilder, Orientation, Violation, YesNo,
};

fn origin(x: u32, y: u32) -> FieldOrigin {
    FieldOrigin {
        x: Some(x),
        y: Some(y),
        justification: None,
    }
}

#[test]
fn ean13_short_payload_is_zero_padded() {
    let mut label = LabelBuilder::new();
    label
        .add(&origin(50, 50))
        .unwrap()
        .add(&Ean13 {
            orientation: Some(Orientation::Normal),
            height: Some(100),
            print_text: Some(YesNo::Yes),
            text_above: Some(YesNo::No),
        })
        .unwrap()
        .barcode_data(&BarcodeData::Ean13 { data: "123".into() })
        .unwrap();
    assert_eq!(
        body(&label),
        "^FO50,50\n^BEN,100,Y,N\n^FD000000000123^FS\n"
    );
}

#[test]
fn ean13_long_payload_is_truncated() {
    let mut label = LabelBuilder::new();
    label
        .barcode_data(&BarcodeData::Ean13 {
            data: "9780201379624".into(),
        })
        .unwrap();
    assert_eq!(body(&label), "^FD978020137962^FS\n");
}

#[test]
fn upca_payload_is_eleven_digits() {
    let mut label = LabelBuilder::new();
    label
        .add(&UpcA {
            orientation: Some(Orientation::Normal),
            height: Some(80),
            ..Default::default()
        })
        .unwrap()
        .barcode_data(&BarcodeData::UpcA { data: "7".into() })
        .unwrap();
    assert_eq!(body(&label), "^BUN,80\n^FD00000000007^FS\n");
}

#[test]
fn code39_lowercase_is_rejected_with_allowed_set() {
    let mut label = LabelBuilder::new();
    label
        .add(&Code39 {
            orientation: Some(Orientation::Normal),
            check_digit: Some(YesNo::No),
            height: Some(60),
            ..Default::default()
        })
        .unwrap();
    let err = label
        .barcode_data(&BarcodeData::Code39 {
            data: "ABC-abc".into(),
            extended_ascii: false,
        })
        .unwrap_err();
    assert_eq!(failed_field(&err), "data");
    assert_eq!(
        err.as_validation().unwrap().violation,
        Violation::IllegalCharacters {
            allowed: CODE_39_CHARSET.into()
        }
    );
    assert!(err.to_string().contains(CODE_39_CHARSET));
    // The command went in, the payload did not.
    assert_eq!(body(&label), "^B3N,N,60\n");
}

#[test]
fn tlc39_full_flow() {
    let mut label = LabelBuilder::new();
    label
        .add(&BarcodeDefaults {
            module_width: Some(2),
            ratio: Some(3.0),
            height: Some(10),
        })
        .unwrap()
        .add(&Tlc39 {
            orientation: Some(Orientation::Normal),
            code39_width: Some(2),
            code39_ratio: Some(2.0),
            code39_height: Some(100),
            micropdf_height: Some(4),
            micropdf_width: Some(2),
        })
        .unwrap()
        .barcode_data(&BarcodeData::Tlc39 {
            eci_number: "123456".into(),
            serial_number: Some("ABC123".into()),
            additional_data: vec!["US".into(), "LOT42".into()],
        })
        .unwrap();
    assert_eq!(
        body(&label),
        "^BY2,3.0,10\n^BTN,2,2.0,100,4,2\n^FD123456,ABC123,US,LOT42^FS\n"
    );
}

#[test]
fn tlc39_identifier_must_be_exactly_six_digits() {
    for eci in ["12345", "1234567", "12345X", ""] {
        let err = LabelBuilder::new()
            .barcode_data(&BarcodeData::Tlc39 {
                eci_number: eci.into(),
                serial_number: None,
                additional_data: Vec::new(),
            })
            .unwrap_err();
        assert_eq!(failed_field(&err), "eci_number", "{eci:?}");
    }
}

#[test]
fn tlc39_aggregate_limit_applies_to_joined_segments() {
    // Every segment fits on its own; 7 * 20 + 6 commas = 146 does not.
    let segments: Vec<String> = (0..7).map(|_| "D".repeat(20)).collect();
    let err = LabelBuilder::new()
        .barcode_data(&BarcodeData::Tlc39 {
            eci_number: "123456".into(),
            serial_number: Some("SN".into()),
            additional_data: segments,
        })
        .unwrap_err();
    assert_eq!(failed_field(&err), "additional_data");
}

#[test]
fn qr_command_and_payload() {
    let mut label = LabelBuilder::new();
    label
        .add(&origin(20, 20))
        .unwrap()
        .add(&Qr {
            model: Some(2),
            magnification: Some(5),
            error_correction: Some(QrErrorCorrection::High),
            mask: None,
        })
        .unwrap()
        .barcode_data(&BarcodeData::Qr {
            data: "https://example.com".into(),
            error_correction: QrErrorCorrection::High,
        })
        .unwrap();
    assert_eq!(
        body(&label),
        "^FO20,20\n^BQN,2,5,Q\n^FDQA,https://example.com^FS\n"
    );
}

#[test]
fn postal_code_type_is_dropped_after_a_missing_height() {
    let mut label = LabelBuilder::new();
    label
        .add(&Postal {
            orientation: Some(Orientation::Normal),
            height: None,
            print_text: Some(YesNo::Yes),
            text_above: Some(YesNo::No),
            code_type: Some(3),
        })
        .unwrap()
        .add(&Postal {
            orientation: Some(Orientation::Normal),
            height: Some(40),
            print_text: Some(YesNo::Yes),
            text_above: Some(YesNo::No),
            code_type: Some(3),
        })
        .unwrap();
    assert_eq!(body(&label), "^BZN\n^BZN,40,Y,N,3\n");
}

#[test]
fn logmars_text_above_is_dropped_after_a_missing_height() {
    let mut label = LabelBuilder::new();
    label
        .add(&Logmars {
            orientation: Some(Orientation::Normal),
            height: None,
            text_above: Some(YesNo::Yes),
        })
        .unwrap()
        .add(&Logmars {
            orientation: Some(Orientation::Rotated),
            height: Some(70),
            text_above: Some(YesNo::Yes),
        })
        .unwrap();
    assert_eq!(body(&label), "^BLN\n^BLR,70,Y\n");
}
