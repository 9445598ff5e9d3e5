// tests/integration_smoke.rs
//
// Интеграционные «дымовые» тесты верхнего уровня: публичный API,
// диспетчеризация по символикам, делегирование и старый bool-API.

use ultracode::core::pattern::is_wire_row;
use ultracode::prelude::*;

fn row0(r: &SymbolResult) -> &str {
    r.pattern.row(0).expect("single row")
}

#[test]
fn every_symbology_produces_one_wire_row() {
    let opts = EncodeOptions::default();
    let samples = [
        (Symbology::Codabar, "A40156B"),
        (Symbology::Code39, "HELLO-39"),
        (Symbology::Code39Extended, "hello, world"),
        (Symbology::Logmars, "LOGMARS"),
        (Symbology::Code32, "12345678"),
        (Symbology::Pzn, "1234567"),
        (Symbology::Code128, "HELLO-128"),
        (Symbology::Nve18, "12345"),
        (Symbology::KoreaPost, "123456"),
        (Symbology::Pharmacode, "131070"),
    ];
    for (s, data) in samples {
        let r = encode(s, data, &opts).unwrap_or_else(|e| panic!("{s}: {e}"));
        assert_eq!(r.row_count(), 1, "{s}");
        assert_eq!(r.row_heights, vec![RowHeight::Default], "{s}");
        assert!(is_wire_row(row0(&r)), "{s}");
        let widths = r.pattern.widths(0);
        assert_eq!(widths.len(), row0(&r).len(), "{s}");
        assert_eq!(widths.iter().map(|&w| usize::from(w)).sum::<usize>(), r.width(), "{s}");
    }
}

#[test]
fn spec_check_digits() {
    let opts = EncodeOptions::default();
    let korea = encode(Symbology::KoreaPost, "123456", &opts).unwrap();
    assert_eq!(korea.info.get("Check Digit"), Some("9"));

    let nve = encode(Symbology::Nve18, "1", &opts).unwrap();
    assert_eq!(nve.info.get("NVE Check Digit"), Some("7"));

    let pzn = encode(Symbology::Pzn, "1234567", &opts).unwrap();
    assert_eq!(pzn.info.get("Check Digit"), Some("8"));
    assert_eq!(pzn.readable, "*PZN-12345678*");
}

#[test]
fn pzn_residue_ten_is_rejected() {
    let err = encode(Symbology::Pzn, "0000003", &EncodeOptions::default()).unwrap_err();
    assert_eq!(err, EncodeError::InvalidCheckDigit("PZN"));
}

#[test]
fn pharmacode_three() {
    let r = encode(Symbology::Pharmacode, "3", &EncodeOptions::default()).unwrap();
    assert_eq!(row0(&r), "1212");
    assert!(r.readable.is_empty());
}

#[test]
fn delegation_fidelity() {
    let opts = EncodeOptions::default();

    let nve = encode(Symbology::Nve18, "1", &opts).unwrap();
    let gs1 = EncodeOptions::default().with_data_type(DataType::Gs1);
    let direct = encode(Symbology::Code128, &nve.content, &gs1).unwrap();
    assert_eq!(nve.pattern, direct.pattern);

    let pzn = encode(Symbology::Pzn, "1234567", &opts).unwrap();
    let direct = encode(Symbology::Code39, &pzn.content, &opts).unwrap();
    assert_eq!(pzn.pattern, direct.pattern);

    let code32 = encode(Symbology::Code32, "143421", &opts).unwrap();
    let direct = encode(Symbology::Code39, &code32.content, &opts).unwrap();
    assert_eq!(code32.pattern, direct.pattern);
}

#[test]
fn grammar_rejections_have_messages() {
    let opts = EncodeOptions::default();
    let bad = [
        (Symbology::Codabar, "12345"),
        (Symbology::Code39, "lower_case"),
        (Symbology::Code39Extended, "žluť"),
        (Symbology::Code32, "12.3"),
        (Symbology::Pzn, "PZN123"),
        (Symbology::Code128, "€"),
        (Symbology::Nve18, "ABC"),
        (Symbology::KoreaPost, "12-34"),
        (Symbology::Pharmacode, "3.5"),
    ];
    for (s, data) in bad {
        let err = encode(s, data, &opts).expect_err(s.name());
        assert!(!err.to_string().is_empty());

        let mut sym = Symbol::new(s);
        sym.set_content(data);
        assert!(!sym.encode(), "{s}");
        assert!(sym.pattern().is_none(), "{s}");
        assert!(sym.error_message().is_some(), "{s}");
    }
}

#[test]
fn lowercase_outside_alphabet_is_rejected() {
    let opts = EncodeOptions::default();
    for (s, data) in [
        (Symbology::Codabar, "a1b"),
        (Symbology::Code39, "abc"),
        (Symbology::Logmars, "abc"),
    ] {
        assert_eq!(encode(s, data, &opts), Err(EncodeError::InvalidCharacters), "{s}");
        assert_eq!(validate(s, data, &opts), Err(EncodeError::InvalidCharacters), "{s}");
    }
    // Строчные — забота Code 39 Extended.
    assert!(encode(Symbology::Code39Extended, "abc", &opts).is_ok());
}

#[test]
fn revalidation_is_idempotent() {
    let opts = EncodeOptions::default();
    let samples = [
        (Symbology::Codabar, "A1234B"),
        (Symbology::Code39, "ABC"),
        (Symbology::Code39Extended, "abc"),
        (Symbology::Logmars, "ABC"),
        (Symbology::Code32, "77"),
        (Symbology::Pzn, "77"),
        (Symbology::Code128, "abc123"),
        (Symbology::Nve18, "77"),
        (Symbology::KoreaPost, "77"),
        (Symbology::Pharmacode, "0077"),
    ];
    for (s, data) in samples {
        let once = validate(s, data, &opts).unwrap();
        let twice = validate(s, &once, &opts).unwrap();
        assert_eq!(once, twice, "{s}");
    }
}

#[test]
fn readable_location_is_passed_through() {
    let opts = EncodeOptions::default().with_readable_location(HumanReadableLocation::Top);
    for s in [Symbology::Nve18, Symbology::Pzn, Symbology::KoreaPost] {
        let r = encode(s, "1", &opts).unwrap();
        assert_eq!(r.readable_location, HumanReadableLocation::Top, "{s}");
    }
}

#[test]
fn result_serializes_to_json() {
    let r = encode(Symbology::Pharmacode, "3", &EncodeOptions::default()).unwrap();
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["symbology"], "Pharmacode");
    assert_eq!(v["pattern"][0], "1212");
    assert_eq!(v["row_heights"][0], "Default");
}
