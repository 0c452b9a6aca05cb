//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use brdoc::core::ports::Document;
use brdoc::documents;
use test_case::test_case;

// =============================================================================
// Validation
// =============================================================================

#[test_case("cnh", "76035184470", true ; "cnh known good")]
#[test_case("cnh", "89035184470", false ; "cnh bad checksum")]
#[test_case("cnh", "11111111111", false ; "cnh repeated")]
#[test_case("cnh", "7603518447", false ; "cnh ten digits")]
#[test_case("cpf", "529.982.247-25", true ; "cpf masked")]
#[test_case("cpf", "000.000.000-00", false ; "cpf zeros")]
#[test_case("cnpj", "11.222.333/0001-81", true ; "cnpj masked")]
#[test_case("cnpj", "11.222.333/0001-80", false ; "cnpj bad checksum")]
#[test_case("ie-ce", "30130465-3", true ; "ce masked")]
#[test_case("ie-mg", "062.307.904/0081", true ; "mg masked")]
#[test_case("ie-mg", "062.307.904/0091", false ; "mg bad first digit")]
#[test_case("ie-pa", "15-487790-5", true ; "pa masked")]
#[test_case("ie-rs", "701/5322855", true ; "rs masked")]
#[test_case("ie-pb", "06000001-5", true ; "pb published example")]
#[test_case("ie-pb", "16285686-5", true ; "pb sixteen prefix")]
#[test_case("ie-pb", "06000001-6", false ; "pb bad checksum")]
#[test_case("ie-pi", "012345679", true ; "pi published example")]
#[test_case("ie-pi", "196143438", true ; "pi nineteen prefix")]
#[test_case("ie-rr", "24006628-1", true ; "rr mod nine")]
#[test_case("ie-rj", "99.999.99-3", true ; "rj eight digits")]
#[test_case("ie-pr", "12345678-50", true ; "pr two digits")]
#[test_case("ie-pe", "0321418-40", true ; "pe efisco")]
#[test_case("ie-df", "07300001001-09", true ; "df thirteen digits")]
#[test_case("ie-mt", "0013000001-9", true ; "mt eleven digits")]
#[test_case("ie-sp", "110.042.490.114", true ; "sp twelve digits")]
#[test_case("ie-sp", "110.042.490.115", false ; "sp bad last digit")]
fn test_is_valid(document: &str, value: &str, expected: bool) {
    let strategy = documents::lookup(document).unwrap();
    assert_eq!(strategy.is_valid(value), expected);
}

// =============================================================================
// Masking
// =============================================================================

#[test_case("ie-ce", "301304653", "30130465-3" ; "ce")]
#[test_case("ie-ma", "120177463", "12017746-3" ; "ma")]
#[test_case("ie-mg", "0623079040081", "062.307.904/0081" ; "mg")]
#[test_case("ie-pa", "154877905", "15-487790-5" ; "pa")]
#[test_case("ie-pb", "162856865", "16285686-5" ; "pb")]
#[test_case("ie-rr", "240066281", "24006628-1" ; "rr")]
#[test_case("ie-rs", "7015322855", "701/5322855" ; "rs")]
#[test_case("ie-se", "490161227", "49016122-7" ; "se")]
#[test_case("ie-ac", "0100482300112", "01.004.823/001-12" ; "ac")]
#[test_case("cpf", "52998224725", "529.982.247-25" ; "cpf")]
#[test_case("cnh", "76035184470", "76035184470" ; "cnh unmasked")]
fn test_mask(document: &str, canonical: &str, masked: &str) {
    let strategy = documents::lookup(document).unwrap();
    assert_eq!(strategy.mask(canonical).unwrap(), masked);
    assert_eq!(strategy.unmask(masked), canonical);
}

// =============================================================================
// Document tags
// =============================================================================

#[test_case("CNH" ; "upper national")]
#[test_case("cpf" ; "lower national")]
#[test_case("IE-SP" ; "ie dash")]
#[test_case("ie_sp" ; "ie underscore")]
#[test_case("sp" ; "bare uf")]
fn test_lookup_accepts(tag: &str) {
    assert!(documents::lookup(tag).is_some());
}

#[test_case("" ; "empty")]
#[test_case("rg" ; "unsupported document")]
#[test_case("ie-xx" ; "unknown uf")]
#[test_case("ie-" ; "missing uf")]
fn test_lookup_rejects(tag: &str) {
    assert!(documents::lookup(tag).is_none());
}
