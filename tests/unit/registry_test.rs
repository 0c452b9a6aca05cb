//! Tests for the strategy registry

use std::collections::HashSet;

use brdoc::DocumentError;
use brdoc::core::models::{DocumentKind, Uf};
use brdoc::documents;

use super::common::all_kinds;

#[test]
fn test_strategy_matches_kind() {
    for kind in all_kinds() {
        assert_eq!(documents::strategy(kind).kind, kind);
    }
}

#[test]
fn test_every_uf_has_a_strategy() {
    for uf in Uf::ALL {
        assert_eq!(documents::strategy(DocumentKind::Ie(uf)).kind.uf(), Some(uf));
    }
}

#[test]
fn test_all_is_complete_and_distinct() {
    let kinds = all_kinds();
    assert_eq!(kinds.len(), 30);
    let distinct: HashSet<_> = kinds.iter().copied().collect();
    assert_eq!(distinct.len(), kinds.len());
}

#[test]
fn test_all_lists_national_first() {
    let kinds = all_kinds();
    assert_eq!(
        &kinds[..4],
        &[
            DocumentKind::Cnh,
            DocumentKind::Cpf,
            DocumentKind::Cnpj,
            DocumentKind::Ie(Uf::Ac)
        ]
    );
}

#[test]
fn test_lookup_by_tag() {
    assert_eq!(documents::lookup("ie-rn").unwrap().kind, DocumentKind::Ie(Uf::Rn));
    assert_eq!(documents::lookup("CNPJ").unwrap().kind, DocumentKind::Cnpj);
    assert!(documents::lookup("nope").is_none());
}

#[test]
fn test_resolve_reports_unknown_tag() {
    assert!(documents::resolve("cpf").is_ok());
    let err = documents::resolve("ie-zz").unwrap_err();
    assert!(matches!(err, DocumentError::UnknownKind(_)));
    assert!(err.to_string().contains("ie-zz"));
}

#[test]
fn test_masks_cover_every_digit() {
    for strategy in documents::all() {
        assert_eq!(strategy.mask.digit_count(), strategy.digits, "{}", strategy.kind);
        assert!(strategy.check_digit_count() >= 1, "{}", strategy.kind);
        assert!(strategy.check_digit_count() < strategy.digits, "{}", strategy.kind);
    }
}
