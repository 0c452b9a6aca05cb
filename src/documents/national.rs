//! National documents: CNH, CPF and CNPJ

use crate::core::models::{
    CheckDigitRule, CheckDigitSpec, DocumentKind, MaskSpec, Remainder, Scheme, Strategy,
};

/// Driver's-license number.
///
/// The second check digit is reduced by 2 when the first one overflowed.
pub static CNH: Strategy = Strategy {
    kind: DocumentKind::Cnh,
    digits: 11,
    check_digits: CheckDigitSpec {
        schemes: &[Scheme {
            selector: None,
            rules: &[
                CheckDigitRule::new(
                    9,
                    &[9, 8, 7, 6, 5, 4, 3, 2, 1],
                    Remainder::Direct {
                        modulus: 11,
                        penalty: 0,
                    },
                ),
                CheckDigitRule::new(
                    10,
                    &[1, 2, 3, 4, 5, 6, 7, 8, 9],
                    Remainder::Direct {
                        modulus: 11,
                        penalty: 2,
                    },
                ),
            ],
        }],
    },
    mask: MaskSpec::new("###########"),
    constraints: &[],
    reject_repeated: true,
};

/// Individual taxpayer number
pub static CPF: Strategy = Strategy {
    kind: DocumentKind::Cpf,
    digits: 11,
    check_digits: CheckDigitSpec {
        schemes: &[Scheme {
            selector: None,
            rules: &[
                CheckDigitRule::standard(9, &[10, 9, 8, 7, 6, 5, 4, 3, 2]),
                CheckDigitRule::standard(10, &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2]),
            ],
        }],
    },
    mask: MaskSpec::new("###.###.###-##"),
    constraints: &[],
    reject_repeated: true,
};

/// Company taxpayer number
pub static CNPJ: Strategy = Strategy {
    kind: DocumentKind::Cnpj,
    digits: 14,
    check_digits: CheckDigitSpec {
        schemes: &[Scheme {
            selector: None,
            rules: &[
                CheckDigitRule::standard(12, &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]),
                CheckDigitRule::standard(13, &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]),
            ],
        }],
    },
    mask: MaskSpec::new("##.###.###/####-##"),
    constraints: &[],
    reject_repeated: true,
};
