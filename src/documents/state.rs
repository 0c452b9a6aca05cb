//! State tax registrations (Inscrição Estadual), one strategy per UF
//!
//! Layouts and check-digit rules follow each state's published SINTEGRA
//! format. Where a state accepts both an old and a current length, the
//! current one is used.

use crate::core::models::{
    Band, CheckDigitRule, CheckDigitSpec, Constraint, DocumentKind, MaskSpec, Remainder, Scheme,
    Selector, Strategy, Uf,
};

const W9_2: &[u32] = &[9, 8, 7, 6, 5, 4, 3, 2];

/// Nine digits, one standard mod-11 check digit over weights 9..2
const NINE_STANDARD: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[CheckDigitRule::standard(8, W9_2)],
    }],
};

/// Thirteen digits, two chained mod-11 check digits
const THIRTEEN_CHAINED: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[
            CheckDigitRule::standard(11, &[4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]),
            CheckDigitRule::standard(12, &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]),
        ],
    }],
};

// The base number decides what is added to the sum and which digit a zero
// remainder gives.
const AP_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[CheckDigitRule::standard(8, W9_2).with_bands(&[
            Band {
                first: 3_000_001,
                last: 3_017_000,
                offset: 5,
                on_zero: 0,
                on_one: 0,
            },
            Band {
                first: 3_017_001,
                last: 3_019_022,
                offset: 9,
                on_zero: 1,
                on_one: 0,
            },
        ])],
    }],
};

// The second digit selects mod 10 or mod 11. The last digit is computed
// first and then weighted into the penultimate one.
const BA_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[
        Scheme {
            selector: Some(Selector {
                position: 1,
                digits: "0123458",
            }),
            rules: &[
                CheckDigitRule::new(8, &[8, 7, 6, 5, 4, 3, 2], Remainder::Complement10 { fold: false }),
                CheckDigitRule::new(
                    7,
                    &[9, 8, 7, 6, 5, 4, 3, 0, 2],
                    Remainder::Complement10 { fold: false },
                ),
            ],
        },
        Scheme {
            selector: Some(Selector {
                position: 1,
                digits: "679",
            }),
            rules: &[
                CheckDigitRule::standard(8, &[8, 7, 6, 5, 4, 3, 2]),
                CheckDigitRule::standard(7, &[9, 8, 7, 6, 5, 4, 3, 0, 2]),
            ],
        },
    ],
};

const GO_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[CheckDigitRule::standard(8, W9_2).with_bands(&[Band {
            first: 10_103_105,
            last: 10_119_997,
            offset: 0,
            on_zero: 0,
            on_one: 1,
        }])],
    }],
};

// First check digit: a zero is inserted after the municipality code and the
// digit sum taken over weights 1, 2 alternating. Written against the
// original positions, that gives the weights below.
const MG_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[
            CheckDigitRule::new(
                11,
                &[1, 2, 1, 1, 2, 1, 2, 1, 2, 1, 2],
                Remainder::Complement10 { fold: true },
            ),
            CheckDigitRule::standard(12, &[3, 2, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2]),
        ],
    }],
};

const MT_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[CheckDigitRule::standard(10, &[3, 2, 9, 8, 7, 6, 5, 4, 3, 2])],
    }],
};

const PE_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[
            CheckDigitRule::standard(7, &[8, 7, 6, 5, 4, 3, 2]),
            CheckDigitRule::standard(8, W9_2),
        ],
    }],
};

const PR_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[
            CheckDigitRule::standard(8, &[3, 2, 7, 6, 5, 4, 3, 2]),
            CheckDigitRule::standard(9, &[4, 3, 2, 7, 6, 5, 4, 3, 2]),
        ],
    }],
};

const RJ_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[CheckDigitRule::standard(7, &[2, 7, 6, 5, 4, 3, 2])],
    }],
};

// 11 - r, where 10 and 11 wrap to 0 and 1
const RO_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[CheckDigitRule::new(
            13,
            &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
            Remainder::Complement11 {
                on_zero: 1,
                on_one: 0,
            },
        )],
    }],
};

const RR_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[CheckDigitRule::new(
            8,
            &[1, 2, 3, 4, 5, 6, 7, 8],
            Remainder::Direct {
                modulus: 9,
                penalty: 0,
            },
        )],
    }],
};

const RS_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[CheckDigitRule::standard(9, &[2, 9, 8, 7, 6, 5, 4, 3, 2])],
    }],
};

// The first check digit sits in the middle, at position 8
const SP_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[
            CheckDigitRule::new(
                8,
                &[1, 3, 4, 5, 6, 7, 8, 10],
                Remainder::Direct {
                    modulus: 11,
                    penalty: 0,
                },
            ),
            CheckDigitRule::new(
                11,
                &[3, 2, 10, 9, 8, 7, 6, 5, 4, 3, 2],
                Remainder::Direct {
                    modulus: 11,
                    penalty: 0,
                },
            ),
        ],
    }],
};

// The category code (digits 3 and 4) carries no weight
const TO_DIGITS: CheckDigitSpec = CheckDigitSpec {
    schemes: &[Scheme {
        selector: None,
        rules: &[CheckDigitRule::standard(10, &[9, 8, 0, 0, 7, 6, 5, 4, 3, 2])],
    }],
};

const AC: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Ac),
    digits: 13,
    check_digits: THIRTEEN_CHAINED,
    mask: MaskSpec::new("##.###.###/###-##"),
    constraints: &[
        Constraint {
            position: 0,
            options: &["01"],
        },
    ],
    reject_repeated: true,
};

const AL: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Al),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("#########"),
    constraints: &[
        Constraint {
            position: 0,
            options: &["24"],
        },
        // Company type
        Constraint {
            position: 2,
            options: &["0", "3", "5", "7", "8"],
        },
    ],
    reject_repeated: true,
};

const AM: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Am),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("##.###.###-#"),
    constraints: &[],
    reject_repeated: true,
};

const AP: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Ap),
    digits: 9,
    check_digits: AP_DIGITS,
    mask: MaskSpec::new("#########"),
    constraints: &[
        Constraint {
            position: 0,
            options: &["03"],
        },
    ],
    reject_repeated: true,
};

const BA: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Ba),
    digits: 9,
    check_digits: BA_DIGITS,
    mask: MaskSpec::new("#######-##"),
    constraints: &[],
    reject_repeated: true,
};

const CE: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Ce),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("########-#"),
    constraints: &[],
    reject_repeated: true,
};

const DF: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Df),
    digits: 13,
    check_digits: THIRTEEN_CHAINED,
    mask: MaskSpec::new("###########-##"),
    constraints: &[
        Constraint {
            position: 0,
            options: &["07", "08"],
        },
    ],
    reject_repeated: true,
};

const ES: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Es),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("###.###.##-#"),
    constraints: &[],
    reject_repeated: true,
};

const GO: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Go),
    digits: 9,
    check_digits: GO_DIGITS,
    mask: MaskSpec::new("##.###.###-#"),
    constraints: &[
        Constraint {
            position: 0,
            options: &["10", "11", "15", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29"],
        },
    ],
    reject_repeated: true,
};

const MA: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Ma),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("########-#"),
    constraints: &[
        Constraint {
            position: 0,
            options: &["12"],
        },
    ],
    reject_repeated: true,
};

const MG: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Mg),
    digits: 13,
    check_digits: MG_DIGITS,
    mask: MaskSpec::new("###.###.###/####"),
    constraints: &[],
    reject_repeated: true,
};

const MS: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Ms),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("#########"),
    constraints: &[
        Constraint {
            position: 0,
            options: &["28", "50"],
        },
    ],
    reject_repeated: true,
};

const MT: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Mt),
    digits: 11,
    check_digits: MT_DIGITS,
    mask: MaskSpec::new("##########-#"),
    constraints: &[],
    reject_repeated: true,
};

const PA: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Pa),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("##-######-#"),
    constraints: &[
        Constraint {
            position: 0,
            options: &["15"],
        },
    ],
    reject_repeated: true,
};

const PB: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Pb),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("########-#"),
    constraints: &[],
    reject_repeated: true,
};

const PE: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Pe),
    digits: 9,
    check_digits: PE_DIGITS,
    mask: MaskSpec::new("#######-##"),
    constraints: &[],
    reject_repeated: true,
};

const PI: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Pi),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("#########"),
    constraints: &[],
    reject_repeated: true,
};

const PR: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Pr),
    digits: 10,
    check_digits: PR_DIGITS,
    mask: MaskSpec::new("########-##"),
    constraints: &[],
    reject_repeated: true,
};

const RJ: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Rj),
    digits: 8,
    check_digits: RJ_DIGITS,
    mask: MaskSpec::new("##.###.##-#"),
    constraints: &[],
    reject_repeated: true,
};

const RN: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Rn),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("##.###.###-#"),
    constraints: &[
        Constraint {
            position: 0,
            options: &["20"],
        },
    ],
    reject_repeated: true,
};

const RO: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Ro),
    digits: 14,
    check_digits: RO_DIGITS,
    mask: MaskSpec::new("#############-#"),
    constraints: &[],
    reject_repeated: true,
};

const RR: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Rr),
    digits: 9,
    check_digits: RR_DIGITS,
    mask: MaskSpec::new("########-#"),
    constraints: &[
        Constraint {
            position: 0,
            options: &["24"],
        },
    ],
    reject_repeated: true,
};

const RS: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Rs),
    digits: 10,
    check_digits: RS_DIGITS,
    mask: MaskSpec::new("###/#######"),
    constraints: &[],
    reject_repeated: true,
};

const SC: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Sc),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("###.###.###"),
    constraints: &[],
    reject_repeated: true,
};

const SE: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Se),
    digits: 9,
    check_digits: NINE_STANDARD,
    mask: MaskSpec::new("########-#"),
    constraints: &[],
    reject_repeated: true,
};

const SP: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::Sp),
    digits: 12,
    check_digits: SP_DIGITS,
    mask: MaskSpec::new("###.###.###.###"),
    constraints: &[],
    reject_repeated: true,
};

const TO: Strategy = Strategy {
    kind: DocumentKind::Ie(Uf::To),
    digits: 11,
    check_digits: TO_DIGITS,
    mask: MaskSpec::new("##.##.######-#"),
    constraints: &[
        // Category code
        Constraint {
            position: 2,
            options: &["01", "02", "03", "99"],
        },
    ],
    reject_repeated: true,
};

/// Every IE strategy, indexed by [`Uf::index`]
pub static IE: [Strategy; 27] = [
    AC, AL, AM, AP, BA, CE, DF, ES, GO, MA, MG, MS, MT, PA, PB, PE, PI, PR, RJ, RN, RO, RR, RS,
    SC, SE, SP, TO,
];
