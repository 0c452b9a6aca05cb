//! Federative units
//!
//! The 26 states plus the Federal District, each issuing its own state tax
//! registration (IE) format.

use serde::{Deserialize, Serialize};

/// A Brazilian federative unit, identified by its two-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Uf {
    /// Acre
    Ac,
    /// Alagoas
    Al,
    /// Amazonas
    Am,
    /// Amapá
    Ap,
    /// Bahia
    Ba,
    /// Ceará
    Ce,
    /// Distrito Federal
    Df,
    /// Espírito Santo
    Es,
    /// Goiás
    Go,
    /// Maranhão
    Ma,
    /// Minas Gerais
    Mg,
    /// Mato Grosso do Sul
    Ms,
    /// Mato Grosso
    Mt,
    /// Pará
    Pa,
    /// Paraíba
    Pb,
    /// Pernambuco
    Pe,
    /// Piauí
    Pi,
    /// Paraná
    Pr,
    /// Rio de Janeiro
    Rj,
    /// Rio Grande do Norte
    Rn,
    /// Rondônia
    Ro,
    /// Roraima
    Rr,
    /// Rio Grande do Sul
    Rs,
    /// Santa Catarina
    Sc,
    /// Sergipe
    Se,
    /// São Paulo
    Sp,
    /// Tocantins
    To,
}

impl Uf {
    /// Every unit, in alphabetical order of its code
    pub const ALL: [Self; 27] = [
        Self::Ac,
        Self::Al,
        Self::Am,
        Self::Ap,
        Self::Ba,
        Self::Ce,
        Self::Df,
        Self::Es,
        Self::Go,
        Self::Ma,
        Self::Mg,
        Self::Ms,
        Self::Mt,
        Self::Pa,
        Self::Pb,
        Self::Pe,
        Self::Pi,
        Self::Pr,
        Self::Rj,
        Self::Rn,
        Self::Ro,
        Self::Rr,
        Self::Rs,
        Self::Sc,
        Self::Se,
        Self::Sp,
        Self::To,
    ];

    /// Two-letter uppercase code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Am => "AM",
            Self::Ap => "AP",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mg => "MG",
            Self::Ms => "MS",
            Self::Mt => "MT",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Pr => "PR",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Rs => "RS",
            Self::Sc => "SC",
            Self::Se => "SE",
            Self::Sp => "SP",
            Self::To => "TO",
        }
    }

    /// Position of this unit in [`Uf::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Uf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Uf {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|uf| uf.code() == code)
            .ok_or_else(|| format!("Invalid UF: {s}. Use a two-letter state code such as SP or MG"))
    }
}
