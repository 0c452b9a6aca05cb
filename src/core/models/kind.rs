//! Document kinds
//!
//! A [`DocumentKind`] names exactly one strategy: a national document or the
//! IE of one federative unit.

use serde::{Serialize, Serializer};

use super::Uf;

/// The document a strategy validates and generates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Driver's-license number
    Cnh,
    /// Individual taxpayer number
    Cpf,
    /// Company taxpayer number
    Cnpj,
    /// State tax registration of one unit
    Ie(Uf),
}

impl DocumentKind {
    /// The unit this kind belongs to, if it is a state registration
    #[must_use]
    pub const fn uf(self) -> Option<Uf> {
        match self {
            Self::Ie(uf) => Some(uf),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cnh => write!(f, "CNH"),
            Self::Cpf => write!(f, "CPF"),
            Self::Cnpj => write!(f, "CNPJ"),
            Self::Ie(uf) => write!(f, "IE-{uf}"),
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    /// Accepts `CNH`, `CPF`, `CNPJ`, `IE-SP`, `IE_SP` or a bare `SP`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_uppercase();
        match tag.as_str() {
            "CNH" => Ok(Self::Cnh),
            "CPF" => Ok(Self::Cpf),
            "CNPJ" => Ok(Self::Cnpj),
            _ => {
                let code = tag
                    .strip_prefix("IE-")
                    .or_else(|| tag.strip_prefix("IE_"))
                    .unwrap_or(&tag);
                code.parse::<Uf>().map(Self::Ie).map_err(|_| {
                    format!("Invalid document: {s}. Use: cnh, cpf, cnpj, or a UF code (e.g. ie-sp)")
                })
            },
        }
    }
}

impl Serialize for DocumentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
