// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! Standard SMT-LIB logic identifiers.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An SMT-LIB logic, named by its standard acronym.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Logic {
    Auflia,
    Auflira,
    Aufnira,
    Lra,
    QfAbv,
    QfAufbv,
    QfUfbv,
    QfAuflia,
    QfAx,
    QfBv,
    QfIdl,
    QfRdl,
    QfLia,
    QfLra,
    QfNia,
    QfNra,
    QfUf,
    QfUfidl,
    QfUflia,
    QfUflra,
    QfUfnra,
    Uflra,
    Ufnia,
}

impl Logic {
    /// The standard SMT-LIB acronym, as accepted by `(set-logic ...)`.
    pub fn acronym(self) -> &'static str {
        match self {
            Logic::Auflia => "AUFLIA",
            Logic::Auflira => "AUFLIRA",
            Logic::Aufnira => "AUFNIRA",
            Logic::Lra => "LRA",
            Logic::QfAbv => "QF_ABV",
            Logic::QfAufbv => "QF_AUFBV",
            Logic::QfUfbv => "QF_UFBV",
            Logic::QfAuflia => "QF_AUFLIA",
            Logic::QfAx => "QF_AX",
            Logic::QfBv => "QF_BV",
            Logic::QfIdl => "QF_IDL",
            Logic::QfRdl => "QF_RDL",
            Logic::QfLia => "QF_LIA",
            Logic::QfLra => "QF_LRA",
            Logic::QfNia => "QF_NIA",
            Logic::QfNra => "QF_NRA",
            Logic::QfUf => "QF_UF",
            Logic::QfUfidl => "QF_UFIDL",
            Logic::QfUflia => "QF_UFLIA",
            Logic::QfUflra => "QF_UFLRA",
            Logic::QfUfnra => "QF_UFNRA",
            Logic::Uflra => "UFLRA",
            Logic::Ufnia => "UFNIA",
        }
    }

    /// All logics, in acronym order.
    pub fn all() -> &'static [Logic] {
        &[
            Logic::Auflia,
            Logic::Auflira,
            Logic::Aufnira,
            Logic::Lra,
            Logic::QfAbv,
            Logic::QfAufbv,
            Logic::QfUfbv,
            Logic::QfAuflia,
            Logic::QfAx,
            Logic::QfBv,
            Logic::QfIdl,
            Logic::QfRdl,
            Logic::QfLia,
            Logic::QfLra,
            Logic::QfNia,
            Logic::QfNra,
            Logic::QfUf,
            Logic::QfUfidl,
            Logic::QfUflia,
            Logic::QfUflra,
            Logic::QfUfnra,
            Logic::Uflra,
            Logic::Ufnia,
        ]
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.acronym())
    }
}

/// Error from parsing a logic acronym.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown logic acronym {0:?}")]
pub struct UnknownLogic(pub String);

impl FromStr for Logic {
    type Err = UnknownLogic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Logic::all()
            .iter()
            .copied()
            .find(|logic| logic.acronym() == s)
            .ok_or_else(|| UnknownLogic(s.to_string()))
    }
}
