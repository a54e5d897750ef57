// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! Encoding statistics, accounted by the protocol while it walks a term DAG.

use serde::Serialize;
use term::Opcode;

/// Counters over every expression node handed to a backend's encoding
/// hooks. A node shared by several parents is counted once per encoding
/// visit, not once per node.
#[allow(missing_docs)]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub constants: u64,
    pub func_apps: u64,
    pub array_selects: u64,
    pub array_stores: u64,
    pub unary_ops: u64,
    pub binary_ops: u64,
    pub nary_ops: u64,
    pub equalities: u64,
    pub disequalities: u64,
    pub inequalities: u64,
    pub implications: u64,
    pub conjunctions: u64,
    pub disjunctions: u64,
}

impl Stats {
    /// Bump the per-operator counter, if `op` has one. Order comparisons
    /// share the `inequalities` counter.
    pub fn record_op(&mut self, op: Opcode) {
        match op {
            Opcode::Eql => self.equalities += 1,
            Opcode::Neq => self.disequalities += 1,
            Opcode::Lss | Opcode::Gtr | Opcode::Leq | Opcode::Geq => self.inequalities += 1,
            Opcode::Imp => self.implications += 1,
            Opcode::Land => self.conjunctions += 1,
            Opcode::Lor => self.disjunctions += 1,
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_op_buckets() {
        let mut stats = Stats::default();
        stats.record_op(Opcode::Eql);
        stats.record_op(Opcode::Neq);
        stats.record_op(Opcode::Lss);
        stats.record_op(Opcode::Geq);
        stats.record_op(Opcode::Imp);
        stats.record_op(Opcode::Land);
        stats.record_op(Opcode::Lor);
        stats.record_op(Opcode::Add);
        assert_eq!(stats.equalities, 1);
        assert_eq!(stats.disequalities, 1);
        assert_eq!(stats.inequalities, 2);
        assert_eq!(stats.implications, 1);
        assert_eq!(stats.conjunctions, 1);
        assert_eq!(stats.disjunctions, 1);
        // arithmetic operators have no dedicated counter
        assert_eq!(stats, Stats {
            equalities: 1,
            disequalities: 1,
            inequalities: 2,
            implications: 1,
            conjunctions: 1,
            disjunctions: 1,
            ..Stats::default()
        });
    }
}
