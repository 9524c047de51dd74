//! This module contains all the code for the key-recovery crackers.
//! Think of a cracker as a search policy over the 25 candidate shifts;
//! `interface.rs` defines what each cracker looks like, and every cracker
//! scores candidates with the wordlist checker.

/// Pruned best-first search over halved key ranges.
pub mod branch_bound;
/// The CrackResult every cracker returns.
pub mod crack_results;
/// Sample-scored argmax over all keys.
pub mod divide_conquer;
/// Full enumeration of all 25 shifts.
pub mod exhaustive;
/// Frequency-guided hypothesis search.
pub mod greedy;
/// The Cracker struct and Crack trait every strategy implements.
pub mod interface;

use crate::checkers::wordlist::WordlistChecker;

use self::branch_bound::BranchBoundCracker;
use self::crack_results::CrackResult;
use self::divide_conquer::DivideConquerCracker;
use self::exhaustive::ExhaustiveCracker;
use self::greedy::GreedyCracker;
use self::interface::{Crack, Cracker};

/// The four strategies, as selectable kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackerKind {
    /// Decode under every shift and report them all.
    Exhaustive,
    /// Score every shift on a bounded sample, decode the winner once.
    DivideConquer,
    /// Frequency-guided hypotheses, best dictionary score wins.
    Greedy,
    /// Range search with true-max bounds and pruning.
    BranchBound,
}

impl CrackerKind {
    /// All four kinds, in the order the comparison table shows them.
    pub const ALL: [CrackerKind; 4] = [
        CrackerKind::Exhaustive,
        CrackerKind::DivideConquer,
        CrackerKind::Greedy,
        CrackerKind::BranchBound,
    ];

    /// Display name, matching the cracker's own metadata name.
    pub fn name(&self) -> &'static str {
        match self {
            CrackerKind::Exhaustive => "Exhaustive",
            CrackerKind::DivideConquer => "Divide & Conquer",
            CrackerKind::Greedy => "Greedy",
            CrackerKind::BranchBound => "Branch & Bound",
        }
    }
}

/// Run one strategy over `ciphertext`, scoring candidates with `checker`.
pub fn run_cracker(
    kind: CrackerKind,
    ciphertext: &str,
    checker: &WordlistChecker,
) -> CrackResult {
    match kind {
        CrackerKind::Exhaustive => {
            Cracker::<ExhaustiveCracker>::new().crack(ciphertext, checker)
        }
        CrackerKind::DivideConquer => {
            Cracker::<DivideConquerCracker>::new().crack(ciphertext, checker)
        }
        CrackerKind::Greedy => Cracker::<GreedyCracker>::new().crack(ciphertext, checker),
        CrackerKind::BranchBound => {
            Cracker::<BranchBoundCracker>::new().crack(ciphertext, checker)
        }
    }
}
