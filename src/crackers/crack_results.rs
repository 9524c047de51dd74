//! This module contains CrackResult, the object every cracker returns:
//! either a selected key with its decryption, a full enumeration, or
//! labelled failure lines.

use crate::checkers::checker_result::CheckResult;

use super::interface::Cracker;

/// Outcome of one cracker run.
#[derive(Debug, Clone)]
pub struct CrackResult {
    /// Set when the checker recognised dictionary words in the reported
    /// candidate. The exhaustive enumeration sets it unconditionally,
    /// since enumerating cannot fail.
    pub success: bool,
    /// Encrypted text is the text as handed to the cracker.
    pub encrypted_text: String,
    /// Human-readable result lines, one per reported candidate. Never
    /// empty after a cracker runs; failure lines land here too.
    pub candidates: Option<Vec<String>>,
    /// The selected shift, for strategies that select one.
    pub key: Option<u8>,
    /// Cracker which produced this result.
    pub cracker_used: &'static str,
    /// Checker which scored the reported candidate.
    pub checker_name: &'static str,
    /// Short description of that checker.
    pub checker_description: &'static str,
    /// Short description of the strategy.
    pub description: &'static str,
    /// Link to more info about the strategy.
    pub link: &'static str,
}

impl CrackResult {
    /// Fresh result for `cracker` over `text`; starts unsuccessful and
    /// empty.
    pub fn new<T>(cracker: &Cracker<T>, text: String) -> Self {
        CrackResult {
            success: false,
            encrypted_text: text,
            candidates: None,
            key: None,
            cracker_used: cracker.name,
            checker_name: "",
            checker_description: "",
            description: cracker.description,
            link: cracker.link,
        }
    }

    /// Copy the scoring checker's identity and verdict into this result.
    pub fn update_checker(&mut self, checker_result: &CheckResult) {
        self.checker_name = checker_result.checker_name;
        self.checker_description = checker_result.checker_description;
        self.success = checker_result.is_identified;
    }

    /// The result lines, or an empty slice if the cracker never ran.
    pub fn candidate_lines(&self) -> &[String] {
        self.candidates.as_deref().unwrap_or(&[])
    }
}
