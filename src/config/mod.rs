//! Global configuration for a cracking session.
//!
//! The CLI fills this from its flags; programmatic users can call
//! [`set_global_config`] once before cracking, or simply rely on the
//! defaults.
//! ```rust
//! use rotbreak::config::get_config;
//! let config = get_config();
//! assert_eq!(config.top_frequencies, 3);
//! ```

use once_cell::sync::OnceCell;

/// Process-wide tunables for the cracking strategies.
pub struct Config {
    /// Verbosity the program was invoked with (0 = warnings only).
    pub verbose: u8,
    /// How many of the most frequent ciphertext letters the greedy
    /// strategy takes as hypotheses.
    pub top_frequencies: usize,
    /// Target-language letters the greedy strategy maps its hypotheses
    /// onto, most frequent first.
    pub candidate_letters: Vec<char>,
    /// Character cap for the bounded sample used by the sampled
    /// strategies (divide-and-conquer, greedy, branch-and-bound).
    pub sample_limit: usize,
}

/// Cell for storing the global Config.
static CONFIG: OnceCell<Config> = OnceCell::new();

/// Install a custom global config. The first call wins; later calls are
/// ignored, matching the one-session-at-a-time usage.
pub fn set_global_config(config: Config) {
    CONFIG.set(config).ok();
}

/// Get the global config, falling back to the defaults when none was
/// installed.
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: 0,
            top_frequencies: 3,
            candidate_letters: vec!['e', 'a', 'o', 's', 'n'],
            sample_limit: 150,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tunables() {
        let config = Config::default();
        assert_eq!(config.top_frequencies, 3);
        assert_eq!(config.candidate_letters, vec!['e', 'a', 'o', 's', 'n']);
        assert_eq!(config.sample_limit, 150);
    }
}
