// Intent classification - maps free-text commands onto backend actions
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{BlockAgentError, BlockAgentResult};

/// Operation a piece of text was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    NewWallet,
    GetBalance,
    DeploySimpleStorage,
    SetStorage,
    ReadStorage,
    #[default]
    Unknown,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::NewWallet => write!(f, "NEW_WALLET"),
            Action::GetBalance => write!(f, "GET_BALANCE"),
            Action::DeploySimpleStorage => write!(f, "DEPLOY_SIMPLE_STORAGE"),
            Action::SetStorage => write!(f, "SET_STORAGE"),
            Action::ReadStorage => write!(f, "READ_STORAGE"),
            Action::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Target network. When absent the backend picks its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Celo,
    Aurora,
    Harmony,
}

impl Chain {
    /// Scan order used by the classifier. Earlier entries win when several
    /// chain names appear in the same text.
    pub const SCAN_ORDER: [Chain; 3] = [Chain::Celo, Chain::Aurora, Chain::Harmony];

    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Celo => "celo",
            Chain::Aurora => "aurora",
            Chain::Harmony => "harmony",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Chain {
    type Err = BlockAgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "celo" => Ok(Chain::Celo),
            "aurora" => Ok(Chain::Aurora),
            "harmony" => Ok(Chain::Harmony),
            _ => Err(BlockAgentError::invalid_input(format!("Unknown chain: {}", s))),
        }
    }
}

/// Structured result of classifying one command.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Intent {
    pub action: Action,
    pub chain: Option<Chain>,
    pub address: Option<String>,
    pub value: Option<u64>,
    pub args: Option<Vec<serde_json::Value>>,
}

impl Intent {
    fn new(action: Action, chain: Option<Chain>) -> Self {
        Self {
            action,
            chain,
            ..Default::default()
        }
    }

    /// Chain name for display, `default` when unset.
    pub fn chain_label(&self) -> &'static str {
        self.chain.map(|c| c.as_str()).unwrap_or("default")
    }
}

// Unicode-aware: matches any decimal digit (Nd), not only ASCII.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("digit pattern is valid"));

/// Minimum exclusive length for a `0x` token to count as an address.
const ADDRESS_MIN_LEN: usize = 20;

struct Rule {
    matches: fn(&str) -> bool,
    build: fn(&str, Option<Chain>) -> Intent,
}

// Evaluated top to bottom, first match wins.
const RULES: &[Rule] = &[
    Rule {
        matches: |t| t.contains("new wallet") || t.contains("create wallet"),
        build: |_, chain| Intent::new(Action::NewWallet, chain),
    },
    Rule {
        matches: |t| t.contains("balance") || t.contains("check my money"),
        build: |t, chain| Intent {
            address: extract_address(t),
            ..Intent::new(Action::GetBalance, chain)
        },
    },
    Rule {
        matches: |t| t.contains("deploy") && t.contains("storage"),
        build: |_, chain| Intent::new(Action::DeploySimpleStorage, chain),
    },
    Rule {
        matches: |t| t.contains("set value") || t.contains("set storage"),
        build: |t, chain| Intent {
            value: Some(extract_value(t)),
            ..Intent::new(Action::SetStorage, chain)
        },
    },
    Rule {
        matches: |t| t.contains("read") || t.contains("get value"),
        build: |_, chain| Intent::new(Action::ReadStorage, chain),
    },
];

/// Classify a free-text command. Total: unmatched text yields
/// [`Action::Unknown`] with any detected chain still attached.
pub fn classify(text: &str) -> Intent {
    let normalized = text.to_lowercase();
    let t = normalized.trim();

    let chain = detect_chain(t);

    RULES
        .iter()
        .find(|rule| (rule.matches)(t))
        .map(|rule| (rule.build)(t, chain))
        .unwrap_or_else(|| Intent::new(Action::Unknown, chain))
}

/// Plain substring containment, no word boundaries.
fn detect_chain(t: &str) -> Option<Chain> {
    Chain::SCAN_ORDER
        .into_iter()
        .find(|chain| t.contains(chain.as_str()))
}

fn extract_address(t: &str) -> Option<String> {
    t.split_whitespace()
        .find(|word| word.starts_with("0x") && word.chars().count() > ADDRESS_MIN_LEN)
        .map(str::to_string)
}

/// First digit run as an integer, 0 when there is none. Saturates on overflow.
fn extract_value(t: &str) -> u64 {
    let Some(run) = DIGIT_RUN.find(t) else {
        return 0;
    };

    run.as_str()
        .chars()
        .try_fold(0u64, |acc, c| acc.checked_mul(10)?.checked_add(decimal_value(c).into()))
        .unwrap_or(u64::MAX)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit. Decimal digits are assigned in
/// contiguous 0..=9 blocks, so the value is the distance from the start of
/// the run of digit code points, modulo 10.
fn decimal_value(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }

    let mut offset = 0;
    let mut cp = c as u32;
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        cp -= 1;
    }
    offset % 10
}
