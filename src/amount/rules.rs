use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use tracing::trace;

use super::ChipFormatter;
use crate::config::ConverterConfig;

/// The line shapes known to carry chip amounts.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `Seat 1: alice (1500 in chips)`
    StackSize,
    /// `alice: posts small blind 100`
    PostBlind,
    /// `alice: bets 400`
    Bet,
    /// `alice: calls 400`
    Call,
    /// `alice: raises 200 to 400`
    Raise,
    /// `alice collected 900 from pot`
    CollectedFromPot,
    /// `Seat 1: alice collected (900)`
    CollectedShown,
    /// `Total pot 900 | Rake 0`
    TotalPotAndRake,
    /// `Seat 1: alice showed [Ah Kh] and won (900) with a pair of Aces`
    WonShowdown,
    /// `Uncalled bet (200) returned to alice`
    UncalledBet,
    /// `alice: posts small & big blinds 300`
    PostBothBlinds,
    /// `alice: posts the ante 10`
    PostAnte,
    /// `Total pot 3000 Main pot 2000. Side pot 1000. | Rake 0`
    TotalPotWithSidePots,
    /// `Main pot 2000.` and `Side pot-1 1000.`
    PotShare,
    /// `alice collected 1000 from side pot-1`
    CollectedFromSplitPot,
    /// `| Rake 50` when the total pot was split
    Rake,
}

/// How many matches of a rule's shape are converted on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchScope {
    /// Only the leftmost match is looked at.
    First,
    /// Every non overlapping match is looked at.
    Every,
}

/// One line shape and the digit runs it captures.
///
/// All capture groups of the pattern are chip amounts. Once a rule has
/// captured its amounts, every bare digit run on the line with the same
/// value is rewritten, not just the captured positions. Digit runs that
/// directly follow the currency marker or a `.` are part of an amount
/// that was already converted and are left alone.
#[derive(Debug, Clone)]
pub struct ConversionRule {
    kind: RuleKind,
    pattern: Regex,
    scope: MatchScope,
}

impl ConversionRule {
    pub fn new(kind: RuleKind, pattern: &str, scope: MatchScope) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            pattern: Regex::new(pattern)?,
            scope,
        })
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn scope(&self) -> MatchScope {
        self.scope
    }

    /// Number of amounts a single match captures.
    pub fn arity(&self) -> usize {
        self.pattern.captures_len() - 1
    }

    /// The digit runs this rule captures on `line`, in match order.
    pub fn captured_amounts<'l>(&self, line: &'l str) -> Vec<&'l str> {
        let groups = |caps: regex::Captures<'l>| {
            caps.iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
        };
        match self.scope {
            MatchScope::First => self.pattern.captures(line).map(groups).unwrap_or_default(),
            MatchScope::Every => self.pattern.captures_iter(line).flat_map(groups).collect(),
        }
    }

    /// Apply this rule to a single line.
    ///
    /// Lines the rule does not match are returned untouched.
    pub fn apply<'l>(&self, line: &'l str, formatter: &ChipFormatter<'_>) -> Cow<'l, str> {
        let amounts = self.captured_amounts(line);
        if amounts.is_empty() {
            return Cow::Borrowed(line);
        }
        trace!(rule = ?self.kind, ?amounts, "Converting amounts");
        replace_by_value(line, &amounts, formatter)
    }
}

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digit run regex"));

fn replace_by_value<'l>(
    line: &'l str,
    amounts: &[&str],
    formatter: &ChipFormatter<'_>,
) -> Cow<'l, str> {
    let mut result = String::with_capacity(line.len() + 8);
    let mut last = 0;
    for run in DIGIT_RUN.find_iter(line) {
        if !amounts.contains(&run.as_str()) {
            continue;
        }
        let before = &line[..run.start()];
        if before.ends_with('.') || before.ends_with(formatter.symbol()) {
            continue;
        }
        result.push_str(&line[last..run.start()]);
        result.push_str(&formatter.format_digits(run.as_str()));
        last = run.end();
    }

    if last == 0 {
        return Cow::Borrowed(line);
    }
    result.push_str(&line[last..]);
    Cow::Owned(result)
}

static POKERSTARS_RULES: LazyLock<Vec<ConversionRule>> = LazyLock::new(|| {
    use MatchScope::{Every, First};
    use RuleKind::*;

    [
        (StackSize, r"\(([0-9]+) in chips\)", First),
        (PostBlind, r"posts .* blind ([0-9]+)", First),
        (Bet, r": bets ([0-9]+)", First),
        (Call, r": calls ([0-9]+)", First),
        (Raise, r": raises ([0-9]+) to ([0-9]+)", First),
        (CollectedFromPot, r" collected ([0-9]+) from pot", First),
        (CollectedShown, r" collected \(([0-9]+)\)", First),
        (TotalPotAndRake, r"Total pot ([0-9]+) \| Rake ([0-9]+)", First),
        (WonShowdown, r"and won \(([0-9]+)\) with", First),
        (UncalledBet, r"Uncalled bet \(([0-9]+)\) returned to", First),
        (PostBothBlinds, r"posts small & big blinds ([0-9]+)", First),
        (PostAnte, r"posts the ante ([0-9]+)", First),
        (TotalPotWithSidePots, r"Total pot ([0-9]+) Main pot", First),
        (PotShare, r"(?:Main|Side) pot(?:-[0-9]+)? ([0-9]+)\.", Every),
        (
            CollectedFromSplitPot,
            r" collected ([0-9]+) from (?:main|side) pot",
            First,
        ),
        (Rake, r"\| Rake ([0-9]+)", First),
    ]
    .into_iter()
    .map(|(kind, pattern, scope)| {
        ConversionRule::new(kind, pattern, scope).expect("Invalid conversion rule regex")
    })
    .collect()
});

/// The ordered rules for PokerStars hand bodies.
///
/// Rules run top to bottom and each one sees the output of the
/// previous one.
pub fn pokerstars_rules() -> &'static [ConversionRule] {
    &POKERSTARS_RULES
}

/// Runs an ordered rule table over the body lines of a hand.
#[derive(Debug, Clone, Copy)]
pub struct AmountConverter<'a> {
    rules: &'a [ConversionRule],
    formatter: ChipFormatter<'a>,
}

impl<'a> AmountConverter<'a> {
    pub fn new(rules: &'a [ConversionRule], formatter: ChipFormatter<'a>) -> Self {
        Self { rules, formatter }
    }

    pub fn pokerstars(config: &'a ConverterConfig) -> Self {
        Self::new(pokerstars_rules(), ChipFormatter::new(config))
    }

    pub fn formatter(&self) -> &ChipFormatter<'a> {
        &self.formatter
    }

    /// Convert every amount on `line` and trim the result.
    pub fn convert_line(&self, line: &str) -> String {
        let mut current = Cow::Borrowed(line);
        for rule in self.rules {
            let changed = match rule.apply(&current, &self.formatter) {
                Cow::Owned(changed) => Some(changed),
                Cow::Borrowed(_) => None,
            };
            if let Some(changed) = changed {
                current = Cow::Owned(changed);
            }
        }
        current.trim().to_string()
    }
}
