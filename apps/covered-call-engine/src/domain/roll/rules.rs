//! Roll scoring rule table.
//!
//! Each rule is an independent predicate over [`RollDecisionInput`] that
//! yields at most one finding and a score delta. Rules are evaluated in table
//! order and several may fire for the same roll.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::input::RollDecisionInput;
use super::recommendation::{RecommendationItem, RecommendationKind};
use crate::domain::shared::format_fixed;

/// Delta above which the new call is flagged as likely to be assigned.
const HIGH_DELTA: Decimal = dec!(0.3);

/// Extensions shorter than this many days are flagged.
const SHORT_EXTENSION_DAYS: i64 = 7;

/// What a fired rule contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Change to the running score.
    pub score_delta: i32,
    /// Finding shown to the user.
    pub item: RecommendationItem,
}

/// A named scoring rule.
#[derive(Debug, Clone, Copy)]
pub struct RollRule {
    /// Stable rule name, used in logs.
    pub name: &'static str,
    evaluate: fn(&RollDecisionInput) -> Option<RuleOutcome>,
}

impl RollRule {
    /// Evaluate the rule; `None` when it does not fire.
    #[must_use]
    pub fn apply(&self, input: &RollDecisionInput) -> Option<RuleOutcome> {
        (self.evaluate)(input)
    }
}

/// The fixed rule set, in evaluation order.
pub const ROLL_RULES: [RollRule; 9] = [
    RollRule {
        name: "net_debit",
        evaluate: net_debit,
    },
    RollRule {
        name: "below_expected_theta",
        evaluate: below_expected_theta,
    },
    RollRule {
        name: "above_expected_theta",
        evaluate: above_expected_theta,
    },
    RollRule {
        name: "maintains_rent_rate",
        evaluate: maintains_rent_rate,
    },
    RollRule {
        name: "high_delta",
        evaluate: high_delta,
    },
    RollRule {
        name: "improved_sale_price",
        evaluate: improved_sale_price,
    },
    RollRule {
        name: "lower_sale_price",
        evaluate: lower_sale_price,
    },
    RollRule {
        name: "short_extension",
        evaluate: short_extension,
    },
    RollRule {
        name: "profit_available",
        evaluate: profit_available,
    },
];

fn outcome(
    score_delta: i32,
    kind: RecommendationKind,
    title: &str,
    message: String,
) -> Option<RuleOutcome> {
    Some(RuleOutcome {
        score_delta,
        item: RecommendationItem::new(kind, title, message),
    })
}

fn usd(value: Decimal) -> String {
    format!("${}", format_fixed(value, 2))
}

fn net_debit(input: &RollDecisionInput) -> Option<RuleOutcome> {
    if input.net_debit_credit >= Decimal::ZERO {
        return None;
    }
    outcome(
        -50,
        RecommendationKind::Warning,
        "Net Debit Roll",
        format!(
            "You're paying {} to delay assignment. Since you're comfortable with assignment, this may not align with your strategy.",
            usd(input.net_debit_credit.abs())
        ),
    )
}

fn below_expected_theta(input: &RollDecisionInput) -> Option<RuleOutcome> {
    let credit = input.net_debit_credit;
    if credit <= Decimal::ZERO || credit >= input.estimated_theta {
        return None;
    }
    outcome(
        -20,
        RecommendationKind::Caution,
        "Below Expected Theta",
        format!(
            "Rolling for {} when estimated theta decay is {}. You're getting less than expected time decay.",
            usd(credit),
            usd(input.estimated_theta)
        ),
    )
}

fn above_expected_theta(input: &RollDecisionInput) -> Option<RuleOutcome> {
    let credit = input.net_debit_credit;
    if credit <= Decimal::ZERO || credit < input.estimated_theta {
        return None;
    }
    outcome(
        30,
        RecommendationKind::Positive,
        "Above Expected Theta",
        format!(
            "Rolling for {} exceeds estimated theta of {} by {}. Good premium collection.",
            usd(credit),
            usd(input.estimated_theta),
            usd(credit - input.estimated_theta)
        ),
    )
}

/// Evaluated for any net-credit roll, whichever theta rule fired. A zero
/// benchmark never fires.
fn maintains_rent_rate(input: &RollDecisionInput) -> Option<RuleOutcome> {
    let credit = input.net_debit_credit;
    let benchmark = input.additional_premium_needed;
    if credit <= Decimal::ZERO || benchmark.is_zero() || credit < benchmark {
        return None;
    }
    outcome(
        20,
        RecommendationKind::Positive,
        "Maintains Rent Rate",
        format!(
            "New premium of {} meets or exceeds your current rent rate benchmark of {}.",
            usd(credit),
            usd(benchmark)
        ),
    )
}

fn high_delta(input: &RollDecisionInput) -> Option<RuleOutcome> {
    let delta = input.new_delta.filter(|d| *d > HIGH_DELTA)?;
    outcome(
        -10,
        RecommendationKind::Info,
        "Higher Assignment Risk",
        format!(
            "New delta of {}% indicates higher probability of assignment. Consider if this aligns with your goals.",
            format_fixed(delta * Decimal::ONE_HUNDRED, 1)
        ),
    )
}

fn improved_sale_price(input: &RollDecisionInput) -> Option<RuleOutcome> {
    let improvement = input.effective_sale_after_roll - input.effective_sale_current;
    if improvement <= Decimal::ZERO {
        return None;
    }
    outcome(
        25,
        RecommendationKind::Positive,
        "Improved Sale Price",
        format!(
            "Rolling improves your effective sale price by {} per share (from {} to {}).",
            usd(improvement),
            usd(input.effective_sale_current),
            usd(input.effective_sale_after_roll)
        ),
    )
}

fn lower_sale_price(input: &RollDecisionInput) -> Option<RuleOutcome> {
    let improvement = input.effective_sale_after_roll - input.effective_sale_current;
    if improvement >= Decimal::ZERO {
        return None;
    }
    outcome(
        -30,
        RecommendationKind::Warning,
        "Lower Sale Price",
        format!(
            "Rolling decreases your effective sale price by {} per share.",
            usd(improvement.abs())
        ),
    )
}

fn short_extension(input: &RollDecisionInput) -> Option<RuleOutcome> {
    if input.additional_days >= SHORT_EXTENSION_DAYS {
        return None;
    }
    outcome(
        -15,
        RecommendationKind::Caution,
        "Short Time Extension",
        format!(
            "Only extending by {} days. Consider if the premium justifies the transaction costs.",
            input.additional_days
        ),
    )
}

/// Informational only; never moves the score.
fn profit_available(input: &RollDecisionInput) -> Option<RuleOutcome> {
    if input.current_pnl <= Decimal::ZERO {
        return None;
    }
    outcome(
        0,
        RecommendationKind::Info,
        "Profit Available",
        format!(
            "You have {} unrealized profit. You could close now to lock in gains instead of rolling.",
            usd(input.current_pnl)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// Input on which no rule fires.
    fn quiet() -> RollDecisionInput {
        RollDecisionInput {
            net_debit_credit: Decimal::ZERO,
            estimated_theta: Decimal::ZERO,
            current_pnl: Decimal::ZERO,
            effective_sale_current: dec!(462.49),
            effective_sale_after_roll: dec!(462.49),
            additional_days: 30,
            new_delta: None,
            additional_premium_needed: Decimal::ZERO,
        }
    }

    fn rule(name: &str) -> RollRule {
        ROLL_RULES
            .iter()
            .copied()
            .find(|r| r.name == name)
            .unwrap()
    }

    #[test]
    fn no_rule_fires_on_quiet_input() {
        let input = quiet();
        assert!(ROLL_RULES.iter().all(|r| r.apply(&input).is_none()));
    }

    #[test]
    fn table_order_is_fixed() {
        let names: Vec<_> = ROLL_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "net_debit",
                "below_expected_theta",
                "above_expected_theta",
                "maintains_rent_rate",
                "high_delta",
                "improved_sale_price",
                "lower_sale_price",
                "short_extension",
                "profit_available",
            ]
        );
    }

    #[test]
    fn net_debit_reports_amount_paid() {
        let mut input = quiet();
        input.net_debit_credit = dec!(-120.5);
        let out = rule("net_debit").apply(&input).unwrap();
        assert_eq!(out.score_delta, -50);
        assert_eq!(out.item.kind, RecommendationKind::Warning);
        assert_eq!(out.item.title, "Net Debit Roll");
        assert_eq!(
            out.item.message,
            "You're paying $120.50 to delay assignment. Since you're comfortable with assignment, this may not align with your strategy."
        );
    }

    #[test_case(dec!(2.00), dec!(3.00), "below_expected_theta", -20 ; "credit below theta")]
    #[test_case(dec!(3.00), dec!(3.00), "above_expected_theta", 30 ; "credit equal to theta")]
    #[test_case(dec!(338), dec!(3.00), "above_expected_theta", 30 ; "credit above theta")]
    fn theta_rules_are_exclusive(credit: Decimal, theta: Decimal, fired: &str, delta: i32) {
        let mut input = quiet();
        input.net_debit_credit = credit;
        input.estimated_theta = theta;
        let fired_rules: Vec<_> = ["below_expected_theta", "above_expected_theta"]
            .into_iter()
            .filter(|name| rule(name).apply(&input).is_some())
            .collect();
        assert_eq!(fired_rules, vec![fired]);
        assert_eq!(rule(fired).apply(&input).unwrap().score_delta, delta);
    }

    #[test]
    fn above_theta_message_includes_excess() {
        let mut input = quiet();
        input.net_debit_credit = dec!(338);
        input.estimated_theta = dec!(3);
        let out = rule("above_expected_theta").apply(&input).unwrap();
        assert_eq!(
            out.item.message,
            "Rolling for $338.00 exceeds estimated theta of $3.00 by $335.00. Good premium collection."
        );
    }

    #[test]
    fn below_theta_message_names_both_amounts() {
        let mut input = quiet();
        input.net_debit_credit = dec!(2);
        input.estimated_theta = dec!(3);
        let out = rule("below_expected_theta").apply(&input).unwrap();
        assert_eq!(out.item.kind, RecommendationKind::Caution);
        assert_eq!(out.item.title, "Below Expected Theta");
        assert_eq!(
            out.item.message,
            "Rolling for $2.00 when estimated theta decay is $3.00. You're getting less than expected time decay."
        );
    }

    #[test]
    fn rent_rate_message_names_credit_and_benchmark() {
        let mut input = quiet();
        input.net_debit_credit = dec!(500);
        input.additional_premium_needed = dec!(498);
        let out = rule("maintains_rent_rate").apply(&input).unwrap();
        assert_eq!(out.item.kind, RecommendationKind::Positive);
        assert_eq!(out.item.title, "Maintains Rent Rate");
        assert_eq!(
            out.item.message,
            "New premium of $500.00 meets or exceeds your current rent rate benchmark of $498.00."
        );
    }

    #[test_case(dec!(500), dec!(498), true ; "credit above benchmark")]
    #[test_case(dec!(498), dec!(498), true ; "credit equal to benchmark")]
    #[test_case(dec!(100), dec!(498), false ; "credit below benchmark")]
    #[test_case(dec!(100), dec!(0), false ; "zero benchmark")]
    #[test_case(dec!(-10), dec!(-20), false ; "debit roll")]
    fn rent_rate_rule(credit: Decimal, benchmark: Decimal, fires: bool) {
        let mut input = quiet();
        input.net_debit_credit = credit;
        input.additional_premium_needed = benchmark;
        let out = rule("maintains_rent_rate").apply(&input);
        assert_eq!(out.is_some(), fires);
        if let Some(out) = out {
            assert_eq!(out.score_delta, 20);
        }
    }

    #[test]
    fn rent_rate_fires_alongside_below_theta() {
        let mut input = quiet();
        input.net_debit_credit = dec!(50);
        input.estimated_theta = dec!(60);
        input.additional_premium_needed = dec!(40);
        assert!(rule("below_expected_theta").apply(&input).is_some());
        assert!(rule("maintains_rent_rate").apply(&input).is_some());
    }

    #[test_case(None, false ; "no delta")]
    #[test_case(Some(dec!(0.2)), false ; "low delta")]
    #[test_case(Some(dec!(0.3)), false ; "threshold is exclusive")]
    #[test_case(Some(dec!(0.35)), true ; "high delta")]
    fn high_delta_rule(delta: Option<Decimal>, fires: bool) {
        let mut input = quiet();
        input.new_delta = delta;
        assert_eq!(rule("high_delta").apply(&input).is_some(), fires);
    }

    #[test]
    fn high_delta_message_uses_one_decimal_percent() {
        let mut input = quiet();
        input.new_delta = Some(dec!(0.35));
        let out = rule("high_delta").apply(&input).unwrap();
        assert_eq!(out.score_delta, -10);
        assert_eq!(out.item.kind, RecommendationKind::Info);
        assert_eq!(out.item.title, "Higher Assignment Risk");
        assert_eq!(
            out.item.message,
            "New delta of 35.0% indicates higher probability of assignment. Consider if this aligns with your goals."
        );
    }

    #[test]
    fn sale_price_rules() {
        let mut input = quiet();
        input.effective_sale_after_roll = dec!(471.68);
        let out = rule("improved_sale_price").apply(&input).unwrap();
        assert_eq!(out.score_delta, 25);
        assert_eq!(
            out.item.message,
            "Rolling improves your effective sale price by $9.19 per share (from $462.49 to $471.68)."
        );
        assert!(rule("lower_sale_price").apply(&input).is_none());

        input.effective_sale_after_roll = dec!(455.00);
        let out = rule("lower_sale_price").apply(&input).unwrap();
        assert_eq!(out.score_delta, -30);
        assert_eq!(
            out.item.message,
            "Rolling decreases your effective sale price by $7.49 per share."
        );
        assert!(rule("improved_sale_price").apply(&input).is_none());
    }

    #[test_case(6, true ; "six days")]
    #[test_case(7, false ; "one week")]
    #[test_case(-3, true ; "negative extension")]
    fn short_extension_rule(days: i64, fires: bool) {
        let mut input = quiet();
        input.additional_days = days;
        let out = rule("short_extension").apply(&input);
        assert_eq!(out.is_some(), fires);
        if let Some(out) = out {
            assert_eq!(out.score_delta, -15);
            assert_eq!(
                out.item.message,
                format!(
                    "Only extending by {days} days. Consider if the premium justifies the transaction costs."
                )
            );
        }
    }

    #[test]
    fn profit_available_is_informational() {
        let mut input = quiet();
        input.current_pnl = dec!(198);
        let out = rule("profit_available").apply(&input).unwrap();
        assert_eq!(out.score_delta, 0);
        assert_eq!(out.item.kind, RecommendationKind::Info);
        assert_eq!(
            out.item.message,
            "You have $198.00 unrealized profit. You could close now to lock in gains instead of rolling."
        );
    }
}
