//! Stateless roll scoring.

use tracing::debug;

use super::input::RollDecisionInput;
use super::recommendation::{Recommendation, RollAction};
use super::rules::ROLL_RULES;

/// Score a roll against [`ROLL_RULES`] and classify the total.
///
/// Deterministic: the same input always yields the same items, in rule
/// order, and the same action.
#[must_use]
pub fn analyze_roll_decision(input: &RollDecisionInput) -> Recommendation {
    let mut score = 0;
    let mut items = Vec::new();

    for rule in &ROLL_RULES {
        if let Some(outcome) = rule.apply(input) {
            debug!(rule = rule.name, delta = outcome.score_delta, "Roll rule fired");
            score += outcome.score_delta;
            items.push(outcome.item);
        }
    }

    let action = RollAction::from_score(score);
    debug!(score, %action, items = items.len(), "Roll scored");

    Recommendation {
        action,
        score,
        items,
        summary: action.summary().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roll::RecommendationKind;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn base_input() -> RollDecisionInput {
        RollDecisionInput {
            net_debit_credit: dec!(338),
            estimated_theta: dec!(3.00),
            current_pnl: dec!(198),
            effective_sale_current: dec!(462.49),
            effective_sale_after_roll: dec!(471.68),
            additional_days: 30,
            new_delta: None,
            additional_premium_needed: dec!(498),
        }
    }

    #[test]
    fn favorable_credit_roll_recommends_roll() {
        let rec = analyze_roll_decision(&base_input());
        // above theta +30, improved sale price +25, profit info 0
        assert_eq!(rec.score, 55);
        assert_eq!(rec.action, RollAction::Roll);
        let titles: Vec<_> = rec.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Above Expected Theta", "Improved Sale Price", "Profit Available"]
        );
        assert_eq!(rec.summary, RollAction::Roll.summary());
    }

    #[test]
    fn debit_roll_with_lower_sale_price_recommends_hold() {
        let mut input = base_input();
        input.net_debit_credit = dec!(-100);
        input.effective_sale_after_roll = dec!(455);
        input.current_pnl = dec!(-50);
        let rec = analyze_roll_decision(&input);
        assert_eq!(rec.score, -80);
        assert_eq!(rec.action, RollAction::Hold);
        assert_eq!(rec.count_of(RecommendationKind::Warning), 2);
    }

    #[test]
    fn raising_delta_above_threshold_costs_ten_points() {
        let mut input = base_input();
        input.new_delta = Some(dec!(0.2));
        let low = analyze_roll_decision(&input);
        input.new_delta = Some(dec!(0.35));
        let high = analyze_roll_decision(&input);

        assert_eq!(high.score, low.score - 10);
        assert_eq!(high.items.len(), low.items.len() + 1);
        assert_eq!(
            high.count_of(RecommendationKind::Info),
            low.count_of(RecommendationKind::Info) + 1
        );
    }

    #[test]
    fn zero_credit_fires_no_premium_rules() {
        let mut input = base_input();
        input.net_debit_credit = Decimal::ZERO;
        input.effective_sale_after_roll = input.effective_sale_current;
        input.current_pnl = Decimal::ZERO;
        let rec = analyze_roll_decision(&input);
        assert_eq!(rec.score, 0);
        assert!(rec.items.is_empty());
        assert_eq!(rec.action, RollAction::Neutral);
    }

    #[test]
    fn same_input_same_output() {
        let input = base_input();
        assert_eq!(analyze_roll_decision(&input), analyze_roll_decision(&input));
    }
}
