//! Response rendering.
//!
//! Formats engine values as the single-line notations the command loop
//! writes to stdout. Keyword prefixes (`outcome`, `territory`, ...) are
//! added by the loop itself; everything here is the notation body.

use crate::board::Territory;
use crate::combat::AttackOutcome;
use crate::simulate::SimulationReport;

/// Formats a roll list as comma-separated values, `-` when empty.
pub fn format_rolls(rolls: &[u8]) -> String {
    if rolls.is_empty() {
        return "-".to_string();
    }
    rolls
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats one territory as `<name> <color> <troops>`.
pub fn format_territory(territory: &Territory) -> String {
    format!(
        "{} {} {}",
        territory.name(),
        territory.owner,
        territory.troops
    )
}

/// Formats a resolved attack as
/// `<attacker> <rolls> vs <defender> <rolls> losses <a>/<d> troops <a>/<d>`,
/// with ` conquered` appended when the defender fell.
pub fn format_outcome(outcome: &AttackOutcome) -> String {
    let mut line = format!(
        "{} {} vs {} {} losses {}/{} troops {}/{}",
        outcome.attacker,
        format_rolls(&outcome.attacker_rolls),
        outcome.defender,
        format_rolls(&outcome.defender_rolls),
        outcome.losses.attacker,
        outcome.losses.defender,
        outcome.attacker_troops,
        outcome.defender_troops,
    );
    if outcome.conquered {
        line.push_str(" conquered");
    }
    line
}

/// Formats a simulation report as
/// `<rate> trials <n> mean-losses <a>/<d>`.
pub fn format_report(report: &SimulationReport) -> String {
    format!(
        "{:.3} trials {} mean-losses {:.2}/{:.2}",
        report.conquest_rate(),
        report.trials,
        report.mean_attacker_losses(),
        report.mean_defender_losses(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ArmyColor;
    use crate::combat::{Casualties, DiePair};

    #[test]
    fn rolls_join_with_commas() {
        assert_eq!(format_rolls(&[6, 4, 2]), "6,4,2");
        assert_eq!(format_rolls(&[5]), "5");
        assert_eq!(format_rolls(&[]), "-");
    }

    #[test]
    fn territory_line() {
        let t = Territory::new("attica", ArmyColor::Red, 5);
        assert_eq!(format_territory(&t), "attica red 5");
    }

    fn sample_outcome(conquered: bool) -> AttackOutcome {
        AttackOutcome {
            attacker: "attica".to_string(),
            defender: "boeotia".to_string(),
            attacker_rolls: vec![6, 4, 2],
            defender_rolls: vec![5, 4],
            pairs: vec![
                DiePair { attacker: 6, defender: 5, defender_lost: true },
                DiePair { attacker: 4, defender: 4, defender_lost: false },
            ],
            losses: Casualties { attacker: 1, defender: 1 },
            attacker_troops: 4,
            defender_troops: 2,
            conquered,
        }
    }

    #[test]
    fn outcome_line() {
        assert_eq!(
            format_outcome(&sample_outcome(false)),
            "attica 6,4,2 vs boeotia 5,4 losses 1/1 troops 4/2"
        );
    }

    #[test]
    fn outcome_line_marks_conquest() {
        assert!(format_outcome(&sample_outcome(true)).ends_with(" conquered"));
    }

    #[test]
    fn report_line() {
        let report = SimulationReport {
            trials: 1000,
            conquests: 620,
            attacker_losses: 1850,
            defender_losses: 920,
        };
        assert_eq!(format_report(&report), "0.620 trials 1000 mean-losses 1.85/0.92");
    }
}
