use serde::{Deserialize, Serialize};

use super::config::{EducationHierarchy, TierScoring};
use super::domain::{EducationRecord, EducationTier};

/// Highest recognised degree across all records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationSummary {
    pub tier: Option<EducationTier>,
    pub rank: u8,
}

pub fn derive_education_tier(
    records: &[EducationRecord],
    hierarchy: &EducationHierarchy,
) -> EducationSummary {
    let rank = records
        .iter()
        .map(|record| hierarchy.scan(&record.degree))
        .max()
        .unwrap_or(0);

    EducationSummary {
        tier: hierarchy.tier_for_rank(rank),
        rank,
    }
}

pub fn match_education(
    candidate_rank: u8,
    required: Option<EducationTier>,
    hierarchy: &EducationHierarchy,
    scoring: &TierScoring,
) -> f64 {
    scoring.score(candidate_rank, required.map(|tier| hierarchy.rank_of(tier)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degree(text: &str) -> EducationRecord {
        EducationRecord {
            degree: text.to_string(),
            field_of_study: None,
            end_date: None,
        }
    }

    #[test]
    fn keyword_table_resolves_ranks() {
        let hierarchy = EducationHierarchy::default();
        let cases = [
            ("Doctorat en chimie", 6, Some(EducationTier::Doctorat)),
            ("PhD Computer Science", 6, Some(EducationTier::Doctorat)),
            ("Master MIAGE", 5, Some(EducationTier::Bac5)),
            ("Licence pro", 3, Some(EducationTier::Bac3)),
            ("DUT Informatique", 2, Some(EducationTier::Bac2)),
            ("Bac S", 1, Some(EducationTier::Bac)),
            ("Self taught", 0, None),
        ];
        for (text, rank, tier) in cases {
            let summary = derive_education_tier(&[degree(text)], &hierarchy);
            assert_eq!(summary.rank, rank, "{text}");
            assert_eq!(summary.tier, tier, "{text}");
        }
    }

    #[test]
    fn highest_record_wins_and_unmatched_records_do_not_penalise() {
        let hierarchy = EducationHierarchy::default();
        let summary = derive_education_tier(
            &[degree("Bootcamp"), degree("BAC+3 gestion"), degree("BTS MUC")],
            &hierarchy,
        );
        assert_eq!(summary.rank, 3);
        assert_eq!(summary.tier, Some(EducationTier::Bac3));

        assert_eq!(derive_education_tier(&[], &hierarchy).rank, 0);
    }

    #[test]
    fn tiered_education_scores() {
        let hierarchy = EducationHierarchy::default();
        let scoring = TierScoring::default();

        assert_eq!(match_education(0, None, &hierarchy, &scoring), 100.0);
        assert_eq!(
            match_education(6, Some(EducationTier::Bac5), &hierarchy, &scoring),
            100.0
        );
        assert_eq!(
            match_education(2, Some(EducationTier::Bac3), &hierarchy, &scoring),
            70.0
        );
        // bac+3 sits two ranks below bac+5 because of the unused rank 4.
        assert_eq!(
            match_education(3, Some(EducationTier::Bac5), &hierarchy, &scoring),
            40.0
        );
    }
}
