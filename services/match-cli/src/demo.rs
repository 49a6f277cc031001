use crate::infra::{parse_date, with_reference_date};
use chrono::NaiveDate;
use clap::Args;
use talent_match::error::AppError;
use talent_match::matching::{
    Badge, CandidateProfile, ContractType, EducationRecord, EducationTier, Experience,
    ExperienceTier, JobRequirement, MatchEngine, RankedMatch, Skill, TestResult,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Measure experience up to this date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Print the per-factor breakdown for every candidate.
    #[arg(long)]
    pub(crate) explain: bool,
}

pub(crate) fn run_demo(engine: MatchEngine, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { as_of, explain } = args;
    let engine = with_reference_date(engine, as_of);

    let job = demo_job();
    let candidates = demo_candidates();
    let ranking = engine.rank_matches(&job, &candidates);

    render_ranking(&job, &ranking, engine.reference_date(), explain);
    Ok(())
}

fn render_ranking(
    job: &JobRequirement,
    ranking: &[RankedMatch],
    as_of: NaiveDate,
    explain: bool,
) {
    println!("Candidate matching demo");
    println!(
        "Job {} requires [{}], experience {}, education {} (evaluated {})",
        job.id.0,
        job.required_skills.join(", "),
        job.required_experience_tier
            .map(ExperienceTier::label)
            .unwrap_or("any"),
        job.required_education_tier
            .map(EducationTier::label)
            .unwrap_or("any"),
        as_of
    );

    println!("\nRanking");
    for entry in ranking {
        let Some(result) = &entry.result else {
            println!("- unranked: {}", entry.profile.user_id.0);
            continue;
        };
        let position = entry
            .position
            .map(|position| format!("#{position}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{} {} scored {} | skills {:.0} | experience {:.0} ({}, {} months) | education {:.0} | bonus {:.0}",
            position,
            result.user_id.0,
            result.match_score,
            result.skills_score,
            result.experience_score,
            result.derived_experience_tier.label(),
            result.total_experience_months,
            result.education_score,
            result.bonus_score
        );
        if !result.missing_skills.is_empty() {
            println!("    missing: {}", result.missing_skills.join(", "));
        }
        if explain {
            for component in &result.components {
                println!(
                    "    {:?}: {:.1} x {:.2} = {:.1} ({})",
                    component.factor,
                    component.score,
                    component.weight,
                    component.contribution,
                    component.notes
                );
            }
        }
    }
}

fn demo_job() -> JobRequirement {
    JobRequirement {
        required_skills: ["React", "TypeScript", "Node", "SQL"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        required_experience_tier: Some(ExperienceTier::Mid),
        required_education_tier: Some(EducationTier::Bac3),
        contract_type: ContractType::Cdi,
        location: Some("Lyon".to_string()),
        remote_allowed: Some(true),
        ..JobRequirement::new("job-fullstack-lyon")
    }
}

fn skill(name: &str, level: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level: Some(level.to_string()),
        category: None,
    }
}

fn job_entry(title: &str, company: &str, start: &str, end: Option<&str>) -> Experience {
    Experience {
        title: title.to_string(),
        company: company.to_string(),
        start_date: Some(start.to_string()),
        end_date: end.map(str::to_string),
        is_current: end.is_none(),
    }
}

fn degree(text: &str, field: &str) -> EducationRecord {
    EducationRecord {
        degree: text.to_string(),
        field_of_study: Some(field.to_string()),
        end_date: None,
    }
}

fn badge(code: &str, label: &str) -> Badge {
    Badge {
        code: code.to_string(),
        label: label.to_string(),
    }
}

fn test_result(title: &str, score: f64) -> TestResult {
    TestResult {
        test_title: title.to_string(),
        score,
    }
}

fn demo_candidates() -> Vec<CandidateProfile> {
    let mut camille = CandidateProfile::new("camille");
    camille.skills = vec![
        skill("React.js", "expert"),
        skill("TypeScript", "advanced"),
        skill("PostgreSQL", "intermediate"),
    ];
    camille.experiences = vec![
        job_entry("Front-end developer", "Atelier Web", "2019-09-01", Some("2022-06-30")),
        job_entry("Full-stack developer", "Canut Labs", "2022-07-01", None),
    ];
    camille.education = vec![degree("Master MIAGE", "Informatique")];
    camille.badges = vec![badge("react-pro", "React Pro"), badge("sql-101", "SQL")];
    camille.test_results = vec![test_result("React avancé", 88.0), test_result("SQL", 74.0)];

    let mut yanis = CandidateProfile::new("yanis");
    yanis.skills = vec![skill("Node.js", "advanced"), skill("Express", "advanced")];
    yanis.experiences = vec![job_entry("Back-end developer", "Rhône Data", "2022-03-01", None)];
    yanis.education = vec![degree("BTS SIO", "Développement")];
    yanis.test_results = vec![test_result("Node.js", 91.0), test_result("Algorithmique", 55.0)];

    let mut lea = CandidateProfile::new("lea");
    lea.skills = vec![skill("Figma", "expert"), skill("React", "beginner")];
    lea.experiences = vec![job_entry("UI designer", "Studio Presqu'île", "2023-06", None)];
    lea.education = vec![degree("Licence Design", "Design numérique")];
    lea.badges = vec![
        badge("ux-1", "UX Research"),
        badge("ux-2", "Accessibilité"),
        badge("ux-3", "Design system"),
    ];

    let mut sacha = CandidateProfile::new("sacha");
    sacha.skills = vec![skill("Java", "expert"), skill("SQL", "advanced")];
    sacha.experiences = vec![job_entry(
        "Java developer",
        "Banque Confluence",
        "2014-01-01",
        Some("date inconnue"),
    )];
    sacha.education = vec![degree("Doctorat", "Informatique")];

    vec![camille, yanis, lea, sacha]
}
