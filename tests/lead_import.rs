use readiness_engine::assessment::{
    AssessmentContext, AssessmentKind, LeadCsvImporter, LeadImportError, LeadTier, MaturityBand,
};
use std::io::Cursor;

fn context() -> AssessmentContext {
    AssessmentContext::new(AssessmentKind::AiReadiness)
}

const HEADER: &str = "First Name,Last Name,Email,Company,Role,Company Size,Submitted At,\
strategic,executive,oversight,data,security,risk,governance,integration,workforce,improvement";

#[test]
fn import_classifies_a_mixed_batch() {
    let csv = format!(
        "{HEADER}\n\
Maya,Chen,maya@nimbus.io,Nimbus,CEO,201-1000,2026-08-01T09:30:00Z,5,4,4,5,4,4,4,5,4,5\n\
Raj,Patel,raj@smallshop.com,Small Shop,Office Manager,1-10,2026-08-02,2,2,2,2,2,2,2,2,2,2\n\
Ana,Silva,ana@mid.co,Mid Co,Director of Ops,51-200,,3,3,3,3,3,3,3,3,3,3\n"
    );

    let context = context();
    let leads = LeadCsvImporter::from_reader(Cursor::new(csv), &context).expect("import succeeds");
    assert_eq!(leads.len(), 3);

    let maya = &leads[0];
    assert_eq!(maya.score.total_score, 44);
    assert_eq!(maya.score.band, MaturityBand::Advanced);
    assert_eq!(maya.classification.tier, LeadTier::Hot);
    assert!(maya.submission.submitted_at.is_some());

    let raj = &leads[1];
    assert_eq!(raj.score.band, MaturityBand::Early);
    assert_eq!(raj.classification.tier, LeadTier::Cold);

    // Developing band upgraded one step by director role + mid-size company.
    let ana = &leads[2];
    assert_eq!(ana.score.band, MaturityBand::Developing);
    assert_eq!(ana.classification.tier, LeadTier::Hot);
    assert!(ana.classification.reason.contains("51-200"));
}

#[test]
fn import_treats_unanswered_dimensions_as_partial() {
    let csv = "First Name,Email,strategic,executive,oversight\n\
Lee,lee@example.com,5,5,5\n";

    let context = context();
    let leads = LeadCsvImporter::from_reader(Cursor::new(csv), &context).expect("import succeeds");

    assert_eq!(leads.len(), 1);
    let lead = &leads[0];
    assert!(lead.score.is_partial);
    assert_eq!(lead.score.total_score, 15);
    assert_ne!(lead.classification.tier, LeadTier::Hot);
    assert!(lead.classification.reason.contains("incomplete"));
}

#[test]
fn import_skips_rows_without_email_but_keeps_the_rest() {
    let csv = "First Name,Email,strategic\n\
Ghost,,4\n\
Real,real@example.com,4\n";

    let context = context();
    let leads = LeadCsvImporter::from_reader(Cursor::new(csv), &context).expect("import succeeds");

    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].submission.first_name, "Real");
}

#[test]
fn import_rejects_answers_outside_the_scale_with_row_diagnostics() {
    let csv = "Email,strategic\nok@example.com,3\nx@example.com,9\n";

    let context = context();
    match LeadCsvImporter::from_reader(Cursor::new(csv), &context) {
        Err(LeadImportError::InvalidAnswer { line, dimension, value }) => {
            assert_eq!(line, 3);
            assert_eq!(dimension, "strategic");
            assert_eq!(value, "9");
        }
        other => panic!("expected invalid answer error for out-of-range answer, got {other:?}"),
    }
}

#[test]
fn import_recommendations_follow_the_gap_order() {
    let csv = "Email,strategic,executive,oversight,data,security,risk,governance,integration,workforce,improvement\n\
gaps@example.com,5,2,1,3,5,5,5,5,5,5\n";

    let context = context();
    let leads = LeadCsvImporter::from_reader(Cursor::new(csv), &context).expect("import succeeds");

    let titles: Vec<&str> = leads[0]
        .recommendations
        .iter()
        .map(|recommendation| recommendation.title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Human-in-the-Loop Design",
            "Executive AI Briefing",
            "Data Foundation Audit"
        ]
    );
}
