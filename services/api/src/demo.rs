use crate::infra::{
    matrix_page, scoring_engine, InMemoryRecordRepository, StaticProfileDirectory,
};
use clap::Args;
use pmo_dashboard::error::AppError;
use pmo_dashboard::workflows::prioritization::{
    is_page_admin, CriteriaCatalog, CriterionId, PrioritizationService, ProfileDirectory,
    RecordSubmission, ServiceError, UserRole, Viewer,
};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct MatrixDemoArgs {
    /// Identity submitting the sample record (defaults to the student "amina")
    #[arg(long)]
    pub(crate) submitted_by: Option<String>,
    /// Identity approving the sample record (defaults to "pmo-officer")
    #[arg(long)]
    pub(crate) approve_as: Option<String>,
}

/// Print the active catalog: weights and the 1-5 rating guide per criterion.
pub(crate) fn run_matrix_catalog() -> Result<(), AppError> {
    let catalog = CriteriaCatalog::standard();

    println!("Prioritization criteria catalog");
    for criterion in catalog.criteria() {
        println!("\n{} ({}%)", criterion.name, criterion.weight);
        println!("  {}", criterion.description);
        for rating in 1..=5u8 {
            if let Some(guide) = criterion.describe_rating(rating) {
                println!("  {rating}: {guide}");
            }
        }
    }

    Ok(())
}

/// Walk one record through scoring, the Draft/Published lifecycle, and the
/// visibility tiers, printing each step.
pub(crate) fn run_matrix_demo(args: MatrixDemoArgs) -> Result<(), AppError> {
    let submitted_by = args.submitted_by.unwrap_or_else(|| "amina".to_string());
    let approve_as = args.approve_as.unwrap_or_else(|| "pmo-officer".to_string());

    let repository = Arc::new(InMemoryRecordRepository::default());
    let service = PrioritizationService::new(repository, scoring_engine());
    let profiles = StaticProfileDirectory::default();
    let page = matrix_page();

    let mut criteria_scores: BTreeMap<CriterionId, u8> = BTreeMap::new();
    for (id, rating) in [
        ("safety", 4),
        ("functionality", 5),
        ("frequency", 5),
        ("beneficiaries", 4),
        ("cost", 3),
        ("strategic", 4),
        ("disaster", 2),
    ] {
        criteria_scores.insert(CriterionId::new(id), rating);
    }

    let record = service.submit(
        RecordSubmission {
            title: "Science wing chiller replacement".to_string(),
            description: "Replace the failed chiller serving the science wing.".to_string(),
            operational_status: "Planning".to_string(),
            criteria_scores,
        },
        submitted_by.clone(),
    )?;

    println!("Prioritization matrix demo");
    println!(
        "\nSubmitted '{}' as {} -> {} ({})",
        record.title,
        record.submitted_by,
        record.record_status.label(),
        record.id
    );

    println!("\nScore breakdown");
    let catalog = service.engine().catalog();
    for criterion in catalog.criteria() {
        let rating = record.criteria_scores[&criterion.id];
        let weighted = record.weighted_scores[&criterion.id];
        println!(
            "- {} ({}%): rated {} -> {:.2}",
            criterion.name, criterion.weight, rating, weighted
        );
    }
    println!(
        "Total weighted score: {:.2} -> {} priority",
        record.total_weighted_score,
        record.priority_level.label()
    );

    let anonymous = service.visible(&Viewer::anonymous())?;
    println!(
        "\nAnonymous visitors see {} record(s) while the draft is unpublished",
        anonymous.len()
    );
    let owner = service.visible(&Viewer::authenticated(submitted_by.clone(), false))?;
    println!("{submitted_by} sees {} record(s) (own draft included)", owner.len());

    // A non-admin approval attempt is rejected and changes nothing.
    match service.approve(&record.id, false) {
        Err(ServiceError::Authorization(denial)) => {
            println!("\nApproval attempt without admin standing: {denial}");
        }
        other => println!("\nUnexpected approval outcome: {other:?}"),
    }

    let approver_is_admin = profiles
        .profile(&approve_as)
        .map(|profile| is_page_admin(&profile, &page))
        .unwrap_or(false);
    let approved = service.approve(&record.id, approver_is_admin)?;
    println!(
        "Approved by {} -> {}",
        approve_as,
        approved.record_status.label()
    );

    let anonymous = service.visible(&Viewer::anonymous())?;
    println!(
        "\nAnonymous visitors now see {} record(s)",
        anonymous.len()
    );

    match service.delete(&record.id, UserRole::PmoStaff) {
        Err(ServiceError::Authorization(denial)) => {
            println!("Deletion attempt as PMO staff: {denial}");
        }
        other => println!("Unexpected deletion outcome: {other:?}"),
    }
    service.delete(&record.id, UserRole::Administrator)?;
    println!("Deleted by an administrator; the matrix is empty again.");

    Ok(())
}
