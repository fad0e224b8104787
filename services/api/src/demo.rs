use crate::infra::seeded_directory;
use clap::Args;
use std::time::Duration;
use ventalms::directory::{CompanyStatus, CompanyUpdate, NewCompany, Phase};
use ventalms::error::AppError;
use ventalms::program::{
    self, effective_weight, ideation_criteria, validate_weights, ProgramId,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Simulated directory latency in milliseconds (defaults to none)
    #[arg(long, default_value_t = 0)]
    pub(crate) latency_ms: u64,
    /// Skip the scoring configuration portion of the demo
    #[arg(long)]
    pub(crate) skip_scoring: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        latency_ms,
        skip_scoring,
    } = args;

    println!("VenTal management console demo");

    let directory = seeded_directory(Duration::from_millis(latency_ms));

    println!("\nCompany directory");
    for company in directory.list().await {
        println!(
            "  #{:<3} {:<24} {:<12} {:<10} {}",
            company.id, company.name, company.industry, company.phase, company.status
        );
    }

    let created = directory
        .create(NewCompany {
            name: "LogiTech Transport".to_string(),
            industry: "Logistics".to_string(),
            phase: Phase::Ideation,
            status: CompanyStatus::Pending,
            founded_date: None,
            description: None,
        })
        .await?;
    println!("\nCreated company #{}: {}", created.id, created.name);

    let promoted = directory
        .update(
            created.id,
            CompanyUpdate {
                phase: Some(Phase::IncuHatch),
                status: Some(CompanyStatus::Active),
                ..CompanyUpdate::default()
            },
        )
        .await?;
    println!(
        "Promoted #{} to {} ({})",
        promoted.id, promoted.phase, promoted.status
    );

    println!("\nProgram catalog");
    for id in [ProgramId::Ideation, ProgramId::IncuHatch, ProgramId::IncuBoost] {
        let program = program::program_type(id);
        println!("  {:<10} {:<18} {}", program.id, program.name, program.duration);
    }

    println!("\nIdeation milestone schedule");
    for milestone in program::milestones(ProgramId::Ideation) {
        println!("  {:<4} {}", milestone.month, milestone.activities.join(", "));
    }

    if !skip_scoring {
        println!("\nScoring configuration check");
        let mut criteria = ideation_criteria();
        match validate_weights(&criteria) {
            Ok(()) => println!("  defaults allocate 100%"),
            Err(err) => println!("  defaults rejected: {err}"),
        }

        if let Some(revenue) = criteria
            .iter_mut()
            .find(|criterion| criterion.section == "Revenue Stream")
        {
            revenue.custom_weight = Some(40);
        }
        validate_weights(&criteria)?;
        let total: u32 = criteria
            .iter()
            .map(|criterion| u32::from(effective_weight(criterion)))
            .sum();
        println!("  with Revenue Stream at 40%, allocation totals {total}%");
    }

    Ok(())
}
