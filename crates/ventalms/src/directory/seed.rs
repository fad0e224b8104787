use chrono::NaiveDate;

use super::domain::{Company, CompanyStatus, Phase};

/// Demo records the service boots with until a real backend exists. Creation
/// over this seed continues the id sequence at 6.
pub fn demo_companies() -> Vec<Company> {
    vec![
        Company {
            id: 1,
            name: "TechnoVision Ltd".to_string(),
            industry: "Tech".to_string(),
            phase: Phase::Ideation,
            status: CompanyStatus::Active,
            founded_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            description: Some("AI-powered visual recognition solutions for industry".to_string()),
        },
        Company {
            id: 2,
            name: "GreenGrow Innovations".to_string(),
            industry: "AgriTech".to_string(),
            phase: Phase::IncuHatch,
            status: CompanyStatus::Active,
            founded_date: None,
            description: None,
        },
        Company {
            id: 3,
            name: "MediHealth Solutions".to_string(),
            industry: "HealthTech".to_string(),
            phase: Phase::IncuBoost,
            status: CompanyStatus::Active,
            founded_date: None,
            description: None,
        },
        Company {
            id: 4,
            name: "EduSmart Technologies".to_string(),
            industry: "EdTech".to_string(),
            phase: Phase::Ideation,
            status: CompanyStatus::Pending,
            founded_date: None,
            description: None,
        },
        Company {
            id: 5,
            name: "FinSecure Systems".to_string(),
            industry: "FinTech".to_string(),
            phase: Phase::Ideation,
            status: CompanyStatus::Active,
            founded_date: None,
            description: None,
        },
    ]
}
