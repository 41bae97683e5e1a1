//! Content provisioning.
//!
//! [`seed_content`] fills every content table with the company's bundled
//! copy. A table is only seeded while it is empty, so running the routine
//! again (or against a database an editor has already populated) changes
//! nothing.

use chrono::{Months, TimeZone, Utc};
use serde_json::json;
use sqlx::{PgConnection, PgPool};
use srimitha_core::content::{is_valid_rating, is_valid_slug};
use srimitha_core::types::Timestamp;

use crate::models::collaboration::CreateCollaboration;
use crate::models::event::CreateEvent;
use crate::models::project::CreateProject;
use crate::models::service::CreateService;
use crate::models::setting::CreateSetting;
use crate::models::team::CreateTeamMember;
use crate::models::testimonial::CreateTestimonial;
use crate::repositories::{
    CollaborationRepo, EventRepo, ProjectRepo, ServiceRepo, SettingRepo, TeamRepo,
    TestimonialRepo,
};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid seed content: {0}")]
    InvalidContent(String),
}

/// What happened to one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(usize),
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub table: &'static str,
    pub outcome: SeedOutcome,
}

/// Seed every content table that is currently empty.
///
/// Event dates are placed relative to `now`: two upcoming workshops and one
/// that took place last month.
pub async fn seed_content(pool: &PgPool, now: Timestamp) -> Result<Vec<SeedReport>, SeedError> {
    let services = services();
    let projects = projects();
    let testimonials = testimonials();
    validate(&services, &projects, &testimonials)?;
    let events = events(now)?;

    Ok(vec![
        seed_table(pool, "services", &services).await?,
        seed_table(pool, "projects", &projects).await?,
        seed_table(pool, "team", &team()).await?,
        seed_table(pool, "testimonials", &testimonials).await?,
        seed_table(pool, "events", &events).await?,
        seed_table(pool, "collaborations", &collaborations()).await?,
        seed_table(pool, "settings", &settings()).await?,
    ])
}

/// A bundled row that can insert itself on a connection.
trait SeedRow {
    async fn insert(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error>;
}

macro_rules! seed_row {
    ($($input:ty => $repo:ident),* $(,)?) => {
        $(
            impl SeedRow for $input {
                async fn insert(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
                    $repo::create(conn, self).await.map(|_| ())
                }
            }
        )*
    };
}

seed_row! {
    CreateService => ServiceRepo,
    CreateProject => ProjectRepo,
    CreateTeamMember => TeamRepo,
    CreateTestimonial => TestimonialRepo,
    CreateEvent => EventRepo,
    CreateCollaboration => CollaborationRepo,
    CreateSetting => SettingRepo,
}

/// Seed one table in a single transaction: either every bundled row lands
/// or none does, so a failed run leaves the table empty for the next one.
async fn seed_table<T: SeedRow>(
    pool: &PgPool,
    table: &'static str,
    rows: &[T],
) -> Result<SeedReport, SeedError> {
    let mut tx = pool.begin().await?;

    // Concurrent seed runs queue here. Plain reads are not blocked.
    sqlx::query(&format!("LOCK TABLE {table} IN SHARE ROW EXCLUSIVE MODE"))
        .execute(&mut *tx)
        .await?;

    if !table_is_empty(&mut tx, table).await? {
        tracing::info!(table, "Table already has rows, skipping seed");
        return Ok(SeedReport {
            table,
            outcome: SeedOutcome::Skipped,
        });
    }

    for row in rows {
        row.insert(&mut tx).await?;
    }
    tx.commit().await?;

    tracing::info!(table, rows = rows.len(), "Seeded table");
    Ok(SeedReport {
        table,
        outcome: SeedOutcome::Seeded(rows.len()),
    })
}

/// `table` is always one of the literal names above.
async fn table_is_empty(conn: &mut PgConnection, table: &str) -> Result<bool, sqlx::Error> {
    let query = format!("SELECT NOT EXISTS (SELECT 1 FROM {table})");
    sqlx::query_scalar::<_, bool>(&query).fetch_one(conn).await
}

fn validate(
    services: &[CreateService],
    projects: &[CreateProject],
    testimonials: &[CreateTestimonial],
) -> Result<(), SeedError> {
    let slugs = services
        .iter()
        .map(|s| s.slug.as_str())
        .chain(projects.iter().map(|p| p.slug.as_str()));
    for slug in slugs {
        if !is_valid_slug(slug) {
            return Err(SeedError::InvalidContent(format!("malformed slug '{slug}'")));
        }
    }

    for t in testimonials {
        if let Some(rating) = t.rating.filter(|r| !is_valid_rating(*r)) {
            return Err(SeedError::InvalidContent(format!(
                "rating {rating} for '{}' is outside 1-5",
                t.name
            )));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Bundled content
// ---------------------------------------------------------------------------

fn date(year: i32, month: u32, day: u32) -> Option<Timestamp> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

fn shift_months(now: Timestamp, months: i32) -> Result<Timestamp, SeedError> {
    let shifted = if months >= 0 {
        now.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        now.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.ok_or_else(|| SeedError::InvalidContent(format!("cannot shift {now} by {months} months")))
}

fn service(title: &str, icon: &str, slug: &str, description: &str) -> CreateService {
    CreateService {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
        slug: slug.into(),
    }
}

fn services() -> Vec<CreateService> {
    vec![
        service(
            "Power Distribution Systems",
            "bolt",
            "power-distribution-systems",
            "Engineering & implementation of reliable power distribution systems for commercial, \
             industrial, and residential applications. Our expertise includes substation design, \
             high and medium voltage networks, and power quality solutions.",
        ),
        service(
            "Renewable Energy Solutions",
            "sun",
            "renewable-energy-solutions",
            "Design and integration of renewable energy systems including solar, wind, \
             hydroelectric, and hybrid solutions. We provide comprehensive services from resource \
             assessment to implementation and grid connection.",
        ),
        service(
            "Energy Management Systems",
            "gauge",
            "energy-management-systems",
            "Custom energy management solutions to optimize consumption, reduce operational costs, \
             and enhance sustainability. Our systems include real-time monitoring, automated \
             controls, and advanced analytics.",
        ),
        service(
            "Electric Vehicle Infrastructure",
            "car-battery",
            "ev-infrastructure",
            "Planning and deployment of EV charging infrastructure for public facilities, \
             commercial properties, and residential complexes. We provide scalable solutions from \
             single-point installations to networked charging hubs.",
        ),
        service(
            "Power Electronics Design",
            "microchip",
            "power-electronics-design",
            "Custom power electronics solutions including converters, inverters, and control \
             systems for specialized applications. Our engineering team has expertise in both \
             analog and digital power electronics design.",
        ),
        service(
            "Energy Audits & Optimization",
            "magnifying-glass-chart",
            "energy-audits-optimization",
            "Comprehensive energy audits to identify inefficiencies and develop optimization \
             strategies. Our services include thermal imaging, load analysis, power quality \
             assessment, and ROI-focused recommendations.",
        ),
    ]
}

fn projects() -> Vec<CreateProject> {
    let project = |title: &str,
                   category: &str,
                   client: &str,
                   completed: Option<Timestamp>,
                   slug: &str,
                   image: &str,
                   description: &str| CreateProject {
        title: title.into(),
        description: description.into(),
        image: image.into(),
        category: category.into(),
        client: Some(client.into()),
        completion_date: completed,
        slug: slug.into(),
    };

    vec![
        project(
            "Smart Grid Implementation for Municipal Utility",
            "Smart Grids",
            "Westlake Municipal Utility",
            date(2023, 8, 15),
            "smart-grid-municipal-utility",
            "https://images.unsplash.com/photo-1473341304170-971dccb5ac1e",
            "Designed and implemented a comprehensive smart grid system for a municipal utility \
             serving 50,000 residents. The project included advanced metering infrastructure, \
             distribution automation, and a centralized management system.",
        ),
        project(
            "Solar Microgrid for Rural Healthcare Facility",
            "Renewable Energy",
            "Regional Health Partners",
            date(2023, 5, 10),
            "solar-microgrid-healthcare",
            "https://images.unsplash.com/photo-1509391366360-2e959784a276",
            "Engineered a 100kW solar microgrid with battery storage for a rural healthcare \
             facility, ensuring reliable 24/7 power supply and reducing operational costs by 60%. \
             The system includes automated load management and remote monitoring capabilities.",
        ),
        project(
            "Commercial EV Fleet Charging Infrastructure",
            "EV Infrastructure",
            "GreenDelivery Logistics",
            date(2023, 11, 30),
            "ev-fleet-charging",
            "https://images.unsplash.com/photo-1593941707882-a5bba13938c7",
            "Developed a scalable charging infrastructure for a logistics company's fleet of 50 \
             electric delivery vehicles. The smart charging system optimizes charging schedules, \
             manages peak demand, and integrates with the company's operations software.",
        ),
        project(
            "Industrial Energy Management System",
            "Energy Management",
            "PrecisionMfg Industries",
            date(2023, 3, 22),
            "industrial-energy-management",
            "https://images.unsplash.com/photo-1581094794329-c8112a89af12",
            "Implemented a comprehensive energy management system for a manufacturing facility, \
             reducing energy consumption by 25%. The solution includes real-time monitoring, \
             predictive maintenance, and automated optimization algorithms.",
        ),
        project(
            "Hybrid Power System for Island Community",
            "Renewable Energy",
            "Isla Verde Township",
            date(2022, 9, 15),
            "island-hybrid-power",
            "https://images.unsplash.com/photo-1532601224476-15c79f2f7a51",
            "Designed and deployed a hybrid power system combining solar, wind, and diesel \
             generation with advanced storage for an island community of 2,000 residents. The \
             system has reduced fossil fuel consumption by 70% while improving reliability.",
        ),
        project(
            "Power Quality Improvement for Data Center",
            "Power Quality",
            "CloudSphere Data Services",
            date(2023, 1, 12),
            "data-center-power-quality",
            "https://images.unsplash.com/photo-1558494949-ef010cbdcc31",
            "Engineered and implemented power quality solutions for a 10MW data center, ensuring \
             clean power delivery and eliminating costly downtime. The project included harmonic \
             filtering, transient voltage suppression, and uninterruptible power systems.",
        ),
    ]
}

fn team() -> Vec<CreateTeamMember> {
    vec![
        CreateTeamMember {
            name: "Dr. Priya Sharma".into(),
            position: "Founder & CEO".into(),
            bio: Some(
                "Dr. Sharma has over 20 years of experience in electrical engineering and \
                 renewable energy systems. She founded Srimitha Energy Solutions with a vision to \
                 accelerate the transition to sustainable energy. She holds a Ph.D. in Electrical \
                 Engineering from MIT and has published over 30 research papers."
                    .into(),
            ),
            image: Some("https://images.unsplash.com/photo-1573496359142-b8d87734a5a2".into()),
            social_links: Some(json!({
                "linkedin": "https://linkedin.com/in/priyasharma",
                "twitter": "https://twitter.com/drsharma",
            })),
            sort_order: 1,
        },
        CreateTeamMember {
            name: "Rajiv Mehta".into(),
            position: "Chief Technology Officer".into(),
            bio: Some(
                "Rajiv leads our technical innovations with expertise in power electronics and \
                 control systems. With 15 years of industry experience, he has led the development \
                 of multiple patented technologies in energy conversion systems. He previously \
                 worked at Siemens and General Electric."
                    .into(),
            ),
            image: Some("https://images.unsplash.com/photo-1560250097-0b93528c311a".into()),
            social_links: Some(json!({
                "linkedin": "https://linkedin.com/in/rajivmehta",
            })),
            sort_order: 2,
        },
        CreateTeamMember {
            name: "Ananya Patel".into(),
            position: "Renewable Energy Director".into(),
            bio: Some(
                "Ananya specializes in solar and wind energy systems with a focus on grid \
                 integration. She has designed and implemented renewable solutions across three \
                 continents and has a master's degree in Sustainable Energy Engineering from TU \
                 Delft, Netherlands."
                    .into(),
            ),
            image: Some("https://images.unsplash.com/photo-1580489944761-15a19d654956".into()),
            social_links: Some(json!({
                "linkedin": "https://linkedin.com/in/ananyapatel",
                "twitter": "https://twitter.com/ananyaenergy",
            })),
            sort_order: 3,
        },
        CreateTeamMember {
            name: "Samuel Johnson".into(),
            position: "Smart Grid Engineer".into(),
            bio: Some(
                "Samuel is an expert in smart grid technologies and advanced metering systems. He \
                 has helped utilities modernize their infrastructure and improve grid reliability. \
                 He holds a degree in Electrical Engineering from Stanford University and is a \
                 certified Project Management Professional."
                    .into(),
            ),
            image: Some("https://images.unsplash.com/photo-1519085360753-af0119f7cbe7".into()),
            social_links: Some(json!({
                "linkedin": "https://linkedin.com/in/samueljohnson",
            })),
            sort_order: 4,
        },
    ]
}

fn testimonials() -> Vec<CreateTestimonial> {
    let testimonial = |name: &str, position: &str, company: &str, image: &str, quote: &str| {
        CreateTestimonial {
            name: name.into(),
            position: Some(position.into()),
            company: Some(company.into()),
            quote: quote.into(),
            image: Some(image.into()),
            rating: Some(5),
            is_active: Some(true),
        }
    };

    vec![
        testimonial(
            "Michael Chen",
            "Operations Director",
            "GreenTech Manufacturing",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e",
            "Srimitha Energy Solutions transformed our manufacturing facility with their \
             industrial energy management system. We've seen a 30% reduction in energy costs and \
             significant improvements in production efficiency. Their team was professional, \
             knowledgeable, and committed throughout the project.",
        ),
        testimonial(
            "Sarah Rodriguez",
            "Sustainability Manager",
            "Metro Hospital Network",
            "https://images.unsplash.com/photo-1554727242-741c14fa561c",
            "The solar microgrid system installed by Srimitha Energy has been a game-changer for \
             our rural healthcare facilities. Not only has it provided reliable power in areas \
             with frequent outages, but it's also aligned perfectly with our sustainability goals. \
             Their team's expertise in both healthcare requirements and renewable energy made the \
             project seamless.",
        ),
        testimonial(
            "James Wilson",
            "Chief Information Officer",
            "DataStream Solutions",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d",
            "After experiencing costly downtime due to power quality issues, we engaged Srimitha \
             Energy Solutions to implement a comprehensive solution for our data center. Their \
             technical expertise and methodical approach resolved all our issues. We've had zero \
             downtime since implementation, and our equipment is running more efficiently than \
             ever.",
        ),
    ]
}

fn events(now: Timestamp) -> Result<Vec<CreateEvent>, SeedError> {
    let next_month = shift_months(now, 1)?;
    let two_months = shift_months(now, 2)?;
    let last_month = shift_months(now, -1)?;

    Ok(vec![
        CreateEvent {
            title: "Renewable Energy Integration Workshop".into(),
            description: "A comprehensive two-day workshop on integrating renewable energy \
                sources into existing power systems. Topics include grid stability, energy \
                storage solutions, and smart control systems. Industry experts will share case \
                studies and practical implementation strategies."
                .into(),
            start_date: next_month,
            end_date: next_month + chrono::Duration::days(1),
            location: Some("Srimitha Energy Solutions Training Center, Bangalore".into()),
            image: Some("https://images.unsplash.com/photo-1540575467063-178a50c2df87".into()),
            capacity: Some(50),
            registration_url: Some("https://forms.example.com/renewableworkshop".into()),
            is_active: Some(true),
        },
        CreateEvent {
            title: "EV Infrastructure Planning Forum".into(),
            description: "Join us for an insightful discussion on planning and implementing \
                electric vehicle charging infrastructure for various applications. Learn about \
                current technologies, regulatory considerations, and funding opportunities from \
                industry leaders and policy experts."
                .into(),
            start_date: two_months,
            end_date: two_months,
            location: Some("Grand Hyatt, Mumbai".into()),
            image: Some("https://images.unsplash.com/photo-1593941707882-a5bba13938c7".into()),
            capacity: Some(100),
            registration_url: Some("https://forms.example.com/evforum".into()),
            is_active: Some(true),
        },
        CreateEvent {
            title: "Energy Efficiency in Industrial Systems Seminar".into(),
            description: "A completed seminar that covered advanced strategies for optimizing \
                energy use in industrial facilities. Participants learned about the latest \
                technologies in motor drives, compressed air systems, and process heating, along \
                with ROI-focused implementation approaches."
                .into(),
            start_date: last_month,
            end_date: last_month,
            location: Some("Virtual Webinar".into()),
            image: Some("https://images.unsplash.com/photo-1581244277943-fe4d9aa28207".into()),
            capacity: Some(200),
            registration_url: None,
            is_active: Some(true),
        },
    ])
}

fn collaborations() -> Vec<CreateCollaboration> {
    let collaboration = |name: &str, logo: &str, website: &str, order: i32, description: &str| {
        CreateCollaboration {
            name: name.into(),
            logo: Some(logo.into()),
            website: Some(website.into()),
            description: Some(description.into()),
            is_active: Some(true),
            sort_order: order,
        }
    };

    vec![
        collaboration(
            "Indian Institute of Technology, Bombay",
            "https://example.com/iitb-logo.svg",
            "https://www.iitb.ac.in",
            1,
            "Research partnership focused on advanced power electronics and energy storage \
             technologies. Joint development of innovative solutions for renewable energy \
             integration.",
        ),
        collaboration(
            "Tata Power",
            "https://example.com/tatapower-logo.svg",
            "https://www.tatapower.com",
            2,
            "Strategic collaboration on smart grid implementations and distributed energy \
             resource management systems. Co-development of pilot projects for urban microgrids.",
        ),
        collaboration(
            "National Renewable Energy Laboratory",
            "https://example.com/nrel-logo.svg",
            "https://www.nrel.gov",
            3,
            "International research partnership on advanced solar energy systems and grid \
             integration technologies. Knowledge sharing and validation of innovative approaches.",
        ),
        collaboration(
            "EV Manufacturers Association of India",
            "https://example.com/evmai-logo.svg",
            "https://www.evmai.org",
            4,
            "Industry association membership for advancing electric vehicle charging standards \
             and infrastructure development in India. Participation in policy development and \
             technology standardization.",
        ),
    ]
}

/// Settings rows mirror the defaults in [`srimitha_core::settings::SiteSettings`].
fn settings() -> Vec<CreateSetting> {
    srimitha_core::settings::SiteSettings::default()
        .to_map()
        .into_iter()
        .map(|(key, value)| CreateSetting { key, value })
        .collect()
}
