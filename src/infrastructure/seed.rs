//! Default catalog seed data
//!
//! Inserts a starter set of common FRC parts. Seeding is idempotent:
//! components that already exist are left untouched.

use tracing::info;

use crate::domain::catalog::{Availability, CatalogRepository, ComponentId, PublicComponent};
use crate::domain::DomainError;

struct SeedComponent {
    id: &'static str,
    name: &'static str,
    vendor: &'static str,
    category: &'static str,
    cost: f64,
    availability: Availability,
    source: &'static str,
    description: &'static str,
}

const SEED_COMPONENTS: &[SeedComponent] = &[
    SeedComponent {
        id: "REV-21-1650",
        name: "NEO Brushless Motor V1.1",
        vendor: "REV Robotics",
        category: "Motors",
        cost: 42.0,
        availability: Availability::InStock,
        source: "https://www.revrobotics.com/rev-21-1650/",
        description: "Brushless motor with integrated hall-effect encoder",
    },
    SeedComponent {
        id: "REV-21-1651",
        name: "NEO 550 Brushless Motor",
        vendor: "REV Robotics",
        category: "Motors",
        cost: 28.0,
        availability: Availability::InStock,
        source: "https://www.revrobotics.com/rev-21-1651/",
        description: "Compact brushless motor for mechanisms",
    },
    SeedComponent {
        id: "am-0255",
        name: "CIM Motor",
        vendor: "AndyMark",
        category: "Motors",
        cost: 29.99,
        availability: Availability::InStock,
        source: "https://www.andymark.com/products/2-5-in-cim-motor",
        description: "2.5 inch brushed DC motor, FRC legal since 2005",
    },
    SeedComponent {
        id: "217-6515",
        name: "Falcon 500 Powered by Talon FX",
        vendor: "VEX Robotics",
        category: "Motors",
        cost: 219.99,
        availability: Availability::Backordered,
        source: "https://www.vexrobotics.com/217-6515.html",
        description: "Brushless motor with integrated Talon FX controller",
    },
    SeedComponent {
        id: "REV-11-2158",
        name: "SPARK MAX Motor Controller",
        vendor: "REV Robotics",
        category: "Electronics",
        cost: 90.0,
        availability: Availability::InStock,
        source: "https://www.revrobotics.com/rev-11-2158/",
        description: "Motor controller for brushed and brushless motors",
    },
    SeedComponent {
        id: "am-4027",
        name: "roboRIO 2.0",
        vendor: "National Instruments",
        category: "Electronics",
        cost: 525.0,
        availability: Availability::OutOfStock,
        source: "https://www.andymark.com/products/ni-roborio-2",
        description: "FRC robot controller",
    },
    SeedComponent {
        id: "REV-11-1850",
        name: "Power Distribution Hub",
        vendor: "REV Robotics",
        category: "Electronics",
        cost: 250.0,
        availability: Availability::InStock,
        source: "https://www.revrobotics.com/rev-11-1850/",
        description: "24-channel power distribution with CAN monitoring",
    },
    SeedComponent {
        id: "am-3830",
        name: "8 in. Pneumatic Wheel",
        vendor: "AndyMark",
        category: "Wheels",
        cost: 18.0,
        availability: Availability::InStock,
        source: "https://www.andymark.com/products/8-in-pneumatic-wheel",
        description: "Pneumatic wheel for rough terrain drivetrains",
    },
    SeedComponent {
        id: "217-2593",
        name: "VersaPlanetary Gearbox",
        vendor: "VEX Robotics",
        category: "Gearboxes",
        cost: 39.99,
        availability: Availability::InStock,
        source: "https://www.vexrobotics.com/versaplanetary.html",
        description: "Modular planetary gearbox system",
    },
    SeedComponent {
        id: "MK-ES17-12",
        name: "12V 18Ah SLA Battery",
        vendor: "MK Battery",
        category: "Power",
        cost: 59.99,
        availability: Availability::InStock,
        source: "https://www.mkbattery.com/",
        description: "FRC legal sealed lead-acid robot battery",
    },
];

/// Insert the default catalog entries, skipping any that already exist
///
/// Returns the number of components inserted.
pub async fn seed_catalog<R: CatalogRepository>(repository: &R) -> Result<usize, DomainError> {
    let mut inserted = 0;

    for seed in SEED_COMPONENTS {
        let id = ComponentId::new(seed.id)
            .map_err(|e| DomainError::internal(format!("Invalid seed component ID: {}", e)))?;

        if repository.exists(&id).await? {
            continue;
        }

        let component = PublicComponent::new(id, seed.name, seed.vendor, seed.category, seed.cost)
            .map_err(|e| DomainError::internal(format!("Invalid seed component: {}", e)))?
            .with_availability(seed.availability)
            .with_source(seed.source)
            .with_description(seed.description);

        repository.create(component).await?;
        inserted += 1;
    }

    info!(inserted = inserted, "Catalog seed complete");

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::MockCatalogRepository;

    #[tokio::test]
    async fn test_seed_inserts_all() {
        let repository = MockCatalogRepository::new();

        let inserted = seed_catalog(&repository).await.unwrap();

        assert_eq!(inserted, SEED_COMPONENTS.len());
        assert_eq!(repository.list().await.unwrap().len(), SEED_COMPONENTS.len());
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repository = MockCatalogRepository::new();

        seed_catalog(&repository).await.unwrap();
        let second_run = seed_catalog(&repository).await.unwrap();

        assert_eq!(second_run, 0);
        assert_eq!(repository.list().await.unwrap().len(), SEED_COMPONENTS.len());
    }

    #[test]
    fn test_seed_ids_are_valid() {
        for seed in SEED_COMPONENTS {
            assert!(ComponentId::new(seed.id).is_ok(), "bad seed id: {}", seed.id);
        }
    }
}
