//! Demo catalog and staff loaded at startup when `store.seed_demo_data` is set

use chrono::NaiveTime;
use rust_decimal::Decimal;

use super::Repository;
use crate::models::{
    enums::{ServiceCategory, StaffRole},
    service::CreateService,
    staff::{CreateStaff, WorkingHours},
};

fn weekdays(start_hour: u32, end_hour: u32) -> Vec<WorkingHours> {
    (1..=5)
        .filter_map(|day| {
            Some(WorkingHours {
                day_of_week: day,
                start_time: NaiveTime::from_hms_opt(start_hour, 0, 0)?,
                end_time: NaiveTime::from_hms_opt(end_hour, 0, 0)?,
            })
        })
        .collect()
}

fn service(name: &str, description: &str, duration: u32, price: i64, category: ServiceCategory) -> CreateService {
    CreateService {
        name: name.to_string(),
        description: description.to_string(),
        duration,
        price: Decimal::new(price, 0),
        category,
        active: Some(true),
    }
}

impl Repository {
    /// Insert three services and two staff members
    pub async fn seed_demo(&self) {
        let haircut = self
            .services
            .create(&service(
                "Men's Haircut",
                "Classic men's haircut with styling",
                30,
                25,
                ServiceCategory::Haircuts,
            ))
            .await;
        let beard = self
            .services
            .create(&service(
                "Beard Trim",
                "Professional beard trimming and shaping",
                20,
                15,
                ServiceCategory::Grooming,
            ))
            .await;
        let color = self
            .services
            .create(&service("Hair Color", "Full hair coloring service", 90, 75, ServiceCategory::Color))
            .await;

        let john = CreateStaff {
            name: "John Smith".to_string(),
            email: "john.smith@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            role: StaffRole::Barber,
            service_ids: vec![haircut.id, beard.id],
            schedule: Vec::new(),
            active: Some(true),
            image_url: None,
        };
        self.staff.create(&john, weekdays(9, 17)).await;

        let sarah = CreateStaff {
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@example.com".to_string(),
            phone: "(555) 987-6543".to_string(),
            role: StaffRole::Stylist,
            service_ids: vec![haircut.id, color.id],
            schedule: Vec::new(),
            active: Some(true),
            image_url: None,
        };
        self.staff.create(&sarah, weekdays(10, 18)).await;

        tracing::info!("Seeded demo data: 3 services, 2 staff members");
    }
}
