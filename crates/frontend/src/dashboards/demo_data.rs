//! Sample rows shown by the content regions until a data service feeds them.

use contracts::shared::stats::StatColor;
use contracts::system::auth::Role;
use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: u32,
    pub member: &'static str,
    pub class_name: &'static str,
    pub trainer: &'static str,
    pub starts_at: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub plan: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewStat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub color: StatColor,
    pub hint: Option<&'static str>,
}

const ALL_BOOKINGS: &[Booking] = &[
    Booking {
        id: 1,
        member: "Lucas Ferreira",
        class_name: "Strength Foundations",
        trainer: "Ana Ribeiro",
        starts_at: "07:00",
    },
    Booking {
        id: 2,
        member: "Emma Clarke",
        class_name: "1:1 Session",
        trainer: "Marcus Hale",
        starts_at: "09:30",
    },
    Booking {
        id: 3,
        member: "Noah Kim",
        class_name: "Mobility Flow",
        trainer: "Yuki Tanaka",
        starts_at: "12:00",
    },
    Booking {
        id: 4,
        member: "Olivia Santos",
        class_name: "1:1 Session",
        trainer: "Marcus Hale",
        starts_at: "17:30",
    },
    Booking {
        id: 5,
        member: "Jack Moreau",
        class_name: "Conditioning",
        trainer: "Marcus Hale",
        starts_at: "19:00",
    },
];

/// Name of the trainer whose schedule the trainer dashboard shows.
pub const DEMO_TRAINER: &str = "Marcus Hale";

pub fn demo_bookings(role: Role) -> Vec<Booking> {
    ALL_BOOKINGS
        .iter()
        .filter(|b| role == Role::Admin || b.trainer == DEMO_TRAINER)
        .cloned()
        .collect()
}

pub fn demo_customers(role: Role) -> Vec<Customer> {
    let rows: &[(&str, &str, &str, bool)] = match role {
        Role::Admin => &[
            ("Lucas Ferreira", "lucas@example.com", "standard", true),
            ("Emma Clarke", "emma@example.com", "premium", true),
            ("Noah Kim", "noah@example.com", "basic", false),
            ("Olivia Santos", "olivia@example.com", "premium", true),
        ],
        Role::PersonalTrainer => &[
            ("Emma Clarke", "emma@example.com", "premium", true),
            ("Olivia Santos", "olivia@example.com", "premium", true),
            ("Jack Moreau", "jack@example.com", "standard", true),
        ],
    };
    rows.iter()
        .zip(1..)
        .map(|(&(name, email, plan, active), id)| Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            plan: plan.to_string(),
            active,
        })
        .collect()
}

pub fn overview_stats(role: Role) -> Vec<OverviewStat> {
    match role {
        Role::Admin => vec![
            OverviewStat {
                label: "Active members",
                value: "912",
                icon: "users",
                color: StatColor::Blue,
                hint: Some("+24 this month"),
            },
            OverviewStat {
                label: "Bookings today",
                value: "48",
                icon: "calendar",
                color: StatColor::Green,
                hint: None,
            },
            OverviewStat {
                label: "Monthly revenue",
                value: "$58,420",
                icon: "credit-card",
                color: StatColor::Purple,
                hint: Some("+8% vs last month"),
            },
            OverviewStat {
                label: "Low-stock items",
                value: "3",
                icon: "package",
                color: StatColor::Orange,
                hint: None,
            },
        ],
        Role::PersonalTrainer => vec![
            OverviewStat {
                label: "Sessions today",
                value: "6",
                icon: "calendar",
                color: StatColor::Blue,
                hint: None,
            },
            OverviewStat {
                label: "Active clients",
                value: "18",
                icon: "users",
                color: StatColor::Green,
                hint: Some("2 new this week"),
            },
            OverviewStat {
                label: "Plans to review",
                value: "4",
                icon: "file-text",
                color: StatColor::Orange,
                hint: None,
            },
            OverviewStat {
                label: "Attendance",
                value: "92%",
                icon: "activity",
                color: StatColor::Purple,
                hint: None,
            },
        ],
    }
}

/// (percentage, title) for the overview progress ring.
pub fn overview_target(role: Role) -> (f64, &'static str) {
    match role {
        Role::Admin => (72.0, "Monthly sales target"),
        Role::PersonalTrainer => (25.0, "Weekly sessions goal"),
    }
}

/// Round-trip time of the in-memory customer store.
pub const STORE_DELAY_MS: u32 = 400;

/// Stand-in for the customer store. Hands the row back once "saved".
pub async fn store_customer(customer: Customer) -> Result<Customer, String> {
    TimeoutFuture::new(STORE_DELAY_MS).await;
    if customer.name.is_empty() {
        return Err("customer name is empty".to_string());
    }
    Ok(customer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_trainer_sees_own_bookings_only() {
        let bookings = demo_bookings(Role::PersonalTrainer);
        assert!(!bookings.is_empty());
        assert!(bookings.iter().all(|b| b.trainer == DEMO_TRAINER));
        assert_eq!(demo_bookings(Role::Admin).len(), ALL_BOOKINGS.len());
    }

    #[test]
    fn test_customer_ids_unique() {
        for role in Role::all() {
            let customers = demo_customers(role);
            let ids: HashSet<u32> = customers.iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), customers.len(), "duplicate id for {}", role);
        }
    }

    #[test]
    fn test_overview_has_four_stats() {
        for role in Role::all() {
            assert_eq!(overview_stats(role).len(), 4);
        }
    }
}
