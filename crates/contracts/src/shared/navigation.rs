//! Role-scoped navigation menus.
//!
//! Each [`Role`] maps to exactly one static [`MenuDefinition`]. Item ids are
//! routing keys: they select the content region and drive active-state
//! highlighting, so they must stay unique within a definition.

use crate::system::auth::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    /// Symbolic icon name resolved by the UI icon set
    pub icon: &'static str,
}

impl MenuItem {
    const fn new(id: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self { id, label, icon }
    }
}

const ADMIN_MENU: &[MenuItem] = &[
    MenuItem::new("dashboard", "Dashboard", "layout-dashboard"),
    MenuItem::new("bookings", "Bookings", "calendar"),
    MenuItem::new("customers", "Customers", "users"),
    MenuItem::new("trainers", "Trainers", "dumbbell"),
    MenuItem::new("contracts", "Contracts", "file-text"),
    MenuItem::new("payments", "Payments", "credit-card"),
    MenuItem::new("inventory", "Inventory", "package"),
    MenuItem::new("settings", "Settings", "settings"),
];

const PERSONAL_TRAINER_MENU: &[MenuItem] = &[
    MenuItem::new("dashboard", "Dashboard", "layout-dashboard"),
    MenuItem::new("schedule", "My Schedule", "calendar"),
    MenuItem::new("clients", "My Clients", "users"),
    MenuItem::new("workouts", "Workout Plans", "dumbbell"),
    MenuItem::new("progress", "Progress", "activity"),
    MenuItem::new("profile", "Profile", "user"),
];

/// Ordered menu for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuDefinition {
    pub role: Role,
    pub items: &'static [MenuItem],
}

impl MenuDefinition {
    /// Menu lookup by role.
    pub fn for_role(role: Role) -> Self {
        let items = match role {
            Role::Admin => ADMIN_MENU,
            Role::PersonalTrainer => PERSONAL_TRAINER_MENU,
        };
        Self { role, items }
    }

    /// Tab selected when the shell mounts: the first item.
    pub fn default_tab(&self) -> &'static str {
        self.items.first().map(|item| item.id).unwrap_or_default()
    }

    pub fn find(&self, id: &str) -> Option<&'static MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Label for a tab id, falling back to the id itself.
    pub fn label_for<'a>(&self, id: &'a str) -> &'a str {
        match self.find(id) {
            Some(item) => item.label,
            None => id,
        }
    }

    /// Items in definition order paired with their active flag.
    ///
    /// At most one entry is marked. An `active_tab` that matches no id marks nothing.
    pub fn marked(&self, active_tab: &str) -> Vec<(MenuItem, bool)> {
        self.items
            .iter()
            .map(|item| (*item, item.id == active_tab))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_per_role() {
        for role in Role::all() {
            let menu = MenuDefinition::for_role(role);
            let ids: HashSet<_> = menu.items.iter().map(|i| i.id).collect();
            assert_eq!(ids.len(), menu.items.len(), "duplicate id in {role} menu");
            assert!(!menu.items.is_empty());
        }
    }

    #[test]
    fn test_default_tab_is_first_item() {
        for role in Role::all() {
            let menu = MenuDefinition::for_role(role);
            assert_eq!(menu.default_tab(), menu.items[0].id);
        }
    }

    #[test]
    fn test_menu_resolution_is_deterministic() {
        let a = MenuDefinition::for_role(Role::PersonalTrainer);
        let b = MenuDefinition::for_role(Role::PersonalTrainer);
        assert_eq!(a, b);
        assert_ne!(a.items, MenuDefinition::for_role(Role::Admin).items);
    }

    #[test]
    fn test_admin_bookings_marked() {
        let marked = MenuDefinition::for_role(Role::Admin).marked("bookings");
        let labels: Vec<_> = marked.iter().map(|(item, _)| item.label).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Bookings",
                "Customers",
                "Trainers",
                "Contracts",
                "Payments",
                "Inventory",
                "Settings"
            ]
        );
        let active: Vec<_> = marked
            .iter()
            .filter(|(_, is_active)| *is_active)
            .map(|(item, _)| item.label)
            .collect();
        assert_eq!(active, vec!["Bookings"]);
    }

    #[test]
    fn test_unmatched_active_tab_marks_nothing() {
        for role in Role::all() {
            let marked = MenuDefinition::for_role(role).marked("reports-archive");
            assert!(marked.iter().all(|(_, is_active)| !is_active));
        }
    }

    #[test]
    fn test_trainer_menu_has_no_admin_only_items() {
        let menu = MenuDefinition::for_role(Role::PersonalTrainer);
        assert!(!menu.contains("payments"));
        assert!(!menu.contains("settings"));
        assert_eq!(menu.label_for("clients"), "My Clients");
        assert_eq!(menu.label_for("payments"), "payments");
    }
}
