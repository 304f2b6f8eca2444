//! Состояние оболочки дашборда: единственный источник правды для активного
//! таба и единственного открытого оверлея.
//!
//! Обычная структура без сигналов: все переходы проверяются тестами на хосте.
//! `DashboardContext` оборачивает её в один `RwSignal`.

use contracts::shared::navigation::MenuDefinition;
use contracts::shared::overlay::OverlayState;
use contracts::system::auth::Role;

/// Holder of the dashboard's single overlay slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOverlay {
    /// Logout confirmation, owned by the shell
    LogoutConfirm,
    /// A content region shows its own modal or confirm dialog
    Region(&'static str),
}

/// Outcome of `select_tab`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabChange {
    Switched { from: String, to: String },
    /// Requested id was already active
    Unchanged,
    /// Requested id is not part of the role's menu
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    role: Role,
    menu: MenuDefinition,
    active_tab: String,
    overlay: OverlayState<ShellOverlay>,
    logout_pending: bool,
}

impl DashboardState {
    pub fn new(role: Role) -> Self {
        let menu = MenuDefinition::for_role(role);
        Self {
            role,
            menu,
            active_tab: menu.default_tab().to_string(),
            overlay: OverlayState::Closed,
            logout_pending: false,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn menu(&self) -> MenuDefinition {
        self.menu
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_tab == id
    }

    pub fn overlay(&self) -> &OverlayState<ShellOverlay> {
        &self.overlay
    }

    pub fn logout_pending(&self) -> bool {
        self.logout_pending
    }

    /// The only way `active_tab` changes.
    pub fn select_tab(&mut self, id: &str) -> TabChange {
        if self.active_tab == id {
            return TabChange::Unchanged;
        }
        if !self.menu.contains(id) {
            return TabChange::Rejected;
        }
        let from = std::mem::replace(&mut self.active_tab, id.to_string());
        TabChange::Switched {
            from,
            to: id.to_string(),
        }
    }

    /// Sidebar logout intent: ask for confirmation first. Ignored while any
    /// overlay is open or a logout is already running.
    pub fn request_logout(&mut self) -> bool {
        if self.logout_pending || self.overlay.is_open() {
            return false;
        }
        self.overlay.open(ShellOverlay::LogoutConfirm);
        true
    }

    /// Region `region` wants to show an overlay. Granted when the slot is free
    /// or already held by the same region.
    pub fn claim_for_region(&mut self, region: &'static str) -> bool {
        match self.overlay.props() {
            None => {
                self.overlay.open(ShellOverlay::Region(region));
                true
            }
            Some(ShellOverlay::Region(holder)) => *holder == region,
            Some(ShellOverlay::LogoutConfirm) => false,
        }
    }

    /// Frees the slot if `region` holds it.
    pub fn release_region(&mut self, region: &'static str) -> bool {
        if self.region_overlay() != Some(region) {
            return false;
        }
        self.overlay.close();
        true
    }

    pub fn region_overlay(&self) -> Option<&'static str> {
        match self.overlay.props() {
            Some(ShellOverlay::Region(region)) => Some(*region),
            _ => None,
        }
    }

    pub fn is_logout_confirm_open(&self) -> bool {
        self.overlay.props() == Some(&ShellOverlay::LogoutConfirm)
    }

    /// Confirm pressed. Returns `true` when the caller should run the logout
    /// action; a second press while it is pending returns `false`.
    pub fn begin_logout(&mut self) -> bool {
        if !self.is_logout_confirm_open() || self.logout_pending {
            return false;
        }
        self.logout_pending = true;
        true
    }

    /// Logout action finished (either way): close the dialog.
    pub fn finish_logout(&mut self) {
        self.logout_pending = false;
        if self.is_logout_confirm_open() {
            self.overlay.close();
        }
    }

    /// Cancel, backdrop or Escape on the logout dialog. Ignored while logout
    /// is pending; region overlays are closed by their region.
    pub fn cancel_overlay(&mut self) -> bool {
        if self.logout_pending || !self.is_logout_confirm_open() {
            return false;
        }
        self.overlay.close().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_menu_item() {
        assert_eq!(DashboardState::new(Role::Admin).active_tab(), "dashboard");
        let pt = DashboardState::new(Role::PersonalTrainer);
        assert_eq!(pt.active_tab(), pt.menu().items[0].id);
        assert!(!pt.overlay().is_open());
    }

    #[test]
    fn test_select_tab_switches() {
        let mut state = DashboardState::new(Role::Admin);
        assert_eq!(
            state.select_tab("bookings"),
            TabChange::Switched {
                from: "dashboard".into(),
                to: "bookings".into()
            }
        );
        assert!(state.is_active("bookings"));
        assert!(!state.is_active("dashboard"));
    }

    #[test]
    fn test_select_same_tab_is_idempotent() {
        let mut state = DashboardState::new(Role::Admin);
        state.select_tab("customers");
        let before = state.clone();
        assert_eq!(state.select_tab("customers"), TabChange::Unchanged);
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_tab_rejected() {
        let mut state = DashboardState::new(Role::PersonalTrainer);
        assert_eq!(state.select_tab("payments"), TabChange::Rejected);
        assert_eq!(state.active_tab(), "dashboard");
    }

    #[test]
    fn test_logout_cancel_has_no_side_effect() {
        let mut state = DashboardState::new(Role::Admin);
        state.select_tab("inventory");
        assert!(state.request_logout());
        assert!(state.is_logout_confirm_open());

        assert!(state.cancel_overlay());
        assert!(!state.overlay().is_open());
        assert!(!state.logout_pending());
        assert_eq!(state.active_tab(), "inventory");
    }

    #[test]
    fn test_logout_confirm_gates_reentry() {
        let mut state = DashboardState::new(Role::PersonalTrainer);
        state.request_logout();

        assert!(state.begin_logout());
        assert!(!state.begin_logout());
        assert!(!state.cancel_overlay());
        assert!(state.is_logout_confirm_open());

        state.finish_logout();
        assert!(!state.overlay().is_open());
        assert!(!state.logout_pending());
    }

    #[test]
    fn test_begin_logout_requires_open_dialog() {
        let mut state = DashboardState::new(Role::Admin);
        assert!(!state.begin_logout());
        assert!(!state.logout_pending());
    }

    #[test]
    fn test_logout_ignored_while_region_overlay_open() {
        let mut state = DashboardState::new(Role::Admin);
        state.select_tab("customers");
        assert!(state.claim_for_region("customers"));

        assert!(!state.request_logout());
        assert!(!state.is_logout_confirm_open());
        assert_eq!(state.region_overlay(), Some("customers"));
        // Escape on the region modal must not be taken for the logout dialog
        assert!(!state.cancel_overlay());
        assert_eq!(state.region_overlay(), Some("customers"));

        assert!(state.release_region("customers"));
        assert!(state.request_logout());
        assert!(state.is_logout_confirm_open());
    }

    #[test]
    fn test_region_cannot_open_over_logout_confirm() {
        let mut state = DashboardState::new(Role::PersonalTrainer);
        state.request_logout();

        assert!(!state.claim_for_region("clients"));
        assert!(state.is_logout_confirm_open());
        assert!(!state.release_region("clients"));
        assert!(state.is_logout_confirm_open());
    }

    #[test]
    fn test_region_slot_is_exclusive() {
        let mut state = DashboardState::new(Role::Admin);
        assert!(state.claim_for_region("bookings"));
        // same region may swap its own overlay
        assert!(state.claim_for_region("bookings"));
        assert!(!state.claim_for_region("customers"));
        assert!(!state.release_region("customers"));
        assert_eq!(state.region_overlay(), Some("bookings"));

        assert!(state.release_region("bookings"));
        assert!(!state.overlay().is_open());
    }
}
