use super::dashboard_state::{DashboardState, TabChange};
use contracts::shared::navigation::MenuDefinition;
use contracts::shared::overlay::OverlayState;
use contracts::system::auth::Role;
use leptos::prelude::*;

/// Reactive wrapper over [`DashboardState`], provided once per mounted shell.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub state: RwSignal<DashboardState>,
    pub sidebar_open: RwSignal<bool>,
}

impl DashboardContext {
    pub fn new(role: Role) -> Self {
        Self {
            state: RwSignal::new(DashboardState::new(role)),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn role(&self) -> Role {
        self.state.with_untracked(|s| s.role())
    }

    pub fn menu(&self) -> MenuDefinition {
        self.state.with_untracked(|s| s.menu())
    }

    /// Tracked read of the active tab id.
    pub fn active_tab(&self) -> String {
        self.state.with(|s| s.active_tab().to_string())
    }

    pub fn on_tab_change(&self, id: &str) {
        // Same id: no write, so subscribers are not notified
        if self.state.with_untracked(|s| s.is_active(id)) {
            log::debug!("tab '{}' already active", id);
            return;
        }
        let change = self
            .state
            .try_update(|s| s.select_tab(id))
            .unwrap_or(TabChange::Unchanged);
        match change {
            TabChange::Switched { from, to } => log::info!("tab change: '{}' -> '{}'", from, to),
            TabChange::Unchanged => log::debug!("tab '{}' already active", id),
            TabChange::Rejected => {
                log::warn!("tab '{}' is not in the {} menu, ignored", id, self.role())
            }
        }
    }

    pub fn request_logout(&self) {
        if self.state.try_update(|s| s.request_logout()).unwrap_or(false) {
            log::debug!("overlay open: logout confirm");
        } else {
            log::debug!("logout request ignored: another overlay is open");
        }
    }

    pub fn claim_overlay(&self, region: &'static str) -> bool {
        let granted = self
            .state
            .try_update(|s| s.claim_for_region(region))
            .unwrap_or(false);
        if !granted {
            log::debug!("overlay for '{}' refused: slot is busy", region);
        }
        granted
    }

    /// Also runs from region cleanup, when the shell may already be gone.
    pub fn release_overlay(&self, region: &'static str) {
        let held = self
            .state
            .try_with_untracked(|s| s.region_overlay() == Some(region))
            .unwrap_or(false);
        if held {
            self.state.try_update(|s| s.release_region(region));
            log::debug!("overlay for '{}' closed", region);
        }
    }

    pub fn begin_logout(&self) -> bool {
        self.state.try_update(|s| s.begin_logout()).unwrap_or(false)
    }

    pub fn finish_logout(&self) {
        self.state.update(|s| s.finish_logout());
    }

    pub fn cancel_overlay(&self) {
        if !self.state.with_untracked(|s| s.is_logout_confirm_open()) {
            return;
        }
        if self.state.try_update(|s| s.cancel_overlay()).unwrap_or(false) {
            log::debug!("overlay closed");
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext not found")
}

/// Overlay slot of a content region.
///
/// Props stay local to the region; opening goes through the shell so that one
/// overlay at most is open across the whole dashboard.
pub struct RegionOverlay<P: Send + Sync + 'static> {
    state: RwSignal<OverlayState<P>>,
    shell: DashboardContext,
    region: &'static str,
}

impl<P: Send + Sync + 'static> Clone for RegionOverlay<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Send + Sync + 'static> Copy for RegionOverlay<P> {}

impl<P: Send + Sync + 'static> RegionOverlay<P> {
    /// Must be called inside a mounted `DashboardShell`. The slot is freed when
    /// the region unmounts.
    pub fn new(region: &'static str) -> Self {
        let shell = use_dashboard();
        on_cleanup(move || shell.release_overlay(region));
        Self {
            state: RwSignal::new(OverlayState::Closed),
            shell,
            region,
        }
    }

    /// Returns `false` (and shows nothing) while another overlay holds the slot.
    pub fn open(&self, props: P) -> bool {
        if !self.shell.claim_overlay(self.region) {
            return false;
        }
        self.state.update(|o| {
            o.open(props);
        });
        true
    }

    pub fn close(&self) -> Option<P> {
        let closed = self.state.try_update(|o| o.close()).flatten();
        self.shell.release_overlay(self.region);
        closed
    }

    /// Tracked read.
    pub fn with<R>(&self, f: impl FnOnce(&OverlayState<P>) -> R) -> R {
        self.state.with(f)
    }
}
