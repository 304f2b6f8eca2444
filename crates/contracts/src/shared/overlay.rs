//! Overlay (modal / confirm dialog) state shared by the dashboard shell and
//! content regions.
//!
//! One owner holds one [`OverlayState`]; opening while something is already
//! open replaces it, so two overlays are never visible together.

// ---------------------------------------------------------------------------
// Open/closed state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayState<P> {
    Closed,
    Open(P),
}

impl<P> Default for OverlayState<P> {
    fn default() -> Self {
        OverlayState::Closed
    }
}

impl<P> OverlayState<P> {
    /// Opens `props`, returning whatever overlay it replaced.
    pub fn open(&mut self, props: P) -> Option<P> {
        match std::mem::replace(self, OverlayState::Open(props)) {
            OverlayState::Open(previous) => Some(previous),
            OverlayState::Closed => None,
        }
    }

    /// Closes the overlay and hands back its props. Closing twice is a no-op.
    pub fn close(&mut self) -> Option<P> {
        match std::mem::take(self) {
            OverlayState::Open(props) => Some(props),
            OverlayState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open(_))
    }

    pub fn props(&self) -> Option<&P> {
        match self {
            OverlayState::Open(props) => Some(props),
            OverlayState::Closed => None,
        }
    }

    pub fn props_mut(&mut self) -> Option<&mut P> {
        match self {
            OverlayState::Open(props) => Some(props),
            OverlayState::Closed => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Presentation options
// ---------------------------------------------------------------------------

/// Width of a modal body. Layout only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ModalSize {
    pub fn class(&self) -> &'static str {
        match self {
            ModalSize::Sm => "modal--sm",
            ModalSize::Md => "modal--md",
            ModalSize::Lg => "modal--lg",
        }
    }
}

/// Confirm dialog flavour: selects icon and confirm-button style, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmVariant {
    #[default]
    Danger,
    Warning,
    Info,
}

impl ConfirmVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ConfirmVariant::Danger => "alert-triangle",
            ConfirmVariant::Warning => "alert-circle",
            ConfirmVariant::Info => "info",
        }
    }

    pub fn confirm_button_variant(&self) -> &'static str {
        match self {
            ConfirmVariant::Danger => "danger",
            ConfirmVariant::Warning => "warning",
            ConfirmVariant::Info => "primary",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ConfirmVariant::Danger => "confirm-modal--danger",
            ConfirmVariant::Warning => "confirm-modal--warning",
            ConfirmVariant::Info => "confirm-modal--info",
        }
    }
}

// ---------------------------------------------------------------------------
// Dismissal rules
// ---------------------------------------------------------------------------

/// Where a pointer press and the following click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackdropPointer {
    /// mousedown target was the backdrop element itself
    pub pressed_on_backdrop: bool,
    /// click target was the backdrop element itself
    pub clicked_on_backdrop: bool,
}

/// Whether the overlay may emit `on_close`/`on_confirm` right now.
///
/// A pending confirm action locks every exit: buttons, backdrop and Escape.
pub fn actions_enabled(is_loading: bool) -> bool {
    !is_loading
}

/// A backdrop click closes the overlay only when both press and release hit
/// the backdrop (not the body) and nothing is pending.
pub fn backdrop_dismisses(pointer: BackdropPointer, is_loading: bool) -> bool {
    actions_enabled(is_loading) && pointer.pressed_on_backdrop && pointer.clicked_on_backdrop
}

/// What the user did on a confirm dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Cancel button
    Cancel,
    /// Confirm button
    Confirm,
    /// Backdrop click or Escape
    Dismiss,
}

/// Caller callback a confirm dialog action ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmCallback {
    Close,
    Confirm,
}

/// Routes a confirm dialog action to the caller. `None` while loading.
pub fn route_confirm_action(action: ConfirmAction, is_loading: bool) -> Option<ConfirmCallback> {
    if !actions_enabled(is_loading) {
        return None;
    }
    Some(match action {
        ConfirmAction::Cancel | ConfirmAction::Dismiss => ConfirmCallback::Close,
        ConfirmAction::Confirm => ConfirmCallback::Confirm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Draft {
        name: String,
    }

    #[test]
    fn test_open_close_roundtrip() {
        let mut state: OverlayState<Draft> = OverlayState::default();
        let initial = state.clone();

        state.open(Draft {
            name: "typed".into(),
        });
        assert!(state.is_open());
        if let Some(draft) = state.props_mut() {
            draft.name.push_str(" more");
        }

        let closed = state.close();
        assert_eq!(closed.map(|d| d.name), Some("typed more".to_string()));
        assert_eq!(state, initial);
        assert!(state.props().is_none());
    }

    #[test]
    fn test_open_replaces_previous() {
        let mut state = OverlayState::Closed;
        assert_eq!(state.open("first"), None);
        assert_eq!(state.open("second"), Some("first"));
        assert_eq!(state.props(), Some(&"second"));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut state: OverlayState<u8> = OverlayState::Closed;
        assert_eq!(state.close(), None);
        assert!(!state.is_open());
    }

    #[test]
    fn test_click_inside_body_never_dismisses() {
        let inside = BackdropPointer {
            pressed_on_backdrop: false,
            clicked_on_backdrop: false,
        };
        assert!(!backdrop_dismisses(inside, false));

        let drag_out = BackdropPointer {
            pressed_on_backdrop: false,
            clicked_on_backdrop: true,
        };
        assert!(!backdrop_dismisses(drag_out, false));
    }

    #[test]
    fn test_backdrop_click_dismisses_unless_loading() {
        let outside = BackdropPointer {
            pressed_on_backdrop: true,
            clicked_on_backdrop: true,
        };
        assert!(backdrop_dismisses(outside, false));
        assert!(!backdrop_dismisses(outside, true));
        assert!(!actions_enabled(true));
    }

    #[test]
    fn test_confirm_actions_silent_while_loading() {
        for action in [
            ConfirmAction::Cancel,
            ConfirmAction::Confirm,
            ConfirmAction::Dismiss,
        ] {
            assert_eq!(route_confirm_action(action, true), None, "{:?}", action);
        }
    }

    #[test]
    fn test_confirm_actions_routing() {
        assert_eq!(
            route_confirm_action(ConfirmAction::Cancel, false),
            Some(ConfirmCallback::Close)
        );
        assert_eq!(
            route_confirm_action(ConfirmAction::Dismiss, false),
            Some(ConfirmCallback::Close)
        );
        assert_eq!(
            route_confirm_action(ConfirmAction::Confirm, false),
            Some(ConfirmCallback::Confirm)
        );
    }

    #[test]
    fn test_variant_styling() {
        assert_eq!(ConfirmVariant::default(), ConfirmVariant::Danger);
        assert_eq!(ConfirmVariant::Danger.confirm_button_variant(), "danger");
        assert_eq!(ConfirmVariant::Info.icon(), "info");
        assert_eq!(ModalSize::default().class(), "modal--md");
    }
}
