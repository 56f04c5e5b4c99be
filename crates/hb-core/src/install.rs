//! Install-state machine.
//!
//! Defines a pure state transition function over the app's install
//! lifecycle. The tracker service in the application layer owns the
//! process-wide state and executes the produced actions; the dismissed
//! flag is the only durable part.

use serde::{Deserialize, Serialize};

/// Install lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallPhase {
    /// No install capability has been signalled.
    NotAvailable,
    /// The platform reports the app can be installed.
    Installable,
    /// The user accepted the prompt; waiting on platform confirmation.
    Installing,
    /// The app is installed (or was launched already installed).
    Installed,
}

/// Process-wide install state: the current phase plus the sticky
/// prompt-surface dismissal flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallState {
    pub phase: InstallPhase,
    pub dismissed: bool,
}

impl InstallState {
    pub fn new(dismissed: bool) -> Self {
        Self {
            phase: InstallPhase::NotAvailable,
            dismissed,
        }
    }
}

impl Default for InstallState {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Events that drive the install flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallEvent {
    /// Platform signalled install capability.
    CapabilityDetected,
    /// Platform reports the app already running in installed mode.
    LaunchedInstalled,
    /// User accepted the install prompt.
    PromptAccepted,
    /// User declined the platform's native prompt.
    PromptDeclined,
    /// Platform confirmed the install completed.
    PlatformConfirmed,
    /// User dismissed the prompt surface (distinct from declining).
    SurfaceDismissed,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallAction {
    /// Show the in-app install prompt surface.
    ShowPromptSurface,
    /// Hide the in-app install prompt surface.
    HidePromptSurface,
    /// Invoke the platform's native install dialog.
    RequestNativeInstall,
    /// Persist the sticky dismissed flag.
    PersistDismissed,
}

/// Pure install state machine.
pub struct InstallStateMachine;

impl InstallStateMachine {
    pub fn transition(
        state: InstallState,
        event: InstallEvent,
    ) -> (InstallState, Vec<InstallAction>) {
        match (state.phase, event) {
            (InstallPhase::NotAvailable, InstallEvent::CapabilityDetected) => {
                let next = InstallState {
                    phase: InstallPhase::Installable,
                    ..state
                };
                // The sticky flag suppresses the surface, not the phase.
                let actions = if state.dismissed {
                    Vec::new()
                } else {
                    vec![InstallAction::ShowPromptSurface]
                };
                (next, actions)
            }
            (InstallPhase::NotAvailable, InstallEvent::LaunchedInstalled) => (
                InstallState {
                    phase: InstallPhase::Installed,
                    ..state
                },
                Vec::new(),
            ),
            (InstallPhase::Installable, InstallEvent::PromptAccepted) => (
                InstallState {
                    phase: InstallPhase::Installing,
                    ..state
                },
                vec![
                    InstallAction::HidePromptSurface,
                    InstallAction::RequestNativeInstall,
                ],
            ),
            (InstallPhase::Installing, InstallEvent::PlatformConfirmed) => (
                InstallState {
                    phase: InstallPhase::Installed,
                    ..state
                },
                Vec::new(),
            ),
            (InstallPhase::Installing, InstallEvent::PromptDeclined) => (
                InstallState {
                    phase: InstallPhase::Installable,
                    ..state
                },
                Vec::new(),
            ),
            (_, InstallEvent::SurfaceDismissed) => {
                let actions = if state.dismissed {
                    vec![InstallAction::HidePromptSurface]
                } else {
                    vec![
                        InstallAction::HidePromptSurface,
                        InstallAction::PersistDismissed,
                    ]
                };
                (
                    InstallState {
                        dismissed: true,
                        ..state
                    },
                    actions,
                )
            }
            (_, _) => (state, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_signal_moves_to_installable_and_shows_surface() {
        let (next, actions) =
            InstallStateMachine::transition(InstallState::default(), InstallEvent::CapabilityDetected);
        assert_eq!(next.phase, InstallPhase::Installable);
        assert_eq!(actions, vec![InstallAction::ShowPromptSurface]);
    }

    #[test]
    fn dismissed_flag_suppresses_surface_but_not_phase() {
        let (next, actions) =
            InstallStateMachine::transition(InstallState::new(true), InstallEvent::CapabilityDetected);
        assert_eq!(next.phase, InstallPhase::Installable);
        assert!(actions.is_empty());
    }

    #[test]
    fn accept_then_confirm_reaches_installed() {
        let (state, actions) = InstallStateMachine::transition(
            InstallState {
                phase: InstallPhase::Installable,
                dismissed: false,
            },
            InstallEvent::PromptAccepted,
        );
        assert_eq!(state.phase, InstallPhase::Installing);
        assert!(actions.contains(&InstallAction::RequestNativeInstall));

        let (state, _) = InstallStateMachine::transition(state, InstallEvent::PlatformConfirmed);
        assert_eq!(state.phase, InstallPhase::Installed);
    }

    #[test]
    fn decline_returns_to_installable() {
        let (state, _) = InstallStateMachine::transition(
            InstallState {
                phase: InstallPhase::Installing,
                dismissed: false,
            },
            InstallEvent::PromptDeclined,
        );
        assert_eq!(state.phase, InstallPhase::Installable);
    }

    #[test]
    fn dismissal_sets_sticky_flag_without_changing_phase() {
        let (state, actions) = InstallStateMachine::transition(
            InstallState {
                phase: InstallPhase::Installable,
                dismissed: false,
            },
            InstallEvent::SurfaceDismissed,
        );
        assert_eq!(state.phase, InstallPhase::Installable);
        assert!(state.dismissed);
        assert!(actions.contains(&InstallAction::PersistDismissed));
    }

    #[test]
    fn launched_installed_bypasses_installable() {
        let (state, _) =
            InstallStateMachine::transition(InstallState::default(), InstallEvent::LaunchedInstalled);
        assert_eq!(state.phase, InstallPhase::Installed);
    }

    #[test]
    fn unrelated_events_leave_state_untouched() {
        let start = InstallState::default();
        let (state, actions) =
            InstallStateMachine::transition(start, InstallEvent::PlatformConfirmed);
        assert_eq!(state, start);
        assert!(actions.is_empty());
    }
}
