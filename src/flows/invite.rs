//! Invite resolution flow: opaque token → program preview → join.
//!
//! State machine:
//! `Resolving → {ProgramReady | InvalidInvite} → Joining → {Joined | ProgramReady+join_error}`.
//! A resolution error only exists while no program is held; a join error
//! lives alongside the still-valid program so the user can retry without
//! re-resolving.

use crate::constants::{MSG_INVALID_INVITE, MSG_JOIN_FAILED, MSG_NO_INVITE_TOKEN};
use crate::error::MarketError;
use crate::gateway::{MarketplaceGateway, MarketplaceHost, ProgramCache};
use crate::program::{CustomProgramRecord, ProgramSummary};

#[derive(Debug, Clone)]
pub enum InviteState {
    /// Token handed over, gateway call not yet settled.
    Resolving,
    /// Terminal for this token. No program is retained.
    InvalidInvite { message: String },
    /// Program preview shown; `join_error` set after a failed join.
    ProgramReady {
        program: ProgramSummary,
        join_error: Option<String>,
    },
    /// Subscribe call in flight; re-entry is a no-op.
    Joining { program: ProgramSummary },
    Joined { program: ProgramSummary },
}

impl InviteState {
    pub fn program(&self) -> Option<&ProgramSummary> {
        match self {
            Self::ProgramReady { program, .. }
            | Self::Joining { program }
            | Self::Joined { program } => Some(program),
            _ => None,
        }
    }
}

pub struct InviteFlow<'a> {
    gateway: &'a dyn MarketplaceGateway,
    cache: Option<&'a dyn ProgramCache>,
    state: InviteState,
}

impl<'a> InviteFlow<'a> {
    pub fn new(gateway: &'a dyn MarketplaceGateway, cache: Option<&'a dyn ProgramCache>) -> Self {
        Self {
            gateway,
            cache,
            state: InviteState::Resolving,
        }
    }

    pub fn state(&self) -> &InviteState {
        &self.state
    }

    /// Resolve an invite token into a program preview. A blank token
    /// never reaches the gateway.
    pub fn resolve(&mut self, token: &str) {
        if token.trim().is_empty() {
            self.state = InviteState::InvalidInvite {
                message: MSG_NO_INVITE_TOKEN.to_string(),
            };
            return;
        }
        self.state = InviteState::Resolving;
        match self.gateway.resolve_invite(token) {
            Ok(Some(program)) => {
                self.state = InviteState::ProgramReady {
                    program,
                    join_error: None,
                };
            }
            Ok(None) => {
                self.state = InviteState::InvalidInvite {
                    message: MSG_INVALID_INVITE.to_string(),
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invite resolution failed");
                self.state = InviteState::InvalidInvite {
                    message: surface_message(&e, MSG_INVALID_INVITE),
                };
            }
        }
    }

    /// Join the resolved program. Only acts from `ProgramReady`; every
    /// other state (including an in-flight `Joining`) is a no-op, so the
    /// gateway sees at most one subscribe per click sequence.
    pub fn join(&mut self, host: &mut dyn MarketplaceHost) {
        let program = match &self.state {
            InviteState::ProgramReady { program, .. } => program.clone(),
            _ => return,
        };
        self.state = InviteState::Joining {
            program: program.clone(),
        };
        match self.gateway.subscribe(program.id) {
            Ok(()) => {
                self.save_local_copy(&program);
                self.state = InviteState::Joined {
                    program: program.clone(),
                };
                host.on_joined(&program);
            }
            Err(e) => {
                tracing::warn!(program_id = program.id, error = %e, "Join failed");
                self.state = InviteState::ProgramReady {
                    program,
                    join_error: Some(surface_message(&e, MSG_JOIN_FAILED)),
                };
            }
        }
    }

    /// Best-effort idempotent cache of the program content. Failures are
    /// logged and never fail the join itself.
    fn save_local_copy(&self, program: &ProgramSummary) {
        let Some(cache) = self.cache else { return };
        let Some(record) = CustomProgramRecord::from_summary(program) else {
            return;
        };
        if let Err(e) = cache.save_custom_program(&record) {
            tracing::warn!(program_id = program.id, error = %e, "Local program copy failed");
        }
    }
}

/// User-visible message for a gateway failure: the error's own message,
/// or the fixed fallback when there is nothing useful to show.
fn surface_message(err: &MarketError, fallback: &str) -> String {
    let msg = err.to_string();
    if msg.trim().is_empty() {
        fallback.to_string()
    } else {
        msg
    }
}
