//! Build-editing session.
//!
//! A [`BuildSession`] owns the one mutable thing in the planner: the current
//! [`planner_core::Build`] snapshot. Callers hand it actions through
//! [`BuildSession::dispatch`]; each accepted action replaces the snapshot with
//! the reducer's output. [`BuildSession::view`] derives the localized view
//! model a frontend renders.

mod error;
mod session;
mod view;

pub use error::SessionError;
pub use session::BuildSession;
pub use view::{
    AbilityView, BuildView, Choice, PerkView, SlotView, TalentView, TracingLocalizer,
};
