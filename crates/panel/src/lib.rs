//! Control surface for the camera session.
//!
//! Translates discrete user commands into typed intents ([`intent`]) and
//! renders session/status snapshots as text frames ([`surface`]). No
//! business logic lives here: every state change goes through the session
//! controller, and rendering is a pure function of the snapshots.

pub mod intent;
pub mod surface;
