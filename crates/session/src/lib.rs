//! Session state model for the camera control panel.
//!
//! [`CameraSession`](session::CameraSession) is the single source of truth
//! for the live shooting parameters and the recording timer. The pure state
//! machine lives in [`session`]; [`timer`] wraps it with the 1 Hz cancellable
//! tick task and the async [`SessionController`](timer::SessionController)
//! the control surface talks to.

pub mod session;
pub mod timer;

pub use session::{CameraSession, SessionSnapshot};
pub use timer::{RecordingTimer, SessionController, SharedSession};
