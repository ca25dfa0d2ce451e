//! State controllers for panel-based UI features.
//!
//! Every panel feature on the page (hero carousel, about tabs, application
//! form progress) is the same shape: an ordered set of panels, a parallel set
//! of indicator controls, and a single current selection. These controllers
//! own that selection and the active flags for both collections; rendering
//! reads the flags, and input handlers go through the controller methods so
//! the single-active invariant holds under any event interleaving.

pub mod indexed;
pub mod keyed;
pub mod timer;

pub use indexed::PanelController;
pub use keyed::KeyedPanelController;
pub use timer::{AutoAdvance, TimerState};
