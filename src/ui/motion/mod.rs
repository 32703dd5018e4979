//! Browser bindings for the animation layer in `core::motion`

pub mod ambient;
pub mod count_up;
#[cfg(not(feature = "ssr"))]
mod frame;
pub mod in_view;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod transition;
pub mod typewriter;

pub use ambient::{Floating, FloatingOrbs, MotionStyles, Pulse};
pub use count_up::CountUpNumber;
pub use in_view::use_in_view;
pub use pointer::{MagneticBox, Parallax};
pub use reveal::{FadeIn, ScaleIn, SlideIn, StaggerContainer, StaggerItem, TextReveal};
pub use scroll::{BackToTopButton, CircularProgress, ScrollProgress, use_scroll_metrics};
pub use transition::PageTransition;
pub use typewriter::TypewriterText;
