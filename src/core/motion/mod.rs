//! Scroll-reactive animation layer
//!
//! Pure state and math behind the animated UI:
//! - Visibility latching for reveal animations
//! - Entrance primitives (fade, slide, scale, stagger, word reveal)
//! - Typewriter and count-up sequencers
//! - Magnetic hover and parallax offsets
//! - Scroll progress derivations
//! - Background orb placement
//! - The page transition state machine
//!
//! Nothing here touches the DOM. The `ui::motion` components feed these
//! types with browser signals and timestamps.

pub mod count_up;
pub mod easing;
pub mod entrance;
pub mod orbs;
pub mod pointer;
pub mod scroll;
pub mod transition;
pub mod typewriter;
pub mod visibility;

pub use count_up::CountUp;
pub use easing::Easing;
pub use entrance::{Direction, EntranceSpec, MotionStyle, Reveal, StaggerGroup};
pub use orbs::{Orb, orb_layout};
pub use pointer::{Magnetic, PointerOffset, Rect, parallax_from_rect, parallax_offset};
pub use scroll::{BackToTop, ProgressRing, ScrollMetrics, scroll_fraction};
pub use transition::{PageTransitionController, PhaseTimer, TransitionPhase, TransitionVariant};
pub use typewriter::Typewriter;
pub use visibility::{VisibilityOptions, VisibilityState};

/// Default intersection threshold for reveals
pub const DEFAULT_THRESHOLD: f64 = 0.1;

pub const FADE_DURATION: f64 = 0.6;
pub const FADE_DISTANCE: f64 = 30.0;
/// Root margin (px) used by fade, scale and stagger reveals
pub const FADE_MARGIN_PX: i32 = -50;

pub const SLIDE_DURATION: f64 = 0.7;
pub const SLIDE_DISTANCE: f64 = 100.0;
pub const SLIDE_MARGIN_PX: i32 = -100;

pub const SCALE_DURATION: f64 = 0.5;
pub const SCALE_FROM: f64 = 0.8;

pub const STAGGER_INCREMENT: f64 = 0.1;
pub const STAGGER_ITEM_DURATION: f64 = 0.5;

pub const WORD_REVEAL_STEP: f64 = 0.1;

pub const TYPEWRITER_INTERVAL_MS: f64 = 50.0;
pub const COUNT_UP_DURATION_MS: f64 = 2000.0;

pub const MAGNETIC_STRENGTH: f64 = 0.3;
pub const MAGNETIC_RADIUS: f64 = 150.0;

pub const PARALLAX_SPEED: f64 = 0.5;
/// Scale applied on top of the parallax speed factor
pub const PARALLAX_FACTOR: f64 = 0.1;

/// Scroll offset (px) after which the back-to-top button appears
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;
