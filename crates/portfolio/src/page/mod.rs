//! Page behavior state
//!
//! UI-independent state machines behind the portfolio page: theme,
//! navigation menus, headline typing, stat counters, skill tabs, project
//! showcase and testimonial carousel. Front ends render them; nothing here
//! touches a DOM or a clock.

mod carousel;
mod counter;
mod nav;
mod projects;
mod tabs;
mod theme;
mod typing;

pub use carousel::{AUTOPLAY_INTERVAL, Carousel};
pub use counter::{COUNTER_DURATION, COUNTER_STEPS, CounterAnimation};
pub use nav::{
    MenuToggle, NAVBAR_OFFSET, NAVBAR_SCROLL_THRESHOLD, anchor_scroll_target, navbar_opacity,
};
pub use projects::{FILTER_ALL, Project, ProjectCatalog, ProjectModal};
pub use tabs::TabSet;
pub use theme::{Theme, load_theme, load_theme_from, save_theme, save_theme_to, toggle_theme_at};
pub use typing::{TypingAnimation, TypingFrame};
