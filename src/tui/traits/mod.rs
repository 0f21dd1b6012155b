//! Component trait system for TUI architecture
//!
//! Instead of App knowing how to scroll/copy/edit every surface,
//! components declare their own capabilities through traits.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │     (orchestrator: routes keys, owns the demo session)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │ Landing  │   │  Prompt  │   │  Result  │
//!        │   page   │   │  input   │   │  panel   │
//!        └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! - [`Scrollable`] - Components with scrollable content
//! - [`Copyable`] - Components that provide clipboard content
//! - [`Interactive`] - Components that handle keyboard input

mod copyable;
mod interactive;
mod scrollable;

pub use copyable::Copyable;
pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::Scrollable;
