//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome and the list-page rows and cards.
//! The navigation bar reads the auth context; row and card renderers take
//! their data as props.

pub mod contact_card;
pub mod nav_bar;
pub mod stuff_item;
