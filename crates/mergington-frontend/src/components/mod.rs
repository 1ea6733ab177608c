//! Reusable UI components for the activities page.

pub mod activity_card;
pub mod notice;
pub mod signup_form;

pub use activity_card::*;
pub use notice::*;
pub use signup_form::*;
