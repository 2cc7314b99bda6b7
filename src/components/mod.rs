//! Reusable view components shared by pages.

pub mod submission_row;
