//! Astrologer v4 birth-chart provider (RapidAPI).

pub mod client;
pub mod payload;

pub use client::AstrologerClient;
pub use payload::{BirthChartRequest, SubjectPayload};
