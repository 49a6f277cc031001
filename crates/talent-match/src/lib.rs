//! Candidate-to-job-opportunity matching engine.
//!
//! The crate scores a [`CandidateProfile`](matching::CandidateProfile) against a
//! [`JobRequirement`](matching::JobRequirement) and ranks candidate pools for a single job.
//! Scoring is pure: callers assemble the inputs, own the results, and decide what to persist.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;

pub use matching::{compute_match, rank_matches, MatchEngine, MatchResult, RankedMatch};
