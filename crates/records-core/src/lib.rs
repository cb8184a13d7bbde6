//! Domain core for the clinic record tools.
//!
//! Pure types and computations: the patient document model as stored in the
//! records collection, lenient encounter-date parsing, the monthly visit
//! aggregator, and the sample billing payload used to seed patients that
//! have no billing data yet.

pub mod dates;
pub mod models;
pub mod seed;
pub mod visits;
