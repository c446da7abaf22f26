pub mod job;
pub mod matching;
pub mod profile;

pub use job::{JobListing, JobSearchRequest, Platform};
pub use matching::{CoverLetter, MatchResult};
pub use profile::CandidateProfile;
