pub mod enums;
pub mod filters;
pub mod profile;

pub use enums::{ExperienceTier, InvalidEnum, SocialPlatform};
pub use filters::FilterCriteria;
pub use profile::{AdditionalDetails, Profile, SocialLinks};
