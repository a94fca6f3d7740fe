mod capability_matcher;

pub use capability_matcher::CapabilityMatcher;
