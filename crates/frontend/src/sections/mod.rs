pub mod bulk_portal;
pub mod certifications;
pub mod culinary;
pub mod farm_story;

pub use bulk_portal::BulkPortal;
pub use certifications::CertificationsStrip;
pub use culinary::CulinarySection;
pub use farm_story::FarmStory;
