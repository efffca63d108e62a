pub mod input;
pub mod model;
pub mod normalize;
pub mod sample;
pub mod text;

pub use input::TemplateInput;
pub use model::{EducationEntry, ExperienceEntry, ProjectEntry, SiteConfig, SocialLinks};
pub use normalize::{DEFAULT_ACCENT, build_site_config};
pub use sample::sample;
