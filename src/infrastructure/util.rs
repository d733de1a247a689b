use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::generate_slug;

/// Accent-folding, ASCII-only slugifier used for share links.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(input)
    }
}
