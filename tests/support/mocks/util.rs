use casa_check_core::application::ports::util::SlugGenerator;

/// Passes text through untouched so tests can see exactly what the service
/// composes around the generator.
#[derive(Clone)]
pub struct EchoSlug;

impl SlugGenerator for EchoSlug {
    fn slugify(&self, s: &str) -> String {
        s.to_string()
    }
}
