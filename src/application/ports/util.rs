/// Turns free text into the base part of a slug.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
