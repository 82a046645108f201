/// Converts stored post source into display markup.
pub trait ContentRenderer: Send + Sync {
    fn render(&self, source: &str) -> String;
}
