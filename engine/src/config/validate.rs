pub trait Validate {
    /// Describes the first problem found, if any.
    fn validate(&self) -> Result<(), String>;
}
