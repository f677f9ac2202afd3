pub struct Config {
    /// Suppresses headers and decorative output.
    ///
    /// Does not suppress the greeting itself.
    pub quiet: bool,
}
