use anyhow::Result;

pub trait PromptDriver {
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;
    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64>;
    /// Returns the index of the chosen option.
    fn select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize>;
}
