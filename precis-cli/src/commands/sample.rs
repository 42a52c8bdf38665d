//! Sample command implementation

/// Article bundled with the binary for trying the summarizer out
pub const SAMPLE_ARTICLE: &str = include_str!("../../assets/sample.txt");

/// Print the bundled sample article
pub fn execute() {
    print!("{SAMPLE_ARTICLE}");
}
