//! Configuration for face generation.

/// Font file extensions recognized by default, in `src:` preference order.
pub const DEFAULT_FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "eot", "woff", "woff2", "svg"];

/// Extension of generated and concatenated stylesheets.
pub const CSS_EXTENSION: &str = "css";

/// MIME type used when the extension table has no entry.
pub const MIME_FALLBACK: &str = "application/octet-stream";

/// Settings shared by both pipelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceConfig {
    /// Lower-case extensions (without the dot) treated as font files. Discovery
    /// follows this order, so it also decides the order of `src:` entries.
    pub extensions: Vec<String>,
    /// Worker threads for file I/O. `None` uses rayon's default.
    pub jobs: Option<usize>,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_FONT_EXTENSIONS.iter().map(|ext| (*ext).to_owned()).collect(),
            jobs: None,
        }
    }
}

impl FaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recognized extension set.
    ///
    /// Leading dots are dropped and extensions are lower-cased, so `".TTF"` and `"ttf"`
    /// configure the same thing. The first occurrence of a repeated extension wins.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions.clear();
        for ext in extensions {
            let ext = ext.as_ref().trim_start_matches('.').to_ascii_lowercase();
            if !ext.is_empty() && !self.extensions.contains(&ext) {
                self.extensions.push(ext);
            }
        }
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs.max(1));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let config = FaceConfig::default();
        assert_eq!(config.extensions, ["ttf", "otf", "eot", "woff", "woff2", "svg"]);
        assert_eq!(config.jobs, None);
    }

    #[test]
    fn test_with_extensions_normalizes() {
        let config = FaceConfig::new().with_extensions(["woff2", ".TTF", "woff2", "ttf", ""]);
        assert_eq!(config.extensions, ["woff2", "ttf"]);
    }

    #[test]
    fn test_with_jobs_at_least_one() {
        assert_eq!(FaceConfig::new().with_jobs(0).jobs, Some(1));
        assert_eq!(FaceConfig::new().with_jobs(4).jobs, Some(4));
    }
}
