use std::path::PathBuf;

pub struct DefaultsConfig {
    pub size: usize,
    pub dictionary: PathBuf,
    pub threads: usize,
    pub unique_words: bool,
    pub pretty: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            size: 5,
            dictionary: PathBuf::from("english_filtered.txt"),
            threads: default_num_threads(),
            unique_words: false,
            pretty: false,
        }
    }
}

/// Half the logical cores, but never fewer than one thread.
pub fn default_num_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get() / 2)
        .unwrap_or(1)
        .max(1)
}
