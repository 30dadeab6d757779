use std::sync::Arc;

/// Specifies a logger type which takes a string message.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environmental setup shared by a planning run.
#[derive(Clone)]
pub struct Environment {
    /// Amount of parallelism available for candidate construction.
    pub parallelism: usize,
    /// A logger for info messages.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(parallelism: usize, logger: InfoLogger) -> Self {
        Self { parallelism, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(get_cpus(), Arc::new(|message: &str| println!("{message}")))
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
