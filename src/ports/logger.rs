use crate::Environment;

#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn debug(&self, message: &str);

    fn error(&self, message: &str);

    fn environment(&self) -> Environment;
}

/// Creator declaring the logger factory method.
#[cfg_attr(test, mockall::automock)]
pub trait LoggerFactory: Send + Sync {
    fn environment(&self) -> Environment;

    fn create_logger(&self) -> Box<dyn Logger>;
}
