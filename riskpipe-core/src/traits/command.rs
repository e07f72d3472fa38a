//! Command execution interface

/// Something that can run commands
///
/// Failure handling, output capture and process lifetime are the
/// implementation's concern; callers only hand over the command line.
pub trait CommandRunner {
    fn run(&self, command: &str);
}

impl<C: CommandRunner + ?Sized> CommandRunner for &C {
    fn run(&self, command: &str) {
        (**self).run(command)
    }
}
