use crate::areas::repository::Repository;
use crate::artifacts::core::diagnostic::Diagnostic;
use crate::artifacts::objects::object::Object;
use std::io::Write;

impl Repository {
    /// Print the ids of every commit with exactly the given message
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let mut found = false;

        for commit in self.database().iter_commits()? {
            if commit.message() == message {
                writeln!(self.writer(), "{}", commit.object_id()?)?;
                found = true;
            }
        }

        if !found {
            anyhow::bail!(Diagnostic::NoMatch);
        }

        Ok(())
    }
}
