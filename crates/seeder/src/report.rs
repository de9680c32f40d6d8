use crate::config::SeedConfig;
use models::collection::Collection;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Width of the `=` rules framing section titles
const RULE_WIDTH: usize = 60;

/// Frames a section title between two `=` rules
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}")
}

/// Per-collection record counts, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionCounts(Vec<(Collection, usize)>);

impl CollectionCounts {
    /// Sets the count for a collection, replacing any earlier value
    pub fn record(&mut self, collection: Collection, count: usize) {
        match self.0.iter_mut().find(|(c, _)| *c == collection) {
            Some((_, existing)) => *existing = count,
            None => self.0.push((collection, count)),
        }
    }

    /// The count for a collection, 0 if never recorded
    pub fn get(&self, collection: Collection) -> usize {
        self.0
            .iter()
            .find(|(c, _)| *c == collection)
            .map_or(0, |(_, count)| *count)
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Collection, usize)> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<(Collection, usize)> for CollectionCounts {
    fn from_iter<I: IntoIterator<Item = (Collection, usize)>>(iter: I) -> Self {
        let mut counts = Self::default();
        for (collection, count) in iter {
            counts.record(collection, count);
        }
        counts
    }
}

/// A login pair printed for manual verification after the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub label: &'static str,
    pub email: String,
    pub password: String,
}

/// Outcome of a reset run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub deleted: CollectionCounts,
    pub created: CollectionCounts,
    pub credentials: Vec<Credential>,
}

impl Summary {
    pub fn new(deleted: CollectionCounts, created: CollectionCounts, config: &SeedConfig) -> Self {
        let credentials = config
            .credentials()
            .map(|(label, user)| Credential {
                label,
                email: user.email.clone(),
                password: user.password.clone(),
            })
            .collect();

        Self {
            deleted,
            created,
            credentials,
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "{}", banner("SUMMARY"))?;

        writeln!(f, "\nRecords deleted:")?;
        for (collection, count) in self.deleted.iter() {
            writeln!(f, "  - {collection}: {count}")?;
        }

        writeln!(f, "\nRecords created:")?;
        for (collection, count) in self.created.iter() {
            writeln!(f, "  - {collection}: {count}")?;
        }

        writeln!(f, "\nData reset completed successfully!")?;

        write!(f, "\nLogin credentials:")?;
        for credential in &self.credentials {
            let label = format!("{}:", credential.label);
            write!(f, "\n   {label:<6} {} / {}", credential.email, credential.password)?;
        }

        Ok(())
    }
}
