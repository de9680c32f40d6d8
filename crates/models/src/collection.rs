use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// A MockAPI resource collection supporting list, create and delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    Students,
    Courses,
    Inscriptions,
    Users,
}

impl Collection {
    /// The path segment of the collection under the API base URL
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// All collections, in the order they are purged and reported
    pub fn all() -> Vec<Collection> {
        Collection::iter().collect()
    }
}
