/// An ordering of nodes resolved back to their names.
#[derive(Clone, PartialEq, Eq)]
pub struct NodeVec<'a> {
    pub(crate) values: Vec<&'a str>,
}

impl PartialEq<[&str]> for NodeVec<'_> {
    fn eq(&self, other: &[&str]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<Vec<&str>> for NodeVec<'_> {
    fn eq(&self, other: &Vec<&str>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<[&str; N]> for NodeVec<'_> {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// One row per node, numbered by its position in the ordering.
impl std::fmt::Debug for NodeVec<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const HEADER: &str = "Node";
        let index_width = self.len().saturating_sub(1).to_string().len();
        let name_width = self
            .iter()
            .map(str::len)
            .max()
            .unwrap_or(0)
            .max(HEADER.len());
        writeln!(f, "{:>index_width$} | {:<name_width$}", "#", HEADER)?;
        for (position, node) in self.iter().enumerate() {
            writeln!(f, "{:>index_width$} | {:<name_width$}", position, node)?;
        }
        Ok(())
    }
}

/// Writes the names joined by ` -> `.
impl std::fmt::Display for NodeVec<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut nodes = self.values.iter();
        if let Some(first) = nodes.next() {
            write!(f, "{first}")?;
        }
        for node in nodes {
            write!(f, " -> {node}")?;
        }
        Ok(())
    }
}

impl<'a> NodeVec<'a> {
    #[inline]
    pub fn as_slice(&self) -> &[&'a str] {
        self.values.as_slice()
    }
    #[inline]
    pub fn as_vec(&self) -> Vec<&'a str> {
        self.values.clone()
    }
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, &'a str>> {
        self.values.iter().copied()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).copied()
    }

    /// Position of `name` in the ordering.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.values.iter().position(|&node| node == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, 'b> IntoIterator for &'b NodeVec<'a> {
    type Item = &'a str;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a str>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for NodeVec<'a> {
    type Item = &'a str;
    type IntoIter = std::vec::IntoIter<&'a str>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
