use fxhash::FxHashMap;

use crate::NodeId;

/// Hands out dense ids to names in the order they are first seen.
#[derive(Clone, Default)]
pub(crate) struct InternerBuilder {
    map_strs: FxHashMap<Box<str>, NodeId>,
    strs: Vec<Box<str>>,
}

impl InternerBuilder {
    pub(crate) fn new() -> Self {
        InternerBuilder::default()
    }

    #[inline]
    pub(crate) fn get(&self, val: &str) -> Option<NodeId> {
        self.map_strs.get(val).copied()
    }

    /// Interns `val` only if it has never been seen, returning `None`
    /// otherwise.
    pub(crate) fn intern_new(&mut self, val: impl AsRef<str>) -> Option<NodeId> {
        if self.map_strs.contains_key(val.as_ref()) {
            return None;
        }
        Some(self.get_or_intern(val))
    }

    pub(crate) fn get_or_intern(&mut self, val: impl AsRef<str>) -> NodeId {
        match self.map_strs.get(val.as_ref()) {
            Some(id) => *id,
            None => {
                let id = self.strs.len();
                let val: Box<str> = val.as_ref().into();
                self.strs.push(val.clone());
                self.map_strs.insert(val, id);
                id
            }
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.strs.len()
    }

    pub(crate) fn build(self) -> Resolver {
        let mut map_strs = self.map_strs;
        map_strs.shrink_to_fit();
        Resolver {
            map_strs,
            strs: self.strs.into_boxed_slice(),
        }
    }
}

/// Frozen two way mapping between names and node ids.
#[derive(Clone, Debug)]
pub(crate) struct Resolver {
    map_strs: FxHashMap<Box<str>, NodeId>,
    strs: Box<[Box<str>]>,
}

impl Resolver {
    #[inline(always)]
    pub(crate) fn get(&self, val: &str) -> Option<NodeId> {
        self.map_strs.get(val).copied()
    }
    #[inline(always)]
    pub(crate) fn resolve(&self, id: NodeId) -> Option<&str> {
        self.strs.get(id).map(|s| &**s)
    }
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.strs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_build_interner() {
        let mut builder = InternerBuilder::new();
        let int1 = builder.get_or_intern("Hello");
        let int2 = builder.get_or_intern("World");
        let int3 = builder.get_or_intern("Hello");
        assert_eq!(builder.len(), 2);
        let resolver = builder.build();
        assert_eq!(int1, 0);
        assert_eq!(int2, 1);
        assert_eq!(int3, 0);
        assert_eq!(resolver.resolve(1), Some("World"));
        assert_eq!(resolver.get("Hello"), Some(0));
        assert_eq!(resolver.resolve(2), None);
    }

    #[test]
    fn intern_new_refuses_known_names() {
        let mut builder = InternerBuilder::new();
        assert_eq!(builder.intern_new("a"), Some(0));
        assert_eq!(builder.intern_new("a"), None);
        assert_eq!(builder.get("a"), Some(0));
        assert_eq!(builder.get("b"), None);
    }
}
