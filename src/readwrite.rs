macro_rules! impl_read_write {
    ($struct:ty) => {
        #[cfg(feature = "json")]
        impl $struct {
            pub fn to_json<W>(&self, writer: W) -> Result<(), serde_json::Error>
            where
                W: std::io::Write,
            {
                serde_json::to_writer(writer, self)
            }

            pub fn from_json<R>(reader: R) -> Result<Self, serde_json::Error>
            where
                R: std::io::Read,
            {
                serde_json::from_reader(reader)
            }
        }
    };
}

impl_read_write!(crate::prelude::AdjacencyMatrix);
impl_read_write!(crate::prelude::AdjacencyList);
