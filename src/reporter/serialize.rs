pub mod supplementary {
    use serde::ser::SerializeMap;
    use serde::Serializer;

    /// Prefix marking a field as supplementary metadata rather than one of
    /// the typed case fields.
    pub const PREFIX: char = '_';

    pub fn serialize<S>(fields: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, value) in fields {
            map.serialize_entry(&format!("{}{}", PREFIX, key), value)?;
        }
        map.end()
    }
}
