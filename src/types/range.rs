use super::TableMeta;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryKeyValue {
    InfMin,
    InfMax,
    String(String),
    Integer(i64),
}

impl PrimaryKeyValue {
    pub fn is_inf_min(&self) -> bool {
        matches!(self, Self::InfMin)
    }

    pub fn is_inf_max(&self) -> bool {
        matches!(self, Self::InfMax)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKeyColumn {
    pub name: String,
    pub value: PrimaryKeyValue,
}

impl PrimaryKeyColumn {
    pub fn new<T: Into<String>>(name: T, value: PrimaryKeyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeQuery {
    pub table_name: String,
    pub inclusive_start: Vec<PrimaryKeyColumn>,
    pub exclusive_end: Vec<PrimaryKeyColumn>,
    pub limit: i32,
    pub max_versions: i32,
}

impl RangeQuery {
    /// The cheapest query touching the read path: whole key range, one row, one version.
    pub fn full_range(table_meta: &TableMeta) -> Self {
        let columns = |value: PrimaryKeyValue| {
            table_meta
                .primary_key
                .iter()
                .map(|pk| PrimaryKeyColumn::new(pk.name.as_str(), value.clone()))
                .collect::<Vec<PrimaryKeyColumn>>()
        };

        Self {
            table_name: table_meta.table_name.clone(),
            inclusive_start: columns(PrimaryKeyValue::InfMin),
            exclusive_end: columns(PrimaryKeyValue::InfMax),
            limit: 1,
            max_versions: 1,
        }
    }

    pub fn is_full_range(&self) -> bool {
        self.inclusive_start.iter().all(|c| c.value.is_inf_min())
            && self.exclusive_end.iter().all(|c| c.value.is_inf_max())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetRangeOutput {
    pub row_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimaryKeyType;

    #[test]
    fn it_builds_full_range_over_every_key_column() {
        let meta = TableMeta::new("People")
            .add_primary_key("Id", PrimaryKeyType::String)
            .add_primary_key("Seq", PrimaryKeyType::Integer);

        let query = RangeQuery::full_range(&meta);
        assert_eq!(query.table_name, "People");
        assert_eq!(
            query.inclusive_start,
            vec![
                PrimaryKeyColumn::new("Id", PrimaryKeyValue::InfMin),
                PrimaryKeyColumn::new("Seq", PrimaryKeyValue::InfMin),
            ]
        );
        assert_eq!(
            query.exclusive_end,
            vec![
                PrimaryKeyColumn::new("Id", PrimaryKeyValue::InfMax),
                PrimaryKeyColumn::new("Seq", PrimaryKeyValue::InfMax),
            ]
        );
        assert_eq!(query.limit, 1);
        assert_eq!(query.max_versions, 1);
        assert!(query.is_full_range());
    }

    #[test]
    fn bounded_ranges_are_not_full() {
        let meta = TableMeta::new("People").add_primary_key("Id", PrimaryKeyType::String);
        let mut query = RangeQuery::full_range(&meta);
        query.inclusive_start = vec![PrimaryKeyColumn::new(
            "Id",
            PrimaryKeyValue::String("m".into()),
        )];

        assert!(!query.is_full_range());
    }
}
