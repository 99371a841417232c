use bytes::Bytes;
use indexmap::IndexMap;

use crate::error::BindError;
use crate::statement::Statement;
use crate::types::DseType;

/// Name and declared type of one statement parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSpec {
    name: Option<String>,
    class_name: Option<String>,
}

impl ColumnSpec {
    /// A named parameter that accepts any type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            class_name: None,
        }
    }

    /// A named parameter declared as the custom type `class_name`.
    pub fn custom(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            class_name: Some(class_name.into()),
        }
    }

    /// A named parameter declared as one of the DSE custom types.
    pub fn typed(name: impl Into<String>, ty: DseType) -> Self {
        Self::custom(name, ty.class_name())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Whether a bind name refers to this parameter.
    ///
    /// A name in double quotes must match exactly; any other name is compared ignoring ASCII case.
    fn matches(&self, name: &[u8]) -> bool {
        let Some(column) = self.name.as_deref() else {
            return false;
        };
        match name {
            [b'"', inner @ .., b'"'] => inner == column.as_bytes(),
            _ => name.eq_ignore_ascii_case(column.as_bytes()),
        }
    }

    fn check_type(&self, class_name: &str) -> Result<(), BindError> {
        match self.class_name.as_deref() {
            Some(declared) if declared != class_name => Err(BindError::InvalidValueType {
                expected: declared.to_string(),
                found: class_name.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// A custom-typed value held by a [`BoundStatement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundValue {
    class_name: String,
    data: Bytes,
}

impl BoundValue {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// The custom type of this value, when it is one of the DSE types.
    pub fn dse_type(&self) -> Option<DseType> {
        DseType::from_class_name(&self.class_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Parameter {
    spec: ColumnSpec,
    value: Option<BoundValue>,
}

/// A query with its parameter values and custom payload, staged in memory.
///
/// ```
/// use dse_geo::{BoundStatement, ColumnSpec, DseStatementExt, DseType};
///
/// let mut statement = BoundStatement::prepared(
///     "INSERT INTO places (id, location) VALUES (?, ?)",
///     vec![ColumnSpec::new("id"), ColumnSpec::typed("location", DseType::Point)],
/// );
/// statement.bind_dse_point_by_name("location", 1.5, -2.25).unwrap();
/// assert_eq!(statement.value(1).unwrap().data().len(), 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundStatement {
    query: String,
    params: Vec<Parameter>,
    custom_payload: IndexMap<String, Bytes>,
}

impl BoundStatement {
    /// A statement with `count` positional parameters that have neither names nor types.
    pub fn new(query: impl Into<String>, count: usize) -> Self {
        Self::prepared(query, std::iter::repeat(ColumnSpec::default()).take(count))
    }

    /// A statement with parameters described by `columns`, as returned when preparing a query.
    pub fn prepared(
        query: impl Into<String>,
        columns: impl IntoIterator<Item = ColumnSpec>,
    ) -> Self {
        Self {
            query: query.into(),
            params: columns
                .into_iter()
                .map(|spec| Parameter { spec, value: None })
                .collect(),
            custom_payload: IndexMap::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn parameter_count(&self) -> usize {
        self.params.len()
    }

    pub fn column(&self, index: usize) -> Option<&ColumnSpec> {
        self.params.get(index).map(|param| &param.spec)
    }

    /// The value bound at `index`, if any.
    pub fn value(&self, index: usize) -> Option<&BoundValue> {
        self.params.get(index)?.value.as_ref()
    }

    /// Whether every parameter has a value.
    pub fn is_fully_bound(&self) -> bool {
        self.params.iter().all(|param| param.value.is_some())
    }

    pub fn custom_payload(&self, key: &str) -> Option<&Bytes> {
        self.custom_payload.get(key)
    }

    /// Payload entries in the order their keys were first set.
    pub fn custom_payloads(&self) -> impl ExactSizeIterator<Item = (&str, &Bytes)> {
        self.custom_payload
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Unbind every parameter and drop the custom payload.
    pub fn clear(&mut self) {
        self.params.iter_mut().for_each(|param| param.value = None);
        self.custom_payload.clear();
    }
}

impl Statement for BoundStatement {
    type Error = BindError;

    fn bind_custom(&mut self, index: usize, class_name: &str, data: &[u8]) -> Result<(), BindError> {
        let count = self.params.len();
        let Some(param) = self.params.get_mut(index) else {
            log::debug!("rejecting {class_name}: index {index} out of {count} parameters");
            return Err(BindError::IndexOutOfBounds { index, count });
        };
        if let Err(err) = param.spec.check_type(class_name) {
            log::debug!("rejecting value at index {index}: {err}");
            return Err(err);
        }

        param.value = Some(BoundValue {
            class_name: class_name.to_string(),
            data: Bytes::copy_from_slice(data),
        });
        Ok(())
    }

    fn bind_custom_by_name_n(
        &mut self,
        name: &[u8],
        class_name: &str,
        data: &[u8],
    ) -> Result<(), BindError> {
        let matching = self
            .params
            .iter()
            .enumerate()
            .filter(|(_, param)| param.spec.matches(name))
            .map(|(index, _)| index)
            .collect::<Vec<_>>();

        if matching.is_empty() {
            let name = String::from_utf8_lossy(name).into_owned();
            log::debug!("rejecting {class_name}: no parameter named {name:?}");
            return Err(BindError::NameDoesNotExist(name));
        }

        // Every match is checked before any is written, so a rejected bind changes nothing.
        for &index in &matching {
            if let Err(err) = self.params[index].spec.check_type(class_name) {
                log::debug!("rejecting value for index {index}: {err}");
                return Err(err);
            }
        }

        let data = Bytes::copy_from_slice(data);
        for index in matching {
            self.params[index].value = Some(BoundValue {
                class_name: class_name.to_string(),
                data: data.clone(),
            });
        }
        Ok(())
    }

    fn set_custom_payload(&mut self, key: &str, data: &[u8]) {
        self.custom_payload
            .insert(key.to_string(), Bytes::copy_from_slice(data));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::statement::DseStatementExt;
    use crate::types::{DSE_LINE_STRING_TYPE, DSE_POINT_TYPE};

    fn insert_place() -> BoundStatement {
        BoundStatement::prepared(
            "INSERT INTO places (id, location, area) VALUES (?, ?, ?)",
            vec![
                ColumnSpec::new("id"),
                ColumnSpec::typed("location", DseType::Point),
                ColumnSpec::typed("area", DseType::Polygon),
            ],
        )
    }

    #[test]
    fn bind_by_index() {
        let mut statement = BoundStatement::new("SELECT * FROM t WHERE a = ? AND b = ?", 2);
        statement.bind_custom(1, DSE_POINT_TYPE, b"abc").unwrap();

        assert!(statement.value(0).is_none());
        let value = statement.value(1).unwrap();
        assert_eq!(value.class_name(), DSE_POINT_TYPE);
        assert_eq!(value.data().as_ref(), b"abc");
        assert_eq!(value.dse_type(), Some(DseType::Point));
        assert!(!statement.is_fully_bound());
    }

    #[test]
    fn index_out_of_bounds() {
        let mut statement = BoundStatement::new("SELECT * FROM t WHERE a = ?", 1);
        let err = statement.bind_custom(1, DSE_POINT_TYPE, b"").unwrap_err();
        assert_eq!(err, BindError::IndexOutOfBounds { index: 1, count: 1 });
        assert!(statement.value(0).is_none());
    }

    #[test]
    fn unknown_name() {
        let mut statement = insert_place();
        let err = statement
            .bind_custom_by_name_n(b"nowhere", DSE_POINT_TYPE, b"")
            .unwrap_err();
        assert_eq!(err, BindError::NameDoesNotExist("nowhere".to_string()));
    }

    #[test]
    fn names_ignore_case_unless_quoted() {
        let mut statement = insert_place();
        statement
            .bind_custom_by_name_n(b"LOCATION", DSE_POINT_TYPE, b"a")
            .unwrap();
        assert_eq!(statement.value(1).unwrap().data().as_ref(), b"a");

        let err = statement
            .bind_custom_by_name_n(b"\"LOCATION\"", DSE_POINT_TYPE, b"b")
            .unwrap_err();
        assert!(matches!(err, BindError::NameDoesNotExist(_)));

        statement
            .bind_custom_by_name_n(b"\"location\"", DSE_POINT_TYPE, b"c")
            .unwrap();
        assert_eq!(statement.value(1).unwrap().data().as_ref(), b"c");
    }

    #[test]
    fn every_match_is_bound() {
        let mut statement = BoundStatement::prepared(
            "SELECT * FROM t WHERE a > ? AND a < ?",
            vec![ColumnSpec::new("a"), ColumnSpec::new("A")],
        );
        statement
            .bind_custom_by_name_n(b"a", DSE_LINE_STRING_TYPE, b"xy")
            .unwrap();
        assert_eq!(statement.value(0), statement.value(1));
        assert!(statement.is_fully_bound());
    }

    #[test]
    fn declared_type_mismatch() {
        let mut statement = insert_place();
        let err = statement
            .bind_custom(1, DSE_LINE_STRING_TYPE, b"")
            .unwrap_err();
        assert_eq!(
            err,
            BindError::InvalidValueType {
                expected: DSE_POINT_TYPE.to_string(),
                found: DSE_LINE_STRING_TYPE.to_string(),
            }
        );

        let err = statement
            .bind_custom_by_name_n(b"area", DSE_POINT_TYPE, b"")
            .unwrap_err();
        assert!(matches!(err, BindError::InvalidValueType { .. }));
        assert!(statement.value(2).is_none());
    }

    #[test]
    fn by_name_matches_by_name_n() {
        let mut a = insert_place();
        let mut b = insert_place();
        a.bind_dse_point_by_name("location", 1.5, -2.25).unwrap();
        b.bind_dse_point_by_name_n(b"location", 1.5, -2.25).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn payload_is_replaced() {
        let mut statement = BoundStatement::new("SELECT * FROM t", 0);
        statement.set_custom_payload("ProxyExecute", b"alice");
        statement.set_custom_payload("other", b"1");
        statement.set_custom_payload("ProxyExecute", b"bob");

        assert_eq!(statement.custom_payload("ProxyExecute").unwrap().as_ref(), b"bob");
        let keys = statement.custom_payloads().map(|(k, _)| k).collect::<Vec<_>>();
        assert_eq!(keys, vec!["ProxyExecute", "other"]);

        statement.clear();
        assert_eq!(statement.custom_payloads().len(), 0);
    }
}
