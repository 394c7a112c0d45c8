use super::BindValue;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;

pub(crate) fn push_text(bind_params: &mut Vec<BindValue>, value: String) -> usize {
    bind_params.push(BindValue::Text(value));
    bind_params.len()
}

pub(crate) fn push_text_array(bind_params: &mut Vec<BindValue>, value: Vec<String>) -> usize {
    bind_params.push(BindValue::TextArray(value));
    bind_params.len()
}

pub(crate) fn push_uuid(bind_params: &mut Vec<BindValue>, value: uuid::Uuid) -> usize {
    bind_params.push(BindValue::Uuid(value));
    bind_params.len()
}

pub(crate) fn push_bigint(bind_params: &mut Vec<BindValue>, value: i64) -> usize {
    bind_params.push(BindValue::BigInt(value));
    bind_params.len()
}

/// Attach `values` to `query` in placeholder order.
pub fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    values: Vec<BindValue>,
) -> Query<'q, Postgres, PgArguments> {
    for value in values {
        query = match value {
            BindValue::Text(v) => query.bind(v),
            BindValue::TextArray(vs) => query.bind(vs),
            BindValue::Uuid(v) => query.bind(v),
            BindValue::BigInt(v) => query.bind(v),
        };
    }
    query
}
