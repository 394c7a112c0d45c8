//! Tag dictionary: names are unique, recipes reference tags by id.

use crate::Result;
use sqlx::PgConnection;

/// Make sure every name in `names` exists and return their ids in input order.
///
/// Existing names are left untouched, so concurrent writers inserting the same
/// tag both succeed. Call inside the transaction that writes the recipe.
pub async fn ensure_tag_ids(conn: &mut PgConnection, names: &[String]) -> Result<Vec<i64>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query(
        r#"
        INSERT INTO tags (name)
        SELECT DISTINCT n FROM unnest($1::text[]) AS n
        ON CONFLICT (name) DO NOTHING
        "#,
    )
    .bind(names)
    .execute(&mut *conn)
    .await?;

    let ids: Vec<i64> = sqlx::query_scalar(
        r#"
        SELECT t.id
        FROM unnest($1::text[]) WITH ORDINALITY AS n(name, ord)
        JOIN tags t ON t.name = n.name
        ORDER BY n.ord
        "#,
    )
    .bind(names)
    .fetch_all(&mut *conn)
    .await?;

    if ids.len() != names.len() {
        return Err(crate::Error::Internal(format!(
            "resolved {} tag ids for {} names",
            ids.len(),
            names.len()
        )));
    }

    Ok(ids)
}
