use sqlx::{Postgres, QueryBuilder};
use utilisateur_domain::LIKE_ESCAPE;

use super::*;

impl PostgresUserRepository {
    pub(super) async fn find_by_id_impl(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, prenom, nom
            FROM users
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(internal("find user by id"))?;

        Ok(row.map(UserRecord::from))
    }

    pub(super) async fn list_impl(&self, filter: &UserFilter) -> AppResult<Vec<UserRecord>> {
        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT id, prenom, nom FROM users");
        let mut separator = " WHERE ";

        for (column, pattern) in [
            ("prenom", filter.first_name_pattern()),
            ("nom", filter.last_name_pattern()),
        ] {
            let Some(pattern) = pattern else {
                continue;
            };

            builder.push(separator);
            builder.push(column);
            builder.push(" LIKE ");
            builder.push_bind(pattern);
            builder.push(format!(" ESCAPE '{LIKE_ESCAPE}'"));
            separator = " AND ";
        }

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(internal("list users"))?;

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }
}
