use super::*;

impl PostgresUserRepository {
    pub(super) async fn create_impl(&self, record: &UserRecord) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, prenom, nom)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.first_name())
        .bind(record.last_name())
        .execute(&self.pool)
        .await
        .map_err(internal("create user"))?;

        Ok(())
    }

    pub(super) async fn update_impl(&self, record: &UserRecord) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET prenom = $2, nom = $3
            WHERE id = $1
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.first_name())
        .bind(record.last_name())
        .execute(&self.pool)
        .await
        .map_err(internal("update user"))?;

        Ok(result.rows_affected() > 0)
    }

    pub(super) async fn delete_impl(&self, user_id: UserId) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(internal("delete user"))?;

        Ok(result.rows_affected() > 0)
    }
}
