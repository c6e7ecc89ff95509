//! Generic storage adapter over a SeaORM entity.
//!
//! Domain repositories wrap a [`BaseRepository`] for the plain insert /
//! conditional update / conditional query statements and keep their own
//! typed error handling on top.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel, Iterable, PrimaryKeyToColumn, QueryFilter, QueryOrder, Value,
};
use tracing::instrument;

use crate::common::DatabaseResult;

/// Exact-match conjunction over the columns of `E`.
///
/// An empty set of conditions matches every row.
///
/// ```ignore
/// let conditions = Conditions::<entity::Entity>::new()
///     .eq(entity::Column::Id, id)
///     .eq(entity::Column::SellerId, seller_id);
/// ```
pub struct Conditions<E: EntityTrait> {
    condition: Condition,
    len: usize,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Conditions<E> {
    pub fn new() -> Self {
        Self {
            condition: Condition::all(),
            len: 0,
            _entity: PhantomData,
        }
    }

    /// Require `column = value`
    pub fn eq<V>(mut self, column: E::Column, value: V) -> Self
    where
        V: Into<Value>,
    {
        self.condition = self.condition.add(column.eq(value));
        self.len += 1;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl<E: EntityTrait> Default for Conditions<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> From<Conditions<E>> for Condition {
    fn from(conditions: Conditions<E>) -> Self {
        conditions.condition
    }
}

/// Insert / update / query statements for one entity type
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Insert one record and return the stored row
    #[instrument(skip_all, fields(table = %E::default().table_name()))]
    pub async fn insert(&self, record: E::ActiveModel) -> DatabaseResult<E::Model> {
        Ok(record.insert(&self.db).await?)
    }

    /// Apply the `Set` columns of `record` to every row matching `conditions`.
    ///
    /// Returns the number of rows affected. Columns left `NotSet` are untouched.
    #[instrument(skip_all, fields(table = %E::default().table_name(), conditions = conditions.len()))]
    pub async fn update(
        &self,
        record: E::ActiveModel,
        conditions: Conditions<E>,
    ) -> DatabaseResult<u64> {
        let result = E::update_many()
            .set(record)
            .filter(Condition::from(conditions))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Rows matching `conditions`, ordered by primary key
    #[instrument(skip_all, fields(table = %E::default().table_name(), conditions = conditions.len()))]
    pub async fn query_by_condition(&self, conditions: Conditions<E>) -> DatabaseResult<Vec<E::Model>> {
        let mut query = E::find();

        if !conditions.is_empty() {
            query = query.filter(Condition::from(conditions));
        }

        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        Ok(query.all(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue::{NotSet, Set};
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, Schema};

    mod widget {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "widgets")]
        pub struct Model {
            #[sea_orm(primary_key, auto_increment = false)]
            pub id: Uuid,
            pub name: String,
            pub owner: String,
            pub version: i32,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    async fn setup() -> BaseRepository<widget::Entity> {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();

        let backend = db.get_database_backend();
        let stmt = Schema::new(backend).create_table_from_entity(widget::Entity);
        db.execute_raw(backend.build(&stmt)).await.unwrap();

        BaseRepository::new(db)
    }

    fn widget(name: &str, owner: &str) -> widget::ActiveModel {
        widget::ActiveModel {
            id: Set(uuid::Uuid::now_v7()),
            name: Set(name.to_string()),
            owner: Set(owner.to_string()),
            version: Set(0),
        }
    }

    #[test]
    fn test_conditions_builder() {
        let empty = Conditions::<widget::Entity>::default();
        assert!(empty.is_empty());

        let conditions = Conditions::<widget::Entity>::new()
            .eq(widget::Column::Name, "bolt")
            .eq(widget::Column::Version, 2);
        assert!(!conditions.is_empty());
        assert_eq!(conditions.len(), 2);
    }

    #[tokio::test]
    async fn test_insert_returns_stored_row() {
        let repo = setup().await;

        let stored = repo.insert(widget("bolt", "alice")).await.unwrap();
        assert_eq!(stored.name, "bolt");
        assert_eq!(stored.owner, "alice");
        assert_eq!(stored.version, 0);
    }

    #[tokio::test]
    async fn test_query_by_condition() {
        let repo = setup().await;
        let bolt = repo.insert(widget("bolt", "alice")).await.unwrap();
        repo.insert(widget("nut", "alice")).await.unwrap();
        repo.insert(widget("gear", "bob")).await.unwrap();

        let all = repo.query_by_condition(Conditions::new()).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, bolt.id);

        let alice = repo
            .query_by_condition(Conditions::new().eq(widget::Column::Owner, "alice"))
            .await
            .unwrap();
        assert_eq!(alice.len(), 2);

        let one = repo
            .query_by_condition(
                Conditions::new()
                    .eq(widget::Column::Owner, "alice")
                    .eq(widget::Column::Name, "bolt"),
            )
            .await
            .unwrap();
        assert_eq!(one, vec![bolt]);

        let none = repo
            .query_by_condition(Conditions::new().eq(widget::Column::Owner, "carol"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_update_applies_set_columns_only() {
        let repo = setup().await;
        let stored = repo.insert(widget("bolt", "alice")).await.unwrap();

        let patch = widget::ActiveModel {
            id: NotSet,
            name: Set("hex bolt".to_string()),
            owner: NotSet,
            version: Set(1),
        };
        let conditions = Conditions::new()
            .eq(widget::Column::Id, stored.id)
            .eq(widget::Column::Version, 0);

        let affected = repo.update(patch, conditions).await.unwrap();
        assert_eq!(affected, 1);

        let rows = repo
            .query_by_condition(Conditions::new().eq(widget::Column::Id, stored.id))
            .await
            .unwrap();
        assert_eq!(rows[0].name, "hex bolt");
        assert_eq!(rows[0].owner, "alice");
        assert_eq!(rows[0].version, 1);
    }

    #[tokio::test]
    async fn test_update_without_match_affects_nothing() {
        let repo = setup().await;
        let stored = repo.insert(widget("bolt", "alice")).await.unwrap();

        let patch = widget::ActiveModel {
            name: Set("stale".to_string()),
            ..Default::default()
        };
        let conditions = Conditions::new()
            .eq(widget::Column::Id, stored.id)
            .eq(widget::Column::Version, 7);

        assert_eq!(repo.update(patch, conditions).await.unwrap(), 0);

        let rows = repo.query_by_condition(Conditions::new()).await.unwrap();
        assert_eq!(rows[0].name, "bolt");
    }
}
