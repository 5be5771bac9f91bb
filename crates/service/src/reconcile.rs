//! Many-to-many membership maintenance.
//!
//! `reconcile` turns a current and a desired id list into the rows to connect
//! and disconnect; `sync_members` applies that plan to a join table.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter, QuerySelect,
};
use uuid::Uuid;

use crate::errors::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub connect: Vec<Uuid>,
    pub disconnect: Vec<Uuid>,
}

impl Reconciliation {
    pub fn is_noop(&self) -> bool { self.connect.is_empty() && self.disconnect.is_empty() }
}

/// Set difference in both directions. Output keeps input order and drops
/// duplicates.
pub fn reconcile(current: &[Uuid], desired: &[Uuid]) -> Reconciliation {
    let have: HashSet<&Uuid> = current.iter().collect();
    let want: HashSet<&Uuid> = desired.iter().collect();
    let mut seen = HashSet::new();
    let connect = desired
        .iter()
        .filter(|id| !have.contains(id) && seen.insert(**id))
        .copied()
        .collect();
    let mut seen = HashSet::new();
    let disconnect = current
        .iter()
        .filter(|id| !want.contains(id) && seen.insert(**id))
        .copied()
        .collect();
    Reconciliation { connect, disconnect }
}

/// Fail with BadRequest unless every id names an existing row of `E`.
pub async fn ensure_all_exist<E, C>(conn: &C, id_col: E::Column, ids: &[Uuid], label: &str) -> ServiceResult<()>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let unique: Vec<Uuid> = ids.iter().copied().collect::<HashSet<_>>().into_iter().collect();
    if unique.is_empty() {
        return Ok(());
    }
    let found = E::find()
        .select_only()
        .column(id_col)
        .filter(id_col.is_in(unique.clone()))
        .into_tuple::<Uuid>()
        .all(conn)
        .await?;
    if found.len() != unique.len() {
        return Err(ServiceError::BadRequest(format!("one or more {label} ids do not exist")));
    }
    Ok(())
}

/// Ids in `member_col` currently linked to `owner_id`.
pub async fn current_members<E, C>(conn: &C, owner_col: E::Column, member_col: E::Column, owner_id: Uuid) -> ServiceResult<Vec<Uuid>>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let ids = E::find()
        .select_only()
        .column(member_col)
        .filter(owner_col.eq(owner_id))
        .into_tuple::<Uuid>()
        .all(conn)
        .await?;
    Ok(ids)
}

/// Make the members of `owner_id` equal `desired`, touching only the
/// difference. `link` builds the join row for one member id.
pub async fn sync_members<E, C, F>(
    conn: &C,
    owner_col: E::Column,
    member_col: E::Column,
    owner_id: Uuid,
    desired: &[Uuid],
    link: F,
) -> ServiceResult<Reconciliation>
where
    E: EntityTrait,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
    E::Model: IntoActiveModel<E::ActiveModel>,
    C: ConnectionTrait,
    F: Fn(Uuid) -> E::ActiveModel,
{
    let current = current_members::<E, C>(conn, owner_col, member_col, owner_id).await?;
    let plan = reconcile(&current, desired);
    if !plan.disconnect.is_empty() {
        E::delete_many()
            .filter(owner_col.eq(owner_id))
            .filter(member_col.is_in(plan.disconnect.clone()))
            .exec(conn)
            .await?;
    }
    if !plan.connect.is_empty() {
        E::insert_many(plan.connect.iter().copied().map(link))
            .exec_without_returning(conn)
            .await?;
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, make_offering, make_store, make_user, make_vet_store};
    use common::types::StoreType;
    use models::vet_store_service;
    use sea_orm::Set;

    fn ids(n: usize) -> Vec<Uuid> { (0..n).map(|_| Uuid::new_v4()).collect() }

    #[test]
    fn computes_both_directions() {
        let v = ids(4);
        let plan = reconcile(&[v[0], v[1], v[2]], &[v[1], v[2], v[3]]);
        assert_eq!(plan.connect, vec![v[3]]);
        assert_eq!(plan.disconnect, vec![v[0]]);
    }

    #[test]
    fn identical_sets_are_a_noop() {
        let v = ids(2);
        assert!(reconcile(&v, &[v[1], v[0]]).is_noop());
    }

    #[test]
    fn duplicates_are_collapsed() {
        let v = ids(1);
        let plan = reconcile(&[], &[v[0], v[0]]);
        assert_eq!(plan.connect, vec![v[0]]);
    }

    #[test]
    fn empty_desired_disconnects_everything() {
        let v = ids(3);
        let plan = reconcile(&v, &[]);
        assert!(plan.connect.is_empty());
        assert_eq!(plan.disconnect, v);
    }

    async fn sync_clinic(db: &sea_orm::DatabaseConnection, clinic_id: Uuid, desired: Vec<Uuid>) -> ServiceResult<Reconciliation> {
        sync_members::<vet_store_service::Entity, _, _>(
            db,
            vet_store_service::Column::VetStoreId,
            vet_store_service::Column::ServiceId,
            clinic_id,
            &desired,
            |service_id| vet_store_service::ActiveModel { vet_store_id: Set(clinic_id), service_id: Set(service_id) },
        )
        .await
    }

    #[tokio::test]
    async fn sync_members_applies_only_the_difference() -> anyhow::Result<()> {
        let db = get_db().await?;
        let owner = make_user(&db, "owner").await?;
        let clinic = make_vet_store(&db, make_store(&db, owner.id, StoreType::VetStore).await?.id).await?;
        let a = make_offering(&db, "Checkup").await?;
        let b = make_offering(&db, "Vaccines").await?;
        let c = make_offering(&db, "Dental").await?;

        let first = sync_clinic(&db, clinic.id, vec![a.id, b.id]).await?;
        assert_eq!(first.connect, vec![a.id, b.id]);

        let second = sync_clinic(&db, clinic.id, vec![b.id, c.id]).await?;
        assert_eq!(second.connect, vec![c.id]);
        assert_eq!(second.disconnect, vec![a.id]);

        let mut members = current_members::<vet_store_service::Entity, _>(
            &db,
            vet_store_service::Column::VetStoreId,
            vet_store_service::Column::ServiceId,
            clinic.id,
        )
        .await?;
        members.sort();
        let mut expected = vec![b.id, c.id];
        expected.sort();
        assert_eq!(members, expected);
        Ok(())
    }
}
