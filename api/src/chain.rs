use std::collections::HashMap;

use entity::{identification, planning, publication, publication_tender};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The four-stage prefix of the procurement pipeline that chain resolution
/// walks. Execution stages (open bid onward) hang off the prefix but do not
/// participate in stage inference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Identification,
    Planning,
    Publication,
    PublicationTender,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Identification => "identification",
            Stage::Planning => "planning",
            Stage::Publication => "publication",
            Stage::PublicationTender => "publicationTender",
        }
    }

    pub fn parse(value: &str) -> Option<Stage> {
        match value {
            "identification" => Some(Stage::Identification),
            "planning" => Some(Stage::Planning),
            "publication" => Some(Stage::Publication),
            "publicationTender" => Some(Stage::PublicationTender),
            _ => None,
        }
    }
}

/// One identification together with its resolved downstream prefix records.
/// Absent links are `None`, never errors.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementChain {
    pub identification: identification::Model,
    pub planning: Option<planning::Model>,
    pub publication: Option<publication::Model>,
    pub publication_tender: Option<publication_tender::Model>,
}

impl ProcurementChain {
    /// Deepest resolved stage wins, strictly.
    pub fn stage(&self) -> Stage {
        if self.publication_tender.is_some() {
            Stage::PublicationTender
        } else if self.publication.is_some() {
            Stage::Publication
        } else if self.planning.is_some() {
            Stage::Planning
        } else {
            Stage::Identification
        }
    }

    /// Percentage of the four-stage prefix completed, 25 points per stage.
    pub fn progress(&self) -> u8 {
        match self.stage() {
            Stage::Identification => 25,
            Stage::Planning => 50,
            Stage::Publication => 75,
            Stage::PublicationTender => 100,
        }
    }
}

/// Walks the forward chain from one identification. `NotFound` only when the
/// root itself is absent.
///
/// When several children point at the same parent, the most recently created
/// one is taken as "the" child of the chain (created_at desc, id desc as the
/// tiebreaker). The full candidate set stays reachable through the per-stage
/// `search` with a foreign-key filter.
pub async fn resolve_chain<C: ConnectionTrait>(
    db: &C,
    identification_id: i32,
) -> CoreResult<ProcurementChain> {
    let root = identification::Entity::find_by_id(identification_id)
        .one(db)
        .await?
        .ok_or(CoreError::NotFound("identification"))?;

    let planning = planning::Entity::find()
        .filter(planning::Column::IdentificationId.eq(root.id))
        .order_by_desc(planning::Column::CreatedAt)
        .order_by_desc(planning::Column::Id)
        .one(db)
        .await?;

    let publication = match &planning {
        Some(planning) => {
            publication::Entity::find()
                .filter(publication::Column::PlanningId.eq(planning.id))
                .order_by_desc(publication::Column::CreatedAt)
                .order_by_desc(publication::Column::Id)
                .one(db)
                .await?
        }
        None => None,
    };

    let publication_tender = match &publication {
        Some(publication) => {
            publication_tender::Entity::find()
                .filter(publication_tender::Column::PublicationId.eq(publication.id))
                .order_by_desc(publication_tender::Column::CreatedAt)
                .order_by_desc(publication_tender::Column::Id)
                .one(db)
                .await?
        }
        None => None,
    };

    let chain = ProcurementChain {
        identification: root,
        planning,
        publication,
        publication_tender,
    };
    tracing::debug!(
        identification = chain.identification.id,
        stage = chain.stage().as_str(),
        "resolved procurement chain"
    );
    Ok(chain)
}

/// Resolves every identification's chain in four queries total, one per
/// stage with an `IN`-list over the parent ids collected so far.
pub async fn resolve_all_chains<C: ConnectionTrait>(db: &C) -> CoreResult<Vec<ProcurementChain>> {
    let roots = identification::Entity::find()
        .order_by_asc(identification::Column::CreatedAt)
        .order_by_asc(identification::Column::Id)
        .all(db)
        .await?;
    resolve_chains_for(db, roots).await
}

/// Batched resolution over an already-fetched set of identifications. Rows
/// per stage come back newest-first, so the first row seen for a parent is
/// the winning child under the most-recently-created rule.
pub async fn resolve_chains_for<C: ConnectionTrait>(
    db: &C,
    roots: Vec<identification::Model>,
) -> CoreResult<Vec<ProcurementChain>> {
    if roots.is_empty() {
        return Ok(Vec::new());
    }

    let root_ids: Vec<i32> = roots.iter().map(|r| r.id).collect();
    let mut plannings: HashMap<i32, planning::Model> = HashMap::new();
    for row in planning::Entity::find()
        .filter(planning::Column::IdentificationId.is_in(root_ids))
        .order_by_desc(planning::Column::CreatedAt)
        .order_by_desc(planning::Column::Id)
        .all(db)
        .await?
    {
        if let Some(parent) = row.identification_id {
            plannings.entry(parent).or_insert(row);
        }
    }

    let planning_ids: Vec<i32> = plannings.values().map(|p| p.id).collect();
    let mut publications: HashMap<i32, publication::Model> = HashMap::new();
    if !planning_ids.is_empty() {
        for row in publication::Entity::find()
            .filter(publication::Column::PlanningId.is_in(planning_ids))
            .order_by_desc(publication::Column::CreatedAt)
            .order_by_desc(publication::Column::Id)
            .all(db)
            .await?
        {
            if let Some(parent) = row.planning_id {
                publications.entry(parent).or_insert(row);
            }
        }
    }

    let publication_ids: Vec<i32> = publications.values().map(|p| p.id).collect();
    let mut tenders: HashMap<i32, publication_tender::Model> = HashMap::new();
    if !publication_ids.is_empty() {
        for row in publication_tender::Entity::find()
            .filter(publication_tender::Column::PublicationId.is_in(publication_ids))
            .order_by_desc(publication_tender::Column::CreatedAt)
            .order_by_desc(publication_tender::Column::Id)
            .all(db)
            .await?
        {
            if let Some(parent) = row.publication_id {
                tenders.entry(parent).or_insert(row);
            }
        }
    }

    let chains = roots
        .into_iter()
        .map(|root| {
            let planning = plannings.remove(&root.id);
            let publication = planning
                .as_ref()
                .and_then(|p| publications.remove(&p.id));
            let publication_tender = publication
                .as_ref()
                .and_then(|p| tenders.remove(&p.id));
            ProcurementChain {
                identification: root,
                planning,
                publication,
                publication_tender,
            }
        })
        .collect();
    Ok(chains)
}

#[cfg(test)]
mod tests {
    use super::Stage;

    #[test]
    fn stage_literals_round_trip() {
        for stage in [
            Stage::Identification,
            Stage::Planning,
            Stage::Publication,
            Stage::PublicationTender,
        ] {
            assert_eq!(Stage::parse(stage.as_str()), Some(stage));
        }
        assert_eq!(Stage::parse("publication_tender"), None);
    }

    #[test]
    fn stage_serializes_as_camel_case() {
        let json = serde_json::to_string(&Stage::PublicationTender).unwrap();
        assert_eq!(json, "\"publicationTender\"");
    }
}
