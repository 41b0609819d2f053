use sea_orm_migration::prelude::*;

// Upstream links in the first half of the chain use SET NULL on parent
// delete: the downstream record survives with its back-reference cleared.
// The execution stages (second migration) cascade instead.

#[derive(DeriveIden)]
enum Identification {
    Table,
    Id,
    Division,
    FinancialYear,
    ManagerName,
    ManagerEmail,
    ManagerPhone,
    ContractManagerName,
    TenderTitle,
    Category,
    Quantity,
    Budget,
    EstimatedAmount,
    TechnicalSpecification,
    MarketSurveyReport,
    TimelineForDelivery,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Planning {
    Table,
    Id,
    TenderTitle,
    TenderFinalGivenTitle,
    TenderMethods,
    EstimatedBudget,
    TenderType,
    FrameworkType,
    PlannedDocumentPreparationDate,
    PlannedPublicationDate,
    PlannedBidOpeningDate,
    PlannedEvaluationDate,
    PlannedNotificationDate,
    PlannedContractClosureDate,
    PlanningStatus,
    IdentificationId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Publication {
    Table,
    Id,
    TenderTitle,
    InitialProcurementPlanPublication,
    QuarterTwoProcurementPlan,
    QuarterThreeProcurementPlan,
    Revision,
    TatPublication,
    PlanningId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PublicationTender {
    Table,
    Id,
    TenderTitle,
    DateOfPreparationOfBiddingDocument,
    DateOfSubmissionToCommittee,
    DateOfCbmApproval,
    DateOfTenderPublication,
    PublicationId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Identification::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Identification::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Identification::Division)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Identification::FinancialYear)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Identification::ManagerName)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Identification::ManagerEmail).string_len(320))
                    .col(ColumnDef::new(Identification::ManagerPhone).string_len(64))
                    .col(ColumnDef::new(Identification::ContractManagerName).string_len(256))
                    .col(
                        ColumnDef::new(Identification::TenderTitle)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Identification::Category)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Identification::Quantity)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Identification::Budget).double().not_null())
                    .col(
                        ColumnDef::new(Identification::EstimatedAmount)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Identification::TechnicalSpecification)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Identification::MarketSurveyReport).text())
                    .col(
                        ColumnDef::new(Identification::TimelineForDelivery)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Identification::Status)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Identification::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Identification::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_identification_division")
                    .table(Identification::Table)
                    .col(Identification::Division)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_identification_status")
                    .table(Identification::Table)
                    .col(Identification::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planning::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planning::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Planning::TenderTitle)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Planning::TenderFinalGivenTitle).string_len(512))
                    .col(
                        ColumnDef::new(Planning::TenderMethods)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Planning::EstimatedBudget).double().not_null())
                    .col(
                        ColumnDef::new(Planning::TenderType)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Planning::FrameworkType).string_len(128))
                    .col(ColumnDef::new(Planning::PlannedDocumentPreparationDate).date())
                    .col(ColumnDef::new(Planning::PlannedPublicationDate).date())
                    .col(ColumnDef::new(Planning::PlannedBidOpeningDate).date())
                    .col(ColumnDef::new(Planning::PlannedEvaluationDate).date())
                    .col(ColumnDef::new(Planning::PlannedNotificationDate).date())
                    .col(ColumnDef::new(Planning::PlannedContractClosureDate).date())
                    .col(
                        ColumnDef::new(Planning::PlanningStatus)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Planning::IdentificationId).integer())
                    .col(
                        ColumnDef::new(Planning::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Planning::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_planning_identification")
                            .from(Planning::Table, Planning::IdentificationId)
                            .to(Identification::Table, Identification::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_planning_identification")
                    .table(Planning::Table)
                    .col(Planning::IdentificationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Publication::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Publication::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Publication::TenderTitle)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Publication::InitialProcurementPlanPublication).date())
                    .col(ColumnDef::new(Publication::QuarterTwoProcurementPlan).date())
                    .col(ColumnDef::new(Publication::QuarterThreeProcurementPlan).date())
                    .col(ColumnDef::new(Publication::Revision).text())
                    .col(ColumnDef::new(Publication::TatPublication).integer())
                    .col(ColumnDef::new(Publication::PlanningId).integer())
                    .col(
                        ColumnDef::new(Publication::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Publication::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publication_planning")
                            .from(Publication::Table, Publication::PlanningId)
                            .to(Planning::Table, Planning::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_publication_planning")
                    .table(Publication::Table)
                    .col(Publication::PlanningId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PublicationTender::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PublicationTender::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PublicationTender::TenderTitle)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PublicationTender::DateOfPreparationOfBiddingDocument).date())
                    .col(ColumnDef::new(PublicationTender::DateOfSubmissionToCommittee).date())
                    .col(ColumnDef::new(PublicationTender::DateOfCbmApproval).date())
                    .col(ColumnDef::new(PublicationTender::DateOfTenderPublication).date())
                    .col(ColumnDef::new(PublicationTender::PublicationId).integer())
                    .col(
                        ColumnDef::new(PublicationTender::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PublicationTender::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publication_tender_publication")
                            .from(PublicationTender::Table, PublicationTender::PublicationId)
                            .to(Publication::Table, Publication::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_publication_tender_publication")
                    .table(PublicationTender::Table)
                    .col(PublicationTender::PublicationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PublicationTender::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Publication::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planning::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Identification::Table).to_owned())
            .await?;
        Ok(())
    }
}
