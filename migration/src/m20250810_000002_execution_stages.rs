use sea_orm_migration::prelude::*;

// Execution stages cascade on parent delete, unlike the chain prefix
// where back-references are cleared instead. The split is a deliberate
// per-relationship policy.

#[derive(DeriveIden)]
enum PublicationTender {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum OpenBid {
    Table,
    Id,
    TenderTitle,
    BidOpeningDate,
    NumberOfBidsReceived,
    BidOpeningStatus,
    PublicationTenderId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BidEvaluation {
    Table,
    Id,
    TenderTitle,
    BidEvaluationDate,
    EvaluationCommittee,
    EvaluatedAmount,
    EvaluationStatus,
    OpeningBidId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContractSigning {
    Table,
    Id,
    TenderTitle,
    ContractAwardDate,
    ContractSigningDate,
    ContractAmount,
    VendorName,
    SigningStatus,
    BidEvaluationId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContractManagement {
    Table,
    Id,
    TenderTitle,
    TenderExecutionStartDate,
    TenderExecutionEndDate,
    ActualDeliveryDate,
    ManagementStatus,
    ContractSigningId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Invoice {
    Table,
    Id,
    TenderTitle,
    InvoiceNumber,
    InvoiceDate,
    InvoiceAmount,
    PaymentDate,
    PaymentStatus,
    ContractManagementId,
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
                    .table(OpenBid::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OpenBid::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OpenBid::TenderTitle).string_len(512).not_null())
                    .col(ColumnDef::new(OpenBid::BidOpeningDate).date())
                    .col(ColumnDef::new(OpenBid::NumberOfBidsReceived).integer())
                    .col(
                        ColumnDef::new(OpenBid::BidOpeningStatus)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(OpenBid::PublicationTenderId).integer())
                    .col(
                        ColumnDef::new(OpenBid::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OpenBid::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_open_bid_publication_tender")
                            .from(OpenBid::Table, OpenBid::PublicationTenderId)
                            .to(PublicationTender::Table, PublicationTender::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_open_bid_publication_tender")
                    .table(OpenBid::Table)
                    .col(OpenBid::PublicationTenderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BidEvaluation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BidEvaluation::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BidEvaluation::TenderTitle)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BidEvaluation::BidEvaluationDate).date())
                    .col(ColumnDef::new(BidEvaluation::EvaluationCommittee).string_len(256))
                    .col(ColumnDef::new(BidEvaluation::EvaluatedAmount).double())
                    .col(
                        ColumnDef::new(BidEvaluation::EvaluationStatus)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BidEvaluation::OpeningBidId).integer())
                    .col(
                        ColumnDef::new(BidEvaluation::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BidEvaluation::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_evaluation_open_bid")
                            .from(BidEvaluation::Table, BidEvaluation::OpeningBidId)
                            .to(OpenBid::Table, OpenBid::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bid_evaluation_open_bid")
                    .table(BidEvaluation::Table)
                    .col(BidEvaluation::OpeningBidId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContractSigning::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContractSigning::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContractSigning::TenderTitle)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContractSigning::ContractAwardDate).date())
                    .col(ColumnDef::new(ContractSigning::ContractSigningDate).date())
                    .col(ColumnDef::new(ContractSigning::ContractAmount).double())
                    .col(ColumnDef::new(ContractSigning::VendorName).string_len(256))
                    .col(
                        ColumnDef::new(ContractSigning::SigningStatus)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContractSigning::BidEvaluationId).integer())
                    .col(
                        ColumnDef::new(ContractSigning::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContractSigning::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contract_signing_bid_evaluation")
                            .from(ContractSigning::Table, ContractSigning::BidEvaluationId)
                            .to(BidEvaluation::Table, BidEvaluation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contract_signing_bid_evaluation")
                    .table(ContractSigning::Table)
                    .col(ContractSigning::BidEvaluationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContractManagement::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContractManagement::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContractManagement::TenderTitle)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContractManagement::TenderExecutionStartDate).date())
                    .col(ColumnDef::new(ContractManagement::TenderExecutionEndDate).date())
                    .col(ColumnDef::new(ContractManagement::ActualDeliveryDate).date())
                    .col(
                        ColumnDef::new(ContractManagement::ManagementStatus)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContractManagement::ContractSigningId).integer())
                    .col(
                        ColumnDef::new(ContractManagement::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContractManagement::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contract_management_contract_signing")
                            .from(
                                ContractManagement::Table,
                                ContractManagement::ContractSigningId,
                            )
                            .to(ContractSigning::Table, ContractSigning::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contract_management_contract_signing")
                    .table(ContractManagement::Table)
                    .col(ContractManagement::ContractSigningId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Invoice::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Invoice::TenderTitle).string_len(512).not_null())
                    .col(
                        ColumnDef::new(Invoice::InvoiceNumber)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Invoice::InvoiceDate).date())
                    .col(ColumnDef::new(Invoice::InvoiceAmount).double().not_null())
                    .col(ColumnDef::new(Invoice::PaymentDate).date())
                    .col(
                        ColumnDef::new(Invoice::PaymentStatus)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Invoice::ContractManagementId).integer())
                    .col(
                        ColumnDef::new(Invoice::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Invoice::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_contract_management")
                            .from(Invoice::Table, Invoice::ContractManagementId)
                            .to(ContractManagement::Table, ContractManagement::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_invoice_contract_management")
                    .table(Invoice::Table)
                    .col(Invoice::ContractManagementId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContractManagement::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ContractSigning::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BidEvaluation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OpenBid::Table).to_owned())
            .await?;
        Ok(())
    }
}
