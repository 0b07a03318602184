use super::ColumnType::*;
use super::{Column, Entity};

pub static PAYMENTS: Entity = Entity {
    name: "Payment",
    path: "payments",
    table: "payments",
    key: "PaymentId",
    columns: &[
        Column::new("SaleId", Int),
        Column::new("BuyerId", Int).required(),
        Column::new("Amount", Decimal).required(),
        Column::new("CurrencyId", Int),
        Column::new("PaymentMethodId", Int),
        Column::new("PaymentDate", Date),
        Column::new("Reference", Text),
        Column::new("Status", Text),
    ],
    list_limit: None,
    lookups: &[],
};

pub static GROWER_PAYMENTS: Entity = Entity {
    name: "Grower payment",
    path: "grower_payments",
    table: "grower_payments",
    key: "id",
    columns: &[
        Column::new("GrowerId", Int).required(),
        Column::new("SeasonId", Int).required(),
        Column::new("Amount", Decimal).required(),
        Column::new("BankAccountId", Int),
        Column::new("PaymentDate", Date),
        Column::new("Reference", Text),
    ],
    list_limit: None,
    lookups: &[],
};

pub static INVOICES: Entity = Entity {
    name: "Invoice",
    path: "invoices",
    table: "invoices",
    key: "InvoiceId",
    columns: &[
        Column::new("InvoiceNo", Text).required(),
        Column::new("BuyerId", Int).required(),
        Column::new("SaleId", Int),
        Column::new("InvoiceDate", Date),
        Column::new("DueDate", Date),
        Column::new("Amount", Decimal),
        Column::new("IsPaid", Flag),
    ],
    list_limit: None,
    lookups: &[],
};

pub static BANKS: Entity = Entity {
    name: "Bank",
    path: "banks",
    table: "banks",
    key: "BankId",
    columns: &[
        Column::new("BankName", Text).required(),
        Column::new("SwiftCode", Text),
        Column::new("BranchName", Text),
    ],
    list_limit: None,
    lookups: &[],
};

pub static BANK_ACCOUNTS: Entity = Entity {
    name: "Bank account",
    path: "bank_accounts",
    table: "bank_accounts",
    key: "id",
    columns: &[
        Column::new("BankId", Int).required(),
        Column::new("AccountName", Text),
        Column::new("AccountNo", Text).required(),
        Column::new("OwnerType", Text),
        Column::new("OwnerId", Int),
    ],
    list_limit: None,
    lookups: &[],
};

pub static DEDUCTIONS: Entity = Entity {
    name: "Deduction",
    path: "deductions",
    table: "deductions",
    key: "DeductionId",
    columns: &[
        Column::new("Name", Text).required(),
        Column::new("Rate", Decimal),
        Column::new("IsPercentage", Flag),
    ],
    list_limit: None,
    lookups: &[],
};

pub static GROWER_DEDUCTIONS: Entity = Entity {
    name: "Grower deduction",
    path: "grower_deductions",
    table: "grower_deductions",
    key: "id",
    columns: &[
        Column::new("GrowerId", Int).required(),
        Column::new("DeductionId", Int).required(),
        Column::new("SeasonId", Int),
        Column::new("Amount", Decimal),
    ],
    list_limit: None,
    lookups: &[],
};

pub static ADVANCES: Entity = Entity {
    name: "Advance",
    path: "advances",
    table: "advances",
    key: "AdvanceId",
    columns: &[
        Column::new("GrowerId", Int).required(),
        Column::new("SeasonId", Int),
        Column::new("Amount", Decimal).required(),
        Column::new("AdvanceDate", Date),
        Column::new("IsRecovered", Flag),
    ],
    list_limit: None,
    lookups: &[],
};
